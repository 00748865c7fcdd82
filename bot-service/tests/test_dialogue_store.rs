use anyhow::Result;
use bot_service::state::State;
use teloxide::dispatching::dialogue::{Dialogue, InMemStorage};
use teloxide::types::ChatId;

type IntakeDialogue = Dialogue<State, InMemStorage<State>>;

#[tokio::test]
async fn test_fresh_chat_has_no_session() -> Result<()> {
    let storage = InMemStorage::<State>::new();
    let dialogue = IntakeDialogue::new(storage, ChatId(42));

    assert_eq!(dialogue.get().await?, None);
    assert_eq!(dialogue.get_or_default().await?, State::Idle);

    Ok(())
}

#[tokio::test]
async fn test_sessions_are_isolated_per_chat() -> Result<()> {
    let storage = InMemStorage::<State>::new();
    let alice = IntakeDialogue::new(storage.clone(), ChatId(1));
    let bob = IntakeDialogue::new(storage, ChatId(2));

    alice
        .update(State::AwaitingAbout {
            email: "a@x.com".to_string(),
        })
        .await?;

    assert_eq!(bob.get().await?, None);

    bob.update(State::AwaitingEmail).await?;

    assert_eq!(
        alice.get().await?,
        Some(State::AwaitingAbout {
            email: "a@x.com".to_string(),
        })
    );
    assert_eq!(bob.get().await?, Some(State::AwaitingEmail));

    Ok(())
}

#[tokio::test]
async fn test_answers_accumulate_along_the_flow() -> Result<()> {
    let storage = InMemStorage::<State>::new();
    let dialogue = IntakeDialogue::new(storage, ChatId(3));

    dialogue.update(State::AwaitingEmail).await?;
    dialogue
        .update(State::AwaitingAbout {
            email: "bob@example.com".to_string(),
        })
        .await?;
    dialogue
        .update(State::AwaitingWish {
            email: "bob@example.com".to_string(),
            about: "I design lamps".to_string(),
        })
        .await?;
    dialogue
        .update(State::AwaitingActivityCheck {
            email: "bob@example.com".to_string(),
            about: "I design lamps".to_string(),
            wish: "A new workshop".to_string(),
        })
        .await?;

    assert_eq!(
        dialogue.get().await?,
        Some(State::AwaitingActivityCheck {
            email: "bob@example.com".to_string(),
            about: "I design lamps".to_string(),
            wish: "A new workshop".to_string(),
        })
    );

    Ok(())
}

#[tokio::test]
async fn test_restart_discards_partial_answers() -> Result<()> {
    let storage = InMemStorage::<State>::new();
    let dialogue = IntakeDialogue::new(storage, ChatId(4));

    dialogue
        .update(State::AwaitingWish {
            email: "bob@example.com".to_string(),
            about: "I design lamps".to_string(),
        })
        .await?;

    dialogue.update(State::Idle).await?;

    assert_eq!(dialogue.get().await?, Some(State::Idle));

    Ok(())
}

#[tokio::test]
async fn test_completed_session_is_removed() -> Result<()> {
    let storage = InMemStorage::<State>::new();
    let dialogue = IntakeDialogue::new(storage, ChatId(5));

    dialogue
        .update(State::AwaitingActivityCheck {
            email: "bob@example.com".to_string(),
            about: "I design lamps".to_string(),
            wish: "A new workshop".to_string(),
        })
        .await?;

    dialogue.exit().await?;

    assert_eq!(dialogue.get().await?, None);
    assert_eq!(dialogue.get_or_default().await?, State::Idle);

    Ok(())
}
