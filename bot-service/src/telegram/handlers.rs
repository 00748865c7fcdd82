use crate::membership;
use crate::state::State;
use crate::telegram::{
    activity_prompt, format_submission_notification, make_activity_keyboard, make_join_keyboard,
    welcome_message,
};
use once_cell::sync::Lazy;
use regex::Regex;
use shared::errors::{Result, ServiceError};
use shared::{BotConfig, Submission};
use teloxide::{
    dispatching::dialogue::InMemStorage,
    prelude::*,
    types::{CallbackQuery, Message, User},
    utils::command::BotCommands,
};

pub type MyDialogue = Dialogue<State, InMemStorage<State>>;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern must compile")
});

fn map_teloxide_err<E: std::fmt::Display>(e: E) -> ServiceError {
    ServiceError::Telegram(e.to_string())
}

fn map_dialogue_err<E: std::fmt::Display>(e: E) -> ServiceError {
    ServiceError::Internal(format!("Failed to update dialogue: {}", e))
}

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "Start registration from the beginning")]
    Start,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub async fn handle_command(
    bot: Bot,
    msg: Message,
    dialogue: MyDialogue,
    cmd: Command,
) -> Result<()> {
    match cmd {
        Command::Start => handle_start(bot, msg, dialogue).await,
    }
}

async fn handle_start(bot: Bot, msg: Message, dialogue: MyDialogue) -> Result<()> {
    // Restart from scratch, discarding anything collected so far.
    dialogue
        .update(State::Idle)
        .await
        .map_err(map_dialogue_err)?;

    bot.send_message(msg.chat.id, welcome_message())
        .reply_markup(make_join_keyboard())
        .await
        .map_err(map_teloxide_err)?;

    Ok(())
}

pub async fn handle_join(bot: Bot, q: CallbackQuery, dialogue: MyDialogue) -> Result<()> {
    if q.data.as_deref() == Some("join") {
        if let Some(msg) = &q.message {
            let chat = msg.chat();

            dialogue
                .update(State::AwaitingEmail)
                .await
                .map_err(map_dialogue_err)?;

            bot.send_message(
                chat.id,
                "Great!\nTo confirm your entry, please share your email 👇",
            )
            .await
            .map_err(map_teloxide_err)?;
        }
    }

    bot.answer_callback_query(q.id)
        .await
        .map_err(map_teloxide_err)?;

    Ok(())
}

pub async fn handle_email_input(bot: Bot, msg: Message, dialogue: MyDialogue) -> Result<()> {
    let email = match msg.text() {
        Some(text) => text.trim().to_string(),
        None => return Ok(()),
    };

    if !is_valid_email(&email) {
        bot.send_message(
            msg.chat.id,
            "❌ That does not look like a valid email, please try again!",
        )
        .await
        .map_err(map_teloxide_err)?;
        return Ok(());
    }

    dialogue
        .update(State::AwaitingAbout { email })
        .await
        .map_err(map_dialogue_err)?;

    bot.send_message(
        msg.chat.id,
        "Thank you! ✔️\n\n\
        Now tell us a bit about yourself: what do you do?\n\
        Work, hobbies, passions, anything you like",
    )
    .await
    .map_err(map_teloxide_err)?;

    Ok(())
}

pub async fn handle_about_input(
    bot: Bot,
    msg: Message,
    dialogue: MyDialogue,
    email: String,
) -> Result<()> {
    let about = match msg.text() {
        Some(text) => text.trim().to_string(),
        None => return Ok(()),
    };

    dialogue
        .update(State::AwaitingWish { email, about })
        .await
        .map_err(map_dialogue_err)?;

    bot.send_message(
        msg.chat.id,
        "Awesome! ✨\n\n\
        And now the important part: what is the one wish you would like us \
        to grant?\n\n\
        Write down exactly what you want to get 🎁",
    )
    .await
    .map_err(map_teloxide_err)?;

    Ok(())
}

pub async fn handle_wish_input(
    bot: Bot,
    msg: Message,
    dialogue: MyDialogue,
    (email, about): (String, String),
    cfg: BotConfig,
) -> Result<()> {
    let wish = match msg.text() {
        Some(text) => text.trim().to_string(),
        None => return Ok(()),
    };

    dialogue
        .update(State::AwaitingActivityCheck { email, about, wish })
        .await
        .map_err(map_dialogue_err)?;

    bot.send_message(msg.chat.id, activity_prompt())
        .reply_markup(make_activity_keyboard(
            &cfg.site_url,
            &cfg.channel_invite_url,
        ))
        .await
        .map_err(map_teloxide_err)?;

    Ok(())
}

pub async fn handle_activity_check(
    bot: Bot,
    q: CallbackQuery,
    dialogue: MyDialogue,
    (email, about, wish): (String, String, String),
    cfg: BotConfig,
) -> Result<()> {
    if q.data.as_deref() == Some("check_active") {
        if let Some(msg) = &q.message {
            let chat = msg.chat();
            let user = &q.from;

            let subscribed = match cfg.channel_id {
                Some(channel_id) => membership::is_subscribed(&bot, channel_id, user.id).await,
                // No channel configured, nothing to enforce.
                None => true,
            };

            // Site activity cannot be verified from here, count it as done.
            let site_active = true;

            if !subscribed {
                bot.send_message(
                    chat.id,
                    "❌ Looks like you are not subscribed to our Telegram channel yet.\n\n\
                    Subscribe via the \"Telegram channel\" button above, then tap \
                    \"I've been active\" again. 💙",
                )
                .await
                .map_err(map_teloxide_err)?;
            } else if !site_active {
                bot.send_message(
                    chat.id,
                    "❌ Looks like you have not been active on the site yet. \
                    Open it via the site button and try again.",
                )
                .await
                .map_err(map_teloxide_err)?;
            } else {
                complete_registration(&bot, chat.id, user, &cfg, &dialogue, email, about, wish)
                    .await?;
            }
        }
    }

    bot.answer_callback_query(q.id)
        .await
        .map_err(map_teloxide_err)?;

    Ok(())
}

async fn complete_registration(
    bot: &Bot,
    chat_id: ChatId,
    user: &User,
    cfg: &BotConfig,
    dialogue: &MyDialogue,
    email: String,
    about: String,
    wish: String,
) -> Result<()> {
    bot.send_message(
        chat_id,
        "That's it! 🫶\nGood luck, and may the season treat you well 💙",
    )
    .await
    .map_err(map_teloxide_err)?;

    let submission = Submission {
        user_id: user.id.0,
        full_name: user.full_name(),
        username: user.username.clone(),
        email,
        about,
        wish,
    };

    if let Some(admin_chat_id) = cfg.admin_chat_id {
        let notification = format_submission_notification(&submission);
        if let Err(e) = bot.send_message(ChatId(admin_chat_id), notification).await {
            tracing::error!("Failed to deliver submission to admin: {}", e);
        }
    }

    tracing::info!(user_id = submission.user_id, "Registration completed");

    dialogue.exit().await.map_err(map_dialogue_err)?;

    Ok(())
}

pub async fn handle_unexpected_message() -> Result<()> {
    // Free text outside an input step carries no meaning, drop it.
    Ok(())
}

pub async fn handle_unexpected_callback(bot: Bot, q: CallbackQuery) -> Result<()> {
    // Ack so the client stops its spinner, otherwise ignore.
    bot.answer_callback_query(q.id)
        .await
        .map_err(map_teloxide_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_address() {
        assert!(is_valid_email("bob@example.com"));
    }

    #[test]
    fn test_accepts_tagged_address() {
        assert!(is_valid_email("user.name+tag@example.co"));
    }

    #[test]
    fn test_rejects_address_without_at() {
        assert!(!is_valid_email("not-an-email"));
    }

    #[test]
    fn test_rejects_domain_without_dot() {
        assert!(!is_valid_email("user@localhost"));
    }

    #[test]
    fn test_rejects_single_letter_top_level() {
        assert!(!is_valid_email("user@example.c"));
    }

    #[test]
    fn test_rejects_embedded_whitespace() {
        assert!(!is_valid_email("user name@example.com"));
    }

    #[test]
    fn test_rejects_empty_string() {
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_rejects_trailing_garbage() {
        assert!(!is_valid_email("user@example.com extra"));
    }
}
