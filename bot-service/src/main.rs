use bot_service::state::State;
use bot_service::telegram::handlers::{self, Command};
use shared::{BotConfig, ServiceError};
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    shared::init_tracing("bot-service")?;

    let config = BotConfig::from_env()?;

    tracing::info!("Starting wish intake bot...");
    tracing::info!("Configuration:");
    tracing::info!(
        "  Admin delivery: {}",
        if config.admin_chat_id.is_some() {
            "enabled"
        } else {
            "disabled"
        }
    );
    tracing::info!(
        "  Subscription check: {}",
        if config.channel_id.is_some() {
            "enabled"
        } else {
            "disabled"
        }
    );
    tracing::info!("  Site URL: {}", config.site_url);
    tracing::info!("  Channel invite URL: {}", config.channel_invite_url);

    let bot = Bot::new(config.token.clone());

    match bot.get_me().await {
        Ok(me) => tracing::info!("Bot username: @{}", me.username()),
        Err(e) => tracing::warn!("Failed to fetch bot identity (will keep polling): {}", e),
    }

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![InMemStorage::<State>::new(), config])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

fn schema() -> UpdateHandler<ServiceError> {
    let message_handler = Update::filter_message()
        .enter_dialogue::<Update, InMemStorage<State>, State>()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handlers::handle_command),
        )
        .branch(dptree::case![State::AwaitingEmail].endpoint(handlers::handle_email_input))
        .branch(dptree::case![State::AwaitingAbout { email }].endpoint(handlers::handle_about_input))
        .branch(
            dptree::case![State::AwaitingWish { email, about }]
                .endpoint(handlers::handle_wish_input),
        )
        .endpoint(handlers::handle_unexpected_message);

    let callback_handler = Update::filter_callback_query()
        .enter_dialogue::<Update, InMemStorage<State>, State>()
        .branch(dptree::case![State::Idle].endpoint(handlers::handle_join))
        .branch(
            dptree::case![State::AwaitingActivityCheck { email, about, wish }]
                .endpoint(handlers::handle_activity_check),
        )
        .endpoint(handlers::handle_unexpected_callback);

    dptree::entry()
        .branch(message_handler)
        .branch(callback_handler)
}
