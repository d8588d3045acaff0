use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use overtime_bot::bot_state::BotState;
use overtime_bot::config::Config;
use overtime_bot::handlers::{self, Command};
use overtime_bot::server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Starting overtime bot...");

    let config = Config::from_env()?;
    let bot = Bot::new(&config.bot_token);

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        log::warn!("⚠️ Could not register bot commands: {}", e);
    }

    let state = BotState::new();

    let mut dispatcher = Dispatcher::builder(bot.clone(), handlers::schema())
        .dependencies(dptree::deps![state])
        .error_handler(LoggingErrorHandler::with_custom_text(
            "❌ Error while handling an update",
        ))
        .enable_ctrlc_handler()
        .build();

    match config.webhook_url {
        Some(url) => {
            let listener = server::start_webhook(bot, config.address, url).await?;
            log::info!("🚀 Starting dispatcher in webhook mode...");
            dispatcher
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("❌ Error from the webhook listener"),
                )
                .await;
        }
        None => {
            log::info!("🚀 WEBHOOK_URL not set, starting dispatcher with long polling...");
            dispatcher.dispatch().await;
        }
    }

    Ok(())
}
