use std::convert::Infallible;
use std::error::Error;
use std::net::SocketAddr;

use axum::routing::get;
use axum::Router;
use teloxide::prelude::*;
use teloxide::update_listeners::{webhooks, UpdateListener};
use url::Url;

pub const LIVENESS_TEXT: &str = "Bot is running!";

async fn liveness_handler() -> &'static str {
    LIVENESS_TEXT
}

pub fn liveness_router() -> Router {
    Router::new().route("/", get(liveness_handler))
}

/// Registers the webhook with Telegram and serves it next to the liveness
/// route. The webhook route answers 200 for every update it accepts; handler
/// failures stay inside the dispatcher.
pub async fn start_webhook(
    bot: Bot,
    address: SocketAddr,
    url: Url,
) -> Result<impl UpdateListener<Err = Infallible>, Box<dyn Error + Send + Sync>> {
    let webhook_path = url.path().to_string();
    let options = webhooks::Options::new(address, url);
    let (listener, stop_flag, webhook_router) = webhooks::axum_to_router(bot, options).await?;

    let app = liveness_router().merge(webhook_router);
    let tcp = tokio::net::TcpListener::bind(address).await?;
    log::info!("🌐 Listening on {} (webhook at {})", address, webhook_path);

    tokio::spawn(async move {
        if let Err(e) = axum::serve(tcp, app).with_graceful_shutdown(stop_flag).await {
            log::error!("❌ HTTP server error: {}", e);
        }
    });

    Ok(listener)
}
