use teloxide::prelude::*;

use crate::bot_state::BotState;
use crate::engine::Event;
use crate::handlers::utils::{send_reply, HandlerResult};

pub async fn message_handler(bot: Bot, msg: Message, state: BotState) -> HandlerResult {
    let chat_id = msg.chat.id;
    // Stickers, photos and the like count as empty input.
    let text = msg.text().unwrap_or_default().to_string();
    log::debug!("🔎 Message from chat {}: {:?}", chat_id, text);

    let reply = state.dispatch(chat_id, Event::Text(text)).await;
    send_reply(&bot, chat_id, reply).await;
    Ok(())
}
