use teloxide::prelude::*;

use crate::bot_state::BotState;
use crate::engine::Event;
use crate::handlers::utils::{send_reply, HandlerResult};
use crate::models::Action;

pub async fn callback_handler(bot: Bot, q: CallbackQuery, state: BotState) -> HandlerResult {
    // Stop the button's loading spinner whatever happens next.
    if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
        log::warn!("⚠️ Could not answer callback {}: {}", q.id, e);
    }

    let Some(message) = q.message.as_ref() else {
        log::warn!("⚠️ Callback {} arrived without its message", q.id);
        return Ok(());
    };
    let chat_id = message.chat().id;
    let data = q.data.as_deref().unwrap_or_default();

    match Action::from_callback_data(data) {
        Some(action) => {
            log::debug!("🔘 {:?} pressed in chat {}", action, chat_id);
            let reply = state.dispatch(chat_id, Event::Button(action)).await;
            send_reply(&bot, chat_id, reply).await;
        }
        None => log::warn!("⚠️ Unknown callback data {:?} from chat {}", data, chat_id),
    }

    Ok(())
}
