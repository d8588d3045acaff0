use std::error::Error;

use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, ParseMode};

use crate::engine::{Reply, TextFormat};
use crate::models::Action;

pub type HandlerResult = Result<(), Box<dyn Error + Send + Sync>>;

/// Main menu: the three categories, Total, Help and Reset.
pub fn main_menu_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(Action::MENU.map(|row| {
        row.map(|action| {
            InlineKeyboardButton::callback(action.button_label(), action.callback_data())
        })
    }))
}

/// Sends a reply. Failures are logged and swallowed so one undeliverable
/// message never fails the update.
pub async fn send_reply(bot: &Bot, chat_id: ChatId, reply: Reply) {
    let mut request = bot.send_message(chat_id, reply.text);
    if reply.format == TextFormat::MarkdownV2 {
        request = request.parse_mode(ParseMode::MarkdownV2);
    }
    if reply.menu {
        request = request.reply_markup(main_menu_keyboard());
    }

    match request.await {
        Ok(_) => log::debug!("📤 Reply sent to chat {}", chat_id),
        Err(e) => log::error!("❌ Failed to send reply to chat {}: {}", chat_id, e),
    }
}
