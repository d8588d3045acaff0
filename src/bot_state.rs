use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use teloxide::types::ChatId;
use tokio::sync::RwLock;

use crate::engine::{self, Event, Reply};
use crate::models::Session;

type Sessions = Arc<RwLock<HashMap<ChatId, Session>>>;

/// In-memory session store shared by all handlers. Sessions live as long as
/// the process does.
#[derive(Clone, Default)]
pub struct BotState {
    sessions: Sessions,
}

impl BotState {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    async fn get_or_create(&self, chat_id: ChatId) -> Session {
        let mut sessions = self.sessions.write().await;
        *session_mut(&mut sessions, chat_id)
    }

    /// Replaces the chat's session with a fresh one and returns the rate prompt.
    pub async fn reset(&self, chat_id: ChatId) -> Reply {
        let mut sessions = self.sessions.write().await;
        log::info!("♻️ Session reset for chat {}", chat_id);
        engine::restart(session_mut(&mut sessions, chat_id))
    }

    /// Runs one engine step for the chat while holding the store lock, so
    /// concurrent updates for the same chat are applied one at a time.
    pub async fn dispatch(&self, chat_id: ChatId, event: Event) -> Reply {
        let start_time = Instant::now();
        let mut sessions = self.sessions.write().await;
        let session = session_mut(&mut sessions, chat_id);

        let before = session.state;
        let reply = engine::handle(session, event);

        log::debug!(
            "🎯 Chat {}: {:?} -> {:?} in {:?}",
            chat_id,
            before,
            session.state,
            start_time.elapsed()
        );
        reply
    }

    #[cfg(test)]
    async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

fn session_mut(sessions: &mut HashMap<ChatId, Session>, chat_id: ChatId) -> &mut Session {
    let active = sessions.len();
    sessions.entry(chat_id).or_insert_with(|| {
        log::info!("🆕 New session for chat {} ({} active)", chat_id, active + 1);
        Session::default()
    })
}
