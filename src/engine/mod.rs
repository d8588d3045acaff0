//! Per-chat conversation state machine.
//!
//! [`handle`] is pure: it mutates the session it is given and returns the
//! single reply to send. Delivery is up to the caller.

pub mod reply;


use crate::calculator::{self, input, input::InputError};
use crate::models::{Action, Category, ChatState, Rate, Session, Totals};

pub use reply::{Reply, TextFormat};

/// Slash commands recognised in every state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    Start,
    Help,
    Reset,
    Ping,
}

impl ControlCommand {
    /// Recognises `/start`, `/PING extra` and so on.
    ///
    /// Addressed commands such as `/reset@SomeBot` are not recognised here:
    /// the dispatcher's command filter already accepts the ones naming this
    /// bot, so any that reach the engine as text are meant for another bot.
    pub fn parse(text: &str) -> Option<Self> {
        let word = text.split_whitespace().next()?.strip_prefix('/')?;
        if word.contains('@') {
            return None;
        }
        match word.to_lowercase().as_str() {
            "start" => Some(ControlCommand::Start),
            "help" => Some(ControlCommand::Help),
            "reset" => Some(ControlCommand::Reset),
            "ping" => Some(ControlCommand::Ping),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Command(ControlCommand),
    Text(String),
    Button(Action),
}

pub fn handle(session: &mut Session, event: Event) -> Reply {
    match event {
        Event::Command(command) => control(session, command),
        Event::Button(action) => press(session, action),
        Event::Text(text) => match ControlCommand::parse(&text) {
            Some(command) => control(session, command),
            None => receive(session, text.trim()),
        },
    }
}

/// Replaces the session with a fresh one and asks for the rate.
pub fn restart(session: &mut Session) -> Reply {
    *session = Session::default();
    reply::rate_prompt()
}

fn control(session: &mut Session, command: ControlCommand) -> Reply {
    match command {
        ControlCommand::Start | ControlCommand::Reset => restart(session),
        ControlCommand::Help => reply::help(),
        ControlCommand::Ping => reply::pong(),
    }
}

fn press(session: &mut Session, action: Action) -> Reply {
    match action {
        Action::Help => reply::help(),
        Action::Reset => restart(session),
        Action::Total | Action::Category(_) => {
            let Some(rate) = session.state.rate() else {
                return reply::rate_first();
            };
            match action {
                Action::Category(category) => {
                    session.state = ChatState::AwaitingInput { rate, category };
                    reply::category_prompt(category)
                }
                _ => {
                    session.state = ChatState::Idle { rate };
                    reply::summary(&session.totals)
                }
            }
        }
    }
}

fn receive(session: &mut Session, text: &str) -> Reply {
    match session.state {
        ChatState::AwaitingRate => match input::parse_rate(text) {
            Ok(rate) => {
                session.state = ChatState::Idle { rate };
                reply::rate_set(rate)
            }
            Err(e) => {
                log::debug!("Rejected rate input {:?}: {}", text, e);
                reply::rate_invalid(&e)
            }
        },
        ChatState::Idle { .. } => reply::menu(),
        ChatState::AwaitingInput { rate, category } => {
            // Any outcome ends the prompt; a retry needs a fresh button press.
            session.state = ChatState::Idle { rate };
            accumulate(&mut session.totals, rate, category, text).unwrap_or_else(|e| {
                log::debug!("Rejected {} input {:?}: {}", category.label(), text, e);
                reply::format_error(&e)
            })
        }
    }
}

fn accumulate(
    totals: &mut Totals,
    rate: Rate,
    category: Category,
    text: &str,
) -> Result<Reply, InputError> {
    let (amount, message) = match category {
        Category::Weekday => {
            let breakdown = calculator::weekday_breakdown(rate, input::parse_weekday_days(text)?);
            (breakdown.total, reply::weekday(&breakdown))
        }
        Category::Weekend => {
            let days = input::parse_days(text)?;
            let amount = calculator::weekend_pay(rate, days);
            (amount, reply::weekend(days, amount))
        }
        Category::Holiday => {
            let hours = input::parse_hours(text)?;
            let amount = calculator::holiday_pay(rate, hours);
            (amount, reply::holiday(hours, amount))
        }
    };
    totals.add(category, amount);
    Ok(message)
}
