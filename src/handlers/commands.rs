use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::bot_state::BotState;
use crate::engine::{reply, ControlCommand, Event};
use crate::handlers::utils::{send_reply, HandlerResult};

#[derive(BotCommands, Clone, Copy, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Arahan yang tersedia:")]
pub enum Command {
    #[command(description = "mula semula dan masukkan rate sejam")]
    Start,
    #[command(description = "cara guna")]
    Help,
    #[command(description = "kosongkan semua kiraan dan rate")]
    Reset,
    #[command(description = "semak sama ada bot hidup")]
    Ping,
}

impl From<Command> for ControlCommand {
    fn from(command: Command) -> Self {
        match command {
            Command::Start => ControlCommand::Start,
            Command::Help => ControlCommand::Help,
            Command::Reset => ControlCommand::Reset,
            Command::Ping => ControlCommand::Ping,
        }
    }
}

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: BotState,
) -> HandlerResult {
    let chat_id = msg.chat.id;
    log::info!("📥 Command {:?} from chat {}", cmd, chat_id);

    let reply = match cmd {
        Command::Start | Command::Reset => state.reset(chat_id).await,
        // Liveness probe: answer without touching any session.
        Command::Ping => reply::pong(),
        Command::Help => state.dispatch(chat_id, Event::Command(cmd.into())).await,
    };

    send_reply(&bot, chat_id, reply).await;
    Ok(())
}
