use tracing::{debug, info, warn};

use mz_chat::ChatBackend;
use mz_store::Store;

use crate::commands::parse::detect_command;
use crate::commands::task::route_task_command;
use crate::context::AppContext;

/// Outcome of one line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// End the session after showing this farewell.
    Exit(String),
    /// Show this text and keep going.
    Reply(String),
}

/// Process one line of input against the store.
///
/// `exit` (any case) ends the session without touching the store. `/task`
/// commands go to the task router and leave the transcript alone. Everything
/// else is a conversation turn: the user message and the reply are both
/// appended, and a backend failure becomes the reply text.
pub async fn handle_turn<C: ChatBackend>(
    input: &str,
    store: &mut Store,
    ctx: &AppContext<C>,
) -> Turn {
    let input = input.trim();

    if input.eq_ignore_ascii_case("exit") {
        return Turn::Exit(String::from("Goodbye!"));
    }

    if let Some(command) = detect_command(input)
        && command.name == "task"
    {
        debug!(args = ?command.args, "task command");
        return Turn::Reply(route_task_command(&command.args, store));
    }

    store.record_user(input);
    let reply = match ctx.chat.reply(store.transcript()).await {
        Ok(text) => text,
        Err(error) => {
            warn!(%error, "chat backend failed");
            format!("Sorry, I encountered an error: {error}")
        }
    };
    store.record_assistant(reply.clone());
    info!(messages = store.transcript().len(), "conversation turn stored");

    Turn::Reply(reply)
}
