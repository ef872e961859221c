//! The interactive read-eval loop.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};

use mz_chat::ChatBackend;
use mz_store::Store;

use crate::commands::dispatch::{Turn, handle_turn};
use crate::context::AppContext;

const PROMPT: &str = "You: ";

/// Read lines from `input` until `exit` or end of input, answering on
/// `output`.
///
/// Each turn is fully handled and saved before the next line is read. A save
/// failure or an undecodable line is reported and the session continues.
/// Returns the final store.
pub async fn run<C, R, W>(
    ctx: &AppContext<C>,
    mut store: Store,
    mut input: R,
    output: &mut W,
) -> std::io::Result<Store>
where
    C: ChatBackend,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();

    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            output.write_all(b"\n").await?;
            info!("end of input; session closed");
            break;
        }
        let Ok(line) = std::str::from_utf8(&buf) else {
            warn!(bytes = buf.len(), "input line is not valid UTF-8");
            output
                .write_all(b"MZ: (could not read that line: it is not valid UTF-8)\n")
                .await?;
            continue;
        };
        if line.trim().is_empty() {
            continue;
        }

        let turn = handle_turn(line, &mut store, ctx).await;
        let (text, finished) = match turn {
            Turn::Exit(farewell) => (farewell, true),
            Turn::Reply(reply) => (reply, false),
        };
        output.write_all(format!("MZ: {text}\n").as_bytes()).await?;

        if let Err(error) = ctx.memory.save(&store) {
            warn!(%error, "failed to save memory");
            output
                .write_all(format!("MZ: (could not save memory: {error})\n").as_bytes())
                .await?;
        }

        if finished {
            info!("session ended by user");
            break;
        }
    }

    output.flush().await?;
    Ok(store)
}
