use anyhow::Context;
use clap::Parser;

use mz_chat::AnthropicClient;
use mz_store::MemoryFile;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod logging;
mod repl;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("mz error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let config = bootstrap::load_config(&cli)?;
    let _log_guard = logging::init_tracing(&config.logging, cli.debug)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting MZ");
    bootstrap::ensure_ready(&config)?;

    let chat = AnthropicClient::from_config(&config.llm)
        .context("failed to initialize chat client")?;
    let memory_path = cli
        .memory
        .clone()
        .unwrap_or_else(|| config.storage.memory_path.clone());
    let ctx = context::AppContext::new(chat, MemoryFile::new(memory_path));

    tracing::info!(
        memory = %ctx.memory.path().display(),
        model = ctx.chat.model(),
        "session context ready"
    );
    let store = ctx.memory.load();
    println!("MZ v{} initialized.", env!("CARGO_PKG_VERSION"));

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    repl::run(&ctx, store, stdin, &mut stdout)
        .await
        .context("terminal I/O failed")?;

    Ok(())
}
