use std::path::PathBuf;

use clap::Parser;

use mz_config::DEFAULT_CONFIG_FILE;

/// Top-level CLI parser for the `mz` binary.
#[derive(Debug, Parser)]
#[command(
    name = "mz",
    version,
    about = "MZ - personal AI task assistant",
    after_help = "Inside the session:\n  /task add <description> [priority:high] [category:learning] [due:YYYY-MM-DD] [reason:word]\n  /task list\n  /task done <id>\n  /task delete <id>\n  exit"
)]
pub struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Debug logging (overrides the configured level)
    #[arg(long)]
    pub debug: bool,

    /// Memory file location (overrides storage.memory_path)
    #[arg(long, value_name = "PATH")]
    pub memory: Option<PathBuf>,
}

impl Cli {
    /// Config file to read, and whether it must exist.
    ///
    /// An explicit `--config` is required; the default file is optional.
    #[must_use]
    pub fn config_source(&self) -> (PathBuf, bool) {
        self.config.as_ref().map_or_else(
            || (PathBuf::from(DEFAULT_CONFIG_FILE), false),
            |path| (path.clone(), true),
        )
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::Cli;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_flags_uses_optional_default_config() {
        let cli = Cli::try_parse_from(["mz"]).expect("cli should parse");

        assert!(!cli.debug);
        assert!(cli.memory.is_none());
        assert_eq!(cli.config_source(), ("config.yaml".into(), false));
    }

    #[test]
    fn explicit_config_is_required() {
        let cli = Cli::try_parse_from(["mz", "--config", "settings/prod.yaml", "--debug"])
            .expect("cli should parse");

        assert!(cli.debug);
        assert_eq!(cli.config_source(), ("settings/prod.yaml".into(), true));
    }

    #[test]
    fn memory_override_parses() {
        let cli = Cli::try_parse_from(["mz", "--memory", "/tmp/mz.json"]).expect("cli should parse");
        assert_eq!(cli.memory, Some("/tmp/mz.json".into()));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["mz", "--verbose"]).is_err());
    }

    #[test]
    fn version_flag_short_circuits() {
        let err = Cli::try_parse_from(["mz", "--version"]).expect_err("version exits early");
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
