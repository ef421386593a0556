use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use nuwa_api_client::DEFAULT_SERVICE_URL;

#[derive(Parser, Debug)]
#[command(name = "nuwa", version, about = "Nuwa Language Room chat client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where assistant replies come from.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PolicyKind {
    /// Ask the chat service.
    Remote,
    /// Canned replies after a random delay, no network.
    #[default]
    Simulated,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Chat interactively; each stdin line is one turn.
    Chat {
        /// Reply policy for this session.
        #[arg(long, value_enum, default_value_t = PolicyKind::default())]
        policy: PolicyKind,

        /// Chat service base URL (remote policy).
        #[arg(long, env = "NUWA_SERVICE_URL", default_value = DEFAULT_SERVICE_URL)]
        service_url: String,

        /// Request timeout in seconds (remote policy). Unset keeps the transport default.
        #[arg(long)]
        timeout_secs: Option<u64>,

        /// Seed for the simulated policy.
        #[arg(long)]
        seed: Option<u64>,

        /// Minimum simulated thinking delay in milliseconds.
        #[arg(long, default_value_t = 1000)]
        min_delay_ms: u64,

        /// Maximum simulated thinking delay in milliseconds.
        #[arg(long, default_value_t = 3000)]
        max_delay_ms: u64,

        /// Replacement correction table (YAML, or JSON by `.json` extension).
        #[arg(long)]
        corrections: Option<PathBuf>,
    },

    /// Print the correction panel for one sentence.
    Correct {
        /// Sentence to correct.
        text: String,

        /// Use the capitalisation/punctuation rules instead of the phrase table.
        #[arg(long, conflicts_with = "corrections")]
        rules: bool,

        /// Replacement correction table (YAML, or JSON by `.json` extension).
        #[arg(long)]
        corrections: Option<PathBuf>,
    },

    /// Print the version.
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn chat_defaults_to_simulated() {
        let cli = Cli::try_parse_from(["nuwa", "chat"]).unwrap();
        match cli.command {
            Commands::Chat {
                policy,
                min_delay_ms,
                max_delay_ms,
                ..
            } => {
                assert_eq!(policy, PolicyKind::Simulated);
                assert_eq!((min_delay_ms, max_delay_ms), (1000, 3000));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rules_conflicts_with_table() {
        let err = Cli::try_parse_from([
            "nuwa",
            "correct",
            "hi",
            "--rules",
            "--corrections",
            "t.yaml",
        ]);
        assert!(err.is_err());
    }
}
