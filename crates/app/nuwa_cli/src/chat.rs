//! Interactive chat loop over stdin/stdout.
//!
//! Each input line is one turn. Lines starting with `/` are commands:
//! `/lang en|jp|cn`, `/help`, `/quit` (or `/exit`).

use std::path::Path;
use std::time::Duration;

use log::{debug, info};
use nuwa_api_client::{ChatServiceClient, RemoteReplyPolicy};
use nuwa_core::language::LanguageTab;
use nuwa_core::{ChatClient, CorrectionTable, SimulatedReplyPolicy};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::PolicyKind;
use crate::render::{correction_panel, message_line};
use crate::{Error, Result};

const HELP: &str = "Commands: /lang en|jp|cn, /help, /quit";

/// Options for one chat session.
#[derive(Debug, Clone)]
pub struct ChatOptions {
    pub policy: PolicyKind,
    pub service_url: String,
    pub timeout: Option<Duration>,
    pub seed: Option<u64>,
    pub min_delay: Duration,
    pub max_delay: Duration,
}

/// Load a replacement correction table; `.json` files are JSON, anything else YAML.
pub fn load_corrections(path: &Path) -> Result<CorrectionTable> {
    let raw = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let table = if is_json {
        CorrectionTable::from_json_str(&raw)?
    } else {
        CorrectionTable::from_yaml_str(&raw)?
    };
    info!("loaded {} corrections from {}", table.len(), path.display());
    Ok(table)
}

/// Build a client for the requested reply policy.
pub fn build_client(opts: &ChatOptions) -> Result<ChatClient> {
    let client = match opts.policy {
        PolicyKind::Remote => {
            let service = ChatServiceClient::with_timeout(&opts.service_url, opts.timeout)?;
            info!("remote policy against {}", service.base_url());
            ChatClient::new(RemoteReplyPolicy::new(service))
        }
        PolicyKind::Simulated => {
            let policy = match opts.seed {
                Some(seed) => SimulatedReplyPolicy::seeded(seed),
                None => SimulatedReplyPolicy::new(),
            };
            ChatClient::new(policy.with_delay(opts.min_delay, opts.max_delay))
        }
    };
    Ok(client)
}

enum Command {
    Quit,
    Help,
    Language(LanguageTab),
}

fn parse_command(line: &str) -> Result<Option<Command>> {
    let Some(rest) = line.strip_prefix('/') else {
        return Ok(None);
    };
    let mut parts = rest.split_whitespace();
    let command = match parts.next().unwrap_or_default() {
        "quit" | "exit" => Command::Quit,
        "help" => Command::Help,
        "lang" => {
            let code = parts
                .next()
                .ok_or_else(|| Error::Custom("usage: /lang en|jp|cn".into()))?;
            let tab = code
                .parse::<LanguageTab>()
                .map_err(|e| Error::Custom(e.to_string()))?;
            Command::Language(tab)
        }
        other => return Err(Error::Custom(format!("unknown command: /{other}"))),
    };
    Ok(Some(command))
}

/// Run the chat loop until `/quit` or end of input.
pub async fn run(mut client: ChatClient) -> Result<()> {
    if let Some(greeting) = client.session().last_message() {
        println!("{}", message_line(greeting));
    }
    println!("{}", client.language_tip());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_command(line) {
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Help)) => println!("{HELP}"),
            Ok(Some(Command::Language(tab))) => {
                client.select_language(tab);
                println!("{}", client.language_tip());
            }
            Ok(None) => {
                client.set_input(line);
                if let Some(outcome) = client.submit_pending().await {
                    println!("{}", message_line(&outcome.user));
                    println!("{}", message_line(&outcome.reply));
                    println!("{}", correction_panel(&outcome.correction));
                }
            }
            Err(e) => eprintln!("{e}"),
        }
    }

    let session = client.session();
    debug!(
        "session {} (started {:?}) ended with {} messages",
        session.id(),
        session.started_at(),
        session.messages().len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_not_a_command() {
        assert!(parse_command("hello").unwrap().is_none());
    }

    #[test]
    fn lang_command_parses_tab() {
        match parse_command("/lang jp").unwrap() {
            Some(Command::Language(tab)) => assert_eq!(tab, LanguageTab::Jp),
            _ => panic!("expected language command"),
        }
        assert!(parse_command("/lang fr").is_err());
        assert!(parse_command("/lang").is_err());
    }

    #[test]
    fn quit_aliases() {
        assert!(matches!(parse_command("/quit").unwrap(), Some(Command::Quit)));
        assert!(matches!(parse_command("/exit").unwrap(), Some(Command::Quit)));
        assert!(parse_command("/dance").is_err());
    }

    #[test]
    fn simulated_policy_is_selected() {
        let client = build_client(&ChatOptions {
            policy: PolicyKind::Simulated,
            service_url: String::new(),
            timeout: None,
            seed: Some(1),
            min_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
        })
        .unwrap();
        assert_eq!(client.policy_name(), "simulated");
    }

    #[test]
    fn remote_client_rejects_bad_url() {
        let err = build_client(&ChatOptions {
            policy: PolicyKind::Remote,
            service_url: "not a url".into(),
            timeout: None,
            seed: None,
            min_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
        });
        assert!(matches!(err, Err(Error::Client(_))));
    }
}
