//! Repair Desk CLI - command-line client for the repair-service platform.
//!
//! This is the entry point for the `rdesk` binary.

mod commands;
mod output;

use std::sync::Arc;

use clap::Parser;

use repair_desk_client::{Authenticator, ClientConfig, RepairApi, SessionState};
use repair_desk_core::Credentials;

use commands::Command;
use output::{Format, Printer};

/// Repair Desk CLI - file, browse and schedule repair requests.
#[derive(Parser, Debug)]
#[command(name = "rdesk")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Backend origin. The API is served under `/api`.
    #[arg(
        long,
        env = "REPAIR_DESK_ORIGIN",
        default_value = "http://localhost:5000"
    )]
    origin: String,

    /// Sign in with this identifier before running the command.
    #[arg(long, env = "REPAIR_DESK_IDENTIFIER", requires = "secret")]
    identifier: Option<String>,

    /// Password for `--identifier`.
    #[arg(
        long,
        env = "REPAIR_DESK_SECRET",
        hide_env_values = true,
        requires = "identifier"
    )]
    secret: Option<String>,

    /// Print records as JSON.
    #[arg(long, default_value = "false")]
    json: bool,

    /// Enable debug logging.
    #[arg(long, default_value = "false")]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.debug {
        tracing_subscriber::fmt()
            .with_env_filter("repair_desk=debug,warn")
            .with_writer(std::io::stderr)
            .init();
    }

    let api = RepairApi::new(&ClientConfig::new(args.origin))?;
    let session = Arc::new(SessionState::new());
    let auth = Authenticator::new(Arc::new(api.auth().clone()), Arc::clone(&session));

    let format = if args.json { Format::Json } else { Format::Text };
    let mut printer = Printer::new(std::io::stdout(), format);

    let credentials = args
        .identifier
        .zip(args.secret)
        .map(|(identifier, secret)| Credentials::new(identifier, secret));

    if let Some(credentials) = &credentials {
        auth.sign_in(credentials).await?;
    }

    let result = commands::run(args.command, &api, &auth, &mut printer).await;

    if credentials.is_some() {
        if let Err(err) = auth.sign_out().await {
            eprintln!("{}", err.human_message());
        }
        tracing::debug!(authenticated = session.is_authenticated(), "Session closed");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use commands::{RequestsCommand, ScheduleCommand};
    use repair_desk_core::RequestId;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("rdesk").chain(argv.iter().copied()))
    }

    #[test]
    fn command_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn show_takes_a_request_id() {
        let args = parse(&["requests", "show", "42"]).unwrap();

        match args.command {
            Command::Requests(RequestsCommand::Show { id }) => {
                assert_eq!(id, RequestId::from(42));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn malformed_request_id_is_rejected() {
        assert!(parse(&["requests", "show", "4/2"]).is_err());
    }

    /// The command with every `env` fallback switched off, so the caller's
    /// environment cannot satisfy a required flag.
    fn command_without_env() -> clap::Command {
        ["origin", "identifier", "secret"]
            .into_iter()
            .fold(Args::command(), |cmd, id| {
                cmd.mut_arg(id, |arg| arg.env(None::<&'static str>))
            })
    }

    #[test]
    fn identifier_requires_secret() {
        let cmd = command_without_env();

        assert!(cmd
            .clone()
            .try_get_matches_from(["rdesk", "--identifier", "ada", "--secret", "pw", "users"])
            .is_ok());
        assert!(cmd
            .try_get_matches_from(["rdesk", "--identifier", "ada", "users"])
            .is_err());
    }

    #[test]
    fn dot_segment_request_id_is_rejected() {
        let err = command_without_env()
            .try_get_matches_from(["rdesk", "requests", "delete", ".."])
            .unwrap_err();

        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn schedule_create_takes_date_and_time() {
        let args = parse(&[
            "schedule", "create", "--date", "2024-06-01", "--time", "14:30",
        ])
        .unwrap();

        assert!(matches!(
            args.command,
            Command::Schedule(ScheduleCommand::Create { ref date, ref time })
                if date == "2024-06-01" && time == "14:30"
        ));
    }
}
