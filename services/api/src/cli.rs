use crate::check::{run_check, run_matrix, CheckArgs, MatrixArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use seat_predictor::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Law College Seat Predictor",
    about = "Check government-quota law college seat eligibility from CAP ranks",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Check whether a set of ranks could secure a government seat
    Check(CheckArgs),
    /// Print the active seat matrix
    Matrix(MatrixArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Check(args) => run_check(args),
        Command::Matrix(args) => run_matrix(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["seat-predictor-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn check_accepts_ranks_and_disclaimer_flag() {
        let cli = Cli::try_parse_from([
            "seat-predictor-api",
            "check",
            "--programme",
            "3yr",
            "--category",
            "SC",
            "--overall-rank",
            "300",
            "--category-rank",
            "35",
            "--accept-disclaimer",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Check(args)) => {
                assert_eq!(args.programme, "3yr");
                assert_eq!(args.category_rank.as_deref(), Some("35"));
                assert!(args.accept_disclaimer);
            }
            other => panic!("expected check command, got {other:?}"),
        }
    }

    #[test]
    fn check_requires_overall_rank() {
        let err = Cli::try_parse_from([
            "seat-predictor-api",
            "check",
            "--programme",
            "3yr",
            "--category",
            "SC",
        ])
        .expect_err("overall rank is mandatory");
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn serve_accepts_overrides() {
        let cli = Cli::try_parse_from(["seat-predictor-api", "serve", "--port", "8080"])
            .expect("parses");
        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.port, Some(8080));
                assert!(args.host.is_none());
            }
            other => panic!("expected serve command, got {other:?}"),
        }
    }
}
