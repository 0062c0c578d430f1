#![deny(unsafe_code)]
#![deny(warnings)]
#![deny(clippy::all, clippy::pedantic)]
#![deny(clippy::unwrap_used, clippy::expect_used)]

use dlconfig::cli::{self, Cli};
use dlconfig::error::Result;
use std::process::ExitCode;

fn main() -> ExitCode {
    run_with_args(std::env::args().skip(1))
}

fn run_with_args<I, S>(args: I) -> ExitCode
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    match try_main(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            cli::report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn try_main<I, S>(args: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let cli = Cli::parse_from(args)?;
    cli::run(cli)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dlconfig::error::Error;

    #[test]
    fn run_with_args_returns_success_for_help() {
        let exit = run_with_args(["help"]);
        assert_eq!(exit, ExitCode::SUCCESS);
    }

    #[test]
    fn run_with_args_reports_error_on_missing_command() {
        let exit = run_with_args(std::iter::empty::<String>());
        assert_eq!(exit, ExitCode::FAILURE);
    }

    #[test]
    fn try_main_forwards_parse_errors() {
        let err = match try_main(std::iter::empty::<String>()) {
            Ok(()) => panic!("expected parse failure for missing args"),
            Err(err) => err,
        };
        assert!(matches!(err, Error::Cli(_)));
    }

    #[test]
    fn try_main_rejects_unknown_query_types() {
        let err = match try_main(["query", "int128"]) {
            Ok(()) => panic!("expected unknown type to fail"),
            Err(err) => err,
        };
        assert!(matches!(err, Error::Type(_)));
    }
}
