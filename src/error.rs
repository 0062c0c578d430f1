use std::error::Error as StdError;
use std::fmt;
use std::io;

use crate::cli::CliError;
use crate::marshal::MarshalTypeError;

/// Unified error type for the configuration tool.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Encode(serde_json::Error),
    Cli(CliError),
    Type(MarshalTypeError),
}

/// Convenience result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error: {err}"),
            Error::Encode(err) => write!(f, "failed to encode capability report: {err}"),
            Error::Cli(err) => write!(f, "{err}"),
            Error::Type(err) => write!(f, "{err}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Encode(err) => Some(err),
            Error::Cli(err) => Some(err),
            Error::Type(err) => Some(err),
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Io(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Encode(error)
    }
}

impl From<CliError> for Error {
    fn from(error: CliError) -> Self {
        Error::Cli(error)
    }
}

impl From<MarshalTypeError> for Error {
    fn from(error: MarshalTypeError) -> Self {
        Error::Type(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marshal::MarshalType;

    #[test]
    fn display_formats_variants() {
        let io_error = Error::from(io::Error::other("disk error"));
        assert_eq!(io_error.to_string(), "I/O error: disk error");

        let cli_error = Error::from(CliError::new("bad args"));
        assert_eq!(cli_error.to_string(), "bad args");

        let type_error = match MarshalType::parse("int128") {
            Ok(ty) => panic!("expected parse failure, parsed {ty:?}"),
            Err(err) => Error::from(err),
        };
        assert!(type_error.to_string().contains("unsupported type"));
    }

    #[test]
    fn source_exposes_wrapped_errors() {
        let io_error = Error::from(io::Error::other("boom"));
        let source = match io_error.source() {
            Some(source) => source,
            None => panic!("io variant should carry a source"),
        };
        assert!(source.downcast_ref::<io::Error>().is_some());

        let cli_error = Error::from(CliError::new("oops"));
        assert!(cli_error.source().is_some());
    }
}
