//! CLI front-end for the `dlconfig` binary: parsing, dispatch, and the
//! one-time tracing subscriber.

use std::env;
use std::error::Error as StdError;
use std::fmt;
use std::path::PathBuf;

use crate::config::BindConfig;
use crate::emit;
use crate::error::Result;
use crate::logging::{LogFormat, LogLevel, LogOptions, LogSettings};
use crate::marshal::MarshalType;
use crate::version;

/// Output format for `show`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    fn parse(spec: &str) -> Option<Self> {
        match spec.to_ascii_lowercase().as_str() {
            "text" | "plain" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Artifact kind for `emit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Header,
    Json,
}

/// A parsed invocation.
#[derive(Debug, PartialEq, Eq)]
pub struct Cli {
    pub command: Command,
    pub log: LogSettings,
}

/// Supported commands.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Show {
        format: OutputFormat,
    },
    Emit {
        artifact: Artifact,
        output: Option<PathBuf>,
    },
    Query {
        type_name: String,
    },
    Help,
    Version,
}

/// Errors raised while interpreting command-line arguments.
#[derive(Debug)]
pub struct CliError {
    message: String,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn with_usage(message: impl Into<String>) -> Self {
        let mut owned = message.into();
        owned.push_str("\n\n");
        owned.push_str(Cli::usage());
        Self::new(owned)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for CliError {}

impl Cli {
    /// Parse arguments from the environment.
    ///
    /// # Errors
    /// Returns a [`CliError`] when the arguments cannot be interpreted as a
    /// supported command.
    pub fn parse() -> std::result::Result<Self, CliError> {
        Self::parse_from(env::args().skip(1))
    }

    /// Parse arguments from an iterator (useful for testing).
    ///
    /// # Errors
    /// Returns a [`CliError`] when the provided iterator does not describe a
    /// valid invocation.
    pub fn parse_from<I, T>(args: I) -> std::result::Result<Self, CliError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut iter = args.into_iter().map(Into::into).peekable();
        let mut log = LogSettings::default();

        while let Some(flag) = iter.peek().cloned() {
            match flag.as_str() {
                "--log-level" => {
                    let _ = iter.next();
                    let value = iter
                        .next()
                        .ok_or_else(|| CliError::with_usage("expected level after --log-level"))?;
                    let level = LogLevel::parse(&value).ok_or_else(|| {
                        CliError::with_usage(format!("unknown log level '{value}'"))
                    })?;
                    log.level = Some(level);
                }
                "--log-format" => {
                    let _ = iter.next();
                    let value = iter.next().ok_or_else(|| {
                        CliError::with_usage("expected format after --log-format")
                    })?;
                    let format = LogFormat::parse(&value).ok_or_else(|| {
                        CliError::with_usage(format!("unknown log format '{value}'"))
                    })?;
                    log.format = Some(format);
                }
                _ => break,
            }
        }

        let Some(word) = iter.next() else {
            return Err(CliError::with_usage("missing command"));
        };
        let rest: Vec<String> = iter.collect();
        let command = match word.as_str() {
            "show" => parse_show(&rest)?,
            "emit" => parse_emit(&rest)?,
            "query" => parse_query(&rest)?,
            "help" | "--help" | "-h" => Command::Help,
            "version" | "--version" | "-V" => Command::Version,
            other => {
                return Err(CliError::with_usage(format!("unknown command '{other}'")));
            }
        };
        Ok(Self { command, log })
    }

    /// Usage text shown by `help` and appended to usage errors.
    #[must_use]
    pub fn usage() -> &'static str {
        concat!(
            "USAGE:\n",
            "    dlconfig [--log-level <level>] [--log-format <format>] <command>\n",
            "\n",
            "COMMANDS:\n",
            "    show [--format text|json]    Print the active binding configuration\n",
            "    emit --header|--json [--output <path>]\n",
            "                                 Render the configuration for consumers\n",
            "    query <c-type>               Report marshalling support for a C type\n",
            "    help                         Show this message\n",
            "    version                      Show version information\n",
        )
    }
}

fn parse_show(args: &[String]) -> std::result::Result<Command, CliError> {
    let mut format = OutputFormat::default();
    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--format" => {
                let value = iter
                    .next()
                    .ok_or_else(|| CliError::with_usage("expected format after --format"))?;
                format = OutputFormat::parse(value).ok_or_else(|| {
                    CliError::with_usage(format!("unknown output format '{value}'"))
                })?;
            }
            other => {
                return Err(CliError::with_usage(format!(
                    "unsupported option '{other}' for show"
                )));
            }
        }
    }
    Ok(Command::Show { format })
}

fn parse_emit(args: &[String]) -> std::result::Result<Command, CliError> {
    let mut artifact = None;
    let mut output = None;
    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--header" => artifact = Some(Artifact::Header),
            "--json" => artifact = Some(Artifact::Json),
            "--output" | "-o" => {
                let value = iter
                    .next()
                    .ok_or_else(|| CliError::with_usage("expected path after --output/-o"))?;
                output = Some(PathBuf::from(value));
            }
            other => {
                return Err(CliError::with_usage(format!(
                    "unsupported option '{other}' for emit"
                )));
            }
        }
    }
    let artifact = artifact
        .ok_or_else(|| CliError::with_usage("emit requires one of --header or --json"))?;
    Ok(Command::Emit { artifact, output })
}

fn parse_query(args: &[String]) -> std::result::Result<Command, CliError> {
    match args {
        [type_name] => Ok(Command::Query {
            type_name: type_name.clone(),
        }),
        [] => Err(CliError::with_usage("query requires a C type name")),
        _ => Err(CliError::with_usage("query takes exactly one type name")),
    }
}

/// Execute a parsed invocation.
///
/// # Errors
/// Propagates I/O, encoding, and type-lookup failures from the executed
/// command.
pub fn run(cli: Cli) -> Result<()> {
    init_logging(&cli.log.merged_with_env());
    match cli.command {
        Command::Show { format } => run_show(format),
        Command::Emit { artifact, output } => run_emit(artifact, output.as_deref()),
        Command::Query { type_name } => run_query(&type_name),
        Command::Help => {
            println!("{}", Cli::usage());
            Ok(())
        }
        Command::Version => {
            println!("{}", version::render());
            Ok(())
        }
    }
}

fn run_show(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let config = BindConfig::current();
            let max_args = match config.max_args() {
                Some(limit) => limit.to_string(),
                None => "unbounded".to_string(),
            };
            let types: Vec<&str> = config.types.iter().map(|ty| ty.c_type()).collect();
            println!(
                "foreign-call binding configuration for {}/{}",
                config.os, config.arch
            );
            println!("  max args:            {max_args}");
            println!("  callback slots:      {}", config.max_callback);
            println!("  callback signatures: {}", config.callback_types);
            println!("  arg passing:         {}", config.passing);
            println!("  marshalling types:   {}", types.join(", "));
            println!(
                "  windows headers:     {}",
                if config.windows_headers { "yes" } else { "no" }
            );
        }
        OutputFormat::Json => print!("{}", emit::render_json()?),
    }
    Ok(())
}

fn run_emit(artifact: Artifact, output: Option<&std::path::Path>) -> Result<()> {
    match (artifact, output) {
        (Artifact::Header, Some(path)) => emit::write_header(path),
        (Artifact::Json, Some(path)) => emit::write_json(path),
        (Artifact::Header, None) => {
            print!("{}", emit::render_header());
            Ok(())
        }
        (Artifact::Json, None) => {
            print!("{}", emit::render_json()?);
            Ok(())
        }
    }
}

fn run_query(type_name: &str) -> Result<()> {
    let ty = MarshalType::parse(type_name)?;
    let status = if ty.is_enabled() {
        "enabled"
    } else {
        "disabled"
    };
    tracing::debug!(ty = %ty, status, "queried marshalling flag");
    println!("{}: {status}", ty.c_type());
    Ok(())
}

/// Report a top-level failure to stderr.
pub fn report_error(err: &crate::Error) {
    eprintln!("error: {err}");
}

fn init_logging(options: &LogOptions) {
    use std::io::IsTerminal;
    use std::sync::OnceLock;
    use tracing_subscriber::{EnvFilter, fmt};

    static INITIALISED: OnceLock<()> = OnceLock::new();

    let _ = INITIALISED.get_or_init(|| {
        let use_ansi = env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();
        let level = options.level.as_tracing_level();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(options.level.to_string()));

        match options.format {
            LogFormat::Json => {
                let subscriber = fmt::fmt()
                    .with_env_filter(filter)
                    .with_max_level(level)
                    .with_ansi(use_ansi)
                    .with_writer(std::io::stderr)
                    .json()
                    .finish();
                let _ = tracing::subscriber::set_global_default(subscriber);
            }
            LogFormat::Text => {
                let subscriber = fmt::fmt()
                    .with_env_filter(filter)
                    .with_max_level(level)
                    .with_ansi(use_ansi)
                    .with_writer(std::io::stderr)
                    .compact()
                    .finish();
                let _ = tracing::subscriber::set_global_default(subscriber);
            }
        }
    });
}
