mod error_presentation;

use std::{
    fs,
    io::{self, IsTerminal, Read},
    path::PathBuf,
    process::ExitCode,
};

use altersql_core::{AlterTableStatement, Dialect, InputError};
use altersql_dialect_mysql::MysqlDialect;
use clap::{Parser, ValueEnum};
use serde_yaml::with::singleton_map_recursive;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::error_presentation::{CliError, CliResult, render_runtime_error};

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser, Debug)]
#[command(
    name = "altersql",
    version,
    about = "Render MySQL ALTER TABLE statements from AST documents"
)]
struct Args {
    /// Statement document to render; read from stdin when omitted
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Encoding of the statement document
    #[arg(long, value_enum, default_value_t = InputFormat::Yaml)]
    format: InputFormat,

    /// Text appended after every rendered statement
    #[arg(long, default_value = ";")]
    delimiter: String,

    /// Tracing filter for stderr diagnostics (overrides RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    Yaml,
    Json,
}

impl InputFormat {
    fn name(self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.log_level.as_deref());

    match run(&args) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            let code = error.exit_code();
            eprintln!("{}", render_runtime_error(error));
            ExitCode::from(code)
        }
    }
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> CliResult<String> {
    let input = read_input(args.file.as_ref())?;
    if input.trim().is_empty() {
        return Err(CliError::MissingInput);
    }

    let statements = decode_statements(&input, args.format)?;
    debug!(count = statements.len(), format = args.format.name(), "decoded statements");

    let dialect = MysqlDialect::default();
    let mut output = String::new();
    for statement in &statements {
        output.push_str(&dialect.render_alter_table(statement)?);
        output.push_str(&args.delimiter);
        output.push('\n');
    }

    Ok(output)
}

fn read_input(file: Option<&PathBuf>) -> CliResult<String> {
    if let Some(path) = file {
        return fs::read_to_string(path).map_err(|source| CliError::ReadFile {
            path: path.clone(),
            source,
        });
    }

    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(CliError::MissingInput);
    }

    let mut input = String::new();
    stdin
        .read_to_string(&mut input)
        .map_err(CliError::ReadStdin)?;
    Ok(input)
}

/// A document holds either one statement or a list of them. Enums are
/// spelled in map form in both formats.
fn decode_statements(
    input: &str,
    format: InputFormat,
) -> altersql_core::Result<Vec<AlterTableStatement>> {
    match format {
        InputFormat::Yaml => decode_yaml(input).map_err(|source| decode_error(format, source)),
        InputFormat::Json => decode_json(input).map_err(|source| decode_error(format, source)),
    }
}

fn decode_yaml(input: &str) -> Result<Vec<AlterTableStatement>, serde_yaml::Error> {
    let document: serde_yaml::Value = serde_yaml::from_str(input)?;
    let deserializer = serde_yaml::Deserializer::from_str(input);

    if document.is_sequence() {
        singleton_map_recursive::deserialize(deserializer)
    } else {
        let statement: AlterTableStatement = singleton_map_recursive::deserialize(deserializer)?;
        Ok(vec![statement])
    }
}

fn decode_json(input: &str) -> Result<Vec<AlterTableStatement>, serde_json::Error> {
    let document: serde_json::Value = serde_json::from_str(input)?;

    if document.is_array() {
        serde_json::from_str(input)
    } else {
        let statement: AlterTableStatement = serde_json::from_str(input)?;
        Ok(vec![statement])
    }
}

fn decode_error<E>(format: InputFormat, source: E) -> altersql_core::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    InputError::Decode {
        format: format.name(),
        source: Box::new(source),
    }
    .into()
}
