use std::{io, path::PathBuf};

use anyhow::Context;
use miette::Report;

const RENDER_CONTEXT: &str = "while rendering ALTER TABLE statements";
const DECODE_CONTEXT: &str = "while decoding statement document";
const FILE_READ_CONTEXT: &str = "while reading statement file";
const STDIN_READ_CONTEXT: &str = "while reading statement document from stdin";

const EXIT_FAILURE: u8 = 1;
const EXIT_USAGE: u8 = 2;

pub(crate) type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug)]
pub(crate) enum CliError {
    MissingInput,
    ReadFile {
        path: PathBuf,
        source: io::Error,
    },
    ReadStdin(io::Error),
    Core(altersql_core::Error),
}

impl CliError {
    pub(crate) fn exit_code(&self) -> u8 {
        match self {
            Self::MissingInput => EXIT_USAGE,
            Self::ReadFile { .. } | Self::ReadStdin(_) | Self::Core(_) => EXIT_FAILURE,
        }
    }
}

impl From<altersql_core::Error> for CliError {
    fn from(value: altersql_core::Error) -> Self {
        Self::Core(value)
    }
}

pub(crate) fn render_runtime_error(error: CliError) -> String {
    match error {
        CliError::MissingInput => format!("[usage] {}", missing_input_message()),
        CliError::ReadFile { path, source } => {
            let context = format!("{FILE_READ_CONTEXT} `{}`", path.display());
            let report = report_with_context(source, context);
            format!("[io] {report}")
        }
        CliError::ReadStdin(source) => {
            let report = report_with_context(source, STDIN_READ_CONTEXT);
            format!("[io] {report}")
        }
        CliError::Core(source) => {
            let (category, context) = core_presentation(&source);
            let report = report_with_context(source, context);
            format!("[{category}] {report}")
        }
    }
}

fn report_with_context<E, C>(source: E, context: C) -> Report
where
    E: std::error::Error + Send + Sync + 'static,
    C: Into<String>,
{
    let context = context.into();
    let anyhow_error = std::result::Result::<(), E>::Err(source)
        .context(context)
        .expect_err("context wrapping must produce an error");
    miette::miette!("{anyhow_error:#}")
}

fn core_presentation(error: &altersql_core::Error) -> (&'static str, &'static str) {
    match error {
        altersql_core::Error::Render(_) => ("render", RENDER_CONTEXT),
        altersql_core::Error::Input(_) => ("input", DECODE_CONTEXT),
    }
}

fn missing_input_message() -> &'static str {
    "missing statement document: pass --file <PATH> or pipe YAML/JSON via stdin"
}
