use std::{error::Error as StdError, io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Input(#[from] InputError),
}

impl Error {
    /// Short category label used by the CLI and the testkit.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Render(error) => error.category(),
            Self::Input(_) => "input",
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unsupported {construct} `{variant}` in {dialect} renderer")]
    Unsupported {
        construct: &'static str,
        variant: String,
        dialect: String,
    },
    #[error("invariant violation in {node}: {detail}")]
    InvariantViolation { node: &'static str, detail: String },
    #[error("table option `{option}` could not be rendered")]
    TableOption {
        option: String,
        #[source]
        source: BoxError,
    },
}

impl RenderError {
    pub fn unsupported(
        construct: &'static str,
        variant: impl Into<String>,
        dialect: impl Into<String>,
    ) -> Self {
        Self::Unsupported {
            construct,
            variant: variant.into(),
            dialect: dialect.into(),
        }
    }

    pub fn invariant(node: &'static str, detail: impl Into<String>) -> Self {
        Self::InvariantViolation {
            node,
            detail: detail.into(),
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            Self::Unsupported { .. } => "unsupported",
            Self::InvariantViolation { .. } => "invariant",
            Self::TableOption { .. } => "table_option",
        }
    }
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to decode {format} statement document")]
    Decode {
        format: &'static str,
        #[source]
        source: BoxError,
    },
    #[error("failed to read `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("duplicate case `{name}` in `{}`", path.display())]
    DuplicateCase { name: String, path: PathBuf },
}
