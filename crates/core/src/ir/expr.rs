use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    Null,
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Decimal(String),
    String(String),
    Bool(bool),
}

/// Plain text form of the value: strings are not quoted, null spells `NULL`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Unsigned(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Decimal(value) | Self::String(value) => f.write_str(value),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}

/// Expression attached to a column option. Function calls such as
/// `CURRENT_TIMESTAMP` carry no literal value of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    Value(Value),
    FunctionCall { name: String },
}

impl Expr {
    pub fn null() -> Self {
        Self::Value(Value::Null)
    }

    pub fn integer(value: i64) -> Self {
        Self::Value(Value::Integer(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::Value(Value::String(value.into()))
    }

    pub fn function(name: impl Into<String>) -> Self {
        Self::FunctionCall { name: name.into() }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => value.fmt(f),
            Self::FunctionCall { name } => f.write_str(name),
        }
    }
}
