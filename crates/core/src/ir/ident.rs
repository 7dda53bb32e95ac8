use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ident {
    pub value: String,
}

impl Ident {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Table reference, optionally qualified by its schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableName {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Ident>,
    pub name: Ident,
}

impl TableName {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: Ident::new(name),
        }
    }

    pub fn qualified(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: Some(Ident::new(schema)),
            name: Ident::new(name),
        }
    }
}

/// Column reference, optionally qualified by table and schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnName {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Ident>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<Ident>,
    pub name: Ident,
}

impl ColumnName {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            table: None,
            name: Ident::new(name),
        }
    }

    pub fn qualified(
        schema: impl Into<String>,
        table: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            schema: Some(Ident::new(schema)),
            table: Some(Ident::new(table)),
            name: Ident::new(name),
        }
    }
}
