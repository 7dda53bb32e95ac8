use serde::{Deserialize, Serialize};

pub const CHARSET_BIN: &str = "binary";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeCode {
    Tiny,
    Short,
    Int24,
    Long,
    LongLong,
    Float,
    Double,
    NewDecimal,
    Bit,
    Year,
    Date,
    Duration,
    Datetime,
    Timestamp,
    Varchar,
    VarString,
    String,
    TinyBlob,
    Blob,
    MediumBlob,
    LongBlob,
    Json,
    Enum,
    Set,
    Geometry,
}

impl TypeCode {
    pub fn is_char(self) -> bool {
        matches!(self, Self::String | Self::Varchar | Self::VarString)
    }

    pub fn is_blob(self) -> bool {
        matches!(
            self,
            Self::TinyBlob | Self::Blob | Self::MediumBlob | Self::LongBlob
        )
    }

    /// Type name under the given charset; `binary` turns char types into their
    /// binary spelling and keeps blob names, anything else yields text names.
    pub fn name(self, charset: Option<&str>) -> &'static str {
        let binary = charset == Some(CHARSET_BIN);
        match self {
            Self::Tiny => "TINYINT",
            Self::Short => "SMALLINT",
            Self::Int24 => "MEDIUMINT",
            Self::Long => "INT",
            Self::LongLong => "BIGINT",
            Self::Float => "FLOAT",
            Self::Double => "DOUBLE",
            Self::NewDecimal => "DECIMAL",
            Self::Bit => "BIT",
            Self::Year => "YEAR",
            Self::Date => "DATE",
            Self::Duration => "TIME",
            Self::Datetime => "DATETIME",
            Self::Timestamp => "TIMESTAMP",
            Self::Varchar | Self::VarString if binary => "VARBINARY",
            Self::Varchar | Self::VarString => "VARCHAR",
            Self::String if binary => "BINARY",
            Self::String => "CHAR",
            Self::TinyBlob if binary => "TINYBLOB",
            Self::TinyBlob => "TINYTEXT",
            Self::Blob if binary => "BLOB",
            Self::Blob => "TEXT",
            Self::MediumBlob if binary => "MEDIUMBLOB",
            Self::MediumBlob => "MEDIUMTEXT",
            Self::LongBlob if binary => "LONGBLOB",
            Self::LongBlob => "LONGTEXT",
            Self::Json => "JSON",
            Self::Enum => "ENUM",
            Self::Set => "SET",
            Self::Geometry => "GEOMETRY",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldFlags {
    pub unsigned: bool,
    pub zerofill: bool,
    pub binary: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldType {
    #[serde(rename = "type")]
    pub tp: TypeCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flen: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimal: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub elems: Vec<String>,
    #[serde(default)]
    pub flags: FieldFlags,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collate: Option<String>,
}

impl FieldType {
    pub fn new(tp: TypeCode) -> Self {
        Self {
            tp,
            flen: None,
            decimal: None,
            elems: Vec::new(),
            flags: FieldFlags::default(),
            charset: None,
            collate: None,
        }
    }

    #[must_use]
    pub fn with_flen(mut self, flen: u32) -> Self {
        self.flen = Some(flen);
        self
    }

    #[must_use]
    pub fn with_decimal(mut self, decimal: u32) -> Self {
        self.decimal = Some(decimal);
        self
    }

    #[must_use]
    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    #[must_use]
    pub fn with_collate(mut self, collate: impl Into<String>) -> Self {
        self.collate = Some(collate.into());
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: FieldFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn is_char_or_blob(&self) -> bool {
        self.tp.is_char() || self.tp.is_blob()
    }

    /// Type name plus its length, precision or element suffix, e.g. `DECIMAL(10,2)`.
    pub fn compact_str(&self) -> String {
        let mut out = self.tp.name(self.charset.as_deref()).to_string();

        match self.tp {
            TypeCode::Enum | TypeCode::Set => {
                let elems = self
                    .elems
                    .iter()
                    .map(|elem| format!("'{elem}'"))
                    .collect::<Vec<_>>()
                    .join(",");
                out.push('(');
                out.push_str(&elems);
                out.push(')');
            }
            TypeCode::Duration | TypeCode::Datetime | TypeCode::Timestamp => {
                if let Some(fsp) = self.decimal.filter(|fsp| *fsp > 0) {
                    out.push_str(&format!("({fsp})"));
                }
            }
            TypeCode::NewDecimal | TypeCode::Float | TypeCode::Double => {
                match (self.flen, self.decimal) {
                    (Some(flen), Some(decimal)) => out.push_str(&format!("({flen},{decimal})")),
                    (Some(flen), None) => out.push_str(&format!("({flen})")),
                    _ => {}
                }
            }
            TypeCode::Tiny
            | TypeCode::Short
            | TypeCode::Int24
            | TypeCode::Long
            | TypeCode::LongLong
            | TypeCode::Bit
            | TypeCode::Year
            | TypeCode::Varchar
            | TypeCode::VarString
            | TypeCode::String => {
                if let Some(flen) = self.flen {
                    out.push_str(&format!("({flen})"));
                }
            }
            TypeCode::Date
            | TypeCode::TinyBlob
            | TypeCode::Blob
            | TypeCode::MediumBlob
            | TypeCode::LongBlob
            | TypeCode::Json
            | TypeCode::Geometry => {}
        }

        out
    }
}
