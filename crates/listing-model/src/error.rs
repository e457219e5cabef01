use thiserror::Error;

/// The dataset does not have the shape the cleaning step expects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A required column is absent.
    #[error("required column '{column}' not found in dataset (columns: {available})")]
    MissingColumn { column: String, available: String },

    /// A column exists but cannot be read as the required type.
    #[error("column '{column}' cannot be read as {expected}: {message}")]
    ColumnType {
        column: String,
        expected: &'static str,
        message: String,
    },
}

impl SchemaError {
    /// Name of the offending column.
    pub fn column(&self) -> &str {
        match self {
            Self::MissingColumn { column, .. } | Self::ColumnType { column, .. } => column,
        }
    }
}

pub type Result<T> = std::result::Result<T, SchemaError>;
