use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("schema must declare at least one column")]
    EmptySchema,
    #[error("duplicate column in schema: {name}")]
    DuplicateColumn { name: String },
    #[error("column name must not be empty")]
    EmptyColumnName,
    #[error("column {name} is reserved for a derived field")]
    ReservedColumn { name: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
