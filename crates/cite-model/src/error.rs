use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("headers match neither the metadata nor the citations schema: [{}]", .headers.join(", "))]
    UnknownHeaderSchema { headers: Vec<String> },
}

pub type Result<T> = std::result::Result<T, ModelError>;
