use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("duplicate canonical field '{0}' in alias table")]
    DuplicateCanonical(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
