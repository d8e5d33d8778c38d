use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn unsupported_language(tag: impl Into<String>) -> Self {
        Self::UnsupportedLanguage(tag.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn is_unsupported_language(&self) -> bool {
        matches!(self, Self::UnsupportedLanguage(_))
    }
}
