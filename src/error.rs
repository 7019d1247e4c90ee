use thiserror::Error;

#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("Config Error: {message}")]
    Config { message: String },

    #[error("Invalid count: {input}")]
    InvalidCount { input: String },

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Inquire Error: {0}")]
    Inquire(#[from] inquire::InquireError),

    #[error("TOML Parse Error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML Serialize Error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SuggestError {
    pub fn config(message: impl Into<String>) -> Self {
        SuggestError::Config {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SuggestError>;
