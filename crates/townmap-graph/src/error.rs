#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("town not found in graph: {name}")]
    MissingTown { name: String },
}

impl Error {
    pub(crate) fn empty_town_name() -> Self {
        Self::InvalidInput {
            message: "town name must not be empty".to_string(),
        }
    }

    pub(crate) fn missing_town(name: &str) -> Self {
        Self::MissingTown {
            name: name.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
