//! Error types for the simulation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Wrong coordinates ({x}|{y}) for a {width}x{height} grid")]
    InvalidCoordinates {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    #[error("World internal error: {context}")]
    WorldInternal {
        context: String,
        #[source]
        source: Box<Error>,
    },

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("{context}")]
    Game {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap a lower level failure as a fatal world error.
    pub fn world_internal(context: impl Into<String>, source: Error) -> Self {
        Error::WorldInternal {
            context: context.into(),
            source: Box::new(source),
        }
    }

    /// Wrap a failure surfaced while running the game.
    pub fn game(context: impl Into<String>, source: Error) -> Self {
        Error::Game {
            context: context.into(),
            source: Box::new(source),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
