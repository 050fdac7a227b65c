use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("malformed weather reading: missing field '{field}'")]
    MalformedReading { field: &'static str },

    #[error("weather reading out of range: {field} = {value}")]
    ReadingOutOfRange { field: &'static str, value: f64 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SimResult<T> = Result<T, SimError>;
