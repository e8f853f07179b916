#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("factorial is undefined for negative input: {n}")]
    InvalidInput { n: i32 },
    #[error("{n}! does not fit in a 32-bit signed integer")]
    Overflow { n: i32 },
    #[error("invalid value for {key}: {value:?}")]
    InvalidConfig { key: String, value: String },
    #[error("unknown mode: {0:?} (expected checked, wrapping or big)")]
    UnknownMode(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
