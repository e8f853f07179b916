pub mod cli;
pub mod config;
pub mod error;
pub mod factorial;
pub mod length;
pub mod logging;

pub use error::{Error, Result};
pub use factorial::{big_factorial, compute, factorial, wrapping_factorial, Factorial, Mode};
pub use length::{apply, length_of};
