//! Line-oriented console front-end for rookery.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, ConsoleOption};
pub use error::ConsoleError;
pub use session::{ConsoleConfig, Session};
