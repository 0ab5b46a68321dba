// Crate root library declaration and module exports.
pub mod cli;
pub mod command;
pub mod config;
pub mod context;
pub mod error;
pub mod interpreter;
pub mod logging;
pub mod model;
pub mod reply;
pub mod session;
pub mod storage;
pub mod tasklist;

#[cfg(feature = "tui")]
pub mod tui;

pub use error::{CommandError, Usage};
pub use interpreter::{Outcome, execute, interpret};
pub use model::{Task, TaskKind};
pub use tasklist::TaskList;
