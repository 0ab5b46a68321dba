// File: ./src/model/mod.rs
pub mod display;
pub mod item;
pub mod timestamp;

pub use item::{Task, TaskKind, TaskKindTag};
pub use timestamp::{DISPLAY_FORMAT, INPUT_FORMAT, parse_timestamp};
