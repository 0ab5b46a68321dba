// Defines what a key press asks the TUI loop to do.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Send a line to Derek.
    Submit(String),
    Quit,
}
