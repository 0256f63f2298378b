/// Command-line parsing and the solver runner
pub mod cli;
/// Board constants and runtime defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Built-in board and TOML layout files
pub mod layout;
/// Attempt progress bar
pub mod progress;
/// Plain-text board rendering
pub mod render;
