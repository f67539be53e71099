/*
[INPUT]:  Command-line arguments and interactive user input
[OUTPUT]: Facade calls and user-facing output
[POS]:    CLI layer - module wiring
[UPDATE]: When adding CLI modules
*/

pub mod args;
pub mod commands;
pub mod interactive;

pub use args::{Cli, Command};
