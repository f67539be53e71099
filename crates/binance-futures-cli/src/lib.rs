/*
[INPUT]:  Crate modules
[OUTPUT]: Public CLI crate surface (used by the binary and tests)
[POS]:    Crate root - module wiring
[UPDATE]: When public modules change
*/

pub mod cli;

pub use cli::{Cli, Command};
