//! Library surface of the indicators CLI.
//!
//! Only the logging setup is exposed; command wiring lives in the binary.

pub mod logging;
