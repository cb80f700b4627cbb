// StaffSift - lib.rs
//
// Library entry point, exposing all modules for integration testing and
// potential future programmatic use.
//
// The CLI surface (argument parsing, table rendering) lives in `main.rs`
// and is not part of the library surface.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
