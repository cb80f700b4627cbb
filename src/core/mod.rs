// StaffSift - core/mod.rs
//
// Core business logic layer: record model, classifiers, resolution,
// filtering and export. Pure logic over in-memory collections.
// Must NOT depend on: platform, app, or any I/O beyond `std::io::Write`
// targets handed in by callers.

pub mod classify;
pub mod export;
pub mod filter;
pub mod model;
pub mod resolve;
