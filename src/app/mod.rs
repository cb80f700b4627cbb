// StaffSift - app/mod.rs
//
// Application layer: snapshot loading, criteria state, session
// persistence. Dependencies: core layer.
// Must NOT depend on: platform specifics.

pub mod loader;
pub mod session;
pub mod state;
