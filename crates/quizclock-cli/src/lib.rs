//! Shared setup for the quizclock binaries.

pub mod logging;
