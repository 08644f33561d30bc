//! quizclock-core — problem loading and the timed quiz loop.
//!
//! The loader turns a comma-separated file into a [`model::ProblemSet`], the
//! input reader turns stdin into a channel of normalized lines, and the
//! runner races those lines against a single quiz deadline.

pub mod config;
pub mod error;
pub mod input;
pub mod loader;
pub mod model;
pub mod runner;

pub use error::LoadError;
pub use model::{Problem, ProblemSet};
pub use runner::{QuizOutcome, QuizPhase, QuizRunner};
