//! FILENAME: engine/src/lib.rs
//! PURPOSE: Main library entry point for the calculator engine.
//! CONTEXT: Re-exports public types and modules for use by the
//! presentation layer.

pub mod calculator;
pub mod evaluator;
pub mod history;
pub mod number_format;

// Re-export commonly used types at the crate root
pub use calculator::Calculator;
pub use evaluator::{evaluate, evaluate_equation, sanitize, EvalError};
pub use history::{History, HistoryEntry};
pub use number_format::format_result;
