//! # Core Application Logic
//!
//! This module contains Abacus's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Calculator + ops     │
//!                    │  • expr (evaluator)     │
//!                    │  • State / Action       │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    REPL    │              │  Library   │
//!           │  Adapter   │              │  callers   │
//!           │ (stdin/out)│              │            │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`calculator`]: the `Calculator` type with history, undo and memory
//! - [`expr`]: the closed expression evaluator behind `Calculator::compute`
//! - [`ops`]: the operation set shared by both
//! - [`state`]: the `App` struct for an interactive session
//! - [`action`]: the `Action` enum and the `update` reducer
//! - [`config`]: settings file, env and CLI resolution
//! - [`greeter`], [`math_utils`], [`utils`]: standalone helpers

pub mod action;
pub mod calculator;
pub mod config;
pub mod error;
pub mod expr;
pub mod greeter;
pub mod math_utils;
pub mod ops;
pub mod state;
pub mod utils;

// Re-export commonly used types for convenience
pub use calculator::{Calculator, CalculatorConfig, Roots};
pub use error::{CalcError, Result};
