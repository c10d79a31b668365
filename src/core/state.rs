//! # Session State
//!
//! Core state for one interactive session. Presentation lives in the
//! `repl` module; this is only the data the reducer works on.
//!
//! ```text
//! App
//! ├── calculator: Calculator    // the session's persistent calculator
//! ├── prompt: String            // line prompt shown by the adapter
//! ├── show_banner: bool         // print the banner on start
//! └── should_quit: bool         // set by Action::Quit
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::calculator::Calculator;
use crate::core::config::ResolvedConfig;

pub struct App {
    pub calculator: Calculator,
    pub prompt: String,
    pub show_banner: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            calculator: Calculator::with_config(config.calculator),
            prompt: config.prompt.clone(),
            show_banner: config.show_banner,
            should_quit: false,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&ResolvedConfig::default())
    }
}
