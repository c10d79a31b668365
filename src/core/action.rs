//! # Actions
//!
//! Every line typed into the shell becomes an `Action`.
//! `history`? That's `Action::ShowHistory`. `2 + 2`? That's
//! `Action::Evaluate("2 + 2")`.
//!
//! The `update()` function applies an action to the session state and
//! returns an [`Effect`] describing what the adapter should show. No I/O
//! happens here.
//!
//! ```text
//! State + Action  →  update()  →  Effect
//! ```

use log::{debug, info};

use crate::core::error::CalcError;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Evaluate(String),
    ShowHistory,
    Undo,
    Reset,
    ShowMemory,
    MemStore,
    MemRecall,
    MemClear,
    MemAdd,
    Summary,
    Help,
    Quit,
    /// Blank line.
    Noop,
}

impl Action {
    /// Maps one input line to an action. Commands are case-insensitive;
    /// anything that is not a command is an expression.
    pub fn parse(line: &str) -> Action {
        let input = line.trim();
        match input.to_lowercase().as_str() {
            "" => Action::Noop,
            "exit" | "quit" | "q" => Action::Quit,
            "help" | "h" | "?" => Action::Help,
            "history" => Action::ShowHistory,
            "undo" => Action::Undo,
            "reset" => Action::Reset,
            "mem" => Action::ShowMemory,
            "ms" => Action::MemStore,
            "mr" => Action::MemRecall,
            "mc" => Action::MemClear,
            "m+" => Action::MemAdd,
            "summary" => Action::Summary,
            _ => Action::Evaluate(input.to_string()),
        }
    }
}

/// What the adapter should render after an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// The calculator's new current value.
    Value(f64),
    History(Vec<f64>),
    Memory(f64),
    MemoryStored(f64),
    MemoryCleared,
    Reset(f64),
    Summary(String),
    Help,
    Error(CalcError),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("action: {:?}", action);
    let calc = &mut app.calculator;
    match action {
        Action::Noop => Effect::None,
        Action::Quit => {
            info!("Quit requested after {} steps", calc.steps());
            app.should_quit = true;
            Effect::Quit
        }
        Action::Help => Effect::Help,
        Action::ShowHistory => Effect::History(calc.history().to_vec()),
        Action::Undo => match calc.undo() {
            Ok(calc) => Effect::Value(calc.result()),
            Err(e) => Effect::Error(e),
        },
        Action::Reset => Effect::Reset(calc.reset().result()),
        Action::ShowMemory => Effect::Memory(calc.memory()),
        Action::MemStore => Effect::MemoryStored(calc.mem_store().memory()),
        Action::MemRecall => Effect::Value(calc.mem_recall().result()),
        Action::MemClear => {
            calc.mem_clear();
            Effect::MemoryCleared
        }
        Action::MemAdd => Effect::MemoryStored(calc.mem_add().memory()),
        Action::Summary => Effect::Summary(calc.summary()),
        Action::Evaluate(expression) => match calc.evaluate(&expression) {
            Ok(value) => Effect::Value(value),
            Err(e) => {
                debug!("evaluation of {expression:?} failed: {e}");
                Effect::Error(e)
            }
        },
    }
}
