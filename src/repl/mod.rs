//! # REPL Adapter
//!
//! The line-oriented shell. Reads one line per iteration, turns it into a
//! core `Action`, runs the reducer and prints the rendered effect.
//!
//! This is the only module that touches stdin/stdout. The session loop is
//! generic over `BufRead`/`Write` so tests can drive it with in-memory
//! buffers.

pub mod render;

use log::{debug, info};
use std::io::{self, BufRead, Write};

use crate::core::action::{Action, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::core::utils::format_number;

/// Runs an interactive session on the process's stdin/stdout.
pub fn run(config: &ResolvedConfig) -> io::Result<()> {
    let mut app = App::new(config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut app, stdin.lock(), stdout.lock())
}

/// Drives `app` until `exit` or end of input.
pub fn run_session<R: BufRead, W: Write>(app: &mut App, input: R, mut output: W) -> io::Result<()> {
    let precision = app.calculator.precision();
    if app.show_banner {
        writeln!(output, "{}", render::banner())?;
        writeln!(
            output,
            "  Starting value: {}\n",
            format_number(app.calculator.result(), precision)
        )?;
    }
    info!("REPL session started");

    let mut lines = input.lines();
    loop {
        write!(output, "  {}", app.prompt)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            // EOF behaves like `exit`
            debug!("end of input");
            writeln!(output)?;
            update(app, Action::Quit);
            writeln!(output, "  Bye!")?;
            break;
        };
        let line = line?;

        let effect = update(app, Action::parse(&line));
        for rendered in render::render(&effect, precision) {
            writeln!(output, "{rendered}")?;
        }
        if app.should_quit {
            break;
        }
    }

    info!("REPL session ended at {}", app.calculator.result());
    Ok(())
}
