//! Turns reducer effects into the text lines the shell prints.

use crate::core::action::Effect;
use crate::core::utils::{display_width, format_number};

const INDENT: &str = "  ";

const COMMANDS: &[(&str, &str)] = &[
    ("<expr>", "evaluate a math expression"),
    ("history", "show step history"),
    ("undo", "undo last step"),
    ("reset", "reset to 0"),
    ("mem", "show memory value"),
    ("ms", "store result in memory"),
    ("mr", "recall memory"),
    ("m+", "add result to memory"),
    ("mc", "clear memory"),
    ("summary", "result, memory and steps"),
    ("help", "show this help"),
    ("exit", "quit"),
];

/// The boxed banner listing every command.
pub fn banner() -> String {
    let title = format!("abacus · calculator v{}", env!("CARGO_PKG_VERSION"));
    let mut body = vec![title, String::new(), "Commands".to_string()];
    body.extend(COMMANDS.iter().map(|(cmd, what)| format!("{cmd:<9}{what}")));

    let inner = body.iter().map(|l| display_width(l)).max().unwrap_or(0) + 4;
    let mut lines = vec![format!("{INDENT}╔{}╗", "═".repeat(inner))];
    for line in &body {
        let pad = inner - 2 - display_width(line);
        lines.push(format!("{INDENT}║  {line}{}║", " ".repeat(pad)));
    }
    lines.push(format!("{INDENT}╚{}╝", "═".repeat(inner)));
    lines.join("\n")
}

/// Indexed history listing; the current entry is marked with `▶`.
pub fn history(values: &[f64], precision: u32) -> Vec<String> {
    if values.is_empty() {
        return vec![format!("{INDENT}(empty)")];
    }
    let last = values.len() - 1;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let marker = if i == last { "▶" } else { " " };
            format!("{INDENT}{marker} [{i:>3}]  {}", format_number(*v, precision))
        })
        .collect()
}

pub fn render(effect: &Effect, precision: u32) -> Vec<String> {
    let num = |v: f64| format_number(v, precision);
    match effect {
        Effect::None => Vec::new(),
        Effect::Value(v) => vec![format!("{INDENT}→ {}", num(*v))],
        Effect::History(values) => history(values, precision),
        Effect::Memory(v) => vec![format!("{INDENT}Memory: {}", num(*v))],
        Effect::MemoryStored(v) => vec![format!("{INDENT}Memory ← {}", num(*v))],
        Effect::MemoryCleared => vec![format!("{INDENT}Memory cleared.")],
        Effect::Reset(v) => vec![format!("{INDENT}→ Reset to {}", num(*v))],
        Effect::Summary(text) => text.lines().map(|l| format!("{INDENT}{l}")).collect(),
        Effect::Help => vec![banner()],
        Effect::Error(e) => vec![format!("{INDENT}✗ {e}")],
        Effect::Quit => vec![format!("{INDENT}Bye!")],
    }
}
