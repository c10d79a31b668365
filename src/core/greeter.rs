//! # Greeter
//!
//! Greets a name in one of a few fixed styles.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use super::error::{CalcError, Result};
use super::utils::{format_message, validate_name};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum GreetStyle {
    #[default]
    Casual,
    Formal,
    Excited,
}

impl GreetStyle {
    pub const ALL: [GreetStyle; 3] = [GreetStyle::Casual, GreetStyle::Formal, GreetStyle::Excited];

    pub fn name(self) -> &'static str {
        match self {
            GreetStyle::Casual => "casual",
            GreetStyle::Formal => "formal",
            GreetStyle::Excited => "excited",
        }
    }
}

impl fmt::Display for GreetStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GreetStyle {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        GreetStyle::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = GreetStyle::ALL.iter().map(|s| s.name()).collect();
                CalcError::Invalid(format!("style must be one of: {}", names.join(", ")))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeter {
    name: String,
}

impl Default for Greeter {
    fn default() -> Self {
        Self {
            name: "World".to_string(),
        }
    }
}

impl Greeter {
    /// Fails when `name` is blank.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name, "name")?;
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn greet(&self, style: GreetStyle) -> String {
        let name = &self.name;
        let text = match style {
            GreetStyle::Casual => format!("Hey, {name}!"),
            GreetStyle::Formal => format!("Good day, {name}."),
            GreetStyle::Excited => format!("WOW, {name}!!! 🎉"),
        };
        format_message(&text)
    }

    pub fn farewell(&self) -> String {
        format_message(&format!("Goodbye, {}!", self.name))
    }
}

impl fmt::Display for Greeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Greeter(name={:?})", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_name() {
        assert_eq!(Greeter::default().name(), "World");
    }

    #[test]
    fn test_styles() {
        let bob = Greeter::new("Bob").unwrap();
        assert_eq!(bob.greet(GreetStyle::Casual), "Hey, Bob!");
        assert_eq!(bob.greet(GreetStyle::Formal), "Good day, Bob.");
        assert!(bob.greet(GreetStyle::Excited).contains("Bob"));
    }

    #[test]
    fn test_style_parsing() {
        assert_eq!("formal".parse::<GreetStyle>().unwrap(), GreetStyle::Formal);
        let err = "unknown".parse::<GreetStyle>().unwrap_err();
        assert!(err.to_string().contains("casual, formal, excited"));
    }

    #[test]
    fn test_farewell() {
        assert_eq!(Greeter::new("Carol").unwrap().farewell(), "Goodbye, Carol!");
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(Greeter::new("  ").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Greeter::new("Ann").unwrap().to_string(), "Greeter(name=\"Ann\")");
    }
}
