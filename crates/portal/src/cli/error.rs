//! Helpful error types for CLI commands
//!
//! Every error includes:
//! - What went wrong
//! - Context about the situation
//! - Suggestions for how to fix it

use portal_config::ConfigError;
use std::fmt;
use std::path::Path;

/// An error with helpful context and suggestions
#[derive(Debug)]
pub struct HelpfulError {
    /// The main error message
    pub message: String,
    /// Additional context about what was happening
    pub context: Option<String>,
    /// Suggestions for how to fix the error
    pub suggestions: Vec<String>,
}

impl HelpfulError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_suggestions(
        mut self,
        suggestions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.suggestions.extend(suggestions.into_iter().map(|s| s.into()));
        self
    }

    /// A config file could not be loaded.
    pub fn config_file(path: &Path, err: &ConfigError) -> Self {
        let base = Self::new(format!("Cannot load config file {}: {}", path.display(), err));
        match err {
            ConfigError::Io { .. } => base
                .with_context("The config file could not be read")
                .with_suggestions([
                    format!("TRY: Check that the file exists: ls -la {}", path.display()),
                    "TRY: Omit --file to resolve from the environment only".to_string(),
                ]),
            ConfigError::NonStringValue { key, .. } => base
                .with_context("Public runtime config is a flat table of string values")
                .with_suggestion(format!("TRY: Quote the value: {} = \"...\"", key)),
            ConfigError::NotATable(_) => base
                .with_context("Public runtime config is a flat table of string values")
                .with_suggestion("TRY: Use a top-level JSON object: {\"NEXT_PUBLIC_BASE_PATH\": \"/portal\"}"),
            ConfigError::Toml(_) | ConfigError::Json(_) => base
                .with_context("The file is not valid for its format (.json is JSON, anything else TOML)")
                .with_suggestion("TRY: Rename the file to match its contents"),
        }
    }
}

impl fmt::Display for HelpfulError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ERROR: {}", self.message)?;

        if let Some(ctx) = &self.context {
            writeln!(f, "CONTEXT: {}", ctx)?;
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            for suggestion in &self.suggestions {
                writeln!(f, "  {}", suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for HelpfulError {}

/// Build the JSON error payload printed in `--json` mode.
pub fn json_error(err: &anyhow::Error) -> serde_json::Value {
    match err.downcast_ref::<HelpfulError>() {
        Some(helpful) => serde_json::json!({
            "error": helpful.message,
            "context": helpful.context,
            "suggestions": helpful.suggestions,
        }),
        None => serde_json::json!({
            "error": format!("{:#}", err),
        }),
    }
}

/// Print an error as JSON on stdout, where `--json` callers read from.
pub fn print_json_error(err: &anyhow::Error) {
    let payload = json_error(err);
    match serde_json::to_string_pretty(&payload) {
        Ok(text) => println!("{}", text),
        Err(_) => println!("{{\"error\": \"{}\"}}", err.to_string().replace('"', "'")),
    }
}
