//! Loading assistant configuration (messages + optional content overrides) from TOML.
//!
//! See `AssistantConfig` and `Messages` for expected schema. Every section is
//! optional; missing pieces fall back to the built-in defaults.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info};

use crate::domain::{LessonPlan, QuizQuestion};

pub const CONFIG_PATH_ENV: &str = "ASSISTANT_CONFIG_PATH";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read config file: {0}")]
  Io(#[from] std::io::Error),
  #[error("failed to parse TOML config: {0}")]
  Parse(#[from] toml::de::Error),
}

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AssistantConfig {
  #[serde(default)]
  pub messages: Messages,
  /// Replaces the built-in lesson template.
  #[serde(default)]
  pub lesson_plan: Option<LessonPlan>,
  /// Replaces the built-in question bank.
  #[serde(default)]
  pub questions: Option<Vec<QuizQuestion>>,
}

/// User-facing fixed strings. Override in TOML to adjust tone.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Messages {
  /// Returned when the request is ambiguous.
  pub help: String,
  /// Note attached to template-generated content.
  pub template_note: String,
  /// Note attached when the fallback branch produced the content.
  pub fallback_note: String,
  /// Error for an empty request at the HTTP boundary.
  pub empty_input: String,
  pub health: String,
}

impl Default for Messages {
  fn default() -> Self {
    Self {
      help: "I can help you create lesson plans and quizzes for 'His First Flight'! Please specify what you'd like. Examples: 'Create a lesson plan for His First Flight' or 'Generate a quiz about His First Flight'".into(),
      template_note: "Generated using specialized template for 'His First Flight'".into(),
      fallback_note: "Generated using emergency fallback".into(),
      empty_input: "Please enter a message.".into(),
      health: "EDUASSIST for 'His First Flight' is running".into(),
    }
  }
}

pub fn parse_config(s: &str) -> Result<AssistantConfig, ConfigError> {
  Ok(toml::from_str::<AssistantConfig>(s)?)
}

pub fn load_config_from_path(path: &Path) -> Result<AssistantConfig, ConfigError> {
  let s = std::fs::read_to_string(path)?;
  parse_config(&s)
}

/// Attempt to load `AssistantConfig` from ASSISTANT_CONFIG_PATH. On any IO or
/// parse error, logs and returns None so the caller uses defaults.
pub fn load_config_from_env() -> Option<AssistantConfig> {
  let path = std::env::var(CONFIG_PATH_ENV).ok()?;
  match load_config_from_path(Path::new(&path)) {
    Ok(cfg) => {
      info!(target: "eduassist", %path, "Loaded assistant config (TOML)");
      Some(cfg)
    }
    Err(e) => {
      error!(target: "eduassist", %path, error = %e, "Failed to load assistant config; using defaults");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_document_uses_defaults() {
    let cfg = parse_config("").unwrap();
    assert_eq!(cfg.messages.empty_input, "Please enter a message.");
    assert!(cfg.lesson_plan.is_none());
    assert!(cfg.questions.is_none());
  }

  #[test]
  fn partial_messages_keep_other_defaults() {
    let cfg = parse_config("[messages]\nhelp = \"Ask me for a quiz.\"\n").unwrap();
    assert_eq!(cfg.messages.help, "Ask me for a quiz.");
    assert_eq!(cfg.messages.fallback_note, Messages::default().fallback_note);
  }

  #[test]
  fn question_bank_override() {
    let cfg = parse_config(
      r#"
[[questions]]
prompt = "Where did the seagull live?"
options = ["On a ledge", "In a tree", "On a boat", "In a barn"]
correct_answer = "On a ledge"
"#,
    )
    .unwrap();
    let bank = cfg.questions.unwrap();
    assert_eq!(bank.len(), 1);
    assert_eq!(bank[0].options.len(), 4);
    assert!(bank[0].explanation.is_none());
  }

  #[test]
  fn invalid_toml_is_a_parse_error() {
    assert!(matches!(parse_config("[messages"), Err(ConfigError::Parse(_))));
  }

  #[test]
  fn missing_file_is_an_io_error() {
    let err = load_config_from_path(Path::new("/nonexistent/eduassist.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
  }
}
