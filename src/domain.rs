//! Domain models used by the backend: intents, extracted parameters, and the
//! two kinds of generated content (lesson plan, quiz).

use serde::{Deserialize, Serialize};

/// What did the user ask for?
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
  LessonPlan,
  Quiz,
  Ambiguous,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
  Easy,
  #[default]
  Medium,
  Hard,
}

impl Difficulty {
  pub fn label(&self) -> &'static str {
    match self {
      Difficulty::Easy => "easy",
      Difficulty::Medium => "medium",
      Difficulty::Hard => "hard",
    }
  }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Focus {
  #[default]
  CharacterAnalysis,
  ThemeAnalysis,
  ReadingComprehension,
}

impl Focus {
  /// Human-readable label stored in the lesson plan's `focus` field.
  pub fn label(&self) -> &'static str {
    match self {
      Focus::CharacterAnalysis => "character analysis",
      Focus::ThemeAnalysis => "theme analysis",
      Focus::ReadingComprehension => "reading comprehension",
    }
  }
}

pub const DEFAULT_DURATION: &str = "45 minutes";
pub const DEFAULT_QUESTION_COUNT: usize = 5;

/// Parameters pulled out of the free-text request. Every field has a default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExtractedParameters {
  pub duration: String,
  pub difficulty: Difficulty,
  pub question_count: usize,
  pub focus: Focus,
}

impl Default for ExtractedParameters {
  fn default() -> Self {
    Self {
      duration: DEFAULT_DURATION.into(),
      difficulty: Difficulty::default(),
      question_count: DEFAULT_QUESTION_COUNT,
      focus: Focus::default(),
    }
  }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
  pub time: String,
  pub name: String,
  pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
  #[serde(rename = "type")]
  pub kind: String,
  pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Differentiation {
  pub struggling: String,
  pub advanced: String,
}

/// Lesson plan document. Also the shape of the lesson template in TOML config.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonPlan {
  pub title: String,
  #[serde(default)]
  pub duration: String,
  pub grade_level: String,
  pub subject: String,
  pub topic: String,
  #[serde(default)]
  pub focus: String,
  pub objectives: Vec<String>,
  pub materials: Vec<String>,
  pub activities: Vec<Activity>,
  pub assessment: Assessment,
  pub differentiation: Differentiation,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
  pub prompt: String,
  pub options: Vec<String>,
  pub correct_answer: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub explanation: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Quiz {
  pub title: String,
  pub difficulty: Difficulty,
  pub question_count: usize,
  pub instructions: String,
  pub questions: Vec<QuizQuestion>,
}

/// Generated document handed back to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Content {
  LessonPlan(LessonPlan),
  Quiz(Quiz),
}

impl Content {
  pub fn intent(&self) -> Intent {
    match self {
      Content::LessonPlan(_) => Intent::LessonPlan,
      Content::Quiz(_) => Intent::Quiz,
    }
  }
}
