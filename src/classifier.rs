//! Request classification: keyword scoring for intent, regex scans for parameters.
//!
//! Everything here is a pure function of the input text. Matching is by
//! lower-cased substring membership, not tokenization, so "plan" also hits
//! "explanation" and "test" hits "contest".

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, instrument};

use crate::domain::{Difficulty, ExtractedParameters, Focus, Intent, DEFAULT_DURATION, DEFAULT_QUESTION_COUNT};
use crate::util::{contains_any, count_present};

const LESSON_PLAN_TERMS: &[&str] = &["lesson plan", "lesson", "plan", "teaching", "class", "duration", "minute"];
const QUIZ_TERMS: &[&str] = &["quiz", "test", "questions", "assessment", "exam", "question"];

/// Inputs naming the story resolve score ties toward a lesson plan instead of
/// asking the user to clarify.
const STORY_TITLE: &str = "his first flight";

// ASCII digits only, so whatever matches also parses.
static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9]+)\s*min").unwrap());
static QUESTION_COUNT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9]+)\s*question").unwrap());
// "medium-difficulty", "hard difficulty": an explicit level beats the keyword scan.
static DIFFICULTY_LEVEL_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(easy|medium|hard)[\s-]*difficulty").unwrap());

/// Intent scores for a lower-cased input: (lesson, quiz).
fn scores(lower: &str) -> (usize, usize) {
  (count_present(lower, LESSON_PLAN_TERMS), count_present(lower, QUIZ_TERMS))
}

#[instrument(level = "debug", skip(text), fields(text_len = text.len()))]
pub fn classify(text: &str) -> Intent {
  let lower = text.to_lowercase();
  let (lesson, quiz) = scores(&lower);

  let intent = if lower.contains(STORY_TITLE) {
    if lesson >= quiz { Intent::LessonPlan } else { Intent::Quiz }
  } else if lesson > quiz {
    Intent::LessonPlan
  } else if quiz > lesson {
    Intent::Quiz
  } else {
    Intent::Ambiguous
  };

  debug!(target: "classifier", lesson, quiz, ?intent, "Scored request");
  intent
}

#[instrument(level = "debug", skip(text), fields(text_len = text.len()))]
pub fn extract_parameters(text: &str) -> ExtractedParameters {
  let lower = text.to_lowercase();
  let params = ExtractedParameters {
    duration: extract_duration(&lower),
    difficulty: extract_difficulty(&lower),
    question_count: extract_question_count(&lower),
    focus: extract_focus(&lower),
  };
  debug!(target: "classifier", ?params, "Extracted parameters");
  params
}

fn extract_duration(lower: &str) -> String {
  DURATION_RE
    .captures(lower)
    .map(|c| format!("{} minutes", &c[1]))
    .unwrap_or_else(|| DEFAULT_DURATION.to_string())
}

fn extract_difficulty(lower: &str) -> Difficulty {
  if let Some(c) = DIFFICULTY_LEVEL_RE.captures(lower) {
    return match &c[1] {
      "easy" => Difficulty::Easy,
      "hard" => Difficulty::Hard,
      _ => Difficulty::Medium,
    };
  }
  if lower.contains("easy") {
    Difficulty::Easy
  } else if contains_any(lower, &["hard", "difficult"]) {
    Difficulty::Hard
  } else {
    Difficulty::Medium
  }
}

// Not clamped against the bank; the generator does that. Counts too large
// for usize saturate.
fn extract_question_count(lower: &str) -> usize {
  QUESTION_COUNT_RE
    .captures(lower)
    .map(|c| c[1].parse::<usize>().unwrap_or(usize::MAX))
    .unwrap_or(DEFAULT_QUESTION_COUNT)
}

fn extract_focus(lower: &str) -> Focus {
  if contains_any(lower, &["character", "analysis"]) {
    Focus::CharacterAnalysis
  } else if lower.contains("theme") {
    Focus::ThemeAnalysis
  } else if lower.contains("comprehension") {
    Focus::ReadingComprehension
  } else {
    Focus::CharacterAnalysis
  }
}
