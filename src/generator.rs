//! Content generation from templates.
//!
//! A `ContentGenerator` owns the lesson template and question bank it draws
//! from (built-in seeds unless config replaced them). Generation validates what
//! it produces, so a bad configured template surfaces as a `GenerationError`
//! instead of half-built content.

use thiserror::Error;
use tracing::{debug, instrument};

use crate::domain::{Difficulty, Focus, LessonPlan, Quiz, QuizQuestion};
use crate::seeds::{
  lesson_plan_template, question_bank, COMPREHENSION_READING, QUIZ_INSTRUCTIONS, QUIZ_TITLE,
  THEME_DISCUSSION, THEME_OBJECTIVE,
};

pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
  #[error("lesson template has no objectives or no activities")]
  EmptyLessonTemplate,
  #[error("lesson template is missing {section} #{}", .index + 1)]
  MissingTemplateSlot { section: &'static str, index: usize },
  #[error("question bank is empty")]
  EmptyQuestionBank,
  #[error("question #{} is malformed: {reason}", .index + 1)]
  MalformedQuestion { index: usize, reason: String },
}

#[derive(Clone, Debug)]
pub struct ContentGenerator {
  lesson_template: LessonPlan,
  question_bank: Vec<QuizQuestion>,
}

impl Default for ContentGenerator {
  fn default() -> Self {
    Self::new(lesson_plan_template(), question_bank())
  }
}

impl ContentGenerator {
  pub fn new(lesson_template: LessonPlan, question_bank: Vec<QuizQuestion>) -> Self {
    Self { lesson_template, question_bank }
  }

  pub fn bank_size(&self) -> usize {
    self.question_bank.len()
  }

  /// Build a lesson plan from the template, applying focus-specific overrides.
  #[instrument(level = "debug", skip(self), fields(focus = focus.label()))]
  pub fn lesson_plan(&self, duration: &str, focus: Focus) -> Result<LessonPlan, GenerationError> {
    let mut plan = self.lesson_template.clone();
    if plan.objectives.is_empty() || plan.activities.is_empty() {
      return Err(GenerationError::EmptyLessonTemplate);
    }
    plan.duration = duration.to_string();
    plan.focus = focus.label().to_string();

    match focus {
      Focus::ThemeAnalysis => {
        *slot(&mut plan.objectives, "objective", 1)? = THEME_OBJECTIVE.into();
        slot(&mut plan.activities, "activity", 3)?.description = THEME_DISCUSSION.into();
      }
      Focus::ReadingComprehension => {
        slot(&mut plan.activities, "activity", 1)?.description = COMPREHENSION_READING.into();
      }
      Focus::CharacterAnalysis => {}
    }

    debug!(target: "generator", %duration, focus = focus.label(), "Lesson plan generated");
    Ok(plan)
  }

  /// First `min(question_count, bank size)` questions of the bank.
  /// Difficulty is recorded on the quiz but does not change the selection.
  #[instrument(level = "debug", skip(self), fields(difficulty = difficulty.label()))]
  pub fn quiz(&self, difficulty: Difficulty, question_count: usize) -> Result<Quiz, GenerationError> {
    if self.question_bank.is_empty() {
      return Err(GenerationError::EmptyQuestionBank);
    }
    let take = question_count.min(self.question_bank.len());
    let questions = self.question_bank[..take].to_vec();
    for (index, q) in questions.iter().enumerate() {
      check_question(index, q)?;
    }

    debug!(target: "generator", requested = question_count, selected = take, "Quiz generated");
    Ok(Quiz {
      title: QUIZ_TITLE.into(),
      difficulty,
      question_count: questions.len(),
      instructions: QUIZ_INSTRUCTIONS.into(),
      questions,
    })
  }
}

fn slot<'a, T>(items: &'a mut [T], section: &'static str, index: usize) -> Result<&'a mut T, GenerationError> {
  items.get_mut(index).ok_or(GenerationError::MissingTemplateSlot { section, index })
}

fn check_question(index: usize, q: &QuizQuestion) -> Result<(), GenerationError> {
  if q.options.len() != OPTIONS_PER_QUESTION {
    return Err(GenerationError::MalformedQuestion {
      index,
      reason: format!("expected {} options, found {}", OPTIONS_PER_QUESTION, q.options.len()),
    });
  }
  if !q.options.iter().any(|o| o == &q.correct_answer) {
    return Err(GenerationError::MalformedQuestion {
      index,
      reason: "correct answer is not one of the options".into(),
    });
  }
  Ok(())
}
