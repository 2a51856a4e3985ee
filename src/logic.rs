//! Core behavior shared by the HTTP handlers: classify, extract, generate.
//!
//! The result is always a usable answer. Ambiguous requests get a clarification
//! message; generation faults take the fallback branch and serve built-in
//! content with default parameters.

use tracing::{error, info, instrument};

use crate::classifier::{classify, extract_parameters};
use crate::domain::{Content, Difficulty, Focus, Intent, DEFAULT_DURATION, DEFAULT_QUESTION_COUNT};
use crate::generator::{ContentGenerator, GenerationError};
use crate::state::AppState;

/// Why the fallback branch served the content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FallbackReason {
  Generation(GenerationError),
}

impl From<GenerationError> for FallbackReason {
  fn from(e: GenerationError) -> Self {
    FallbackReason::Generation(e)
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Origin {
  Template,
  Fallback(FallbackReason),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generated {
  pub intent: Intent,
  pub content: Content,
  pub note: String,
  pub origin: Origin,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssistantResponse {
  /// Intent could not be determined; `message` tells the user how to ask.
  Clarify { message: String },
  Generated(Generated),
}

impl AssistantResponse {
  pub fn is_success(&self) -> bool {
    matches!(self, AssistantResponse::Generated(_))
  }
}

#[instrument(level = "info", skip(state, text), fields(text_len = text.len()))]
pub fn generate_response(state: &AppState, text: &str) -> AssistantResponse {
  let intent = classify(text);
  info!(target: "eduassist", ?intent, "Task identified");

  if intent == Intent::Ambiguous {
    return AssistantResponse::Clarify { message: state.messages.help.clone() };
  }

  let params = extract_parameters(text);
  let generated = match intent {
    Intent::Quiz => state.generator.quiz(params.difficulty, params.question_count).map(Content::Quiz),
    _ => state.generator.lesson_plan(&params.duration, params.focus).map(Content::LessonPlan),
  };

  match generated {
    Ok(content) => AssistantResponse::Generated(Generated {
      intent: content.intent(),
      content,
      note: state.messages.template_note.clone(),
      origin: Origin::Template,
    }),
    Err(e) => {
      error!(target: "eduassist", ?intent, error = %e, "Generation failed; serving fallback content");
      fallback(state, text, e.into())
    }
  }
}

/// Built-in content with default parameters: a quiz if the raw input mentions
/// one, otherwise a lesson plan.
fn fallback(state: &AppState, text: &str, reason: FallbackReason) -> AssistantResponse {
  let builtin = ContentGenerator::default();
  let content = if text.to_lowercase().contains("quiz") {
    builtin.quiz(Difficulty::default(), DEFAULT_QUESTION_COUNT).map(Content::Quiz)
  } else {
    builtin.lesson_plan(DEFAULT_DURATION, Focus::default()).map(Content::LessonPlan)
  };

  match content {
    Ok(content) => AssistantResponse::Generated(Generated {
      intent: content.intent(),
      content,
      note: state.messages.fallback_note.clone(),
      origin: Origin::Fallback(reason),
    }),
    // Built-in seeds are covered by `builtin_content_always_validates`.
    Err(e) => {
      error!(target: "eduassist", error = %e, "Built-in content failed validation");
      AssistantResponse::Clarify { message: state.messages.help.clone() }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::AssistantConfig;
  use crate::seeds::{lesson_plan_template, question_bank};

  fn generated(resp: AssistantResponse) -> Generated {
    match resp {
      AssistantResponse::Generated(g) => g,
      other => panic!("expected generated content, got {other:?}"),
    }
  }

  #[test]
  fn builtin_content_always_validates() {
    let gen = ContentGenerator::default();
    for focus in [Focus::CharacterAnalysis, Focus::ThemeAnalysis, Focus::ReadingComprehension] {
      assert!(gen.lesson_plan(DEFAULT_DURATION, focus).is_ok());
    }
    assert!(gen.quiz(Difficulty::Medium, gen.bank_size()).is_ok());
  }

  #[test]
  fn ambiguous_request_asks_for_clarification() {
    let state = AppState::default();
    let resp = generate_response(&state, "hello");
    assert!(!resp.is_success());
    assert_eq!(resp, AssistantResponse::Clarify { message: state.messages.help.clone() });
  }

  #[test]
  fn lesson_request_uses_template() {
    let state = AppState::default();
    let g = generated(generate_response(&state, "Make me a 30 min lesson plan about the theme"));
    assert_eq!(g.intent, Intent::LessonPlan);
    assert_eq!(g.origin, Origin::Template);
    assert_eq!(g.note, state.messages.template_note);
    match g.content {
      Content::LessonPlan(plan) => {
        assert_eq!(plan.duration, "30 minutes");
        assert_eq!(plan.focus, "theme analysis");
      }
      other => panic!("expected lesson plan, got {other:?}"),
    }
  }

  #[test]
  fn quiz_request_uses_template() {
    let state = AppState::default();
    let g = generated(generate_response(&state, "Create an easy 3 question quiz about His First Flight"));
    assert_eq!(g.intent, Intent::Quiz);
    match g.content {
      Content::Quiz(quiz) => {
        assert_eq!(quiz.question_count, 3);
        assert_eq!(quiz.difficulty, Difficulty::Easy);
      }
      other => panic!("expected quiz, got {other:?}"),
    }
  }

  #[test]
  fn malformed_bank_falls_back_to_builtin_quiz() {
    let mut bank = question_bank();
    bank[0].options.truncate(2);
    let state = AppState::from_config(AssistantConfig { questions: Some(bank), ..Default::default() });

    let g = generated(generate_response(&state, "Give me a quiz"));
    assert_eq!(g.intent, Intent::Quiz);
    assert_eq!(g.note, state.messages.fallback_note);
    assert!(matches!(
      g.origin,
      Origin::Fallback(FallbackReason::Generation(GenerationError::MalformedQuestion { index: 0, .. }))
    ));
    match g.content {
      Content::Quiz(quiz) => assert_eq!(quiz.questions, question_bank()),
      other => panic!("expected quiz, got {other:?}"),
    }
  }

  #[test]
  fn fallback_without_quiz_word_serves_lesson_plan() {
    // Classified as Quiz ("test"), but the raw text never says "quiz".
    let state = AppState::from_config(AssistantConfig { questions: Some(Vec::new()), ..Default::default() });
    let g = generated(generate_response(&state, "a test on the story"));
    assert_eq!(g.intent, Intent::LessonPlan);
    assert_eq!(g.origin, Origin::Fallback(FallbackReason::Generation(GenerationError::EmptyQuestionBank)));
    match g.content {
      Content::LessonPlan(plan) => {
        assert_eq!(plan.duration, DEFAULT_DURATION);
        assert_eq!(plan, {
          let mut p = lesson_plan_template();
          p.duration = DEFAULT_DURATION.into();
          p.focus = Focus::CharacterAnalysis.label().into();
          p
        });
      }
      other => panic!("expected lesson plan, got {other:?}"),
    }
  }

  #[test]
  fn short_lesson_template_falls_back_for_theme_focus() {
    let mut template = lesson_plan_template();
    template.objectives.truncate(1);
    let state = AppState::from_config(AssistantConfig { lesson_plan: Some(template), ..Default::default() });

    let ok = generated(generate_response(&state, "a lesson plan on character"));
    assert_eq!(ok.origin, Origin::Template);

    let g = generated(generate_response(&state, "a lesson plan on the theme"));
    assert_eq!(
      g.origin,
      Origin::Fallback(FallbackReason::Generation(GenerationError::MissingTemplateSlot {
        section: "objective",
        index: 1
      }))
    );
    assert_eq!(g.intent, Intent::LessonPlan);
  }
}
