//! Rendering of assistant responses into chat-friendly display text.
//!
//! Pure and deterministic. Blank fields render a fixed placeholder instead of
//! an empty line so the layout stays recognizable.

use std::fmt::Write;

use crate::domain::{Content, LessonPlan, Quiz};
use crate::logic::AssistantResponse;
use crate::util::{option_letter, or_placeholder};

const NOT_AVAILABLE: &str = "N/A";

pub fn format_for_display(resp: &AssistantResponse) -> String {
  match resp {
    AssistantResponse::Clarify { message } => message.clone(),
    AssistantResponse::Generated(g) => match &g.content {
      Content::LessonPlan(plan) => format_lesson_plan(plan),
      Content::Quiz(quiz) => format_quiz(quiz),
    },
  }
}

// `write!` into a String cannot fail, hence the ignored results below.
pub fn format_lesson_plan(plan: &LessonPlan) -> String {
  let mut out = String::from("📚 LESSON PLAN\n\n");
  let _ = writeln!(out, "Title: {}\n", or_placeholder(&plan.title, "Lesson Plan"));
  let _ = writeln!(out, "Duration: {}", or_placeholder(&plan.duration, "45 minutes"));
  let _ = writeln!(out, "Grade Level: {}", or_placeholder(&plan.grade_level, "10th Grade"));
  let _ = writeln!(out, "Subject: {}", or_placeholder(&plan.subject, "English Literature"));
  let _ = writeln!(out, "Topic: {}", or_placeholder(&plan.topic, "His First Flight"));
  let _ = writeln!(out, "Focus: {}\n", or_placeholder(&plan.focus, "Character Analysis"));

  out.push_str("🎯 LEARNING OBJECTIVES:\n");
  for (i, obj) in plan.objectives.iter().enumerate() {
    let _ = writeln!(out, "{}. {}", i + 1, obj);
  }
  out.push('\n');

  out.push_str("📦 MATERIALS NEEDED:\n");
  for material in &plan.materials {
    let _ = writeln!(out, "• {}", material);
  }
  out.push('\n');

  out.push_str("🕒 ACTIVITIES:\n");
  for a in &plan.activities {
    let _ = writeln!(out, "{} - {}:", or_placeholder(&a.time, "Time"), or_placeholder(&a.name, "Activity"));
    let _ = writeln!(out, "  {}\n", or_placeholder(&a.description, "Description"));
  }

  out.push_str("📝 ASSESSMENT:\n");
  let _ = writeln!(out, "{}:", or_placeholder(&plan.assessment.kind, "Assessment"));
  let _ = writeln!(out, "{}\n", or_placeholder(&plan.assessment.description, "Description"));

  out.push_str("🎓 DIFFERENTIATION:\n");
  let d = &plan.differentiation;
  let _ = writeln!(out, "For struggling learners: {}", or_placeholder(&d.struggling, NOT_AVAILABLE));
  let _ = writeln!(out, "For advanced learners: {}", or_placeholder(&d.advanced, NOT_AVAILABLE));
  out
}

pub fn format_quiz(quiz: &Quiz) -> String {
  let mut out = String::from("📝 QUIZ\n\n");
  let _ = writeln!(out, "Title: {}", or_placeholder(&quiz.title, "Quiz"));
  let _ = writeln!(out, "Difficulty: {}", quiz.difficulty.label());
  let _ = writeln!(out, "Questions: {}", quiz.question_count);
  let _ = writeln!(
    out,
    "Instructions: {}\n",
    or_placeholder(&quiz.instructions, "Select the best answer for each question.")
  );
  let _ = writeln!(out, "{}\n", "=".repeat(50));

  for (i, q) in quiz.questions.iter().enumerate() {
    let _ = writeln!(out, "QUESTION {}: {}\n", i + 1, or_placeholder(&q.prompt, "Question"));
    for (j, option) in q.options.iter().enumerate() {
      let _ = writeln!(out, "  {}) {}", option_letter(j), option);
    }
    let _ = writeln!(out, "\n✅ ANSWER: {}", or_placeholder(&q.correct_answer, "Answer"));
    if let Some(explanation) = q.explanation.as_deref().filter(|e| !e.trim().is_empty()) {
      let _ = writeln!(out, "💡 EXPLANATION: {}", explanation);
    }
    let _ = writeln!(out, "\n{}\n", "-".repeat(40));
  }
  out
}
