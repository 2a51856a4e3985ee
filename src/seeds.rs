//! Built-in content: the lesson plan template and the quiz question bank.
//!
//! These guarantee the app is useful without any external config, and they are
//! what the fallback branch serves when a configured template is unusable.

use crate::domain::{Activity, Assessment, Differentiation, LessonPlan, QuizQuestion};

pub const QUIZ_TITLE: &str = "Comprehension Quiz: His First Flight";
pub const QUIZ_INSTRUCTIONS: &str = "Read each question carefully and select the best answer.";

// Focus-specific replacements applied on top of the lesson template.
pub const THEME_OBJECTIVE: &str = "Analyze the central theme of courage versus fear in depth";
pub const THEME_DISCUSSION: &str =
  "Group discussion on how the theme of courage is developed through the seagull's journey";
pub const COMPREHENSION_READING: &str = "Comprehension questions and vocabulary building from the text";

fn activity(time: &str, name: &str, description: &str) -> Activity {
  Activity { time: time.into(), name: name.into(), description: description.into() }
}

/// Lesson plan template (character analysis is the unmodified form).
pub fn lesson_plan_template() -> LessonPlan {
  LessonPlan {
    title: "Lesson Plan: His First Flight - Character Analysis".into(),
    duration: String::new(),
    grade_level: "10th Grade".into(),
    subject: "English Literature".into(),
    topic: "His First Flight by Liam O'Flaherty".into(),
    focus: String::new(),
    objectives: vec![
      "Analyze the character development of the young seagull".into(),
      "Understand the theme of overcoming fear and building confidence".into(),
      "Identify literary devices used to portray character emotions".into(),
      "Relate the story's themes to personal experiences of overcoming challenges".into(),
    ],
    materials: vec![
      "Copies of 'His First Flight' story".into(),
      "Whiteboard and markers".into(),
      "Character analysis worksheets".into(),
      "Projector for visual aids (optional)".into(),
    ],
    activities: vec![
      activity(
        "10 minutes",
        "Introduction & Warm-up",
        "Discuss: 'Have you ever been afraid to try something new? How did you overcome your fear?'",
      ),
      activity(
        "15 minutes",
        "Guided Reading & Analysis",
        "Read key passages highlighting the seagull's fear, hesitation, and eventual courage. Focus on descriptive language.",
      ),
      activity(
        "10 minutes",
        "Character Mapping",
        "Create a character trait chart showing how the seagull changes from beginning to end",
      ),
      activity(
        "10 minutes",
        "Group Discussion",
        "Discuss what motivated the seagull to finally fly and how hunger played a role",
      ),
    ],
    assessment: Assessment {
      kind: "Writing Assignment".into(),
      description: "Write a paragraph analyzing how the young seagull's character develops throughout the story, citing specific examples from the text.".into(),
    },
    differentiation: Differentiation {
      struggling: "Provide sentence starters for the writing assignment".into(),
      advanced: "Research and compare with other coming-of-age stories about overcoming fear".into(),
    },
  }
}

fn question(prompt: &str, options: [&str; 4], correct: &str, explanation: &str) -> QuizQuestion {
  QuizQuestion {
    prompt: prompt.into(),
    options: options.iter().map(|o| o.to_string()).collect(),
    correct_answer: correct.into(),
    explanation: Some(explanation.into()),
  }
}

/// The fixed, ordered question bank (5 entries).
pub fn question_bank() -> Vec<QuizQuestion> {
  vec![
    question(
      "Why was the young seagull afraid to fly?",
      [
        "He had injured wings",
        "He lacked confidence and was scared of failing",
        "Other seagulls bullied him",
        "The weather was too stormy",
      ],
      "He lacked confidence and was scared of failing",
      "The story emphasizes the seagull's fear and lack of confidence rather than physical limitations.",
    ),
    question(
      "What finally motivated the young seagull to fly?",
      [
        "His parents forced him to fly",
        "He saw his family eating and became very hungry",
        "Another bird showed him how to fly",
        "A storm forced him to leave the ledge",
      ],
      "He saw his family eating and became very hungry",
      "Hunger was the primary motivation that overcame his fear.",
    ),
    question(
      "How did the young seagull feel after his first successful flight?",
      [
        "Still afraid and uncertain",
        "Exhausted and tired",
        "Proud, happy, and confident",
        "Angry at his family for leaving him",
      ],
      "Proud, happy, and confident",
      "The story describes his joy and newfound confidence after successfully flying.",
    ),
    question(
      "What is the main theme of 'His First Flight'?",
      [
        "The importance of family relationships",
        "Overcoming fear and gaining self-confidence",
        "The beauty of nature and flying",
        "The struggle for survival in the wild",
      ],
      "Overcoming fear and gaining self-confidence",
      "The central theme revolves around conquering fear and building self-confidence.",
    ),
    question(
      "How did the seagull's parents try to help him overcome his fear?",
      [
        "They brought him food regularly",
        "They scolded and criticized him",
        "They called to him encouragingly and demonstrated flying",
        "They left him alone to figure it out himself",
      ],
      "They called to him encouragingly and demonstrated flying",
      "His parents used encouragement and demonstration rather than force.",
    ),
  ]
}
