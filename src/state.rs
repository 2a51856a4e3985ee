//! Application state: the content generator and user-facing messages.
//!
//! Built once at startup and shared read-only through `Arc<AppState>`; nothing
//! in here changes after construction, so no locking is involved.

use tracing::{info, instrument};

use crate::config::{load_config_from_env, AssistantConfig, Messages};
use crate::generator::ContentGenerator;
use crate::seeds::{lesson_plan_template, question_bank};

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub generator: ContentGenerator,
    pub messages: Messages,
}

impl AppState {
    /// Build state from env: load optional config, then apply it over the built-in seeds.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        Self::from_config(load_config_from_env().unwrap_or_default())
    }

    pub fn from_config(cfg: AssistantConfig) -> Self {
        let lesson_source = if cfg.lesson_plan.is_some() { "config" } else { "seed" };
        let bank_source = if cfg.questions.is_some() { "config" } else { "seed" };

        let generator = ContentGenerator::new(
            cfg.lesson_plan.unwrap_or_else(lesson_plan_template),
            cfg.questions.unwrap_or_else(question_bank),
        );
        info!(
            target: "eduassist",
            lesson_template = lesson_source,
            question_bank = bank_source,
            bank_size = generator.bank_size(),
            "Startup content inventory"
        );

        Self { generator, messages: cfg.messages }
    }
}
