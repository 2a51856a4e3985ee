//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented and logs basic request/result info.

use std::sync::Arc;
use axum::{extract::{rejection::JsonRejection, State}, http::StatusCode, response::{IntoResponse, Response}, Json};
use tracing::{debug, error, info, instrument, warn};

use crate::formatter::format_for_display;
use crate::logic::{generate_response, AssistantResponse, Origin};
use crate::protocol::*;
use crate::routes::INTERNAL_ERROR_MESSAGE;
use crate::state::AppState;
use crate::util::trunc_for_log;

/// Request text from a JSON body. A missing or unparseable body carries no
/// message (empty text, 400 upstream); well-formed JSON with the wrong field
/// types is an internal error (500).
fn request_text(body: Result<Json<AskIn>, JsonRejection>) -> Result<String, Response> {
  match body {
    Ok(Json(b)) => Ok(b.text()),
    Err(JsonRejection::JsonDataError(e)) => {
      error!(target: "eduassist", error = %e, "Request body has unexpected shape");
      Err(internal_error())
    }
    Err(e) => {
      debug!(target: "eduassist", error = %e, "Unusable request body");
      Ok(String::new())
    }
  }
}

fn internal_error() -> Response {
  (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorOut { error: INTERNAL_ERROR_MESSAGE.into() })).into_response()
}

fn bad_request(error: String) -> Response {
  (StatusCode::BAD_REQUEST, Json(ErrorOut { error })).into_response()
}

#[instrument(level = "info", skip(state))]
pub async fn http_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  Json(HealthOut { status: "healthy".into(), message: state.messages.health.clone() })
}

#[instrument(level = "info", skip(state, body))]
pub async fn http_post_ask(
  State(state): State<Arc<AppState>>,
  body: Result<Json<AskIn>, JsonRejection>,
) -> Response {
  let text = match request_text(body) {
    Ok(text) => text,
    Err(res) => return res,
  };
  info!(target: "eduassist", input = %trunc_for_log(&text, 200), "User input");
  if text.is_empty() {
    return bad_request(state.messages.empty_input.clone());
  }

  let resp = generate_response(&state, &text);
  match &resp {
    AssistantResponse::Clarify { message } => {
      warn!(target: "eduassist", "Ambiguous request; asking for clarification");
      bad_request(message.clone())
    }
    AssistantResponse::Generated(g) => {
      let formatted = format_for_display(&resp);
      let response = if g.note.is_empty() { formatted } else { format!("📝 {}\n\n{}", g.note, formatted) };
      info!(target: "eduassist", intent = ?g.intent, fallback = matches!(g.origin, Origin::Fallback(_)), "Response generated");
      Json(AskOut { response }).into_response()
    }
  }
}

#[instrument(level = "info", skip(state, body))]
pub async fn http_post_generate(
  State(state): State<Arc<AppState>>,
  body: Result<Json<AskIn>, JsonRejection>,
) -> Response {
  let text = match request_text(body) {
    Ok(text) => text,
    Err(res) => return res,
  };
  if text.is_empty() {
    return bad_request(state.messages.empty_input.clone());
  }

  let resp = generate_response(&state, &text);
  let status = if resp.is_success() { StatusCode::OK } else { StatusCode::BAD_REQUEST };
  info!(target: "eduassist", success = resp.is_success(), "Structured response generated");
  (status, Json(to_out(&resp))).into_response()
}

#[cfg(test)]
mod tests {
  use std::path::Path;

  use axum::{body::Body, http::Request, Router};
  use tower::ServiceExt;

  use super::*;
  use crate::config::{AssistantConfig, Messages};
  use crate::routes::build_router;
  use crate::seeds::question_bank;

  fn app(state: AppState) -> Router {
    build_router(Arc::new(state), Path::new("./static"))
  }

  async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let req = Request::builder()
      .method("POST")
      .uri(uri)
      .header("content-type", "application/json")
      .body(Body::from(body.to_string()))
      .unwrap();
    let res = app.oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
  }

  #[tokio::test]
  async fn health_reports_healthy() {
    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let res = app(AppState::default()).oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let out: HealthOut = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(out.status, "healthy");
    assert_eq!(out.message, Messages::default().health);
  }

  #[tokio::test]
  async fn empty_input_is_rejected() {
    for body in [r#"{"message":"   "}"#, "{}", "not json"] {
      let (status, v) = post_json(app(AppState::default()), "/ask", body).await;
      assert_eq!(status, StatusCode::BAD_REQUEST);
      assert_eq!(v["error"], "Please enter a message.");
    }
  }

  #[tokio::test]
  async fn wrongly_typed_body_is_an_internal_error() {
    for uri in ["/ask", "/api/v1/generate"] {
      let (status, v) = post_json(app(AppState::default()), uri, r#"{"message":123}"#).await;
      assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
      assert_eq!(v["error"], INTERNAL_ERROR_MESSAGE);
    }
  }

  #[tokio::test]
  async fn ambiguous_input_is_a_bad_request() {
    let (status, v) = post_json(app(AppState::default()), "/ask", r#"{"message":"hello"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v["error"], Messages::default().help.as_str());
  }

  #[tokio::test]
  async fn quiz_via_question_field() {
    let (status, v) = post_json(
      app(AppState::default()),
      "/ask",
      r#"{"question":"Generate a 5-question, medium-difficulty quiz for His First Flight"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let text = v["response"].as_str().unwrap();
    assert!(text.starts_with("📝 Generated using specialized template for 'His First Flight'\n\n📝 QUIZ"));
    assert!(text.contains("Questions: 5"));
    assert!(text.contains("QUESTION 5:"));
  }

  #[tokio::test]
  async fn fallback_still_answers_ok() {
    let state = AppState::from_config(AssistantConfig { questions: Some(Vec::new()), ..Default::default() });
    let (status, v) = post_json(app(state), "/ask", r#"{"message":"quiz me"}"#).await;
    assert_eq!(status, StatusCode::OK);
    let text = v["response"].as_str().unwrap();
    assert!(text.starts_with("📝 Generated using emergency fallback\n\n📝 QUIZ"));
    assert!(text.contains(&question_bank()[4].prompt));
  }

  #[tokio::test]
  async fn structured_endpoint() {
    let (status, v) = post_json(app(AppState::default()), "/api/v1/generate", r#"{"message":"a lesson plan"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["success"], true);
    assert_eq!(v["intent"], "lesson_plan");
    assert_eq!(v["content"]["duration"], "45 minutes");

    let (status, v) = post_json(app(AppState::default()), "/api/v1/generate", r#"{"message":"hello"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v["success"], false);
  }
}
