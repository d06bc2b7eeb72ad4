//! Potion naming through a chat-completion endpoint.
//!
//! One request per brew, no retries. The fetch is aborted once
//! `naming_timeout_ms` passes, and every failure collapses into the
//! configured fallback name in [`name_or_fallback`].

use gloo::timers::callback::Timeout;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Request, RequestInit, Response, Window};

use crate::config::BrewConfig;
use crate::util::cwarn;

/// Longest name shown under a potion.
pub const MAX_NAME_WORDS: usize = 3;

#[derive(Debug, Error, PartialEq)]
pub enum NamingError {
    #[error("no browser window available")]
    NoWindow,
    #[error("failed to build request: {0}")]
    Request(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("naming service returned status {0}")]
    Status(u16),
    #[error("failed to read response body: {0}")]
    Body(String),
    #[error("invalid completion payload: {0}")]
    Decode(String),
    #[error("completion contained no usable name")]
    EmptyCompletion,
}

fn js_err(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: Option<ChatReply>,
}

#[derive(Deserialize)]
struct ChatReply {
    content: Option<String>,
}

pub fn request_body(config: &BrewConfig) -> Result<String, NamingError> {
    let body = ChatRequest {
        model: &config.model,
        messages: [ChatMessage { role: "user", content: &config.prompt }],
    };
    serde_json::to_string(&body).map_err(|e| NamingError::Request(e.to_string()))
}

/// Pulls `choices[0].message.content` out of a completion and cleans it up.
pub fn parse_completion(raw: &str) -> Result<String, NamingError> {
    let response: ChatResponse = serde_json::from_str(raw).map_err(|e| NamingError::Decode(e.to_string()))?;
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .and_then(|content| sanitize_name(&content))
        .ok_or(NamingError::EmptyCompletion)
}

/// First line that still has words once wrapping quotes and trailing
/// punctuation are dropped; whitespace collapsed, capped at [`MAX_NAME_WORDS`].
pub fn sanitize_name(raw: &str) -> Option<String> {
    const QUOTES: &[char] = &['"', '\'', '`', '*', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}'];
    const TRAILING: &[char] = &['.', '!', '?', ',', ';', ':'];
    raw.lines().find_map(|line| {
        let line = line.trim().trim_matches(QUOTES).trim_end_matches(TRAILING).trim_matches(QUOTES);
        let words: Vec<&str> = line.split_whitespace().take(MAX_NAME_WORDS).collect();
        if words.is_empty() { None } else { Some(words.join(" ")) }
    })
}

async fn fetch_text(window: &Window, request: &Request) -> Result<String, NamingError> {
    let resp_value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(|e| NamingError::Network(js_err(e)))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| NamingError::Network(js_err(e)))?;
    if !resp.ok() {
        return Err(NamingError::Status(resp.status()));
    }
    let text_promise = resp.text().map_err(|e| NamingError::Body(js_err(e)))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| NamingError::Body(js_err(e)))?;
    text.as_string()
        .ok_or_else(|| NamingError::Body("response body is not text".into()))
}

pub async fn request_name(config: &BrewConfig) -> Result<String, NamingError> {
    let window = web_sys::window().ok_or(NamingError::NoWindow)?;
    let body = request_body(config)?;
    let controller = AbortController::new().map_err(|e| NamingError::Request(js_err(e)))?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&body));
    init.set_signal(Some(&controller.signal()));
    let request = Request::new_with_str_and_init(&config.endpoint, &init)
        .map_err(|e| NamingError::Request(js_err(e)))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| NamingError::Request(js_err(e)))?;

    // Dropping the guard cancels the abort once the body is in.
    let abort_guard = Timeout::new(config.naming_timeout_ms, move || controller.abort());
    let text = fetch_text(&window, &request).await;
    drop(abort_guard);
    parse_completion(&text?)
}

pub async fn name_or_fallback(config: &BrewConfig) -> String {
    match request_name(config).await {
        Ok(name) => name,
        Err(err) => {
            cwarn(&format!("potion naming failed, using fallback: {}", err));
            config.fallback_name.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_carries_model_and_prompt() {
        let config = BrewConfig::default();
        let body = request_body(&config).expect("serializable");
        let value: serde_json::Value = serde_json::from_str(&body).expect("json");
        assert_eq!(value["model"], "moonshotai/kimi-k2-instruct-0905");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], config.prompt.as_str());
        assert_eq!(value["messages"].as_array().map(|a| a.len()), Some(1));
    }

    #[test]
    fn completion_content_is_surfaced() {
        let raw = r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"  Midnight Delight\n"}}]}"#;
        assert_eq!(parse_completion(raw), Ok("Midnight Delight".to_string()));
    }

    #[test]
    fn missing_or_blank_content_is_an_error() {
        assert_eq!(parse_completion(r#"{"choices":[]}"#), Err(NamingError::EmptyCompletion));
        assert_eq!(parse_completion(r#"{}"#), Err(NamingError::EmptyCompletion));
        assert_eq!(parse_completion(r#"{"choices":[{"message":{"content":"   "}}]}"#), Err(NamingError::EmptyCompletion));
        assert_eq!(parse_completion(r#"{"choices":[{"message":null}]}"#), Err(NamingError::EmptyCompletion));
    }

    #[test]
    fn decoration_lines_before_the_name_are_skipped() {
        assert_eq!(sanitize_name("**\nMidnight Delight"), Some("Midnight Delight".into()));
        assert_eq!(sanitize_name("\"\"\n\n  ...\n\u{201C}Spooky Sweet\u{201D}"), Some("Spooky Sweet".into()));
        let raw = r#"{"choices":[{"message":{"content":"***\nGourd Magic."}}]}"#;
        assert_eq!(parse_completion(raw), Ok("Gourd Magic".to_string()));
    }

    #[test]
    fn garbage_body_is_decode_error() {
        assert!(matches!(parse_completion("<html>502</html>"), Err(NamingError::Decode(_))));
    }

    #[test]
    fn sanitize_strips_quotes_punctuation_and_extra_words() {
        assert_eq!(sanitize_name("\"Spooky Sweet.\""), Some("Spooky Sweet".into()));
        assert_eq!(sanitize_name("\u{201C}Gourd Magic!\u{201D}"), Some("Gourd Magic".into()));
        assert_eq!(sanitize_name("**Hollow   Moon Nectar Supreme**"), Some("Hollow Moon Nectar".into()));
        assert_eq!(sanitize_name("Witching Hour\nHope you like it"), Some("Witching Hour".into()));
        assert_eq!(sanitize_name("\"\""), None);
        assert_eq!(sanitize_name("\n  \n"), None);
        assert_eq!(sanitize_name(""), None);
    }
}
