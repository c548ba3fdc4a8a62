use serde::{Deserialize, Serialize};

/// Snapshot of the cursor line at the moment of a keystroke.
///
/// Created by the editor boundary on every relevant edit and consumed once
/// by the scheduler; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerEvent {
    /// Line content from column 0 up to the cursor.
    pub prefix_text: String,
    /// Leading whitespace of the trigger line, possibly empty.
    pub line_indentation: String,
}

impl TriggerEvent {
    pub const fn new(prefix_text: String, line_indentation: String) -> Self {
        Self {
            prefix_text,
            line_indentation,
        }
    }
}

/// One fully-formed replacement string ready to present at the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub text: String,
}

impl Candidate {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub ollama_url: String,
    pub model: String,
    /// Quiet period after the last keystroke before a request is sent.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_timeout")]
    pub request_timeout: u64,
}

const fn default_debounce_ms() -> u64 {
    2000
}

const fn default_timeout() -> u64 {
    600
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ollama_url: "http://localhost:11434".to_string(),
            model: "qwen2.5-coder:1.5b".to_string(),
            debounce_ms: default_debounce_ms(),
            request_timeout: default_timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_event_fields() {
        let event = TriggerEvent::new("  let x = ".to_string(), "  ".to_string());
        assert_eq!(event.prefix_text, "  let x = ");
        assert_eq!(event.line_indentation, "  ");
    }

    #[test]
    fn test_candidate_new() {
        let candidate = Candidate::new("foo()");
        assert_eq!(candidate.text, "foo()");
    }

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.ollama_url, "http://localhost:11434");
        assert_eq!(config.model, "qwen2.5-coder:1.5b");
        assert_eq!(config.debounce_ms, 2000);
        assert_eq!(config.request_timeout, 600);
    }

    #[test]
    fn test_app_config_missing_fields_use_defaults() {
        let toml_str = r#"
            ollama_url = "http://custom:8080"
            model = "codellama"
        "#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ollama_url, "http://custom:8080");
        assert_eq!(config.debounce_ms, 2000);
        assert_eq!(config.request_timeout, 600);
    }
}
