//! Inline code-completion suggestions backed by a local Ollama model.
//!
//! Edit triggers enter the [`scheduler::RequestScheduler`], which debounces
//! them, asks the backend for a continuation, extracts the code from the raw
//! response and delivers indentation-aware candidates over a channel.

pub mod api;
pub mod candidates;
pub mod config;
pub mod editor;
pub mod extract;
pub mod models;
pub mod scheduler;

pub use api::{CompletionClient, FetchError};
pub use models::{AppConfig, Candidate, TriggerEvent};
pub use scheduler::RequestScheduler;
