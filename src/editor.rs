// Document boundary between the host editor and the suggestion pipeline

use crate::models::TriggerEvent;

/// Capability the host editor injects so the pipeline can read line text
/// without depending on any concrete document type.
#[cfg_attr(test, mockall::automock)]
pub trait Document {
    /// Full text of the given zero-based line, if it exists.
    fn line(&self, row: usize) -> Option<String>;
}

/// Plain line-buffer document, enough for the demo binary.
pub struct InMemoryDocument {
    lines: Vec<String>,
}

impl InMemoryDocument {
    pub fn new(text: &str) -> Self {
        Self {
            lines: text.lines().map(ToString::to_string).collect(),
        }
    }
}

impl Document for InMemoryDocument {
    fn line(&self, row: usize) -> Option<String> {
        self.lines.get(row).cloned()
    }
}

/// Derive the trigger event for a cursor position, or `None` when nothing
/// should be suggested there.
///
/// The prefix is the line text up to the cursor column (in characters). A
/// prefix that is blank after trimming suppresses the trigger, as does a row
/// past the end of the document.
pub fn trigger_at(document: &dyn Document, row: usize, column: usize) -> Option<TriggerEvent> {
    let line = document.line(row)?;
    let prefix: String = line.chars().take(column).collect();

    if prefix.trim().is_empty() {
        return None;
    }

    let indentation: String = prefix.chars().take_while(|c| c.is_whitespace()).collect();

    Some(TriggerEvent::new(prefix, indentation))
}
