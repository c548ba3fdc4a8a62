// Turns extracted text into presentable completion candidates

use crate::models::Candidate;

/// Build the ordered candidate list for an extracted continuation.
///
/// The unmodified text always comes first. When the trigger line is
/// indented, a second variant follows with that indentation prepended to
/// every non-empty line, for multi-line continuations landing inside an
/// indented block. Whitespace-only input yields no candidates.
pub fn build_candidates(extracted: &str, line_indentation: &str) -> Vec<Candidate> {
    if extracted.trim().is_empty() {
        return Vec::new();
    }

    let mut candidates = vec![Candidate::new(extracted)];

    if !line_indentation.is_empty() {
        let indented = extracted
            .split('\n')
            .map(|line| {
                if line.is_empty() {
                    line.to_string()
                } else {
                    format!("{line_indentation}{line}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n");

        candidates.push(Candidate::new(indented));
    }

    candidates
}
