// Recovers the code-only continuation from a raw model response

/// Pull the usable code out of a free-form model response.
///
/// If the response carries a triple-backtick fenced block, the trimmed
/// contents of the first one win; only the `javascript`/`js` fence tags are
/// recognized, any other tag stays in the extracted text. An opening fence
/// without a closing fence does not count as a block. Without a block the
/// whole response is returned trimmed, since the model may already answer
/// with bare code.
pub fn extract_code(raw: &str) -> String {
    if let Some(open) = raw.find("```") {
        let after_open = &raw[open + 3..];
        let body = after_open
            .strip_prefix("javascript")
            .or_else(|| after_open.strip_prefix("js"))
            .unwrap_or(after_open);

        if let Some(close) = body.find("```") {
            return body[..close].trim().to_string();
        }
    }

    raw.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_js_tagged_fence() {
        assert_eq!(extract_code("```js\nfoo()\n```"), "foo()");
    }

    #[test]
    fn test_extract_javascript_tagged_fence() {
        assert_eq!(extract_code("```javascript\nfoo();\nbar();\n```"), "foo();\nbar();");
    }

    #[test]
    fn test_extract_untagged_fence() {
        assert_eq!(extract_code("Here you go:\n```\nlet x = 1;\n```\nEnjoy!"), "let x = 1;");
    }

    #[test]
    fn test_extract_bare_code_passes_through() {
        assert_eq!(extract_code("plain code"), "plain code");
    }

    #[test]
    fn test_extract_trims_bare_code() {
        assert_eq!(extract_code("  foo()  \n"), "foo()");
    }

    #[test]
    fn test_extract_whitespace_only_is_empty() {
        assert_eq!(extract_code("   \n  "), "");
    }

    #[test]
    fn test_extract_is_idempotent_on_fence_free_input() {
        let once = extract_code("```js\nfoo()\n```");
        assert_eq!(extract_code(&once), once);
    }

    #[test]
    fn test_extract_unclosed_fence_falls_back_to_trimmed_whole() {
        assert_eq!(extract_code("```js\nfoo()"), "```js\nfoo()");
    }

    #[test]
    fn test_extract_takes_first_of_multiple_blocks() {
        assert_eq!(
            extract_code("```js\nfirst()\n```\ntext\n```js\nsecond()\n```"),
            "first()"
        );
    }

    #[test]
    fn test_extract_keeps_unrecognized_tag_in_block() {
        assert_eq!(extract_code("```python\nprint(1)\n```"), "python\nprint(1)");
    }
}
