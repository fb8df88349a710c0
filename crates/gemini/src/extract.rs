//! Extraction of embedded JSON from free-form model output.
//!
//! Models often wrap their JSON in prose or markdown fences, so the
//! payload is located by scanning from the first opening bracket to its
//! balanced closing bracket, skipping brackets inside string literals.

/// Extract the first balanced JSON object (`{...}`) from `text`.
pub fn extract_json_object(text: &str) -> Option<&str> {
    extract_balanced(text, '{', '}')
}

/// Extract the first balanced JSON array (`[...]`) from `text`.
pub fn extract_json_array(text: &str) -> Option<&str> {
    extract_balanced(text, '[', ']')
}

fn extract_balanced(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        if ch == '"' {
            in_string = true;
        } else if ch == open {
            depth += 1;
        } else if ch == close {
            depth -= 1;
            if depth == 0 {
                return Some(&text[start..start + offset + ch.len_utf8()]);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_object_inside_prose() {
        let text = "Here is the result:\n```json\n{\"a\": 1}\n```\nEnjoy!";
        assert_eq!(extract_json_object(text), Some("{\"a\": 1}"));
    }

    #[test]
    fn stops_at_the_matching_brace_not_the_last() {
        let text = "{\"a\": {\"b\": 2}} trailing {\"c\": 3}";
        assert_eq!(extract_json_object(text), Some("{\"a\": {\"b\": 2}}"));
    }

    #[test]
    fn braces_inside_strings_are_ignored() {
        let text = "{\"note\": \"a } inside\", \"esc\": \"quote \\\" and }\"}";
        assert_eq!(extract_json_object(text), Some(text));
    }

    #[test]
    fn arrays_extract_independently() {
        let text = "suggestions below\n[{\"title\": \"x\"}]\ndone";
        assert_eq!(extract_json_array(text), Some("[{\"title\": \"x\"}]"));
    }

    #[test]
    fn no_payload_yields_none() {
        assert_eq!(extract_json_object("plain text"), None);
        assert_eq!(extract_json_object("unbalanced { forever"), None);
    }
}
