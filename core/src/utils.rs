use serde::de::IgnoredAny;

/// Check that `payload` is a single well-formed JSON document.
///
/// The framer does not need JSON; this is only used to warn an operator who
/// points the tool at the wrong file.
pub fn check_json(payload: &[u8]) -> Result<(), serde_json::Error> {
    serde_json::from_slice::<IgnoredAny>(payload).map(|_| ())
}

/// Render frame texts one per line, newline-terminated.
pub fn frames_to_lines<S: AsRef<str>>(texts: &[S]) -> String {
    let mut out = String::with_capacity(texts.iter().map(|t| t.as_ref().len() + 1).sum());
    for t in texts {
        out.push_str(t.as_ref());
        out.push('\n');
    }
    out
}

/// Split a frames file into texts, skipping blank lines.
pub fn lines_to_frames(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}
