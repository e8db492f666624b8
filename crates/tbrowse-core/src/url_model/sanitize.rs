//! Linux-safe file-name sanitization for page names.

/// Sanitizes a candidate page name so it can be used directly as a file name.
///
/// - Replaces NUL, `/`, `\`, whitespace and control characters with `_`
/// - Collapses consecutive underscores
/// - Trims leading/trailing dots, dashes and underscores
/// - Limits length to 255 bytes (Linux NAME_MAX)
pub fn sanitize_page_name(name: &str) -> String {
    const NAME_MAX: usize = 255;

    let mut out = String::with_capacity(name.len());
    let mut prev_underscore = false;

    for c in name.chars() {
        let bad = c == '\0' || c == '/' || c == '\\' || c.is_control() || c.is_whitespace();
        if bad {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        } else {
            out.push(c);
            prev_underscore = false;
        }
    }

    let trimmed = out.trim_matches(|c: char| c == '.' || c == '-' || c == '_');

    if trimmed.len() > NAME_MAX {
        let mut take = NAME_MAX;
        while take > 0 && !trimmed.is_char_boundary(take) {
            take -= 1;
        }
        trimmed[..take].to_string()
    } else {
        trimmed.to_string()
    }
}
