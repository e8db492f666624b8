//! Parse HTTP response header lines into ResponseMeta.

use super::ResponseMeta;

/// Parse collected header lines into ResponseMeta.
///
/// With redirects followed, curl reports the headers of every hop; only the
/// block after the last status line describes the body we kept.
pub(crate) fn parse_headers(lines: &[String]) -> ResponseMeta {
    let start = lines
        .iter()
        .rposition(|l| l.trim_start().starts_with("HTTP/"))
        .map(|i| i + 1)
        .unwrap_or(0);

    let mut meta = ResponseMeta::default();
    for line in &lines[start..] {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-length") {
                if let Ok(n) = value.parse::<u64>() {
                    meta.content_length = Some(n);
                }
            }
            if name.eq_ignore_ascii_case("content-type") {
                meta.charset = charset_param(value);
                meta.content_type = Some(value.to_string());
            }
        }
    }
    meta
}

/// `charset` parameter of a Content-Type value, lowercased and unquoted.
fn charset_param(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (k, v) = param.split_once('=')?;
        if k.trim().eq_ignore_ascii_case("charset") {
            Some(v.trim().trim_matches('"').to_ascii_lowercase())
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_headers_content_type_and_length() {
        let r = parse_headers(&lines(&[
            "HTTP/1.1 200 OK",
            "Content-Type: text/html; charset=UTF-8",
            "Content-Length: 512",
        ]));
        assert_eq!(r.content_type.as_deref(), Some("text/html; charset=UTF-8"));
        assert_eq!(r.charset.as_deref(), Some("utf-8"));
        assert_eq!(r.content_length, Some(512));
    }

    #[test]
    fn parse_headers_keeps_last_hop_only() {
        let r = parse_headers(&lines(&[
            "HTTP/1.1 301 Moved Permanently",
            "Location: https://www.example.com/",
            "Content-Type: text/plain",
            "Content-Length: 0",
            "",
            "HTTP/2 200",
            "content-type: text/html",
        ]));
        assert_eq!(r.content_type.as_deref(), Some("text/html"));
        assert!(r.charset.is_none());
        assert!(r.content_length.is_none());
    }

    #[test]
    fn charset_quoted() {
        assert_eq!(
            charset_param("text/html; Charset=\"ISO-8859-1\"").as_deref(),
            Some("iso-8859-1")
        );
        assert_eq!(charset_param("text/html"), None);
    }
}
