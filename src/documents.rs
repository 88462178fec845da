//! Evidence attachment resolution.
//!
//! Complaint records reference their evidence through document tokens that
//! arrive in several storage conventions: fully-qualified URLs, server-local
//! filesystem paths (optionally `file://`-prefixed), and paths relative to
//! the media root. Everything here is pure text manipulation; tokens are
//! never checked for existence.

use crate::models::DocumentsField;

/// Extensions rendered as inline image previews. Everything else gets a
/// generic download link.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// How an attachment should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    Image,
    Generic,
}

/// A document token resolved into something the console can render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Fetchable URL, rooted at the API base unless the token was already
    /// an absolute URL.
    pub url: String,
    /// Last path segment of the token, or a positional fallback.
    pub label: String,
    pub kind: AttachmentKind,
}

/// Flatten the polymorphic `documents` field into a token sequence.
///
/// Malformed input (a string that is not a JSON array of strings) degrades
/// to an empty sequence; this never fails the caller.
pub fn parse_documents(field: &DocumentsField) -> Vec<String> {
    match field {
        DocumentsField::Absent => Vec::new(),
        DocumentsField::Decoded(tokens) => tokens.clone(),
        DocumentsField::Encoded(raw) => serde_json::from_str(raw).unwrap_or_default(),
    }
}

/// Resolve a document token into a fetchable URL under `api_base`.
///
/// Absolute http(s) URLs pass through unchanged. Everything else is rewritten
/// onto the `media/` root of the API base: a `file://` prefix is dropped, a
/// path containing `/media/` is truncated to start at `media/`, and paths
/// with no media segment are force-prefixed. An empty token resolves to an
/// empty string; callers must not render those.
pub fn resolve_document_url(token: &str, api_base: &str) -> String {
    if token.is_empty() {
        return String::new();
    }
    if has_http_scheme(token) {
        return token.to_string();
    }

    let mut relative = token.strip_prefix("file://").unwrap_or(token);
    // First /media/ occurrence wins; drop everything before its leading slash.
    if let Some(idx) = relative.find("/media/") {
        relative = &relative[idx + 1..];
    }
    let relative = relative.trim_start_matches('/');

    let path = if relative.starts_with("media/") {
        relative.to_string()
    } else {
        // Strip any leading media/ before prefixing so a token is never
        // rooted at media/media/.
        format!("media/{}", relative.strip_prefix("media/").unwrap_or(relative))
    };

    format!("{}/{}", api_base.trim_end_matches('/'), path)
}

/// Case-insensitive check for an absolute http:// or https:// URL.
fn has_http_scheme(token: &str) -> bool {
    let lower = token.get(..8).unwrap_or(token).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Decide whether a token names an image, by extension alone.
///
/// The query string is ignored and the match is case-insensitive. No
/// content-type sniffing; tokens without a recognized extension are generic.
pub fn is_image(token: &str) -> bool {
    let clean = token.split('?').next().unwrap_or(token);
    match clean.rsplit_once('.') {
        Some((_, ext)) => IMAGE_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)),
        None => false,
    }
}

/// Parse, resolve, and classify every document on a complaint.
///
/// Tokens that resolve to an empty URL are skipped rather than rendered as
/// dead links.
pub fn resolve_attachments(field: &DocumentsField, api_base: &str) -> Vec<Attachment> {
    parse_documents(field)
        .iter()
        .enumerate()
        .filter_map(|(idx, token)| {
            let url = resolve_document_url(token, api_base);
            if url.is_empty() {
                return None;
            }
            let label = match token.rsplit('/').next() {
                Some(segment) if !segment.is_empty() => segment.to_string(),
                _ => format!("Attachment {}", idx + 1),
            };
            let kind = if is_image(token) {
                AttachmentKind::Image
            } else {
                AttachmentKind::Generic
            };
            Some(Attachment { url, label, kind })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:8000";

    #[test]
    fn test_parse_documents_absent() {
        assert!(parse_documents(&DocumentsField::Absent).is_empty());
    }

    #[test]
    fn test_parse_documents_decoded_passthrough() {
        let field = DocumentsField::Decoded(vec!["a.png".to_string(), "b.pdf".to_string()]);
        assert_eq!(parse_documents(&field), vec!["a.png", "b.pdf"]);
    }

    #[test]
    fn test_parse_documents_encoded_json() {
        let field = DocumentsField::Encoded(r#"["first.png", "second.pdf", "third.jpg"]"#.into());
        assert_eq!(
            parse_documents(&field),
            vec!["first.png", "second.pdf", "third.jpg"]
        );
    }

    #[test]
    fn test_parse_documents_malformed_degrades_to_empty() {
        // Invalid JSON
        let field = DocumentsField::Encoded("[not json".into());
        assert!(parse_documents(&field).is_empty());

        // Valid JSON, wrong shape
        let field = DocumentsField::Encoded(r#"{"doc": "a.png"}"#.into());
        assert!(parse_documents(&field).is_empty());

        // Array of non-strings
        let field = DocumentsField::Encoded("[1, 2, 3]".into());
        assert!(parse_documents(&field).is_empty());
    }

    #[test]
    fn test_resolve_empty_token() {
        assert_eq!(resolve_document_url("", BASE), "");
    }

    #[test]
    fn test_resolve_absolute_url_passthrough() {
        let url = "https://cdn.example.com/media/evidence/shot.png";
        assert_eq!(resolve_document_url(url, BASE), url);
        // Scheme check is case-insensitive
        let url = "HTTPS://cdn.example.com/x.png";
        assert_eq!(resolve_document_url(url, BASE), url);
        let url = "HtTp://cdn.example.com/x.png";
        assert_eq!(resolve_document_url(url, BASE), url);
    }

    #[test]
    fn test_resolve_file_scheme_with_media_segment() {
        assert_eq!(
            resolve_document_url("file:///srv/data/media/evidence/photo.png", "http://localhost:8000/"),
            "http://localhost:8000/media/evidence/photo.png"
        );
    }

    #[test]
    fn test_resolve_bare_path_gets_media_prefix() {
        assert_eq!(
            resolve_document_url("evidence/photo.png", "http://x"),
            "http://x/media/evidence/photo.png"
        );
    }

    #[test]
    fn test_resolve_already_relative_to_media_root() {
        assert_eq!(
            resolve_document_url("media/uploads/doc.pdf", BASE),
            "http://localhost:8000/media/uploads/doc.pdf"
        );
    }

    #[test]
    fn test_resolve_leading_slashes_stripped() {
        assert_eq!(
            resolve_document_url("//media/uploads/doc.pdf", BASE),
            "http://localhost:8000/media/uploads/doc.pdf"
        );
    }

    #[test]
    fn test_resolve_trailing_base_slashes_stripped() {
        assert_eq!(
            resolve_document_url("media/a.png", "http://localhost:8000///"),
            "http://localhost:8000/media/a.png"
        );
    }

    #[test]
    fn test_resolve_first_media_occurrence_wins() {
        assert_eq!(
            resolve_document_url("/srv/media/archive/media/a.png", BASE),
            "http://localhost:8000/media/archive/media/a.png"
        );
    }

    #[test]
    fn test_resolve_degenerate_media_token() {
        assert_eq!(resolve_document_url("media/", BASE), "http://localhost:8000/media/");
    }

    #[test]
    fn test_resolve_idempotent_on_media_suffix() {
        let once = resolve_document_url("media/evidence/x.png", BASE);
        assert_eq!(once, "http://localhost:8000/media/evidence/x.png");
        // The resolved URL is absolute, so resolving again is the identity.
        assert_eq!(resolve_document_url(&once, BASE), once);
    }

    #[test]
    fn test_is_image_extensions() {
        assert!(is_image("photo.png"));
        assert!(is_image("photo.jpg"));
        assert!(is_image("photo.jpeg"));
        assert!(is_image("photo.gif"));
        assert!(is_image("photo.bmp"));
        assert!(is_image("photo.webp"));
        assert!(!is_image("scan.pdf"));
        assert!(!is_image("notes.txt"));
        assert!(!is_image("no_extension"));
        assert!(!is_image(""));
    }

    #[test]
    fn test_is_image_case_and_query_string() {
        // Query string is stripped before the extension check
        assert!(!is_image("scan.PDF?download=1"));
        assert!(is_image("scan.WEBP?x=1"));
        assert!(is_image("photo.PNG"));
        assert!(is_image("media/a.JPEG?token=abc&v=2"));
    }

    #[test]
    fn test_resolve_attachments_full_pipeline() {
        let field = DocumentsField::Encoded(
            r#"["file:///srv/media/shot.png", "report.pdf", "https://cdn.example.com/x.gif"]"#
                .into(),
        );
        let attachments = resolve_attachments(&field, BASE);
        assert_eq!(attachments.len(), 3);

        assert_eq!(attachments[0].url, "http://localhost:8000/media/shot.png");
        assert_eq!(attachments[0].label, "shot.png");
        assert_eq!(attachments[0].kind, AttachmentKind::Image);

        assert_eq!(attachments[1].url, "http://localhost:8000/media/report.pdf");
        assert_eq!(attachments[1].label, "report.pdf");
        assert_eq!(attachments[1].kind, AttachmentKind::Generic);

        assert_eq!(attachments[2].url, "https://cdn.example.com/x.gif");
        assert_eq!(attachments[2].kind, AttachmentKind::Image);
    }

    #[test]
    fn test_resolve_attachments_skips_empty_tokens() {
        let field = DocumentsField::Decoded(vec!["".to_string(), "a.png".to_string()]);
        let attachments = resolve_attachments(&field, BASE);
        assert_eq!(attachments.len(), 1);
        assert_eq!(attachments[0].label, "a.png");
    }

    #[test]
    fn test_resolve_attachments_positional_label() {
        // A token ending in a slash has no usable final segment
        let field = DocumentsField::Decoded(vec!["media/".to_string()]);
        let attachments = resolve_attachments(&field, BASE);
        assert_eq!(attachments.len(), 1);
        assert_eq!(attachments[0].label, "Attachment 1");
    }
}
