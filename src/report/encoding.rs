//! Character encoding resolution
//!
//! Configured encoding labels resolve through the WHATWG registry. An
//! unset or empty label falls back to UTF-8; an unresolvable label is
//! surfaced as an error, never silently swallowed.

use encoding_rs::{Encoding, UTF_8};

use super::error::ReportError;

pub fn resolve(label: Option<&str>) -> Result<&'static Encoding, ReportError> {
    match label.map(str::trim) {
        None | Some("") => Ok(UTF_8),
        Some(label) => Encoding::for_label(label.as_bytes())
            .ok_or_else(|| ReportError::UnknownEncoding(label.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_label_defaults_to_utf8() {
        assert_eq!(resolve(None).unwrap(), UTF_8);
        assert_eq!(resolve(Some("")).unwrap(), UTF_8);
        assert_eq!(resolve(Some("   ")).unwrap(), UTF_8);
    }

    #[test]
    fn known_labels_resolve() {
        assert_eq!(resolve(Some("UTF-8")).unwrap(), UTF_8);
        assert_eq!(resolve(Some("utf-8")).unwrap(), UTF_8);
        assert_eq!(
            resolve(Some("ISO-8859-1")).unwrap(),
            encoding_rs::WINDOWS_1252
        );
    }

    #[test]
    fn unknown_label_is_an_error() {
        let err = resolve(Some("EBCDIC-1971")).unwrap_err();
        assert!(matches!(err, ReportError::UnknownEncoding(_)));
        assert!(err.to_string().contains("EBCDIC-1971"));
    }
}
