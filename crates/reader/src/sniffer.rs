use crate::format::Format;

/// Detects the format of a document from its content
pub trait Sniffer: Send + Sync {
    fn sniff(&self, content: &[u8]) -> Option<Format>;
}

/// Default sniffer.
///
/// Content starting with `{` is JSON. When the first line is a complete
/// JSON value and another object starts on a later line, it is a JSON-lines
/// stream, otherwise a single document.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentSniffer;

impl Sniffer for ContentSniffer {
    fn sniff(&self, content: &[u8]) -> Option<Format> {
        let text = std::str::from_utf8(content).ok()?.trim_start();
        if !text.starts_with('{') {
            return None;
        }

        let Some((first, rest)) = text.split_once('\n') else {
            return Some(Format::NativeJson);
        };

        let more_objects = rest
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .is_some_and(|l| l.starts_with('{'));

        if more_objects && serde_json::from_str::<serde_json::Value>(first.trim()).is_ok() {
            Some(Format::JsonLines)
        } else {
            Some(Format::NativeJson)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_single_line_document() {
        let doc = br#"{"nodes":[{"id":"a"}]}"#;
        assert_eq!(ContentSniffer.sniff(doc), Some(Format::NativeJson));
    }

    #[test]
    fn test_sniff_pretty_document() {
        let doc = b"{\n  \"nodes\": [\n    {\"id\": \"a\"}\n  ]\n}\n";
        assert_eq!(ContentSniffer.sniff(doc), Some(Format::NativeJson));
    }

    #[test]
    fn test_sniff_json_lines() {
        let doc = b"{\"nodes\":[{\"id\":\"a\"}]}\n\n{\"nodes\":[{\"id\":\"b\"}]}\n";
        assert_eq!(ContentSniffer.sniff(doc), Some(Format::JsonLines));
    }

    #[test]
    fn test_sniff_rejects_other_content() {
        assert_eq!(ContentSniffer.sniff(b"SPDXVersion: SPDX-2.3"), None);
        assert_eq!(ContentSniffer.sniff(b"   "), None);
        assert_eq!(ContentSniffer.sniff(&[0xff, 0xfe, 0x7b]), None);
    }
}
