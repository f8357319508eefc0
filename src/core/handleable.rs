//! Handleability heuristic for drag payloads.
//!
//! Decides from the payload's declared item kinds (or, failing that, its
//! declared types) whether a drag carries something the registered listeners
//! can consume. Works on a plain [`TransferSummary`] so it can be exercised
//! without a browser.

use crate::config::{FILES_TYPE, TEXT_TYPE_PREFIX};

/// Kind of one `DataTransferItem`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    File,
    String,
    Other,
}

impl ItemKind {
    /// Parse the value of `DataTransferItem.kind`.
    pub fn parse(kind: &str) -> Self {
        match kind {
            "file" => Self::File,
            "string" => Self::String,
            _ => Self::Other,
        }
    }
}

/// What a `DataTransfer` declares about its payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferSummary {
    /// Kinds from `DataTransfer.items`
    pub kinds: Vec<ItemKind>,
    /// Entries of `DataTransfer.types`
    pub types: Vec<String>,
}

impl TransferSummary {
    pub fn new(kinds: Vec<ItemKind>, types: Vec<String>) -> Self {
        Self { kinds, types }
    }

    /// Count (file-bearing, text-bearing) items.
    ///
    /// Item kinds win when present. Safari leaves `items` empty during
    /// `dragover`, so `types` is the fallback. `None` when neither carries
    /// any detail.
    fn counts(&self) -> Option<(usize, usize)> {
        if !self.kinds.is_empty() {
            let files = self.kinds.iter().filter(|k| **k == ItemKind::File).count();
            let text = self.kinds.iter().filter(|k| **k == ItemKind::String).count();
            Some((files, text))
        } else if !self.types.is_empty() {
            let files = self.types.iter().filter(|t| *t == FILES_TYPE).count();
            let text = self
                .types
                .iter()
                .filter(|t| t.starts_with(TEXT_TYPE_PREFIX))
                .count();
            Some((files, text))
        } else {
            None
        }
    }
}

/// Listener capabilities registered on a drop zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// A file drop listener is registered
    pub files: bool,
    /// A text drop listener is registered
    pub text: bool,
}

/// Which parts of a payload the zone will handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handleable {
    Files,
    Text,
    Both,
    Neither,
}

impl Handleable {
    #[inline]
    pub fn is_handleable(self) -> bool {
        self != Self::Neither
    }

    #[inline]
    pub fn files(self) -> bool {
        matches!(self, Self::Files | Self::Both)
    }

    #[inline]
    pub fn text(self) -> bool {
        matches!(self, Self::Text | Self::Both)
    }
}

/// Classify a payload against the registered capabilities.
pub fn classify(summary: &TransferSummary, capabilities: Capabilities) -> Handleable {
    let Some((file_items, text_items)) = summary.counts() else {
        return Handleable::Neither;
    };

    let files = file_items > 0 && capabilities.files;
    let text = text_items > 0 && capabilities.text;

    match (files, text) {
        (true, true) => Handleable::Both,
        (true, false) => Handleable::Files,
        (false, true) => Handleable::Text,
        (false, false) => Handleable::Neither,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOTH: Capabilities = Capabilities {
        files: true,
        text: true,
    };
    const FILES_ONLY: Capabilities = Capabilities {
        files: true,
        text: false,
    };
    const TEXT_ONLY: Capabilities = Capabilities {
        files: false,
        text: true,
    };

    fn kinds(kinds: &[ItemKind]) -> TransferSummary {
        TransferSummary::new(kinds.to_vec(), Vec::new())
    }

    fn types(types: &[&str]) -> TransferSummary {
        TransferSummary::new(Vec::new(), types.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn test_item_kind_parse() {
        assert_eq!(ItemKind::parse("file"), ItemKind::File);
        assert_eq!(ItemKind::parse("string"), ItemKind::String);
        assert_eq!(ItemKind::parse("unknown"), ItemKind::Other);
    }

    #[test]
    fn test_files_need_file_listener() {
        let payload = kinds(&[ItemKind::File, ItemKind::File]);
        assert_eq!(classify(&payload, FILES_ONLY), Handleable::Files);
        assert_eq!(classify(&payload, BOTH), Handleable::Files);
        assert_eq!(classify(&payload, TEXT_ONLY), Handleable::Neither);
    }

    #[test]
    fn test_text_needs_text_listener() {
        let payload = kinds(&[ItemKind::String]);
        assert_eq!(classify(&payload, TEXT_ONLY), Handleable::Text);
        assert_eq!(classify(&payload, FILES_ONLY), Handleable::Neither);
    }

    #[test]
    fn test_mixed_payload() {
        let payload = kinds(&[ItemKind::String, ItemKind::File]);
        assert_eq!(classify(&payload, BOTH), Handleable::Both);
        assert_eq!(classify(&payload, TEXT_ONLY), Handleable::Text);
        assert!(classify(&payload, FILES_ONLY).files());
    }

    #[test]
    fn test_types_fallback() {
        assert_eq!(classify(&types(&["Files"]), FILES_ONLY), Handleable::Files);
        assert_eq!(
            classify(&types(&["text/plain", "text/uri-list"]), TEXT_ONLY),
            Handleable::Text
        );
        assert_eq!(
            classify(&types(&["application/x-moz-node"]), BOTH),
            Handleable::Neither
        );
    }

    #[test]
    fn test_kinds_take_precedence_over_types() {
        let payload = TransferSummary::new(vec![ItemKind::String], vec!["Files".to_string()]);
        assert_eq!(classify(&payload, FILES_ONLY), Handleable::Neither);
    }

    #[test]
    fn test_no_detail_is_not_handleable() {
        assert_eq!(classify(&TransferSummary::default(), BOTH), Handleable::Neither);
        assert!(!classify(&kinds(&[ItemKind::Other]), BOTH).is_handleable());
    }

    #[test]
    fn test_no_listeners() {
        let payload = kinds(&[ItemKind::File, ItemKind::String]);
        assert_eq!(
            classify(&payload, Capabilities::default()),
            Handleable::Neither
        );
    }
}
