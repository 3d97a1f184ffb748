//! Input-surface selection for the three upload paths.
//!
//! The host page wires the actual DOM events (file-picker `change`, `drop`,
//! `paste`); this module owns the selection rules. All three surfaces share
//! the same contract: an event with nothing usable in it selects nothing and
//! must cause no state change at all. That silent no-op is deliberate, so
//! selection returns `Option` rather than an error.

use serde::{Deserialize, Serialize};

/// A file handed over by the picker or a drag-and-drop event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadPayload {
    /// Original file name, if the surface provides one. Clipboard pastes
    /// don't.
    pub name: Option<String>,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

impl UploadPayload {
    /// Payload from a named file (picker or drop surface).
    pub fn from_file(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: Some(name.into()),
            bytes,
        }
    }

    /// Payload from a nameless source (clipboard paste).
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { name: None, bytes }
    }
}

/// One item of a clipboard paste event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardItem {
    /// MIME type reported by the clipboard (e.g. `image/png`, `text/plain`).
    pub mime: String,
    /// Raw item bytes.
    pub bytes: Vec<u8>,
}

/// Check whether a clipboard MIME type indicates an image.
pub fn is_image_mime(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with("image/")
}

/// Select the upload from a file-picker or drag-and-drop file list.
///
/// The first file wins; the rest are ignored. An empty list selects nothing.
pub fn first_file(files: Vec<UploadPayload>) -> Option<UploadPayload> {
    files.into_iter().next()
}

/// Select the upload from a clipboard paste.
///
/// The first item whose MIME type indicates an image wins; non-image items
/// (text, HTML fragments) are skipped. A paste with no image items selects
/// nothing.
pub fn first_image_item(items: Vec<ClipboardItem>) -> Option<UploadPayload> {
    items
        .into_iter()
        .find(|item| is_image_mime(&item.mime))
        .map(|item| UploadPayload::from_bytes(item.bytes))
}
