use serde::{Deserialize, Serialize};

/// Rendering options shared by the writers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Inline pictures as base64 data URIs; otherwise they are dropped.
    pub embed_pictures: bool,
    /// Wrap the output in a `<div>` carrying the document's default font.
    pub wrap_in_div: bool,
    /// Emit `<a id>` anchors for bookmark starts.
    pub emit_bookmarks: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            embed_pictures: true,
            wrap_in_div: true,
            emit_bookmarks: true,
        }
    }
}
