use std::path::Path;

use serde::Deserialize;

/// One asset in the gallery. The registry serves its bytes at
/// `{base_url}/{hash}`; the name is used for display and type detection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
    pub hash: String,
}

impl FileDescriptor {
    pub fn kind(&self) -> FileKind {
        detect_file_kind(&self.name)
    }

    /// Retrieval URL of this asset's bytes.
    pub fn url(&self, base_url: &str) -> String {
        retrieval_url(base_url, &self.hash)
    }
}

/// Coarse asset classification, keyed on the filename extension.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FileKind {
    Audio,
    Image,
    Other,
}

/// Classify a filename by its extension (case-insensitive).
pub fn detect_file_kind(name: &str) -> FileKind {
    let Some(ext) = Path::new(name).extension().and_then(|s| s.to_str()) else {
        return FileKind::Other;
    };

    match ext.to_ascii_lowercase().as_str() {
        "mp3" | "flac" | "wav" | "ogg" | "m4a" | "aac" => FileKind::Audio,
        "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp" => FileKind::Image,
        _ => FileKind::Other,
    }
}

/// Build the retrieval URL for `hash` under `base_url`.
pub fn retrieval_url(base_url: &str, hash: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), hash)
}

/// Find a descriptor by hash first, falling back to an exact name match.
pub fn find_file<'a>(files: &'a [FileDescriptor], wanted: &str) -> Option<&'a FileDescriptor> {
    files
        .iter()
        .find(|f| f.hash == wanted)
        .or_else(|| files.iter().find(|f| f.name == wanted))
}
