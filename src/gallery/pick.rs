use rand::RngExt;

use super::model::{FileDescriptor, FileKind};

/// Pick a decorative backdrop: one image-classified entry, uniformly at
/// random, as its retrieval URL. An empty image subset yields no selection.
pub fn pick_backdrop(files: &[FileDescriptor], base_url: &str) -> Option<String> {
    let images: Vec<&FileDescriptor> = files
        .iter()
        .filter(|f| f.kind() == FileKind::Image)
        .collect();

    if images.is_empty() {
        return None;
    }

    let idx = rand::rng().random_range(0..=images.len() - 1);
    Some(images[idx].url(base_url))
}
