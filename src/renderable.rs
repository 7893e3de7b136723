//! Extension-based detection of files that cannot be shown as source.
//!
//! Registries can ship fonts, images and other binary assets alongside code.
//! A detail page is only worth generating for an item that has something to
//! show, so an item is renderable when it has no files at all or at least one
//! file outside the binary list below. Detection is a case-insensitive
//! extension lookup; file contents are never inspected.

use crate::target::base_name;
use crate::types::RegistryFile;

const BINARY_EXTENSIONS: &[&str] = &[
    // fonts
    "ttf", "otf", "woff", "woff2", "eot",
    // images
    "png", "jpg", "jpeg", "gif", "webp", "avif", "bmp", "ico", "tif", "tiff", "heic", "psd",
    // audio / video
    "mp3", "wav", "ogg", "flac", "aac", "m4a", "mp4", "m4v", "mov", "avi", "mkv", "webm",
    // archives
    "zip", "tar", "gz", "tgz", "bz2", "xz", "7z", "rar",
    // compiled binaries
    "exe", "dll", "so", "dylib", "wasm", "bin", "class", "o", "a", "node",
    // office documents
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "odt", "ods", "odp",
];

/// Lowercased extension of the last path segment, if any.
///
/// Dotfiles such as `.env` have no extension.
fn extension(path: &str) -> Option<String> {
    let name = base_name(path);
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Whether a path names a binary asset.
pub fn is_binary_path(path: &str) -> bool {
    extension(path).is_some_and(|ext| BINARY_EXTENSIONS.contains(&ext.as_str()))
}

/// Whether a file is binary, judged by its origin path, or by its target when
/// the origin path is empty.
pub fn is_binary_file(file: &RegistryFile) -> bool {
    if file.path.trim().is_empty() {
        file.target.as_deref().is_some_and(is_binary_path)
    } else {
        is_binary_path(&file.path)
    }
}

/// Whether an item with these files has anything to show as source.
pub fn is_renderable(files: &[RegistryFile]) -> bool {
    files.is_empty() || files.iter().any(|file| !is_binary_file(file))
}
