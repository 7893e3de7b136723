//! Install-path resolution for registry files.
//!
//! Registries rarely fill in `target`, so the install location of most files
//! is inferred from the file's type. Resolution is a three-step fallback:
//!
//! ```text
//! 1. explicit target        components/blocks/login-form.tsx  (verbatim)
//! 2. type convention        registry:ui + button.tsx → components/ui/button.tsx
//! 3. origin path            registry:theme + themes/x.css → themes/x.css
//! ```
//!
//! | Type | Installs under |
//! |------|----------------|
//! | `registry:ui` | `components/ui/` |
//! | `registry:block`, `registry:component`, `registry:example` | `components/` |
//! | `registry:lib` | `lib/` |
//! | `registry:hook` | `hooks/` |
//! | `registry:page` | `app/` |
//! | `registry:file` | project root |
//!
//! The folders are the [`InstallLayout`] defaults and can be overridden in
//! `explorer.toml`.

use crate::config::InstallLayout;
use crate::taxonomy::ItemType;
use crate::types::RegistryFile;

/// Where files of a given type go when no target is given.
enum Convention<'a> {
    Under(&'a str),
    ProjectRoot,
    None,
}

fn convention<'a>(file_type: &ItemType, layout: &'a InstallLayout) -> Convention<'a> {
    match file_type {
        ItemType::Ui => Convention::Under(&layout.ui),
        ItemType::Block | ItemType::Component | ItemType::Example => {
            Convention::Under(&layout.components)
        }
        ItemType::Lib => Convention::Under(&layout.lib),
        ItemType::Hook => Convention::Under(&layout.hooks),
        ItemType::Page => Convention::Under(&layout.pages),
        ItemType::File => Convention::ProjectRoot,
        ItemType::Theme
        | ItemType::Style
        | ItemType::Base
        | ItemType::Font
        | ItemType::Config
        | ItemType::Item
        | ItemType::Internal
        | ItemType::Unknown(_) => Convention::None,
    }
}

/// Resolve a file's install path with the default layout.
///
/// Total: any file descriptor, including one with an empty path, resolves to
/// some string (possibly empty).
pub fn resolve_target_path(file: &RegistryFile) -> String {
    resolve_target_path_with(file, &InstallLayout::default())
}

/// Resolve a file's install path against a custom layout.
pub fn resolve_target_path_with(file: &RegistryFile, layout: &InstallLayout) -> String {
    if let Some(target) = file.target.as_deref()
        && !target.trim().is_empty()
    {
        return target.to_string();
    }

    let base = base_name(&file.path);
    if base.trim().is_empty() {
        return file.path.clone();
    }

    let Some(file_type) = file.file_type.as_ref() else {
        return file.path.clone();
    };

    match convention(file_type, layout) {
        Convention::Under(dir) => {
            let dir = dir.trim_matches('/');
            if dir.is_empty() {
                base.to_string()
            } else {
                format!("{dir}/{base}")
            }
        }
        Convention::ProjectRoot => base.to_string(),
        Convention::None => file.path.clone(),
    }
}

/// Final `/`-separated segment of a path. Empty for `""` and `"dir/"`.
pub fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or("")
}

/// Split a path into tree segments.
///
/// Empty, whitespace-only, `.` and `..` segments are dropped, so leading,
/// trailing and doubled separators never produce nodes and no node climbs
/// above the project root.
pub fn path_segments(path: &str) -> Vec<&str> {
    path.split('/')
        .filter(|s| !s.trim().is_empty() && *s != "." && *s != "..")
        .collect()
}
