// src/checker/internal.rs
// =============================================================================
// Resolves internal links to files in the generated output directory.
//
// Static hosts rewrite "/about" to "/about.html" and "/docs/" to
// "/docs/index.html", and the generated pages rely on that. The mapping below
// reproduces it exactly:
//
//   ""  or "/"           -> <root>/index.html
//   "/docs" (a dir)      -> <root>/docs/index.html
//   "/about" (no ext)    -> <root>/about.html
//   "/gone/" (no dir)    -> <root>/gone/.html
//   "/logo.svg"          -> <root>/logo.svg
//   "guide" (relative)   -> <dir of document>/guide.html
//
// Query strings and fragments are dropped first. "." and ".." segments are
// collapsed lexically; nothing here follows symlinks or touches the network.
// =============================================================================

use crate::crawl::DOCUMENT_EXTENSION;
use std::path::{Component, Path, PathBuf};

const ROOT_DOCUMENT: &str = "index.html";

/// Outcome of resolving one internal link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(PathBuf),
    Missing(PathBuf),
}

impl Resolution {
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }
}

// Resolves `link` (found in `document`) and checks the candidate exists
//
// Parameters:
//   root: the canonical output directory
//   document: absolute path of the document containing the link
//   link: the raw href value
pub fn resolve_internal(root: &Path, document: &Path, link: &str) -> Resolution {
    let candidate = candidate_path(root, document, link);

    if candidate.exists() {
        Resolution::Found(candidate)
    } else {
        Resolution::Missing(candidate)
    }
}

/// Computes the file an internal link points at, without checking it exists.
pub fn candidate_path(root: &Path, document: &Path, link: &str) -> PathBuf {
    let link = strip_query_and_fragment(link);

    if link.is_empty() || link == "/" {
        return root.join(ROOT_DOCUMENT);
    }

    if link.starts_with('/') {
        let joined = normalize(&root.join(link.trim_start_matches('/')));

        if joined.is_dir() {
            return joined.join(ROOT_DOCUMENT);
        }
        if joined.extension().is_none() {
            // normalize() dropped the trailing slash: "/docs/" -> docs/.html
            if link.ends_with('/') {
                return joined.join(format!(".{}", DOCUMENT_EXTENSION));
            }
            return with_document_extension(joined);
        }
        return joined;
    }

    let base = document.parent().unwrap_or(root);
    let resolved = normalize(&base.join(link));

    if resolved.extension().is_none() {
        with_document_extension(resolved)
    } else {
        resolved
    }
}

fn strip_query_and_fragment(link: &str) -> &str {
    let link = link.split('?').next().unwrap_or(link);
    link.split('#').next().unwrap_or(link)
}

// Collapses "." and ".." without touching the filesystem.
// ".." at the filesystem root stays at the root.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}

fn with_document_extension(path: PathBuf) -> PathBuf {
    let mut name = path.into_os_string();
    name.push(".");
    name.push(DOCUMENT_EXTENSION);
    PathBuf::from(name)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why normalise by hand instead of calling canonicalize()?
//    - canonicalize() fails for paths that do not exist, and missing files
//      are exactly what we are looking for
//    - It would also follow symlinks; here only the link text matters
//
// 2. Why does "/docs" get index.html but relative "docs" does not?
//    - Only root-relative links are checked against real directories
//    - A relative "docs" always becomes docs.html, as a static host would
//      serve it
//
// 3. What counts as "no extension"?
//    - Path::extension() only looks at the last component
//    - "/docs/v1.2" has the extension "2" and is used as-is
//    - "/.well-known" has none (a leading dot is not an extension)
// -----------------------------------------------------------------------------
