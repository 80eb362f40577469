// src/crawl/walk.rs
// =============================================================================
// Walks the generated output directory and collects every HTML document.
//
// How it works:
// 1. Make sure the root exists and is a directory (otherwise the build step
//    never ran, which is fatal)
// 2. Canonicalise it so every document path we hand out is absolute
// 3. Walk the tree with `ignore::WalkBuilder`, with all of its filters off:
//    hidden files and gitignored files are still part of the site
//    Symlinks are followed, so linked files and directories count too
// 4. Keep files ending in `.html`
//
// The walk order is whatever the filesystem gives us. Callers that need a
// stable order sort the result.
// =============================================================================

use anyhow::{Context, Result};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File extension of the documents we check (without the dot).
pub const DOCUMENT_EXTENSION: &str = "html";

/// The fatal setup error: there is nothing to check.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Directory {0} does not exist. Run the site build first.")]
    RootNotFound(PathBuf),
}

// A discovered site: the canonical root plus every HTML document below it
#[derive(Debug, Clone)]
pub struct Site {
    pub root: PathBuf,
    pub documents: Vec<PathBuf>,
}

impl Site {
    /// Renders `path` relative to the site root, falling back to the full
    /// path when it lies outside the root.
    pub fn relative(&self, path: &Path) -> String {
        relative_to(&self.root, path)
    }
}

pub fn relative_to(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

// Discovers all documents under `root`
//
// Returns SiteError::RootNotFound (wrapped in anyhow) when the root is missing
// or is not a directory. Walk failures are unexpected and bubble up as-is.
pub fn discover_site(root: &Path) -> Result<Site> {
    if !root.is_dir() {
        return Err(SiteError::RootNotFound(root.to_path_buf()).into());
    }

    let root = root
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", root.display()))?;

    let mut documents = Vec::new();
    let walker = WalkBuilder::new(&root)
        .standard_filters(false)
        .follow_links(true)
        .build();

    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        // With follow_links the file type is the link target's
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);

        if is_file && is_document(entry.path()) {
            documents.push(entry.into_path());
        }
    }

    log::debug!("Discovered {} document(s) under {}", documents.len(), root.display());

    Ok(Site { root, documents })
}

fn is_document(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.ends_with(&format!(".{}", DOCUMENT_EXTENSION)))
        .unwrap_or(false)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does standard_filters(false) turn off?
//    - hidden files, .gitignore/.ignore rules, and parent ignore files
//    - the generated site is checked as-is, whatever the repo ignores
//
// 2. What happens with a symlink loop?
//    - follow_links(true) makes the walker detect it and yield an error
//      entry, which stops the run as an unexpected error
//
// 3. Why return anyhow::Error if SiteError exists?
//    - Callers just use ? everywhere
//    - main can still ask err.downcast_ref::<SiteError>() to tell the
//      "build did not run" case apart from unexpected failures
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("public");

        let err = discover_site(&missing).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SiteError>(),
            Some(SiteError::RootNotFound(p)) if p == &missing
        ));
    }

    #[test]
    fn test_root_that_is_a_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("public");
        fs::write(&file, "not a dir").unwrap();

        let err = discover_site(&file).unwrap_err();
        assert!(err.downcast_ref::<SiteError>().is_some());
    }

    #[test]
    fn test_finds_nested_html_only() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("docs/deep")).unwrap();
        fs::create_dir_all(root.join(".hidden")).unwrap();
        fs::write(root.join("index.html"), "").unwrap();
        fs::write(root.join("docs/index.html"), "").unwrap();
        fs::write(root.join("docs/deep/page.html"), "").unwrap();
        fs::write(root.join(".hidden/secret.html"), "").unwrap();
        fs::write(root.join("style.css"), "").unwrap();
        fs::write(root.join("docs/notes.htm"), "").unwrap();
        // gitignore rules must not hide generated files
        fs::write(root.join(".gitignore"), "docs/\n").unwrap();

        let site = discover_site(root).unwrap();
        let mut found: Vec<String> = site.documents.iter().map(|p| site.relative(p)).collect();
        found.sort();

        assert_eq!(
            found,
            vec![
                ".hidden/secret.html",
                "docs/deep/page.html",
                "docs/index.html",
                "index.html",
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_files_and_directories_are_followed() {
        use std::os::unix::fs::symlink;

        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("real");
        let root = dir.path().join("public");
        fs::create_dir_all(real.join("sub")).unwrap();
        fs::create_dir_all(&root).unwrap();
        fs::write(real.join("sub/page.html"), "").unwrap();
        fs::write(real.join("target.html"), "").unwrap();
        fs::write(root.join("index.html"), "").unwrap();
        symlink(real.join("sub"), root.join("sub")).unwrap();
        symlink(real.join("target.html"), root.join("alias.html")).unwrap();

        let site = discover_site(&root).unwrap();
        let mut found: Vec<String> = site.documents.iter().map(|p| site.relative(p)).collect();
        found.sort();

        assert_eq!(found, vec!["alias.html", "index.html", "sub/page.html"]);
    }

    #[test]
    fn test_documents_are_absolute() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.html"), "").unwrap();

        let site = discover_site(dir.path()).unwrap();
        assert!(site.root.is_absolute());
        assert!(site.documents.iter().all(|p| p.is_absolute()));
    }

    #[test]
    fn test_relative_outside_root_keeps_full_path() {
        let root = Path::new("/srv/public");
        assert_eq!(relative_to(root, Path::new("/srv/public/a/b.html")), "a/b.html");
        assert_eq!(relative_to(root, Path::new("/srv/other.html")), "/srv/other.html");
    }
}
