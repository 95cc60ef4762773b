//! Project root resolution.
//!
//! The root is the parent of the directory holding the anchor file, so an
//! anchor at `<root>/scripts/tools.toml` (or a binary at `<root>/scripts/toolrun`)
//! resolves to `<root>` no matter where the caller stands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

/// Where the project root comes from, in CLI precedence order.
#[derive(Debug, Clone)]
pub enum RootSource {
    /// `--root` given on the command line.
    Explicit(PathBuf),
    /// Derived from the location of a file inside `<root>/scripts/`.
    Anchor(PathBuf),
}

impl RootSource {
    pub fn resolve(&self) -> Result<PathBuf> {
        match self {
            RootSource::Explicit(path) => Ok(explicit_root(path)),
            RootSource::Anchor(anchor) => resolve_root(anchor),
        }
    }
}

/// Canonicalize `anchor` and return the parent of its containing directory.
pub fn resolve_root(anchor: &Path) -> Result<PathBuf> {
    let anchor = anchor
        .canonicalize()
        .with_context(|| format!("resolve anchor {}", anchor.display()))?;
    let root = anchor
        .parent()
        .and_then(Path::parent)
        .with_context(|| format!("anchor {} has no grandparent directory", anchor.display()))?;
    debug!(root = %root.display(), "resolved project root");
    Ok(root.to_path_buf())
}

/// An explicit root that cannot be canonicalized is kept as given; each tool
/// then fails to spawn on its own.
fn explicit_root(path: &Path) -> PathBuf {
    match path.canonicalize() {
        Ok(root) => root,
        Err(err) => {
            warn!(root = %path.display(), err = %err, "root does not resolve, using as given");
            path.to_path_buf()
        }
    }
}
