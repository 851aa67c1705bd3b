//! The stage command: resolve the repository and run the staging pass.

use crate::cli::Cli;
use crate::git::GitCli;
use crate::{debug, stage};
use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

/// Stage everything worth staging under the given repository path.
///
/// # Steps
/// 1. Resolve the repository root from the CLI path argument
/// 2. Check that a `git` binary is reachable
/// 3. Run the staging pass against that root
pub fn run(cli: &Cli) -> Result<()> {
    let root = resolve_root(&cli.path)?;
    debug!("stage"; "repository root: {}", root.display());

    if which::which("git").is_err() {
        bail!("`git` not found in PATH");
    }

    let backend = GitCli::new(&root);
    stage::run(&backend, cli.dry_run)?;
    Ok(())
}

/// Canonicalize the CLI path argument and require a directory.
fn resolve_root(path: &Path) -> Result<PathBuf> {
    let root = path
        .canonicalize()
        .with_context(|| format!("Path not found: {}", path.display()))?;

    if !root.is_dir() {
        bail!("Not a directory: {}", path.display());
    }

    Ok(root)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_root_accepts_directories() {
        let temp = TempDir::new().unwrap();
        let root = resolve_root(temp.path()).unwrap();
        assert!(root.is_absolute());
        assert!(root.is_dir());
    }

    #[test]
    fn test_resolve_root_rejects_missing_paths() {
        let temp = TempDir::new().unwrap();
        assert!(resolve_root(&temp.path().join("nope")).is_err());
    }

    #[test]
    fn test_resolve_root_rejects_files() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("f.txt");
        std::fs::write(&file, "x").unwrap();
        assert!(resolve_root(&file).is_err());
    }
}
