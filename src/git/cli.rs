//! Subprocess-backed git client.

use super::{Backend, GitError};
use crate::utils::exec::Cmd;
use std::path::{Path, PathBuf};

/// Git client pinned to an explicit repository root.
///
/// Every invocation sets its working directory to the root, so results
/// never depend on the process-wide current directory. Listings come
/// back as repository-relative paths, one per line, which is also the
/// form `stage` expects.
pub struct GitCli {
    root: PathBuf,
}

impl GitCli {
    /// Create a client for the repository at `root`.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_owned(),
        }
    }

    /// Run a git listing and split its stdout into non-empty lines.
    fn list(&self, args: &[&str]) -> Result<Vec<String>, GitError> {
        let output = Cmd::new("git").args(args).cwd(&self.root).run()?;
        let text = String::from_utf8(output.stdout)
            .map_err(|source| GitError::Decode(args.join(" "), source))?;

        Ok(text
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect())
    }
}

impl Backend for GitCli {
    fn list_modified(&self) -> Result<Vec<String>, GitError> {
        self.list(&["ls-files", "-m"])
    }

    fn list_untracked(&self) -> Result<Vec<String>, GitError> {
        self.list(&["ls-files", "--others", "--exclude-standard"])
    }

    fn stage(&self, path: &str) -> Result<(), GitError> {
        Cmd::new("git")
            .args(["add", "--"])
            .arg(path)
            .cwd(&self.root)
            .run()?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
