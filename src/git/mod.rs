//! Git backend: everything that talks to the `git` executable.
//!
//! The staging pass is written against the [`Backend`] trait so tests can
//! drive it with a scripted implementation; [`GitCli`] is the real one,
//! shelling out to `git` pinned at a repository root.

mod cli;
mod error;

pub use cli::GitCli;
pub use error::GitError;

/// Operations the staging pass needs from a version-control backend.
pub trait Backend {
    /// Tracked files with uncommitted local modifications.
    fn list_modified(&self) -> Result<Vec<String>, GitError>;

    /// Files not known to the index and not matched by ignore rules.
    fn list_untracked(&self) -> Result<Vec<String>, GitError>;

    /// Stage the current content of a single path.
    fn stage(&self, path: &str) -> Result<(), GitError>;
}
