//! The staging pass: list, union, filter, add.

mod exclude;

use crate::git::{Backend, GitError};
use crate::{debug, log};
use exclude::is_excluded;
use std::collections::BTreeSet;

/// Outcome of one staging pass.
#[derive(Debug, Default)]
pub struct Summary {
    /// Paths handed to the backend (or merely listed, in dry-run mode).
    pub staged: usize,
    /// Paths dropped by the exclusion filter.
    pub skipped: usize,
    /// Per-path add failures, in iteration order.
    pub failed: Vec<(String, GitError)>,
}

/// Stage every modified and untracked file the backend reports,
/// skipping excluded paths.
///
/// # Steps
/// 1. List modified files, then untracked files (a failure in either
///    listing aborts the pass before anything is staged)
/// 2. Union both lists and iterate in lexicographic order
/// 3. Stage each non-excluded path, announcing it first; a failed add
///    is recorded and the pass moves on
/// 4. Emit the completion notice
pub fn run<B: Backend>(backend: &B, dry_run: bool) -> Result<Summary, GitError> {
    let modified = backend.list_modified()?;
    let untracked = backend.list_untracked()?;

    let paths: BTreeSet<String> = modified.into_iter().chain(untracked).collect();

    let mut summary = Summary::default();
    for path in paths {
        if is_excluded(&path) {
            debug!("stage"; "skip {path}");
            summary.skipped += 1;
            continue;
        }

        if dry_run {
            log!("add"; "{path} (dry-run)");
            summary.staged += 1;
            continue;
        }

        log!("add"; "{path}");
        match backend.stage(&path) {
            Ok(()) => summary.staged += 1,
            Err(e) => {
                log!("warning"; "failed to stage {path}: {e}");
                summary.failed.push((path, e));
            }
        }
    }

    report(&summary, dry_run);
    Ok(summary)
}

/// Emit the completion notice.
fn report(summary: &Summary, dry_run: bool) {
    let staged = summary.staged;
    let noun = if staged == 1 { "file" } else { "files" };
    let verb = if dry_run { "would be staged" } else { "staged" };

    if summary.failed.is_empty() {
        log!("stage"; "staging complete ({staged} {noun} {verb})");
    } else {
        log!(
            "stage";
            "staging complete ({staged} {noun} {verb}, {} failed)",
            summary.failed.len()
        );
    }
}

// ============================================================================
// Tests
// ============================================================================
