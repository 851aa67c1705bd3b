//! The hardcoded exclusion filter.

/// Path substrings that are never staged: dependency trees, assistant
/// state directories, and git's own metadata.
pub const EXCLUDED: [&str; 3] = ["node_modules", ".gemini", ".git"];

/// Check if a path contains any excluded substring.
pub fn is_excluded(path: &str) -> bool {
    EXCLUDED.iter().any(|needle| path.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paths_pass() {
        assert!(!is_excluded("src/a.txt"));
        assert!(!is_excluded("notes.md"));
        assert!(!is_excluded("docs/modules.md"));
    }

    #[test]
    fn test_excluded_directories_match_anywhere() {
        assert!(is_excluded("node_modules/left-pad/index.js"));
        assert!(is_excluded("build/node_modules/x.js"));
        assert!(is_excluded(".gemini/settings.json"));
        assert!(is_excluded(".git/config"));
    }

    #[test]
    fn test_git_dotfiles_are_excluded_too() {
        // `.git` is matched as a substring, so git-adjacent dotfiles
        // stay out of the staging pass as well.
        assert!(is_excluded(".gitignore"));
        assert!(is_excluded(".gitattributes"));
        assert!(is_excluded(".github/workflows/ci.yml"));
    }
}
