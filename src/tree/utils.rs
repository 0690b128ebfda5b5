//! Shared utility functions for tree walking

use std::path::Path;

use glob::Pattern;

/// Check if a path should be ignored based on its name and ignore patterns.
pub fn should_ignore_path(path: &Path, ignore_patterns: &[String]) -> bool {
    if ignore_patterns.is_empty() {
        return false;
    }

    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    ignore_patterns
        .iter()
        .any(|pattern| name == *pattern || glob_match(pattern, &name))
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}

/// Format a size in bytes to human-readable format.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1}G", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1}M", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}K", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glob_match() {
        assert!(glob_match("*.tmp", "scratch.tmp"));
        assert!(!glob_match("*.tmp", "scratch.pdf"));
        assert!(glob_match("node_*", "node_modules"));
        assert!(glob_match("cache?", "cache1"));
        assert!(!glob_match("cache?", "cache12"));
        assert!(glob_match("[ab].mp3", "a.mp3"));
        assert!(!glob_match("[ab].mp3", "c.mp3"));
    }

    #[test]
    fn test_should_ignore_path() {
        let patterns = vec!["$RECYCLE.BIN".to_string(), "*.part".to_string()];
        assert!(should_ignore_path(Path::new("/d/$RECYCLE.BIN"), &patterns));
        assert!(should_ignore_path(Path::new("/d/movie.mp4.part"), &patterns));
        assert!(!should_ignore_path(Path::new("/d/movie.mp4"), &patterns));
        assert!(!should_ignore_path(Path::new("/d/movie.mp4"), &[]));
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0B");
        assert_eq!(format_size(1023), "1023B");
        assert_eq!(format_size(1024), "1.0K");
        assert_eq!(format_size(1536), "1.5K");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0M");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.0G");
    }
}
