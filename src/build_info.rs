//! Compile-time build information.

pub const BUILD_COMMIT: &str = env!("SPROUT_BUILD_COMMIT");
pub const BUILD_DATE: &str = env!("SPROUT_BUILD_DATE");

/// Built from a working tree with uncommitted changes.
pub fn is_dirty() -> bool {
    env!("SPROUT_BUILD_DIRTY") == "1"
}

/// Version line printed by `sprout --version`.
pub fn version_line() -> String {
    format!(
        "sprout {} ({}, {}{})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT,
        if is_dirty() { "-dirty" } else { "" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_not_empty() {
        assert!(!BUILD_COMMIT.is_empty());
        assert!(!BUILD_DATE.is_empty());
    }

    #[test]
    fn test_version_line_format() {
        let line = version_line();
        assert!(line.starts_with(concat!("sprout ", env!("CARGO_PKG_VERSION"))));
        assert!(line.contains(BUILD_COMMIT));
        assert!(line.contains(BUILD_DATE));
        assert_eq!(line.ends_with("-dirty)"), is_dirty());
    }
}
