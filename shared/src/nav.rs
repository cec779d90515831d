// ============================================================================
// Navigation Links
// ============================================================================

/// A single entry in the header's link list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
}

impl NavLink {
    pub const fn new(path: &'static str, label: &'static str) -> Self {
        Self { path, label }
    }

    /// Whether this link should be highlighted for `current_path`.
    pub fn is_active(&self, current_path: &str) -> bool {
        is_active(self.path, current_path)
    }
}

pub const HOME_PATH: &str = "/";
pub const TOOLS_PATH: &str = "/tools";

/// Links rendered by the header, in display order.
pub const NAV_LINKS: [NavLink; 2] = [
    NavLink::new(HOME_PATH, "Home"),
    NavLink::new(TOOLS_PATH, "Tools"),
];

/// Route prefixes grouped under the "Tools" entry.
///
/// Matching is a bare string prefix, so `/toolshed` counts as a tools route.
pub const TOOLS_PREFIXES: [&str; 5] = [
    "/tools",
    "/gis-tools",
    "/dev-tools",
    "/va-tools",
    "/marketing-tools",
];

/// Decide whether the link at `candidate` is active while `current_path` is displayed.
///
/// The root only matches itself, the tools entry matches any of
/// [`TOOLS_PREFIXES`], and every other link matches by plain prefix.
pub fn is_active(candidate: &str, current_path: &str) -> bool {
    match candidate {
        HOME_PATH => current_path == HOME_PATH,
        TOOLS_PATH => TOOLS_PREFIXES
            .iter()
            .any(|prefix| current_path.starts_with(prefix)),
        _ => current_path.starts_with(candidate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_table() {
        assert_eq!(NAV_LINKS.len(), 2);
        assert_eq!(NAV_LINKS[0], NavLink::new("/", "Home"));
        assert_eq!(NAV_LINKS[1], NavLink::new("/tools", "Tools"));
    }

    #[test]
    fn test_root_matches_only_itself() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/toolshed"));
        assert!(!is_active("/", "/tools"));
        assert!(!is_active("/", ""));
        assert!(!is_active("/", "//"));
    }

    #[test]
    fn test_tools_matches_every_prefix() {
        for path in [
            "/tools",
            "/tools/json-formatter",
            "/gis-tools",
            "/gis-tools/reproject",
            "/dev-tools/regex",
            "/va-tools",
            "/marketing-tools/utm",
        ] {
            assert!(is_active("/tools", path), "expected {} to be active", path);
        }
    }

    #[test]
    fn test_tools_rejects_other_paths() {
        assert!(!is_active("/tools", "/other"));
        assert!(!is_active("/tools", "/"));
        assert!(!is_active("/tools", "/tool"));
        assert!(!is_active("/tools", "/gis"));
    }

    #[test]
    fn test_tools_bare_prefix_false_positive() {
        // No separator is required after the prefix.
        assert!(is_active("/tools", "/toolshed"));
        assert!(is_active("/tools", "/tools-unrelated"));
        assert!(is_active("/tools", "/dev-toolsmith"));
    }

    #[test]
    fn test_general_prefix_match() {
        assert!(is_active("/about", "/about"));
        assert!(is_active("/about", "/about/team"));
        assert!(is_active("/about", "/aboutus"));
        assert!(!is_active("/about", "/"));
        assert!(!is_active("/about", "/ab"));
    }

    #[test]
    fn test_nav_link_is_active_delegates() {
        let home = NAV_LINKS[0];
        let tools = NAV_LINKS[1];
        assert!(home.is_active("/"));
        assert!(!tools.is_active("/"));
        assert!(tools.is_active("/va-tools/forms"));
        assert!(!home.is_active("/va-tools/forms"));
    }

    #[test]
    fn test_link_activity_by_path() {
        let active = |path: &str| -> Vec<&'static str> {
            NAV_LINKS
                .iter()
                .filter(|link| link.is_active(path))
                .map(|link| link.path)
                .collect()
        };
        assert_eq!(active("/"), vec!["/"]);
        assert_eq!(active("/gis-tools/x"), vec!["/tools"]);
        assert!(active("/other").is_empty());
    }

    #[test]
    fn test_link_activity_idempotent() {
        for path in ["/", "/tools", "/other", "/marketing-tools/a/b"] {
            for link in NAV_LINKS {
                assert_eq!(link.is_active(path), link.is_active(path));
            }
        }
    }
}
