//! Path-based route table.
//!
//! The table is a static list of [`RouteEntry`] values scanned in order.
//! Exact patterns come first; the single wildcard entry is always last, so
//! every path resolves to exactly one [`Page`].

/// Page components the router can mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    AlertManagement,
    MainDashboard,
    Login,
    SystemAdministration,
    EnvironmentalDataAnalytics,
    CommunityAlertCenter,
    NotFound,
}

impl Page {
    /// English page title, used for `document.title`.
    pub fn title(self) -> &'static str {
        match self {
            Self::AlertManagement => "Alert Management",
            Self::MainDashboard => "Main Dashboard",
            Self::Login => "Login",
            Self::SystemAdministration => "System Administration",
            Self::EnvironmentalDataAnalytics => "Environmental Data Analytics",
            Self::CommunityAlertCenter => "Community Alert Center",
            Self::NotFound => "Page Not Found",
        }
    }

    /// Canonical path for this page: the first exact pattern that maps to it.
    ///
    /// Returns `None` for pages only reachable through the wildcard.
    pub fn path(self) -> Option<&'static str> {
        ROUTE_TABLE.iter().find_map(|entry| match entry.pattern {
            RoutePattern::Exact(path) if entry.page == self => Some(path),
            _ => None,
        })
    }
}

/// A path pattern in the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoutePattern {
    /// Matches one normalized path.
    Exact(&'static str),
    /// Matches anything.
    Wildcard,
}

impl RoutePattern {
    /// Check a normalized path against this pattern.
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            Self::Exact(path) => *path == normalized,
            Self::Wildcard => true,
        }
    }
}

/// One row of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: RoutePattern,
    pub page: Page,
}

impl RouteEntry {
    const fn exact(path: &'static str, page: Page) -> Self {
        Self {
            pattern: RoutePattern::Exact(path),
            page,
        }
    }

    const fn wildcard(page: Page) -> Self {
        Self {
            pattern: RoutePattern::Wildcard,
            page,
        }
    }
}

/// Application route table. `/` and `/alert-management` share a page.
pub const ROUTE_TABLE: &[RouteEntry] = &[
    RouteEntry::exact("/", Page::AlertManagement),
    RouteEntry::exact("/main-dashboard", Page::MainDashboard),
    RouteEntry::exact("/login", Page::Login),
    RouteEntry::exact("/system-administration", Page::SystemAdministration),
    RouteEntry::exact(
        "/environmental-data-analytics",
        Page::EnvironmentalDataAnalytics,
    ),
    RouteEntry::exact("/community-alert-center", Page::CommunityAlertCenter),
    RouteEntry::exact("/alert-management", Page::AlertManagement),
    RouteEntry::wildcard(Page::NotFound),
];

/// Normalize a raw location path for matching.
///
/// Drops the query string and fragment, guarantees a leading `/`, strips a
/// trailing `/` (except on the root) and lowercases ASCII letters.
pub fn normalize_path(raw: &str) -> String {
    let path = raw
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim();
    let path = path.trim_end_matches('/');

    if path.is_empty() {
        return "/".to_string();
    }

    let mut normalized = String::with_capacity(path.len() + 1);
    if !path.starts_with('/') {
        normalized.push('/');
    }
    normalized.push_str(&path.to_ascii_lowercase());
    normalized
}

/// Resolve a raw location path to the page that should render for it.
pub fn resolve(raw: &str) -> Page {
    let normalized = normalize_path(raw);
    ROUTE_TABLE
        .iter()
        .find(|entry| entry.pattern.matches(&normalized))
        .map(|entry| entry.page)
        .unwrap_or(Page::NotFound)
}

/// A navigation request emitted by a view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavRequest {
    /// Push a new history entry for this path.
    Push(String),
    /// Go back one history entry.
    Back,
}

impl NavRequest {
    /// Push request for a page's canonical path (root for wildcard-only pages).
    pub fn to_page(page: Page) -> Self {
        Self::Push(page.path().unwrap_or("/").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const DEFINED: &[(&str, Page)] = &[
        ("/", Page::AlertManagement),
        ("/main-dashboard", Page::MainDashboard),
        ("/login", Page::Login),
        ("/system-administration", Page::SystemAdministration),
        (
            "/environmental-data-analytics",
            Page::EnvironmentalDataAnalytics,
        ),
        ("/community-alert-center", Page::CommunityAlertCenter),
        ("/alert-management", Page::AlertManagement),
    ];

    #[test]
    fn test_defined_paths_resolve() {
        for (path, page) in DEFINED {
            assert_eq!(resolve(path), *page, "path {path}");
        }
    }

    #[test]
    fn test_defined_paths_match_one_exact_entry() {
        for (path, _) in DEFINED {
            let exact_matches = ROUTE_TABLE
                .iter()
                .filter(|e| matches!(e.pattern, RoutePattern::Exact(_)))
                .filter(|e| e.pattern.matches(path))
                .count();
            assert_eq!(exact_matches, 1, "path {path}");
        }
    }

    #[test]
    fn test_root_and_alert_management_share_page() {
        assert_eq!(resolve("/"), resolve("/alert-management"));
    }

    #[test]
    fn test_unknown_paths_fall_through_to_wildcard() {
        for path in [
            "/nope",
            "/login/extra",
            "/main-dashboard/2024",
            "/alerts",
            "/main_dashboard",
        ] {
            assert_eq!(resolve(path), Page::NotFound, "path {path}");
        }
    }

    #[test]
    fn test_table_paths_are_unique() {
        let mut seen = HashSet::new();
        for entry in ROUTE_TABLE {
            if let RoutePattern::Exact(path) = entry.pattern {
                assert!(seen.insert(path), "duplicate route {path}");
            }
        }
    }

    #[test]
    fn test_single_wildcard_is_last() {
        let wildcards: Vec<_> = ROUTE_TABLE
            .iter()
            .enumerate()
            .filter(|(_, e)| e.pattern == RoutePattern::Wildcard)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(wildcards, vec![ROUTE_TABLE.len() - 1]);
        assert_eq!(ROUTE_TABLE.last().map(|e| e.page), Some(Page::NotFound));
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("///"), "/");
        assert_eq!(normalize_path("/login/"), "/login");
        assert_eq!(normalize_path("login"), "/login");
        assert_eq!(normalize_path("/Login"), "/login");
        assert_eq!(normalize_path("/login?next=/"), "/login");
        assert_eq!(normalize_path("/main-dashboard#alerts"), "/main-dashboard");
    }

    #[test]
    fn test_resolve_ignores_query_and_trailing_slash() {
        assert_eq!(resolve("/login/?lang=hi"), Page::Login);
        assert_eq!(resolve("/?ref=sms"), Page::AlertManagement);
        assert_eq!(resolve("/COMMUNITY-ALERT-CENTER"), Page::CommunityAlertCenter);
    }

    #[test]
    fn test_canonical_paths() {
        assert_eq!(Page::AlertManagement.path(), Some("/"));
        assert_eq!(Page::Login.path(), Some("/login"));
        assert_eq!(Page::NotFound.path(), None);
    }

    #[test]
    fn test_nav_request_to_page() {
        assert_eq!(
            NavRequest::to_page(Page::MainDashboard),
            NavRequest::Push("/main-dashboard".to_string())
        );
        assert_eq!(
            NavRequest::to_page(Page::NotFound),
            NavRequest::Push("/".to_string())
        );
    }
}
