//! Page Resolution
//!
//! Maps the browser location onto the fixed set of site pages and decides
//! which navigation links are highlighted or close the mobile drawer.

use leptos::prelude::window;

/// Scroll offset past which the top navbar switches to its solid style.
pub const SCROLLED_NAV_OFFSET: f64 = 50.0;

/// The fixed set of pages the site navigates between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    Register,
    Dashboard,
    Workspace,
    Profile,
    Contact,
    NotFound,
}

impl Page {
    /// File name the page is served under; also the href of its nav link
    pub fn file_name(self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::Login => "login.html",
            Page::Register => "register.html",
            Page::Dashboard => "dashboard.html",
            Page::Workspace => "workspace.html",
            Page::Profile => "profile.html",
            Page::Contact => "contact.html",
            Page::NotFound => "404.html",
        }
    }

    /// Resolve a location path to a page. The last path segment decides;
    /// an empty segment means the index page, anything unknown is a 404.
    pub fn from_path(path: &str) -> Page {
        let name = path.rsplit('/').next().unwrap_or("");
        let name = if name.is_empty() { "index.html" } else { name };
        match name {
            "index.html" => Page::Home,
            "login.html" => Page::Login,
            "register.html" => Page::Register,
            "dashboard.html" => Page::Dashboard,
            "workspace.html" => Page::Workspace,
            "profile.html" => Page::Profile,
            "contact.html" => Page::Contact,
            _ => Page::NotFound,
        }
    }
}

/// Page for the current browser location
pub fn current_page() -> Page {
    let path = window().location().pathname().unwrap_or_default();
    Page::from_path(&path)
}

/// Whether a nav link should carry the `active` marker
pub fn is_active(href: &str, current: Page) -> bool {
    href == current.file_name()
}

/// Whether following a link leaves the page. Fragment and empty hrefs are
/// dialog triggers and must leave the mobile drawer open.
pub fn navigates_away(href: &str) -> bool {
    !href.is_empty() && !href.starts_with('#')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_resolves_pages() {
        assert_eq!(Page::from_path("/tms/dashboard.html"), Page::Dashboard);
        assert_eq!(Page::from_path("/login.html"), Page::Login);
        assert_eq!(Page::from_path("workspace.html"), Page::Workspace);
    }

    #[test]
    fn test_from_path_defaults_to_index() {
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path(""), Page::Home);
    }

    #[test]
    fn test_from_path_unknown_is_not_found() {
        assert_eq!(Page::from_path("/missing.html"), Page::NotFound);
    }

    #[test]
    fn test_exactly_one_link_active() {
        let hrefs = [
            "index.html",
            "login.html",
            "register.html",
            "dashboard.html",
            "workspace.html",
            "profile.html",
            "contact.html",
        ];
        let current = Page::from_path("/app/dashboard.html");
        let active: Vec<_> = hrefs
            .iter()
            .filter(|href| is_active(href, current))
            .collect();
        assert_eq!(active, vec![&"dashboard.html"]);
    }

    #[test]
    fn test_no_link_active_on_404() {
        let current = Page::from_path("/nowhere.html");
        assert!(!is_active("index.html", current));
        assert!(!is_active("dashboard.html", current));
    }

    #[test]
    fn test_navigates_away() {
        assert!(navigates_away("workspace.html"));
        assert!(!navigates_away("#"));
        assert!(!navigates_away("#addWorkspaceModal"));
        assert!(!navigates_away(""));
    }
}
