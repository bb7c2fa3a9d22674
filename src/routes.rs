//! Route Table
//!
//! Static mapping from URL paths to the application's views. The shell renders
//! whatever factory the current path resolves to.

use leptos::prelude::AnyView;

use crate::views::{about_page, portfolio_page, todolist_page};

/// Views reachable through the router
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Todolist,
    About,
    Portfolio,
}

/// One entry of the route table
#[derive(Clone, Copy, Debug)]
pub struct RouteDef {
    pub path: &'static str,
    pub name: &'static str,
    pub route: AppRoute,
    /// Builds the view; called each time the route is navigated to
    pub view: fn() -> AnyView,
}

pub const ROUTES: &[RouteDef] = &[
    RouteDef { path: "/", name: "Todolist", route: AppRoute::Todolist, view: todolist_page },
    RouteDef { path: "/about", name: "about", route: AppRoute::About, view: about_page },
    RouteDef { path: "/portfolio", name: "portfolio", route: AppRoute::Portfolio, view: portfolio_page },
];

impl AppRoute {
    fn def(self) -> &'static RouteDef {
        ROUTES
            .iter()
            .find(|def| def.route == self)
            .unwrap_or(&ROUTES[0])
    }

    pub fn path(self) -> &'static str {
        self.def().path
    }

    pub fn name(self) -> &'static str {
        self.def().name
    }

    /// Navigation label
    pub fn label(self) -> &'static str {
        match self {
            AppRoute::Todolist => "Todos",
            AppRoute::About => "About",
            AppRoute::Portfolio => "Portfolio",
        }
    }
}

/// Find the table entry for a path. A trailing slash is ignored on non-root paths.
pub fn route_for(path: &str) -> Option<&'static RouteDef> {
    let path = match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() && !trimmed.ends_with('/') => trimmed,
        _ => path,
    };
    ROUTES.iter().find(|def| def.path == path)
}

pub fn resolve(path: &str) -> Option<AppRoute> {
    route_for(path).map(|def| def.route)
}

/// Path carried by a hash-history URL fragment such as `#/about`
pub fn legacy_hash_path(hash: &str) -> Option<&str> {
    let path = hash.strip_prefix('#').unwrap_or(hash);
    path.starts_with('/').then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr::fn_addr_eq;

    #[test]
    fn test_resolve_known_paths() {
        assert_eq!(resolve("/"), Some(AppRoute::Todolist));
        assert_eq!(resolve("/about"), Some(AppRoute::About));
        assert_eq!(resolve("/portfolio"), Some(AppRoute::Portfolio));
        assert_eq!(resolve("/about/"), Some(AppRoute::About));
    }

    #[test]
    fn test_resolve_unknown_paths() {
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("/todos"), None);
        assert_eq!(resolve("/about/team"), None);
        assert_eq!(resolve("//"), None);
        assert_eq!(resolve("/About"), None);
    }

    #[test]
    fn test_each_path_picks_its_own_view() {
        let expected: [(&str, fn() -> AnyView); 3] = [
            ("/", todolist_page),
            ("/about", about_page),
            ("/portfolio", portfolio_page),
        ];
        for (path, view) in expected {
            let def = route_for(path).unwrap();
            assert!(fn_addr_eq(def.view, view), "{} built the wrong view", path);
            let others = ROUTES.iter().filter(|other| fn_addr_eq(other.view, view)).count();
            assert_eq!(others, 1, "{} shares its view with another route", path);
        }
    }

    #[test]
    fn test_each_route_resolves_to_itself_only() {
        for def in ROUTES {
            assert_eq!(resolve(def.path), Some(def.route));
            assert_eq!(def.route.path(), def.path);
            let matches = ROUTES.iter().filter(|other| resolve(def.path) == Some(other.route)).count();
            assert_eq!(matches, 1);
        }
    }

    #[test]
    fn test_route_names() {
        assert_eq!(AppRoute::Todolist.name(), "Todolist");
        assert_eq!(AppRoute::About.name(), "about");
        assert_eq!(AppRoute::Portfolio.name(), "portfolio");
    }

    #[test]
    fn test_legacy_hash_path() {
        assert_eq!(legacy_hash_path("#/about"), Some("/about"));
        assert_eq!(legacy_hash_path("/portfolio"), Some("/portfolio"));
        assert_eq!(legacy_hash_path("#/"), Some("/"));
        assert_eq!(legacy_hash_path("#section"), None);
        assert_eq!(legacy_hash_path(""), None);
    }
}
