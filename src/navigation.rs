//! Navigation
//!
//! Client-side route table and the fixed navbar entries.

use crate::collection::Collection;

/// A navigable page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Collection(Collection),
}

/// One navbar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub destination: &'static str,
}

impl Route {
    /// Every route, in navbar order
    pub const ALL: [Route; 4] = [
        Route::Home,
        Route::Collection(Collection::Categories),
        Route::Collection(Collection::Users),
        Route::Collection(Collection::Journals),
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Collection(collection) => collection.endpoint(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Collection(collection) => collection.heading(),
        }
    }

    /// Match a browser path; a single trailing slash is tolerated
    pub fn from_path(path: &str) -> Option<Route> {
        let path = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(trimmed) => trimmed,
        };
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    pub fn nav_link(self) -> NavLink {
        NavLink {
            label: self.label(),
            destination: self.path(),
        }
    }
}

/// Navbar entries: Home, Categories, Users, Journals
pub fn nav_links() -> Vec<NavLink> {
    Route::ALL.into_iter().map(Route::nav_link).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_in_fixed_order() {
        let links = nav_links();
        assert_eq!(links.len(), 4);

        let pairs: Vec<(&str, &str)> = links.iter().map(|l| (l.label, l.destination)).collect();
        assert_eq!(
            pairs,
            vec![
                ("Home", "/"),
                ("Categories", "/categories"),
                ("Users", "/users"),
                ("Journals", "/journals"),
            ]
        );
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path("/users"), Some(Route::Collection(Collection::Users)));
        assert_eq!(Route::from_path("/journals/"), Some(Route::Collection(Collection::Journals)));
        assert_eq!(Route::from_path("/categories/42"), None);
        assert_eq!(Route::from_path("/settings"), None);
    }

    #[test]
    fn test_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }
}
