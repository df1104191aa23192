//! Route definitions for the application

use dioxus::prelude::*;

use crate::pages::{NotFound, ResourceDetail, ResourceList};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::ResourceList {})]
    #[route("/resources")]
    ResourceList {},

    #[route("/resources/:id")]
    ResourceDetail { id: String },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_route_path() {
        let route = Route::ResourceDetail { id: "42".to_string() };
        assert_eq!(route.to_string(), "/resources/42");
    }

    #[test]
    fn test_detail_route_parses() {
        let route: Route = "/resources/7".parse().unwrap();
        assert_eq!(route, Route::ResourceDetail { id: "7".to_string() });
    }

    #[test]
    fn test_unknown_path_falls_through() {
        let route: Route = "/nope/here".parse().unwrap();
        assert!(matches!(route, Route::NotFound { .. }));
    }
}
