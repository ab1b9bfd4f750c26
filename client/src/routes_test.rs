use super::*;

#[test]
fn declared_paths_resolve_to_themselves() {
    for route in AppRoute::ALL {
        assert_eq!(AppRoute::resolve(route.path()), route, "path {}", route.path());
    }
}

#[test]
fn paths_match_segments() {
    for route in AppRoute::ALL {
        assert_eq!(route.path(), format!("/{}", route.segment()));
    }
}

#[test]
fn table_maps_paths_to_pages() {
    assert_eq!(AppRoute::resolve("/").page(), Page::Landing);
    assert_eq!(AppRoute::resolve("/login").page(), Page::Login);
    assert_eq!(AppRoute::resolve("/register").page(), Page::Register);
}

#[test]
fn forgot_password_is_a_landing_placeholder() {
    let route = AppRoute::resolve("/forgot-password");
    assert_eq!(route, AppRoute::ForgotPassword);
    assert_eq!(route.page(), Page::Landing);
}

#[test]
fn matching_is_exact() {
    for path in ["/login/", "/Login", "/login?next=/", "/register/extra", "", "login"] {
        assert_eq!(AppRoute::resolve(path), AppRoute::NotFound, "path {path:?}");
    }
}

#[test]
fn unknown_paths_render_not_found() {
    let route = AppRoute::resolve("/timer");
    assert_eq!(route, AppRoute::NotFound);
    assert_eq!(route.page(), Page::NotFound);
}

#[test]
fn every_declared_route_is_in_the_table() {
    // Adding a variant forces a decision here and in the <Routes> block in app.rs.
    for route in [AppRoute::Landing, AppRoute::Login, AppRoute::Register, AppRoute::ForgotPassword, AppRoute::NotFound] {
        let declared = match route {
            AppRoute::Landing | AppRoute::Login | AppRoute::Register | AppRoute::ForgotPassword => true,
            AppRoute::NotFound => false,
        };
        assert_eq!(AppRoute::ALL.contains(&route), declared, "{route:?}");
    }
}

#[test]
fn table_segments_are_distinct() {
    let mut segments: Vec<_> = AppRoute::ALL.iter().map(|r| r.segment()).collect();
    segments.sort_unstable();
    segments.dedup();
    assert_eq!(segments.len(), AppRoute::ALL.len());
}

#[test]
fn every_page_is_reachable() {
    let mut pages: Vec<_> = AppRoute::ALL.iter().map(|r| r.page()).collect();
    pages.push(AppRoute::NotFound.page());
    for page in [Page::Landing, Page::Login, Page::Register, Page::NotFound] {
        assert!(pages.contains(&page), "{page:?}");
    }
}
