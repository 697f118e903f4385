use crate::Route;

#[test]
fn given_login_path_when_from_path_then_public_login_route() {
    let route = Route::from_path("/login");

    assert_eq!(route, Route::Login);
    assert!(route.is_public());
}

#[test]
fn given_root_or_dashboard_path_when_from_path_then_dashboard() {
    assert_eq!(Route::from_path("/"), Route::Dashboard);
    assert_eq!(Route::from_path("/dashboard/"), Route::Dashboard);
}

#[test]
fn given_other_path_when_from_path_then_protected_path_route() {
    let route = Route::from_path("/bots/42");

    assert_eq!(route, Route::Path(String::from("/bots/42")));
    assert!(!route.is_public());
    assert_eq!(route.to_string(), "/bots/42");
}
