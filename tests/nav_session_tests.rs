//! End-to-end tests for tab/route convergence across event sources.

use console_nav::routing::RecordingRouter;
use console_nav::{ConsoleWorkspace, HOME_TAB_ID, RouteOutcome};
use console_nav_config::NavConfig;

fn workspace() -> ConsoleWorkspace {
    ConsoleWorkspace::new(&NavConfig::default()).unwrap()
}

#[test]
fn deep_link_synthesizes_tab_from_index() {
    let mut ws = workspace();

    // Process start at the home tab, then a deep link arrives.
    let outcome = ws.handle_route_changed("/users/list");

    assert_eq!(outcome, RouteOutcome::Opened);
    let ids: Vec<&str> = ws.session().tabs().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec![HOME_TAB_ID, "/users/list"]);
    assert_eq!(ws.session().active_tab_id(), Some("/users/list"));
    assert_eq!(ws.breadcrumbs(), ["Home", "Users", "User List"]);
}

#[test]
fn repeated_route_change_converges_without_duplicates() {
    let mut ws = workspace();

    ws.handle_route_changed("/users/list");
    let outcome = ws.handle_route_changed("/users/list");

    assert_eq!(outcome, RouteOutcome::AlreadyActive);
    assert_eq!(ws.session().tab_count(), 2);
}

#[test]
fn search_then_route_callback_produces_exactly_one_tab() {
    let mut ws = workspace();
    let mut router = RecordingRouter::default();

    ws.set_search_query("task list");
    let path = {
        let results = ws.search_results();
        assert!(!results.is_empty());
        results[0].path.clone()
    };
    assert!(ws.select_search_result(&path, &mut router));
    assert_eq!(router.requests, vec![path.clone()]);

    // Simulate the router's eventual route-changed callback.
    let outcome = ws.handle_route_changed(&path);

    assert_eq!(outcome, RouteOutcome::AlreadyActive);
    let count = ws
        .session()
        .tabs()
        .iter()
        .filter(|t| t.path == path)
        .count();
    assert_eq!(count, 1);
    assert_eq!(ws.search_query(), "");
}

#[test]
fn back_button_reactivates_existing_tab() {
    let mut ws = workspace();
    let mut router = RecordingRouter::default();

    ws.handle_sidebar_click("/users/list", &mut router);
    ws.handle_sidebar_click("/gifts/list", &mut router);

    // Browser back to the users screen.
    let outcome = ws.handle_route_changed("/users/list");

    assert_eq!(outcome, RouteOutcome::Activated);
    assert_eq!(ws.session().tab_count(), 3);
    assert_eq!(ws.session().active_tab_id(), Some("/users/list"));
}

#[test]
fn auxiliary_routes_do_not_corrupt_tab_state() {
    let mut ws = workspace();
    ws.handle_route_changed("/users/list");

    let outcome = ws.handle_route_changed("/login");

    assert_eq!(outcome, RouteOutcome::OutsideTree);
    assert_eq!(ws.session().tab_count(), 2);
    assert_eq!(ws.session().active_tab_id(), Some("/users/list"));

    // Coming back from the login screen reconciles normally.
    assert_eq!(
        ws.handle_route_changed("/users/list"),
        RouteOutcome::AlreadyActive
    );
}

#[test]
fn close_sequence_keeps_route_and_active_tab_converged() {
    let mut ws = workspace();
    let mut router = RecordingRouter::default();

    ws.handle_sidebar_click("/users/list", &mut router);
    ws.handle_sidebar_click("/gifts/list", &mut router);
    ws.handle_sidebar_click("/rooms/list", &mut router);
    router.requests.clear();

    // Close active rightmost: left neighbor takes over, route follows.
    ws.handle_tab_closed("/rooms/list", &mut router);
    assert_eq!(ws.session().active_tab_id(), Some("/gifts/list"));
    assert_eq!(router.requests, vec!["/gifts/list"]);

    // The route-changed callback for that navigation is a no-op.
    assert_eq!(
        ws.handle_route_changed("/gifts/list"),
        RouteOutcome::AlreadyActive
    );

    // Close down to the home tab; the final close is refused.
    ws.handle_tab_closed("/gifts/list", &mut router);
    ws.handle_tab_closed("/users/list", &mut router);
    assert_eq!(ws.session().active_tab_id(), Some(HOME_TAB_ID));
    ws.handle_tab_closed(HOME_TAB_ID, &mut router);
    assert_eq!(ws.session().tab_count(), 1);
}

#[test]
fn deep_nested_destination_carries_full_trail() {
    let mut ws = workspace();

    ws.handle_route_changed("/users/moderation/banned");

    assert_eq!(
        ws.breadcrumbs(),
        ["Home", "Users", "Moderation", "Banned Users"]
    );
}
