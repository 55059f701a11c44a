//! Boundary trait for the routing collaborator.
//!
//! The navigation core never performs routing itself: it records tab
//! state synchronously and asks the router to move, then later
//! reconciles through [`crate::route_sync`] once the router reports the
//! change. Keeping the router behind a trait keeps the state machine
//! testable without a surrounding UI runtime.

/// Issues navigation requests to the application's router.
///
/// Implementations must not assume the route has changed by the time
/// `navigate` returns; the change is observed asynchronously and fed
/// back through [`crate::route_sync::on_route_changed`].
pub trait RouteMutator {
    /// Request navigation to the given route path.
    fn navigate(&mut self, path: &str);
}

/// Recording router for tests and headless embedding.
///
/// Collects every requested path without performing any navigation.
#[derive(Debug, Default)]
pub struct RecordingRouter {
    /// Paths requested so far, in call order.
    pub requests: Vec<String>,
}

impl RouteMutator for RecordingRouter {
    fn navigate(&mut self, path: &str) {
        self.requests.push(path.to_string());
    }
}
