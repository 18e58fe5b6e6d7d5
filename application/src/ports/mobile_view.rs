//! Mobile view detector port

/// Reports whether the current request is served as a mobile view.
///
/// Optional collaborator: hosts without a mobile frontend pass `None` to
/// the oracle, which then treats every request as desktop.
pub trait MobileViewDetector: Send + Sync {
    fn should_display_mobile_view(&self) -> bool;
}
