/// Per-word inclusion test applied while bucketing.
///
/// Implemented by the configurable [`MarkerPredicate`](crate::config::MarkerPredicate)
/// and by any thread-safe `Fn(&str) -> bool`, so library callers can plug in
/// their own rule.
pub trait WordFilter: Send + Sync {
    fn accepts(&self, word: &str) -> bool;
}

impl<F> WordFilter for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn accepts(&self, word: &str) -> bool {
        self(word)
    }
}
