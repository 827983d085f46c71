//! Shared query infrastructure: the [`Query`] trait.

/// Trait implemented by all query builders. Only filters that were set end
/// up in the query string.
pub trait Query {
    /// Returns the query parameters as key/value pairs, in a stable order.
    fn to_query_pairs(&self) -> Vec<(String, String)>;

    /// True when no filter is set.
    fn is_empty(&self) -> bool {
        self.to_query_pairs().is_empty()
    }
}
