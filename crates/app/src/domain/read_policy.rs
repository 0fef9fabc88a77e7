//! Read degradation policy for list endpoints.

use std::fmt::Display;

use tracing::warn;

/// Controls how collection reads behave when the store is unavailable.
///
/// Storefront listings prefer an empty page over a hard failure, so the
/// production wiring uses [`ReadPolicy::DegradeToEmpty`]. Tests and tools
/// that need to observe the underlying failure use [`ReadPolicy::Propagate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadPolicy {
    /// Swallow the read error, log it, and return an empty collection.
    DegradeToEmpty,

    /// Surface the read error to the caller.
    Propagate,
}

impl ReadPolicy {
    /// Apply the policy to the outcome of a collection read.
    pub fn apply<T, E>(self, context: &str, result: Result<Vec<T>, E>) -> Result<Vec<T>, E>
    where
        E: Display,
    {
        match (self, result) {
            (Self::DegradeToEmpty, Err(error)) => {
                warn!("{context}: {error}");

                Ok(Vec::new())
            }
            (_, result) => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrade_turns_error_into_empty_list() {
        let result: Result<Vec<u32>, &str> = Err("connection refused");

        let applied = ReadPolicy::DegradeToEmpty.apply("listing widgets", result);

        assert_eq!(applied, Ok(Vec::new()));
    }

    #[test]
    fn degrade_passes_successful_reads_through() {
        let result: Result<Vec<u32>, &str> = Ok(vec![1, 2, 3]);

        let applied = ReadPolicy::DegradeToEmpty.apply("listing widgets", result);

        assert_eq!(applied, Ok(vec![1, 2, 3]));
    }

    #[test]
    fn propagate_surfaces_the_error() {
        let result: Result<Vec<u32>, &str> = Err("connection refused");

        let applied = ReadPolicy::Propagate.apply("listing widgets", result);

        assert_eq!(applied, Err("connection refused"));
    }
}
