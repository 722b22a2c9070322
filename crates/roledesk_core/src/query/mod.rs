//! Read-only projections used by dashboard pages.
//!
//! # Responsibility
//! - Filtering, sorting and counting over `DomainStore` collections.
//!
//! # Invariants
//! - Queries never mutate the store.
//! - Text search is a case-insensitive substring match; an empty needle
//!   matches everything.

pub mod analytics;
pub mod calendar;
pub mod documents;
pub mod logs;
pub mod notifications;
pub mod tasks;

pub(crate) fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}

#[cfg(test)]
mod tests {
    use super::contains_ignore_case;

    #[test]
    fn empty_needle_matches() {
        assert!(contains_ignore_case("anything", ""));
        assert!(contains_ignore_case("Review Code", "code"));
        assert!(!contains_ignore_case("Review", "deploy"));
    }
}
