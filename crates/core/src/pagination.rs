//! Pagination defaults and clamping helpers shared by list endpoints.

/// Default number of rows returned by paginated list endpoints.
pub const DEFAULT_LIMIT: i64 = 50;

/// Maximum number of rows a caller can request per page.
pub const MAX_LIMIT: i64 = 200;

/// Clamp a caller-supplied limit to `1..=MAX_LIMIT`, defaulting when absent.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

/// Clamp a caller-supplied offset to be non-negative, defaulting to 0.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_when_absent() {
        assert_eq!(clamp_limit(None), DEFAULT_LIMIT);
    }

    #[test]
    fn limit_clamped_to_max() {
        assert_eq!(clamp_limit(Some(10_000)), MAX_LIMIT);
    }

    #[test]
    fn limit_clamped_to_at_least_one() {
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(-5)), 1);
    }

    #[test]
    fn limit_in_range_passes_through() {
        assert_eq!(clamp_limit(Some(25)), 25);
    }

    #[test]
    fn offset_defaults_to_zero() {
        assert_eq!(clamp_offset(None), 0);
    }

    #[test]
    fn negative_offset_clamped_to_zero() {
        assert_eq!(clamp_offset(Some(-10)), 0);
    }

    #[test]
    fn offset_passes_through() {
        assert_eq!(clamp_offset(Some(100)), 100);
    }
}
