//! ShortLink entity representing a persisted alias mapping.

use chrono::{DateTime, Duration, Utc};

/// A short alias pointing at an original URL until it expires.
///
/// Created once at submission time and never modified. After `expires_at`
/// the link is treated as gone by the resolver, but it stays in storage and
/// keeps showing up in statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub alias: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a link valid for `validity_minutes` from `created_at`.
    ///
    /// `validity_minutes` must be at least 1 so that `expires_at > created_at`;
    /// the validator guarantees this for submitted requests.
    pub fn new(
        alias: String,
        original_url: String,
        created_at: DateTime<Utc>,
        validity_minutes: u32,
    ) -> Self {
        debug_assert!(validity_minutes > 0, "validity must be positive");

        Self {
            alias,
            original_url,
            created_at,
            expires_at: created_at + Duration::minutes(i64::from(validity_minutes)),
        }
    }

    /// Returns true if `now` is past the expiry time.
    ///
    /// The expiry instant itself still resolves.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link_created_at(created_at: DateTime<Utc>, minutes: u32) -> ShortLink {
        ShortLink::new(
            "abc123".to_string(),
            "https://example.com".to_string(),
            created_at,
            minutes,
        )
    }

    #[test]
    fn test_expiry_is_created_plus_validity() {
        let now = Utc::now();
        let link = link_created_at(now, 30);

        assert_eq!(link.created_at, now);
        assert_eq!(link.expires_at, now + Duration::minutes(30));
        assert!(link.expires_at > link.created_at);
    }

    #[test]
    fn test_not_expired_before_deadline() {
        let now = Utc::now();
        let link = link_created_at(now, 1);

        assert!(!link.is_expired_at(now));
        assert!(!link.is_expired_at(now + Duration::seconds(59)));
    }

    #[test]
    fn test_expiry_boundary_is_inclusive() {
        let now = Utc::now();
        let link = link_created_at(now, 1);

        assert!(!link.is_expired_at(link.expires_at));
        assert!(link.is_expired_at(link.expires_at + Duration::milliseconds(1)));
    }

    #[test]
    fn test_is_expired_uses_current_time() {
        let link = link_created_at(Utc::now() - Duration::hours(2), 60);
        assert!(link.is_expired());

        let fresh = link_created_at(Utc::now(), 60);
        assert!(!fresh.is_expired());
    }
}
