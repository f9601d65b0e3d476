use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    core::{Namespace, Resource, impl_identified},
    types::Timestamp,
};

/// A short-lived token authorizing writes to the meter event stream.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeterEventSession {
    pub id: String,
    /// Always `"v2.billing.meter_event_session"`.
    pub object: String,
    /// Bearer token for the stream endpoint. Valid until `expires_at`.
    pub authentication_token: String,
    pub created: Timestamp,
    pub expires_at: Timestamp,
    pub livemode: bool,
}

impl Resource for MeterEventSession {
    const SCHEMA: &'static str = "billing/meter_event_session";
    const NAMESPACE: Namespace = Namespace::V2;
}

impl_identified!(MeterEventSession);

impl MeterEventSession {
    /// `true` once `now` has reached `expires_at`.
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        now >= self.expires_at
    }

    /// Time left before the token expires, zero once it has.
    pub fn remaining_at(&self, now: Timestamp) -> Duration {
        self.expires_at.duration_since(now)
    }

    /// [`MeterEventSession::is_expired_at`] against the wall clock.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Timestamp::now())
    }
}

impl std::fmt::Debug for MeterEventSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeterEventSession")
            .field("id", &self.id)
            .field("object", &self.object)
            .field("authentication_token", &"<redacted>")
            .field("created", &self.created)
            .field("expires_at", &self.expires_at)
            .field("livemode", &self.livemode)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn session() -> MeterEventSession {
        serde_json::from_value(json!({
            "id": "mes_123",
            "object": "v2.billing.meter_event_session",
            "authentication_token": "mes_tok_abc",
            "created": 1700000000,
            "expires_at": 1700000900,
            "livemode": false
        }))
        .unwrap()
    }

    #[test]
    fn expiry_against_a_fixed_clock() {
        let session = session();

        assert!(!session.is_expired_at(Timestamp(1700000000)));
        assert_eq!(session.remaining_at(Timestamp(1700000000)), Duration::from_secs(900));

        assert!(session.is_expired_at(Timestamp(1700000900)));
        assert_eq!(session.remaining_at(Timestamp(1700000900)), Duration::ZERO);
        assert_eq!(session.remaining_at(Timestamp(1800000000)), Duration::ZERO);
    }

    #[test]
    fn wall_clock_expiry() {
        // Fixture expired in 2023.
        assert!(session().is_expired());
    }

    #[test]
    fn token_is_not_printed() {
        let printed = format!("{:?}", session());
        assert!(printed.contains("mes_123"));
        assert!(!printed.contains("mes_tok_abc"));
    }
}
