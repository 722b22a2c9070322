//! Static demo credential table.
//!
//! Secrets are compared in plain text. There is no hashing, lockout or rate
//! limiting.

use crate::model::role::Role;
use crate::model::session::Session;

struct Credential {
    email: &'static str,
    secret: &'static str,
    user_id: &'static str,
    name: &'static str,
    role: Role,
}

const CREDENTIALS: &[Credential] = &[
    Credential {
        email: "admin@example.com",
        secret: "admin123",
        user_id: "1",
        name: "Admin User",
        role: Role::Admin,
    },
    Credential {
        email: "worker@example.com",
        secret: "worker123",
        user_id: "2",
        name: "Worker User",
        role: Role::Worker,
    },
    Credential {
        email: "user@example.com",
        secret: "user123",
        user_id: "3",
        name: "Regular User",
        role: Role::User,
    },
];

/// Returns the session for an exact `email`/`secret` match.
///
/// Email lookup is exact (case-sensitive, no trimming).
pub fn authenticate(email: &str, secret: &str) -> Option<Session> {
    CREDENTIALS
        .iter()
        .find(|credential| credential.email == email)
        .filter(|credential| credential.secret == secret)
        .map(|credential| Session {
            id: credential.user_id.to_string(),
            email: credential.email.to_string(),
            name: credential.name.to_string(),
            role: credential.role,
        })
}

/// Emails present in the credential table, in table order.
pub fn known_emails() -> impl Iterator<Item = &'static str> {
    CREDENTIALS.iter().map(|credential| credential.email)
}

#[cfg(test)]
mod tests {
    use super::{authenticate, known_emails};
    use crate::model::role::Role;

    #[test]
    fn matches_exact_pairs_only() {
        let session = authenticate("worker@example.com", "worker123").expect("valid pair");
        assert_eq!(session.role, Role::Worker);
        assert_eq!(session.id, "2");

        assert!(authenticate("worker@example.com", "admin123").is_none());
        assert!(authenticate("Worker@example.com", "worker123").is_none());
        assert!(authenticate("", "").is_none());
    }

    #[test]
    fn lists_three_accounts() {
        assert_eq!(known_emails().count(), 3);
    }
}
