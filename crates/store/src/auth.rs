//! Demo credential resolution.
//!
//! The analysis core only needs an opaque owner id; this provider resolves
//! `(email, password)` pairs into full accounts the way the demo expects:
//! two fixture accounts plus an accept-anything fallback that derives the
//! display name from the email local part.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use trustseal_core::error::CoreError;
use trustseal_core::types::Timestamp;

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }
}

/// An authenticated identity. Only `id` matters to the analysis core; the
/// rest is display data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// AuthProvider
// ---------------------------------------------------------------------------

/// Resolves credentials into an identity.
pub trait AuthProvider {
    fn login(&self, email: &str, password: &str) -> Result<UserAccount, CoreError>;
    fn register(&self, name: &str, email: &str, password: &str) -> Result<UserAccount, CoreError>;
}

// ---------------------------------------------------------------------------
// DemoAuthProvider
// ---------------------------------------------------------------------------

/// Fixture admin email.
pub const DEMO_ADMIN_EMAIL: &str = "admin@trustseal.com";
const DEMO_ADMIN_PASSWORD: &str = "admin";

/// Fixture regular-user email.
pub const DEMO_USER_EMAIL: &str = "user@example.com";
const DEMO_USER_PASSWORD: &str = "password";

/// Stable ids for the two fixture accounts.
const DEMO_ADMIN_ID: Uuid = Uuid::from_u128(0x01);
const DEMO_USER_ID: Uuid = Uuid::from_u128(0x02);

/// Accept-anything demo provider with two fixed accounts.
#[derive(Debug, Default, Clone, Copy)]
pub struct DemoAuthProvider;

impl DemoAuthProvider {
    fn account(id: Uuid, name: &str, email: &str, role: UserRole) -> UserAccount {
        UserAccount {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role,
            created_at: Utc::now(),
        }
    }

    /// Derive a display name from the email local part.
    fn name_from_email(email: &str) -> String {
        email.split('@').next().unwrap_or(email).to_string()
    }

    /// Admin iff the email mentions "admin".
    fn role_from_email(email: &str) -> UserRole {
        if email.contains("admin") {
            UserRole::Admin
        } else {
            UserRole::User
        }
    }
}

impl AuthProvider for DemoAuthProvider {
    fn login(&self, email: &str, password: &str) -> Result<UserAccount, CoreError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(CoreError::Unauthorized(
                "Email and password are required".to_string(),
            ));
        }

        if email == DEMO_ADMIN_EMAIL && password == DEMO_ADMIN_PASSWORD {
            return Ok(Self::account(
                DEMO_ADMIN_ID,
                "Admin User",
                DEMO_ADMIN_EMAIL,
                UserRole::Admin,
            ));
        }

        if email == DEMO_USER_EMAIL && password == DEMO_USER_PASSWORD {
            return Ok(Self::account(
                DEMO_USER_ID,
                "John Doe",
                DEMO_USER_EMAIL,
                UserRole::User,
            ));
        }

        // Demo mode: any other well-formed credentials are accepted.
        Ok(UserAccount {
            id: Uuid::new_v4(),
            name: Self::name_from_email(email),
            email: email.to_string(),
            role: Self::role_from_email(email),
            created_at: Utc::now(),
        })
    }

    fn register(&self, name: &str, email: &str, password: &str) -> Result<UserAccount, CoreError> {
        if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(CoreError::Validation(
                "Name, email, and password are required".to_string(),
            ));
        }

        Ok(UserAccount {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            role: Self::role_from_email(email),
            created_at: Utc::now(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_fixture_resolves_to_admin_role() {
        let account = DemoAuthProvider.login(DEMO_ADMIN_EMAIL, "admin").unwrap();
        assert_eq!(account.role, UserRole::Admin);
        assert_eq!(account.id, DEMO_ADMIN_ID);
        assert_eq!(account.name, "Admin User");
    }

    #[test]
    fn user_fixture_resolves_to_user_role() {
        let account = DemoAuthProvider.login(DEMO_USER_EMAIL, "password").unwrap();
        assert_eq!(account.role, UserRole::User);
        assert_eq!(account.id, DEMO_USER_ID);
    }

    #[test]
    fn unknown_credentials_are_accepted_in_demo_mode() {
        let account = DemoAuthProvider.login("alice@corp.com", "hunter2").unwrap();
        assert_eq!(account.name, "alice");
        assert_eq!(account.role, UserRole::User);
    }

    #[test]
    fn admin_substring_in_email_grants_admin_role() {
        let account = DemoAuthProvider
            .login("site-admin@corp.com", "secret")
            .unwrap();
        assert_eq!(account.role, UserRole::Admin);
    }

    #[test]
    fn empty_credentials_are_rejected() {
        assert!(DemoAuthProvider.login("", "x").is_err());
        assert!(DemoAuthProvider.login("a@b.com", "").is_err());
    }

    #[test]
    fn register_requires_all_fields() {
        assert!(DemoAuthProvider.register("", "a@b.com", "pw").is_err());
        assert!(DemoAuthProvider.register("Alice", "", "pw").is_err());
        assert!(DemoAuthProvider.register("Alice", "a@b.com", "").is_err());
    }

    #[test]
    fn register_keeps_the_given_name() {
        let account = DemoAuthProvider
            .register("Alice Liddell", "alice@corp.com", "pw")
            .unwrap();
        assert_eq!(account.name, "Alice Liddell");
        assert_eq!(account.role, UserRole::User);
    }
}
