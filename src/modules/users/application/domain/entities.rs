use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account role. Anything outside this set is rejected by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "user" => Some(Role::User),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

/// Submitted account state. Stored as the `active` flag on the users row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserState {
    Active,
    Inactive,
}

impl UserState {
    pub fn parse(value: &str) -> Option<UserState> {
        match value {
            "active" => Some(UserState::Active),
            "inactive" => Some(UserState::Inactive),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, UserState::Active)
    }

    pub fn from_active(active: bool) -> UserState {
        if active {
            UserState::Active
        } else {
            UserState::Inactive
        }
    }
}

/// The profession a profile will point at after the upsert: either an
/// existing row the form selected, or a new title typed as free text.
/// Resolved inside the upsert transaction, never as a generic
/// find-or-create (an already-taken title must fail, not be reused).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfessionRef {
    Existing(Uuid),
    New(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_known_values_only() {
        assert_eq!(Role::parse("user"), Some(Role::User));
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("superadmin"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn state_maps_to_active_flag() {
        assert!(UserState::Active.is_active());
        assert!(!UserState::Inactive.is_active());
        assert_eq!(UserState::from_active(true), UserState::Active);
        assert_eq!(UserState::from_active(false), UserState::Inactive);
    }

    #[test]
    fn state_parses_known_values_only() {
        assert_eq!(UserState::parse("active"), Some(UserState::Active));
        assert_eq!(UserState::parse("inactive"), Some(UserState::Inactive));
        assert_eq!(UserState::parse("invalid-state"), None);
    }
}
