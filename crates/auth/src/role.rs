use serde::{Deserialize, Serialize};

use glowdesk_core::{DomainError, DomainResult, ValueObject};

/// Fixed set of user roles, ordered by privilege.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    SuperAdmin,
    Owner,
    Admin,
    Staff,
}

impl UserRole {
    pub const ALL: [UserRole; 4] = [
        UserRole::SuperAdmin,
        UserRole::Owner,
        UserRole::Admin,
        UserRole::Staff,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "superadmin",
            UserRole::Owner => "owner",
            UserRole::Admin => "admin",
            UserRole::Staff => "staff",
        }
    }

    /// Privilege rank: SUPERADMIN > OWNER > ADMIN > STAFF.
    fn rank(&self) -> u8 {
        match self {
            UserRole::SuperAdmin => 4,
            UserRole::Owner => 3,
            UserRole::Admin => 2,
            UserRole::Staff => 1,
        }
    }
}

impl core::fmt::Display for UserRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role value object with the permission hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role {
    value: UserRole,
}

impl Role {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let value = match raw {
            "superadmin" => UserRole::SuperAdmin,
            "owner" => UserRole::Owner,
            "admin" => UserRole::Admin,
            "staff" => UserRole::Staff,
            other => {
                let valid = UserRole::ALL.map(|r| r.as_str()).join(", ");
                return Err(DomainError::validation(format!(
                    "Invalid role: {other}. Must be one of: {valid}"
                )));
            }
        };

        Ok(Self { value })
    }

    pub fn superadmin() -> Self {
        Self {
            value: UserRole::SuperAdmin,
        }
    }

    pub fn owner() -> Self {
        Self {
            value: UserRole::Owner,
        }
    }

    pub fn admin() -> Self {
        Self {
            value: UserRole::Admin,
        }
    }

    pub fn staff() -> Self {
        Self {
            value: UserRole::Staff,
        }
    }

    pub fn value(&self) -> UserRole {
        self.value
    }

    pub fn is_superadmin(&self) -> bool {
        self.value == UserRole::SuperAdmin
    }

    pub fn is_owner(&self) -> bool {
        self.value == UserRole::Owner
    }

    pub fn is_admin(&self) -> bool {
        self.value == UserRole::Admin
    }

    pub fn is_staff(&self) -> bool {
        self.value == UserRole::Staff
    }

    /// Whether this role has at least the privilege of `required`.
    pub fn has_permission_level(&self, required: UserRole) -> bool {
        self.value.rank() >= required.rank()
    }

    /// Whether this role may manage (grant/revoke/modify) `target`.
    ///
    /// SUPERADMIN manages all; OWNER manages ADMIN and STAFF; ADMIN manages
    /// STAFF only; STAFF manages nobody.
    pub fn can_manage(&self, target: Role) -> bool {
        match self.value {
            UserRole::SuperAdmin => true,
            UserRole::Owner => target.is_admin() || target.is_staff(),
            UserRole::Admin => target.is_staff(),
            UserRole::Staff => false,
        }
    }
}

impl ValueObject for Role {}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.value.as_str())
    }
}
