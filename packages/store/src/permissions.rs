//! # Role → permission table
//!
//! The only place authorization rules live. Guards and action-visibility checks
//! ask [`has_permission`] instead of comparing roles themselves.
//!
//! | Role | Granted |
//! |------|---------|
//! | `admin` | every [`Permission`] |
//! | `committee` | notice create/edit/delete, visitor check-in |
//! | `resident` | nothing |
//!
//! The table is a `match` over [`Role`], so every role is guaranteed an entry.

use std::fmt;
use std::str::FromStr;

use crate::models::Role;

/// A single allowed action, identified on the wire by its tag (`"create:notice"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Permission {
    CreateNotice,
    EditNotice,
    DeleteNotice,
    /// Edit or delete pre-approvals created by other residents.
    ManagePreApprovals,
    /// Use the security desk: check visitors in and out.
    CheckInVisitors,
}

impl Permission {
    pub const ALL: [Permission; 5] = [
        Permission::CreateNotice,
        Permission::EditNotice,
        Permission::DeleteNotice,
        Permission::ManagePreApprovals,
        Permission::CheckInVisitors,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Permission::CreateNotice => "create:notice",
            Permission::EditNotice => "edit:notice",
            Permission::DeleteNotice => "delete:notice",
            Permission::ManagePreApprovals => "manage:pre-approval",
            Permission::CheckInVisitors => "check-in:visitor",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown permission `{0}`")]
pub struct UnknownPermission(pub String);

impl FromStr for Permission {
    type Err = UnknownPermission;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .into_iter()
            .find(|p| p.tag() == s)
            .ok_or_else(|| UnknownPermission(s.to_string()))
    }
}

const NOTICE_EDITOR: &[Permission] = &[
    Permission::CreateNotice,
    Permission::EditNotice,
    Permission::DeleteNotice,
    Permission::CheckInVisitors,
];

/// Permissions granted to `role`.
pub fn permissions_for(role: Role) -> &'static [Permission] {
    match role {
        Role::Admin => &Permission::ALL,
        Role::Committee => NOTICE_EDITOR,
        Role::Resident => &[],
    }
}

/// Whether `role` is granted `permission`. An absent role is granted nothing.
pub fn has_permission(role: Option<Role>, permission: Permission) -> bool {
    role.is_some_and(|role| permissions_for(role).contains(&permission))
}

/// Tag-based variant of [`has_permission`]. Unknown tags are never granted.
pub fn has_permission_tag(role: Option<Role>, tag: &str) -> bool {
    tag.parse::<Permission>()
        .is_ok_and(|permission| has_permission(role, permission))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_role_has_nothing() {
        for permission in Permission::ALL {
            assert!(!has_permission(None, permission));
            assert!(!has_permission_tag(None, permission.tag()));
        }
    }

    #[test]
    fn test_lookup_matches_table() {
        for role in Role::ALL {
            for permission in Permission::ALL {
                let expected = permissions_for(role).contains(&permission);
                assert_eq!(has_permission(Some(role), permission), expected);
                // Deterministic
                assert_eq!(has_permission(Some(role), permission), expected);
            }
        }
    }

    #[test]
    fn test_resident_has_no_notice_rights() {
        assert!(permissions_for(Role::Resident).is_empty());
        assert!(!has_permission(Some(Role::Resident), Permission::CreateNotice));
    }

    #[test]
    fn test_committee_and_admin_manage_notices() {
        for role in [Role::Committee, Role::Admin] {
            assert!(has_permission(Some(role), Permission::CreateNotice));
            assert!(has_permission(Some(role), Permission::EditNotice));
            assert!(has_permission(Some(role), Permission::DeleteNotice));
            assert!(has_permission(Some(role), Permission::CheckInVisitors));
        }
        assert!(has_permission(Some(Role::Admin), Permission::ManagePreApprovals));
        assert!(!has_permission(Some(Role::Committee), Permission::ManagePreApprovals));
    }

    #[test]
    fn test_unknown_tag_is_denied() {
        assert!(!has_permission_tag(Some(Role::Admin), "launch:rocket"));
        assert!(has_permission_tag(Some(Role::Admin), "create:notice"));
    }

    #[test]
    fn test_tags_round_trip() {
        for permission in Permission::ALL {
            assert_eq!(permission.tag().parse::<Permission>(), Ok(permission));
        }
    }
}
