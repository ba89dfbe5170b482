use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire encoding of roles as the backend issues them. Matching is exact:
/// any other casing or spelling is treated as unrecognized.
pub const ROLE_USER: &str = "ROLE_USER";
pub const ROLE_AUTHOR: &str = "ROLE_AUTHOR";
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    #[serde(rename = "ROLE_USER")]
    User,
    #[serde(rename = "ROLE_AUTHOR")]
    Author,
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => ROLE_USER,
            Role::Author => ROLE_AUTHOR,
            Role::Admin => ROLE_ADMIN,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            ROLE_USER => Some(Role::User),
            ROLE_AUTHOR => Some(Role::Author),
            ROLE_ADMIN => Some(Role::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Capability {
    CreateArticles,
    EditAllArticles,
    DeleteAllArticles,
    ManageUsers,
}

impl Role {
    pub fn capabilities(&self) -> Vec<Capability> {
        match self {
            Role::Admin => vec![
                Capability::CreateArticles,
                Capability::EditAllArticles,
                Capability::DeleteAllArticles,
                Capability::ManageUsers,
            ],
            Role::Author => vec![Capability::CreateArticles],
            Role::User => vec![],
        }
    }

    pub fn has_capability(&self, capability: &Capability) -> bool {
        self.capabilities().contains(capability)
    }
}

// Total predicates over whatever is in the session. An absent or
// unrecognized role grants nothing.

pub fn is_admin(role: Option<&str>) -> bool {
    matches!(role.and_then(Role::from_str), Some(Role::Admin))
}

pub fn is_author(role: Option<&str>) -> bool {
    matches!(role.and_then(Role::from_str), Some(Role::Author))
}

pub fn is_user(role: Option<&str>) -> bool {
    matches!(role.and_then(Role::from_str), Some(Role::User))
}

pub fn can_create_articles(role: Option<&str>) -> bool {
    role.and_then(Role::from_str)
        .map(|r| r.has_capability(&Capability::CreateArticles))
        .unwrap_or(false)
}

pub fn can_edit_all_articles(role: Option<&str>) -> bool {
    role.and_then(Role::from_str)
        .map(|r| r.has_capability(&Capability::EditAllArticles))
        .unwrap_or(false)
}

pub fn can_delete_all_articles(role: Option<&str>) -> bool {
    role.and_then(Role::from_str)
        .map(|r| r.has_capability(&Capability::DeleteAllArticles))
        .unwrap_or(false)
}

pub fn can_manage_users(role: Option<&str>) -> bool {
    role.and_then(Role::from_str)
        .map(|r| r.has_capability(&Capability::ManageUsers))
        .unwrap_or(false)
}

/// Dispatch over the permission names the backend and legacy callers use.
/// Unknown names grant nothing.
pub fn has_named_permission(role: Option<&str>, permission: &str) -> bool {
    match permission {
        "isAdmin" => is_admin(role),
        "isAuthor" => is_author(role),
        "canCreateArticles" => can_create_articles(role),
        "canEditAllArticles" => can_edit_all_articles(role),
        "canDeleteAllArticles" => can_delete_all_articles(role),
        "canManageUsers" => can_manage_users(role),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_roles_grant_nothing() {
        for role in [
            None,
            Some(""),
            Some("ADMIN"),
            Some("role_admin"),
            Some("ROLE_SUPERUSER"),
            Some("garbage"),
        ] {
            assert!(!is_admin(role), "{:?}", role);
            assert!(!is_author(role), "{:?}", role);
            assert!(!is_user(role), "{:?}", role);
            assert!(!can_create_articles(role), "{:?}", role);
            assert!(!can_manage_users(role), "{:?}", role);
            assert!(!can_edit_all_articles(role), "{:?}", role);
            assert!(!can_delete_all_articles(role), "{:?}", role);
        }
    }

    #[test]
    fn test_create_articles_is_admin_or_author() {
        assert!(can_create_articles(Some(ROLE_ADMIN)));
        assert!(can_create_articles(Some(ROLE_AUTHOR)));
        assert!(!can_create_articles(Some(ROLE_USER)));
        assert!(!can_create_articles(None));
    }

    #[test]
    fn test_admin_only_capabilities() {
        for role in [Some(ROLE_USER), Some(ROLE_AUTHOR), None] {
            assert!(!can_manage_users(role));
            assert!(!can_edit_all_articles(role));
            assert!(!can_delete_all_articles(role));
        }
        assert!(can_manage_users(Some(ROLE_ADMIN)));
        assert!(can_edit_all_articles(Some(ROLE_ADMIN)));
        assert!(can_delete_all_articles(Some(ROLE_ADMIN)));
    }

    #[test]
    fn test_role_parsing_is_exact() {
        assert_eq!(Role::from_str("ROLE_ADMIN"), Some(Role::Admin));
        assert_eq!(Role::from_str("ROLE_AUTHOR"), Some(Role::Author));
        assert_eq!(Role::from_str("ROLE_USER"), Some(Role::User));
        assert_eq!(Role::from_str("Role_Admin"), None);
        assert_eq!(Role::from_str("ROLE_ADMIN "), None);
        assert_eq!(Role::Admin.to_string(), "ROLE_ADMIN");
    }

    #[test]
    fn test_capability_table() {
        assert_eq!(Role::Admin.capabilities().len(), 4);
        assert_eq!(
            Role::Author.capabilities(),
            vec![Capability::CreateArticles]
        );
        assert!(Role::User.capabilities().is_empty());
    }

    #[test]
    fn test_named_permission_dispatch() {
        assert!(has_named_permission(Some(ROLE_ADMIN), "isAdmin"));
        assert!(has_named_permission(Some(ROLE_AUTHOR), "canCreateArticles"));
        assert!(!has_named_permission(Some(ROLE_AUTHOR), "canManageUsers"));
        assert!(!has_named_permission(Some(ROLE_ADMIN), "canFly"));
        assert!(!has_named_permission(None, "isAdmin"));
    }
}
