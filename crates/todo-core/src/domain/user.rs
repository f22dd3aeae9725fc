//! User Entity

use serde::{Deserialize, Serialize};

use super::wire::record_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

/// Signed-in account profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireUser")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

#[derive(Deserialize)]
struct WireUser {
    #[serde(default)]
    id: Option<String>,
    #[serde(rename = "_id", default)]
    mongo_id: Option<String>,
    email: String,
    name: String,
    role: Role,
}

impl TryFrom<WireUser> for User {
    type Error = String;

    fn try_from(wire: WireUser) -> Result<Self, Self::Error> {
        Ok(User {
            id: record_id(wire.id, wire.mongo_id)?,
            email: wire.email,
            name: wire.name,
            role: wire.role,
        })
    }
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Response of the login and register endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_user() {
        let user: User = serde_json::from_str(
            r#"{"_id":"u1","email":"ann@x.com","name":"Ann","role":"admin"}"#,
        )
        .unwrap();
        assert_eq!(user.id, "u1");
        assert!(user.is_admin());
    }

    #[test]
    fn test_decode_user_with_both_ids() {
        let user: User = serde_json::from_str(
            r#"{"_id":"u1","id":"u1","email":"ann@x.com","name":"Ann","role":"user"}"#,
        )
        .unwrap();
        assert_eq!(user.id, "u1");
        assert!(!user.is_admin());
    }

    #[test]
    fn test_reject_unknown_role() {
        let result = serde_json::from_str::<User>(
            r#"{"id":"u1","email":"ann@x.com","name":"Ann","role":"owner"}"#,
        );
        assert!(result.is_err());
    }
}
