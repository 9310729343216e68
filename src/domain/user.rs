//! User domain entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity
///
/// `id` is assigned by the store on insert; a record that has not been
/// stored yet carries `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-assigned identifier
    #[serde(default)]
    #[schema(example = 1)]
    pub id: Option<i32>,
    #[schema(example = "John")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(example = "john.doe@example.com")]
    pub email: String,
}

impl User {
    /// Create a user that has not been stored yet
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Same record keyed by `id`
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    /// Check if the store has assigned an identifier
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.id {
            Some(id) => write!(f, "User #{} ", id)?,
            None => write!(f, "User (unsaved) ")?,
        }
        write!(f, "{} {} <{}>", self.first_name, self.last_name, self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_field_for_field_in_camel_case() {
        let user = User::new("John", "Doe", "john.doe@example.com").with_id(7);
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "firstName": "John",
                "lastName": "Doe",
                "email": "john.doe@example.com"
            })
        );
    }

    #[test]
    fn id_defaults_to_none_when_absent() {
        let user: User = serde_json::from_str(
            r#"{"firstName":"Jane","lastName":"Smith","email":"jane.smith@example.com"}"#,
        )
        .unwrap();

        assert!(!user.is_persisted());
        assert_eq!(user, User::new("Jane", "Smith", "jane.smith@example.com"));
    }

    #[test]
    fn display_includes_identity_when_stored() {
        let user = User::new("Jane", "Smith", "jane.smith@example.com");
        assert_eq!(user.to_string(), "User (unsaved) Jane Smith <jane.smith@example.com>");
        assert_eq!(
            user.with_id(2).to_string(),
            "User #2 Jane Smith <jane.smith@example.com>"
        );
    }
}
