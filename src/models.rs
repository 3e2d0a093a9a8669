//! Frontend Models
//!
//! Data structures matching the REST API entities.

use serde::{Deserialize, Serialize};

/// A single to-do item (matches API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub user_id: u32,
    pub completed: bool,
}

/// Signed-in user. `id == 0` means nobody is signed in.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl User {
    pub fn is_signed_in(&self) -> bool {
        self.id != 0
    }
}

/// Create payload; the server assigns the id
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask<'a> {
    pub title: &'a str,
    pub user_id: u32,
    pub completed: bool,
}

impl<'a> NewTask<'a> {
    /// New tasks always start open
    pub fn new(title: &'a str, user_id: u32) -> Self {
        Self { title, user_id, completed: false }
    }
}

/// Partial update payload, absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskPatch<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// Sign-up payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser<'a> {
    pub name: &'a str,
    pub username: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_task_uses_camel_case() {
        let task: Task = serde_json::from_value(json!({
            "id": 3, "title": "Buy milk", "userId": 12, "completed": true
        })).unwrap();
        assert_eq!(task.user_id, 12);
        assert!(task.completed);

        let back = serde_json::to_value(&task).unwrap();
        assert_eq!(back["userId"], 12);
    }

    #[test]
    fn test_patch_omits_missing_fields() {
        let patch = TaskPatch { completed: Some(true), ..Default::default() };
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({ "completed": true }));

        let patch = TaskPatch { title: Some("new"), ..Default::default() };
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({ "title": "new" }));
    }

    #[test]
    fn test_default_user_is_signed_out() {
        assert!(!User::default().is_signed_in());

        // API responses carry extra fields such as createdAt
        let user: User = serde_json::from_value(json!({
            "id": 5, "name": "Ann", "email": "ann@example.com", "createdAt": "2024-01-01"
        })).unwrap();
        assert!(user.is_signed_in());
        assert_eq!(user.username, "");
    }

    #[test]
    fn test_new_task_payload() {
        let payload = NewTask::new("Walk", 9);
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "title": "Walk", "userId": 9, "completed": false })
        );
    }
}
