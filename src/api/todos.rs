//! Todo Endpoints
//!
//! CRUD calls for tasks, scoped by the owning user id.

use crate::error::ApiResult;
use crate::models::{NewTask, Task, TaskPatch};
use super::{base, client, decode, ensure_success};

// ========================
// URLs
// ========================

pub fn todos_url(base: &str) -> String {
    format!("{}/todos", base)
}

pub fn todo_url(base: &str, task_id: u32) -> String {
    format!("{}/todos/{}", base, task_id)
}

// ========================
// Requests
// ========================

pub async fn get_todos(user_id: u32) -> ApiResult<Vec<Task>> {
    log::debug!("[API] GET todos for user {}", user_id);
    let response = client()
        .get(todos_url(base()))
        .query(&[("userId", user_id)])
        .send()
        .await?;
    decode(response).await
}

pub async fn create_todo(user_id: u32, title: &str) -> ApiResult<Task> {
    let payload = NewTask::new(title, user_id);
    let response = client()
        .post(todos_url(base()))
        .json(&payload)
        .send()
        .await?;
    decode(response).await
}

async fn patch_todo(user_id: u32, task_id: u32, patch: &TaskPatch<'_>) -> ApiResult<Task> {
    log::debug!("[API] PATCH todo {} (user {})", task_id, user_id);
    let response = client()
        .patch(todo_url(base(), task_id))
        .json(patch)
        .send()
        .await?;
    decode(response).await
}

pub async fn update_todo_title(user_id: u32, task_id: u32, title: &str) -> ApiResult<Task> {
    patch_todo(user_id, task_id, &TaskPatch { title: Some(title), ..Default::default() }).await
}

pub async fn toggle_todo(user_id: u32, task_id: u32, completed: bool) -> ApiResult<Task> {
    patch_todo(user_id, task_id, &TaskPatch { completed: Some(completed), ..Default::default() }).await
}

pub async fn delete_todo(user_id: u32, task_id: u32) -> ApiResult<()> {
    log::debug!("[API] DELETE todo {} (user {})", task_id, user_id);
    let response = client()
        .delete(todo_url(base(), task_id))
        .send()
        .await?;
    ensure_success(response)?;
    Ok(())
}
