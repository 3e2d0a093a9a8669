//! User Endpoints
//!
//! Lookup and sign-up for the user that owns the task list.

use serde::Serialize;

use crate::error::ApiResult;
use crate::models::{NewUser, User};
use super::{base, client, decode};

#[derive(Serialize)]
struct EmailQuery<'a> {
    email: &'a str,
}

pub fn users_url(base: &str) -> String {
    format!("{}/users", base)
}

/// First user registered with `email`, if any
pub async fn find_user_by_email(email: &str) -> ApiResult<Option<User>> {
    let response = client()
        .get(users_url(base()))
        .query(&EmailQuery { email })
        .send()
        .await?;
    let users: Vec<User> = decode(response).await?;
    Ok(users.into_iter().next())
}

pub async fn create_user(user: &NewUser<'_>) -> ApiResult<User> {
    let response = client()
        .post(users_url(base()))
        .json(user)
        .send()
        .await?;
    decode(response).await
}
