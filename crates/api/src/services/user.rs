//! User operations: registration, profile updates, and login.

use hallyu_core::error::{CoreError, CoreResult};
use hallyu_core::types::EntityId;
use hallyu_db::models::user::{CreateUser, UpdateUser, User};
use hallyu_db::repositories::UserRepo;
use hallyu_db::DbPool;
use validator::ValidateEmail;

use crate::auth::jwt::{generate_access_token, JwtConfig};
use crate::auth::password::{hash_password, verify_password};
use crate::error::classify_db_error;
use crate::graphql::inputs::UpdateUserInput;
use crate::services::{require, require_if_present};

/// Minimum accepted password length.
const MIN_PASSWORD_LENGTH: usize = 8;

fn validate_email(email: &str) -> CoreResult<()> {
    if !email.validate_email() {
        return Err(CoreError::Validation(format!(
            "email {email:?} is not a valid address"
        )));
    }
    Ok(())
}

pub async fn create_user(
    pool: &DbPool,
    username: String,
    email: String,
    password: String,
    profile_image_url: Option<String>,
) -> CoreResult<User> {
    require("username", &username)?;
    validate_email(&email)?;
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }

    let username = username.trim().to_string();
    if UserRepo::find_by_username(pool, &username)
        .await
        .map_err(classify_db_error)?
        .is_some()
    {
        return Err(CoreError::Conflict(format!(
            "username {username:?} is already taken"
        )));
    }
    if UserRepo::find_by_email(pool, &email)
        .await
        .map_err(classify_db_error)?
        .is_some()
    {
        return Err(CoreError::Conflict(format!(
            "email {email:?} is already registered"
        )));
    }

    let password_hash = hash_password(&password)
        .map_err(|e| CoreError::Internal(format!("password hashing failed: {e}")))?;

    let data = CreateUser {
        username,
        email,
        password_hash,
        profile_image_url,
    };
    // The unique constraints remain the backstop against a concurrent
    // registration racing past the pre-checks.
    UserRepo::create(pool, &data).await.map_err(classify_db_error)
}

pub async fn get_user(pool: &DbPool, id: EntityId) -> CoreResult<User> {
    UserRepo::find_by_id(pool, id)
        .await
        .map_err(classify_db_error)?
        .ok_or(CoreError::NotFound { entity: "User", id })
}

pub async fn update_user(pool: &DbPool, id: EntityId, input: UpdateUserInput) -> CoreResult<User> {
    require_if_present("username", input.username.as_deref())?;
    if let Some(email) = input.email.as_deref() {
        validate_email(email)?;
    }
    let data = UpdateUser {
        username: input.username.map(|u| u.trim().to_string()),
        email: input.email,
        profile_image_url: input.profile_image_url,
    };
    UserRepo::update(pool, id, &data)
        .await
        .map_err(classify_db_error)?
        .ok_or(CoreError::NotFound { entity: "User", id })
}

/// Authenticate by email and password, returning an access token and the
/// user row. Unknown email and wrong password produce the same message.
pub async fn login(
    pool: &DbPool,
    jwt: &JwtConfig,
    email: &str,
    password: &str,
) -> CoreResult<(String, User)> {
    let user = UserRepo::find_by_email(pool, email)
        .await
        .map_err(classify_db_error)?
        .ok_or_else(|| CoreError::Unauthorized("Invalid email or password".into()))?;

    let valid = verify_password(password, &user.password_hash)
        .map_err(|e| CoreError::Internal(format!("password verification failed: {e}")))?;
    if !valid {
        return Err(CoreError::Unauthorized("Invalid email or password".into()));
    }

    let token = generate_access_token(user.id, jwt)
        .map_err(|e| CoreError::Internal(format!("token generation failed: {e}")))?;
    Ok((token, user))
}
