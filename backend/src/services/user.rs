//! Users and login

use bcrypt::{hash, verify, DEFAULT_COST};
use serde::Deserialize;
use shared::require_text;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::{User, UserRow};

/// User service
#[derive(Clone)]
pub struct UserService {
    db: PgPool,
}

/// Input for creating a user
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserInput {
    #[serde(rename = "nome")]
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(rename = "cargo")]
    pub role: Option<String>,
    #[validate(email)]
    pub email: String,
    #[serde(rename = "senha")]
    #[validate(length(min = 1))]
    pub password: String,
}

/// Input for updating a user; the password is only replaced when given
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserInput {
    #[serde(rename = "nome")]
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(rename = "cargo")]
    pub role: Option<String>,
    #[validate(email)]
    pub email: String,
    #[serde(rename = "senha")]
    pub password: Option<String>,
}

/// Login credentials
#[derive(Debug, Deserialize)]
pub struct LoginInput {
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
}

fn hash_password(password: &str) -> AppResult<String> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))
}

impl UserService {
    /// Create a new UserService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List users by name
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, role, email, password_hash, created_at
            FROM users
            ORDER BY name
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Create a user with a hashed password
    pub async fn create_user(&self, input: CreateUserInput) -> AppResult<User> {
        input.validate()?;
        let password_hash = hash_password(&input.password)?;

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (name, role, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, role, email, password_hash, created_at
            "#,
        )
        .bind(input.name.trim())
        .bind(require_text(input.role.as_deref()))
        .bind(input.email.trim().to_lowercase())
        .bind(&password_hash)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(user_id = %row.id, "User created");
        Ok(row.into())
    }

    /// Update a user's details
    pub async fn update_user(&self, user_id: Uuid, input: UpdateUserInput) -> AppResult<User> {
        input.validate()?;
        let password_hash = match require_text(input.password.as_deref()) {
            Some(password) => Some(hash_password(&password)?),
            None => None,
        };

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET name = $1, role = $2, email = $3,
                password_hash = COALESCE($4, password_hash)
            WHERE id = $5
            RETURNING id, name, role, email, password_hash, created_at
            "#,
        )
        .bind(input.name.trim())
        .bind(require_text(input.role.as_deref()))
        .bind(input.email.trim().to_lowercase())
        .bind(password_hash)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Usuário".to_string()))?;

        Ok(row.into())
    }

    /// Delete a user. Fails while movements or stock lots reference them.
    pub async fn delete_user(&self, user_id: Uuid) -> AppResult<()> {
        let deleted = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&self.db)
            .await?
            .rows_affected();

        if deleted == 0 {
            return Err(AppError::NotFound("Usuário".to_string()));
        }
        Ok(())
    }

    /// Verify credentials and return the user
    pub async fn login(&self, input: LoginInput) -> AppResult<User> {
        let user = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, role, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(input.email.trim().to_lowercase())
        .fetch_optional(&self.db)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

        let valid = verify(&input.password, &user.password_hash)
            .map_err(|e| AppError::Internal(format!("Password verification failed: {}", e)))?;

        if !valid {
            tracing::debug!(user_id = %user.id, "Login rejected");
            return Err(AppError::InvalidCredentials);
        }

        Ok(user.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_verifies() {
        let hashed = hash_password("viapro123").unwrap();
        assert_ne!(hashed, "viapro123");
        assert!(verify("viapro123", &hashed).unwrap());
        assert!(!verify("outra", &hashed).unwrap());
    }

    #[test]
    fn test_create_user_input_rejects_bad_email() {
        let input = CreateUserInput {
            name: "Ana".to_string(),
            role: None,
            email: "ana-at-viapro".to_string(),
            password: "x".to_string(),
        };
        assert!(input.validate().is_err());
    }
}
