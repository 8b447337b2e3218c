use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::user;

/// Input for a new record. The caller supplies already-hashed credential
/// material; this layer never sees a plaintext password.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub hashed_password: String,
}

pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Inserts a user. The storage assigns the id; a duplicate email is
    /// rejected by the unique constraint and surfaces as an error here.
    pub async fn create(&self, new_user: NewUser) -> Result<user::Model> {
        let active = user::ActiveModel {
            name: Set(new_user.name),
            email: Set(new_user.email),
            hashed_password: Set(new_user.hashed_password),
            is_active: Set(true),
            ..Default::default()
        };

        active
            .insert(&self.conn)
            .await
            .context("Failed to insert user")
    }

    pub async fn get(&self, id: i32) -> Result<Option<user::Model>> {
        user::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query user by id")
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<user::Model>> {
        user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.conn)
            .await
            .context("Failed to query user by email")
    }

    pub async fn list(&self) -> Result<Vec<user::Model>> {
        user::Entity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list users")
    }

    pub async fn set_active(&self, id: i32, is_active: bool) -> Result<bool> {
        let Some(existing) = self.get(id).await? else {
            return Ok(false);
        };

        let mut active: user::ActiveModel = existing.into();
        active.is_active = Set(is_active);
        active
            .update(&self.conn)
            .await
            .context("Failed to update user active flag")?;

        Ok(true)
    }
}
