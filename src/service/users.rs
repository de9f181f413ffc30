use chrono::Utc;

use super::{Context, Redact, Resource, not_empty, page_bounds};
use crate::auth::hash_password;
use crate::error::{Error, Result};
use crate::types::*;
use crate::upload::UploadedFile;

#[derive(Clone)]
pub struct UserService {
    ctx: Context,
}

impl UserService {
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    pub fn list(&self, page: i64, size: i64) -> Result<Vec<UserView>> {
        let (offset, limit) = page_bounds(page, size)?;
        let users = self.ctx.store.list_users(offset, limit)?;
        Ok(users.iter().map(Redact::redact).collect())
    }

    pub async fn get_one(&self, id: i64) -> Result<UserView> {
        self.ctx.lookup.get::<User>(id).await
    }

    /// Provisions an account. The password is stored only as an Argon2 hash.
    pub fn create(&self, input: NewUser) -> Result<UserView> {
        not_empty("username", &input.username)?;
        not_empty("email", &input.email)?;
        not_empty("password", &input.password)?;

        let password_hash = hash_password(&input.password)?;
        let user = self.ctx.store.create_user(
            &input.username,
            &input.email,
            &password_hash,
            input.role,
        )?;

        tracing::info!(kind = User::KIND, id = user.id, role = %user.role, "Created");
        Ok(user.redact())
    }

    pub async fn update(
        &self,
        id: i64,
        input: UserUpdate,
        file: Option<UploadedFile>,
        principal: &Principal,
    ) -> Result<UserView> {
        self.ctx.access.require_self_not_admin(id, principal).await?;
        if let Some(username) = &input.username {
            not_empty("username", username)?;
        }
        if let Some(email) = &input.email {
            not_empty("email", email)?;
        }
        if let Some(password) = &input.password {
            not_empty("password", password)?;
        }

        let photo_name = self.ctx.store_upload(file.as_ref()).await?;

        let mut user = self
            .ctx
            .store
            .get_user(id)?
            .ok_or(Error::NotFound(User::NAME))?;
        if let Some(username) = input.username {
            user.username = username;
        }
        if let Some(email) = input.email {
            user.email = email;
        }
        if let Some(password) = input.password {
            user.password_hash = hash_password(&password)?;
        }
        user.photo_name = photo_name;
        user.updated_at = Utc::now();

        self.ctx.store.update_user(&user)?;

        tracing::info!(kind = User::KIND, id, user_id = principal.id, "Updated");
        Ok(user.redact())
    }

    pub async fn delete(&self, id: i64, principal: &Principal) -> Result<()> {
        self.ctx.access.require_self_not_admin(id, principal).await?;

        if !self.ctx.store.delete_user(id)? {
            return Err(Error::NotFound(User::NAME));
        }

        tracing::info!(kind = User::KIND, id, user_id = principal.id, "Deleted");
        Ok(())
    }
}
