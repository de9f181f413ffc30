use super::lookup::ReadThrough;
use super::resource::{Owned, Resource};
use crate::error::{Error, Result};
use crate::types::{Principal, User};

/// Authorization checks run before every update and delete.
#[derive(Clone)]
pub struct Authorizer {
    lookup: ReadThrough,
}

impl Authorizer {
    pub fn new(lookup: ReadThrough) -> Self {
        Self { lookup }
    }

    /// Allows the record's owner or any admin. Returns the resolved record.
    pub async fn require_owner_or_admin<R: Owned>(
        &self,
        id: i64,
        principal: &Principal,
    ) -> Result<R> {
        let record = self.lookup.lookup::<R>(id).await?;
        let actor = self.actor(principal)?;

        if record.owner_id() == actor.id || actor.role.is_admin() {
            return Ok(record);
        }

        tracing::warn!(kind = R::KIND, id, user_id = actor.id, "Ownership check failed");
        Err(Error::Unauthorized)
    }

    /// Allows a non-admin acting on their own account. Admins are refused
    /// even for their own record.
    pub async fn require_self_not_admin(&self, target_id: i64, principal: &Principal) -> Result<User> {
        let target = self.lookup.lookup::<User>(target_id).await?;
        let actor = self.actor(principal)?;

        if !actor.role.is_admin() && actor.id == target.id {
            return Ok(target);
        }

        tracing::warn!(
            kind = User::KIND,
            id = target_id,
            user_id = actor.id,
            "User check failed"
        );
        Err(Error::Unauthorized)
    }

    /// Resolves the persisted account behind a principal; the role stored
    /// there is authoritative over the one carried in the token.
    fn actor(&self, principal: &Principal) -> Result<User> {
        self.lookup
            .store()
            .get_user(principal.id)?
            .ok_or(Error::NotFound(User::NAME))
    }
}
