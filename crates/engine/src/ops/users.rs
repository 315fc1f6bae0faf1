use sea_orm::{ActiveValue, prelude::*};
use uuid::Uuid;

use crate::{EngineError, ResultEngine, User, UserDraft, users};

use super::{Engine, normalize_optional_text, normalize_required_name};

impl Engine {
    pub async fn create_user(&self, draft: UserDraft) -> ResultEngine<User> {
        let active = users::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(normalize_required_name(&draft.name, "user")?),
            email: ActiveValue::Set(normalize_optional_text(draft.email.as_deref())),
        };
        Ok(active.insert(&self.database).await?.into())
    }

    pub async fn users(&self) -> ResultEngine<Vec<User>> {
        Ok(users::Entity::find()
            .all(&self.database)
            .await?
            .into_iter()
            .map(User::from)
            .collect())
    }

    pub async fn user(&self, id: Uuid) -> ResultEngine<User> {
        users::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .map(User::from)
            .ok_or_else(|| EngineError::KeyNotFound("User".to_string()))
    }

    /// Foreign-key check used before writing an expense.
    pub(super) async fn require_user(&self, id: Uuid) -> ResultEngine<()> {
        let exists = users::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .is_some();
        if !exists {
            return Err(EngineError::ReferenceNotFound(format!("user {id}")));
        }
        Ok(())
    }
}
