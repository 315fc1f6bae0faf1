use sea_orm::{ActiveValue, prelude::*};
use uuid::Uuid;

use crate::{Category, EngineError, ResultEngine, categories};

use super::{Engine, normalize_required_name};

fn not_found() -> EngineError {
    EngineError::KeyNotFound("Category".to_string())
}

impl Engine {
    pub async fn create_category(&self, name: &str) -> ResultEngine<Category> {
        let active = categories::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(normalize_required_name(name, "category")?),
        };
        Ok(active.insert(&self.database).await?.into())
    }

    pub async fn categories(&self) -> ResultEngine<Vec<Category>> {
        Ok(categories::Entity::find()
            .all(&self.database)
            .await?
            .into_iter()
            .map(Category::from)
            .collect())
    }

    pub async fn category(&self, id: Uuid) -> ResultEngine<Category> {
        categories::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .map(Category::from)
            .ok_or_else(not_found)
    }

    /// Renames a category. `None` leaves it untouched.
    pub async fn update_category(&self, id: Uuid, name: Option<&str>) -> ResultEngine<Category> {
        let model = categories::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or_else(not_found)?;

        let Some(name) = name else {
            return Ok(model.into());
        };

        let mut active: categories::ActiveModel = model.into();
        active.name = ActiveValue::Set(normalize_required_name(name, "category")?);
        Ok(active.update(&self.database).await?.into())
    }

    pub async fn delete_category(&self, id: Uuid) -> ResultEngine<()> {
        let res = categories::Entity::delete_by_id(id)
            .exec(&self.database)
            .await?;
        if res.rows_affected == 0 {
            return Err(not_found());
        }
        Ok(())
    }
}
