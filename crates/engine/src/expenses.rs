//! The module contains the `Expense` type, a single spending record owned by
//! a user, and the payload types used to create and update it.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, ResultEngine};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub spent_at: DateTime<Utc>,
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub note: Option<String>,
    pub user_id: Uuid,
}

impl From<Model> for Expense {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            spent_at: model.spent_at,
            title: model.title,
            amount: model.amount,
            category: model.category,
            note: model.note,
            user_id: model.user_id,
        }
    }
}

/// Unvalidated create payload.
///
/// Fields are optional so a missing one can be reported by its wire name
/// through [`EngineError::MissingField`].
#[derive(Clone, Debug, Default)]
pub struct ExpenseDraft {
    pub spent_at: Option<DateTime<Utc>>,
    pub title: Option<String>,
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub note: Option<String>,
    pub user_id: Option<Uuid>,
}

/// A draft that carries every required field.
#[derive(Clone, Debug)]
pub(crate) struct NewExpense {
    pub(crate) spent_at: DateTime<Utc>,
    pub(crate) title: String,
    pub(crate) amount: f64,
    pub(crate) category: String,
    pub(crate) note: Option<String>,
    pub(crate) user_id: Uuid,
}

fn required<T>(value: Option<T>, field: &str) -> ResultEngine<T> {
    value.ok_or_else(|| EngineError::MissingField(field.to_string()))
}

impl ExpenseDraft {
    /// Checks presence of the required fields, in wire order.
    pub(crate) fn validate(self) -> ResultEngine<NewExpense> {
        Ok(NewExpense {
            spent_at: required(self.spent_at, "spentAt")?,
            title: required(self.title, "title")?,
            amount: required(self.amount, "amount")?,
            category: required(self.category, "category")?,
            note: self.note,
            user_id: required(self.user_id, "userId")?,
        })
    }
}

/// Partial update. `None` means "keep the stored value".
#[derive(Clone, Debug, Default)]
pub struct ExpensePatch {
    pub spent_at: Option<DateTime<Utc>>,
    pub title: Option<String>,
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub note: Option<String>,
    pub user_id: Option<Uuid>,
}

impl ExpensePatch {
    pub fn is_empty(&self) -> bool {
        self.spent_at.is_none()
            && self.title.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.note.is_none()
            && self.user_id.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub spent_at: DateTime<Utc>,
    pub title: String,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    pub category: String,
    pub note: Option<String>,
    pub user_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
