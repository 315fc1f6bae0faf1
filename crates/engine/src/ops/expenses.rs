use sea_orm::{ActiveValue, QueryFilter, prelude::*};
use uuid::Uuid;

use crate::{
    EngineError, Expense, ExpenseDraft, ExpenseFilter, ExpensePatch, ExpenseQuery, ResultEngine,
    expenses,
};

use super::Engine;

fn not_found() -> EngineError {
    EngineError::KeyNotFound("Expense".to_string())
}

impl Engine {
    /// Validates the draft, checks that the owner exists, then inserts.
    ///
    /// Missing fields are reported before the owner lookup, so an incomplete
    /// payload never touches the store.
    pub async fn create_expense(&self, draft: ExpenseDraft) -> ResultEngine<Expense> {
        let new = draft.validate()?;
        self.require_user(new.user_id).await?;

        let active = expenses::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            spent_at: ActiveValue::Set(new.spent_at),
            title: ActiveValue::Set(new.title),
            amount: ActiveValue::Set(new.amount),
            category: ActiveValue::Set(new.category),
            note: ActiveValue::Set(new.note),
            user_id: ActiveValue::Set(new.user_id),
        };
        Ok(active.insert(&self.database).await?.into())
    }

    /// Lists expenses matching `query`, in storage order.
    pub async fn list_expenses(&self, query: &ExpenseQuery) -> ResultEngine<Vec<Expense>> {
        let filter = ExpenseFilter::from_query(query)?;
        Ok(expenses::Entity::find()
            .filter(filter.into_condition())
            .all(&self.database)
            .await?
            .into_iter()
            .map(Expense::from)
            .collect())
    }

    pub async fn expense(&self, id: Uuid) -> ResultEngine<Expense> {
        self.find_expense(id).await.map(Expense::from)
    }

    /// Merges the supplied fields over the stored expense.
    pub async fn update_expense(&self, id: Uuid, patch: ExpensePatch) -> ResultEngine<Expense> {
        let model = self.find_expense(id).await?;
        if patch.is_empty() {
            return Ok(model.into());
        }
        if let Some(user_id) = patch.user_id {
            self.require_user(user_id).await?;
        }

        let mut active: expenses::ActiveModel = model.into();
        if let Some(spent_at) = patch.spent_at {
            active.spent_at = ActiveValue::Set(spent_at);
        }
        if let Some(title) = patch.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(amount) = patch.amount {
            active.amount = ActiveValue::Set(amount);
        }
        if let Some(category) = patch.category {
            active.category = ActiveValue::Set(category);
        }
        if let Some(note) = patch.note {
            active.note = ActiveValue::Set(Some(note));
        }
        if let Some(user_id) = patch.user_id {
            active.user_id = ActiveValue::Set(user_id);
        }

        Ok(active.update(&self.database).await?.into())
    }

    pub async fn delete_expense(&self, id: Uuid) -> ResultEngine<()> {
        let res = expenses::Entity::delete_by_id(id)
            .exec(&self.database)
            .await?;
        if res.rows_affected == 0 {
            return Err(not_found());
        }
        Ok(())
    }

    async fn find_expense(&self, id: Uuid) -> ResultEngine<expenses::Model> {
        expenses::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or_else(not_found)
    }
}
