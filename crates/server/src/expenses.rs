//! Expenses API endpoints

use api_types::expense::{ExpenseListQuery, ExpenseNew, ExpenseUpdate, ExpenseView};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use chrono::Utc;
use uuid::Uuid;

use crate::{ServerError, server::ServerState};

fn map_expense(expense: engine::Expense) -> ExpenseView {
    ExpenseView {
        id: expense.id,
        spent_at: expense.spent_at.fixed_offset(),
        title: expense.title,
        amount: expense.amount,
        category: expense.category,
        note: expense.note,
        user_id: expense.user_id,
    }
}

fn map_draft(payload: ExpenseNew) -> engine::ExpenseDraft {
    engine::ExpenseDraft {
        spent_at: payload.spent_at.map(|dt| dt.with_timezone(&Utc)),
        title: payload.title,
        amount: payload.amount,
        category: payload.category,
        note: payload.note,
        user_id: payload.user_id,
    }
}

fn map_patch(payload: ExpenseUpdate) -> engine::ExpensePatch {
    engine::ExpensePatch {
        spent_at: payload.spent_at.map(|dt| dt.with_timezone(&Utc)),
        title: payload.title,
        amount: payload.amount,
        category: payload.category,
        note: payload.note,
        user_id: payload.user_id,
    }
}

fn map_query(query: ExpenseListQuery) -> engine::ExpenseQuery {
    engine::ExpenseQuery {
        user_id: query.user_id,
        categories: query.categories,
        from: query.from,
        to: query.to,
    }
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<ExpenseNew>, JsonRejection>,
) -> Result<(StatusCode, Json<ExpenseView>), ServerError> {
    let Json(payload) = payload?;
    let expense = state.engine.create_expense(map_draft(payload)).await?;
    tracing::debug!("created expense {} for user {}", expense.id, expense.user_id);
    Ok((StatusCode::CREATED, Json(map_expense(expense))))
}

pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<ExpenseListQuery>, QueryRejection>,
) -> Result<Json<Vec<ExpenseView>>, ServerError> {
    let Query(query) = query?;
    let expenses = state
        .engine
        .list_expenses(&map_query(query))
        .await?
        .into_iter()
        .map(map_expense)
        .collect();
    Ok(Json(expenses))
}

pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<ExpenseView>, ServerError> {
    let Path(id) = id?;
    let expense = state.engine.expense(id).await?;
    Ok(Json(map_expense(expense)))
}

pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<ExpenseUpdate>, JsonRejection>,
) -> Result<Json<ExpenseView>, ServerError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let expense = state.engine.update_expense(id, map_patch(payload)).await?;
    Ok(Json(map_expense(expense)))
}

pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ServerError> {
    let Path(id) = id?;
    state.engine.delete_expense(id).await?;
    tracing::debug!("deleted expense {id}");
    Ok(StatusCode::NO_CONTENT)
}
