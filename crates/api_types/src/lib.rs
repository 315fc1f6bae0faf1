use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod user {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct UserNew {
        pub name: String,
        pub email: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserView {
        pub id: Uuid,
        pub name: String,
        pub email: Option<String>,
    }
}

pub mod category {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct CategoryNew {
        pub name: String,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct CategoryUpdate {
        pub name: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryView {
        pub id: Uuid,
        pub name: String,
    }
}

pub mod expense {
    use super::*;

    /// Body of `POST /expenses`.
    ///
    /// Every field is optional on the wire so the engine can report exactly
    /// which required one is missing instead of a generic decode failure.
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase", deny_unknown_fields)]
    pub struct ExpenseNew {
        pub spent_at: Option<DateTime<FixedOffset>>,
        pub title: Option<String>,
        pub amount: Option<f64>,
        pub category: Option<String>,
        pub note: Option<String>,
        pub user_id: Option<Uuid>,
    }

    /// Body of `PATCH /expenses/{id}`. Omitted fields keep their value.
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase", deny_unknown_fields)]
    pub struct ExpenseUpdate {
        pub spent_at: Option<DateTime<FixedOffset>>,
        pub title: Option<String>,
        pub amount: Option<f64>,
        pub category: Option<String>,
        pub note: Option<String>,
        pub user_id: Option<Uuid>,
    }

    /// Query string of `GET /expenses`.
    ///
    /// Values stay raw strings; parsing belongs to the engine so malformed
    /// dates surface with the same error body as every other client error.
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpenseListQuery {
        pub user_id: Option<String>,
        /// Single category name, matched by equality.
        pub categories: Option<String>,
        pub from: Option<String>,
        pub to: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpenseView {
        pub id: Uuid,
        pub spent_at: DateTime<FixedOffset>,
        pub title: String,
        pub amount: f64,
        pub category: String,
        pub note: Option<String>,
        pub user_id: Uuid,
    }
}
