//! Expense list filters.
//!
//! [`ExpenseQuery`] carries the raw query-string values; [`ExpenseFilter`]
//! is the parsed predicate handed to `find().filter(..)`. Every supplied
//! clause is AND-ed; an empty query matches every expense.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sea_orm::{ColumnTrait, Condition};
use uuid::Uuid;

use crate::{EngineError, ResultEngine, expenses};

#[derive(Clone, Debug, Default)]
pub struct ExpenseQuery {
    pub user_id: Option<String>,
    /// Compared by equality against a single category, despite the name.
    pub categories: Option<String>,
    /// RFC 3339 timestamp or `YYYY-MM-DD` (start of day, UTC).
    pub from: Option<String>,
    /// RFC 3339 timestamp or `YYYY-MM-DD` (end of day, UTC).
    pub to: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Edge {
    Start,
    End,
}

/// Parsed date range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SpentRange {
    Between(DateTime<Utc>, DateTime<Utc>),
    From(DateTime<Utc>),
    To(DateTime<Utc>),
    Any,
}

#[derive(Clone, Debug)]
pub struct ExpenseFilter {
    condition: Condition,
}

impl ExpenseFilter {
    pub fn from_query(query: &ExpenseQuery) -> ResultEngine<Self> {
        let mut condition = Condition::all();

        if let Some(user_id) = present(query.user_id.as_deref()) {
            let user_id = Uuid::parse_str(user_id).map_err(|_| {
                EngineError::InvalidQuery(format!("userId '{user_id}' is not a valid id"))
            })?;
            condition = condition.add(expenses::Column::UserId.eq(user_id));
        }

        if let Some(category) = present(query.categories.as_deref()) {
            condition = condition.add(expenses::Column::Category.eq(category));
        }

        condition = match spent_range(query.from.as_deref(), query.to.as_deref())? {
            SpentRange::Between(from, to) => {
                condition.add(expenses::Column::SpentAt.between(from, to))
            }
            SpentRange::From(from) => condition.add(expenses::Column::SpentAt.gte(from)),
            SpentRange::To(to) => condition.add(expenses::Column::SpentAt.lte(to)),
            SpentRange::Any => condition,
        };

        Ok(Self { condition })
    }

    pub fn into_condition(self) -> Condition {
        self.condition
    }
}

/// Drops whitespace-only values but keeps the rest verbatim for equality.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn spent_range(from: Option<&str>, to: Option<&str>) -> ResultEngine<SpentRange> {
    let from = non_blank(from)
        .map(|raw| parse_bound(raw, Edge::Start, "from"))
        .transpose()?;
    let to = non_blank(to)
        .map(|raw| parse_bound(raw, Edge::End, "to"))
        .transpose()?;

    Ok(match (from, to) {
        (Some(from), Some(to)) => SpentRange::Between(from, to),
        (Some(from), None) => SpentRange::From(from),
        (None, Some(to)) => SpentRange::To(to),
        (None, None) => SpentRange::Any,
    })
}

fn parse_bound(raw: &str, edge: Edge, label: &str) -> ResultEngine<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| EngineError::InvalidDate(format!("{label} '{raw}' is not a date")))?;
    let time = match edge {
        Edge::Start => NaiveTime::MIN,
        // Last representable instant, so the whole `to` day is inside the range.
        Edge::End => NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999)
            .ok_or_else(|| EngineError::InvalidDate(format!("{label} '{raw}' is not a date")))?,
    };
    Ok(date.and_time(time).and_utc())
}
