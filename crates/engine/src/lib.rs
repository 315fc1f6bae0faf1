//! Expense tracking engine.
//!
//! The crate owns the sea-orm entities (`users`, `expenses`, `categories`),
//! the list filter for expenses and the [`Engine`] that validates payloads
//! before they reach the store.

pub use categories::Category;
pub use error::EngineError;
pub use expenses::{Expense, ExpenseDraft, ExpensePatch};
pub use filter::{ExpenseFilter, ExpenseQuery};
pub use ops::{Engine, EngineBuilder};
pub use users::{User, UserDraft};

mod categories;
mod error;
mod expenses;
mod filter;
mod ops;
mod users;

type ResultEngine<T> = Result<T, EngineError>;
