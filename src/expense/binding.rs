//! Connects the expense store to the UI.
//!
//! [ExpensesView] is the read side: a snapshot of everything the UI displays.
//! [ExpenseEvent] and [dispatch] are the write side: each user interaction is
//! turned into an event and applied to the store, and the new snapshot is
//! handed back so the caller can re-render.
//!
//! Row events identify their expense by [ExpenseId] rather than by position.
//! The position is looked up when the event is dispatched, so an event for a
//! row rendered before another row was deleted still edits the right expense.

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    expense::{ExpenseField, ExpenseId, ExpenseStore},
};

/// A user interaction that changes the expense store.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseEvent {
    /// The "Add expense" button was clicked.
    ExpenseAdded,
    /// The income input was changed.
    IncomeChanged(f64),
    /// The title input of an expense was changed.
    #[allow(missing_docs)]
    TitleChanged { id: ExpenseId, title: String },
    /// The price input of an expense was changed.
    #[allow(missing_docs)]
    PriceChanged { id: ExpenseId, price: f64 },
    /// The due day input of an expense was changed.
    #[allow(missing_docs)]
    DueChanged { id: ExpenseId, due: u32 },
    /// The paid checkbox of an expense was clicked.
    #[allow(missing_docs)]
    PaidToggled { id: ExpenseId },
    /// The delete button of an expense was clicked.
    #[allow(missing_docs)]
    ExpenseDeleted { id: ExpenseId },
}

/// One row of the expense table.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRow {
    /// The position of the expense at the time the snapshot was taken.
    pub index: usize,
    pub id: ExpenseId,
    pub title: String,
    pub price: f64,
    pub due: u32,
    pub paid: bool,
}

/// A snapshot of the expense store for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpensesView {
    /// The expenses in display order.
    pub rows: Vec<ExpenseRow>,
    /// See [ExpenseStore::income].
    pub income: f64,
    /// See [ExpenseStore::balance].
    pub balance: f64,
    /// See [ExpenseStore::remaining].
    pub remaining: f64,
    /// See [ExpenseStore::last_index].
    pub last_index: usize,
    /// The store revision the snapshot was taken at.
    pub revision: u64,
}

impl ExpensesView {
    /// Take a snapshot of `store`.
    pub fn from_store(store: &ExpenseStore) -> Self {
        let rows = store
            .expenses()
            .iter()
            .enumerate()
            .map(|(index, expense)| ExpenseRow {
                index,
                id: expense.id(),
                title: expense.title.clone(),
                price: expense.price,
                due: expense.due,
                paid: expense.paid,
            })
            .collect();

        Self {
            rows,
            income: store.income(),
            balance: store.balance(),
            remaining: store.remaining(),
            last_index: store.last_index(),
            revision: store.revision(),
        }
    }
}

/// Apply `event` to `store` and return the snapshot to re-render with.
///
/// # Errors
///
/// Returns [Error::ExpenseNotFound] if the event refers to an expense that is
/// no longer in the store. Errors from the store are passed through as is.
/// The store is not modified when an error is returned.
pub fn dispatch(store: &mut ExpenseStore, event: ExpenseEvent) -> Result<ExpensesView, Error> {
    tracing::debug!("Dispatching {event:?} at revision {}", store.revision());

    match event {
        ExpenseEvent::ExpenseAdded => {
            store.add_expense();
        }
        ExpenseEvent::IncomeChanged(income) => store.update_income(income),
        ExpenseEvent::TitleChanged { id, title } => {
            let index = resolve(store, id)?;
            store.update_expense(index, ExpenseField::Title(title))?;
        }
        ExpenseEvent::PriceChanged { id, price } => {
            let index = resolve(store, id)?;
            store.update_expense(index, ExpenseField::Price(price))?;
        }
        ExpenseEvent::DueChanged { id, due } => {
            let index = resolve(store, id)?;
            store.update_expense(index, ExpenseField::Due(due))?;
        }
        ExpenseEvent::PaidToggled { id } => {
            let index = resolve(store, id)?;
            store.toggle_paid(index)?;
        }
        ExpenseEvent::ExpenseDeleted { id } => {
            let index = resolve(store, id)?;
            store.delete_expense(index)?;
        }
    }

    Ok(ExpensesView::from_store(store))
}

fn resolve(store: &ExpenseStore, id: ExpenseId) -> Result<usize, Error> {
    store.position(id).ok_or_else(|| {
        tracing::warn!("Received an event for expense {id}, which is not in the store");
        Error::ExpenseNotFound(id)
    })
}
