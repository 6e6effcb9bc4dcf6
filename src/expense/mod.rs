//! Expense tracking: the per-session store and how it is shown to and edited by the user.

mod binding;
mod domain;
mod endpoints;
mod page;
mod store;
mod view;

pub use binding::{ExpenseEvent, ExpenseRow, ExpensesView, dispatch};
pub use domain::{Expense, ExpenseBuilder, ExpenseId, ExpenseUpdate};
pub use endpoints::{
    add_expense_endpoint, delete_expense_endpoint, toggle_paid_endpoint, update_due_endpoint,
    update_income_endpoint, update_price_endpoint, update_title_endpoint,
};
pub use page::{get_expenses_json, get_expenses_page};
pub use store::{ExpenseField, ExpenseStore};
