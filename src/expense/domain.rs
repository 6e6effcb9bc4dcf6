//! Core expense domain types.

use serde::{Deserialize, Serialize};

/// Stable identifier for an expense.
///
/// IDs are handed out by an [ExpenseStore](crate::expense::ExpenseStore) in
/// creation order and never reused, so an ID keeps referring to the same
/// expense when other expenses are inserted or deleted around it.
pub type ExpenseId = u64;

/// A recurring expense, e.g. rent due on the first of each month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    id: ExpenseId,
    /// A short description of the expense.
    pub title: String,
    /// How much the expense costs.
    ///
    /// Expected to be non-negative but not validated.
    pub price: f64,
    /// The day the expense is due, e.g. the day of the month.
    pub due: u32,
    /// Whether the expense has been paid.
    pub paid: bool,
}

impl Expense {
    /// The stable identifier of this expense.
    pub fn id(&self) -> ExpenseId {
        self.id
    }

    /// Apply a partial update to the expense in place.
    ///
    /// Fields set in `update` replace the current value. Fields left unset
    /// keep the current value, except when the current value is empty or
    /// zero, in which case the field is reset to its default (`""`, `0.0`
    /// or `0`). The only observable effect of the reset is that a price of
    /// `-0.0` becomes `0.0`.
    pub fn update(&mut self, update: ExpenseUpdate) {
        let ExpenseUpdate { title, price, due } = update;

        self.title = title.unwrap_or_else(|| title_or_default(std::mem::take(&mut self.title)));
        self.price = price.unwrap_or_else(|| price_or_default(self.price));
        self.due = due.unwrap_or_else(|| due_or_default(self.due));
    }

    /// Flip the paid flag.
    pub fn toggle_paid(&mut self) {
        self.paid = !self.paid;
    }
}

fn title_or_default(title: String) -> String {
    if title.is_empty() { String::new() } else { title }
}

fn price_or_default(price: f64) -> f64 {
    // Matches both 0.0 and -0.0.
    if price == 0.0 { 0.0 } else { price }
}

fn due_or_default(due: u32) -> u32 {
    if due == 0 { 0 } else { due }
}

/// The fields to change in [Expense::update]. `None` means "not provided".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseUpdate {
    /// The new title.
    pub title: Option<String>,
    /// The new price.
    pub price: Option<f64>,
    /// The new due day.
    pub due: Option<u32>,
}

/// The initial values for a new expense.
///
/// The default builder describes an empty expense: no title, zero price, due
/// on day zero and unpaid.
#[derive(Debug, Clone, Default, PartialEq)]
#[allow(missing_docs)]
pub struct ExpenseBuilder {
    pub title: String,
    pub price: f64,
    pub due: u32,
    pub paid: bool,
}

impl ExpenseBuilder {
    /// Set the title of the expense.
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_owned();
        self
    }

    /// Set the price of the expense.
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Set the due day of the expense.
    pub fn due(mut self, due: u32) -> Self {
        self.due = due;
        self
    }

    /// Set whether the expense has already been paid.
    pub fn paid(mut self, paid: bool) -> Self {
        self.paid = paid;
        self
    }

    /// Create the expense with the ID `id`.
    ///
    /// Only the store assigns IDs so that they stay unique.
    pub(crate) fn build(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            title: self.title,
            price: self.price,
            due: self.due,
            paid: self.paid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ExpenseBuilder, ExpenseUpdate};

    #[test]
    fn default_expense_is_empty_and_unpaid() {
        let expense = ExpenseBuilder::default().build(0);

        assert_eq!(expense.title, "");
        assert_eq!(expense.price, 0.0);
        assert_eq!(expense.due, 0);
        assert!(!expense.paid);
    }

    #[test]
    fn builder_honours_paid() {
        let expense = ExpenseBuilder::default().paid(true).build(0);

        assert!(expense.paid);
    }

    #[test]
    fn update_replaces_provided_fields() {
        let mut expense = ExpenseBuilder::default()
            .title("Rent")
            .price(400.0)
            .due(1)
            .build(0);

        expense.update(ExpenseUpdate {
            title: Some("Mortgage".to_owned()),
            price: Some(550.0),
            due: Some(15),
        });

        assert_eq!(expense.title, "Mortgage");
        assert_eq!(expense.price, 550.0);
        assert_eq!(expense.due, 15);
    }

    #[test]
    fn update_keeps_set_fields_that_are_not_provided() {
        let mut expense = ExpenseBuilder::default()
            .title("Rent")
            .price(400.0)
            .due(1)
            .build(0);

        expense.update(ExpenseUpdate {
            price: Some(50.0),
            ..Default::default()
        });

        assert_eq!(expense.title, "Rent");
        assert_eq!(expense.price, 50.0);
        assert_eq!(expense.due, 1);
    }

    #[test]
    fn empty_update_on_default_expense_keeps_defaults() {
        let mut expense = ExpenseBuilder::default().build(0);

        expense.update(ExpenseUpdate::default());

        assert_eq!(expense.title, "");
        assert_eq!(expense.price, 0.0);
        assert_eq!(expense.due, 0);
    }

    #[test]
    fn unset_negative_zero_price_resets_to_zero() {
        let mut expense = ExpenseBuilder::default().price(-0.0).build(0);

        expense.update(ExpenseUpdate::default());

        assert!(expense.price.is_sign_positive());
    }

    #[test]
    fn update_does_not_touch_paid() {
        let mut expense = ExpenseBuilder::default().paid(true).build(0);

        expense.update(ExpenseUpdate {
            title: Some("Power".to_owned()),
            ..Default::default()
        });

        assert!(expense.paid);
    }

    #[test]
    fn toggle_paid_flips_flag() {
        let mut expense = ExpenseBuilder::default().build(0);

        expense.toggle_paid();
        assert!(expense.paid);

        expense.toggle_paid();
        assert!(!expense.paid);
    }
}
