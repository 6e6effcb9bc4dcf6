//! The per-session container for expenses and income.

use crate::{
    Error,
    expense::{Expense, ExpenseBuilder, ExpenseId, ExpenseUpdate},
};

/// A new value for a single field of an expense.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseField {
    /// See [Expense::title].
    Title(String),
    /// See [Expense::price].
    Price(f64),
    /// See [Expense::due].
    Due(u32),
}

impl From<&str> for ExpenseField {
    fn from(title: &str) -> Self {
        Self::Title(title.to_owned())
    }
}

impl From<String> for ExpenseField {
    fn from(title: String) -> Self {
        Self::Title(title)
    }
}

impl From<f64> for ExpenseField {
    fn from(price: f64) -> Self {
        Self::Price(price)
    }
}

impl From<u32> for ExpenseField {
    fn from(due: u32) -> Self {
        Self::Due(due)
    }
}

impl From<ExpenseField> for ExpenseUpdate {
    fn from(field: ExpenseField) -> Self {
        match field {
            ExpenseField::Title(title) => ExpenseUpdate {
                title: Some(title),
                ..Default::default()
            },
            ExpenseField::Price(price) => ExpenseUpdate {
                price: Some(price),
                ..Default::default()
            },
            ExpenseField::Due(due) => ExpenseUpdate {
                due: Some(due),
                ..Default::default()
            },
        }
    }
}

/// An ordered list of expenses and the income they are paid from.
///
/// The order of the expenses is the order they were added in, which is also
/// the order they are displayed in. The derived values [ExpenseStore::balance]
/// and [ExpenseStore::last_index] are computed from the current expenses each
/// time they are read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
    income: f64,
    next_id: ExpenseId,
    revision: u64,
}

impl ExpenseStore {
    /// Create a store with no expenses and zero income.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the store for a new session: one empty expense ready for editing.
    pub fn with_default_expense() -> Self {
        let mut store = Self::new();
        store.add_expense();
        store
    }

    /// Append a new expense built from `builder` and return its ID.
    pub fn insert(&mut self, builder: ExpenseBuilder) -> ExpenseId {
        let id = self.next_id;
        self.next_id += 1;
        self.expenses.push(builder.build(id));
        self.revision += 1;

        id
    }

    /// Append a new empty expense and return its ID.
    pub fn add_expense(&mut self) -> ExpenseId {
        self.insert(ExpenseBuilder::default())
    }

    /// Replace the income.
    pub fn update_income(&mut self, income: f64) {
        self.income = income;
        self.revision += 1;
    }

    /// Set one field of the expense at `index`.
    ///
    /// The other two fields are left unset, see [Expense::update] for how
    /// unset fields are treated.
    ///
    /// # Errors
    ///
    /// Returns [Error::IndexOutOfRange] if there is no expense at `index`.
    /// The store is not modified in that case.
    pub fn update_expense(
        &mut self,
        index: usize,
        value: impl Into<ExpenseField>,
    ) -> Result<(), Error> {
        let expense = self.get_mut(index)?;
        expense.update(value.into().into());
        self.revision += 1;

        Ok(())
    }

    /// Remove and return the expense at `index`.
    ///
    /// Expenses after `index` move up by one position.
    ///
    /// # Errors
    ///
    /// Returns [Error::IndexOutOfRange] if there is no expense at `index`.
    pub fn delete_expense(&mut self, index: usize) -> Result<Expense, Error> {
        self.check_index(index)?;
        let expense = self.expenses.remove(index);
        self.revision += 1;

        Ok(expense)
    }

    /// Flip the paid flag of the expense at `index`.
    ///
    /// # Errors
    ///
    /// Returns [Error::IndexOutOfRange] if there is no expense at `index`.
    pub fn toggle_paid(&mut self, index: usize) -> Result<(), Error> {
        self.get_mut(index)?.toggle_paid();
        self.revision += 1;

        Ok(())
    }

    /// The index of the last expense, or zero if there are no expenses.
    pub fn last_index(&self) -> usize {
        self.expenses.len().saturating_sub(1)
    }

    /// The total price of all expenses.
    pub fn balance(&self) -> f64 {
        self.expenses
            .iter()
            .fold(0.0, |total, expense| total + expense.price)
    }

    /// The income left over after paying all expenses.
    pub fn remaining(&self) -> f64 {
        self.income - self.balance()
    }

    /// The income set by the user, zero until it is first set.
    pub fn income(&self) -> f64 {
        self.income
    }

    /// The expenses in display order.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// The number of expenses.
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether there are no expenses.
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// The expense at `index`, if there is one.
    pub fn get(&self, index: usize) -> Option<&Expense> {
        self.expenses.get(index)
    }

    /// The current position of the expense with the ID `id`, if it exists.
    pub fn position(&self, id: ExpenseId) -> Option<usize> {
        self.expenses.iter().position(|expense| expense.id() == id)
    }

    /// A counter that increases with every change to the store.
    ///
    /// Two reads that return the same revision saw the same state.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn check_index(&self, index: usize) -> Result<(), Error> {
        if index < self.expenses.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.expenses.len(),
            })
        }
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut Expense, Error> {
        self.check_index(index)?;

        Ok(&mut self.expenses[index])
    }
}
