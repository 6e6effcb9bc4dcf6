//! HTML for the expenses page.

use maud::{Markup, html};

use crate::{
    endpoints::{self, format_endpoint},
    expense::{ExpenseRow, ExpensesView},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, FORM_CHECKBOX_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, color_mode_button, format_currency,
    },
};

/// The ID of the element that every expense change re-renders.
pub(crate) const EXPENSES_SECTION_ID: &str = "expenses";

pub(crate) fn expenses_page_view(view: &ExpensesView) -> Markup {
    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="w-full max-w-5xl space-y-6"
            {
                header class="flex justify-between flex-wrap items-end gap-4"
                {
                    div
                    {
                        h1 class="text-3xl font-bold" { "Expenses Tracker" }
                        p class="text-gray-500 dark:text-gray-400"
                        {
                            "Manage income, fixed expenses and due dates with ease"
                        }
                    }

                    div class="flex items-center gap-4"
                    {
                        button
                            hx-delete=(endpoints::SESSION)
                            hx-confirm="Are you sure you want to clear your income and all expenses?"
                            hx-target-error="#alert-container"
                            class=(LINK_STYLE)
                        {
                            "Start over"
                        }

                        (color_mode_button())
                    }
                }

                (income_form(view.income))

                (expenses_section(view))
            }
        }
    };

    base("Expenses", &content)
}

fn income_form(income: f64) -> Markup {
    let section_target = format!("#{EXPENSES_SECTION_ID}");

    // Income lives outside of the re-rendered section so that editing it does
    // not replace the input the user is typing in.
    html! {
        form
            hx-put=(endpoints::INCOME)
            hx-trigger="change"
            hx-target=(section_target)
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="max-w-xs"
        {
            label for="income" class=(FORM_LABEL_STYLE) { "Income" }

            input
                id="income"
                type="number"
                name="value"
                step="0.01"
                value=(income)
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}

/// The part of the page that is replaced after every change to the expenses.
pub(crate) fn expenses_section(view: &ExpensesView) -> Markup {
    html! {
        section
            id=(EXPENSES_SECTION_ID)
            hx-target="this"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            data-revision=(view.revision)
            class="space-y-4"
        {
            (summary_view(view))

            div class="overflow-x-auto dark:bg-gray-800"
            {
                table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Title" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Price" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Due" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Paid" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                        }
                    }

                    tbody
                    {
                        @for row in &view.rows {
                            (expense_row_view(row))
                        }

                        @if view.rows.is_empty() {
                            tr
                            {
                                td
                                    colspan="5"
                                    class="px-6 py-4 text-center text-gray-500 dark:text-gray-400"
                                {
                                    "No expenses yet."
                                }
                            }
                        }
                    }
                }
            }

            button
                type="button"
                hx-post=(endpoints::EXPENSES_API)
                class=(BUTTON_PRIMARY_STYLE)
            {
                "Add expense"
            }
        }
    }
}

fn summary_view(view: &ExpensesView) -> Markup {
    let remaining_style = if view.remaining < 0.0 {
        "text-red-600 dark:text-red-400"
    } else {
        "text-gray-900 dark:text-white"
    };

    html! {
        dl class="grid grid-cols-3 gap-4"
        {
            div
            {
                dt class="text-sm text-gray-500 dark:text-gray-400" { "Income" }
                dd data-summary="income" class="text-lg font-semibold"
                {
                    (format_currency(view.income))
                }
            }

            div
            {
                dt class="text-sm text-gray-500 dark:text-gray-400" { "Balance" }
                dd data-summary="balance" class="text-lg font-semibold"
                {
                    (format_currency(view.balance))
                }
            }

            div
            {
                dt class="text-sm text-gray-500 dark:text-gray-400" { "Remaining" }
                dd data-summary="remaining" class={ "text-lg font-semibold " (remaining_style) }
                {
                    (format_currency(view.remaining))
                }
            }
        }
    }
}

/// Each control is bound to the row's expense ID, not its position.
fn expense_row_view(row: &ExpenseRow) -> Markup {
    let title_url = format_endpoint(endpoints::EXPENSE_TITLE, row.id);
    let price_url = format_endpoint(endpoints::EXPENSE_PRICE, row.id);
    let due_url = format_endpoint(endpoints::EXPENSE_DUE, row.id);
    let paid_url = format_endpoint(endpoints::EXPENSE_PAID, row.id);
    let delete_url = format_endpoint(endpoints::EXPENSE, row.id);
    let label = if row.title.is_empty() {
        format!("expense {}", row.index + 1)
    } else {
        format!("'{}'", row.title)
    };

    html! {
        tr class=(TABLE_ROW_STYLE) data-expense-id=(row.id) data-index=(row.index)
        {
            td class=(TABLE_CELL_STYLE)
            {
                input
                    type="text"
                    name="value"
                    aria-label="Title"
                    placeholder="Title"
                    value=(row.title)
                    hx-put=(title_url)
                    hx-trigger="change"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            td class=(TABLE_CELL_STYLE)
            {
                input
                    type="number"
                    name="value"
                    aria-label="Price"
                    step="0.01"
                    min="0"
                    value=(row.price)
                    hx-put=(price_url)
                    hx-trigger="change"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            td class=(TABLE_CELL_STYLE)
            {
                input
                    type="number"
                    name="value"
                    aria-label="Due"
                    step="1"
                    min="0"
                    value=(row.due)
                    hx-put=(due_url)
                    hx-trigger="change"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            td class=(TABLE_CELL_STYLE)
            {
                input
                    type="checkbox"
                    aria-label="Paid"
                    checked[row.paid]
                    hx-post=(paid_url)
                    hx-trigger="click"
                    class=(FORM_CHECKBOX_STYLE);
            }

            td class=(TABLE_CELL_STYLE)
            {
                button
                    type="button"
                    hx-delete=(delete_url)
                    hx-confirm={ "Are you sure you want to delete " (label) "?" }
                    class=(BUTTON_DELETE_STYLE)
                {
                    "Delete"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{ElementRef, Html, Selector};

    use crate::{
        endpoints::{self, format_endpoint},
        expense::{
            ExpenseBuilder, ExpenseStore, ExpensesView,
            view::{expenses_page_view, expenses_section},
        },
        html::COLOR_MODE_BUTTON_ID,
        test_utils::{
            assert_hx_endpoint, assert_valid_html, must_get_expense_row, must_get_input,
            summary_text,
        },
    };

    fn sample_store() -> ExpenseStore {
        let mut store = ExpenseStore::new();
        store.insert(
            ExpenseBuilder::default()
                .title("Rent")
                .price(400.0)
                .due(1)
                .paid(true),
        );
        store.insert(ExpenseBuilder::default().title("Power").price(80.5).due(14));
        store.update_income(900.0);
        store
    }

    #[test]
    fn page_is_valid_html_with_income_form() {
        let view = ExpensesView::from_store(&sample_store());

        let html = Html::parse_document(&expenses_page_view(&view).into_string());

        assert_valid_html(&html);
        let form = html
            .select(&Selector::parse("form").unwrap())
            .next()
            .expect("No income form found");
        assert_hx_endpoint(&form, endpoints::INCOME, "hx-put");
        let income = must_get_input(&form, "input[name='value']");
        assert_eq!(income.value().attr("value"), Some("900"));
    }

    #[test]
    fn page_has_color_mode_toggle() {
        let view = ExpensesView::from_store(&sample_store());

        let html = Html::parse_document(&expenses_page_view(&view).into_string());

        let button = html
            .select(&Selector::parse(&format!("button#{COLOR_MODE_BUTTON_ID}")).unwrap())
            .next()
            .expect("No color mode button found");
        assert_eq!(button.value().attr("onclick"), Some("toggleColorMode()"));
        let scripts = html
            .select(&Selector::parse("head script").unwrap())
            .flat_map(|script| script.text())
            .collect::<String>();
        assert!(scripts.contains("function toggleColorMode()"));
        assert!(scripts.contains("darkMode: 'class'"));
    }

    #[test]
    fn rows_bind_controls_to_expense_id() {
        let store = sample_store();
        let view = ExpensesView::from_store(&store);
        let id = store.expenses()[1].id();

        let html = Html::parse_fragment(&expenses_section(&view).into_string());

        let row = must_get_expense_row(&html, id);
        assert_eq!(row.value().attr("data-index"), Some("1"));
        let title = must_get_input(&row, "input[type='text']");
        assert_eq!(title.value().attr("value"), Some("Power"));
        assert_hx_endpoint(
            &title,
            &format_endpoint(endpoints::EXPENSE_TITLE, id),
            "hx-put",
        );
        let checkbox = must_get_input(&row, "input[type='checkbox']");
        assert_hx_endpoint(
            &checkbox,
            &format_endpoint(endpoints::EXPENSE_PAID, id),
            "hx-post",
        );
        let delete_button = row
            .select(&Selector::parse("button").unwrap())
            .next()
            .expect("No delete button found");
        assert_hx_endpoint(
            &delete_button,
            &format_endpoint(endpoints::EXPENSE, id),
            "hx-delete",
        );
    }

    #[test]
    fn paid_rows_are_checked() {
        let store = sample_store();
        let view = ExpensesView::from_store(&store);

        let html = Html::parse_fragment(&expenses_section(&view).into_string());

        let paid_row = must_get_expense_row(&html, store.expenses()[0].id());
        let unpaid_row = must_get_expense_row(&html, store.expenses()[1].id());
        let checked = |row: &ElementRef| {
            must_get_input(row, "input[type='checkbox']")
                .value()
                .attr("checked")
                .is_some()
        };
        assert!(checked(&paid_row));
        assert!(!checked(&unpaid_row));
    }

    #[test]
    fn section_shows_derived_values() {
        let view = ExpensesView::from_store(&sample_store());

        let html = Html::parse_fragment(&expenses_section(&view).into_string());

        assert_eq!(summary_text(&html, "income"), "$900.00");
        assert_eq!(summary_text(&html, "balance"), "$480.50");
        assert_eq!(summary_text(&html, "remaining"), "$419.50");
    }

    #[test]
    fn empty_store_shows_placeholder_row() {
        let view = ExpensesView::from_store(&ExpenseStore::new());

        let html = Html::parse_fragment(&expenses_section(&view).into_string());

        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("No expenses yet."));
    }
}
