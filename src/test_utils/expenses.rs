use scraper::{ElementRef, Html, Selector};

use crate::expense::ExpenseId;

#[track_caller]
pub(crate) fn must_get_expense_row(html: &Html, id: ExpenseId) -> ElementRef<'_> {
    let selector = Selector::parse(&format!("tr[data-expense-id='{id}']")).unwrap();

    html.select(&selector)
        .next()
        .unwrap_or_else(|| panic!("No row found for expense {id}"))
}

#[track_caller]
pub(crate) fn must_get_input<'a>(element: &ElementRef<'a>, selector: &str) -> ElementRef<'a> {
    element
        .select(&Selector::parse(selector).unwrap())
        .next()
        .unwrap_or_else(|| panic!("No input found matching {selector:?}"))
}

#[track_caller]
pub(crate) fn assert_hx_endpoint(element: &ElementRef<'_>, endpoint: &str, attribute: &str) {
    let got = element
        .value()
        .attr(attribute)
        .unwrap_or_else(|| panic!("{attribute} attribute missing"));

    assert_eq!(
        got, endpoint,
        "want element with attribute {attribute}=\"{endpoint}\", got {got:?}"
    );
}

/// The trimmed text of one of the summary values, e.g. "balance".
#[track_caller]
pub(crate) fn summary_text(html: &Html, name: &str) -> String {
    let selector = Selector::parse(&format!("dd[data-summary='{name}']")).unwrap();

    html.select(&selector)
        .next()
        .unwrap_or_else(|| panic!("No summary value found for {name:?}"))
        .text()
        .collect::<String>()
        .trim()
        .to_owned()
}
