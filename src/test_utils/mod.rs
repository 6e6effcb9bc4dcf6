#![allow(missing_docs)]

pub(crate) mod expenses;
pub(crate) mod html;

pub(crate) use expenses::{assert_hx_endpoint, must_get_expense_row, must_get_input, summary_text};
pub(crate) use html::{assert_valid_html, parse_html_document, parse_html_fragment};
