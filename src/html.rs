use maud::{DOCTYPE, Markup, PreEscaped, html};

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

// Link styles
pub const LINK_STYLE: &str = "text-blue-600 hover:text-blue-500 \
    dark:text-blue-500 dark:hover:text-blue-400 underline";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "w-full px-4 py-2 bg-blue-500
    dark:bg-blue-600 disabled:bg-blue-700 hover:enabled:bg-blue-600 \
    hover:enabled:dark:bg-blue-700 text-white rounded";

pub const BUTTON_DELETE_STYLE: &str = "text-red-600 hover:text-red-500 \
    dark:text-red-500 dark:hover:text-red-400 underline bg-transparent \
    border-none cursor-pointer";

// Form styles
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded text-sm \
    text-gray-900 dark:text-white disabled:text-gray-500 bg-gray-50 \
    dark:bg-gray-700 border border-gray-300 dark:border-gray-600 \
    dark:placeholder-gray-400 focus:ring-blue-600 focus:border-blue-600 \
    focus:dark:border-blue-500 focus:dark:ring-blue-500";
pub const FORM_CHECKBOX_STYLE: &str = "h-4 w-4 cursor-pointer text-blue-600 \
    border-gray-300 rounded dark:border-gray-600 focus:ring-blue-500";

// Table styles
pub const TABLE_HEADER_STYLE: &str = "text-xs text-gray-700 uppercase \
    bg-gray-50 dark:bg-gray-700 dark:text-gray-400";

pub const TABLE_ROW_STYLE: &str = "bg-white border-b dark:bg-gray-800 dark:border-gray-700";

pub const TABLE_CELL_STYLE: &str = "px-6 py-4";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col items-center px-6 py-8 mx-auto lg:py-5 text-gray-900 dark:text-white";

/// Switches Tailwind to class based dark mode and applies the saved color
/// mode, falling back to the OS preference.
const COLOR_MODE_SCRIPT: &str = r#"
tailwind.config = { darkMode: 'class' };
const savedColorMode = localStorage.getItem('color-mode');
if (savedColorMode === 'dark' ||
    (savedColorMode === null && window.matchMedia('(prefers-color-scheme: dark)').matches)) {
    document.documentElement.classList.add('dark');
}
function toggleColorMode() {
    const isDark = document.documentElement.classList.toggle('dark');
    localStorage.setItem('color-mode', isDark ? 'dark' : 'light');
}
"#;

/// The ID of the button that switches between light and dark mode.
pub const COLOR_MODE_BUTTON_ID: &str = "color-mode-toggle";

/// A button that switches between light and dark mode.
pub fn color_mode_button() -> Markup {
    html! {
        button
            id=(COLOR_MODE_BUTTON_ID)
            type="button"
            onclick="toggleColorMode()"
            aria-label="Toggle dark mode"
            class="p-2 rounded-lg text-gray-500 hover:bg-gray-100
                dark:text-gray-400 dark:hover:bg-gray-700"
        {
            span class="dark:hidden" { "Dark mode" }
            span class="hidden dark:inline" { "Light mode" }
        }
    }
}

pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Expense Tracker" }

                script src="https://cdn.tailwindcss.com" {}
                script { (PreEscaped(COLOR_MODE_SCRIPT)) }
                script src="https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js" {}
                script src="https://unpkg.com/htmx-ext-response-targets@2.0.4/response-targets.js" {}
            }

            body
                hx-ext="response-targets"
                class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)

                // Alert container for error responses
                div
                    id="alert-container"
                    class="w-full max-w-md px-4"
                    style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
                {}
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    // Template adapted from https://flowbite.com/blocks/marketing/404/
    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-blue-600 dark:text-blue-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-gray-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-gray-900 dark:text-white"
                    {
                        (fix)
                    }

                    a href="/" class=(LINK_STYLE) { "Back to Homepage" }
                }
            }
        }
    );

    base(title, &content)
}

const LARGE_AMOUNT_CUTOFF: f64 = 1_000_000_000_000.0;

/// Format `number` as dollars and cents, e.g. "$1,234.50" or "-$5.25".
pub fn format_currency(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    // Round to cents first, numfmt truncates extra decimals and switches to
    // scientific notation below one cent.
    let number = (number * 100.0).round() / 100.0;

    // numfmt also switches to scientific notation for very large numbers.
    if number.abs() >= LARGE_AMOUNT_CUTOFF {
        let sign = if number < 0.0 { "-" } else { "" };
        return format!("{sign}${:.2}", number.abs());
    }

    let mut formatted_string = if number < 0.0 {
        negative_fmt.fmt_string(number.abs())
    } else if number > 0.0 {
        positive_fmt.fmt_string(number)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "$0.00".to_owned()
    };

    // numfmt drops trailing zeros, e.g. "12.30" is rendered as "12.3" and
    // "12.00" as "12", so pad the decimals back out to two places.
    match formatted_string.find('.') {
        None => formatted_string.push_str(".00"),
        Some(point) => {
            for _ in formatted_string.len() - point - 1..2 {
                formatted_string.push('0');
            }
        }
    }

    formatted_string
}
