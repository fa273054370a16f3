use axum::http::StatusCode;
use handlebars::Handlebars;
use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::json;

use crate::{
    db::TableView,
    error::Result,
    models::{book::Book, sale::EntryForm},
    services::{EntryOutcome, LookupOutcome},
};

const TITLE: &str = "Madang Bookstore Manager";

static TEMPLATES: Lazy<Handlebars<'static>> = Lazy::new(|| {
    let mut hb = Handlebars::new();
    hb.set_strict_mode(true); // fail if a variable is missing

    let templates = [
        ("page", include_str!("templates/page.hbs")),
        ("error", include_str!("templates/error.hbs")),
    ];
    for (name, source) in templates {
        if let Err(e) = hb.register_template_string(name, source) {
            tracing::error!(template = name, error = %e, "Invalid template");
        }
    }

    let partials = [
        ("lookup", include_str!("templates/lookup.hbs")),
        ("entry", include_str!("templates/entry.hbs")),
        ("notices", include_str!("templates/notices.hbs")),
    ];
    for (name, source) in partials {
        if let Err(e) = hb.register_partial(name, source) {
            tracing::error!(partial = name, error = %e, "Invalid partial");
        }
    }
    hb
});

#[derive(Debug, Serialize)]
pub struct Notice {
    pub kind: &'static str,
    pub text: String,
}

impl Notice {
    fn new(kind: &'static str, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct LookupView {
    name: String,
    notices: Vec<Notice>,
    table: Option<TableView>,
}

#[derive(Debug, Serialize)]
struct BookOption {
    label: String,
    selected: bool,
}

#[derive(Debug, Serialize)]
struct EntryView {
    customer_name: String,
    price: String,
    books: Vec<BookOption>,
    notices: Vec<Notice>,
}

#[derive(Debug, Serialize)]
struct Page<'a> {
    title: &'static str,
    lookup_active: bool,
    entry_active: bool,
    lookup: Option<&'a LookupView>,
    entry: Option<&'a EntryView>,
}

/// Render the tabbed page with the lookup tab showing `outcome`.
pub fn render_lookup_page(outcome: &LookupOutcome) -> Result<String> {
    let view = match outcome {
        LookupOutcome::Idle => LookupView {
            name: String::new(),
            notices: Vec::new(),
            table: None,
        },
        LookupOutcome::NoHistory { name } => LookupView {
            name: name.clone(),
            notices: vec![Notice::new(
                "warning",
                format!("No purchase history found for '{name}'."),
            )],
            table: None,
        },
        LookupOutcome::Found { name, table } => LookupView {
            name: name.clone(),
            notices: Vec::new(),
            table: Some(table.to_view()),
        },
        LookupOutcome::Failed { name, message } => LookupView {
            name: name.clone(),
            notices: vec![Notice::new("error", format!("Lookup failed: {message}"))],
            table: None,
        },
    };

    render_page(Page {
        title: TITLE,
        lookup_active: true,
        entry_active: false,
        lookup: Some(&view),
        entry: None,
    })
}

/// Render the tabbed page with the entry tab showing `outcome`.
pub fn render_entry_page(outcome: &EntryOutcome, books: &[Book]) -> Result<String> {
    let blank = EntryForm {
        price: "0".to_string(),
        ..EntryForm::default()
    };

    let (form, notices) = match outcome {
        EntryOutcome::Idle => (&blank, Vec::new()),
        EntryOutcome::Rejected { form, message } => {
            (form, vec![Notice::new("error", message.clone())])
        }
        EntryOutcome::Saved { receipt } => (
            &blank,
            vec![
                Notice::new(
                    "success",
                    format!("New sale saved! (customer: {})", receipt.customer_name),
                ),
                Notice::new(
                    "info",
                    "Search for this customer on the Customer Lookup tab to verify.",
                ),
            ],
        ),
        EntryOutcome::Failed { form, message } => (
            form,
            vec![Notice::new("error", format!("Saving the sale failed: {message}"))],
        ),
    };

    let view = EntryView {
        customer_name: form.customer_name.clone(),
        price: form.price.clone(),
        books: books
            .iter()
            .map(|book| {
                let label = book.label();
                BookOption {
                    selected: form.selected_book() == Some(label.as_str()),
                    label,
                }
            })
            .collect(),
        notices,
    };

    render_page(Page {
        title: TITLE,
        lookup_active: false,
        entry_active: true,
        lookup: None,
        entry: Some(&view),
    })
}

pub fn render_error_page(status: StatusCode, message: &str) -> Result<String> {
    Ok(TEMPLATES.render(
        "error",
        &json!({ "status": status.to_string(), "message": message }),
    )?)
}

fn render_page(page: Page<'_>) -> Result<String> {
    Ok(TEMPLATES.render("page", &page)?)
}
