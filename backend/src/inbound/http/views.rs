//! Server-rendered HTML views built with Tera.
//!
//! Templates are embedded at compile time and autoescaped (their names end
//! in `.html`). Handlers pass small serialisable view models rather than
//! domain types so formatting stays in one place.

use std::sync::OnceLock;

use actix_web::http::StatusCode;
use serde::Serialize;
use tera::{Context, Tera};
use tracing::error;

use crate::domain::{Error, FeedingRecord};

const LIST_TEMPLATE: &str = "list.html";
const FORM_TEMPLATE: &str = "form.html";
const ERROR_TEMPLATE: &str = "error.html";

const TIME_FORMAT: &str = "%H:%M";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Row of the list view and values of the form view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordView {
    /// Identifier; absent for the blank creation form.
    pub id: Option<i64>,
    pub cat_name: String,
    /// Feeding time as `HH:MM`.
    pub feeding_time: String,
    pub food_type: String,
    pub caretaker: String,
    /// Creation timestamp; empty for the blank creation form.
    pub created_at: String,
}

impl From<&FeedingRecord> for RecordView {
    fn from(record: &FeedingRecord) -> Self {
        let details = &record.details;
        Self {
            id: Some(record.id.get()),
            cat_name: details.cat_name.to_string(),
            feeding_time: details.feeding_time.format(TIME_FORMAT).to_string(),
            food_type: details.food_type.clone().unwrap_or_default(),
            caretaker: details.caretaker.clone().unwrap_or_default(),
            created_at: record.created_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

#[derive(Serialize)]
struct ListPage<'a> {
    records: &'a [RecordView],
}

#[derive(Serialize)]
struct FormPage<'a> {
    record: &'a RecordView,
    action: String,
}

#[derive(Serialize)]
struct ErrorPage<'a> {
    status: u16,
    reason: &'static str,
    code: &'a str,
    message: &'a str,
    fields: Vec<String>,
    trace_id: Option<&'a str>,
}

/// Compiled page templates shared by all workers.
#[derive(Debug, Clone)]
pub struct Views {
    tera: Tera,
}

impl Views {
    /// Compile the embedded templates.
    ///
    /// # Errors
    ///
    /// Returns the Tera error when a template fails to parse.
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (LIST_TEMPLATE, include_str!("../../../templates/list.html")),
            (FORM_TEMPLATE, include_str!("../../../templates/form.html")),
            (ERROR_TEMPLATE, include_str!("../../../templates/error.html")),
        ])?;
        Ok(Self { tera })
    }

    /// Render the list of all records.
    ///
    /// # Errors
    ///
    /// Returns an internal error when rendering fails.
    pub fn render_list(&self, records: &[FeedingRecord]) -> Result<String, Error> {
        let rows: Vec<RecordView> = records.iter().map(RecordView::from).collect();
        self.render(LIST_TEMPLATE, &ListPage { records: &rows })
    }

    /// Render the creation form, or the edit form when `record.id` is set.
    ///
    /// # Errors
    ///
    /// Returns an internal error when rendering fails.
    pub fn render_form(&self, record: &RecordView) -> Result<String, Error> {
        let action = match record.id {
            Some(id) => format!("/comidas/{id}"),
            None => "/comidas".to_owned(),
        };
        self.render(FORM_TEMPLATE, &FormPage { record, action })
    }

    fn render<T: Serialize>(&self, template: &str, page: &T) -> Result<String, Error> {
        let context = Context::from_serialize(page).map_err(|err| template_error(template, &err))?;
        self.tera
            .render(template, &context)
            .map_err(|err| template_error(template, &err))
    }
}

fn template_error(template: &str, err: &tera::Error) -> Error {
    error!(template, error = %err, "failed to render view");
    Error::internal(format!("failed to render {template}"))
}

fn error_fields(error: &Error) -> Vec<String> {
    let Some(details) = error.details() else {
        return Vec::new();
    };
    if let Some(fields) = details.get("fields").and_then(|value| value.as_array()) {
        return fields
            .iter()
            .filter_map(|field| field.as_str().map(str::to_owned))
            .collect();
    }
    details
        .get("field")
        .and_then(|value| value.as_str())
        .map(|field| vec![field.to_owned()])
        .unwrap_or_default()
}

/// Engine for error pages, which are rendered outside any request state.
static ERROR_VIEWS: OnceLock<Result<Views, String>> = OnceLock::new();

fn error_views() -> Result<&'static Views, &'static str> {
    ERROR_VIEWS
        .get_or_init(|| Views::new().map_err(|err| err.to_string()))
        .as_ref()
        .map_err(String::as_str)
}

fn error_code(error: &Error) -> &str {
    error
        .details()
        .and_then(|details| details.get("code"))
        .and_then(|value| value.as_str())
        .unwrap_or_else(|| error.code().as_str())
}

/// Render the error page for `error` with the given status.
///
/// Falls back to plain text if the template cannot be rendered, so an error
/// response is always produced.
pub fn render_error_page(error: &Error, status: StatusCode) -> String {
    let page = ErrorPage {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Error"),
        code: error_code(error),
        message: error.message(),
        fields: error_fields(error),
        trace_id: error.trace_id(),
    };
    let rendered = error_views()
        .map_err(str::to_owned)
        .and_then(|views| {
            views
                .render(ERROR_TEMPLATE, &page)
                .map_err(|err| err.message().to_owned())
        });
    rendered.unwrap_or_else(|err| {
        error!(error = %err, "failed to render error page");
        format!("{} {}", page.status, page.message)
    })
}
