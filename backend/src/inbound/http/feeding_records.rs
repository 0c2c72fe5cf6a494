//! Feeding record page handlers.
//!
//! ```text
//! GET  /comidas               list
//! GET  /comidas/new           blank form
//! POST /comidas               create, then redirect to the list
//! GET  /comidas/edit/{id}     pre-filled form
//! POST /comidas/{id}          update, then redirect to the list
//! GET  /comidas/delete/{id}   delete, then redirect to the list
//! ```
//!
//! `/nuevo`, `/editar/{id}` and `/eliminar/{id}` are aliases of the English
//! paths.

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, web};
use tracing::debug;

use crate::domain::{RecordId, record_not_found};
use crate::inbound::http::ApiResult;
use crate::inbound::http::forms::FeedingRecordForm;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::RecordView;

/// Base path of every feeding record page.
pub const RECORDS_PATH: &str = "/comidas";

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

fn redirect_to_list() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, RECORDS_PATH))
        .finish()
}

/// Render every stored record.
pub async fn list_records(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let records = state.records.list_all().await?;
    Ok(html(state.views.render_list(&records)?))
}

/// Render the blank creation form.
pub async fn new_record_form(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    Ok(html(state.views.render_form(&RecordView::default())?))
}

/// Create a record from the submitted form.
pub async fn create_record(
    state: web::Data<HttpState>,
    form: web::Form<FeedingRecordForm>,
) -> ApiResult<HttpResponse> {
    let draft = form.into_inner().into_draft()?;
    let record = state.records_command.save(draft).await?;
    debug!(record_id = %record.id, "redirecting after create");
    Ok(redirect_to_list())
}

/// Render the form pre-filled with an existing record.
pub async fn edit_record_form(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = RecordId::new(path.into_inner());
    let record = state
        .records
        .find_by_id(id)
        .await?
        .ok_or_else(|| record_not_found(id))?;
    Ok(html(state.views.render_form(&RecordView::from(&record))?))
}

/// Replace an existing record with the submitted form.
pub async fn update_record(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    form: web::Form<FeedingRecordForm>,
) -> ApiResult<HttpResponse> {
    let id = RecordId::new(path.into_inner());
    let draft = match form.into_inner().into_draft() {
        Ok(draft) => draft,
        Err(invalid) => {
            // Unknown ids report 404 even when the form is also malformed.
            if state.records.find_by_id(id).await?.is_none() {
                return Err(record_not_found(id));
            }
            return Err(invalid);
        }
    };
    state.records_command.update(id, draft).await?;
    Ok(redirect_to_list())
}

/// Delete a record.
pub async fn delete_record(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = RecordId::new(path.into_inner());
    state.records_command.delete(id).await?;
    Ok(redirect_to_list())
}

async fn root_redirect() -> HttpResponse {
    redirect_to_list()
}

/// Register the feeding record pages and the root redirect.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use feeding_log::inbound::http::feeding_records::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(root_redirect)))
        .service(
            web::scope(RECORDS_PATH)
                .service(
                    web::resource("")
                        .route(web::get().to(list_records))
                        .route(web::post().to(create_record)),
                )
                .service(web::resource(["/new", "/nuevo"]).route(web::get().to(new_record_form)))
                .service(
                    web::resource(["/edit/{id}", "/editar/{id}"])
                        .route(web::get().to(edit_record_form)),
                )
                .service(
                    web::resource(["/delete/{id}", "/eliminar/{id}"])
                        .route(web::get().to(delete_record)),
                )
                .service(web::resource("/{id}").route(web::post().to(update_record))),
        );
}

#[cfg(test)]
#[path = "feeding_records_tests.rs"]
mod tests;
