//! End-to-end page flow over the assembled Actix application.
//!
//! Wires the real service, in-memory store, templates and trace middleware,
//! then drives the pages the way a browser would.

use std::sync::Arc;

use actix_web::dev::ServiceResponse;
use actix_web::http::{StatusCode, header};
use actix_web::middleware::NormalizePath;
use actix_web::{App, test, web};
use feeding_log::Trace;
use feeding_log::domain::FeedingRecordService;
use feeding_log::inbound::http::feeding_records::configure;
use feeding_log::inbound::http::state::HttpState;
use feeding_log::inbound::http::views::Views;
use feeding_log::outbound::memory::InMemoryFeedingRecordRepository;
use rstest::rstest;

fn state() -> web::Data<HttpState> {
    let service = Arc::new(FeedingRecordService::new(
        Arc::new(InMemoryFeedingRecordRepository::default()),
        Arc::new(mockable::DefaultClock),
    ));
    let views = Views::new().expect("templates compile");
    web::Data::new(HttpState::new(service.clone(), service, Arc::new(views)))
}

async fn body_of(res: ServiceResponse) -> String {
    String::from_utf8(test::read_body(res).await.to_vec()).expect("utf8 body")
}

#[rstest]
#[actix_web::test]
async fn browser_flow_creates_edits_and_deletes() {
    let app = test::init_service(
        App::new()
            .app_data(state())
            .wrap(NormalizePath::trim())
            .wrap(Trace)
            .configure(configure),
    )
    .await;

    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/comidas")
            .set_form(vec![
                ("nombreGatito", "Whiskers"),
                ("horaComida", "08:00"),
                ("tipoComida", "wet"),
                ("responsable", "Ana"),
            ])
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::FOUND);
    assert!(created.headers().contains_key("trace-id"));

    let listed = test::call_service(
        &app,
        test::TestRequest::get().uri("/comidas/").to_request(),
    )
    .await;
    assert_eq!(listed.status(), StatusCode::OK);
    let body = body_of(listed).await;
    assert!(body.contains("Whiskers"));
    assert!(body.contains("Ana"));

    let updated = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/comidas/1")
            .set_form(vec![
                ("nombreGatito", "Whiskers"),
                ("horaComida", "20:00:00"),
                ("tipoComida", "dry"),
                ("responsable", ""),
            ])
            .to_request(),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::FOUND);

    let edit = test::call_service(
        &app,
        test::TestRequest::get().uri("/comidas/editar/1").to_request(),
    )
    .await;
    let body = body_of(edit).await;
    assert!(body.contains(r#"value="20:00""#));
    assert!(body.contains(r#"value="dry""#));

    let deleted = test::call_service(
        &app,
        test::TestRequest::get().uri("/comidas/delete/1").to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::FOUND);
    assert_eq!(
        deleted
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some("/comidas")
    );

    let gone = test::call_service(
        &app,
        test::TestRequest::get().uri("/comidas/edit/1").to_request(),
    )
    .await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
    let trace_id = gone
        .headers()
        .get("trace-id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace id header");
    assert!(body_of(gone).await.contains(&trace_id));
}

#[rstest]
#[actix_web::test]
async fn markup_in_names_is_escaped() {
    let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/comidas")
            .set_form(vec![
                ("nombreGatito", "<b>Tom</b>"),
                ("horaComida", "09:15"),
            ])
            .to_request(),
    )
    .await;

    let listed = test::call_service(
        &app,
        test::TestRequest::get().uri("/comidas").to_request(),
    )
    .await;
    let body = body_of(listed).await;
    assert!(body.contains("&lt;b&gt;Tom&lt;&#x2F;b&gt;"));
    assert!(!body.contains("<b>Tom</b>"));
}
