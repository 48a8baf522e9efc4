//! End-to-end profile lifecycle tests against on-disk storage.
//!
//! These drive the public HTTP surface with a `DirProfileStore` rooted in a
//! disposable directory, covering the create/read/patch/delete cycle and the
//! on-disk artefacts it leaves behind.

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use padron::Trace;
use padron::inbound::http::profiles::{
    create_user, delete_user, get_user, get_user_field, list_users, patch_user_field, ping,
    upload_user,
};
use padron::inbound::http::state::HttpState;
use padron::outbound::persistence::DirProfileStore;
use padron::test_support::cap_fs::{directory_entries, read_file_to_string};
use padron::test_support::storage::temp_profile_store;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

async fn init_app(
    store: DirProfileStore,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    let state = HttpState::new(Arc::new(store));
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .service(ping)
            .service(list_users)
            .service(create_user)
            .service(upload_user)
            .service(get_user)
            .service(delete_user)
            .service(get_user_field)
            .service(patch_user_field),
    )
    .await
}

#[fixture]
fn resident_body() -> Value {
    json!({
        "ID": "702390421",
        "name": "Javier",
        "lastname": "Rivas",
        "address": {
            "provincia": "Limón",
            "canton": "Limón",
            "distrito": "Río Blanco"
        },
        "phones": [84_139_034, 27_585_124],
        "politicalParty": "Avance"
    })
}

async fn read_json(response: ServiceResponse) -> Value {
    let body = test::read_body(response).await;
    serde_json::from_slice(&body).expect("JSON body")
}

#[rstest]
fn created_profiles_survive_the_full_crud_cycle(resident_body: Value) {
    actix_rt::System::new().block_on(async move {
        let (_root, store) = temp_profile_store();
        let app = init_app(store).await;

        let created = test::call_service(
            &app,
            TestRequest::post()
                .uri("/user")
                .set_json(&resident_body)
                .to_request(),
        )
        .await;
        assert_eq!(created.status(), StatusCode::CREATED);
        assert_eq!(
            read_json(created).await,
            json!({"message": "user profile created"})
        );

        let fetched = test::call_service(
            &app,
            TestRequest::get().uri("/user/702390421").to_request(),
        )
        .await;
        assert_eq!(fetched.status(), StatusCode::OK);
        assert_eq!(read_json(fetched).await, resident_body);

        let patched = test::call_service(
            &app,
            TestRequest::post()
                .uri("/user/702390421/name")
                .set_json(json!({"name": "José"}))
                .to_request(),
        )
        .await;
        assert_eq!(patched.status(), StatusCode::OK);
        assert_eq!(
            read_json(patched).await,
            json!({"message": "user profile updated"})
        );

        let field = test::call_service(
            &app,
            TestRequest::get().uri("/user/702390421/name").to_request(),
        )
        .await;
        assert_eq!(read_json(field).await, json!({"name": "José"}));

        let deleted = test::call_service(
            &app,
            TestRequest::delete().uri("/user/702390421").to_request(),
        )
        .await;
        assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

        let missing = test::call_service(
            &app,
            TestRequest::get().uri("/user/702390421").to_request(),
        )
        .await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    });
}

#[rstest]
fn rejected_documents_leave_no_file_behind(mut resident_body: Value) {
    actix_rt::System::new().block_on(async move {
        let (root, store) = temp_profile_store();
        let app = init_app(store).await;

        resident_body
            .as_object_mut()
            .expect("fixture is an object")
            .remove("lastname");
        let response = test::call_service(
            &app,
            TestRequest::post()
                .uri("/user")
                .set_json(&resident_body)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["details"]["field"], "lastname");
        assert_eq!(body["details"]["code"], "missing_field");

        let entries = directory_entries(root.path()).expect("list storage root");
        assert!(entries.is_empty(), "unexpected entries: {entries:?}");

        let listing = test::call_service(&app, TestRequest::get().uri("/users").to_request()).await;
        assert_eq!(read_json(listing).await, json!({"Users": []}));
    });
}

#[rstest]
fn profiles_survive_a_store_reopen(resident_body: Value) {
    actix_rt::System::new().block_on(async move {
        let (root, store) = temp_profile_store();
        {
            let app = init_app(store).await;
            let created = test::call_service(
                &app,
                TestRequest::post()
                    .uri("/user")
                    .set_json(&resident_body)
                    .to_request(),
            )
            .await;
            assert_eq!(created.status(), StatusCode::CREATED);
        }

        let reopened = DirProfileStore::open(root.path()).expect("reopen storage root");
        let app = init_app(reopened).await;
        let fetched = test::call_service(
            &app,
            TestRequest::get().uri("/user/702390421").to_request(),
        )
        .await;
        assert_eq!(fetched.status(), StatusCode::OK);
        assert_eq!(read_json(fetched).await, resident_body);
    });
}

#[rstest]
fn stored_files_use_wire_field_names(resident_body: Value) {
    actix_rt::System::new().block_on(async move {
        let (root, store) = temp_profile_store();
        let app = init_app(store).await;

        let created = test::call_service(
            &app,
            TestRequest::post()
                .uri("/user")
                .set_json(&resident_body)
                .to_request(),
        )
        .await;
        assert_eq!(created.status(), StatusCode::CREATED);

        let stored = read_file_to_string(&root.path().join("702390421.json"))
            .expect("stored record is readable");
        assert!(stored.contains("\"ID\": \"702390421\""));
        assert!(stored.contains("\"politicalParty\": \"Avance\""));
        assert!(stored.lines().count() > 1, "records are pretty-printed");
    });
}

#[rstest]
fn upload_reports_the_profile_uri(resident_body: Value) {
    actix_rt::System::new().block_on(async move {
        let (_root, store) = temp_profile_store();
        let app = init_app(store).await;

        let uploaded = test::call_service(
            &app,
            TestRequest::post()
                .uri("/upload/user")
                .set_json(&resident_body)
                .to_request(),
        )
        .await;
        assert_eq!(uploaded.status(), StatusCode::CREATED);
        assert_eq!(
            read_json(uploaded).await,
            json!({"URI": "/user/702390421"})
        );

        let listing = test::call_service(&app, TestRequest::get().uri("/users").to_request()).await;
        assert_eq!(read_json(listing).await, json!({"Users": ["702390421"]}));
    });
}

#[rstest]
fn replacement_leaves_only_the_record_file(resident_body: Value) {
    actix_rt::System::new().block_on(async move {
        let (root, store) = temp_profile_store();
        let app = init_app(store).await;

        for _ in 0..2 {
            let response = test::call_service(
                &app,
                TestRequest::post()
                    .uri("/user")
                    .set_json(&resident_body)
                    .to_request(),
            )
            .await;
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let entries = directory_entries(root.path()).expect("list storage root");
        assert_eq!(entries, vec!["702390421.json".to_string()]);
    });
}
