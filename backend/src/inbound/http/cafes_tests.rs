//! Handler tests for the cafe endpoints, backed by mocked driving ports.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{MockCafeCommand, MockCafeQuery};
use crate::domain::{Cafe, CafeDraft, CafeId};

fn cafe(id: i32, location: &str) -> Cafe {
    Cafe::from(CafeDraft {
        id: CafeId::new(id),
        name: format!("Cafe {id}"),
        map_url: format!("https://maps.example/{id}"),
        img_url: format!("https://img.example/{id}.jpg"),
        location: location.to_owned(),
        seats: "20-30".to_owned(),
        amenities: Amenities {
            has_toilet: true,
            has_wifi: false,
            has_sockets: true,
            can_take_calls: false,
        },
        coffee_price: Some("£2.40".to_owned()),
    })
}

#[fixture]
fn add_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Prufrock"),
        ("map_url", "https://maps.example/prufrock"),
        ("img_url", "https://img.example/prufrock.jpg"),
        ("location", "Farringdon"),
        ("seats", "20-30"),
        ("has_toilet", "true"),
        ("has_wifi", "1"),
        ("has_sockets", "no"),
        ("can_take_calls", "off"),
        ("coffee_price", "£2.80"),
    ]
}

fn test_app(
    query: MockCafeQuery,
    command: MockCafeCommand,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::new(Arc::new(query), Arc::new(command));
    App::new()
        .app_data(web::Data::new(state))
        .configure(configure)
}

async fn call(
    query: MockCafeQuery,
    command: MockCafeCommand,
    request: actix_test::TestRequest,
) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(query, command)).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let json = serde_json::from_slice(&body).expect("response body is JSON");
    (status, json)
}

#[actix_web::test]
async fn random_returns_cafe_without_identifier() {
    let mut query = MockCafeQuery::new();
    query
        .expect_random_cafe()
        .times(1)
        .return_once(|| Ok(cafe(4, "Peckham")));

    let (status, body) = call(
        query,
        MockCafeCommand::new(),
        actix_test::TestRequest::get().uri("/random"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cafe"]["name"], "Cafe 4");
    assert_eq!(body["cafe"]["has_toilet"], true);
    assert!(body["cafe"].get("caffe_id").is_none());
}

#[actix_web::test]
async fn random_on_empty_store_is_not_found() {
    let mut query = MockCafeQuery::new();
    query
        .expect_random_cafe()
        .return_once(|| Err(Error::empty_collection("no cafes")));

    let (status, body) = call(
        query,
        MockCafeCommand::new(),
        actix_test::TestRequest::get().uri("/random"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": {"EmptyCollection": "no cafes"}}));
}

#[rstest]
#[case(Vec::new())]
#[case(vec![cafe(1, "NYC"), cafe(2, "NYC"), cafe(3, "LA")])]
#[actix_web::test]
async fn all_lists_every_cafe_with_identifier(#[case] cafes: Vec<Cafe>) {
    let expected_ids: Vec<i32> = cafes.iter().map(|c| c.id().as_i32()).collect();
    let mut query = MockCafeQuery::new();
    query.expect_list_cafes().return_once(move || Ok(cafes));

    let (status, body) = call(
        query,
        MockCafeCommand::new(),
        actix_test::TestRequest::get().uri("/all"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body["cafes_list"]
        .as_array()
        .expect("cafes_list array")
        .iter()
        .filter_map(|entry| entry["caffe_id"].as_i64())
        .collect();
    assert_eq!(
        ids,
        expected_ids.into_iter().map(i64::from).collect::<Vec<_>>()
    );
}

#[actix_web::test]
async fn search_passes_location_and_returns_full_record() {
    let mut query = MockCafeQuery::new();
    query
        .expect_search_by_location()
        .withf(|request| request.location == "Peckham")
        .return_once(|_| Ok(cafe(7, "Peckham")));

    let (status, body) = call(
        query,
        MockCafeCommand::new(),
        actix_test::TestRequest::get().uri("/search?loc=Peckham"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"cafe": {
            "caffe_id": 7,
            "can_take_calls": false,
            "coffee_price": "£2.40",
            "has_sockets": true,
            "has_toilet": true,
            "has_wifi": false,
            "img_url": "https://img.example/7.jpg",
            "location": "Peckham",
            "map_url": "https://maps.example/7",
            "name": "Cafe 7",
            "seats": "20-30",
        }})
    );
}

#[rstest]
#[case("/search")]
#[case("/search?loc=")]
#[case("/search?location=Peckham")]
#[actix_web::test]
async fn search_without_loc_is_missing_parameter(#[case] uri: &str) {
    let mut query = MockCafeQuery::new();
    query.expect_search_by_location().times(0);

    let (status, body) = call(
        query,
        MockCafeCommand::new(),
        actix_test::TestRequest::get().uri(uri),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"error": {"MissingParameter": "missing required parameter: loc"}})
    );
}

#[rstest]
#[actix_web::test]
async fn add_parses_form_into_new_cafe(add_form: Vec<(&'static str, &'static str)>) {
    let mut command = MockCafeCommand::new();
    command
        .expect_add_cafe()
        .withf(|request| {
            let cafe = &request.cafe;
            cafe.name() == "Prufrock"
                && cafe.amenities()
                    == Amenities {
                        has_toilet: true,
                        has_wifi: true,
                        has_sockets: false,
                        can_take_calls: false,
                    }
                && cafe.coffee_price().map(CoffeePrice::as_str) == Some("£2.80")
        })
        .times(1)
        .return_once(|_| Ok(cafe(10, "Farringdon")));

    let (status, body) = call(
        MockCafeQuery::new(),
        command,
        actix_test::TestRequest::post().uri("/add").set_form(&add_form),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"response": {"success": "Successfully added the new cafe."}})
    );
}

#[rstest]
#[actix_web::test]
async fn add_accepts_query_parameters(add_form: Vec<(&'static str, &'static str)>) {
    let mut command = MockCafeCommand::new();
    command
        .expect_add_cafe()
        .times(1)
        .return_once(|_| Ok(cafe(10, "Farringdon")));
    let query = add_form
        .iter()
        .filter(|(key, _)| *key != "coffee_price")
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    let (status, _) = call(
        MockCafeQuery::new(),
        command,
        actix_test::TestRequest::post().uri(&format!("/add?{query}")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

#[rstest]
#[case::first_required("name")]
#[case::flag("has_wifi")]
#[case::last_required("can_take_calls")]
#[actix_web::test]
async fn add_without_required_field_is_missing_parameter(
    add_form: Vec<(&'static str, &'static str)>,
    #[case] dropped: &str,
) {
    let mut command = MockCafeCommand::new();
    command.expect_add_cafe().times(0);
    let form: Vec<_> = add_form
        .into_iter()
        .filter(|(key, _)| *key != dropped)
        .collect();

    let (status, body) = call(
        MockCafeQuery::new(),
        command,
        actix_test::TestRequest::post().uri("/add").set_form(&form),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"]["MissingParameter"],
        format!("missing required parameter: {dropped}")
    );
}

#[rstest]
#[actix_web::test]
async fn add_with_unreadable_flag_is_invalid_parameter(
    add_form: Vec<(&'static str, &'static str)>,
) {
    let mut command = MockCafeCommand::new();
    command.expect_add_cafe().times(0);
    let form: Vec<_> = add_form
        .into_iter()
        .map(|(key, value)| {
            if key == "has_sockets" {
                (key, "sometimes")
            } else {
                (key, value)
            }
        })
        .collect();

    let (status, body) = call(
        MockCafeQuery::new(),
        command,
        actix_test::TestRequest::post().uri("/add").set_form(&form),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"]["InvalidParameter"]
        .as_str()
        .expect("InvalidParameter message");
    assert!(message.starts_with("has_sockets"), "{message}");
}

#[rstest]
#[actix_web::test]
async fn add_duplicate_name_is_conflict(add_form: Vec<(&'static str, &'static str)>) {
    let mut command = MockCafeCommand::new();
    command
        .expect_add_cafe()
        .return_once(|_| Err(Error::constraint_violation("A cafe with that name already exists")));

    let (status, body) = call(
        MockCafeQuery::new(),
        command,
        actix_test::TestRequest::post().uri("/add").set_form(&add_form),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body,
        json!({"error": {"ConstraintViolation": "A cafe with that name already exists"}})
    );
}

#[rstest]
#[case::form(actix_test::TestRequest::patch().uri("/update-price/3").set_form([("new_price", "£3.10")]))]
#[case::query(actix_test::TestRequest::patch().uri("/update-price/3?new_price=%C2%A33.10"))]
#[actix_web::test]
async fn update_price_reads_new_price(#[case] request: actix_test::TestRequest) {
    let mut command = MockCafeCommand::new();
    command
        .expect_update_coffee_price()
        .withf(|request| request.cafe_id == CafeId::new(3) && request.new_price.as_str() == "£3.10")
        .times(1)
        .return_once(|_| Ok(cafe(3, "Peckham")));

    let (status, body) = call(MockCafeQuery::new(), command, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"response": {"success": "Successfully updated the price."}})
    );
}

#[actix_web::test]
async fn update_price_without_new_price_is_missing_parameter() {
    let mut command = MockCafeCommand::new();
    command.expect_update_coffee_price().times(0);

    let (status, body) = call(
        MockCafeQuery::new(),
        command,
        actix_test::TestRequest::patch().uri("/update-price/3"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"error": {"MissingParameter": "missing required parameter: new_price"}})
    );
}

#[rstest]
#[case::unknown_id(
    "/update-price/99?new_price=1",
    Some(Error::not_found("Sorry a cafe with id 99 was not found in the database"))
)]
#[case::non_integer_id("/update-price/abc?new_price=1", None)]
#[actix_web::test]
async fn update_price_on_unknown_cafe_is_not_found(
    #[case] uri: &str,
    #[case] store_outcome: Option<Error>,
) {
    let mut command = MockCafeCommand::new();
    match store_outcome {
        Some(err) => {
            command
                .expect_update_coffee_price()
                .times(1)
                .return_once(move |_| Err(err));
        }
        None => {
            command.expect_update_coffee_price().times(0);
        }
    }

    let (status, body) = call(
        MockCafeQuery::new(),
        command,
        actix_test::TestRequest::patch().uri(uri),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"]["NotFound"].is_string());
}

#[rstest]
#[case::query(
    actix_test::TestRequest::delete().uri("/report-closed/5?api_key=TopSecretAPIKey")
)]
#[case::form(
    actix_test::TestRequest::delete()
        .uri("/report-closed/5")
        .set_form([("api_key", "TopSecretAPIKey")])
)]
#[actix_web::test]
async fn report_closed_forwards_key_and_id(#[case] request: actix_test::TestRequest) {
    let mut command = MockCafeCommand::new();
    command
        .expect_report_closed()
        .withf(|request| {
            request.cafe_id == CafeId::new(5)
                && request.api_key.as_deref() == Some("TopSecretAPIKey")
        })
        .times(1)
        .return_once(|_| Ok(()));

    let (status, body) = call(MockCafeQuery::new(), command, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"response": {"success": "Successfully deleted the cafe."}})
    );
}

#[actix_web::test]
async fn report_closed_without_key_is_forbidden() {
    let mut command = MockCafeCommand::new();
    command
        .expect_report_closed()
        .withf(|request| request.api_key.is_none())
        .return_once(|_| {
            Err(Error::forbidden(
                "Sorry, that's not allowed. Make sure you have the correct api_key",
            ))
        });

    let (status, body) = call(
        MockCafeQuery::new(),
        command,
        actix_test::TestRequest::delete().uri("/report-closed/5"),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["error"]["Forbidden"],
        "Sorry, that's not allowed. Make sure you have the correct api_key"
    );
}
