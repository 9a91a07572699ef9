mod common;

use std::net::SocketAddr;

use axum::{
    body::{to_bytes, Body},
    extract::ConnectInfo,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use cinema_booking_backend::db::DemoCatalog;
use cinema_booking_backend::utils::jwt::{create_token, CUSTOMER_ROLE};
use cinema_booking_backend::{routes, AppState, Config};

use common::{setup, SEAT_PRICE};

const SECRET: &str = "test-secret";

async fn app() -> (Router, DemoCatalog) {
    let (db, catalog) = setup().await;
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        jwt_secret: SECRET.to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        seat_price: SEAT_PRICE,
        seed_demo_catalog: false,
    };
    (routes::create_router(AppState::new(db, config)), catalog)
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let mut request = builder.body(body).unwrap();
    request
        .extensions_mut()
        .insert(ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 40000))));
    request
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn customer_token() -> String {
    create_token(Uuid::new_v4(), CUSTOMER_ROLE, SECRET, 1).unwrap()
}

#[tokio::test]
async fn lists_showtimes_and_seat_map() {
    let (app, catalog) = app().await;

    let (status, body) = send(&app, request(Method::GET, "/api/showtimes", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["id"], catalog.showtime_id);
    assert_eq!(body[0]["movie_title"], "The Projectionist");

    let uri = format!("/api/showtimes/{}/seats", catalog.showtime_id);
    let (status, body) = send(&app, request(Method::GET, &uri, None, None)).await;
    assert_eq!(status, StatusCode::OK);
    let seats = body["seats"].as_array().unwrap();
    assert_eq!(seats.len(), 3);
    assert!(seats.iter().all(|s| s["is_booked"] == false));
}

#[tokio::test]
async fn unknown_showtime_seat_map_is_404() {
    let (app, _) = app().await;

    let (status, body) = send(&app, request(Method::GET, "/api/showtimes/999/seats", None, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "SHOWTIME_NOT_FOUND");
}

#[tokio::test]
async fn booking_requires_a_token() {
    let (app, catalog) = app().await;
    let payload = json!({ "showtime_id": catalog.showtime_id, "seat_ids": [catalog.seat_ids[0]] });

    let (status, _) = send(&app, request(Method::POST, "/api/bookings", None, Some(payload.clone()))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        request(Method::POST, "/api/bookings", Some("not-a-jwt"), Some(payload)),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn non_customer_roles_cannot_book() {
    let (app, catalog) = app().await;
    let token = create_token(Uuid::new_v4(), "admin", SECRET, 1).unwrap();
    let payload = json!({ "showtime_id": catalog.showtime_id, "seat_ids": [catalog.seat_ids[0]] });

    let (status, _) = send(&app, request(Method::POST, "/api/bookings", Some(&token), Some(payload))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn booking_then_conflict_then_listing() {
    let (app, catalog) = app().await;
    let alice = customer_token();
    let bob = customer_token();
    let seats = &catalog.seat_ids;

    let payload = json!({ "showtime_id": catalog.showtime_id, "seat_ids": [seats[0], seats[1]] });
    let (status, body) = send(&app, request(Method::POST, "/api/bookings", Some(&alice), Some(payload))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["total_price"], 400);

    let payload = json!({ "showtime_id": catalog.showtime_id, "seat_ids": [seats[1], seats[2]] });
    let (status, body) = send(&app, request(Method::POST, "/api/bookings", Some(&bob), Some(payload))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "SEAT_CONFLICT");
    assert_eq!(body["conflicting_seat_ids"], json!([seats[1]]));

    let uri = format!("/api/showtimes/{}/seats", catalog.showtime_id);
    let (_, body) = send(&app, request(Method::GET, &uri, None, None)).await;
    let booked: Vec<bool> = body["seats"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["is_booked"].as_bool().unwrap())
        .collect();
    assert_eq!(booked, vec![true, true, false]);

    let (status, body) = send(&app, request(Method::GET, "/api/bookings", Some(&alice), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["seat_ids"], json!([seats[0], seats[1]]));

    let (_, body) = send(&app, request(Method::GET, "/api/bookings", Some(&bob), None)).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn empty_selection_is_400() {
    let (app, catalog) = app().await;
    let token = customer_token();
    let payload = json!({ "showtime_id": catalog.showtime_id, "seat_ids": [] });

    let (status, body) = send(&app, request(Method::POST, "/api/bookings", Some(&token), Some(payload))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "EMPTY_SELECTION");
}
