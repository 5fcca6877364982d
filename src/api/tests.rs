use std::sync::Arc;

use actix_web::{App, http::StatusCode, test, web::Data};
use serde_json::{Value, json};

use crate::{
    config::Config,
    routes,
    service::{EmployeeService, VisitorService},
    store::memory::{MemoryEmployeeStore, MemoryVisitorStore, UnavailableStore},
};

fn test_config() -> Config {
    Config {
        rate_api_per_min: 0,
        ..Config::default()
    }
}

fn memory_services() -> (EmployeeService, VisitorService) {
    (
        EmployeeService::new(Arc::new(MemoryEmployeeStore::default())),
        VisitorService::new(Arc::new(MemoryVisitorStore::default())),
    )
}

macro_rules! init_app {
    ($services:expr) => {{
        let (employees, visitors) = $services;
        let config = test_config();
        test::init_service(
            App::new()
                .app_data(Data::new(employees))
                .app_data(Data::new(visitors))
                .configure(|cfg| routes::configure(cfg, &config)),
        )
        .await
    }};
}

#[actix_web::test]
async fn scenario_a_low_salary_is_mediocre() {
    let app = init_app!(memory_services());

    let req = test::TestRequest::post()
        .uri("/api/employees")
        .set_json(json!({"nom": "Alice", "salaire": 800}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["nom"], "Alice");
    assert_eq!(body["salaire"].as_f64(), Some(800.0));
    assert_eq!(body["observation"], "mediocre");
    assert!(body["numEmp"].as_u64().is_some());
    assert!(body["createdAt"].is_string());
}

#[actix_web::test]
async fn scenario_b_visitor_total_is_days_times_rate() {
    let app = init_app!(memory_services());

    let req = test::TestRequest::post()
        .uri("/api/visitors")
        .set_json(json!({"name": "Bob", "days": 5, "dailyRate": 20}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Bob");
    assert_eq!(body["days"], 5);
    assert_eq!(body["totalAmount"].as_f64(), Some(100.0));
}

#[actix_web::test]
async fn scenario_c_update_shows_in_list_with_new_observation() {
    let app = init_app!(memory_services());

    let req = test::TestRequest::post()
        .uri("/api/employees")
        .set_json(json!({"nom": "Alice", "salaire": 800}))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let num_emp = created["numEmp"].as_u64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/employees/{num_emp}"))
        .set_json(json!({"nom": "Alice2", "salaire": 6000}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/employees").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["numEmp"], num_emp);
    assert_eq!(listed[0]["nom"], "Alice2");
    assert_eq!(listed[0]["observation"], "grand");
}

#[actix_web::test]
async fn scenario_d_update_of_missing_id_is_not_found() {
    let app = init_app!(memory_services());

    let req = test::TestRequest::put()
        .uri("/api/employees/9999")
        .set_json(json!({"nom": "Ghost", "salaire": 1200}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Employee 9999 not found");

    let req = test::TestRequest::put()
        .uri("/api/visitors/9999")
        .set_json(json!({"name": "Ghost", "days": 1, "dailyRate": 5}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_twice_answers_ok_both_times() {
    let app = init_app!(memory_services());

    let req = test::TestRequest::post()
        .uri("/api/visitors")
        .set_json(json!({"name": "Bob", "days": 2, "dailyRate": 10}))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_u64().unwrap();

    for _ in 0..2 {
        let req = test::TestRequest::delete()
            .uri(&format!("/api/visitors/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Visitor deleted successfully");

        let req = test::TestRequest::get().uri("/api/visitors").to_request();
        let listed: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed, json!([]));
    }
}

#[actix_web::test]
async fn employee_delete_confirms_with_message() {
    let app = init_app!(memory_services());

    let req = test::TestRequest::delete().uri("/api/employees/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Employee deleted successfully");
}

#[actix_web::test]
async fn client_supplied_derived_fields_are_ignored() {
    let app = init_app!(memory_services());

    let req = test::TestRequest::post()
        .uri("/api/employees")
        .set_json(json!({"nom": "Eve", "salaire": 7000, "observation": "mediocre"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["observation"], "grand");

    let req = test::TestRequest::post()
        .uri("/api/visitors")
        .set_json(json!({"name": "Dan", "days": 3, "dailyRate": 49.99, "totalAmount": 1}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["totalAmount"].as_f64(), Some(149.97));
}

#[actix_web::test]
async fn invalid_input_is_a_bad_request_with_message() {
    let app = init_app!(memory_services());

    let req = test::TestRequest::post()
        .uri("/api/employees")
        .set_json(json!({"nom": "   ", "salaire": 800}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].is_string());

    let req = test::TestRequest::post()
        .uri("/api/visitors")
        .set_json(json!({"name": "Bob", "days": 0, "dailyRate": 20}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/employees")
        .set_json(json!({"nom": "Alice"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].is_string());
}

#[actix_web::test]
async fn non_numeric_id_is_a_bad_request() {
    let app = init_app!(memory_services());

    let req = test::TestRequest::delete()
        .uri("/api/employees/abc")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn storage_failure_is_500_with_message() {
    let app = init_app!((
        EmployeeService::new(Arc::new(UnavailableStore)),
        VisitorService::new(Arc::new(UnavailableStore)),
    ));

    for uri in ["/api/employees", "/api/visitors"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert!(!body["message"].as_str().unwrap().is_empty());
    }
}

#[actix_web::test]
async fn statistics_endpoints_summarize_records() {
    let app = init_app!(memory_services());

    for (nom, salaire) in [("A", 800), ("B", 3000), ("C", 6000)] {
        let req = test::TestRequest::post()
            .uri("/api/employees")
            .set_json(json!({"nom": nom, "salaire": salaire}))
            .to_request();
        test::call_service(&app, req).await;
    }
    let req = test::TestRequest::get()
        .uri("/api/employees/statistics")
        .to_request();
    let stats: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stats["totalEmployees"], 3);
    assert_eq!(stats["totalSalaires"].as_f64(), Some(9800.0));
    assert_eq!(stats["minSalaire"].as_f64(), Some(800.0));
    assert_eq!(stats["maxSalaire"].as_f64(), Some(6000.0));
    assert_eq!(stats["distribution"], json!({"mediocre": 1, "moyen": 1, "grand": 1}));

    let req = test::TestRequest::post()
        .uri("/api/visitors")
        .set_json(json!({"name": "Bob", "days": 5, "dailyRate": 20}))
        .to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::get()
        .uri("/api/visitors/statistics")
        .to_request();
    let stats: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stats["totalVisitors"], 1);
    assert_eq!(stats["totalDays"], 5);
    assert_eq!(stats["totalAmount"].as_f64(), Some(100.0));
}

#[actix_web::test]
async fn index_answers() {
    let app = init_app!(memory_services());
    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}

#[actix_web::test]
async fn salary_that_rounds_past_the_column_is_a_bad_request() {
    let app = init_app!(memory_services());

    let req = test::TestRequest::post()
        .uri("/api/employees")
        .set_json(json!({"nom": "Max", "salaire": "99999999.995"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].is_string());

    let req = test::TestRequest::get().uri("/api/employees").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed, json!([]));
}

#[actix_web::test]
async fn wrong_method_on_statistics_answers_with_message() {
    let app = init_app!(memory_services());

    for uri in ["/api/employees/statistics", "/api/visitors/statistics"] {
        let req = test::TestRequest::delete().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Method not allowed");
    }

    let req = test::TestRequest::patch().uri("/api/visitors/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[actix_web::test]
async fn visitors_are_listed_newest_first() {
    let app = init_app!(memory_services());

    for name in ["first", "second", "third"] {
        let req = test::TestRequest::post()
            .uri("/api/visitors")
            .set_json(json!({"name": name, "days": 1, "dailyRate": 10}))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get().uri("/api/visitors").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    let names: Vec<_> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["third", "second", "first"]);
}
