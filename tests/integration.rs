//! Comprehensive integration tests for the workforce decision engine.
//!
//! This test suite drives the HTTP facade end to end and covers:
//! - Recommendation pipeline approvals and input filtering
//! - Denials (insufficient balance, workgroup rules)
//! - Review outcomes (unknown worker, overlaps, staffing) and check priority
//! - Annual hours balance calculation
//! - Batch approval simulation
//! - Free-text query interpretation
//! - CSV export endpoints
//! - Error cases and response shape

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use workforce_engine::api::{AppState, create_router};
use workforce_engine::config::load_policy;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let policy = load_policy("./config/policy.yaml").expect("Failed to load policy");
    AppState::new(policy)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_csv(router: Router, uri: &str, body: Value) -> (StatusCode, String) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, String::from_utf8(body_bytes.to_vec()).unwrap())
}

fn worker(
    id: &str,
    name: &str,
    department: &str,
    workgroup: &str,
    workday: &str,
    seniority: &str,
) -> Value {
    json!({
        "id": id,
        "name": name,
        "department": department,
        "workgroup": workgroup,
        "workday": workday,
        "seniority_years": seniority
    })
}

fn time_off_request(
    id: &str,
    user_id: &str,
    request_type: &str,
    start: &str,
    end: &str,
    status: &str,
) -> Value {
    json!({
        "id": id,
        "user_id": user_id,
        "type": request_type,
        "start_date": start,
        "end_date": end,
        "status": status
    })
}

fn vacation(id: &str, user_id: &str, start: &str, end: &str, status: &str) -> Value {
    time_off_request(id, user_id, "vacation", start, end, status)
}

fn balance(user_id: &str, year: i32, vacation_days: u32) -> Value {
    json!({
        "user_id": user_id,
        "year": year,
        "vacation_days": vacation_days,
        "personal_days": 4,
        "leave_days": 3
    })
}

fn report(user_id: &str, worked_hours: &str) -> Value {
    json!({
        "user_id": user_id,
        "worked_hours": worked_hours
    })
}

/// Four workers in one department: a lone absence never trips staffing.
fn logistics_roster() -> Value {
    json!([
        worker("w_001", "Pedro García", "logistics", "warehouse_a", "full", "10"),
        worker("w_002", "Lucía Gómez", "logistics", "warehouse_a", "full", "3"),
        worker("w_003", "Juan Pérez", "logistics", "warehouse_a", "partial", "0"),
        worker("w_004", "Ana Ruiz", "logistics", "warehouse_b", "full", "5")
    ])
}

fn analyze_body(requests: Value, balances: Value) -> Value {
    json!({
        "workers": logistics_roster(),
        "requests": requests,
        "balances": balances
    })
}

// =============================================================================
// SECTION 1: Recommendation Pipeline - Approvals and Filtering - 4 tests
// =============================================================================

#[tokio::test]
async fn test_pending_vacation_with_no_conflicts_is_approved() {
    let router = create_router_for_test();
    let body = analyze_body(
        json!([vacation("req_001", "w_001", "2025-06-02", "2025-06-06", "pending")]),
        json!([balance("w_001", 2025, 22)]),
    );

    let (status, results) = post_json(router, "/analyze", body).await;

    assert_eq!(status, StatusCode::OK);
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["request_id"], "req_001");
    assert_eq!(results[0]["recommendation"], "approve");
    assert_eq!(results[0]["severity"], "low");
    assert!(results[0]["conflict_type"].is_null());
    assert!(
        results[0]["explanation"]
            .as_str()
            .unwrap()
            .contains("Pedro García")
    );
}

#[tokio::test]
async fn test_one_result_per_pending_vacation_request() {
    let router = create_router_for_test();
    let body = analyze_body(
        json!([
            vacation("req_001", "w_001", "2025-02-03", "2025-02-07", "pending"),
            vacation("req_002", "w_002", "2025-05-05", "2025-05-09", "pending"),
            vacation("req_003", "w_003", "2025-09-01", "2025-09-05", "pending")
        ]),
        json!([
            balance("w_001", 2025, 22),
            balance("w_002", 2025, 22),
            balance("w_003", 2025, 22)
        ]),
    );

    let (status, results) = post_json(router, "/analyze", body).await;

    assert_eq!(status, StatusCode::OK);
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 3);
    let ids: Vec<&str> = results
        .iter()
        .map(|r| r["request_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["req_001", "req_002", "req_003"]);
}

#[tokio::test]
async fn test_non_pending_and_non_vacation_requests_are_ignored() {
    let router = create_router_for_test();
    let body = analyze_body(
        json!([
            vacation("req_001", "w_001", "2025-02-03", "2025-02-07", "approved"),
            vacation("req_002", "w_001", "2025-03-03", "2025-03-07", "rejected"),
            vacation("req_003", "w_001", "2025-04-07", "2025-04-11", "in_review"),
            time_off_request("req_004", "w_001", "other", "2025-05-05", "2025-05-09", "pending"),
            vacation("req_005", "w_002", "2025-06-02", "2025-06-06", "pending")
        ]),
        json!([balance("w_002", 2025, 22)]),
    );

    let (status, results) = post_json(router, "/analyze", body).await;

    assert_eq!(status, StatusCode::OK);
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["request_id"], "req_005");
}

#[tokio::test]
async fn test_empty_collections_produce_empty_results() {
    let router = create_router_for_test();
    let body = json!({"workers": [], "requests": [], "balances": []});

    let (status, results) = post_json(router, "/analyze", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(results.as_array().unwrap().len(), 0);
}

// =============================================================================
// SECTION 2: Recommendation Pipeline - Denials - 4 tests
// =============================================================================

#[tokio::test]
async fn test_insufficient_balance_is_denied() {
    // 30 requested days against 22 available
    let router = create_router_for_test();
    let body = analyze_body(
        json!([vacation("req_001", "w_001", "2025-08-01", "2025-08-30", "pending")]),
        json!([balance("w_001", 2025, 22)]),
    );

    let (status, results) = post_json(router, "/analyze", body).await;

    assert_eq!(status, StatusCode::OK);
    let result = &results.as_array().unwrap()[0];
    assert_eq!(result["recommendation"], "deny");
    assert_eq!(result["severity"], "high");
    assert_eq!(result["conflict_type"], "insufficient_days");
    let explanation = result["explanation"].as_str().unwrap();
    assert!(explanation.contains("30"));
    assert!(explanation.contains("22"));
}

#[tokio::test]
async fn test_blackout_period_violation_is_denied() {
    let router = create_router_for_test();
    let mut body = analyze_body(
        json!([vacation("req_001", "w_001", "2025-12-22", "2025-12-24", "pending")]),
        json!([balance("w_001", 2025, 22)]),
    );
    body["ruleset"] = json!({
        "warehouse_a": {
            "blackout_periods": [
                {"start_date": "2025-12-20", "end_date": "2025-12-31", "label": "cierre anual"}
            ]
        }
    });

    let (status, results) = post_json(router, "/analyze", body).await;

    assert_eq!(status, StatusCode::OK);
    let result = &results.as_array().unwrap()[0];
    assert_eq!(result["recommendation"], "deny");
    assert_eq!(result["severity"], "high");
    assert_eq!(result["conflict_type"], "group_rules");
    assert!(result["explanation"].as_str().unwrap().contains("cierre anual"));
}

#[tokio::test]
async fn test_min_span_violation_is_denied() {
    let router = create_router_for_test();
    let mut body = analyze_body(
        json!([vacation("req_001", "w_001", "2025-06-02", "2025-06-04", "pending")]),
        json!([balance("w_001", 2025, 22)]),
    );
    body["ruleset"] = json!({"warehouse_a": {"min_span_days": 5}});

    let (status, results) = post_json(router, "/analyze", body).await;

    assert_eq!(status, StatusCode::OK);
    let result = &results.as_array().unwrap()[0];
    assert_eq!(result["conflict_type"], "group_rules");
    assert!(result["explanation"].as_str().unwrap().contains("mínimo"));
}

#[tokio::test]
async fn test_max_span_violation_is_denied() {
    // Balance covers the 30 days, so the span rule is what trips
    let router = create_router_for_test();
    let mut body = analyze_body(
        json!([vacation("req_001", "w_001", "2025-08-01", "2025-08-30", "pending")]),
        json!([balance("w_001", 2025, 31)]),
    );
    body["ruleset"] = json!({"warehouse_a": {"max_span_days": 21}});

    let (status, results) = post_json(router, "/analyze", body).await;

    assert_eq!(status, StatusCode::OK);
    let result = &results.as_array().unwrap()[0];
    assert_eq!(result["recommendation"], "deny");
    assert_eq!(result["conflict_type"], "group_rules");
    assert!(result["explanation"].as_str().unwrap().contains("máximo"));
}

// =============================================================================
// SECTION 3: Recommendation Pipeline - Review Outcomes and Priority - 6 tests
// =============================================================================

#[tokio::test]
async fn test_unknown_worker_is_flagged_for_review() {
    let router = create_router_for_test();
    let body = analyze_body(
        json!([vacation("req_001", "ghost_001", "2025-06-02", "2025-06-06", "pending")]),
        json!([]),
    );

    let (status, results) = post_json(router, "/analyze", body).await;

    assert_eq!(status, StatusCode::OK);
    let result = &results.as_array().unwrap()[0];
    assert_eq!(result["recommendation"], "review");
    assert_eq!(result["severity"], "medium");
    assert!(result["conflict_type"].is_null());
    assert!(result["explanation"].as_str().unwrap().contains("ghost_001"));
}

#[tokio::test]
async fn test_missing_balance_year_is_flagged_for_review() {
    let router = create_router_for_test();
    let body = analyze_body(
        json!([vacation("req_001", "w_001", "2025-06-02", "2025-06-06", "pending")]),
        json!([balance("w_001", 2024, 22)]),
    );

    let (status, results) = post_json(router, "/analyze", body).await;

    assert_eq!(status, StatusCode::OK);
    let result = &results.as_array().unwrap()[0];
    assert_eq!(result["recommendation"], "review");
    assert_eq!(result["severity"], "medium");
    assert!(result["conflict_type"].is_null());
    assert!(result["explanation"].as_str().unwrap().contains("2025"));
}

#[tokio::test]
async fn test_overlapping_requests_name_the_other_worker() {
    // Pending range intersects a colleague's approved range
    let router = create_router_for_test();
    let body = analyze_body(
        json!([
            vacation("req_001", "w_001", "2025-08-05", "2025-08-15", "pending"),
            vacation("req_002", "w_002", "2025-08-10", "2025-08-20", "approved")
        ]),
        json!([balance("w_001", 2025, 22)]),
    );

    let (status, results) = post_json(router, "/analyze", body).await;

    assert_eq!(status, StatusCode::OK);
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert_eq!(result["recommendation"], "review");
    assert_eq!(result["severity"], "medium");
    assert_eq!(result["conflict_type"], "date_overlap");
    let explanation = result["explanation"].as_str().unwrap();
    assert!(explanation.contains("Lucía Gómez"));
    assert!(explanation.contains("2025-08-10"));
    assert!(explanation.contains("2025-08-20"));
}

#[tokio::test]
async fn test_solo_department_request_trips_staffing() {
    let router = create_router_for_test();
    let body = json!({
        "workers": [worker("w_009", "Marta Díaz", "night_shift", "night_a", "full", "1")],
        "requests": [vacation("req_001", "w_009", "2025-06-02", "2025-06-06", "pending")],
        "balances": [balance("w_009", 2025, 22)]
    });

    let (status, results) = post_json(router, "/analyze", body).await;

    assert_eq!(status, StatusCode::OK);
    let result = &results.as_array().unwrap()[0];
    assert_eq!(result["recommendation"], "review");
    assert_eq!(result["conflict_type"], "staffing");
    assert!(result["explanation"].as_str().unwrap().contains("night_shift"));
}

#[tokio::test]
async fn test_balance_check_beats_overlap_in_priority() {
    // Both insufficient balance and an overlap apply; the earlier check wins
    let router = create_router_for_test();
    let body = analyze_body(
        json!([
            vacation("req_001", "w_001", "2025-08-01", "2025-08-30", "pending"),
            vacation("req_002", "w_002", "2025-08-10", "2025-08-20", "approved")
        ]),
        json!([balance("w_001", 2025, 22)]),
    );

    let (status, results) = post_json(router, "/analyze", body).await;

    assert_eq!(status, StatusCode::OK);
    let result = &results.as_array().unwrap()[0];
    assert_eq!(result["conflict_type"], "insufficient_days");
}

#[tokio::test]
async fn test_rejected_requests_do_not_count_as_overlaps() {
    let router = create_router_for_test();
    let body = analyze_body(
        json!([
            vacation("req_001", "w_001", "2025-08-05", "2025-08-15", "pending"),
            vacation("req_002", "w_002", "2025-08-10", "2025-08-20", "rejected")
        ]),
        json!([balance("w_001", 2025, 22)]),
    );

    let (status, results) = post_json(router, "/analyze", body).await;

    assert_eq!(status, StatusCode::OK);
    let result = &results.as_array().unwrap()[0];
    assert_eq!(result["recommendation"], "approve");
}

// =============================================================================
// SECTION 4: Hours Balance - 8 tests
// =============================================================================

#[tokio::test]
async fn test_ten_year_fulltime_worker_is_balanced() {
    // Expected: 1800 - 8 * 10 = 1720; worked within the ±20 band
    let router = create_router_for_test();
    let body = json!({
        "workers": [worker("w_001", "Pedro García", "logistics", "warehouse_a", "full", "10")],
        "reports": [report("w_001", "1730")]
    });

    let (status, results) = post_json(router, "/hours", body).await;

    assert_eq!(status, StatusCode::OK);
    let result = &results.as_array().unwrap()[0];
    assert_eq!(result["worker_id"], "w_001");
    assert_eq!(result["expected_hours"], "1720");
    assert_eq!(result["difference"], "10");
    assert_eq!(result["adjusted_difference"], "10");
    assert_eq!(result["status"], "balanced");
}

#[tokio::test]
async fn test_deficit_below_band() {
    let router = create_router_for_test();
    let body = json!({
        "workers": [worker("w_001", "Pedro García", "logistics", "warehouse_a", "full", "10")],
        "reports": [report("w_001", "1690")]
    });

    let (status, results) = post_json(router, "/hours", body).await;

    assert_eq!(status, StatusCode::OK);
    let result = &results.as_array().unwrap()[0];
    assert_eq!(result["difference"], "-30");
    assert_eq!(result["status"], "deficit");
    assert!(result["explanation"].as_str().unwrap().contains("compensar"));
}

#[tokio::test]
async fn test_excess_above_band() {
    let router = create_router_for_test();
    let body = json!({
        "workers": [worker("w_001", "Pedro García", "logistics", "warehouse_a", "full", "10")],
        "reports": [report("w_001", "1750")]
    });

    let (status, results) = post_json(router, "/hours", body).await;

    assert_eq!(status, StatusCode::OK);
    let result = &results.as_array().unwrap()[0];
    assert_eq!(result["status"], "excess");
    assert!(
        result["explanation"]
            .as_str()
            .unwrap()
            .contains("descanso compensatorio")
    );
}

#[tokio::test]
async fn test_partial_workday_uses_reduced_base() {
    let router = create_router_for_test();
    let body = json!({
        "workers": [worker("w_003", "Juan Pérez", "logistics", "warehouse_a", "partial", "0")],
        "reports": [report("w_003", "912")]
    });

    let (status, results) = post_json(router, "/hours", body).await;

    assert_eq!(status, StatusCode::OK);
    let result = &results.as_array().unwrap()[0];
    assert_eq!(result["expected_hours"], "900");
    assert_eq!(result["difference"], "12");
    assert_eq!(result["status"], "balanced");
}

#[tokio::test]
async fn test_special_adjustment_lowers_expectation() {
    let router = create_router_for_test();
    let body = json!({
        "workers": [worker("w_001", "Pedro García", "logistics", "warehouse_a", "full", "10")],
        "reports": [{"user_id": "w_001", "worked_hours": "1630", "special_adjustment": "100"}]
    });

    let (status, results) = post_json(router, "/hours", body).await;

    assert_eq!(status, StatusCode::OK);
    let result = &results.as_array().unwrap()[0];
    assert_eq!(result["expected_hours"], "1620");
    assert_eq!(result["status"], "balanced");
}

#[tokio::test]
async fn test_compensated_hours_shift_the_adjusted_difference() {
    let router = create_router_for_test();
    let body = json!({
        "workers": [worker("w_001", "Pedro García", "logistics", "warehouse_a", "full", "10")],
        "reports": [{"user_id": "w_001", "worked_hours": "1760", "compensated_hours": "25"}]
    });

    let (status, results) = post_json(router, "/hours", body).await;

    assert_eq!(status, StatusCode::OK);
    let result = &results.as_array().unwrap()[0];
    assert_eq!(result["difference"], "40");
    assert_eq!(result["adjusted_difference"], "15");
    assert_eq!(result["status"], "balanced");
}

#[tokio::test]
async fn test_missing_time_report_returns_400() {
    let router = create_router_for_test();
    let body = json!({
        "workers": [worker("w_001", "Pedro García", "logistics", "warehouse_a", "full", "10")],
        "reports": []
    });

    let (status, error) = post_json(router, "/hours", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MISSING_TIME_REPORT");
    assert!(error["message"].as_str().unwrap().contains("w_001"));
}

#[tokio::test]
async fn test_negative_seniority_returns_400() {
    let router = create_router_for_test();
    let body = json!({
        "workers": [worker("w_001", "Pedro García", "logistics", "warehouse_a", "full", "-1")],
        "reports": [report("w_001", "1800")]
    });

    let (status, error) = post_json(router, "/hours", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_WORKER");
}

// =============================================================================
// SECTION 5: Approval Simulation - 5 tests
// =============================================================================

#[tokio::test]
async fn test_clean_batch_simulation_succeeds() {
    let router = create_router_for_test();
    let body = json!({
        "request_ids": ["req_001", "req_002"],
        "requests": [
            vacation("req_001", "w_001", "2025-06-02", "2025-06-06", "pending"),
            vacation("req_002", "w_002", "2025-07-07", "2025-07-11", "pending")
        ],
        "workers": logistics_roster()
    });

    let (status, result) = post_json(router, "/simulate", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["success"], true);
    assert_eq!(result["conflicts"].as_array().unwrap().len(), 0);
    assert_eq!(result["schedule_coverage"], "100");
    assert!(
        result["recommendation"]
            .as_str()
            .unwrap()
            .contains("sin impacto")
    );
}

#[tokio::test]
async fn test_overlapping_batch_reports_both_conflicts() {
    let router = create_router_for_test();
    let body = json!({
        "request_ids": ["req_001", "req_002"],
        "requests": [
            vacation("req_001", "w_001", "2025-08-01", "2025-08-10", "pending"),
            vacation("req_002", "w_002", "2025-08-05", "2025-08-15", "pending")
        ],
        "workers": logistics_roster()
    });

    let (status, result) = post_json(router, "/simulate", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["success"], false);
    let conflicts = result["conflicts"].as_array().unwrap();
    assert_eq!(conflicts.len(), 2);
    assert!(conflicts[0].as_str().unwrap().contains("req_001"));
    assert!(conflicts[1].as_str().unwrap().contains("req_002"));
}

#[tokio::test]
async fn test_staffing_conflict_reduces_coverage() {
    // A worker alone in a department always leaves it uncovered
    let router = create_router_for_test();
    let body = json!({
        "request_ids": ["req_001"],
        "requests": [vacation("req_001", "w_009", "2025-06-02", "2025-06-06", "pending")],
        "workers": [worker("w_009", "Marta Díaz", "night_shift", "night_a", "full", "1")]
    });

    let (status, result) = post_json(router, "/simulate", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["success"], false);
    assert_eq!(result["schedule_coverage"], "90");
    assert_eq!(result["affected_workers"], json!(["w_009"]));
}

#[tokio::test]
async fn test_unknown_ids_fail_without_impact() {
    let router = create_router_for_test();
    let body = json!({
        "request_ids": ["ghost_1"],
        "requests": [],
        "workers": []
    });

    let (status, result) = post_json(router, "/simulate", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["success"], false);
    assert_eq!(result["conflicts"].as_array().unwrap().len(), 1);
    assert_eq!(result["schedule_coverage"], "100");
    assert_eq!(result["affected_workers"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_affected_workers_are_deduplicated() {
    let router = create_router_for_test();
    let body = json!({
        "request_ids": ["req_001", "req_002"],
        "requests": [
            vacation("req_001", "w_001", "2025-02-03", "2025-02-07", "pending"),
            vacation("req_002", "w_001", "2025-05-05", "2025-05-09", "pending")
        ],
        "workers": logistics_roster()
    });

    let (status, result) = post_json(router, "/simulate", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["affected_workers"], json!(["w_001"]));
}

// =============================================================================
// SECTION 6: Query Interpretation - 4 tests
// =============================================================================

#[tokio::test]
async fn test_august_feasibility_permissive() {
    let router = create_router_for_test();
    let body = json!({
        "text": "¿Puede Pedro coger vacaciones en agosto?",
        "workers": logistics_roster(),
        "requests": [
            vacation("req_001", "w_002", "2025-08-04", "2025-08-08", "approved"),
            vacation("req_002", "w_003", "2025-08-11", "2025-08-15", "approved")
        ]
    });

    let (status, response) = post_json(router, "/query", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["confidence"], 0.9);
    assert!(response["answer"].as_str().unwrap().starts_with("Sí"));
    assert_eq!(response["related"]["kind"], "august_load");
    assert_eq!(response["related"]["data"]["worker_id"], "w_001");
    assert_eq!(response["related"]["data"]["approved_requests"], 2);
}

#[tokio::test]
async fn test_august_feasibility_cautionary_above_cutoff() {
    let router = create_router_for_test();
    let requests: Vec<Value> = (1..=6)
        .map(|i| {
            vacation(
                &format!("req_{i:03}"),
                &format!("other_{i:03}"),
                "2025-08-01",
                "2025-08-05",
                "approved",
            )
        })
        .collect();
    let body = json!({
        "text": "¿Puede Pedro coger vacaciones en agosto?",
        "workers": logistics_roster(),
        "requests": requests
    });

    let (status, response) = post_json(router, "/query", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["confidence"], 0.8);
    assert!(response["answer"].as_str().unwrap().contains("6"));
}

#[tokio::test]
async fn test_excess_hours_query_names_workers() {
    let router = create_router_for_test();
    let body = json!({
        "text": "¿Quién tiene exceso de horas este año?",
        "workers": [worker("w_001", "Pedro García", "logistics", "warehouse_a", "full", "10")],
        "reports": [report("w_001", "1750")]
    });

    let (status, response) = post_json(router, "/query", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["confidence"], 0.95);
    assert!(
        response["answer"]
            .as_str()
            .unwrap()
            .contains("Pedro García (+30 horas)")
    );
    assert_eq!(response["related"]["kind"], "excess_workers");
}

#[tokio::test]
async fn test_unrecognized_query_falls_back() {
    let router = create_router_for_test();
    let body = json!({"text": "¿Cuántos festivos tiene diciembre?"});

    let (status, response) = post_json(router, "/query", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["confidence"], 0.3);
    assert!(response["answer"].as_str().unwrap().contains("No dispongo"));
    assert!(response["related"].is_null());
}

// =============================================================================
// SECTION 7: CSV Export - 2 tests
// =============================================================================

#[tokio::test]
async fn test_analysis_csv_export() {
    let router = create_router_for_test();
    let body = analyze_body(
        json!([vacation("req_001", "w_001", "2025-08-01", "2025-08-30", "pending")]),
        json!([balance("w_001", 2025, 22)]),
    );

    let (status, csv) = post_csv(router, "/analyze/csv", body).await;

    assert_eq!(status, StatusCode::OK);
    let mut lines = csv.lines();
    assert_eq!(
        lines.next().unwrap(),
        "request_id,recommendation,conflict_type,severity,explanation"
    );
    assert!(lines.next().unwrap().starts_with("req_001,deny,insufficient_days,high"));
}

#[tokio::test]
async fn test_hours_csv_export() {
    let router = create_router_for_test();
    let body = json!({
        "workers": [worker("w_001", "Pedro García", "logistics", "warehouse_a", "full", "10")],
        "reports": [report("w_001", "1750")]
    });

    let (status, csv) = post_csv(router, "/hours/csv", body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(csv.starts_with(
        "worker_id,worker_name,worked_hours,expected_hours,difference,adjusted_difference,status,explanation"
    ));
    assert!(csv.contains("w_001,Pedro García,1750,1720,30,30,excess"));
}

// =============================================================================
// SECTION 8: Error Cases and Response Shape - 4 tests
// =============================================================================

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let router = create_router_for_test();

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/analyze")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_field_returns_validation_error() {
    let router = create_router_for_test();
    let body = json!({"requests": [], "balances": []});

    let (status, error) = post_json(router, "/analyze", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["message"].as_str().unwrap().contains("workers"));
}

#[tokio::test]
async fn test_inverted_date_range_returns_400() {
    let router = create_router_for_test();
    let body = analyze_body(
        json!([vacation("req_001", "w_001", "2025-06-06", "2025-06-02", "pending")]),
        json!([balance("w_001", 2025, 22)]),
    );

    let (status, error) = post_json(router, "/analyze", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_REQUEST");
    assert!(error["message"].as_str().unwrap().contains("req_001"));
}

#[tokio::test]
async fn test_analysis_result_fields_are_present() {
    let router = create_router_for_test();
    let body = analyze_body(
        json!([vacation("req_001", "w_001", "2025-08-01", "2025-08-30", "pending")]),
        json!([balance("w_001", 2025, 22)]),
    );

    let (status, results) = post_json(router, "/analyze", body).await;

    assert_eq!(status, StatusCode::OK);
    let result = &results.as_array().unwrap()[0];
    assert!(result["request_id"].is_string());
    assert!(result["recommendation"].is_string());
    assert!(result["explanation"].is_string());
    assert!(result["conflict_type"].is_string());
    assert!(result["severity"].is_string());
}
