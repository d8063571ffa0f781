mod common;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use serde_json::Value;
use tower::ServiceExt;

use fabworks_backend::models::manufacturing_cost::{CostFilters, CostType, PAGE_SIZE};
use fabworks_backend::services::cost_report::list_costs;
use fabworks_backend::services::image_store::FsImageStore;
use fabworks_backend::{build_router, AppState};

use crate::common::{seed_batch, seed_cost, seed_user, setup_test_db};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-6, "expected {} ≈ {}", a, b);
}

/// Seed a spread of cost entries across two batches, all five cost types,
/// and the days of January 2026. Returns (batch_a, batch_b).
async fn seed_ledger(db: &sea_orm::DatabaseConnection, entries: usize) -> (i32, i32) {
    let user = seed_user(db, "clerk", "Ledger Clerk").await;
    let batch_a = seed_batch(db, "B-2026-001").await;
    let batch_b = seed_batch(db, "B-2026-002").await;

    for i in 0..entries {
        let batch = if i % 2 == 0 { batch_a } else { batch_b };
        let cost_type = CostType::ALL[i % CostType::ALL.len()];
        let amount = 100.0 + (i as f64) * 7.25;
        let day = (i % 28) as u32 + 1;
        let recorded_by = if i % 3 == 0 { None } else { Some(user) };
        seed_cost(db, batch, cost_type.as_str(), amount, date(2026, 1, day), recorded_by).await;
    }
    (batch_a, batch_b)
}

/// Walk every page for a filter set and collect the detail amounts
async fn sum_all_pages(db: &sea_orm::DatabaseConnection, filters: &CostFilters) -> (f64, u64) {
    let first = list_costs(db, filters, 1).await.unwrap();
    let mut total: f64 = first.rows.iter().map(|r| r.amount).sum();
    let mut rows = first.rows.len() as u64;
    for page in 2..=first.pagination.total_pages {
        let report = list_costs(db, filters, page).await.unwrap();
        total += report.rows.iter().map(|r| r.amount).sum::<f64>();
        rows += report.rows.len() as u64;
    }
    (total, rows)
}

#[tokio::test]
async fn test_detail_pages_sum_to_summary_grand_total() {
    let db = setup_test_db().await.unwrap();
    let (batch_a, _) = seed_ledger(&db, 40).await;

    let filter_sets = [
        CostFilters::default(),
        CostFilters {
            cost_type: Some(CostType::Labor),
            ..Default::default()
        },
        CostFilters {
            batch_id: Some(batch_a),
            ..Default::default()
        },
        CostFilters {
            date_from: Some(date(2026, 1, 5)),
            date_to: Some(date(2026, 1, 20)),
            ..Default::default()
        },
    ];

    for filters in filter_sets {
        let report = list_costs(&db, &filters, 1).await.unwrap();
        let (detail_total, detail_rows) = sum_all_pages(&db, &filters).await;

        let summary_total: f64 = report.summary.iter().map(|s| s.total_amount).sum();
        let summary_rows: i64 = report.summary.iter().map(|s| s.entry_count).sum();

        assert_close(detail_total, report.grand_total);
        assert_close(summary_total, report.grand_total);
        assert_eq!(detail_rows, report.pagination.total_rows);
        assert_eq!(summary_rows as u64, report.pagination.total_rows);
    }
}

#[tokio::test]
async fn test_summary_is_ordered_by_total_descending_with_averages() {
    let db = setup_test_db().await.unwrap();
    let batch = seed_batch(&db, "B-1").await;

    seed_cost(&db, batch, "labor", 50.0, date(2026, 2, 1), None).await;
    seed_cost(&db, batch, "labor", 150.0, date(2026, 2, 2), None).await;
    seed_cost(&db, batch, "electricity", 500.0, date(2026, 2, 3), None).await;
    seed_cost(&db, batch, "other", 10.0, date(2026, 2, 4), None).await;

    let report = list_costs(&db, &CostFilters::default(), 1).await.unwrap();

    let types: Vec<&str> = report.summary.iter().map(|s| s.cost_type.as_str()).collect();
    assert_eq!(types, vec!["electricity", "labor", "other"]);

    let labor = &report.summary[1];
    assert_eq!(labor.entry_count, 2);
    assert_close(labor.total_amount, 200.0);
    assert_close(labor.average_amount, 100.0);

    assert_close(report.grand_total, 710.0);
}

#[tokio::test]
async fn test_pagination_math_and_page_past_the_end() {
    let db = setup_test_db().await.unwrap();
    seed_ledger(&db, 35).await;

    let filters = CostFilters::default();
    let page1 = list_costs(&db, &filters, 1).await.unwrap();
    assert_eq!(page1.pagination.total_rows, 35);
    assert_eq!(page1.pagination.total_pages, 3);
    assert_eq!(page1.pagination.page_size, PAGE_SIZE);
    assert_eq!(page1.rows.len(), 15);

    let page3 = list_costs(&db, &filters, 3).await.unwrap();
    assert_eq!(page3.rows.len(), 5);

    // Past the last page: no detail rows, but the summary is filter-scoped
    // and unchanged.
    let page4 = list_costs(&db, &filters, 4).await.unwrap();
    assert!(page4.rows.is_empty());
    assert!(!page4.summary.is_empty());
    assert_close(page4.grand_total, page1.grand_total);
}

#[tokio::test]
async fn test_extreme_page_number_returns_empty_page() {
    let db = setup_test_db().await.unwrap();
    seed_ledger(&db, 10).await;

    // The offset must not overflow for any syntactically valid page number
    let report = list_costs(&db, &CostFilters::default(), u64::MAX)
        .await
        .unwrap();
    assert!(report.rows.is_empty());
    assert_eq!(report.pagination.total_rows, 10);
    assert!(!report.summary.is_empty());
}

#[tokio::test]
async fn test_rows_ordered_by_recorded_date_descending() {
    let db = setup_test_db().await.unwrap();
    seed_ledger(&db, 30).await;

    let report = list_costs(&db, &CostFilters::default(), 1).await.unwrap();
    let dates: Vec<NaiveDate> = report.rows.iter().map(|r| r.recorded_date).collect();
    let mut sorted = dates.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted);
}

#[tokio::test]
async fn test_date_bounds_are_inclusive() {
    let db = setup_test_db().await.unwrap();
    let batch = seed_batch(&db, "B-1").await;

    seed_cost(&db, batch, "labor", 10.0, date(2026, 3, 1), None).await;
    seed_cost(&db, batch, "labor", 20.0, date(2026, 3, 15), None).await;
    seed_cost(&db, batch, "labor", 30.0, date(2026, 3, 31), None).await;

    let exact = CostFilters {
        date_from: Some(date(2026, 3, 1)),
        date_to: Some(date(2026, 3, 31)),
        ..Default::default()
    };
    let report = list_costs(&db, &exact, 1).await.unwrap();
    assert_eq!(report.rows.len(), 3);
    assert_eq!(report.summary[0].entry_count, 3);

    let inner = CostFilters {
        date_from: Some(date(2026, 3, 2)),
        date_to: Some(date(2026, 3, 30)),
        ..Default::default()
    };
    let report = list_costs(&db, &inner, 1).await.unwrap();
    assert_eq!(report.rows.len(), 1);
    assert_close(report.grand_total, 20.0);
}

#[tokio::test]
async fn test_rows_join_batch_number_and_recorder_name() {
    let db = setup_test_db().await.unwrap();
    let user = seed_user(&db, "jdoe", "Jamie Doe").await;
    let batch = seed_batch(&db, "B-100").await;

    seed_cost(&db, batch, "maintenance", 75.0, date(2026, 4, 2), Some(user)).await;
    seed_cost(&db, batch, "maintenance", 25.0, date(2026, 4, 1), None).await;

    let report = list_costs(&db, &CostFilters::default(), 1).await.unwrap();
    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.rows[0].batch_number, "B-100");
    assert_eq!(report.rows[0].recorded_by_name.as_deref(), Some("Jamie Doe"));
    // Recorder left-joined: missing user resolves to null, the row stays
    assert_eq!(report.rows[1].recorded_by_name, None);
}

#[tokio::test]
async fn test_batch_filter_restricts_rows() {
    let db = setup_test_db().await.unwrap();
    let (batch_a, batch_b) = seed_ledger(&db, 20).await;

    let filters = CostFilters {
        batch_id: Some(batch_a),
        ..Default::default()
    };
    let report = list_costs(&db, &filters, 1).await.unwrap();
    assert_eq!(report.pagination.total_rows, 10);
    assert!(report.rows.iter().all(|r| r.batch_id == batch_a));

    let filters = CostFilters {
        batch_id: Some(batch_b),
        cost_type: Some(CostType::Overhead),
        ..Default::default()
    };
    let report = list_costs(&db, &filters, 1).await.unwrap();
    assert!(report
        .rows
        .iter()
        .all(|r| r.batch_id == batch_b && r.cost_type == "overhead"));
}

#[tokio::test]
async fn test_empty_ledger_reports_zero_pages() {
    let db = setup_test_db().await.unwrap();

    let report = list_costs(&db, &CostFilters::default(), 1).await.unwrap();
    assert!(report.rows.is_empty());
    assert!(report.summary.is_empty());
    assert_close(report.grand_total, 0.0);
    assert_eq!(report.pagination.total_pages, 0);
    assert!(report.pagination.links.is_empty());
}

// ---- handler-level tests over the full router ----

async fn test_app() -> (axum::Router, sea_orm::DatabaseConnection, tempfile::TempDir) {
    let db = setup_test_db().await.unwrap();
    let dir = tempfile::tempdir().unwrap();
    let state = AppState {
        db: db.clone(),
        images: Arc::new(FsImageStore::new(dir.path()).unwrap()),
    };
    (build_router(state), db, dir)
}

#[tokio::test]
async fn test_get_manufacturing_costs_endpoint() {
    let (app, db, _dir) = test_app().await;
    seed_ledger(&db, 20).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/manufacturing-costs?cost_type=labor&page=1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();

    for row in json["rows"].as_array().unwrap() {
        assert_eq!(row["cost_type"], "labor");
        assert!(row["batch_number"].as_str().unwrap().starts_with("B-2026-"));
    }
    assert_eq!(json["pagination"]["page_size"].as_u64().unwrap(), 15);
    assert!(json["pagination"]["links"].is_array());
    assert_eq!(json["summary"][0]["cost_type"], "labor");
}

#[tokio::test]
async fn test_get_manufacturing_costs_blank_filters_are_ignored() {
    let (app, db, _dir) = test_app().await;
    seed_ledger(&db, 5).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/manufacturing-costs?batch_id=&cost_type=&date_from=&date_to=&page=")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["pagination"]["total_rows"].as_u64().unwrap(), 5);
    assert_eq!(json["pagination"]["page"].as_u64().unwrap(), 1);
}

#[tokio::test]
async fn test_get_manufacturing_costs_rejects_unknown_cost_type() {
    let (app, _db, _dir) = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/manufacturing-costs?cost_type=fuel")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["kind"], "validation");
}

#[tokio::test]
async fn test_get_manufacturing_costs_rejects_inverted_date_range() {
    let (app, _db, _dir) = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/manufacturing-costs?date_from=2026-02-01&date_to=2026-01-01")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
