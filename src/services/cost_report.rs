//! Manufacturing cost report queries
//!
//! Three queries share one filter condition: the row count (for pagination
//! math), the detail page (joined with batch number and recorder name), and
//! the per-cost-type summary. The summary is filter-scoped, not page-scoped,
//! so a page past the end still reports totals.

use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use tracing::debug;

use crate::entities::{manufacturing_batches, manufacturing_costs, users, prelude::ManufacturingCosts};
use crate::models::manufacturing_cost::{
    page_links, CostFilters, CostReportResponse, CostRow, CostTypeSummary, Pagination, PAGE_SIZE,
};

pub async fn list_costs(
    db: &DatabaseConnection,
    filters: &CostFilters,
    page: u64,
) -> Result<CostReportResponse, DbErr> {
    let page = page.max(1);
    let condition = filter_condition(filters);

    let total_rows = ManufacturingCosts::find()
        .filter(condition.clone())
        .count(db)
        .await?;
    let total_pages = total_rows.div_ceil(PAGE_SIZE);

    let rows = ManufacturingCosts::find()
        .select_only()
        .columns([
            manufacturing_costs::Column::Id,
            manufacturing_costs::Column::BatchId,
            manufacturing_costs::Column::CostType,
            manufacturing_costs::Column::Amount,
            manufacturing_costs::Column::RecordedDate,
            manufacturing_costs::Column::Description,
        ])
        .column_as(manufacturing_batches::Column::BatchNumber, "batch_number")
        .column_as(users::Column::FullName, "recorded_by_name")
        .join(JoinType::InnerJoin, manufacturing_costs::Relation::Batch.def())
        .join(JoinType::LeftJoin, manufacturing_costs::Relation::Recorder.def())
        .filter(condition.clone())
        .order_by_desc(manufacturing_costs::Column::RecordedDate)
        .order_by_asc(manufacturing_costs::Column::Id)
        .offset(page.saturating_sub(1).saturating_mul(PAGE_SIZE))
        .limit(PAGE_SIZE)
        .into_model::<CostRow>()
        .all(db)
        .await?;

    let summary = ManufacturingCosts::find()
        .select_only()
        .column(manufacturing_costs::Column::CostType)
        .column_as(manufacturing_costs::Column::Id.count(), "entry_count")
        .column_as(manufacturing_costs::Column::Amount.sum(), "total_amount")
        .column_as(
            Expr::expr(Func::avg(Expr::col((
                manufacturing_costs::Entity,
                manufacturing_costs::Column::Amount,
            )))),
            "average_amount",
        )
        .filter(condition)
        .group_by(manufacturing_costs::Column::CostType)
        .order_by_desc(manufacturing_costs::Column::Amount.sum())
        .into_model::<CostTypeSummary>()
        .all(db)
        .await?;

    let grand_total: f64 = summary.iter().map(|s| s.total_amount).sum();

    debug!(
        total_rows,
        total_pages,
        page,
        grand_total,
        "Cost report computed"
    );

    Ok(CostReportResponse {
        rows,
        summary,
        grand_total,
        pagination: Pagination {
            page,
            page_size: PAGE_SIZE,
            total_rows,
            total_pages,
            links: page_links(page, total_pages),
        },
    })
}

fn filter_condition(filters: &CostFilters) -> Condition {
    let mut condition = Condition::all();
    if let Some(batch_id) = filters.batch_id {
        condition = condition.add(manufacturing_costs::Column::BatchId.eq(batch_id));
    }
    if let Some(cost_type) = filters.cost_type {
        condition = condition.add(manufacturing_costs::Column::CostType.eq(cost_type.as_str()));
    }
    // Both date bounds are inclusive
    if let Some(from) = filters.date_from {
        condition = condition.add(manufacturing_costs::Column::RecordedDate.gte(from));
    }
    if let Some(to) = filters.date_to {
        condition = condition.add(manufacturing_costs::Column::RecordedDate.lte(to));
    }
    condition
}
