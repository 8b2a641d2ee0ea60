//! SQL for the reporting endpoints. All grouping, counting, and summing is
//! delegated to MySQL; handlers only reshape rows into response envelopes.

use sqlx::mysql::MySqlConnection;

use crate::models::reports::{
    ClientReqCountRow, ClientRow, RequirementRow, RequirementSummaryRow, RequirementTotalsRow,
    StageStatRow,
};

pub async fn active_clients(conn: &mut MySqlConnection) -> Result<Vec<ClientRow>, sqlx::Error> {
    sqlx::query_as::<_, ClientRow>("SELECT id, name FROM clients WHERE status='ACTIVE'")
        .fetch_all(conn)
        .await
}

pub async fn client_requirements(
    conn: &mut MySqlConnection,
    client_id: i32,
) -> Result<Vec<RequirementSummaryRow>, sqlx::Error> {
    sqlx::query_as::<_, RequirementSummaryRow>(
        "SELECT id, title, status, created_at FROM requirements \
         WHERE client_id=? ORDER BY created_at DESC",
    )
    .bind(client_id)
    .fetch_all(conn)
    .await
}

pub async fn requirement_by_id(
    conn: &mut MySqlConnection,
    req_id: i32,
) -> Result<Option<RequirementRow>, sqlx::Error> {
    sqlx::query_as::<_, RequirementRow>(
        "SELECT title, no_of_rounds, status FROM requirements WHERE id=?",
    )
    .bind(req_id)
    .fetch_optional(conn)
    .await
}

pub async fn requirement_stage_stats(
    conn: &mut MySqlConnection,
    req_id: i32,
) -> Result<Vec<StageStatRow>, sqlx::Error> {
    sqlx::query_as::<_, StageStatRow>(
        "SELECT stage_name, status, COUNT(*) AS count \
         FROM candidate_progress \
         WHERE requirement_id=? \
         GROUP BY stage_name, status",
    )
    .bind(req_id)
    .fetch_all(conn)
    .await
}

pub async fn requirement_candidate_total(
    conn: &mut MySqlConnection,
    req_id: i32,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(DISTINCT candidate_id) FROM candidate_progress WHERE requirement_id=?",
    )
    .bind(req_id)
    .fetch_one(conn)
    .await
}

pub async fn requirement_totals(
    conn: &mut MySqlConnection,
) -> Result<RequirementTotalsRow, sqlx::Error> {
    // SUM over an empty table is NULL and MySQL SUM yields DECIMAL; the
    // COALESCE + CAST keep both columns decodable as BIGINT.
    sqlx::query_as::<_, RequirementTotalsRow>(
        "SELECT COUNT(*) AS total, \
         CAST(COALESCE(SUM(CASE WHEN status='OPEN' THEN 1 ELSE 0 END), 0) AS SIGNED) AS open_reqs, \
         CAST(COALESCE(SUM(CASE WHEN status='CLOSED' THEN 1 ELSE 0 END), 0) AS SIGNED) AS closed_reqs \
         FROM requirements",
    )
    .fetch_one(conn)
    .await
}

pub async fn candidate_total(conn: &mut MySqlConnection) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM candidates")
        .fetch_one(conn)
        .await
}

/// Approximation, kept on purpose: the schema has no hire/offer flag, so a
/// "selection" is counted as any progress row with status COMPLETED.
pub(crate) const SELECTIONS_SQL: &str =
    "SELECT COUNT(*) FROM candidate_progress WHERE status='COMPLETED'";

pub async fn selections_count(conn: &mut MySqlConnection) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(SELECTIONS_SQL)
        .fetch_one(conn)
        .await
}

pub async fn client_requirement_counts(
    conn: &mut MySqlConnection,
) -> Result<Vec<ClientReqCountRow>, sqlx::Error> {
    sqlx::query_as::<_, ClientReqCountRow>(
        "SELECT c.name AS client_name, COUNT(r.id) AS req_count \
         FROM clients c \
         LEFT JOIN requirements r ON r.client_id = c.id \
         GROUP BY c.id, c.name",
    )
    .fetch_all(conn)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    // The queries themselves run against a live MySQL; what is pinned here
    // is the selections approximation, which must stay keyed on COMPLETED
    // progress rows rather than some inferred hire signal.
    #[test]
    fn test_selections_query_counts_completed_progress_rows() {
        assert!(SELECTIONS_SQL.contains("candidate_progress"));
        assert!(SELECTIONS_SQL.contains("status='COMPLETED'"));
        assert!(!SELECTIONS_SQL.contains("HIRED"));
    }
}
