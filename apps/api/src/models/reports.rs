//! Row types for the reporting queries. The tables belong to the wider ATS
//! schema; this service reads them and never writes.

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

/// An active client, as listed by GET /api/reports/clients.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ClientRow {
    pub id: i32,
    pub name: String,
}

/// One requirement in a client's listing, newest first.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RequirementSummaryRow {
    pub id: i32,
    pub title: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

/// Header fields of a single requirement, for the stats endpoint.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RequirementRow {
    pub title: String,
    pub no_of_rounds: i32,
    pub status: String,
}

/// Funnel cell: candidate count at one (stage, status) pair.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct StageStatRow {
    pub stage_name: String,
    pub status: String,
    pub count: i64,
}

/// Requirement totals broken down by OPEN/CLOSED status.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RequirementTotalsRow {
    pub total: i64,
    pub open_reqs: i64,
    pub closed_reqs: i64,
}

/// Requirement count per client, including clients with none.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ClientReqCountRow {
    pub client_name: String,
    pub req_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirement_summary_serializes_expected_keys() {
        let row = RequirementSummaryRow {
            id: 7,
            title: "Backend Engineer".to_string(),
            status: "OPEN".to_string(),
            created_at: NaiveDateTime::parse_from_str("2025-03-01 10:00:00", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
        };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["title"], "Backend Engineer");
        assert_eq!(value["status"], "OPEN");
        assert!(value.get("created_at").is_some());
    }

    #[test]
    fn test_stage_stat_serializes_count_as_number() {
        let row = StageStatRow {
            stage_name: "Screening".to_string(),
            status: "IN_PROGRESS".to_string(),
            count: 4,
        };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["count"], 4);
    }
}
