// crates/db/src/queries.rs
// Prediction history CRUD and aggregate statistics.

use std::collections::BTreeMap;

use chrono::Utc;
use lendscore_core::{ApplicantInput, DerivedRatios, ScoringResult};
use serde::Serialize;

use crate::{Database, DbResult};

/// One scoring outcome ready to persist: the immutable result plus the
/// input it was derived from.
#[derive(Debug)]
pub struct NewPrediction<'a> {
    pub result: &'a ScoringResult,
    pub input: &'a ApplicantInput,
    pub ratios: DerivedRatios,
    pub response_time_ms: f64,
}

/// A stored prediction, as returned by the history queries.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionRow {
    pub id: i64,
    pub applicant_id: String,
    pub credit_score: i64,
    pub default_probability: f64,
    pub risk_level: String,
    pub explanation: Option<String>,
    /// Unix seconds.
    pub created_at: i64,
}

impl<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow> for PredictionRow {
    fn from_row(row: &'r sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        use sqlx::Row;
        Ok(Self {
            id: row.try_get("id")?,
            applicant_id: row.try_get("applicant_id")?,
            credit_score: row.try_get("credit_score")?,
            default_probability: row.try_get("default_probability")?,
            risk_level: row.try_get("risk_level")?,
            explanation: row.try_get("explanation")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

/// Aggregate statistics over the prediction history.
#[derive(Debug, Clone, Serialize)]
pub struct StatsOverview {
    pub total_predictions: i64,
    /// risk level → prediction count.
    pub by_risk_level: BTreeMap<String, i64>,
    pub avg_credit_score: f64,
    /// Predictions recorded in the last 24 hours.
    pub last_24h: i64,
}

impl Database {
    /// Persist one scoring outcome. Returns the new row id.
    pub async fn insert_prediction(&self, prediction: &NewPrediction<'_>) -> DbResult<i64> {
        let result = prediction.result;
        let input = prediction.input;
        // Warning codes are stored as a JSON array for later analysis.
        let warnings =
            serde_json::to_string(&result.warnings).unwrap_or_else(|_| "[]".to_string());

        let row = sqlx::query(
            r#"INSERT INTO predictions (
                applicant_id, credit_score, default_probability, risk_level,
                explanation, warnings,
                grade_numeric, int_rate, inq_last_6mths, revol_util, installment,
                dti, open_acc, loan_amnt, annual_inc, credit_history_months,
                installment_to_income, loan_to_income,
                created_at, response_time_ms
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&result.applicant_id)
        .bind(result.credit_score)
        .bind(result.default_probability)
        .bind(result.risk_level.as_str())
        .bind(&result.explanation)
        .bind(warnings)
        .bind(input.grade_numeric)
        .bind(input.int_rate)
        .bind(input.inq_last_6mths)
        .bind(input.revol_util)
        .bind(input.installment)
        .bind(input.dti)
        .bind(input.open_acc)
        .bind(input.loan_amnt)
        .bind(input.annual_inc)
        .bind(input.credit_history_months)
        .bind(prediction.ratios.installment_to_income)
        .bind(prediction.ratios.loan_to_income)
        .bind(Utc::now().timestamp())
        .bind(prediction.response_time_ms)
        .execute(self.pool())
        .await?;

        Ok(row.last_insert_rowid())
    }

    /// Aggregate statistics for the monitoring endpoint.
    pub async fn stats_overview(&self) -> DbResult<StatsOverview> {
        let (total_predictions,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM predictions")
                .fetch_one(self.pool())
                .await?;

        let level_rows: Vec<(String, i64)> = sqlx::query_as(
            "SELECT risk_level, COUNT(*) FROM predictions GROUP BY risk_level",
        )
        .fetch_all(self.pool())
        .await?;
        let by_risk_level = level_rows.into_iter().collect();

        let (avg_credit_score,): (Option<f64>,) =
            sqlx::query_as("SELECT AVG(credit_score) FROM predictions")
                .fetch_one(self.pool())
                .await?;

        let cutoff = Utc::now().timestamp() - 24 * 3600;
        let (last_24h,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM predictions WHERE created_at > ?")
                .bind(cutoff)
                .fetch_one(self.pool())
                .await?;

        Ok(StatsOverview {
            total_predictions,
            by_risk_level,
            avg_credit_score: avg_credit_score.unwrap_or(0.0),
            last_24h,
        })
    }

    /// Most recent predictions, newest first.
    pub async fn recent_predictions(&self, limit: i64) -> DbResult<Vec<PredictionRow>> {
        let rows: Vec<PredictionRow> = sqlx::query_as(
            r#"SELECT id, applicant_id, credit_score, default_probability,
                      risk_level, explanation, created_at
               FROM predictions
               ORDER BY created_at DESC, id DESC
               LIMIT ?"#,
        )
        .bind(limit)
        .fetch_all(self.pool())
        .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lendscore_core::ScoringEngine;

    fn input(id: &str) -> ApplicantInput {
        ApplicantInput {
            applicant_id: id.to_string(),
            grade_numeric: 3.0,
            int_rate: 13.5,
            inq_last_6mths: 0.0,
            revol_util: 25.0,
            installment: 350.0,
            dti: 15.0,
            open_acc: 8.0,
            loan_amnt: 15000.0,
            annual_inc: 50000.0,
            credit_history_months: 120.0,
        }
    }

    async fn insert_one(db: &Database, id: &str) -> i64 {
        let engine = ScoringEngine::with_defaults();
        let applicant = input(id);
        let result = engine.score_applicant(&applicant).expect("accepted");
        let ratios = DerivedRatios::from_input(&applicant);
        db.insert_prediction(&NewPrediction {
            result: &result,
            input: &applicant,
            ratios,
            response_time_ms: 1.25,
        })
        .await
        .expect("insert succeeds")
    }

    #[tokio::test]
    async fn test_insert_and_read_back() {
        let db = Database::new_in_memory().await.expect("in-memory DB");
        let id = insert_one(&db, "app_db_001").await;
        assert!(id > 0);

        let rows = db.recent_predictions(10).await.expect("query succeeds");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].applicant_id, "app_db_001");
        assert_eq!(rows[0].risk_level, "Low");
        assert!(rows[0].explanation.as_deref().unwrap_or("").ends_with('.'));
    }

    #[tokio::test]
    async fn test_stats_overview() {
        let db = Database::new_in_memory().await.expect("in-memory DB");
        insert_one(&db, "app_db_001").await;
        insert_one(&db, "app_db_002").await;

        let stats = db.stats_overview().await.expect("stats query succeeds");
        assert_eq!(stats.total_predictions, 2);
        assert_eq!(stats.by_risk_level.get("Low"), Some(&2));
        assert!(stats.avg_credit_score > 0.0);
        assert_eq!(stats.last_24h, 2);
    }

    #[tokio::test]
    async fn test_stats_overview_empty() {
        let db = Database::new_in_memory().await.expect("in-memory DB");
        let stats = db.stats_overview().await.expect("stats query succeeds");
        assert_eq!(stats.total_predictions, 0);
        assert!(stats.by_risk_level.is_empty());
        assert_eq!(stats.avg_credit_score, 0.0);
    }

    #[tokio::test]
    async fn test_recent_predictions_limit_and_order() {
        let db = Database::new_in_memory().await.expect("in-memory DB");
        for i in 0..5 {
            insert_one(&db, &format!("app_{i}")).await;
        }
        let rows = db.recent_predictions(3).await.expect("query succeeds");
        assert_eq!(rows.len(), 3);
        // Same created_at second is possible; row id breaks the tie.
        assert!(rows[0].id > rows[1].id && rows[1].id > rows[2].id);
    }
}
