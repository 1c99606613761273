// crates/db/src/migrations.rs
//! Inline schema migrations, applied in order by version number.
//!
//! Never edit an existing entry; append a new one. The `_migrations`
//! table in `lib.rs` tracks which versions have been applied.

pub const MIGRATIONS: &[&str] = &[
    // v1: scoring history
    r#"CREATE TABLE IF NOT EXISTS predictions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        applicant_id TEXT NOT NULL,
        credit_score INTEGER NOT NULL,
        default_probability REAL NOT NULL,
        risk_level TEXT NOT NULL,
        explanation TEXT,
        warnings TEXT NOT NULL DEFAULT '[]',

        -- Input features
        grade_numeric REAL,
        int_rate REAL,
        inq_last_6mths REAL,
        revol_util REAL,
        installment REAL,
        dti REAL,
        open_acc REAL,
        loan_amnt REAL,
        annual_inc REAL,
        credit_history_months REAL,

        -- Server-computed ratios
        installment_to_income REAL,
        loan_to_income REAL,

        -- Metadata
        created_at INTEGER NOT NULL,
        response_time_ms REAL
    )"#,
    // v2: lookup indexes
    "CREATE INDEX IF NOT EXISTS idx_predictions_applicant_id ON predictions(applicant_id)",
    "CREATE INDEX IF NOT EXISTS idx_predictions_created_at ON predictions(created_at)",
];
