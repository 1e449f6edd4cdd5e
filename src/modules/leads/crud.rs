use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

use crate::modules::leads::model::{Lead, NewLead};

pub struct LeadCrud {
    pool: SqlitePool,
}

struct LeadRow {
    id: i64,
    name: String,
    email: String,
    company: Option<String>,
    product_interest: Option<String>,
    inquiry: Option<String>,
    created_at: String,
}

impl LeadRow {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            company: row.try_get("company")?,
            product_interest: row.try_get("product_interest")?,
            inquiry: row.try_get("inquiry")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_lead(self) -> Result<Lead, sqlx::Error> {
        Ok(Lead {
            id: self.id,
            name: self.name,
            email: self.email,
            company: self.company,
            product_interest: self.product_interest,
            inquiry: self.inquiry,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

// Rows written by the column default use SQLite's `YYYY-MM-DD HH:MM:SS` format.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>, sqlx::Error> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl LeadCrud {
    pub fn new(pool: &SqlitePool) -> Self {
        Self { pool: pool.clone() }
    }

    pub async fn create(&self, lead: NewLead) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO leads (name, email, company, product_interest, inquiry, created_at) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(lead.name)
        .bind(lead.email)
        .bind(lead.company)
        .bind(lead.product_interest)
        .bind(lead.inquiry)
        .bind(format_datetime(&Utc::now()))
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// All leads, newest first. Row ids only grow, so insertion order does not depend on the clock.
    pub async fn find_all(&self) -> Result<Vec<Lead>, sqlx::Error> {
        let rows = sqlx::query(
            "SELECT id, name, email, company, product_interest, inquiry, created_at \
             FROM leads ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| LeadRow::from_row(row)?.into_lead())
            .collect()
    }
}
