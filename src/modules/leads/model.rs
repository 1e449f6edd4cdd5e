use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::schema::CreateLeadRequest;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub product_interest: Option<String>,
    pub inquiry: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A validated submission, ready to insert. Empty optional fields are stored as NULL.
#[derive(Debug, Clone)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub product_interest: Option<String>,
    pub inquiry: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl NewLead {
    pub fn from_request(request: CreateLeadRequest) -> Self {
        Self {
            name: request.name.unwrap_or_default(),
            email: request.email.unwrap_or_default(),
            company: non_empty(request.company),
            product_interest: non_empty(request.product_interest),
            inquiry: non_empty(request.inquiry),
        }
    }
}
