use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeadRequest {
    #[validate(
        required(message = "Name and email are required"),
        length(min = 1, message = "Name and email are required")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "Name and email are required"),
        length(min = 1, message = "Name and email are required")
    )]
    pub email: Option<String>,
    pub company: Option<String>,
    #[serde(alias = "product_interest")]
    pub product_interest: Option<String>,
    pub inquiry: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LeadCreatedResponse {
    pub success: bool,
    pub message: String,
}
