use crate::api::{ApiError, Approval, CreatePurchaseRequest, ExceptionRecord, PurchaseRequest};
use chrono::NaiveDate;
use serde_json::json;

pub const CATEGORIES: &[&str] = &[
    "IT Hardware",
    "IT Software",
    "Furniture",
    "Stationery",
    "Services",
];

/// Raw text of the create form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateFormInput {
    pub description: String,
    pub category: String,
    pub department: String,
    pub estimated_value: String,
    pub required_by_date: String,
    pub justification: String,
}

/// Turns the form into a create payload, collecting every field problem into
/// `details.errors`.
pub fn validate_create_form(input: &CreateFormInput) -> Result<CreatePurchaseRequest, ApiError> {
    let mut errors: Vec<String> = Vec::new();

    let description = input.description.trim();
    if description.is_empty() {
        errors.push("Description is required.".into());
    }
    let category = input.category.trim();
    if !CATEGORIES.contains(&category) {
        errors.push("Choose a category.".into());
    }
    let department = input.department.trim();
    if department.is_empty() {
        errors.push("Department is required.".into());
    }
    let estimated_value = match input.estimated_value.trim().replace(',', "").parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Some(value),
        _ => {
            errors.push("Estimated value must be a positive amount in INR.".into());
            None
        }
    };
    let required_by = input.required_by_date.trim();
    if !required_by.is_empty() && NaiveDate::parse_from_str(required_by, "%Y-%m-%d").is_err() {
        errors.push("Required-by date must be YYYY-MM-DD.".into());
    }
    let justification = input.justification.trim();
    if justification.is_empty() {
        errors.push("Justification is required.".into());
    }

    match estimated_value {
        Some(estimated_value_inr) if errors.is_empty() => Ok(CreatePurchaseRequest {
            description: description.to_string(),
            category: category.to_string(),
            department: department.to_string(),
            estimated_value_inr,
            required_by_date: (!required_by.is_empty()).then(|| required_by.to_string()),
            justification: justification.to_string(),
        }),
        _ => Err(ApiError {
            details: Some(json!({ "errors": errors })),
            ..ApiError::validation("Please correct the purchase request form.")
        }),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrDetail {
    pub request: PurchaseRequest,
    pub approvals: Vec<Approval>,
    pub exceptions: Vec<ExceptionRecord>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailState {
    #[default]
    Closed,
    Loading(String),
    Loaded(Box<PrDetail>),
    Failed(String, ApiError),
}

impl DetailState {
    pub fn is_open(&self) -> bool {
        !matches!(self, DetailState::Closed)
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            DetailState::Closed => None,
            DetailState::Loading(id) | DetailState::Failed(id, _) => Some(id),
            DetailState::Loaded(detail) => Some(&detail.request.pr_id),
        }
    }
}
