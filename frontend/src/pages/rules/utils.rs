use crate::api::{ApiError, RuleDraft, Severity};
use chrono::NaiveDate;
use serde_json::json;

/// Purchase request fields the rule engine can evaluate.
pub const FIELD_NAMES: &[(&str, &str)] = &[
    ("estimatedValueInr", "Estimated value (INR)"),
    ("requiredByDate", "Required-by date"),
];

pub const OPERATORS: &[&str] = &[">", ">=", "<", "<=", "=="];

/// Rules filed under this category apply to every purchase request.
pub const ALL_CATEGORIES: &str = "ALL";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleFilter {
    pub category: String,
    pub active_only: bool,
}

impl RuleFilter {
    pub fn category_param(&self) -> Option<&str> {
        Some(self.category.trim()).filter(|category| !category.is_empty())
    }

    pub fn active_param(&self) -> Option<bool> {
        self.active_only.then_some(true)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuleFormInput {
    pub rule_id: String,
    pub category: String,
    pub field_name: String,
    pub operator: String,
    pub rule_value: String,
    pub description: String,
    pub action: String,
    pub severity: Severity,
    pub automatable: bool,
}

impl Default for RuleFormInput {
    fn default() -> Self {
        Self {
            rule_id: String::new(),
            category: ALL_CATEGORIES.to_string(),
            field_name: FIELD_NAMES[0].0.to_string(),
            operator: OPERATORS[0].to_string(),
            rule_value: String::new(),
            description: String::new(),
            action: String::new(),
            severity: Severity::Medium,
            automatable: false,
        }
    }
}

fn optional(value: &str) -> Option<String> {
    Some(value.trim().to_string()).filter(|value| !value.is_empty())
}

/// `YYYY-MM-DD`, `CURRENT_DATE` or `CURRENT_DATE+<days>`.
fn is_date_value(value: &str) -> bool {
    match value.strip_prefix("CURRENT_DATE") {
        Some("") => true,
        Some(offset) => offset
            .strip_prefix('+')
            .is_some_and(|days| days.parse::<u32>().is_ok()),
        None => NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok(),
    }
}

/// Builds a new, active rule from the form. A blank rule id is left for the
/// backend to assign.
pub fn validate_rule_form(input: &RuleFormInput) -> Result<RuleDraft, ApiError> {
    let mut errors: Vec<String> = Vec::new();

    let field_name = input.field_name.trim();
    if !FIELD_NAMES.iter().any(|(name, _)| *name == field_name) {
        errors.push("Choose a field to evaluate.".into());
    }
    let operator = input.operator.trim();
    if !OPERATORS.contains(&operator) {
        errors.push("Choose a comparison operator.".into());
    }
    let rule_value = input.rule_value.trim();
    if rule_value.is_empty() {
        errors.push("Rule value is required.".into());
    } else if field_name == "estimatedValueInr" && rule_value.parse::<f64>().is_err() {
        errors.push("Rule value must be a number for estimated value rules.".into());
    } else if field_name == "requiredByDate" && !is_date_value(rule_value) {
        errors.push("Rule value must be YYYY-MM-DD or CURRENT_DATE+days.".into());
    }
    if field_name == "requiredByDate" && operator == "==" {
        errors.push("Date rules support <, <=, > and >= only.".into());
    }
    let description = input.description.trim();
    if description.is_empty() {
        errors.push("Description is required.".into());
    }

    if !errors.is_empty() {
        return Err(ApiError {
            details: Some(json!({ "errors": errors })),
            ..ApiError::validation("Please correct the rule form.")
        });
    }

    Ok(RuleDraft {
        rule_id: optional(&input.rule_id),
        category: optional(&input.category),
        field_name: field_name.to_string(),
        operator: operator.to_string(),
        rule_value: rule_value.to_string(),
        description: description.to_string(),
        action: optional(&input.action),
        severity: input.severity.clone(),
        active: true,
        automatable: input.automatable,
    })
}
