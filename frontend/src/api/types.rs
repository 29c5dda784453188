use leptos::*;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Declares a backend status vocabulary. Known values map to variants, anything
/// else is kept verbatim in `Other` so the UI can still render it.
macro_rules! wire_enum {
    ($name:ident, default = $default:ident, { $($variant:ident => $wire:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            pub fn known() -> Vec<$name> {
                vec![$($name::$variant),+]
            }

            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $wire,)+
                    $name::Other(raw) => raw.as_str(),
                }
            }

            pub fn label(&self) -> String {
                self.as_str().replace('_', " ")
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($wire => $name::$variant,)+
                    _ => $name::Other(value),
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $($name::$variant => $wire.to_string(),)+
                    $name::Other(raw) => raw,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum!(PrStatus, default = Draft, {
    Draft => "DRAFT",
    PendingApproval => "PENDING_APPROVAL",
    Approved => "APPROVED",
    Rejected => "REJECTED",
    Completed => "COMPLETED",
});

wire_enum!(ApprovalStatus, default = Pending, {
    Pending => "PENDING",
    Approved => "APPROVED",
    Rejected => "REJECTED",
});

wire_enum!(Severity, default = Medium, {
    Critical => "CRITICAL",
    High => "HIGH",
    Medium => "MEDIUM",
    Low => "LOW",
});

wire_enum!(ExceptionStatus, default = Open, {
    Open => "OPEN",
    Resolved => "RESOLVED",
    Escalated => "ESCALATED",
});

/// Backend ids are numeric for some resources and strings for others.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(value) => Ok(value),
        Value::Number(value) => Ok(value.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

/// Backend columns are nullable; an explicit `null` decodes like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    pub pr_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub estimated_value_inr: Option<f64>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: PrStatus,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub justification: Option<String>,
    #[serde(default)]
    pub required_by_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePurchaseRequest {
    pub description: String,
    pub category: String,
    pub department: String,
    pub estimated_value_inr: f64,
    pub required_by_date: Option<String>,
    pub justification: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Approval {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pr_id: String,
    #[serde(default)]
    pub approval_level: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ApprovalStatus,
    #[serde(default)]
    pub approver_name: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rule_id: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub field_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub operator: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rule_value: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub severity: Severity,
    /// A missing flag means active; an explicit `null` reads as inactive.
    #[serde(default = "default_true", deserialize_with = "null_as_default")]
    pub active: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub automatable: bool,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Rule {
    pub fn condition(&self) -> String {
        format!("{} {} {}", self.field_name, self.operator, self.rule_value)
            .trim()
            .to_string()
    }

    pub fn to_draft(&self) -> RuleDraft {
        RuleDraft {
            rule_id: Some(self.rule_id.clone()).filter(|id| !id.trim().is_empty()),
            category: self.category.clone(),
            field_name: self.field_name.clone(),
            operator: self.operator.clone(),
            rule_value: self.rule_value.clone(),
            description: self.description.clone(),
            action: self.action.clone(),
            severity: self.severity.clone(),
            active: self.active,
            automatable: self.automatable,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDraft {
    /// Left out on create so the backend assigns the next `RULE-nnn` id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub field_name: String,
    pub operator: String,
    pub rule_value: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    pub severity: Severity,
    pub active: bool,
    pub automatable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionRecord {
    pub exception_id: String,
    #[serde(default)]
    pub pr_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub severity: Severity,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ExceptionStatus,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSummary {
    #[serde(rename = "totalPRs", deserialize_with = "null_as_default")]
    pub total_prs: u64,
    #[serde(rename = "pendingApprovals", deserialize_with = "null_as_default")]
    pub pending_approvals: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub approved: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub drafts: u64,
    #[serde(rename = "activeExceptions", deserialize_with = "null_as_default")]
    pub active_exceptions: u64,
    #[serde(rename = "totalValue", deserialize_with = "null_as_default")]
    pub total_value: f64,
}

/// The signed-in user as persisted by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    #[serde(default, alias = "full_name", alias = "fullName", alias = "displayName")]
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionPayload {
    pub comments: String,
    pub approver_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectionPayload {
    pub reason: String,
    pub approver_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionPayload {
    pub resolution: String,
    pub resolved_by: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscalationPayload {
    pub reason: String,
    pub escalated_by: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "NOT_FOUND".to_string(),
            details: Some(serde_json::json!({ "status": 404 })),
        }
    }

    pub fn server_error(status: u16, msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "SERVER_ERROR".to_string(),
            details: Some(serde_json::json!({ "status": status })),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.code == "NOT_FOUND"
    }

    pub fn status(&self) -> Option<u16> {
        self.details
            .as_ref()
            .and_then(|details| details.get("status"))
            .and_then(Value::as_u64)
            .and_then(|status| u16::try_from(status).ok())
    }
}
