use crate::{
    api::{ApprovalStatus, ExceptionStatus, PrStatus, Severity},
    utils::format::badge_text,
};
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeTone {
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

impl BadgeTone {
    pub fn classes(self) -> &'static str {
        match self {
            BadgeTone::Neutral => "bg-gray-100 text-gray-800",
            BadgeTone::Info => "bg-blue-100 text-blue-800",
            BadgeTone::Success => "bg-green-100 text-green-800",
            BadgeTone::Warning => "bg-yellow-100 text-yellow-800",
            BadgeTone::Danger => "bg-red-100 text-red-800",
        }
    }
}

pub fn pr_status_tone(status: &PrStatus) -> BadgeTone {
    match status {
        PrStatus::Draft => BadgeTone::Neutral,
        PrStatus::PendingApproval => BadgeTone::Warning,
        PrStatus::Approved | PrStatus::Completed => BadgeTone::Success,
        PrStatus::Rejected => BadgeTone::Danger,
        PrStatus::Other(_) => BadgeTone::Neutral,
    }
}

pub fn approval_status_tone(status: &ApprovalStatus) -> BadgeTone {
    match status {
        ApprovalStatus::Pending => BadgeTone::Warning,
        ApprovalStatus::Approved => BadgeTone::Success,
        ApprovalStatus::Rejected => BadgeTone::Danger,
        ApprovalStatus::Other(_) => BadgeTone::Neutral,
    }
}

pub fn severity_tone(severity: &Severity) -> BadgeTone {
    match severity {
        Severity::Critical | Severity::High => BadgeTone::Danger,
        Severity::Medium => BadgeTone::Warning,
        Severity::Low => BadgeTone::Info,
        Severity::Other(_) => BadgeTone::Neutral,
    }
}

pub fn exception_status_tone(status: &ExceptionStatus) -> BadgeTone {
    match status {
        ExceptionStatus::Open => BadgeTone::Warning,
        ExceptionStatus::Resolved => BadgeTone::Success,
        ExceptionStatus::Escalated => BadgeTone::Danger,
        ExceptionStatus::Other(_) => BadgeTone::Neutral,
    }
}

/// Pill showing a backend status with underscores rendered as spaces.
#[component]
pub fn StatusBadge(#[prop(into)] status: String, tone: BadgeTone) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium {}",
            tone.classes()
        )>
            {badge_text(&status)}
        </span>
    }
}
