// categorization-engine-rs/src/engine.rs
// Ordered rule evaluation for ticket categorization
// First matching rule wins; every ticket falls through to a severity default

use crate::ticket::{ActionPlan, ActionType, Severity, TicketInput};

// Keywords pointing at a core system/code failure
const CODE_FAILURE_KEYWORDS: &[&str] = &[
    "error",
    "failure",
    "bug",
    "404",
    "500",
    "incorrect calculation",
    "database",
    "api down",
    "system crash",
];

// Keywords for sensitive financial operations
const FINANCIAL_KEYWORDS: &[&str] = &["fraud", "transaction", "payment processing"];

// Known user/account procedural issues with an existing Vibe script
const ACCOUNT_WORKFLOW_KEYWORDS: &[&str] = &[
    "forgot password",
    "reset pin",
    "locked",
    "account blocked",
    "rate limit",
    "cannot log in",
    "update address",
];

// General inquiry phrasing, matched regardless of severity
const INQUIRY_KEYWORDS: &[&str] = &["how to", "question about", "need help with", "inquire"];

// Plain substring containment, no word-boundary checks: "404" inside
// "object 40499" matches. Known behavior, kept as-is.
fn contains_any(summary_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| summary_lower.contains(kw))
}

/// Categorize a ticket into an action plan.
///
/// Rules are evaluated as a plain sequential scan in priority order and the
/// first match wins. The function is total: a ticket that matches no keyword
/// rule lands on a severity-based default. Same input always yields the same
/// plan, byte for byte.
pub fn categorize(ticket: &TicketInput) -> ActionPlan {
    let summary_lower = ticket.summary.to_lowercase();
    let severity = ticket.severity;

    // Rule 1: critical or high severity with system failure keywords
    if severity.is_urgent() && contains_any(&summary_lower, CODE_FAILURE_KEYWORDS) {
        return ActionPlan {
            decision: ActionType::AiCodePatch,
            reasoning: format!(
                "Severity is **{}** and summary suggests a core system/code failure (`{}`).",
                severity.as_str().to_uppercase(),
                ticket.summary
            ),
            next_actions_checklist: vec![
                "Verify bug is reproducible in staging environment.".to_string(),
                "Create a detailed Jira ticket linking logs.".to_string(),
                "Tag SRE team for immediate monitoring.".to_string(),
            ],
        };
    }

    // Rule 2: high severity in sensitive banking operations
    if severity == Severity::High && contains_any(&summary_lower, FINANCIAL_KEYWORDS) {
        return ActionPlan {
            decision: ActionType::AiCodePatch,
            reasoning: format!(
                "Severity is **HIGH** and involves a critical financial process (`{}`). \
                 Likely requires code audit/patch.",
                ticket.summary
            ),
            next_actions_checklist: vec![
                "Immediately freeze affected user accounts/processes.".to_string(),
                "Alert compliance and security teams.".to_string(),
                "Capture full transaction log details.".to_string(),
            ],
        };
    }

    // Rule 3: low/medium severity with account/credential keywords
    if !severity.is_urgent() && contains_any(&summary_lower, ACCOUNT_WORKFLOW_KEYWORDS) {
        return ActionPlan {
            decision: ActionType::VibeWorkflow,
            reasoning: format!(
                "Severity is **{}** and issue relates to known user/account procedural action. \
                 Vibe workflow exists.",
                severity.as_str().to_uppercase()
            ),
            next_actions_checklist: vec![
                "Run Vibe Script 'User-Account-Unblock-v1.0'.".to_string(),
                "Confirm two-factor authentication reset with user via secure channel.".to_string(),
                "Document successful run in the ticket notes.".to_string(),
            ],
        };
    }

    // Rule 4: general inquiry or request, independent of severity
    if contains_any(&summary_lower, INQUIRY_KEYWORDS) {
        return ActionPlan {
            decision: ActionType::VibeWorkflow,
            reasoning: "The ticket appears to be a general inquiry or procedural request, \
                        best handled by a documented Vibe troubleshooting script."
                .to_string(),
            next_actions_checklist: vec![
                "Check internal knowledge base for an existing Vibe script.".to_string(),
                "Reply with documented steps/FAQ link.".to_string(),
                "If no Vibe script exists, manually triage to L1 support.".to_string(),
            ],
        };
    }

    // Default A: any critical/high ticket missed above is assumed a system issue
    if severity.is_urgent() {
        return ActionPlan {
            decision: ActionType::AiCodePatch,
            reasoning: format!(
                "Default routing for **{}** tickets. System failure is the most cautious default.",
                severity.as_str().to_uppercase()
            ),
            next_actions_checklist: vec![
                "Manually triage to L2 developer support.".to_string(),
                "Review the system health dashboard immediately.".to_string(),
                "Capture full user session data.".to_string(),
            ],
        };
    }

    // Default B: remaining medium/low tickets are assumed procedural
    ActionPlan {
        decision: ActionType::VibeWorkflow,
        reasoning: "Default routing for unclassified medium/low severity tickets, \
                    assumed to be procedural."
            .to_string(),
        next_actions_checklist: vec![
            "Escalate to the appropriate L1 support queue for manual review.".to_string(),
            "Monitor ticket for 30 minutes for any change in status.".to_string(),
        ],
    }
}
