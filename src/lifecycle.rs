//! Order status lifecycle.
//!
//! [`TRANSITIONS`] is the only definition of which status changes are legal.
//! The order actor checks it before every status write, and the admin and
//! customer views get their action lists from [`available_actions`] or from the
//! serialized [`table_snapshot`], so what the UI offers and what the write path
//! accepts cannot drift apart.
//!
//! Everything here is pure. Atomicity of "read status, validate, write" is the
//! order actor's job.

use serde::Serialize;
use thiserror::Error;

use crate::domain::OrderStatus;

/// Current status and the statuses it may move to.
pub const TRANSITIONS: &[(OrderStatus, &[OrderStatus])] = &[
    (OrderStatus::Pending, &[OrderStatus::Paid, OrderStatus::Cancelled]),
    (OrderStatus::Paid, &[OrderStatus::Ready, OrderStatus::Refunded]),
    (
        OrderStatus::Ready,
        &[OrderStatus::Completed, OrderStatus::Paid, OrderStatus::Refunded],
    ),
    (OrderStatus::Completed, &[OrderStatus::Ready]),
    (OrderStatus::Cancelled, &[]),
    (OrderStatus::Refunded, &[]),
];

/// Legal transitions that step back one stage; staff are asked to confirm these.
const UNDO_TRANSITIONS: &[(OrderStatus, OrderStatus)] = &[
    (OrderStatus::Ready, OrderStatus::Paid),
    (OrderStatus::Completed, OrderStatus::Ready),
];

/// A rejected status change.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Invalid status transition from {current} to {requested} (allowed: {})", format_statuses(.allowed))]
pub struct InvalidTransition {
    pub current: OrderStatus,
    pub requested: OrderStatus,
    pub allowed: Vec<OrderStatus>,
}

/// A button the UI may render for an order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusAction {
    pub target: OrderStatus,
    pub label: &'static str,
    pub is_undo: bool,
}

/// One row of the transition table in the shape the UI consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionRule {
    pub status: OrderStatus,
    pub label: &'static str,
    pub color_class: &'static str,
    pub background_class: &'static str,
    pub terminal: bool,
    pub allowed: Vec<OrderStatus>,
    pub undo: Vec<OrderStatus>,
}

/// Statuses `current` may move to. Empty for terminal statuses.
pub fn valid_transitions(current: OrderStatus) -> &'static [OrderStatus] {
    TRANSITIONS
        .iter()
        .find(|(status, _)| *status == current)
        .map(|(_, allowed)| *allowed)
        .unwrap_or(&[])
}

pub fn is_valid_transition(current: OrderStatus, requested: OrderStatus) -> bool {
    valid_transitions(current).contains(&requested)
}

/// [`valid_transitions`] for a raw status string; unknown strings have no moves.
pub fn valid_transitions_str(current: &str) -> &'static [OrderStatus] {
    current
        .parse::<OrderStatus>()
        .map(valid_transitions)
        .unwrap_or(&[])
}

/// [`is_valid_transition`] for raw status strings; false if either is unknown.
pub fn is_valid_transition_str(current: &str, requested: &str) -> bool {
    match (current.parse::<OrderStatus>(), requested.parse::<OrderStatus>()) {
        (Ok(current), Ok(requested)) => is_valid_transition(current, requested),
        _ => false,
    }
}

/// True for `cancelled` and `refunded`. `completed` can still go back to `ready`.
pub fn is_terminal(status: OrderStatus) -> bool {
    valid_transitions(status).is_empty()
}

/// Labels a transition as an undo. Says nothing about whether it is allowed.
pub fn is_undo(current: OrderStatus, requested: OrderStatus) -> bool {
    UNDO_TRANSITIONS.contains(&(current, requested))
}

pub fn describe_rejection(current: OrderStatus, requested: OrderStatus) -> String {
    let allowed = valid_transitions(current);
    if allowed.is_empty() {
        format!("Order is {current}, which is a terminal status; it cannot move to {requested}")
    } else {
        format!(
            "Order is {current} and cannot move to {requested}; {current} only allows transitioning to {}",
            format_statuses(allowed)
        )
    }
}

/// Checks a requested change against the table.
///
/// # Errors
/// Returns [`InvalidTransition`] carrying the allowed set when `requested` is
/// not reachable from `current`.
pub fn validate_transition(current: OrderStatus, requested: OrderStatus) -> Result<(), InvalidTransition> {
    if is_valid_transition(current, requested) {
        Ok(())
    } else {
        Err(InvalidTransition {
            current,
            requested,
            allowed: valid_transitions(current).to_vec(),
        })
    }
}

pub fn available_actions(current: OrderStatus) -> Vec<StatusAction> {
    valid_transitions(current)
        .iter()
        .map(|&target| StatusAction {
            target,
            label: target.label(),
            is_undo: is_undo(current, target),
        })
        .collect()
}

/// The whole table, serializable for clients that render order actions.
pub fn table_snapshot() -> Vec<TransitionRule> {
    OrderStatus::ALL
        .into_iter()
        .map(|status| {
            let allowed = valid_transitions(status);
            TransitionRule {
                status,
                label: status.label(),
                color_class: status.color_class(),
                background_class: status.background_class(),
                terminal: allowed.is_empty(),
                allowed: allowed.to_vec(),
                undo: allowed.iter().copied().filter(|&to| is_undo(status, to)).collect(),
            }
        })
        .collect()
}

fn format_statuses(statuses: &[OrderStatus]) -> String {
    if statuses.is_empty() {
        return "none".to_string();
    }
    statuses
        .iter()
        .map(OrderStatus::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OrderStatus::*;

    #[test]
    fn test_table_lists_every_status_once() {
        for status in OrderStatus::ALL {
            let rows = TRANSITIONS.iter().filter(|(s, _)| *s == status).count();
            assert_eq!(rows, 1, "{status} must appear exactly once in the table");
        }
        assert_eq!(TRANSITIONS.len(), OrderStatus::ALL.len());
    }

    #[test]
    fn test_valid_transitions_match_table() {
        assert_eq!(valid_transitions(Pending), &[Paid, Cancelled]);
        assert_eq!(valid_transitions(Paid), &[Ready, Refunded]);
        assert_eq!(valid_transitions(Ready), &[Completed, Paid, Refunded]);
        assert_eq!(valid_transitions(Completed), &[Ready]);
        assert!(valid_transitions(Cancelled).is_empty());
        assert!(valid_transitions(Refunded).is_empty());
    }

    #[test]
    fn test_is_valid_transition_agrees_with_valid_transitions() {
        for current in OrderStatus::ALL {
            let allowed = valid_transitions(current);
            for requested in OrderStatus::ALL {
                assert_eq!(
                    is_valid_transition(current, requested),
                    allowed.contains(&requested),
                    "{current} -> {requested}"
                );
            }
        }
    }

    #[test]
    fn test_terminal_statuses_reject_everything() {
        for requested in OrderStatus::ALL {
            assert!(!is_valid_transition(Cancelled, requested));
            assert!(!is_valid_transition(Refunded, requested));
        }
    }

    #[test]
    fn test_is_terminal() {
        assert!(is_terminal(Cancelled));
        assert!(is_terminal(Refunded));
        for status in [Pending, Paid, Ready, Completed] {
            assert!(!is_terminal(status), "{status}");
        }
    }

    #[test]
    fn test_is_undo_exactly_two_pairs() {
        let undo: Vec<_> = OrderStatus::ALL
            .into_iter()
            .flat_map(|from| OrderStatus::ALL.into_iter().map(move |to| (from, to)))
            .filter(|&(from, to)| is_undo(from, to))
            .collect();
        assert_eq!(undo, vec![(Ready, Paid), (Completed, Ready)]);
        assert!(!is_undo(Paid, Pending));
    }

    #[test]
    fn test_undo_transitions_are_also_valid() {
        for &(from, to) in UNDO_TRANSITIONS {
            assert!(is_valid_transition(from, to));
        }
    }

    #[test]
    fn test_raw_strings() {
        assert!(is_valid_transition_str("pending", "paid"));
        assert!(!is_valid_transition_str("pending", "shipped"));
        assert!(!is_valid_transition_str("shipped", "paid"));
        assert!(!is_valid_transition_str("", ""));
        assert!(valid_transitions_str("archived").is_empty());
        assert_eq!(valid_transitions_str("completed"), &[Ready]);
    }

    #[test]
    fn test_describe_rejection() {
        assert_eq!(
            describe_rejection(Cancelled, Paid),
            "Order is cancelled, which is a terminal status; it cannot move to paid"
        );
        assert_eq!(
            describe_rejection(Completed, Cancelled),
            "Order is completed and cannot move to cancelled; completed only allows transitioning to ready"
        );
        assert!(describe_rejection(Pending, Ready).ends_with("paid, cancelled"));
    }

    #[test]
    fn test_validate_transition_reports_allowed_set() {
        assert_eq!(validate_transition(Pending, Paid), Ok(()));

        let err = validate_transition(Completed, Cancelled).unwrap_err();
        assert_eq!(err.current, Completed);
        assert_eq!(err.requested, Cancelled);
        assert_eq!(err.allowed, vec![Ready]);
        assert_eq!(
            err.to_string(),
            "Invalid status transition from completed to cancelled (allowed: ready)"
        );

        let err = validate_transition(Refunded, Paid).unwrap_err();
        assert_eq!(err.to_string(), "Invalid status transition from refunded to paid (allowed: none)");
    }

    #[test]
    fn test_available_actions_flag_undo() {
        let actions = available_actions(Ready);
        assert_eq!(
            actions,
            vec![
                StatusAction { target: Completed, label: Completed.label(), is_undo: false },
                StatusAction { target: Paid, label: Paid.label(), is_undo: true },
                StatusAction { target: Refunded, label: Refunded.label(), is_undo: false },
            ]
        );
        assert!(available_actions(Refunded).is_empty());
    }

    #[test]
    fn test_table_snapshot_serializes() {
        let json = serde_json::to_value(table_snapshot()).unwrap();
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 6);

        let completed = rows.iter().find(|row| row["status"] == "completed").unwrap();
        assert_eq!(completed["terminal"], false);
        assert_eq!(completed["allowed"], serde_json::json!(["ready"]));
        assert_eq!(completed["undo"], serde_json::json!(["ready"]));

        let cancelled = rows.iter().find(|row| row["status"] == "cancelled").unwrap();
        assert_eq!(cancelled["terminal"], true);
        assert_eq!(cancelled["allowed"], serde_json::json!([]));
    }
}
