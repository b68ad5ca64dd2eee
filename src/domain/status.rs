use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fulfillment status of an order.
///
/// The legal moves between these values live in [`crate::lifecycle`]; this type
/// only names the statuses and how they are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Created at checkout, waiting for the payment callback.
    Pending,
    /// Payment confirmed; the kitchen can start.
    Paid,
    /// Food is waiting at the counter.
    Ready,
    /// Picked up. Staff may still move it back to `Ready`.
    Completed,
    /// Never paid.
    Cancelled,
    /// Paid, then refunded before pickup.
    Refunded,
}

/// Raised when a status string does not name one of the six statuses.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown order status: {0}")]
pub struct UnknownStatus(pub String);

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Paid,
        OrderStatus::Ready,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
        OrderStatus::Refunded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Refunded => "refunded",
        }
    }

    /// Customer-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Awaiting payment",
            OrderStatus::Paid => "Preparing",
            OrderStatus::Ready => "Ready for pickup",
            OrderStatus::Completed => "Picked up",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Refunded => "Refunded",
        }
    }

    /// Text color class used by the order badges.
    pub fn color_class(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "text-amber-700",
            OrderStatus::Paid => "text-blue-700",
            OrderStatus::Ready => "text-green-700",
            OrderStatus::Completed => "text-gray-600",
            OrderStatus::Cancelled => "text-red-700",
            OrderStatus::Refunded => "text-purple-700",
        }
    }

    /// Background class paired with [`OrderStatus::color_class`].
    pub fn background_class(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "bg-amber-100",
            OrderStatus::Paid => "bg-blue-100",
            OrderStatus::Ready => "bg-green-100",
            OrderStatus::Completed => "bg-gray-100",
            OrderStatus::Cancelled => "bg-red-100",
            OrderStatus::Refunded => "bg-purple-100",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_parse_round_trips_every_status() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_and_malformed() {
        assert_eq!("shipped".parse::<OrderStatus>(), Err(UnknownStatus("shipped".into())));
        assert!("PAID".parse::<OrderStatus>().is_err());
        assert!(" paid".parse::<OrderStatus>().is_err());
        assert!("".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_every_status_has_distinct_presentation() {
        let labels: HashSet<_> = OrderStatus::ALL.iter().map(|s| s.label()).collect();
        let colors: HashSet<_> = OrderStatus::ALL.iter().map(|s| s.color_class()).collect();
        let backgrounds: HashSet<_> = OrderStatus::ALL.iter().map(|s| s.background_class()).collect();

        assert_eq!(labels.len(), OrderStatus::ALL.len());
        assert_eq!(colors.len(), OrderStatus::ALL.len());
        assert_eq!(backgrounds.len(), OrderStatus::ALL.len());
        assert!(OrderStatus::ALL.iter().all(|s| s.color_class().starts_with("text-")));
        assert!(OrderStatus::ALL.iter().all(|s| s.background_class().starts_with("bg-")));
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&OrderStatus::Refunded).unwrap();
        assert_eq!(json, "\"refunded\"");
        let parsed: OrderStatus = serde_json::from_str("\"ready\"").unwrap();
        assert_eq!(parsed, OrderStatus::Ready);
    }
}
