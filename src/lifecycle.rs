//! Order Lifecycle
//!
//! Orders move forward through fixed delivery stages and never move back.
//! Skipping ahead is allowed (a courier can mark a confirmed order delivered),
//! re-announcing the current stage is not.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Delivery stage of an order, from placement to the customer's door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OrderStatus {
    /// Placed but not yet acknowledged by the store.
    Pending,

    /// Acknowledged by the store.
    Confirmed,

    /// Picked and packed, waiting for a courier.
    Packed,

    /// With the courier.
    OnTheWay,

    /// Handed to the customer. Terminal.
    Delivered,
}

impl OrderStatus {
    /// Stages this one may move to: everything strictly later in the lifecycle.
    #[must_use]
    pub fn allowed_transitions(self) -> &'static [OrderStatus] {
        match self {
            Self::Pending => &[
                Self::Confirmed,
                Self::Packed,
                Self::OnTheWay,
                Self::Delivered,
            ],
            Self::Confirmed => &[Self::Packed, Self::OnTheWay, Self::Delivered],
            Self::Packed => &[Self::OnTheWay, Self::Delivered],
            Self::OnTheWay => &[Self::Delivered],
            Self::Delivered => &[],
        }
    }

    /// Whether the order may move from this stage to `next`.
    #[must_use]
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    /// Validate a move to `next`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTransition`] when `next` is not a later stage.
    pub fn transition_to(self, next: OrderStatus) -> Result<OrderStatus, InvalidTransition> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(InvalidTransition {
                from: self,
                to: next,
            })
        }
    }

    /// Wire name of the stage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Packed => "packed",
            Self::OnTheWay => "on_the_way",
            Self::Delivered => "delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "packed" => Ok(Self::Packed),
            "on_the_way" => Ok(Self::OnTheWay),
            "delivered" => Ok(Self::Delivered),
            other => Err(UnknownOrderStatus(other.to_string())),
        }
    }
}

/// A status string that names no delivery stage.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown order status: {0}")]
pub struct UnknownOrderStatus(pub String);

/// A status move the lifecycle does not allow.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("invalid status transition from {from} to {to}")]
pub struct InvalidTransition {
    /// Stage the order is in.
    pub from: OrderStatus,

    /// Stage the caller asked for.
    pub to: OrderStatus,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn each_forward_step_is_allowed() {
        let stages = [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Packed,
            OrderStatus::OnTheWay,
            OrderStatus::Delivered,
        ];

        for pair in stages.windows(2) {
            let [from, to] = pair else {
                panic!("windows(2) should yield pairs");
            };

            assert!(
                from.can_transition_to(*to),
                "expected {from} -> {to} to be allowed"
            );
        }
    }

    #[test]
    fn skipping_ahead_is_allowed() {
        assert!(OrderStatus::Confirmed.can_transition_to(OrderStatus::Delivered));
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::OnTheWay));
    }

    #[test]
    fn moving_backwards_is_rejected() {
        let result = OrderStatus::Delivered.transition_to(OrderStatus::Packed);

        assert_eq!(
            result,
            Err(InvalidTransition {
                from: OrderStatus::Delivered,
                to: OrderStatus::Packed,
            })
        );
    }

    #[test]
    fn re_announcing_the_current_stage_is_rejected() {
        let result = OrderStatus::Packed.transition_to(OrderStatus::Packed);

        assert!(result.is_err(), "packed -> packed should be rejected");
    }

    #[test]
    fn delivered_is_terminal() {
        assert!(OrderStatus::Delivered.allowed_transitions().is_empty());
    }

    #[test]
    fn wire_names_round_trip() -> TestResult {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Packed,
            OrderStatus::OnTheWay,
            OrderStatus::Delivered,
        ] {
            assert_eq!(status.as_str().parse::<OrderStatus>()?, status);
        }

        Ok(())
    }

    #[test]
    fn unknown_wire_name_is_rejected() {
        let result = "returned".parse::<OrderStatus>();

        assert_eq!(result, Err(UnknownOrderStatus("returned".to_string())));
    }
}
