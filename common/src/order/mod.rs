//! Order submission state machine.
//!
//! The submitter never performs I/O itself. The caller drives it in two steps:
//!
//! 1. `begin` snapshots the ledger into an `Order` and moves to `Submitting`.
//!    It refuses (returns `None`) when the cart is empty or a request is
//!    already in flight, so at most one request exists at a time.
//! 2. Once the request completes the caller hands the outcome to `settle`,
//!    which clears the ledger on success or leaves it alone on failure, and
//!    always moves back to `Idle`.
//!
//! There is no retry, timeout or cancellation; a request that never settles
//! keeps the submitter in `Submitting`.

use crate::cart::CartLedger;
use crate::model::order::{Customer, Order};
use thiserror::Error;

/// Why an order did not reach the kitchen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("could not encode order: {0}")]
    Encode(String),

    #[error("order endpoint unreachable: {0}")]
    Transport(String),

    #[error("order endpoint answered with status {0}")]
    Rejected(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// What `settle` did with an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    /// The order went through and the cart was cleared.
    Placed,
    /// The order failed; the cart is untouched.
    Failed(SubmitError),
    /// Nothing was in flight, so the outcome was dropped.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct OrderSubmitter {
    restaurant_id: String,
    phase: SubmitPhase,
    success_visible: bool,
}

impl OrderSubmitter {
    pub fn new(restaurant_id: impl Into<String>) -> Self {
        Self {
            restaurant_id: restaurant_id.into(),
            phase: SubmitPhase::Idle,
            success_visible: false,
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Whether the "order placed" confirmation should be on screen.
    pub fn success_visible(&self) -> bool {
        self.success_visible
    }

    pub fn dismiss_success(&mut self) {
        self.success_visible = false;
    }

    /// Starts a submission and returns the order to send, if one may be sent.
    pub fn begin(
        &mut self,
        ledger: &CartLedger,
        customer: Customer,
        timestamp: u64,
    ) -> Option<Order> {
        if ledger.is_empty() || self.is_submitting() {
            return None;
        }
        self.phase = SubmitPhase::Submitting;

        Some(Order {
            restaurant_id: self.restaurant_id.clone(),
            items: ledger.lines().to_vec(),
            customer,
            total: ledger.compute_total(),
            timestamp,
        })
    }

    /// Applies the outcome of the request started by `begin`.
    pub fn settle(
        &mut self,
        ledger: &mut CartLedger,
        outcome: Result<(), SubmitError>,
    ) -> Settlement {
        if !self.is_submitting() {
            return Settlement::Ignored;
        }
        self.phase = SubmitPhase::Idle;

        match outcome {
            Ok(()) => {
                ledger.clear();
                self.success_visible = true;
                Settlement::Placed
            }
            Err(err) => Settlement::Failed(err),
        }
    }
}
