//! Delete confirmation workflow.
//!
//! A deletion moves through `Idle -> PendingConfirmation -> Submitting` and
//! ends either back in `Idle` (the backend accepted the request) or in
//! `PendingConfirmation` carrying the failure message so the user can retry.
//! The confirmation secret is compared verbatim; it is a guard against
//! accidental clicks and not an authorization mechanism.

use serde::Serialize;
use thiserror::Error;

use crate::domain::types::CustomerId;

/// Message shown when the confirmation string does not match.
pub const INCORRECT_PASSWORD: &str = "Incorrect password";

/// Transitions the workflow refuses to make from its current state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeleteError {
    #[error("no deletion is awaiting confirmation")]
    NotPending,
    #[error("a deletion is already being submitted")]
    AlreadySubmitting,
    #[error("no deletion is being submitted")]
    NotSubmitting,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DeleteWorkflow {
    #[default]
    Idle,
    PendingConfirmation {
        customer_id: CustomerId,
        #[serde(skip)]
        password: String,
        error: Option<String>,
    },
    Submitting {
        customer_id: CustomerId,
        #[serde(skip)]
        password: String,
    },
}

/// Result of checking the confirmation string.
#[derive(Debug, PartialEq, Eq)]
pub enum Confirmation {
    /// The string matched; the caller must now issue the delete request.
    Submit(CustomerId),
    /// The string did not match; nothing must be sent to the backend.
    Rejected,
}

impl DeleteWorkflow {
    /// Opens the confirmation dialog for `customer_id`, discarding any earlier input.
    pub fn request(&mut self, customer_id: CustomerId) -> Result<(), DeleteError> {
        if self.is_submitting() {
            return Err(DeleteError::AlreadySubmitting);
        }
        *self = DeleteWorkflow::PendingConfirmation {
            customer_id,
            password: String::new(),
            error: None,
        };
        Ok(())
    }

    pub fn set_password(&mut self, value: impl Into<String>) -> Result<(), DeleteError> {
        match self {
            DeleteWorkflow::PendingConfirmation { password, .. } => {
                *password = value.into();
                Ok(())
            }
            DeleteWorkflow::Submitting { .. } => Err(DeleteError::AlreadySubmitting),
            DeleteWorkflow::Idle => Err(DeleteError::NotPending),
        }
    }

    /// Compares the entered password with `secret` and moves to `Submitting` on a match.
    pub fn confirm(&mut self, secret: &str) -> Result<Confirmation, DeleteError> {
        match self {
            DeleteWorkflow::PendingConfirmation {
                customer_id,
                password,
                error,
            } => {
                if password.as_str() != secret {
                    *error = Some(INCORRECT_PASSWORD.to_string());
                    return Ok(Confirmation::Rejected);
                }
                let customer_id = *customer_id;
                let password = std::mem::take(password);
                *self = DeleteWorkflow::Submitting {
                    customer_id,
                    password,
                };
                Ok(Confirmation::Submit(customer_id))
            }
            DeleteWorkflow::Submitting { .. } => Err(DeleteError::AlreadySubmitting),
            DeleteWorkflow::Idle => Err(DeleteError::NotPending),
        }
    }

    /// The backend accepted the deletion; the dialog closes and input is cleared.
    pub fn succeeded(&mut self) -> Result<CustomerId, DeleteError> {
        match *self {
            DeleteWorkflow::Submitting { customer_id, .. } => {
                *self = DeleteWorkflow::Idle;
                Ok(customer_id)
            }
            _ => Err(DeleteError::NotSubmitting),
        }
    }

    /// The deletion failed; the dialog stays open showing `message` with the
    /// entered password kept for a retry.
    pub fn failed(&mut self, message: impl Into<String>) -> Result<(), DeleteError> {
        match self {
            DeleteWorkflow::Submitting {
                customer_id,
                password,
            } => {
                let customer_id = *customer_id;
                let password = std::mem::take(password);
                *self = DeleteWorkflow::PendingConfirmation {
                    customer_id,
                    password,
                    error: Some(message.into()),
                };
                Ok(())
            }
            _ => Err(DeleteError::NotSubmitting),
        }
    }

    pub fn cancel(&mut self) -> Result<(), DeleteError> {
        if self.is_submitting() {
            return Err(DeleteError::AlreadySubmitting);
        }
        *self = DeleteWorkflow::Idle;
        Ok(())
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, DeleteWorkflow::Submitting { .. })
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, DeleteWorkflow::Idle)
    }

    pub fn target(&self) -> Option<CustomerId> {
        match self {
            DeleteWorkflow::Idle => None,
            DeleteWorkflow::PendingConfirmation { customer_id, .. }
            | DeleteWorkflow::Submitting { customer_id, .. } => Some(*customer_id),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            DeleteWorkflow::PendingConfirmation { error, .. } => error.as_deref(),
            _ => None,
        }
    }
}
