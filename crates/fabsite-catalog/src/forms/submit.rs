//! Form submission.

use crate::error::CatalogError;
use crate::forms::request::{NewsletterSignup, OrderRequest};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Something a [`Submitter`] can accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Submission {
    Order(OrderRequest),
    Newsletter(NewsletterSignup),
}

impl Submission {
    pub fn validate(&self) -> Result<(), CatalogError> {
        match self {
            Submission::Order(order) => order.validate()?,
            Submission::Newsletter(signup) => signup.validate()?,
        }
        Ok(())
    }
}

/// Acknowledgement shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub message: String,
}

/// Delivers validated submissions somewhere.
pub trait Submitter {
    fn submit(&self, submission: &Submission) -> Result<Confirmation, CatalogError>;
}

/// Logs the submission and confirms it without any network I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfirmationSubmitter;

impl Submitter for ConfirmationSubmitter {
    fn submit(&self, submission: &Submission) -> Result<Confirmation, CatalogError> {
        let message = match submission {
            Submission::Order(order) => {
                info!(product = %order.product, email = %order.email, "order request received");
                format!(
                    "Thank you, {}! We will contact you about {} shortly.",
                    order.name.trim(),
                    order.product.trim()
                )
            }
            Submission::Newsletter(signup) => {
                info!(source = %signup.source, email = %signup.email, "newsletter signup received");
                "Thank you for subscribing!".to_string()
            }
        };
        Ok(Confirmation { message })
    }
}

/// Validate, then hand off to `submitter`. Nothing is sent if any field fails.
pub fn submit<S: Submitter + ?Sized>(
    submitter: &S,
    submission: &Submission,
) -> Result<Confirmation, CatalogError> {
    submission.validate()?;
    submitter.submit(submission)
}
