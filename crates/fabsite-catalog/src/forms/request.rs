//! Form payloads.

use crate::forms::validate::{is_valid_email, validate_contact, Field, ValidationErrors};
use serde::{Deserialize, Serialize};

/// An equipment order or service request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub product: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl OrderRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        product: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            product: product.into(),
            company: None,
            message: None,
        }
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Every field error at once.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = validate_contact(&self.name, &self.email, &self.phone);
        if self.product.trim().is_empty() {
            errors.push(Field::Product, "Please choose a product");
        }
        errors.into_result()
    }
}

/// A newsletter subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterSignup {
    pub email: String,
    /// Page or widget the signup came from.
    pub source: String,
}

impl NewsletterSignup {
    pub fn new(email: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            source: source.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if !is_valid_email(&self.email) {
            errors.push(Field::Email, "Please enter a valid email");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_validation() {
        let order = OrderRequest::new("Anna", "anna@fab.example", "+7 999 123 45 67", "pvd-200")
            .with_company("Fab LLC");
        assert!(order.validate().is_ok());

        let bad = OrderRequest::new("A", "anna", "+7 999", " ");
        let errors = bad.validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.get(Field::Product).is_some());
    }

    #[test]
    fn test_signup_validation() {
        assert!(NewsletterSignup::new("a@b.co", "news").validate().is_ok());
        let errors = NewsletterSignup::new("a@b", "news").validate().unwrap_err();
        assert_eq!(errors.get(Field::Email), Some("Please enter a valid email"));
    }

    #[test]
    fn test_optional_fields_skipped_in_json() {
        let json = serde_json::to_value(OrderRequest::new("Anna", "a@b.co", "1", "x")).unwrap();
        assert!(json.get("company").is_none());
    }
}
