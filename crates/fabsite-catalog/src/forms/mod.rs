//! Order and subscription forms.

mod request;
mod submit;
mod validate;

pub use request::{NewsletterSignup, OrderRequest};
pub use submit::{submit, Confirmation, ConfirmationSubmitter, Submission, Submitter};
pub use validate::{
    format_phone, is_valid_email, is_valid_name, is_valid_phone, validate_contact, Field,
    FieldError, ValidationErrors, MIN_NAME_LEN, MIN_PHONE_DIGITS,
};
