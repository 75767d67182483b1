//! The contact form.

use pathwise_types::api::ContactRequest;
use pathwise_types::error::{BackendError, ValidationError};
use pathwise_types::ui::{MessageSlot, UiEffect};
use tracing::warn;

use super::{Controller, NETWORK_ERROR};
use crate::backend::Backend;
use crate::validate::validate_email;

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

pub fn check_contact(form: &ContactForm) -> Result<(), ValidationError> {
    if [&form.name, &form.email, &form.subject, &form.message]
        .iter()
        .any(|field| field.is_empty())
    {
        return Err(ValidationError::MissingFields);
    }
    if !validate_email(&form.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

impl<B: Backend> Controller<B> {
    pub async fn contact(&self, form: &ContactForm) -> Vec<UiEffect> {
        let mut fx = self.effects();
        if let Err(err) = check_contact(form) {
            fx.error(MessageSlot::Contact, err.to_string());
            return fx.finish();
        }

        let request = ContactRequest {
            name: &form.name,
            email: &form.email,
            subject: &form.subject,
            message: &form.message,
        };
        match self.backend.contact(&request).await {
            Ok(response) => fx.success(MessageSlot::Contact, response.message),
            Err(BackendError::Rejected { detail, .. }) => fx.error(MessageSlot::Contact, detail),
            Err(err) => {
                warn!(error = %err, "Contact request failed");
                fx.error(MessageSlot::Contact, NETWORK_ERROR);
            }
        }
        fx.finish()
    }
}
