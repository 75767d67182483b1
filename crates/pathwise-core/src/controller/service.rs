//! The five assessment forms, driven by one flow.
//!
//! Each form is described by a [`ServiceDescriptor`]; this module only
//! knows the shared steps: check inputs, mark the submit control busy,
//! post, write the result, replay history when the backend flagged it, and
//! restore the control.
//!
//! [`ServiceDescriptor`]: pathwise_types::service::ServiceDescriptor

use pathwise_types::error::BackendError;
use pathwise_types::service::{ServiceKind, SubmitState};
use pathwise_types::ui::{MessageSlot, UiEffect};
use tracing::{debug, warn};

use super::Controller;
use crate::backend::Backend;
use crate::service::{ServiceInputs, request_body};

/// Written to the output field when no response arrived.
pub const SERVICE_ERROR: &str = "Error occurred";

impl<B: Backend> Controller<B> {
    /// Submit one assessment form.
    pub async fn submit_service(
        &mut self,
        kind: ServiceKind,
        inputs: &ServiceInputs,
    ) -> Vec<UiEffect> {
        let descriptor = kind.descriptor();
        let mut fx = self.effects();

        let body = match request_body(descriptor, inputs) {
            Ok(body) => body,
            Err(err) => {
                fx.error(MessageSlot::Service(kind), err.to_string());
                return fx.finish();
            }
        };

        fx.push(UiEffect::SetSubmitState {
            kind,
            state: SubmitState::Processing,
        });

        debug!(service = %kind, endpoint = descriptor.endpoint, "Submitting service form");
        match self
            .backend
            .submit_service(descriptor.endpoint, self.session.session_id(), &body)
            .await
        {
            Ok(response) => {
                fx.push(UiEffect::SetOutput {
                    kind,
                    text: response.response.clone().unwrap_or_default(),
                });
                if let Some(history) = response.replay_history() {
                    let messages = self.transcript.replay(history).to_vec();
                    fx.push(UiEffect::ReplaceTranscript(messages));
                }
            }
            Err(BackendError::Rejected { status, detail }) => {
                warn!(service = %kind, status, "Service request rejected by backend");
                fx.push(UiEffect::SetOutput { kind, text: detail });
            }
            Err(err) => {
                warn!(service = %kind, error = %err, "Service request failed");
                fx.push(UiEffect::SetOutput {
                    kind,
                    text: SERVICE_ERROR.to_string(),
                });
            }
        }

        fx.push(UiEffect::SetSubmitState {
            kind,
            state: descriptor.idle_state(),
        });
        fx.finish()
    }
}
