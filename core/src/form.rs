//! The employee form controller.
//!
//! # Design
//! `FormController` owns the field values, the per-field errors, the status
//! line and the in-flight submit marker. Submitting is split in two, like
//! the client's build/parse pair: `begin_submit` validates and hands back the
//! request to execute together with a `Ticket`; `finish_submit` takes the
//! ticket and whatever the host got back. Only the latest ticket is applied,
//! so when submits overlap an older reply can never overwrite a newer one.

use chrono::{DateTime, Utc};
use log::{debug, info, warn};

use crate::client::EmployeeClient;
use crate::error::ApiError;
use crate::field::Field;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::{FieldErrors, FormState};
use crate::validation;
use crate::view::FormView;

/// Status shown when a submit fails without a server-provided message.
pub const GENERIC_FAILURE: &str = "Submission failed";

/// Identifies one submit attempt that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// First half of a submit.
#[derive(Debug, Clone)]
pub enum SubmitStep {
    /// Validation failed; the errors are now the controller's error state
    /// and nothing should be sent.
    Rejected(FieldErrors),
    /// Execute `request`, then pass the result to `finish_submit` with
    /// `ticket`.
    Send { ticket: Ticket, request: HttpRequest },
}

/// What a submit ended up doing to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; no request was sent.
    Rejected(FieldErrors),
    /// The server accepted the employee; the form has been reset.
    Succeeded { message: Option<String> },
    /// The request failed; values and errors are unchanged.
    Failed { message: String },
    /// A newer submit (or a reset) superseded this one; nothing changed.
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct FormController {
    client: EmployeeClient,
    values: FormState,
    errors: FieldErrors,
    status: Option<String>,
    last_ticket: u64,
    in_flight: Option<Ticket>,
}

impl FormController {
    pub fn new(client: EmployeeClient) -> Self {
        Self {
            client,
            ..Self::default()
        }
    }

    pub fn client(&self) -> &EmployeeClient {
        &self.client
    }

    pub fn values(&self) -> &FormState {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<Ticket> {
        self.in_flight
    }

    /// Replace one field's value. No validation happens here.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
    }

    pub fn validate(&self) -> FieldErrors {
        self.validate_at(Utc::now())
    }

    pub fn validate_at(&self, now: DateTime<Utc>) -> FieldErrors {
        validation::validate(&self.values, now)
    }

    pub fn begin_submit(&mut self) -> Result<SubmitStep, ApiError> {
        self.begin_submit_at(Utc::now())
    }

    /// Validate against `now`; on success issue a new ticket and build the
    /// POST. A rejected submit leaves any earlier in-flight ticket alone.
    pub fn begin_submit_at(&mut self, now: DateTime<Utc>) -> Result<SubmitStep, ApiError> {
        let errors = self.validate_at(now);
        if !errors.is_empty() {
            debug!("submit rejected: {} invalid field(s)", errors.len());
            self.errors = errors.clone();
            return Ok(SubmitStep::Rejected(errors));
        }

        let request = self.client.build_create_employee(&self.values)?;
        self.last_ticket += 1;
        let ticket = Ticket(self.last_ticket);
        if let Some(previous) = self.in_flight.replace(ticket) {
            debug!("submit #{} supersedes #{}", ticket.0, previous.0);
        }
        debug!("submit #{} -> {}", ticket.0, request.path);
        Ok(SubmitStep::Send { ticket, request })
    }

    /// Apply the result of the request issued under `ticket`.
    pub fn finish_submit(
        &mut self,
        ticket: Ticket,
        result: Result<HttpResponse, ApiError>,
    ) -> SubmitOutcome {
        if self.in_flight != Some(ticket) {
            warn!("dropping stale result for submit #{}", ticket.0);
            return SubmitOutcome::Stale;
        }
        self.in_flight = None;

        match result.and_then(|response| self.client.parse_create_employee(response)) {
            Ok(message) => {
                info!("submit #{} succeeded", ticket.0);
                self.clear();
                self.status = message.clone();
                SubmitOutcome::Succeeded { message }
            }
            Err(err) => {
                warn!("submit #{} failed: {err}", ticket.0);
                let message = err.server_message().unwrap_or(GENERIC_FAILURE).to_string();
                self.status = Some(message.clone());
                SubmitOutcome::Failed { message }
            }
        }
    }

    /// Run both halves of a submit with a synchronous transport.
    pub fn submit<T: Transport + ?Sized>(&mut self, transport: &T) -> SubmitOutcome {
        self.submit_at(transport, Utc::now())
    }

    pub fn submit_at<T: Transport + ?Sized>(
        &mut self,
        transport: &T,
        now: DateTime<Utc>,
    ) -> SubmitOutcome {
        match self.begin_submit_at(now) {
            Ok(SubmitStep::Rejected(errors)) => SubmitOutcome::Rejected(errors),
            Ok(SubmitStep::Send { ticket, request }) => {
                let result = transport.execute(request);
                self.finish_submit(ticket, result)
            }
            Err(err) => {
                warn!("could not build submit request: {err}");
                self.status = Some(GENERIC_FAILURE.to_string());
                SubmitOutcome::Failed {
                    message: GENERIC_FAILURE.to_string(),
                }
            }
        }
    }

    /// Clear values, errors and status, and cancel any in-flight submit.
    pub fn reset(&mut self) {
        if let Some(ticket) = self.in_flight.take() {
            debug!("reset cancels submit #{}", ticket.0);
        }
        self.clear();
        self.status = None;
    }

    fn clear(&mut self) {
        self.values = FormState::default();
        self.errors = FieldErrors::default();
    }

    pub fn view(&self) -> FormView {
        FormView::of(self)
    }
}
