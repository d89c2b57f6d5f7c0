//! Employee form core: state, validation and the create-employee API codec.
//!
//! # Overview
//! `FormController` holds the seven form fields, validates them at submit
//! time, and builds the `POST /employees` request. It never touches the
//! network (host-does-IO pattern): the host executes the request and feeds
//! the response back, which keeps the controller deterministic and testable.
//!
//! # Design
//! - Fields are a fixed descriptor table (`field::FIELDS`), not runtime keys.
//! - Validation errors are data (`FieldErrors`), one optional slot per field.
//! - Submits carry a `Ticket`; only the newest ticket's reply is applied.
//! - `EmployeeClient` is stateless and holds only `base_url`.

pub mod client;
pub mod error;
pub mod field;
pub mod form;
pub mod http;
pub mod types;
pub mod validation;
pub mod view;

pub use client::{EmployeeClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use field::{Field, InputKind, UnknownField};
pub use form::{FormController, SubmitOutcome, SubmitStep, Ticket, GENERIC_FAILURE};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use types::{CreateEmployeeReply, FieldErrors, FormState};
pub use view::{FieldRow, FormView};
