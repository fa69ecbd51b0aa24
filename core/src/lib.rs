//! Client core for the veterinary clinic API.
//!
//! # Overview
//! Registers animals, records services, and reads back lists and histories
//! from the clinic's REST API. The server is authoritative; everything held
//! here is a snapshot of its last answer.
//!
//! # Design
//! - `ClinicClient` is stateless and holds only the configured origin. Each
//!   resource operation is split into `build_*` (produces a request) and
//!   `parse_*` (consumes a response), so the I/O boundary is explicit.
//! - A `Transport` executes requests; `UreqTransport` is the blocking one,
//!   and `ClinicApi` runs build/execute/parse in a single call.
//! - `AnimalsView` and `ServicesView` are the per-screen loaders. They hand
//!   out token-tagged `Ticket`s and drop completions that were superseded.
//! - `presenter` maps failures to user-facing text and never fails itself.

pub mod animals_view;
pub mod api;
pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod form;
pub mod http;
pub mod presenter;
pub mod services_view;
pub mod state;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use animals_view::{AnimalDetails, AnimalsView};
pub use api::ClinicApi;
pub use client::{ClinicClient, RECENT_SERVICES_LIMIT};
pub use config::ClientConfig;
pub use error::{ApiError, ValidationError, ViewError};
pub use form::{AnimalForm, ServiceForm};
pub use http::{HttpMethod, HttpRequest, HttpResponse, RequestOptions, Transport};
pub use services_view::ServicesView;
pub use state::{LoadState, Notice, NoticeKind, Ticket};
pub use transport::UreqTransport;
pub use types::{Animal, NewAnimal, NewService, Service};
