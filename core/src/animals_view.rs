//! Loader for the animals screen: the registered-animals table, the
//! registration form, and the detail panel with recent services.

use crate::client::{ClinicClient, RECENT_SERVICES_LIMIT};
use crate::error::{ApiError, ViewError};
use crate::form::AnimalForm;
use crate::http::{self, HttpRequest, HttpResponse, Transport};
use crate::presenter;
use crate::state::{LoadState, Notice, Ticket, TokenSequence};
use crate::types::{Animal, Service};

pub const LOAD_FAILED: &str = "Error loading animals";
pub const INVALID_DATA: &str = "Invalid data";
pub const INVALID_ANIMAL_HINT: &str = "Please fill in all fields correctly.";
pub const REGISTERED: &str = "Animal registered!";
pub const REGISTER_FAILED: &str = "Error registering animal";
pub const DETAILS_FAILED: &str = "Error loading details";

/// The detail panel for one animal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimalDetails {
    pub animal: Option<Animal>,
    pub recent_services: LoadState<Vec<Service>>,
    /// The panel opens only once its services have loaded.
    pub open: bool,
}

#[derive(Debug)]
pub struct AnimalsView {
    client: ClinicClient,
    animals: LoadState<Vec<Animal>>,
    pub form: AnimalForm,
    submitting: bool,
    details: AnimalDetails,
    list_tokens: TokenSequence,
    detail_tokens: TokenSequence,
    notices: Vec<Notice>,
}

impl AnimalsView {
    pub fn new(client: ClinicClient) -> Self {
        Self {
            client,
            animals: LoadState::NotLoaded,
            form: AnimalForm::default(),
            submitting: false,
            details: AnimalDetails::default(),
            list_tokens: TokenSequence::default(),
            detail_tokens: TokenSequence::default(),
            notices: Vec::new(),
        }
    }

    pub fn animals(&self) -> &LoadState<Vec<Animal>> {
        &self.animals
    }

    pub fn details(&self) -> &AnimalDetails {
        &self.details
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Drain notices raised since the last call.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn begin_load(&mut self) -> Ticket {
        self.animals = LoadState::Loading;
        Ticket {
            token: self.list_tokens.issue(),
            request: self.client.build_list_animals(),
        }
    }

    /// Apply a list outcome. Returns `false` when the response was superseded
    /// by a newer load and has been dropped.
    pub fn complete_load(&mut self, token: u64, outcome: Result<HttpResponse, ApiError>) -> bool {
        if !self.list_tokens.is_current(token) {
            tracing::debug!(token, "dropping stale animal list response");
            return false;
        }
        match outcome.and_then(|response| self.client.parse_list_animals(response)) {
            Ok(animals) => self.animals = LoadState::Loaded(animals),
            Err(err) => {
                let message = presenter::describe(&err);
                self.notices.push(Notice::error(LOAD_FAILED, message.clone()));
                self.animals = LoadState::Failed(message);
            }
        }
        true
    }

    /// Validate the form and, if it passes, hand back the create request.
    /// An invalid form raises a notice and never produces a request.
    ///
    /// Creates are not token-tagged: every accepted submission is applied by
    /// `complete_submit`, and `is_submitting` keeps a second one from starting.
    pub fn submit(&mut self) -> Result<HttpRequest, ViewError> {
        let draft = match self.form.validate() {
            Ok(draft) => draft,
            Err(err) => {
                self.notices.push(Notice::error(INVALID_DATA, INVALID_ANIMAL_HINT));
                return Err(err.into());
            }
        };
        let request = match self.client.build_create_animal(&draft) {
            Ok(request) => request,
            Err(err) => {
                self.notices.push(Notice::error(REGISTER_FAILED, presenter::describe(&err)));
                return Err(err.into());
            }
        };
        self.submitting = true;
        Ok(request)
    }

    /// Apply a create outcome. On success the form is cleared and the list
    /// reload to run next is returned; on failure the form is left as typed.
    pub fn complete_submit(&mut self, outcome: Result<HttpResponse, ApiError>) -> Result<Ticket, ViewError> {
        self.submitting = false;
        match outcome.and_then(|response| self.client.parse_create_animal(response)) {
            Ok(animal) => {
                self.notices.push(Notice::success(
                    REGISTERED,
                    format!("{} was registered successfully.", animal.name),
                ));
                self.form.clear();
                Ok(self.begin_load())
            }
            Err(err) => {
                self.notices.push(Notice::error(REGISTER_FAILED, presenter::describe(&err)));
                Err(err.into())
            }
        }
    }

    /// Select `animal` for the detail panel and request its most recent
    /// services.
    pub fn open_details(&mut self, animal: Animal) -> Ticket {
        let request = self
            .client
            .build_list_services(animal.id, Some(RECENT_SERVICES_LIMIT));
        self.details.animal = Some(animal);
        self.details.recent_services = LoadState::Loading;
        Ticket {
            token: self.detail_tokens.issue(),
            request,
        }
    }

    pub fn complete_details(&mut self, token: u64, outcome: Result<HttpResponse, ApiError>) -> bool {
        if !self.detail_tokens.is_current(token) {
            tracing::debug!(token, "dropping stale detail response");
            return false;
        }
        match outcome.and_then(|response| self.client.parse_list_services(response)) {
            Ok(services) => {
                self.details.recent_services = LoadState::Loaded(services);
                self.details.open = true;
            }
            Err(err) => {
                let message = presenter::describe(&err);
                self.notices.push(Notice::error(DETAILS_FAILED, message.clone()));
                self.details.recent_services = LoadState::Failed(message);
            }
        }
        true
    }

    /// Hide the panel. The loaded snapshot stays until the next selection.
    pub fn close_details(&mut self) {
        self.details.open = false;
    }

    pub fn load<T: Transport + ?Sized>(&mut self, transport: &T) {
        let ticket = self.begin_load();
        let outcome = http::send(transport, ticket.request);
        self.complete_load(ticket.token, outcome);
    }

    /// Submit the form and, on success, reload the list.
    pub fn submit_with<T: Transport + ?Sized>(&mut self, transport: &T) -> Result<(), ViewError> {
        let request = self.submit()?;
        let reload = self.complete_submit(http::send(transport, request))?;
        let outcome = http::send(transport, reload.request);
        self.complete_load(reload.token, outcome);
        Ok(())
    }

    pub fn show_details_with<T: Transport + ?Sized>(&mut self, transport: &T, animal: Animal) {
        let ticket = self.open_details(animal);
        let outcome = http::send(transport, ticket.request);
        self.complete_details(ticket.token, outcome);
    }
}
