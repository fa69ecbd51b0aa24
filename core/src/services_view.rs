//! Loader for the services screen: choose an animal, record a service for
//! it, and browse its full service history.
//!
//! Switching the selection while a history request is in flight makes that
//! request stale; its response is dropped when it arrives.

use crate::client::ClinicClient;
use crate::display;
use crate::error::{ApiError, ViewError};
use crate::form::ServiceForm;
use crate::http::{self, HttpRequest, HttpResponse, Transport};
use crate::presenter;
use crate::state::{LoadState, Notice, Ticket, TokenSequence};
use crate::types::{Animal, Service};

pub const ANIMALS_FAILED: &str = "Error loading animals";
pub const SERVICES_FAILED: &str = "Error loading services";
pub const INVALID_DATA: &str = "Invalid data";
pub const INVALID_SERVICE_HINT: &str = "Please select an animal and fill in all fields.";
pub const RECORDED: &str = "Service recorded!";
pub const RECORD_FAILED: &str = "Error recording service";
pub const NO_SELECTION_CAPTION: &str = "Select an animal to see its service history";

#[derive(Debug)]
pub struct ServicesView {
    client: ClinicClient,
    animals: LoadState<Vec<Animal>>,
    selected: Option<i64>,
    services: LoadState<Vec<Service>>,
    pub form: ServiceForm,
    submitting: bool,
    animal_tokens: TokenSequence,
    service_tokens: TokenSequence,
    notices: Vec<Notice>,
}

impl ServicesView {
    pub fn new(client: ClinicClient) -> Self {
        Self {
            client,
            animals: LoadState::NotLoaded,
            selected: None,
            services: LoadState::NotLoaded,
            form: ServiceForm::default(),
            submitting: false,
            animal_tokens: TokenSequence::default(),
            service_tokens: TokenSequence::default(),
            notices: Vec::new(),
        }
    }

    pub fn animals(&self) -> &LoadState<Vec<Animal>> {
        &self.animals
    }

    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    pub fn selected_animal(&self) -> Option<&Animal> {
        let id = self.selected?;
        self.animals.data()?.iter().find(|a| a.id == id)
    }

    pub fn services(&self) -> &LoadState<Vec<Service>> {
        &self.services
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.submitting && self.selected.is_some()
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// The loaded history, newest first. Display order only; the snapshot
    /// itself is untouched.
    pub fn sorted_services(&self) -> Vec<Service> {
        self.services
            .data()
            .map(|services| display::sort_by_date_desc(services))
            .unwrap_or_default()
    }

    pub fn history_caption(&self) -> String {
        match (self.selected, self.selected_animal()) {
            (None, _) => NO_SELECTION_CAPTION.to_string(),
            (Some(_), Some(animal)) => format!("Service history for {}", animal.name),
            (Some(_), None) => "Service history for the selected animal".to_string(),
        }
    }

    pub fn begin_load_animals(&mut self) -> Ticket {
        self.animals = LoadState::Loading;
        Ticket {
            token: self.animal_tokens.issue(),
            request: self.client.build_list_animals(),
        }
    }

    pub fn complete_load_animals(&mut self, token: u64, outcome: Result<HttpResponse, ApiError>) -> bool {
        if !self.animal_tokens.is_current(token) {
            tracing::debug!(token, "dropping stale animal list response");
            return false;
        }
        match outcome.and_then(|response| self.client.parse_list_animals(response)) {
            Ok(animals) => self.animals = LoadState::Loaded(animals),
            Err(err) => {
                let message = presenter::describe(&err);
                self.notices.push(Notice::error(ANIMALS_FAILED, message.clone()));
                self.animals = LoadState::Failed(message);
            }
        }
        true
    }

    /// Change the selected animal. Selecting an animal starts loading its
    /// history; clearing the selection drops the history and retires any
    /// request still in flight.
    pub fn select_animal(&mut self, animal_id: Option<i64>) -> Option<Ticket> {
        self.selected = animal_id;
        match animal_id {
            Some(id) => Some(self.begin_load_services(id)),
            None => {
                self.service_tokens.invalidate();
                self.services = LoadState::NotLoaded;
                None
            }
        }
    }

    fn begin_load_services(&mut self, animal_id: i64) -> Ticket {
        self.services = LoadState::Loading;
        Ticket {
            token: self.service_tokens.issue(),
            request: self.client.build_list_services(animal_id, None),
        }
    }

    pub fn complete_load_services(&mut self, token: u64, outcome: Result<HttpResponse, ApiError>) -> bool {
        if !self.service_tokens.is_current(token) {
            tracing::debug!(token, "dropping stale service history response");
            return false;
        }
        match outcome.and_then(|response| self.client.parse_list_services(response)) {
            Ok(services) => self.services = LoadState::Loaded(services),
            Err(err) => {
                let message = presenter::describe(&err);
                self.notices.push(Notice::error(SERVICES_FAILED, message.clone()));
                self.services = LoadState::Failed(message);
            }
        }
        true
    }

    /// Validate the selection and form, then hand back the create request.
    /// Like the animals form, creates carry no token; `can_submit` gates a
    /// second one while this is in flight.
    pub fn submit(&mut self) -> Result<HttpRequest, ViewError> {
        let (animal_id, draft) = match self.form.validate(self.selected) {
            Ok(valid) => valid,
            Err(err) => {
                self.notices.push(Notice::error(INVALID_DATA, INVALID_SERVICE_HINT));
                return Err(err.into());
            }
        };
        let request = match self.client.build_create_service(animal_id, &draft) {
            Ok(request) => request,
            Err(err) => {
                self.notices.push(Notice::error(RECORD_FAILED, presenter::describe(&err)));
                return Err(err.into());
            }
        };
        self.submitting = true;
        Ok(request)
    }

    /// Apply a create outcome. On success the form is cleared and, if the
    /// service's animal is still the selected one, its history reload is
    /// returned. On failure the form is left as typed.
    pub fn complete_submit(&mut self, outcome: Result<HttpResponse, ApiError>) -> Result<Option<Ticket>, ViewError> {
        self.submitting = false;
        match outcome.and_then(|response| self.client.parse_create_service(response)) {
            Ok(service) => {
                let name = self.animal_name(service.animal_id);
                self.notices.push(Notice::success(
                    RECORDED,
                    format!("Service for {name} was recorded successfully."),
                ));
                self.form.clear();
                if self.selected == Some(service.animal_id) {
                    Ok(Some(self.begin_load_services(service.animal_id)))
                } else {
                    Ok(None)
                }
            }
            Err(err) => {
                self.notices.push(Notice::error(RECORD_FAILED, presenter::describe(&err)));
                Err(err.into())
            }
        }
    }

    fn animal_name(&self, animal_id: i64) -> String {
        self.animals
            .data()
            .and_then(|animals| animals.iter().find(|a| a.id == animal_id))
            .map(|a| a.name.clone())
            .unwrap_or_else(|| format!("animal #{animal_id}"))
    }

    pub fn load_animals<T: Transport + ?Sized>(&mut self, transport: &T) {
        let ticket = self.begin_load_animals();
        let outcome = http::send(transport, ticket.request);
        self.complete_load_animals(ticket.token, outcome);
    }

    pub fn select_with<T: Transport + ?Sized>(&mut self, transport: &T, animal_id: Option<i64>) {
        if let Some(ticket) = self.select_animal(animal_id) {
            let outcome = http::send(transport, ticket.request);
            self.complete_load_services(ticket.token, outcome);
        }
    }

    /// Submit the form and, on success, reload the selected history.
    pub fn submit_with<T: Transport + ?Sized>(&mut self, transport: &T) -> Result<(), ViewError> {
        let request = self.submit()?;
        if let Some(reload) = self.complete_submit(http::send(transport, request))? {
            let outcome = http::send(transport, reload.request);
            self.complete_load_services(reload.token, outcome);
        }
        Ok(())
    }
}
