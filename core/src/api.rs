//! Resource API: the five clinic operations as direct calls.
//!
//! `ClinicApi` pairs a `ClinicClient` with a `Transport` and runs each
//! build/execute/parse cycle in one step. Views use the split form instead
//! so they can tag and discard late responses.

use crate::client::ClinicClient;
use crate::error::ApiError;
use crate::http::{self, Transport};
use crate::types::{Animal, NewAnimal, NewService, Service};

#[derive(Debug, Clone)]
pub struct ClinicApi<T> {
    client: ClinicClient,
    transport: T,
}

impl<T: Transport> ClinicApi<T> {
    pub fn new(client: ClinicClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn list_animals(&self) -> Result<Vec<Animal>, ApiError> {
        let response = http::send(&self.transport, self.client.build_list_animals())?;
        self.client.parse_list_animals(response)
    }

    pub fn create_animal(&self, input: &NewAnimal) -> Result<Animal, ApiError> {
        let response = http::send(&self.transport, self.client.build_create_animal(input)?)?;
        self.client.parse_create_animal(response)
    }

    /// Fails with a 404 `ApiError::HttpStatus` when the animal does not exist.
    pub fn get_animal(&self, id: i64) -> Result<Animal, ApiError> {
        let response = http::send(&self.transport, self.client.build_get_animal(id))?;
        self.client.parse_get_animal(response)
    }

    pub fn list_services(&self, animal_id: i64, limit: Option<u32>) -> Result<Vec<Service>, ApiError> {
        let response = http::send(&self.transport, self.client.build_list_services(animal_id, limit))?;
        self.client.parse_list_services(response)
    }

    pub fn create_service(&self, animal_id: i64, input: &NewService) -> Result<Service, ApiError> {
        let request = self.client.build_create_service(animal_id, input)?;
        let response = http::send(&self.transport, request)?;
        self.client.parse_create_service(response)
    }
}
