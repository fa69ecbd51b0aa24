//! Stateless request builder and response parser for the clinic API.
//!
//! # Design
//! `ClinicClient` holds only the configured origin and carries no mutable
//! state between calls. Each resource operation is split into a `build_*`
//! method that produces an `HttpRequest` and a `parse_*` method that consumes
//! an `HttpResponse`. The caller executes the round-trip in between, which
//! keeps the client deterministic and lets views interleave requests freely.
//! Nothing is cached or coalesced: two identical builds are two requests.

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{self, HttpRequest, HttpResponse, RequestOptions, APPLICATION_JSON, CONTENT_TYPE};
use crate::types::{Animal, NewAnimal, NewService, Service};

/// Number of services shown in an animal's detail view.
pub const RECENT_SERVICES_LIMIT: u32 = 3;

#[derive(Debug, Clone)]
pub struct ClinicClient {
    base_url: String,
}

impl ClinicClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build a request for `path` (relative to the origin). Every request
    /// carries `content-type: application/json` unless the caller overrides it.
    pub fn request(&self, path: &str, options: RequestOptions) -> HttpRequest {
        HttpRequest {
            method: options.method,
            url: format!("{}{path}", self.base_url),
            headers: http::merge_headers(&[(CONTENT_TYPE, APPLICATION_JSON)], options.headers),
            body: options.body,
        }
    }

    pub fn build_list_animals(&self) -> HttpRequest {
        self.request("/animals/", RequestOptions::get())
    }

    pub fn build_create_animal(&self, input: &NewAnimal) -> Result<HttpRequest, ApiError> {
        Ok(self.request("/animals/", RequestOptions::post_json(input)?))
    }

    pub fn build_get_animal(&self, id: i64) -> HttpRequest {
        self.request(&format!("/animals/{id}"), RequestOptions::get())
    }

    /// `limit` bounds the result to the most recent records; `None` or `0`
    /// omits the parameter and the server returns everything.
    pub fn build_list_services(&self, animal_id: i64, limit: Option<u32>) -> HttpRequest {
        let query = match limit {
            Some(n) if n > 0 => format!("?limit={n}"),
            _ => String::new(),
        };
        self.request(
            &format!("/animals/{animal_id}/services/{query}"),
            RequestOptions::get(),
        )
    }

    pub fn build_create_service(
        &self,
        animal_id: i64,
        input: &NewService,
    ) -> Result<HttpRequest, ApiError> {
        Ok(self.request(
            &format!("/animals/{animal_id}/services/"),
            RequestOptions::post_json(input)?,
        ))
    }

    pub fn parse_list_animals(&self, response: HttpResponse) -> Result<Vec<Animal>, ApiError> {
        http::parse_json(response)
    }

    pub fn parse_create_animal(&self, response: HttpResponse) -> Result<Animal, ApiError> {
        http::parse_json(response)
    }

    pub fn parse_get_animal(&self, response: HttpResponse) -> Result<Animal, ApiError> {
        http::parse_json(response)
    }

    pub fn parse_list_services(&self, response: HttpResponse) -> Result<Vec<Service>, ApiError> {
        http::parse_json(response)
    }

    pub fn parse_create_service(&self, response: HttpResponse) -> Result<Service, ApiError> {
        http::parse_json(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;

    fn client() -> ClinicClient {
        ClinicClient::new(&ClientConfig::new("http://localhost:8000"))
    }

    fn json_header() -> Vec<(String, String)> {
        vec![("content-type".to_string(), "application/json".to_string())]
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_animals_produces_correct_request() {
        let req = client().build_list_animals();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:8000/animals/");
        assert_eq!(req.headers, json_header());
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_animal_produces_correct_request() {
        let input = NewAnimal {
            name: "Rex".to_string(),
            species: "Dog".to_string(),
            age: 3,
        };
        let req = client().build_create_animal(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:8000/animals/");
        assert_eq!(req.headers, json_header());
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"name": "Rex", "species": "Dog", "age": 3}));
    }

    #[test]
    fn build_get_animal_produces_correct_request() {
        let req = client().build_get_animal(42);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:8000/animals/42");
    }

    #[test]
    fn build_list_services_omits_missing_limit() {
        let req = client().build_list_services(1, None);
        assert_eq!(req.url, "http://localhost:8000/animals/1/services/");
    }

    #[test]
    fn build_list_services_appends_limit() {
        let req = client().build_list_services(1, Some(3));
        assert_eq!(req.url, "http://localhost:8000/animals/1/services/?limit=3");
    }

    #[test]
    fn build_list_services_treats_zero_limit_as_absent() {
        let req = client().build_list_services(7, Some(0));
        assert_eq!(req.url, "http://localhost:8000/animals/7/services/");
    }

    #[test]
    fn build_create_service_produces_correct_request() {
        let input = NewService {
            kind: "Vaccine".to_string(),
            description: "Rabies shot".to_string(),
        };
        let req = client().build_create_service(1, &input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:8000/animals/1/services/");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"type": "Vaccine", "description": "Rabies shot"}));
    }

    #[test]
    fn request_merges_caller_headers() {
        let options = RequestOptions::get().header("x-request-id", "7");
        let req = client().request("/animals/", options);
        assert_eq!(req.headers.len(), 2);
        assert!(req.headers.contains(&("x-request-id".to_string(), "7".to_string())));
    }

    #[test]
    fn parse_list_animals_success() {
        let animals = client()
            .parse_list_animals(response(200, r#"[{"id":1,"name":"Rex","species":"Dog","age":3}]"#))
            .unwrap();
        assert_eq!(animals.len(), 1);
        assert_eq!(animals[0].name, "Rex");
    }

    #[test]
    fn parse_get_animal_not_found() {
        let err = client()
            .parse_get_animal(response(404, r#"{"detail":"Animal not found"}"#))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn parse_create_service_success() {
        let service = client()
            .parse_create_service(response(
                201,
                r#"{"id":9,"animal_id":1,"type":"Vaccine","description":"Rabies shot","date":"2024-03-01T09:00:00Z"}"#,
            ))
            .unwrap();
        assert_eq!(service.id, 9);
        assert_eq!(service.kind, "Vaccine");
    }

    #[test]
    fn parse_list_services_bad_json() {
        let err = client().parse_list_services(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = ClinicClient::new(&ClientConfig {
            base_url: "http://localhost:8000/".to_string(),
        });
        assert_eq!(client.build_list_animals().url, "http://localhost:8000/animals/");
    }
}
