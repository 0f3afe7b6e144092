//! Stateless HTTP request builder and response parser for the heroes API.
//!
//! # Design
//! `HeroClient` holds only the resource URL and carries no mutable state
//! between calls. Each CRUD operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip, keeping
//! this module deterministic and free of I/O.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, APPLICATION_JSON, CONTENT_TYPE};
use crate::types::{Hero, HeroId, NewHero};

/// Resource path used when none is configured.
pub const DEFAULT_RESOURCE_PATH: &str = "api/heroes";

/// Synchronous, stateless client for the heroes API.
#[derive(Debug, Clone)]
pub struct HeroClient {
    base_url: String,
    resource_path: String,
    heroes_url: String,
}

impl HeroClient {
    pub fn new(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        let resource_path = DEFAULT_RESOURCE_PATH.to_string();
        let heroes_url = join(&base_url, &resource_path);
        Self {
            base_url,
            resource_path,
            heroes_url,
        }
    }

    /// Point the client at a different collection path under the same host.
    pub fn with_resource_path(mut self, path: &str) -> Self {
        self.resource_path = path.trim_matches('/').to_string();
        self.heroes_url = join(&self.base_url, &self.resource_path);
        self
    }

    /// Full URL of the hero collection, e.g. `http://localhost:3000/api/heroes`.
    pub fn heroes_url(&self) -> &str {
        &self.heroes_url
    }

    fn hero_url(&self, id: HeroId) -> String {
        format!("{}/{id}", self.heroes_url)
    }

    pub fn build_list_heroes(&self) -> HttpRequest {
        request(HttpMethod::Get, self.heroes_url.clone(), None)
    }

    pub fn build_get_hero(&self, id: HeroId) -> HttpRequest {
        request(HttpMethod::Get, self.hero_url(id), None)
    }

    pub fn build_add_hero(&self, hero: &NewHero) -> Result<HttpRequest, ApiError> {
        let body = to_json(hero)?;
        Ok(request(HttpMethod::Post, self.heroes_url.clone(), Some(body)))
    }

    /// The hero's id travels in the body; the URL is the collection itself.
    pub fn build_update_hero(&self, hero: &Hero) -> Result<HttpRequest, ApiError> {
        let body = to_json(hero)?;
        Ok(request(HttpMethod::Put, self.heroes_url.clone(), Some(body)))
    }

    pub fn build_delete_hero(&self, id: HeroId) -> HttpRequest {
        request(HttpMethod::Delete, self.hero_url(id), None)
    }

    pub fn parse_list_heroes(&self, response: HttpResponse) -> Result<Vec<Hero>, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_get_hero(&self, response: HttpResponse) -> Result<Hero, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_add_hero(&self, response: HttpResponse) -> Result<Hero, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    /// Any 2xx acknowledges the update; the body is ignored.
    pub fn parse_update_hero(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    /// Any 2xx acknowledges the delete; the body is ignored.
    pub fn parse_delete_hero(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

fn join(base_url: &str, resource_path: &str) -> String {
    let resource_path = resource_path.trim_matches('/');
    if resource_path.is_empty() {
        base_url.to_string()
    } else {
        format!("{base_url}/{resource_path}")
    }
}

fn request(method: HttpMethod, path: String, body: Option<String>) -> HttpRequest {
    HttpRequest {
        method,
        path,
        headers: vec![(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())],
        body,
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn from_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
