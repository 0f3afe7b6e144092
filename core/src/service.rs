//! Hero data service: CRUD over a `Transport`, one message per operation.
//!
//! # Design
//! Every operation comes in two flavours. The `try_*` methods return
//! `Result<_, ApiError>` so callers can tell an empty answer from a failed
//! one. The plain methods are the UI-facing variants: they never fail and
//! instead substitute a fallback value (an empty `Vec` for the list, `None`
//! for everything else), which means "not found", "backend down" and "no
//! data" all look the same to the caller.
//!
//! Both flavours report each completion exactly once to the injected
//! `MessageSink`. Failures are also emitted as `tracing::error!` events.

use crate::client::HeroClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::message::MessageSink;
use crate::transport::Transport;
use crate::types::{Hero, HeroId, NewHero};

/// Prefix on every message sent to the sink.
const SOURCE: &str = "HeroService";

pub struct HeroService<T, S> {
    client: HeroClient,
    transport: T,
    sink: S,
}

impl<T: Transport, S: MessageSink> HeroService<T, S> {
    pub fn new(client: HeroClient, transport: T, sink: S) -> Self {
        Self {
            client,
            transport,
            sink,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// All heroes, or an empty list if anything went wrong.
    pub async fn get_heroes(&self) -> Vec<Hero> {
        self.try_get_heroes().await.unwrap_or_default()
    }

    pub async fn get_hero(&self, id: HeroId) -> Option<Hero> {
        self.try_get_hero(id).await.ok()
    }

    /// The created hero as returned by the backend, including its new id.
    pub async fn add_hero(&self, hero: &NewHero) -> Option<Hero> {
        self.try_add_hero(hero).await.ok()
    }

    pub async fn update_hero(&self, hero: &Hero) -> Option<()> {
        self.try_update_hero(hero).await.ok()
    }

    pub async fn delete_hero(&self, id: HeroId) -> Option<()> {
        self.try_delete_hero(id).await.ok()
    }

    pub async fn try_get_heroes(&self) -> Result<Vec<Hero>, ApiError> {
        let outcome = self
            .round_trip(Ok(self.client.build_list_heroes()), HeroClient::parse_list_heroes)
            .await;
        self.report(outcome, "getHeroes", |_| "fetched heroes".to_string())
    }

    pub async fn try_get_hero(&self, id: HeroId) -> Result<Hero, ApiError> {
        let outcome = self
            .round_trip(Ok(self.client.build_get_hero(id)), HeroClient::parse_get_hero)
            .await;
        self.report(outcome, &format!("getHero id={id}"), |_| {
            format!("fetched hero id={id}")
        })
    }

    pub async fn try_add_hero(&self, hero: &NewHero) -> Result<Hero, ApiError> {
        let outcome = self
            .round_trip(self.client.build_add_hero(hero), HeroClient::parse_add_hero)
            .await;
        self.report(outcome, "addHero", |created| {
            format!("added hero w/ id={}", created.id)
        })
    }

    pub async fn try_update_hero(&self, hero: &Hero) -> Result<(), ApiError> {
        let outcome = self
            .round_trip(self.client.build_update_hero(hero), HeroClient::parse_update_hero)
            .await;
        self.report(outcome, "updateHero", |_| {
            format!("updated hero {}", hero.id)
        })
    }

    pub async fn try_delete_hero(&self, id: HeroId) -> Result<(), ApiError> {
        let outcome = self
            .round_trip(Ok(self.client.build_delete_hero(id)), HeroClient::parse_delete_hero)
            .await;
        self.report(outcome, "deleteHero", |_| format!("deleted hero id={id}"))
    }

    async fn round_trip<R>(
        &self,
        request: Result<HttpRequest, ApiError>,
        parse: impl FnOnce(&HeroClient, HttpResponse) -> Result<R, ApiError>,
    ) -> Result<R, ApiError> {
        let response = self.transport.execute(request?).await?;
        parse(&self.client, response)
    }

    fn report<R>(
        &self,
        outcome: Result<R, ApiError>,
        operation: &str,
        success: impl FnOnce(&R) -> String,
    ) -> Result<R, ApiError> {
        match &outcome {
            Ok(value) => self.log(&success(value)),
            Err(error) => {
                tracing::error!(operation, %error, "hero operation failed");
                self.log(&format!("{operation} failed: {error}"));
            }
        }
        outcome
    }

    fn log(&self, message: &str) {
        self.sink.add(format!("{SOURCE}: {message}"));
    }
}
