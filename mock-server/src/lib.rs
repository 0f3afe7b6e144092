//! In-memory heroes backend.
//!
//! Serves the `api/heroes` collection from a `BTreeMap` seeded with the demo
//! roster. Ids are assigned as one past the current maximum (11 for an empty
//! store), and updates replace the whole record named by the body's `id`.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;

pub type HeroId = u32;

/// First id handed out by an empty store.
pub const FIRST_ID: HeroId = 11;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
}

#[derive(Deserialize)]
pub struct NewHero {
    pub name: String,
}

pub type Db = Arc<RwLock<BTreeMap<HeroId, Hero>>>;

/// The roster the server starts with.
pub fn seed() -> Vec<Hero> {
    [
        (12, "Dr. Nice"),
        (13, "Bombasto"),
        (14, "Celeritas"),
        (15, "Magneta"),
        (16, "RubberMan"),
        (17, "Dynama"),
        (18, "Dr. IQ"),
        (19, "Magma"),
        (20, "Tornado"),
    ]
    .into_iter()
    .map(|(id, name)| Hero {
        id,
        name: name.to_string(),
    })
    .collect()
}

pub fn app() -> Router {
    app_with(seed())
}

/// Router over a store holding exactly `heroes`.
pub fn app_with(heroes: impl IntoIterator<Item = Hero>) -> Router {
    let db: Db = Arc::new(RwLock::new(
        heroes.into_iter().map(|hero| (hero.id, hero)).collect(),
    ));
    Router::new()
        .route(
            "/api/heroes",
            get(list_heroes).post(create_hero).put(update_hero),
        )
        .route("/api/heroes/{id}", get(get_hero).delete(delete_hero))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_app(listener, app()).await
}

pub async fn run_app(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}

/// One past the largest id, or `None` once `HeroId::MAX` is taken.
fn next_id(heroes: &BTreeMap<HeroId, Hero>) -> Option<HeroId> {
    match heroes.keys().next_back() {
        Some(max) => max.checked_add(1),
        None => Some(FIRST_ID),
    }
}

async fn list_heroes(State(db): State<Db>) -> Json<Vec<Hero>> {
    let heroes = db.read().await;
    Json(heroes.values().cloned().collect())
}

async fn create_hero(
    State(db): State<Db>,
    Json(input): Json<NewHero>,
) -> Result<(StatusCode, Json<Hero>), StatusCode> {
    let mut heroes = db.write().await;
    let Some(id) = next_id(&heroes) else {
        tracing::warn!("hero id space exhausted");
        return Err(StatusCode::INSUFFICIENT_STORAGE);
    };
    let hero = Hero {
        id,
        name: input.name,
    };
    heroes.insert(hero.id, hero.clone());
    tracing::info!(id = hero.id, name = %hero.name, "created hero");
    Ok((StatusCode::CREATED, Json(hero)))
}

async fn get_hero(
    State(db): State<Db>,
    Path(id): Path<HeroId>,
) -> Result<Json<Hero>, StatusCode> {
    let heroes = db.read().await;
    heroes.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_hero(State(db): State<Db>, Json(input): Json<Hero>) -> StatusCode {
    let mut heroes = db.write().await;
    match heroes.get_mut(&input.id) {
        Some(hero) => {
            hero.name = input.name;
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn delete_hero(State(db): State<Db>, Path(id): Path<HeroId>) -> StatusCode {
    let mut heroes = db.write().await;
    match heroes.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT,
        None => StatusCode::NOT_FOUND,
    }
}
