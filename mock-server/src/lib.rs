use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Animal {
    pub id: i64,
    pub name: String,
    pub species: String,
    pub age: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Service {
    pub id: i64,
    pub animal_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub date: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct CreateAnimal {
    pub name: String,
    pub species: String,
    pub age: u32,
}

#[derive(Deserialize)]
pub struct CreateService {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

#[derive(Deserialize)]
pub struct ServiceQuery {
    pub limit: Option<usize>,
}

/// FastAPI-style error body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, Default)]
pub struct Store {
    animals: Vec<Animal>,
    services: Vec<Service>,
    last_animal_id: i64,
    last_service_id: i64,
}

pub type Db = Arc<RwLock<Store>>;

type ApiResult<T> = Result<T, (StatusCode, Json<ErrorBody>)>;

fn animal_not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            detail: "Animal not found".to_string(),
        }),
    )
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/animals/", get(list_animals).post(create_animal))
        .route("/animals/{id}", get(get_animal))
        .route(
            "/animals/{id}/services/",
            get(list_services).post(create_service),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_animals(State(db): State<Db>) -> Json<Vec<Animal>> {
    Json(db.read().await.animals.clone())
}

async fn create_animal(
    State(db): State<Db>,
    Json(input): Json<CreateAnimal>,
) -> (StatusCode, Json<Animal>) {
    let mut store = db.write().await;
    store.last_animal_id += 1;
    let animal = Animal {
        id: store.last_animal_id,
        name: input.name,
        species: input.species,
        age: input.age,
    };
    store.animals.push(animal.clone());
    tracing::info!(id = animal.id, name = %animal.name, "animal registered");
    (StatusCode::CREATED, Json(animal))
}

async fn get_animal(State(db): State<Db>, Path(id): Path<i64>) -> ApiResult<Json<Animal>> {
    let store = db.read().await;
    store
        .animals
        .iter()
        .find(|a| a.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(animal_not_found)
}

/// Newest first; `limit` keeps only that many of the most recent records.
async fn list_services(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Query(query): Query<ServiceQuery>,
) -> ApiResult<Json<Vec<Service>>> {
    let store = db.read().await;
    if !store.animals.iter().any(|a| a.id == id) {
        return Err(animal_not_found());
    }
    let mut services: Vec<Service> = store
        .services
        .iter()
        .filter(|s| s.animal_id == id)
        .cloned()
        .collect();
    services.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
    if let Some(limit) = query.limit {
        services.truncate(limit);
    }
    Ok(Json(services))
}

async fn create_service(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<CreateService>,
) -> ApiResult<(StatusCode, Json<Service>)> {
    let mut store = db.write().await;
    if !store.animals.iter().any(|a| a.id == id) {
        return Err(animal_not_found());
    }
    store.last_service_id += 1;
    let service = Service {
        id: store.last_service_id,
        animal_id: id,
        kind: input.kind,
        description: input.description,
        date: Utc::now(),
    };
    store.services.push(service.clone());
    tracing::info!(id = service.id, animal_id = id, "service recorded");
    Ok((StatusCode::CREATED, Json(service)))
}
