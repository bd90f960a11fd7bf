//! In-memory stand-in for the remote product service.
//!
//! Mirrors the observable behavior of the real `/api/productos` backend:
//! sequential integer ids, 200 on every successful write (POST included),
//! plain-text bodies on DELETE, a `fechaCreacion` timestamp the client is
//! expected to ignore, and 400 on submissions that fail bean validation
//! (blank `nombre`, non-positive `precio`).

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Producto {
    pub id: i64,
    pub nombre: String,
    pub precio: f64,
    #[serde(rename = "fechaCreacion")]
    pub fecha_creacion: String,
}

#[derive(Deserialize)]
pub struct ProductoInput {
    pub nombre: String,
    pub precio: f64,
}

struct Db {
    next_id: i64,
    productos: HashMap<i64, Producto>,
}

type SharedDb = Arc<RwLock<Db>>;

pub fn app() -> Router {
    let db: SharedDb = Arc::new(RwLock::new(Db {
        next_id: 1,
        productos: HashMap::new(),
    }));
    Router::new()
        .route("/api/productos", get(list_products).post(create_product))
        .route(
            "/api/productos/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn valid(input: &ProductoInput) -> bool {
    !input.nombre.trim().is_empty() && input.precio > 0.0
}

fn timestamp() -> String {
    // Same shape Jackson gives a LocalDateTime.
    Utc::now().naive_utc().format("%Y-%m-%dT%H:%M:%S").to_string()
}

async fn list_products(State(db): State<SharedDb>) -> Json<Vec<Producto>> {
    let guard = db.read().await;
    let mut productos: Vec<Producto> = guard.productos.values().cloned().collect();
    productos.sort_by_key(|p| p.id);
    Json(productos)
}

async fn get_product(
    State(db): State<SharedDb>,
    Path(id): Path<i64>,
) -> Result<Json<Producto>, StatusCode> {
    let guard = db.read().await;
    guard
        .productos
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_product(
    State(db): State<SharedDb>,
    Json(input): Json<ProductoInput>,
) -> Result<Json<Producto>, StatusCode> {
    if !valid(&input) {
        return Err(StatusCode::BAD_REQUEST);
    }
    let mut guard = db.write().await;
    let id = guard.next_id;
    guard.next_id += 1;
    let producto = Producto {
        id,
        nombre: input.nombre,
        precio: input.precio,
        fecha_creacion: timestamp(),
    };
    guard.productos.insert(id, producto.clone());
    Ok(Json(producto))
}

async fn update_product(
    State(db): State<SharedDb>,
    Path(id): Path<i64>,
    Json(input): Json<ProductoInput>,
) -> Result<Json<Producto>, StatusCode> {
    if !valid(&input) {
        return Err(StatusCode::BAD_REQUEST);
    }
    let mut guard = db.write().await;
    let producto = guard.productos.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    producto.nombre = input.nombre;
    producto.precio = input.precio;
    Ok(Json(producto.clone()))
}

async fn delete_product(
    State(db): State<SharedDb>,
    Path(id): Path<i64>,
) -> Result<String, (StatusCode, String)> {
    let mut guard = db.write().await;
    match guard.productos.remove(&id) {
        Some(_) => Ok("Producto eliminado correctamente".to_string()),
        None => Err((StatusCode::NOT_FOUND, "Producto no encontrado".to_string())),
    }
}
