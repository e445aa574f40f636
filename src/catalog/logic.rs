//! Controlador HTTP del catálogo.
//!
//! Una ruta por operación del repositorio, todas bajo `/api/v1/catalog`. Los
//! resultados se traducen a códigos de estado y cualquier error se convierte en
//! un 500 genérico (ver `CatalogError`).
//!
//! # Rutas
//! * `GET    /products`                                   → 200 + lista, 204 si está vacía.
//! * `GET    /products/{id}`                              → 200 + producto, 404 si no existe.
//! * `GET    /products/GetProductByCategory/{category}`   → 200 + lista, 204 si está vacía.
//! * `GET    /products/GetProductByName/{name}`           → 200 + lista, 204 si está vacía.
//! * `POST   /products`                                   → 201 + producto creado.
//! * `PUT    /products`                                   → 200; 500 si no existe.
//! * `DELETE /products/{id}`                              → 200; 500 si no existe.


use axum::extract::{Json, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, instrument, warn};
use crate::catalog::domain::CatalogError;
use crate::context::domain::AppContext;
use crate::product::domain::Product;
use crate::system::domain::http_const::{API_PREFIX, ID_LENGTH};


#[instrument(name = "get_products", skip(ctx), err)]
pub async fn get_products(State(ctx): State<AppContext>) -> Result<Response, CatalogError> {
    let products = ctx.repo.get_all().await?;
    Ok(list_response(products))
}


#[instrument(name = "get_product_by_id", skip(ctx), err)]
pub async fn get_product_by_id(State(ctx): State<AppContext>,
                               Path(id): Path<String>) -> Result<Response, CatalogError> {
    if id.len() != ID_LENGTH {
        return Ok(StatusCode::NOT_FOUND.into_response());
    }

    match ctx.repo.get_by_id(&id).await? {
        Some(product) => Ok(Json(product).into_response()),
        None => {
            warn!("Warning: producto con id {} no encontrado", id);
            Ok(StatusCode::NOT_FOUND.into_response())
        }
    }
}


#[instrument(name = "get_product_by_category", skip(ctx), err)]
pub async fn get_product_by_category(State(ctx): State<AppContext>,
                                     Path(category): Path<String>) -> Result<Response, CatalogError> {
    let products = ctx.repo.get_by_category(&category).await?;
    Ok(list_response(products))
}


#[instrument(name = "get_product_by_name", skip(ctx), err)]
pub async fn get_product_by_name(State(ctx): State<AppContext>,
                                 Path(name): Path<String>) -> Result<Response, CatalogError> {
    let products = ctx.repo.get_by_name(&name).await?;
    Ok(list_response(products))
}


/// Crea el producto y responde 201 con el id asignado y la cabecera `Location`.
#[instrument(name = "create_product", skip(ctx, product), err)]
pub async fn create_product(State(ctx): State<AppContext>,
                            Json(product): Json<Product>) -> Result<Response, CatalogError> {
    let created = ctx.repo.create(&product).await?;
    let location = format!("{}/products/{}", API_PREFIX, created.id.as_deref().unwrap_or_default());

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)).into_response())
}


/// Reemplaza el documento completo. Que no exista se responde como 500, igual
/// que un fallo del almacén.
#[instrument(name = "update_product", skip(ctx, product), err)]
pub async fn update_product(State(ctx): State<AppContext>,
                            Json(product): Json<Product>) -> Result<Response, CatalogError> {
    if !ctx.repo.update(&product).await? {
        return Err(CatalogError::Application(format!(
            "no se pudo actualizar el producto. Detalle: {}",
            serde_json::to_string(&product).unwrap_or_default()
        )));
    }

    Ok(StatusCode::OK.into_response())
}


#[instrument(name = "delete_product_by_id", skip(ctx), err)]
pub async fn delete_product_by_id(State(ctx): State<AppContext>,
                                  Path(id): Path<String>) -> Result<Response, CatalogError> {
    if id.len() != ID_LENGTH {
        return Ok(StatusCode::NOT_FOUND.into_response());
    }

    if !ctx.repo.delete(&id).await? {
        return Err(CatalogError::Application(format!(
            "no se pudo eliminar el producto. ProductId: {}", id
        )));
    }

    Ok(StatusCode::OK.into_response())
}


pub async fn health() -> &'static str {
    "healthy"
}


fn list_response(products: Vec<Product>) -> Response {
    if products.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }
    (StatusCode::OK, Json(products)).into_response()
}


pub fn router(ctx: AppContext) -> Router {
    let products = Router::new()
        .route("/products", get(get_products).post(create_product).put(update_product))
        .route("/products/{id}", get(get_product_by_id).delete(delete_product_by_id))
        .route("/products/GetProductByCategory/{category}", get(get_product_by_category))
        .route("/products/GetProductByName/{name}", get(get_product_by_name));

    Router::new()
        .nest(API_PREFIX, products)
        .route("/health", get(health))
        .with_state(ctx)
}


/// Enlaza el listener y sirve el catálogo hasta recibir Ctrl-C o SIGTERM.
pub async fn start_http(ctx: AppContext) -> std::io::Result<()> {
    let address = ctx.system.http_address();
    let listener = TcpListener::bind(&address).await?;

    info!("Info: catálogo escuchando en {}{}", address, API_PREFIX);

    axum::serve(listener, router(ctx))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Info: servidor HTTP finalizado");
    Ok(())
}


async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Warning: no se pudo escuchar Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Warning: no se pudo escuchar SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Info: señal de apagado recibida");
}
