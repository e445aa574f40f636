//! Errores de la frontera HTTP del catálogo.


use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use crate::database::domain::RepositoryError;


/// Cualquier fallo de un handler del catálogo.
///
/// Todas las variantes se responden igual: un 500 sin cuerpo. La causa solo
/// queda en el log del servidor.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// La operación llegó al almacén pero no afectó a ningún documento.
    #[error("{0}")]
    Application(String),
}


impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
