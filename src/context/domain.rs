//! Definición del Contexto de Aplicación (Shared State).
//!
//! El `AppContext` actúa como un contenedor de "Inyección de Dependencias" manual:
//! agrupa los recursos compartidos por todas las peticiones HTTP (repositorio y
//! configuración). Se construye una sola vez en `main` y se clona hacia el router.


use std::sync::Arc;
use crate::database::context::CatalogContext;
use crate::database::domain::RepositoryError;
use crate::database::repository::{MongoProductRepository, ProductRepository};
use crate::system::domain::System;


#[derive(Clone, Debug)]
pub struct AppContext {
    pub repo: Arc<dyn ProductRepository>,
    pub system: Arc<System>,
}


impl AppContext {

    /// Conecta con el almacén de documentos descrito en `system` y arma el contexto.
    pub async fn new(system: System) -> Result<Self, RepositoryError> {
        let catalog = CatalogContext::connect(&system.connection_string,
                                              &system.database_name,
                                              &system.collection_name).await?;

        let repo = Arc::new(MongoProductRepository::new(catalog));
        Ok(Self::with_repository(repo, system))
    }

    pub fn with_repository(repo: Arc<dyn ProductRepository>, system: System) -> Self {
        Self { repo, system: Arc::new(system) }
    }
}
