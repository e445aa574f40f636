//! Cliente del almacén de documentos.
//!
//! Mantiene el único handle a la colección de productos durante toda la vida del
//! proceso. Se construye una vez al arrancar y se clona (barato) hacia el repositorio.


use mongodb::bson::doc;
use mongodb::{Client, Collection};
use tracing::info;
use crate::database::domain::{ProductDocument, RepositoryError};
use crate::database::seed::seed_if_empty;


#[derive(Clone, Debug)]
pub struct CatalogContext {
    products: Collection<ProductDocument>,
}


impl CatalogContext {

    /// Conecta con MongoDB, resuelve la colección y la siembra si está vacía.
    ///
    /// No hay política de reintentos: cualquier fallo se devuelve tal cual y el
    /// arranque se aborta.
    pub async fn connect(connection_string: &str,
                         database_name: &str,
                         collection_name: &str) -> Result<Self, RepositoryError> {

        let client = Client::with_uri_str(connection_string).await?;
        let database = client.database(database_name);

        database.run_command(doc! { "ping": 1 }).await?;
        info!("Info: conectado a MongoDB, base de datos {}", database_name);

        let products = database.collection::<ProductDocument>(collection_name);
        seed_if_empty(&products).await?;

        Ok(Self { products })
    }

    pub fn products(&self) -> &Collection<ProductDocument> {
        &self.products
    }
}
