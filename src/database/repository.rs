//! Repositorio de productos.
//!
//! Único componente que conoce la semántica de consultas de MongoDB. El resto del
//! servicio trabaja contra el trait `ProductRepository`.


use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, Document};
use tokio_stream::StreamExt;
use tracing::debug;
use crate::database::context::CatalogContext;
use crate::database::domain::{parse_object_id, ProductDocument, RepositoryError};
use crate::product::domain::Product;


/// Operaciones de persistencia sobre el catálogo.
///
/// Ninguna operación modifica el producto recibido. `update` y `delete` devuelven
/// `false` (no un error) cuando ningún documento coincide con el id.
#[async_trait]
pub trait ProductRepository: Send + Sync + std::fmt::Debug + 'static {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: &str) -> Result<Option<Product>, RepositoryError>;
    async fn get_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_category(&self, category: &str) -> Result<Vec<Product>, RepositoryError>;
    async fn create(&self, product: &Product) -> Result<Product, RepositoryError>;
    async fn update(&self, product: &Product) -> Result<bool, RepositoryError>;
    async fn delete(&self, id: &str) -> Result<bool, RepositoryError>;
}


#[derive(Clone, Debug)]
pub struct MongoProductRepository {
    context: CatalogContext,
}


impl MongoProductRepository {
    pub fn new(context: CatalogContext) -> Self {
        Self { context }
    }

    async fn find(&self, filter: Document) -> Result<Vec<Product>, RepositoryError> {
        let cursor = self.context.products().find(filter).await?;
        let documents: Vec<ProductDocument> = cursor.collect::<Result<Vec<_>, _>>().await?;
        Ok(documents.into_iter().map(Product::from).collect())
    }
}


#[async_trait]
impl ProductRepository for MongoProductRepository {

    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        self.find(doc! {}).await
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Product>, RepositoryError> {
        let oid = parse_object_id(id)?;
        let document = self.context.products().find_one(doc! { "_id": oid }).await?;
        Ok(document.map(Product::from))
    }

    async fn get_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError> {
        self.find(doc! { "name": name }).await
    }

    async fn get_by_category(&self, category: &str) -> Result<Vec<Product>, RepositoryError> {
        self.find(doc! { "category": category }).await
    }

    async fn create(&self, product: &Product) -> Result<Product, RepositoryError> {
        // El id se genera en el cliente, igual que hace el driver cuando falta `_id`.
        let oid = ObjectId::new();
        let document = ProductDocument {
            id: Some(oid),
            ..ProductDocument::for_insert(product)
        };

        self.context.products().insert_one(&document).await?;
        debug!("Debug: producto creado con id {}", oid);

        Ok(product.with_id(oid.to_hex()))
    }

    async fn update(&self, product: &Product) -> Result<bool, RepositoryError> {
        let document = ProductDocument::for_replace(product)?;
        let filter = doc! { "_id": document.id };

        let result = self.context.products().replace_one(filter, &document).await?;
        Ok(result.modified_count == 1)
    }

    async fn delete(&self, id: &str) -> Result<bool, RepositoryError> {
        let oid = parse_object_id(id)?;

        let result = self.context.products().delete_one(doc! { "_id": oid }).await?;
        Ok(result.deleted_count == 1)
    }
}
