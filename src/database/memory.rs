//! Repositorio en memoria para pruebas del controlador.
//!
//! Reproduce el contrato de `MongoProductRepository`: ids ObjectId generados al
//! crear, orden de inserción, filtros exactos y `false` cuando no hay coincidencia.


use std::sync::Mutex;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::database::domain::{parse_object_id, RepositoryError};
use crate::database::repository::ProductRepository;
use crate::database::seed::seed_products;
use crate::product::domain::Product;


#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: Mutex<Vec<Product>>,
    unavailable: bool,
}


impl InMemoryProductRepository {

    pub fn empty() -> Self {
        Self::default()
    }

    /// Repositorio con los productos de ejemplo, como tras el primer arranque.
    pub fn seeded() -> Self {
        let products = seed_products().into_iter().map(Product::from).collect();
        Self { products: Mutex::new(products), unavailable: false }
    }

    /// Repositorio cuyas operaciones fallan siempre.
    pub fn unavailable() -> Self {
        Self { unavailable: true, ..Self::default() }
    }

    fn check(&self) -> Result<(), RepositoryError> {
        if self.unavailable {
            return Err(RepositoryError::InvalidId("repositorio no disponible".into()));
        }
        Ok(())
    }

    fn filter(&self, predicate: impl Fn(&Product) -> bool) -> Result<Vec<Product>, RepositoryError> {
        self.check()?;
        let products = self.products.lock().unwrap();
        Ok(products.iter().filter(|p| predicate(p)).cloned().collect())
    }
}


#[async_trait]
impl ProductRepository for InMemoryProductRepository {

    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        self.filter(|_| true)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Product>, RepositoryError> {
        self.check()?;
        parse_object_id(id)?;
        let products = self.products.lock().unwrap();
        Ok(products.iter().find(|p| p.id.as_deref() == Some(id)).cloned())
    }

    async fn get_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError> {
        self.filter(|p| p.name == name)
    }

    async fn get_by_category(&self, category: &str) -> Result<Vec<Product>, RepositoryError> {
        self.filter(|p| p.category == category)
    }

    async fn create(&self, product: &Product) -> Result<Product, RepositoryError> {
        self.check()?;
        let created = product.with_id(ObjectId::new().to_hex());
        self.products.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, product: &Product) -> Result<bool, RepositoryError> {
        self.check()?;
        let id = product.id.as_deref().ok_or(RepositoryError::MissingId)?;
        parse_object_id(id)?;

        let mut products = self.products.lock().unwrap();
        match products.iter_mut().find(|p| p.id.as_deref() == Some(id)) {
            Some(stored) if stored != product => {
                *stored = product.clone();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, RepositoryError> {
        self.check()?;
        parse_object_id(id)?;

        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.id.as_deref() != Some(id));
        Ok(products.len() < before)
    }
}
