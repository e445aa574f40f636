//! Estructuras de dominio para la persistencia de productos.
//!
//! Define la representación BSON de un producto (`ProductDocument`), la traducción
//! entre esta y el modelo HTTP (`Product`) y la taxonomía de errores del almacén.


use mongodb::bson::oid::ObjectId;
use mongodb::error::ErrorKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::product::domain::Product;


/// Documento de producto tal como se guarda en la colección.
///
/// `_id` es un `ObjectId` nativo; el resto de campos usa las mismas claves
/// camelCase que el JSON de la API.
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub category: String,
    pub summary: String,
    pub description: String,
    pub image_file: String,
    pub price: f64,
}


impl ProductDocument {

    /// Documento sin identificador, listo para que la base de datos le asigne uno.
    ///
    /// Cualquier id que traiga el producto se descarta.
    pub fn for_insert(product: &Product) -> Self {
        Self {
            id: None,
            name: product.name.clone(),
            category: product.category.clone(),
            summary: product.summary.clone(),
            description: product.description.clone(),
            image_file: product.image_file.clone(),
            price: product.price,
        }
    }

    /// Documento completo para un reemplazo; el producto debe traer un id válido.
    pub fn for_replace(product: &Product) -> Result<Self, RepositoryError> {
        let id = product.id.as_deref().ok_or(RepositoryError::MissingId)?;
        Ok(Self {
            id: Some(parse_object_id(id)?),
            ..Self::for_insert(product)
        })
    }
}


impl From<ProductDocument> for Product {
    fn from(doc: ProductDocument) -> Self {
        Product {
            id: doc.id.map(|oid| oid.to_hex()),
            name: doc.name,
            category: doc.category,
            summary: doc.summary,
            description: doc.description,
            image_file: doc.image_file,
            price: doc.price,
        }
    }
}


/// Errores del almacén de documentos.
///
/// El controlador los colapsa todos en un 500 genérico; la distinción solo
/// sirve para los logs del servidor.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Fallo de red, autenticación o selección de servidor.
    #[error("sin conexión con el almacén de documentos: {0}")]
    Connectivity(#[source] mongodb::error::Error),

    /// Cualquier otro fallo del driver (consulta, escritura, serialización).
    #[error("el almacén de documentos rechazó la operación: {0}")]
    Query(#[source] mongodb::error::Error),

    #[error("identificador de producto inválido: {0:?}")]
    InvalidId(String),

    #[error("el producto no tiene identificador")]
    MissingId,
}


impl From<mongodb::error::Error> for RepositoryError {
    fn from(error: mongodb::error::Error) -> Self {
        if is_connectivity(&error.kind) {
            RepositoryError::Connectivity(error)
        } else {
            RepositoryError::Query(error)
        }
    }
}


fn is_connectivity(kind: &ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::Io(_)
            | ErrorKind::Authentication { .. }
            | ErrorKind::ServerSelection { .. }
            | ErrorKind::DnsResolve { .. }
            | ErrorKind::ConnectionPoolCleared { .. }
    )
}


/// Interpreta un identificador hexadecimal de 24 caracteres.
pub fn parse_object_id(id: &str) -> Result<ObjectId, RepositoryError> {
    ObjectId::parse_str(id).map_err(|_| RepositoryError::InvalidId(id.to_string()))
}
