//! Modelo de dominio del catálogo.
//!
//! `Product` es la única entidad del servicio. Esta es la forma en la que viaja
//! por HTTP (JSON); la representación almacenada en MongoDB vive en
//! `database::domain::ProductDocument`.


use serde::{Deserialize, Serialize};


/// Producto del catálogo.
///
/// El identificador lo asigna la base de datos al crear el producto y no cambia
/// después. El precio no se valida: que sea no negativo es responsabilidad de quien llama.
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    pub id: Option<String>,
    pub name: String,
    pub category: String,
    pub summary: String,
    pub description: String,
    pub image_file: String,
    pub price: f64,
}


impl Product {

    /// Copia del producto con el identificador indicado.
    pub fn with_id(&self, id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..self.clone()
        }
    }
}
