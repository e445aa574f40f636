//! Carga inicial del catálogo.
//!
//! Si la colección está vacía al conectar, se insertan los productos de ejemplo.
//! No es un mecanismo de migración: si la inserción falla a medias la colección
//! queda incompleta y el siguiente arranque no lo repara, porque ya no está vacía.


use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Collection;
use tracing::{debug, info};
use crate::database::domain::{ProductDocument, RepositoryError};


/// Inserta los productos de ejemplo solo si la colección no tiene ningún documento.
///
/// # Retorno
/// * `true`: la colección estaba vacía y se sembró.
/// * `false`: ya había datos; no se tocó nada.
pub async fn seed_if_empty(collection: &Collection<ProductDocument>) -> Result<bool, RepositoryError> {

    if collection.find_one(doc! {}).await?.is_some() {
        debug!("Debug: la colección {} ya tiene datos, se omite la siembra", collection.name());
        return Ok(false);
    }

    let products = seed_products();
    let total = products.len();
    collection.insert_many(products).await?;

    info!("Info: colección {} sembrada con {} productos", collection.name(), total);
    Ok(true)
}


/// Conjunto fijo de productos con el que arranca un catálogo vacío.
pub fn seed_products() -> Vec<ProductDocument> {
    const DESCRIPTION: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Ut, \
        tenetur natus doloremque laborum quos iste ipsum rerum obcaecati impedit odit illo \
        dolorum ab tempora nihil dicta earum fugiat. Temporibus, voluptatibus.";

    [
        ("602d2149e773f2a3990b47f5", "IPhone X", "product-1.png", 950.00),
        ("602d2149e773f2a3990b47f6", "Samsung 10", "product-2.png", 840.00),
        ("602d2149e773f2a3990b47f7", "Huawei Plus", "product-3.png", 650.00),
        ("602d2149e773f2a3990b47f8", "Xiaomi Mi 9", "product-4.png", 470.00),
        ("602d2149e773f2a3990b47f9", "HTC U11+ Plus", "product-5.png", 380.00),
        ("602d2149e773f2a3990b47fa", "LG G7 ThinQ", "product-6.png", 240.00),
    ]
    .into_iter()
    .map(|(id, name, image_file, price)| ProductDocument {
        id: ObjectId::parse_str(id).ok(),
        name: name.to_string(),
        category: "Smart Phone".to_string(),
        summary: "This phone is the company's biggest change to its flagship smartphone in years."
            .to_string(),
        description: DESCRIPTION.to_string(),
        image_file: image_file.to_string(),
        price,
    })
    .collect()
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_set_is_fixed_and_complete() {
        let products = seed_products();

        assert_eq!(products.len(), 6);
        assert!(products.iter().all(|p| p.id.is_some()));
        assert!(products.iter().all(|p| p.category == "Smart Phone"));
        assert!(products.iter().all(|p| p.price >= 0.0));
        assert_eq!(products[0].name, "IPhone X");
        assert_eq!(
            products[0].id.map(|oid| oid.to_hex()).as_deref(),
            Some("602d2149e773f2a3990b47f5")
        );
    }

    #[test]
    fn seed_ids_are_unique() {
        let ids: HashSet<_> = seed_products().into_iter().filter_map(|p| p.id).collect();
        assert_eq!(ids.len(), 6);
    }
}
