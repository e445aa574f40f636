use std::error::Error;
use tracing::{error, info};
use crate::catalog::logic::start_http;
use crate::context::domain::AppContext;
use crate::system::domain::{init_tracing, System};

mod catalog;
mod context;
mod database;
mod product;
mod system;


#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {

    let system = System::new()?;
    init_tracing(&system);

    info!("Info: iniciando servicio de catálogo ({})", system.environment);

    let app_context = match AppContext::new(system).await {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error: no se pudo inicializar el almacén de documentos: {e}");
            return Err(e.into());
        }
    };

    start_http(app_context).await?;

    Ok(())
}
