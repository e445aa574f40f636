//! Módulo de configuración central y gestión del entorno de ejecución.
//!
//! Este módulo actúa como la fuente única de verdad para la configuración del servicio.
//! Se encarga de leer las variables de entorno, establecer valores por defecto
//! y proveer las estructuras necesarias para iniciar los subsistemas (MongoDB, HTTP, Logging).
//!
//! # Funcionalidades Principales
//! * **Carga de Configuración:** Lee de `.env` en desarrollo y variables de sistema en producción.
//! * **Observabilidad:** Configura `tracing_subscriber` para logs estructurados o legibles.
//! * **Constantes Operativas:** Prefijo de rutas y valores por defecto.
//!


use std::env;
use std::error::Error;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};


/// Representa la configuración global del servicio y el estado del entorno.
///
/// Se construye una única vez al arrancar el proceso y se comparte (solo lectura)
/// a través del `AppContext`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct System {
    /// Cadena de conexión a MongoDB (ej. `mongodb://localhost:27017`).
    /// **Requerido**.
    pub connection_string: String,

    /// Nombre de la base de datos del catálogo.
    /// Por defecto: `CatalogDb`.
    pub database_name: String,

    /// Nombre de la colección de productos.
    /// Por defecto: `Products`.
    pub collection_name: String,

    /// Host donde escuchará el servidor HTTP.
    /// Por defecto: `0.0.0.0`.
    pub http_host: String,

    /// Puerto del servidor HTTP.
    /// Por defecto: `8000`.
    pub http_port: u16,

    /// Entorno de ejecución actual (`development`, `staging`, `production`).
    /// Afecta el formato de logs y la carga de archivos `.env`.
    pub environment: String,

    /// Nivel de detalle de los logs (ej. `info`, `debug`, `warn`).
    /// Se autoconfigura según el `environment` si no se especifica.
    pub rust_log: String,
}


impl System {

    /// Carga la configuración desde las variables de entorno del proceso.
    ///
    /// # Comportamiento
    /// * Si `ENVIRONMENT` es "development", intenta cargar un archivo `.env`.
    /// * Establece valores por defecto para variables opcionales.
    ///
    /// # Errores
    /// * Si `DATABASE_CONNECTION_STRING` no está definida.
    /// * Si `HTTP_PORT` no es un número válido.
    pub fn new() -> Result<Self, Box<dyn Error>> {

        let environment = env::var("ENVIRONMENT")
            .unwrap_or_else(|_| "development".into());

        if environment == "development" {
            dotenv::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construye la configuración a partir de una función de búsqueda arbitraria.
    ///
    /// Separa la lectura de variables de su interpretación, lo que permite
    /// probar los valores por defecto sin tocar el entorno real del proceso.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        info!("Info: creando objeto system");

        let environment = lookup("ENVIRONMENT")
            .unwrap_or_else(|| "development".into());

        let connection_string = lookup("DATABASE_CONNECTION_STRING")
            .ok_or("DATABASE_CONNECTION_STRING no está configurada")?;

        let http_port = lookup("HTTP_PORT")
            .unwrap_or_else(|| defaults::HTTP_PORT.to_string())
            .parse::<u16>()
            .map_err(|e| format!("HTTP_PORT debe ser un número: {e}"))?;

        let rust_log = lookup("RUST_LOG")
            .unwrap_or_else(|| {
                match environment.as_str() {
                    "development" => "debug".to_string(),
                    "staging" => "info".to_string(),
                    _ => "warn".to_string(),
                }
            });

        Ok(System {
            connection_string,
            database_name: lookup("DATABASE_NAME")
                .unwrap_or_else(|| defaults::DATABASE_NAME.to_string()),
            collection_name: lookup("COLLECTION_NAME")
                .unwrap_or_else(|| defaults::COLLECTION_NAME.to_string()),
            http_host: lookup("HTTP_HOST")
                .unwrap_or_else(|| defaults::HTTP_HOST.to_string()),
            http_port,
            rust_log,
            environment,
        })
    }

    /// Dirección `host:puerto` en la que se enlaza el servidor HTTP.
    pub fn http_address(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}


/// Inicializa el sistema de trazabilidad y logs (Tracing).
///
/// Configura el formato de salida basándose en el entorno:
/// * **Production**: Salida JSON (para logs estructurados en la nube).
/// * **Development/Otros**: Salida "Pretty" (colores y formato legible).
///
/// # Argumentos
/// * `system`: Referencia a la configuración cargada para leer el nivel de log (`rust_log`).
pub fn init_tracing(system: &System) {

    let filter = EnvFilter::try_new(&system.rust_log)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt().with_env_filter(filter).with_target(false);

    if system.environment == "production" {
        builder.json().init();
    } else {
        builder.pretty().init();
    }
}


/// Valores por defecto de la configuración.
pub mod defaults {
    pub const DATABASE_NAME: &str = "CatalogDb";
    pub const COLLECTION_NAME: &str = "Products";
    pub const HTTP_HOST: &str = "0.0.0.0";
    pub const HTTP_PORT: u16 = 8000;
}


/// Constantes de la API HTTP del catálogo.
pub mod http_const {
    /// Prefijo versionado bajo el que cuelgan todas las rutas del catálogo.
    pub const API_PREFIX: &str = "/api/v1/catalog";
    /// Longitud exacta de un identificador de producto (ObjectId en hexadecimal).
    pub const ID_LENGTH: usize = 24;
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn applies_defaults_when_only_connection_string_is_set() {
        let system = System::from_lookup(lookup_from(&[
            ("DATABASE_CONNECTION_STRING", "mongodb://localhost:27017"),
        ]))
        .unwrap();

        assert_eq!(system.connection_string, "mongodb://localhost:27017");
        assert_eq!(system.database_name, "CatalogDb");
        assert_eq!(system.collection_name, "Products");
        assert_eq!(system.http_address(), "0.0.0.0:8000");
        assert_eq!(system.environment, "development");
        assert_eq!(system.rust_log, "debug");
    }

    #[test]
    fn reads_every_variable() {
        let system = System::from_lookup(lookup_from(&[
            ("DATABASE_CONNECTION_STRING", "mongodb://db:27017"),
            ("DATABASE_NAME", "Shop"),
            ("COLLECTION_NAME", "Items"),
            ("HTTP_HOST", "127.0.0.1"),
            ("HTTP_PORT", "9090"),
            ("ENVIRONMENT", "production"),
            ("RUST_LOG", "trace"),
        ]))
        .unwrap();

        assert_eq!(system.database_name, "Shop");
        assert_eq!(system.collection_name, "Items");
        assert_eq!(system.http_address(), "127.0.0.1:9090");
        assert_eq!(system.environment, "production");
        assert_eq!(system.rust_log, "trace");
    }

    #[test]
    fn log_level_follows_environment() {
        let staging = System::from_lookup(lookup_from(&[
            ("DATABASE_CONNECTION_STRING", "mongodb://db"),
            ("ENVIRONMENT", "staging"),
        ]))
        .unwrap();
        let production = System::from_lookup(lookup_from(&[
            ("DATABASE_CONNECTION_STRING", "mongodb://db"),
            ("ENVIRONMENT", "production"),
        ]))
        .unwrap();

        assert_eq!(staging.rust_log, "info");
        assert_eq!(production.rust_log, "warn");
    }

    #[test]
    fn missing_connection_string_is_an_error() {
        let err = System::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("DATABASE_CONNECTION_STRING"));
    }

    #[test]
    fn invalid_port_is_an_error() {
        let result = System::from_lookup(lookup_from(&[
            ("DATABASE_CONNECTION_STRING", "mongodb://db"),
            ("HTTP_PORT", "ochenta"),
        ]));
        assert!(result.is_err());
    }
}
