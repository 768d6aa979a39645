//! # File Server
//! src/lib.rs
//!
//! Servidor HTTP/1.1 concurrente implementado desde cero: acepta una conexión
//! TCP, lee y parsea exactamente un request, lo enruta a un handler fijo y
//! escribe la response. Una conexión = un request = una response.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: Parsing de requests y construcción de responses HTTP/1.1
//! - `server`: Lectura incremental de bytes, servidor TCP y manejo de conexiones
//! - `router`: Enrutamiento de peticiones a handlers (match exacto o por prefijo)
//! - `handlers`: Implementación de los handlers (echo, user-agent, archivos, raíz)
//! - `config`: Configuración por CLI y variables de entorno
//!
//! ## Ejemplo de uso
//!
//! ```ignore
//! use file_server::config::Config;
//! use file_server::server::Server;
//!
//! let config = Config::default();
//! let mut server = Server::new(config);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod handlers;
pub mod http;
pub mod router;
pub mod server;
