//! # Módulo HTTP
//!
//! Este módulo implementa el protocolo HTTP/1.1 desde cero, sin usar
//! librerías de alto nivel. Incluye:
//!
//! - Parsing de requests HTTP/1.1
//! - Construcción de responses HTTP
//! - Manejo de status codes
//!
//! ## Alcance del protocolo
//!
//! El servidor implementa el subconjunto mínimo de HTTP/1.1 necesario para
//! atender un request por conexión:
//! - Sin conexiones persistentes (keep-alive)
//! - Sin chunked transfer encoding (solo `Content-Length`)
//! - Sin negociación de contenido ni compresión
//!
//! ### Formato de Request
//!
//! ```text
//! GET /echo/hola HTTP/1.1\r\n
//! Header-Name: Header-Value\r\n
//! Another-Header: Value\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 4\r\n
//! \r\n
//! hola
//! ```
//!
//! El body se maneja SIEMPRE como bytes crudos: los archivos servidos pueden
//! ser binarios y no deben pasar por conversión a texto.

pub mod request;   // Parsing de HTTP requests
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
// Esto permite usar `http::Request` en vez de `http::request::Request`
pub use request::{Method, ParseError, Request};
pub use response::Response;
pub use status::StatusCode;
