//! # Handlers Básicos
//! src/handlers/basic.rs
//!
//! Implementación de los handlers que no tocan el filesystem:
//! - /echo/{texto}: Refleja el texto del target
//! - /user-agent: Refleja el header User-Agent
//! - /: Respuesta vacía 200
//! - fallback: 404 Not Found

use super::HandlerContext;
use crate::http::{Request, Response, StatusCode};

/// Handler para /echo/{texto}
///
/// El body de la respuesta es el substring del target después del prefijo
/// `/echo/`, tomado verbatim: sin decodificar percent-encoding y con el
/// query string incluido si lo hay.
///
/// # Ejemplo
/// ```text
/// GET /echo/hola  ->  200, body "hola"
/// GET /echo/      ->  200, body ""
/// ```
pub fn echo_handler(req: &Request, _ctx: &HandlerContext) -> Response {
    let content = req.target().strip_prefix("/echo/").unwrap_or_default();

    Response::new(StatusCode::Ok)
        .with_header("Content-Type", "text/plain")
        .with_body(content)
}

/// Handler para /user-agent
///
/// Refleja el valor del header `User-Agent` (lookup case-insensitive).
/// Si el header está ausente, el body es la cadena vacía.
pub fn user_agent_handler(req: &Request, _ctx: &HandlerContext) -> Response {
    let agent = req.header("user-agent").unwrap_or_default();

    Response::new(StatusCode::Ok)
        .with_header("Content-Type", "text/plain")
        .with_body(agent)
}

/// Handler para la raíz (/)
///
/// Responde 200 con body vacío.
pub fn root_handler(_req: &Request, _ctx: &HandlerContext) -> Response {
    Response::new(StatusCode::Ok)
        .with_header("Content-Type", "text/plain")
        .with_body("")
}

/// Handler de fallback para rutas desconocidas
///
/// Responde 404 con body vacío.
pub fn not_found_handler(_req: &Request, _ctx: &HandlerContext) -> Response {
    Response::new(StatusCode::NotFound)
        .with_header("Content-Type", "text/html; charset=UTF-8")
        .with_body("")
}
