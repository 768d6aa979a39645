//! # Handlers de Archivos
//! src/handlers/files.rs
//!
//! Implementación de las rutas /files/{nombre} sobre el serve root:
//! - GET: Lee el archivo completo y lo devuelve como octet-stream
//! - POST: Escribe el body del request al archivo (crea o trunca)
//!
//! El contenido se maneja como bytes crudos en ambas direcciones: un POST
//! seguido de un GET del mismo nombre devuelve bytes idénticos, incluso con
//! payloads binarios. El nombre de archivo se valida para que nunca pueda
//! escapar del serve root.

use super::HandlerContext;
use crate::http::{Method, Request, Response, StatusCode};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Handler para /files/{nombre}
///
/// Despacha según el método HTTP: GET lee, POST escribe. La validación del
/// nombre y la resolución contra el serve root son comunes a ambos.
pub fn file_handler(req: &Request, ctx: &HandlerContext) -> Response {
    // Sin serve root configurado, las rutas de archivos no existen
    let Some(serve_root) = &ctx.serve_root else {
        return Response::error(
            StatusCode::NotFound,
            "File serving is disabled: no serve root configured",
        );
    };

    let name = req.target().strip_prefix("/files/").unwrap_or_default();

    // Validar nombre de archivo: un nombre plano, sin separadores ni "..",
    // no puede resolver fuera del serve root
    if !is_valid_filename(name) {
        return Response::error(StatusCode::BadRequest, "Invalid filename");
    }

    let path = serve_root.join(name);

    match req.method() {
        Method::GET => file_get(&path),
        Method::POST => file_post(&path, req.body()),
    }
}

/// Valida un nombre de archivo extraído del target
///
/// Rechaza nombres vacíos, con `..`, o con separadores de path.
fn is_valid_filename(name: &str) -> bool {
    !name.is_empty() && !name.contains("..") && !name.contains('/') && !name.contains('\\')
}

/// Lee el archivo y construye la respuesta GET
///
/// - Archivo presente: 200 con los bytes exactos del archivo
/// - Archivo ausente: 404 con body vacío
/// - Otro fallo de I/O (permisos, etc.): 500
fn file_get(path: &Path) -> Response {
    match fs::read(path) {
        Ok(content) => Response::new(StatusCode::Ok)
            .with_header("Content-Type", "application/octet-stream")
            .with_body_bytes(content),
        Err(e) if e.kind() == ErrorKind::NotFound => Response::new(StatusCode::NotFound),
        Err(e) => Response::error(
            StatusCode::InternalServerError,
            &format!("Failed to read file: {}", e),
        ),
    }
}

/// Escribe el body al archivo y construye la respuesta POST
///
/// `fs::write` crea o trunca el archivo en una sola operación, así que dos
/// POSTs concurrentes al mismo nombre terminan en last-writer-wins sin dejar
/// contenido mezclado de escrituras parciales.
///
/// - Escritura exitosa: 201 con body vacío
/// - Fallo de I/O (permisos, disco): 500, el proceso sigue sirviendo
fn file_post(path: &Path, body: &[u8]) -> Response {
    match fs::write(path, body) {
        Ok(()) => Response::new(StatusCode::Created),
        Err(e) => Response::error(
            StatusCode::InternalServerError,
            &format!("Failed to write file: {}", e),
        ),
    }
}
