//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Este módulo implementa el router que mapea targets HTTP a handlers.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → Router → Handler → Response
//! ```
//!
//! La tabla de rutas se construye una sola vez al arrancar y es inmutable
//! después: no hay registro dinámico. Cada entrada es un matcher (exacto o
//! por prefijo) más su handler, y se evalúan en orden de registro. Los
//! prefijos registrados son mutuamente excluyentes, así que ningún target
//! puede hacer match con más de un handler. Si ninguna entrada hace match,
//! responde el handler de 404.

use crate::handlers::{not_found_handler, HandlerContext};
use crate::http::{Request, Response};

/// Regla de match sobre el target del request
#[derive(Debug, Clone, Copy)]
pub enum PathMatch {
    /// El target debe ser exactamente igual (ej: "/user-agent")
    Exact(&'static str),

    /// El target debe empezar con el prefijo (ej: "/echo/")
    Prefix(&'static str),
}

impl PathMatch {
    /// Evalúa la regla contra un target
    fn matches(&self, target: &str) -> bool {
        match self {
            PathMatch::Exact(path) => target == *path,
            PathMatch::Prefix(prefix) => target.starts_with(prefix),
        }
    }
}

/// Tipo de función handler
///
/// Un handler recibe un Request más el contexto compartido y retorna
/// una Response
pub type Handler = fn(&Request, &HandlerContext) -> Response;

/// Router que mapea targets a handlers
pub struct Router {
    /// Tabla de (matcher, handler) en orden de prioridad
    routes: Vec<(PathMatch, Handler)>,
}

impl Router {
    /// Crea un nuevo router vacío
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Registra una ruta con su handler
    ///
    /// Las rutas se evalúan en el orden en que se registran; este método
    /// solo se llama durante el arranque del servidor.
    ///
    /// # Ejemplo
    /// ```
    /// use file_server::router::{PathMatch, Router};
    /// use file_server::handlers::echo_handler;
    ///
    /// let mut router = Router::new();
    /// router.register(PathMatch::Prefix("/echo/"), echo_handler);
    /// ```
    pub fn register(&mut self, matcher: PathMatch, handler: Handler) {
        self.routes.push((matcher, handler));
    }

    /// Encuentra y ejecuta el handler apropiado para un request
    ///
    /// Si ninguna regla hace match con el target, ejecuta el handler de 404.
    /// En todos los casos agrega los headers comunes a la respuesta.
    pub fn dispatch(&self, request: &Request, ctx: &HandlerContext) -> Response {
        let target = request.target();

        let handler = self
            .routes
            .iter()
            .find(|(matcher, _)| matcher.matches(target))
            .map(|(_, handler)| *handler)
            .unwrap_or(not_found_handler);

        let mut response = handler(request, ctx);
        self.add_common_headers(&mut response);
        response
    }

    /// Agrega headers comunes a todas las respuestas
    fn add_common_headers(&self, response: &mut Response) {
        response.add_header("Server", "RedUnix-HTTP/1.1");
        response.add_header("Connection", "close");
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
