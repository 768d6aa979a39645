//! # Handlers del Servidor
//!
//! Este módulo contiene la implementación de todos los handlers
//! que el servidor puede ejecutar.
//!
//! ## Categorías de handlers
//!
//! - **basic**: Handlers puros sobre el request (echo, user-agent, raíz, 404)
//! - **files**: Handlers de archivos bajo el serve root (GET y POST)
//!
//! Cada handler es una función que recibe un Request más el contexto
//! compartido y retorna una Response. Ningún handler escribe al socket:
//! eso lo hace el servidor, lo que mantiene a los handlers testeables
//! sin red de por medio.

pub mod basic;
pub mod files;

// Re-exportar funciones útiles
pub use basic::*;
pub use files::*;

use crate::config::Config;
use std::path::PathBuf;

/// Contexto inmutable compartido por todos los handlers
///
/// Se construye una vez al arrancar el servidor y nunca se muta después;
/// los handlers de archivos lo usan para resolver rutas bajo el serve root.
#[derive(Debug, Clone)]
pub struct HandlerContext {
    /// Directorio raíz para /files/*; `None` deshabilita esas rutas
    pub serve_root: Option<PathBuf>,
}

impl HandlerContext {
    /// Crea un contexto con el serve root indicado
    pub fn new(serve_root: Option<PathBuf>) -> Self {
        Self { serve_root }
    }

    /// Crea el contexto a partir de la configuración del servidor
    pub fn from_config(config: &Config) -> Self {
        Self {
            serve_root: config.serve_root.as_ref().map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_from_config_without_serve_root() {
        let config = Config::default();
        let context = HandlerContext::from_config(&config);
        assert!(context.serve_root.is_none());
    }

    #[test]
    fn test_context_from_config_with_serve_root() {
        let mut config = Config::default();
        config.serve_root = Some("/tmp/data".to_string());
        let context = HandlerContext::from_config(&config);
        assert_eq!(context.serve_root, Some(PathBuf::from("/tmp/data")));
    }
}
