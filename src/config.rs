//! # Configuración del Servidor
//! src/config.rs
//!
//! Este módulo define la configuración del servidor HTTP con soporte
//! para argumentos CLI y variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./file_server --port 4221 --directory /tmp/data
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=4221 SERVE_ROOT=/tmp/data ./file_server
//! ```

use clap::Parser;
use std::path::Path;
use std::time::Duration;

/// Configuración del servidor HTTP/1.1
#[derive(Debug, Clone, Parser)]
#[command(name = "file_server")]
#[command(about = "Servidor HTTP/1.1 concurrente con servicio de archivos")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "4221", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "127.0.0.1", env = "HTTP_HOST")]
    pub host: String,

    /// Directorio raíz para los handlers de archivos (/files/*)
    ///
    /// Si no se indica, las rutas /files/* responden 404.
    #[arg(long = "directory", env = "SERVE_ROOT")]
    pub serve_root: Option<String>,

    /// Timeout de lectura por conexión en milisegundos (0 = sin timeout)
    #[arg(long = "read-timeout", default_value = "5000", env = "READ_TIMEOUT_MS")]
    pub read_timeout_ms: u64,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    ///
    /// # Ejemplo
    /// ```ignore
    /// use file_server::config::Config;
    ///
    /// let config = Config::new();
    /// println!("Server listening on {}", config.address());
    /// ```
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use file_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "127.0.0.1:4221");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Timeout de lectura como `Duration` (`None` si está deshabilitado)
    pub fn read_timeout(&self) -> Option<Duration> {
        if self.read_timeout_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.read_timeout_ms))
        }
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        // Validar serve root: si se indica, debe ser un directorio existente
        if let Some(dir) = &self.serve_root {
            if !Path::new(dir).is_dir() {
                return Err(format!("Serve root is not a directory: {}", dir));
            }
        }

        Ok(())
    }

    /// Imprime un resumen de la configuración
    pub fn print_summary(&self) {
        println!("╔══════════════════════════════════════════════════════════════╗");
        println!("║          RedUnix HTTP/1.1 File Server Configuration          ║");
        println!("╚══════════════════════════════════════════════════════════════╝");
        println!();
        println!("🌐 Network:");
        println!("   Address:      {}", self.address());

        match &self.serve_root {
            Some(dir) => println!("   Serve root:   {}", dir),
            None => println!("   Serve root:   (no configurado, /files/* responde 404)"),
        }

        if self.read_timeout_ms > 0 {
            println!("   Read timeout: {} ms", self.read_timeout_ms);
        } else {
            println!("   Read timeout: disabled");
        }

        println!();
        println!("═══════════════════════════════════════════════════════════════");
        println!();
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 4221,
            host: "127.0.0.1".to_string(),
            serve_root: None,
            read_timeout_ms: 5_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 4221);
        assert_eq!(config.host, "127.0.0.1");
        assert!(config.serve_root.is_none());
        assert_eq!(config.read_timeout_ms, 5_000);
    }

    #[test]
    fn test_address() {
        let config = Config::default();
        assert_eq!(config.address(), "127.0.0.1:4221");
    }

    #[test]
    fn test_address_custom() {
        let mut config = Config::default();
        config.host = "0.0.0.0".to_string();
        config.port = 3000;
        assert_eq!(config.address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_read_timeout_enabled() {
        let config = Config::default();
        assert_eq!(config.read_timeout(), Some(Duration::from_millis(5_000)));
    }

    #[test]
    fn test_read_timeout_disabled() {
        let mut config = Config::default();
        config.read_timeout_ms = 0;
        assert_eq!(config.read_timeout(), None);
    }

    #[test]
    fn test_validate_success_without_serve_root() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_serve_root_exists() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.serve_root = Some(dir.path().to_string_lossy().into_owned());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_serve_root_missing() {
        let mut config = Config::default();
        config.serve_root = Some("/definitely/not/a/real/dir".to_string());
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Serve root"));
    }

    #[test]
    fn test_config_print_summary() {
        let config = Config::default();
        // Should not panic
        config.print_summary();
    }

    #[test]
    fn test_config_print_summary_with_serve_root() {
        let mut config = Config::default();
        config.serve_root = Some("/tmp".to_string());
        config.read_timeout_ms = 0;
        // Should not panic
        config.print_summary();
    }
}
