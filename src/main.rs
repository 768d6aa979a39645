//! # File Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor HTTP/1.1.
//!
//! Parsea la configuración desde CLI/env, la valida y arranca el
//! servidor TCP. El loop de accept bloquea este thread para siempre.

use file_server::config::Config;
use file_server::server::Server;

fn main() {
    println!("=================================");
    println!("  RedUnix HTTP/1.1 File Server");
    println!("=================================\n");

    // Crear configuración desde argumentos CLI y variables de entorno
    let config = Config::new();

    if let Err(e) = config.validate() {
        eprintln!("💥 Configuración inválida: {}", e);
        std::process::exit(1);
    }

    config.print_summary();

    // Crear el servidor
    let mut server = Server::new(config);

    // Iniciar el servidor (esto bloqueará el thread)
    if let Err(e) = server.run() {
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}
