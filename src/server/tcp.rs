//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Implementación del servidor TCP que maneja múltiples conexiones
//! simultáneas usando threads. Cada conexión se procesa en su propio thread
//! y atiende exactamente un request: leer, parsear, enrutar, responder y
//! cerrar. Los workers no comparten estado mutable, así que no hay locks.

use crate::config::Config;
use crate::handlers::{self, HandlerContext};
use crate::http::{ParseError, Request, Response, StatusCode};
use crate::router::{PathMatch, Router};
use crate::server::reader::{self, ReadError};
use std::io::{self, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// Servidor HTTP/1.1 concurrente
pub struct Server {
    config: Config,
    router: Arc<Router>,
    context: Arc<HandlerContext>,
    listener: Option<TcpListener>,
}

/// Construye la tabla de rutas fija del servidor
///
/// El orden de registro es el orden de prioridad del match:
/// prefijo /echo/, /user-agent exacto, prefijo /files/, raíz exacta.
fn build_router() -> Router {
    let mut router = Router::new();

    router.register(PathMatch::Prefix("/echo/"), handlers::echo_handler);
    router.register(PathMatch::Exact("/user-agent"), handlers::user_agent_handler);
    router.register(PathMatch::Prefix("/files/"), handlers::file_handler);
    router.register(PathMatch::Exact("/"), handlers::root_handler);

    router
}

impl Server {
    pub fn new(config: Config) -> Self {
        let context = HandlerContext::from_config(&config);

        Self {
            config,
            router: Arc::new(build_router()),
            context: Arc::new(context),
            listener: None,
        }
    }

    /// Hace bind del listener y retorna la dirección local
    ///
    /// Separado de `run()` para poder usar puerto 0 (efímero) en tests y
    /// conocer el puerto asignado antes de empezar a aceptar conexiones.
    pub fn bind(&mut self) -> io::Result<SocketAddr> {
        let address = self.config.address();
        println!("[*] Iniciando servidor en {}", address);

        let listener = TcpListener::bind(&address)?;
        let local_addr = listener.local_addr()?;
        self.listener = Some(listener);

        Ok(local_addr)
    }

    /// Acepta conexiones para siempre, una por thread
    pub fn run(&mut self) -> io::Result<()> {
        if self.listener.is_none() {
            self.bind()?;
        }
        let Some(listener) = self.listener.as_ref() else {
            return Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "listener not initialized",
            ));
        };

        println!("[+] Servidor escuchando en {}", listener.local_addr()?);
        println!("[*] Modo concurrente: un thread por conexion\n");

        let read_timeout = self.config.read_timeout();

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let router = Arc::clone(&self.router);
                    let context = Arc::clone(&self.context);

                    let peer_addr = stream
                        .peer_addr()
                        .map(|addr| addr.to_string())
                        .unwrap_or_else(|_| "unknown".to_string());

                    println!(" ✅ Nueva conexión desde: {} (spawning thread)", peer_addr);

                    thread::spawn(move || {
                        if let Err(e) =
                            Self::handle_connection_static(stream, router, context, read_timeout)
                        {
                            eprintln!("   ❌ Error en thread: {}", e);
                        }
                    });
                }
                Err(e) => {
                    eprintln!("   ❌ Error al aceptar conexión: {}", e);
                }
            }
        }

        Ok(())
    }

    /// Atiende una conexión completa: un request, una response, cerrar
    ///
    /// Los errores de parseo se traducen a un status HTTP y la response se
    /// envía igual; el proceso nunca termina por un request malformado. El
    /// stream se cierra al salir de la función por cualquier camino (drop).
    fn handle_connection_static(
        mut stream: TcpStream,
        router: Arc<Router>,
        context: Arc<HandlerContext>,
        read_timeout: Option<Duration>,
    ) -> io::Result<()> {
        let start = Instant::now();

        // Generar Request ID único
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
            .hash(&mut hasher);
        thread::current().id().hash(&mut hasher);
        let request_id = format!("{:016x}", hasher.finish());
        let thread_id = format!("{:?}", thread::current().id());

        stream.set_read_timeout(read_timeout)?;

        let raw = match reader::read_request(&mut stream) {
            Ok(raw) => raw,
            Err(ReadError::IncompleteRequest) => {
                // El peer cerró antes de mandar un request completo:
                // no hay a quién responder
                println!("   ✅ Conexión cerrada sin request completo");
                return Ok(());
            }
            Err(ReadError::Io(e)) => return Err(e),
        };

        println!("   ✅ {} bytes [req_id: {}]", raw.len(), &request_id[..8]);

        let mut response = match Request::parse(&raw) {
            Ok(request) => {
                println!("   ✅ {} {}", request.method().as_str(), request.target());
                router.dispatch(&request, &context)
            }
            Err(e) => {
                println!("   ❌ Parse error: {}", e);
                let status = match e {
                    ParseError::UnsupportedMethod(_) => StatusCode::MethodNotAllowed,
                    _ => StatusCode::BadRequest,
                };
                Response::error(status, &format!("Invalid: {}", e))
            }
        };

        // Agregar headers de observabilidad
        response.add_header("X-Request-Id", &request_id);
        response.add_header("X-Worker-Thread", &thread_id);
        response.add_header("X-Worker-Pid", &std::process::id().to_string());

        stream.write_all(&response.to_bytes())?;
        stream.flush()?;

        let latency = start.elapsed();
        println!(
            "   ✅ {} ({:.2}ms)\n",
            response.status(),
            latency.as_secs_f64() * 1000.0
        );

        Ok(())
    }
}
