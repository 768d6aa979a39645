//! # Lector Incremental de Requests
//! src/server/reader.rs
//!
//! Este módulo lee un request HTTP completo desde una fuente de bytes.
//!
//! Un solo `read()` con buffer fijo truncaría requests cuyos headers o body
//! superen el tamaño del buffer. Acá se lee en un loop que acumula en un
//! `Vec<u8>` creciente hasta que:
//!
//! 1. Aparece el terminador de headers (`\r\n\r\n`)
//! 2. Llegaron además los `Content-Length` bytes del body declarado
//!
//! Si la conexión se cierra antes de cualquiera de los dos puntos, el
//! request es incompleto: se señala con [`ReadError::IncompleteRequest`] y
//! el servidor cierra la conexión sin responder (nunca es fatal para el
//! proceso). El timeout de lectura no vive acá: se configura en el socket
//! desde la capa TCP, y aparece como `ReadError::Io`.

use crate::http::request::find_header_end;
use std::io::{self, Read};

/// Tamaño del buffer de lectura por iteración
const READ_CHUNK_SIZE: usize = 1024;

/// Errores al leer un request desde la conexión
#[derive(Debug)]
pub enum ReadError {
    /// La conexión se cerró antes de recibir el request completo
    IncompleteRequest,

    /// Error de transporte (incluye timeout de lectura del socket)
    Io(io::Error),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadError::IncompleteRequest => write!(f, "Connection closed before full request"),
            ReadError::Io(e) => write!(f, "I/O error while reading request: {}", e),
        }
    }
}

impl std::error::Error for ReadError {}

/// Lee un request HTTP completo desde la fuente de bytes
///
/// Retorna el buffer crudo con headers y body, listo para
/// [`Request::parse`](crate::http::Request::parse).
///
/// # Ejemplo
///
/// ```
/// use file_server::server::reader::read_request;
/// use std::io::Cursor;
///
/// let mut stream = Cursor::new(b"GET / HTTP/1.1\r\n\r\n".to_vec());
/// let raw = read_request(&mut stream).unwrap();
/// assert_eq!(raw, b"GET / HTTP/1.1\r\n\r\n");
/// ```
pub fn read_request(stream: &mut impl Read) -> Result<Vec<u8>, ReadError> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; READ_CHUNK_SIZE];

    // Fase 1: acumular hasta ver el terminador de headers
    let header_end = loop {
        if let Some(pos) = find_header_end(&buffer) {
            break pos;
        }

        let n = stream.read(&mut chunk).map_err(ReadError::Io)?;
        if n == 0 {
            return Err(ReadError::IncompleteRequest);
        }
        buffer.extend_from_slice(&chunk[..n]);
    };

    // Fase 2: acumular el body según el Content-Length declarado
    let needed = (header_end + 4).saturating_add(scan_content_length(&buffer[..header_end]));
    while buffer.len() < needed {
        let n = stream.read(&mut chunk).map_err(ReadError::Io)?;
        if n == 0 {
            return Err(ReadError::IncompleteRequest);
        }
        buffer.extend_from_slice(&chunk[..n]);
    }

    Ok(buffer)
}

/// Extrae el valor de Content-Length del bloque de headers
///
/// Lookup case-insensitive sobre las líneas del head. Un valor ausente o
/// no numérico se trata como 0 en esta capa: el parser es quien rechaza
/// después el request con 400, acá solo se decide cuánto falta por leer.
fn scan_content_length(head: &[u8]) -> usize {
    let head = String::from_utf8_lossy(head);

    for line in head.split("\r\n").skip(1) {
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-length") {
                return value.trim().parse().unwrap_or(0);
            }
        }
    }

    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Fuente de bytes que entrega de a `chunk` bytes por read(), para
    /// simular un stream de red que llega en pedazos
    struct ChunkedSource {
        data: Vec<u8>,
        pos: usize,
        chunk: usize,
    }

    impl ChunkedSource {
        fn new(data: &[u8], chunk: usize) -> Self {
            Self {
                data: data.to_vec(),
                pos: 0,
                chunk,
            }
        }
    }

    impl Read for ChunkedSource {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let remaining = self.data.len() - self.pos;
            let n = remaining.min(self.chunk).min(buf.len());
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    #[test]
    fn test_read_simple_request() {
        let mut stream = Cursor::new(b"GET / HTTP/1.1\r\n\r\n".to_vec());
        let raw = read_request(&mut stream).unwrap();

        assert_eq!(raw, b"GET / HTTP/1.1\r\n\r\n");
    }

    #[test]
    fn test_read_request_with_body() {
        let data = b"POST /files/a HTTP/1.1\r\nContent-Length: 5\r\n\r\nhola!";
        let mut stream = Cursor::new(data.to_vec());
        let raw = read_request(&mut stream).unwrap();

        assert_eq!(raw, data);
    }

    #[test]
    fn test_read_headers_larger_than_one_chunk() {
        // Headers que superan con creces el buffer de 1024 bytes: un solo
        // read() fijo los truncaría
        let big_value = "v".repeat(5000);
        let data = format!("GET / HTTP/1.1\r\nX-Big: {}\r\n\r\n", big_value);
        let mut stream = Cursor::new(data.clone().into_bytes());

        let raw = read_request(&mut stream).unwrap();
        assert_eq!(raw, data.as_bytes());
    }

    #[test]
    fn test_read_body_arrives_in_pieces() {
        // El body llega de a 7 bytes por read(); hay que seguir leyendo
        // hasta completar el Content-Length
        let body = vec![0xABu8; 3000];
        let mut data = format!("POST /files/b HTTP/1.1\r\nContent-Length: {}\r\n\r\n", body.len())
            .into_bytes();
        data.extend_from_slice(&body);

        let mut stream = ChunkedSource::new(&data, 7);
        let raw = read_request(&mut stream).unwrap();

        assert_eq!(raw, data);
    }

    #[test]
    fn test_read_binary_body_with_terminator_bytes() {
        // Un body que contiene \r\n\r\n no debe confundir la fase 2
        let body = b"inicio\r\n\r\nfinal";
        let mut data = format!("POST /files/c HTTP/1.1\r\nContent-Length: {}\r\n\r\n", body.len())
            .into_bytes();
        data.extend_from_slice(body);

        let mut stream = ChunkedSource::new(&data, 3);
        let raw = read_request(&mut stream).unwrap();

        assert_eq!(raw, data);
    }

    #[test]
    fn test_eof_before_header_terminator() {
        let mut stream = Cursor::new(b"GET / HTTP/1.1\r\nHost: local".to_vec());
        let result = read_request(&mut stream);

        assert!(matches!(result, Err(ReadError::IncompleteRequest)));
    }

    #[test]
    fn test_eof_on_empty_connection() {
        let mut stream = Cursor::new(Vec::new());
        let result = read_request(&mut stream);

        assert!(matches!(result, Err(ReadError::IncompleteRequest)));
    }

    #[test]
    fn test_eof_before_body_complete() {
        let data = b"POST /files/a HTTP/1.1\r\nContent-Length: 100\r\n\r\ncorto";
        let mut stream = Cursor::new(data.to_vec());
        let result = read_request(&mut stream);

        assert!(matches!(result, Err(ReadError::IncompleteRequest)));
    }

    #[test]
    fn test_scan_content_length() {
        assert_eq!(
            scan_content_length(b"POST / HTTP/1.1\r\nContent-Length: 42"),
            42
        );
        assert_eq!(
            scan_content_length(b"POST / HTTP/1.1\r\ncontent-length: 7"),
            7
        );
        assert_eq!(scan_content_length(b"GET / HTTP/1.1"), 0);
        // Valor no numérico: 0 en esta capa, el parser responde 400 después
        assert_eq!(
            scan_content_length(b"POST / HTTP/1.1\r\nContent-Length: abc"),
            0
        );
    }
}
