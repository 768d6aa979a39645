//! # Parsing de Requests HTTP/1.1
//! src/http/request.rs
//!
//! Este módulo implementa un parser HTTP/1.1 desde cero.
//!
//! ## Formato de un Request HTTP/1.1
//!
//! ```text
//! POST /files/notas.txt HTTP/1.1\r\n
//! Host: localhost:4221\r\n
//! Content-Length: 5\r\n
//! \r\n
//! hola!
//! ```
//!
//! ## Componentes
//!
//! 1. **Request Line**: `METHOD /target HTTP/1.1` (exactamente 3 tokens)
//! 2. **Headers**: Pares `Name: Value` (uno por línea)
//! 3. **Empty Line**: `\r\n` que separa headers del body
//! 4. **Body**: Exactamente `Content-Length` bytes crudos (puede ser binario)
//!
//! El head (request line + headers) debe ser UTF-8; el body NUNCA pasa por
//! conversión a texto. Los archivos subidos por POST pueden contener bytes
//! nulos o secuencias no UTF-8 y deben llegar intactos al handler.

use std::collections::HashMap;

/// Métodos HTTP soportados
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Obtener un recurso
    GET,

    /// POST - Enviar datos a un recurso
    POST,
}

impl Method {
    /// Parsea un método HTTP desde un string
    ///
    /// # Errores
    ///
    /// Retorna error si el método no es soportado
    fn from_str(s: &str) -> Result<Self, ParseError> {
        match s {
            "GET" => Ok(Method::GET),
            "POST" => Ok(Method::POST),
            _ => Err(ParseError::UnsupportedMethod(s.to_string())),
        }
    }

    /// Convierte el método a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
        }
    }
}

/// Representa un request HTTP/1.1 parseado
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// Método HTTP (GET, POST)
    method: Method,

    /// Target crudo de la request line: path + query opcional, sin decodificar
    /// (ej: "/echo/hola" o "/files/notas.txt")
    target: String,

    /// Versión HTTP (siempre "HTTP/1.1")
    version: String,

    /// Headers HTTP con el nombre en minúsculas
    /// (ej: {"user-agent": "curl/8.0"}); la última ocurrencia gana
    headers: HashMap<String, String>,

    /// Body del request: exactamente Content-Length bytes crudos
    body: Vec<u8>,
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Request incompleto: falta el terminador de headers o bytes del body
    IncompleteRequest,

    /// La request line no tiene exactamente 3 tokens
    MalformedRequestLine,

    /// Método HTTP no soportado
    UnsupportedMethod(String),

    /// Versión HTTP distinta de HTTP/1.1
    InvalidHttpVersion(String),

    /// El valor de Content-Length no es un número
    InvalidContentLength(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::IncompleteRequest => write!(f, "Incomplete HTTP request"),
            ParseError::MalformedRequestLine => write!(f, "Malformed request line"),
            ParseError::UnsupportedMethod(m) => write!(f, "Unsupported HTTP method: {}", m),
            ParseError::InvalidHttpVersion(v) => write!(f, "Invalid HTTP version: {}", v),
            ParseError::InvalidContentLength(v) => write!(f, "Invalid Content-Length: {}", v),
        }
    }
}

impl std::error::Error for ParseError {}

/// Busca el terminador de headers (`\r\n\r\n`) en el buffer
///
/// Retorna el índice donde empieza el terminador, o `None` si todavía
/// no llegó completo. Lo usa también el lector incremental del servidor.
pub(crate) fn find_header_end(buffer: &[u8]) -> Option<usize> {
    buffer.windows(4).position(|w| w == b"\r\n\r\n")
}

impl Request {
    /// Parsea un request HTTP/1.1 desde bytes
    ///
    /// # Argumentos
    ///
    /// * `buffer` - Buffer conteniendo el request HTTP completo
    ///
    /// # Retorna
    ///
    /// * `Ok(Request)` - Request parseado exitosamente
    /// * `Err(ParseError)` - Error durante el parsing
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use file_server::http::Request;
    ///
    /// let raw = b"GET /echo/hola HTTP/1.1\r\nHost: localhost\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.target(), "/echo/hola");
    /// assert_eq!(request.header("host"), Some("localhost"));
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        // Separar head y body en el primer \r\n\r\n. El head debe ser UTF-8;
        // el body se toma como slice crudo sin tocar.
        let header_end = find_header_end(buffer).ok_or(ParseError::IncompleteRequest)?;
        let head = std::str::from_utf8(&buffer[..header_end])
            .map_err(|_| ParseError::MalformedRequestLine)?;

        let mut lines = head.split("\r\n");

        // 1. Parsear la request line (primera línea)
        let request_line = lines.next().ok_or(ParseError::MalformedRequestLine)?;
        let (method, target, version) = Self::parse_request_line(request_line)?;

        // 2. Parsear headers (resto de líneas del head)
        let headers = Self::parse_headers(lines);

        // 3. Extraer el body según Content-Length
        let body = Self::parse_body(buffer, header_end + 4, &headers)?;

        Ok(Request {
            method,
            target,
            version,
            headers,
            body,
        })
    }

    /// Parsea la request line (primera línea del request)
    ///
    /// Formato: `GET /target HTTP/1.1`, exactamente 3 tokens separados por
    /// un espacio simple. Espacios dobles producen tokens vacíos y se
    /// rechazan igual que un número incorrecto de tokens.
    fn parse_request_line(line: &str) -> Result<(Method, String, String), ParseError> {
        let parts: Vec<&str> = line.split(' ').collect();

        if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
            return Err(ParseError::MalformedRequestLine);
        }

        let method = Method::from_str(parts[0])?;
        let target = parts[1].to_string();

        let version = parts[2].to_string();
        if version != "HTTP/1.1" {
            return Err(ParseError::InvalidHttpVersion(version));
        }

        Ok((method, target, version))
    }

    /// Parsea los headers HTTP
    ///
    /// Cada header tiene formato `Name: Value` y se separa en el primer `": "`.
    /// El nombre se normaliza a minúsculas para lookups case-insensitive y la
    /// última ocurrencia de un mismo nombre gana. Una línea sin separador es
    /// un error de ESE header: se ignora la línea, no se aborta el request.
    fn parse_headers<'a>(lines: impl Iterator<Item = &'a str>) -> HashMap<String, String> {
        let mut headers = HashMap::new();

        for line in lines {
            if let Some((name, value)) = line.split_once(": ") {
                headers.insert(name.to_ascii_lowercase(), value.to_string());
            }
        }

        headers
    }

    /// Extrae el body: exactamente `Content-Length` bytes después del
    /// terminador de headers (0 si el header está ausente)
    ///
    /// Sin trims, sin recortar \r\n finales, sin quitar bytes nulos: el body
    /// es opaco y puede ser binario.
    fn parse_body(
        buffer: &[u8],
        body_start: usize,
        headers: &HashMap<String, String>,
    ) -> Result<Vec<u8>, ParseError> {
        let content_length = match headers.get("content-length") {
            Some(value) => value
                .trim()
                .parse::<usize>()
                .map_err(|_| ParseError::InvalidContentLength(value.clone()))?,
            None => 0,
        };

        let available = buffer.len().saturating_sub(body_start);
        if available < content_length {
            return Err(ParseError::IncompleteRequest);
        }

        Ok(buffer[body_start..body_start + content_length].to_vec())
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> Method {
        self.method
    }

    /// Obtiene el target crudo del request (path + query opcional)
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Obtiene la versión HTTP
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Obtiene todos los headers (nombres en minúsculas)
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header específico (lookup case-insensitive)
    ///
    /// # Ejemplo
    /// ```
    /// use file_server::http::Request;
    ///
    /// let raw = b"GET /user-agent HTTP/1.1\r\nUser-Agent: foo-bar/1.0\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.header("User-Agent"), Some("foo-bar/1.0"));
    /// assert_eq!(request.header("user-agent"), Some("foo-bar/1.0"));
    /// ```
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(|s| s.as_str())
    }

    /// Obtiene el body del request como bytes crudos
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
