//! # Construcción de Respuestas HTTP
//!
//! Este módulo proporciona una API para construir respuestas HTTP/1.1
//! de forma programática y convertirlas a bytes para enviar al cliente.
//!
//! ## Formato de una respuesta HTTP/1.1
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 4\r\n
//! \r\n
//! hola
//! ```
//!
//! Los headers se guardan en una lista ORDENADA (no un HashMap): el formato
//! de salida exige `Content-Type` antes de `Content-Length`, y los handlers
//! construyen la respuesta en ese orden. El body es siempre `Vec<u8>` y se
//! serializa byte a byte, para que archivos binarios viajen sin corrupción.
//!
//! ## Ejemplo de uso
//!
//! ```
//! use file_server::http::{Response, StatusCode};
//!
//! let response = Response::new(StatusCode::Ok)
//!     .with_header("Content-Type", "text/plain")
//!     .with_body("hola");
//!
//! let bytes = response.to_bytes();
//! // Ahora puedes enviar `bytes` por el socket
//! ```

use super::StatusCode;

/// Representa una respuesta HTTP/1.1 completa
#[derive(Debug, Clone)]
pub struct Response {
    /// Código de estado HTTP (200, 404, etc.)
    status: StatusCode,

    /// Headers HTTP en orden de inserción; un nombre repetido
    /// reemplaza el valor anterior en su posición original
    headers: Vec<(String, String)>,

    /// Cuerpo de la respuesta (puede ser vacío o binario)
    body: Vec<u8>,
}

impl Response {
    /// Crea una nueva respuesta con el código de estado especificado
    ///
    /// Por defecto, la respuesta no tiene headers ni body.
    ///
    /// # Ejemplo
    /// ```
    /// use file_server::http::{Response, StatusCode};
    ///
    /// let response = Response::new(StatusCode::NotFound);
    /// ```
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Agrega un header a la respuesta (versión builder)
    ///
    /// Si el header ya existe (comparación case-insensitive), se sobrescribe
    /// conservando su posición.
    ///
    /// # Ejemplo
    /// ```
    /// use file_server::http::{Response, StatusCode};
    ///
    /// let response = Response::new(StatusCode::Ok)
    ///     .with_header("Content-Type", "text/plain");
    /// ```
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.add_header(name, value);
        self
    }

    /// Agrega un header a una respuesta existente (versión mutable)
    ///
    /// # Ejemplo
    /// ```
    /// use file_server::http::{Response, StatusCode};
    ///
    /// let mut response = Response::new(StatusCode::Ok);
    /// response.add_header("Content-Type", "text/plain");
    /// ```
    pub fn add_header(&mut self, name: &str, value: &str) {
        match self
            .headers
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
        {
            Some((_, v)) => *v = value.to_string(),
            None => self.headers.push((name.to_string(), value.to_string())),
        }
    }

    /// Establece el cuerpo de la respuesta desde un string
    ///
    /// Automáticamente calcula y agrega el header `Content-Length`.
    ///
    /// # Ejemplo
    /// ```
    /// use file_server::http::{Response, StatusCode};
    ///
    /// let response = Response::new(StatusCode::Ok)
    ///     .with_body("Hello World");
    /// ```
    pub fn with_body(self, body: &str) -> Self {
        self.with_body_bytes(body.as_bytes().to_vec())
    }

    /// Establece el cuerpo de la respuesta desde bytes
    ///
    /// Útil para respuestas binarias (contenido de archivos arbitrarios).
    ///
    /// # Ejemplo
    /// ```
    /// use file_server::http::{Response, StatusCode};
    ///
    /// let binary_data = vec![0x89, 0x50, 0x4E, 0x47]; // PNG header
    /// let response = Response::new(StatusCode::Ok)
    ///     .with_body_bytes(binary_data);
    /// ```
    pub fn with_body_bytes(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        let length = self.body.len().to_string();
        self.add_header("Content-Length", &length);
        self
    }

    /// Crea una respuesta de error con mensaje JSON
    ///
    /// Formato del JSON: `{"error": "mensaje"}`. El mensaje se serializa con
    /// `serde_json`, así que puede contener comillas o caracteres especiales.
    ///
    /// # Ejemplo
    /// ```
    /// use file_server::http::{Response, StatusCode};
    ///
    /// let response = Response::error(
    ///     StatusCode::BadRequest,
    ///     "Invalid filename"
    /// );
    /// ```
    pub fn error(status: StatusCode, message: &str) -> Self {
        let body = serde_json::json!({ "error": message }).to_string();
        Self::new(status)
            .with_header("Content-Type", "application/json")
            .with_body(&body)
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// Genera el formato completo HTTP/1.1:
    /// - Status line: `HTTP/1.1 200 OK\r\n`
    /// - Headers en orden de inserción: `Header-Name: Value\r\n`
    /// - Línea vacía: `\r\n`
    /// - Body: contenido binario sin transformación final
    ///
    /// # Ejemplo
    /// ```
    /// use file_server::http::{Response, StatusCode};
    ///
    /// let response = Response::new(StatusCode::Ok)
    ///     .with_body("Test");
    ///
    /// let bytes = response.to_bytes();
    /// // bytes contiene: "HTTP/1.1 200 OK\r\n...\r\n\r\nTest"
    /// ```
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::new();

        // 1. Status line
        let status_line = format!("HTTP/1.1 {}\r\n", self.status);
        result.extend_from_slice(status_line.as_bytes());

        // 2. Headers, en el orden en que se insertaron
        for (name, value) in &self.headers {
            let header_line = format!("{}: {}\r\n", name, value);
            result.extend_from_slice(header_line.as_bytes());
        }

        // 3. Línea vacía que separa headers del body
        result.extend_from_slice(b"\r\n");

        // 4. Body (si existe), como bytes crudos
        result.extend_from_slice(&self.body);

        result
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene los headers en orden de inserción
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Obtiene un header específico (lookup case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_response() {
        let response = Response::new(StatusCode::Ok);
        assert_eq!(response.status(), StatusCode::Ok);
        assert!(response.headers().is_empty());
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_with_header() {
        let response = Response::new(StatusCode::Ok)
            .with_header("Content-Type", "text/plain")
            .with_header("X-Custom", "value");

        assert_eq!(response.header("Content-Type"), Some("text/plain"));
        assert_eq!(response.header("X-Custom"), Some("value"));
    }

    #[test]
    fn test_header_replace_keeps_position() {
        let response = Response::new(StatusCode::Ok)
            .with_header("Content-Type", "text/plain")
            .with_header("X-Custom", "value")
            .with_header("content-type", "application/json");

        assert_eq!(response.headers().len(), 2);
        assert_eq!(response.headers()[0].1, "application/json");
    }

    #[test]
    fn test_with_body() {
        let response = Response::new(StatusCode::Ok).with_body("Hello World");

        assert_eq!(response.body(), b"Hello World");
        assert_eq!(response.header("Content-Length"), Some("11"));
    }

    #[test]
    fn test_with_body_bytes() {
        let binary_data = vec![0x00, 0x01, 0x02, 0xFF];
        let response = Response::new(StatusCode::Ok).with_body_bytes(binary_data.clone());

        assert_eq!(response.body(), &binary_data[..]);
        assert_eq!(response.header("Content-Length"), Some("4"));
    }

    #[test]
    fn test_content_length_always_matches_body() {
        // Propiedad: Content-Length == longitud exacta en bytes del body,
        // para cuerpos de distintos tamaños y contenidos
        let bodies: Vec<Vec<u8>> = vec![
            Vec::new(),
            b"a".to_vec(),
            b"hola mundo".to_vec(),
            vec![0u8; 1024],
            (0..=255u8).collect(),
            "ñandú €uro".as_bytes().to_vec(),
        ];

        for body in bodies {
            let expected = body.len().to_string();
            let response = Response::new(StatusCode::Ok).with_body_bytes(body);
            assert_eq!(response.header("Content-Length"), Some(expected.as_str()));
        }
    }

    #[test]
    fn test_error_response() {
        let response = Response::error(StatusCode::BadRequest, "Invalid filename");

        assert_eq!(response.status(), StatusCode::BadRequest);
        assert_eq!(response.header("Content-Type"), Some("application/json"));

        let body_str = String::from_utf8(response.body().to_vec()).unwrap();
        assert!(body_str.contains("Invalid filename"));
    }

    #[test]
    fn test_error_response_escapes_quotes() {
        let response = Response::error(StatusCode::BadRequest, r#"bad "name" here"#);

        let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body["error"], r#"bad "name" here"#);
    }

    #[test]
    fn test_to_bytes() {
        let response = Response::new(StatusCode::Ok)
            .with_header("Content-Type", "text/plain")
            .with_body("Test");

        let bytes = response.to_bytes();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.contains("Content-Type: text/plain\r\n"));
        assert!(text.contains("Content-Length: 4\r\n"));
        assert!(text.ends_with("\r\n\r\nTest"));
    }

    #[test]
    fn test_to_bytes_content_type_before_content_length() {
        let response = Response::new(StatusCode::Ok)
            .with_header("Content-Type", "text/plain")
            .with_body("x");

        let bytes = response.to_bytes();
        let text = String::from_utf8(bytes).unwrap();

        let ct = text.find("Content-Type:").unwrap();
        let cl = text.find("Content-Length:").unwrap();
        assert!(ct < cl, "Content-Type debe ir antes de Content-Length");
    }

    #[test]
    fn test_to_bytes_binary_body_intact() {
        // El body no debe pasar por conversión a texto: bytes nulos y no UTF-8
        // tienen que llegar intactos al final del buffer
        let payload = vec![0x00, 0x9F, 0x92, 0x96, 0x0D, 0x0A, 0x00];
        let response = Response::new(StatusCode::Ok)
            .with_header("Content-Type", "application/octet-stream")
            .with_body_bytes(payload.clone());

        let bytes = response.to_bytes();
        assert!(bytes.ends_with(&payload));
    }

    #[test]
    fn test_empty_body_response() {
        let response = Response::new(StatusCode::NotFound);
        let bytes = response.to_bytes();
        let text = String::from_utf8(bytes).unwrap();

        // Debe terminar con \r\n\r\n (sin body)
        assert!(text.ends_with("\r\n\r\n"));
    }
}
