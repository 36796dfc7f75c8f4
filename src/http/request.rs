/// Methods the server actually implements.
///
/// The request line keeps the method token verbatim; classification into a
/// supported method happens only when the handler decides the status code,
/// so an unknown token still produces a well-formed 501 response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    Get,
    /// HEAD - Like GET but without the response body
    Head,
}

impl Method {
    /// Classifies a method token (case-sensitive, per RFC 1945 tokens).
    ///
    /// # Example
    ///
    /// ```
    /// # use lantern::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Some(Method::Get));
    /// assert_eq!(Method::from_token("get"), None);
    /// assert_eq!(Method::from_token("POST"), None);
    /// ```
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::Get),
            "HEAD" => Some(Method::Head),
            _ => None,
        }
    }
}

/// A parsed HTTP/1.0 request.
///
/// Holds exactly the three tokens of the request line. Header lines after
/// the first are read off the connection so the blank-line terminator is
/// meaningful, but they are not retained: HTTP/1.0 GET/HEAD semantics here
/// depend on nothing beyond the request line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The method token, verbatim (e.g. "GET")
    pub method: String,
    /// The request target, verbatim: origin-form ("/index.html") or
    /// absolute-form ("http://host/index.html")
    pub target: String,
    /// HTTP version token (typically "HTTP/1.0")
    pub version: String,
}

impl Request {
    /// The supported method this request maps to, if any.
    pub fn method(&self) -> Option<Method> {
        Method::from_token(&self.method)
    }
}
