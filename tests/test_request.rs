use lantern::http::request::{Method, Request};

#[test]
fn test_method_from_token() {
    assert_eq!(Method::from_token("GET"), Some(Method::Get));
    assert_eq!(Method::from_token("HEAD"), Some(Method::Head));
    assert_eq!(Method::from_token("POST"), None);
    assert_eq!(Method::from_token("DELETE"), None);
}

#[test]
fn test_method_from_token_is_case_sensitive() {
    assert_eq!(Method::from_token("get"), None);
    assert_eq!(Method::from_token("Head"), None);
}

#[test]
fn test_request_method_classification() {
    let req = Request {
        method: "GET".to_string(),
        target: "/".to_string(),
        version: "HTTP/1.0".to_string(),
    };
    assert_eq!(req.method(), Some(Method::Get));

    let req = Request {
        method: "PATCH".to_string(),
        target: "/".to_string(),
        version: "HTTP/1.0".to_string(),
    };
    assert_eq!(req.method(), None);
}

#[test]
fn test_request_keeps_tokens_verbatim() {
    let req = Request {
        method: "GET".to_string(),
        target: "http://host/a%20b".to_string(),
        version: "HTTP/1.0".to_string(),
    };

    assert_eq!(req.target, "http://host/a%20b");
    assert_eq!(req.version, "HTTP/1.0");
}
