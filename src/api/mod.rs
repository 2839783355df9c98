//! REST-Glue: Request-Beschreibungen für den externen Transport.
//!
//! Der Store führt selbst keine HTTP-Aufrufe aus. Use-Cases liefern
//! `ApiRequest`-Werte zurück; der Transport kennt Base-URL, Header und
//! Auth und führt sie aus.

pub mod endpoints;

use serde_json::Value;

/// HTTP-Methode eines Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Beschreibung eines API-Aufrufs: Methode, Pfad und optionaler JSON-Body
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    /// GET auf den gegebenen Pfad
    pub fn get(path: String) -> Self {
        Self {
            method: Method::Get,
            path,
            body: None,
        }
    }

    /// POST mit JSON-Body
    pub fn post(path: String, body: Value) -> Self {
        Self {
            method: Method::Post,
            path,
            body: Some(body),
        }
    }

    /// PUT mit JSON-Body
    pub fn put(path: String, body: Value) -> Self {
        Self {
            method: Method::Put,
            path,
            body: Some(body),
        }
    }

    /// DELETE auf den gegebenen Pfad
    pub fn delete(path: String) -> Self {
        Self {
            method: Method::Delete,
            path,
            body: None,
        }
    }
}
