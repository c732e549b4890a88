//! Navigation targets used by the detail view.

use serde::Serialize;
use std::fmt;

use crate::domain::foundation::ClientId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum Route {
    ClientList,
    ClientDetail(ClientId),
    /// Project list filtered by a search term.
    ProjectSearch(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::ClientList => "/clients".to_string(),
            Route::ClientDetail(id) => format!("/clients/{}", encode_component(id.as_str())),
            Route::ProjectSearch(term) => format!("/projects?search={}", encode_component(term)),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Percent-encodes everything outside the RFC 3986 unreserved set.
fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            other => out.push_str(&format!("%{other:02X}")),
        }
    }
    out
}
