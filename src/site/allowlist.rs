use std::collections::HashSet;

use crate::http::request::Request;

/// Outcome of checking a request against the allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    Authorized,
    Forbidden,
}

/// The fixed set of paths the server is willing to serve.
///
/// Built once at startup and only ever read afterwards, so workers share it
/// through an `Arc` without locking.
#[derive(Debug, Clone, Default)]
pub struct AllowList {
    paths: HashSet<String>,
}

impl AllowList {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact, case-sensitive membership. No normalisation, no prefixes.
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    pub fn authorize(&self, request: &Request) -> Authorization {
        if self.contains(&request.path) {
            Authorization::Authorized
        } else {
            Authorization::Forbidden
        }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
