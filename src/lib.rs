//! Warden - allow-list static file server
//!
//! Serves a fixed set of paths from a public directory over HTTP/1.1, one
//! request per connection, with a bounded pool of workers.

pub mod config;
pub mod http;
pub mod server;
pub mod site;
