//! HTTP protocol implementation.
//!
//! Just enough HTTP/1.1 to answer one request per connection: the request
//! line is read and parsed, headers are ignored, and every response carries
//! `Connection: close`.
//!
//! # Architecture
//!
//! - **`connection`**: The per-connection state machine
//! - **`parser`**: Extracts and tokenises the request line
//! - **`request`**: The parsed request line
//! - **`response`**: The three response shapes the server produces
//! - **`writer`**: Serializes a response and streams its body to the client
//! - **`error`**: Failures that end a connection early
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for the request line
//!        └──────┬──────┘
//!               │ parsed          (malformed → Closed, nothing written)
//!               ▼
//!        ┌──────────────────┐
//!        │   Authorizing    │ ← Check the allow-list
//!        └──────┬───────────┘
//!               │ authorized      (forbidden → Writing 404)
//!               ▼
//!        ┌──────────────────┐
//!        │    Resolving     │ ← Locate file, render template if needed
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               ▼
//!             Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::{sync::Arc, time::Duration};
//! use warden::http::connection::Connection;
//! use warden::site::{AllowList, Resolver, Site};
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let site = Arc::new(Site::new(
//!         AllowList::new(["/index.html"]),
//!         Resolver::new("./public"),
//!         None,
//!     ));
//!     let listener = TcpListener::bind("127.0.0.1:9999").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let site = site.clone();
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, site, Duration::from_secs(5));
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod error;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
