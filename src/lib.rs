//! Two tiny HTTP greeter servers used as companion code for a blog post
//! and a conference talk.
//!
//! The crate ships two independent binaries sharing this library:
//! - `greeter-json`: GET /hello answering a fixed JSON greeting
//! - `greeter-plain`: GET /hello and GET /bye answering fixed text greetings
//!
//! Both listen on port 8080 and serve forever.

pub mod app;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod server;
