use rusqlite::Connection;
use std::sync::{Arc, Mutex};

pub mod config;
pub mod error;
pub mod fields;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod pagination;
pub mod routes;
pub mod serializers;
pub mod server;
pub mod storage;
pub mod validation;

pub type DbConnection = Arc<Mutex<Connection>>;
