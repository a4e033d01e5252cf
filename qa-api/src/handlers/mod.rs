use crate::config::PaginationConfig;
use crate::storage::QaStorage;
use actix_web::HttpRequest;
use std::sync::Arc;

pub mod answers;
pub mod questions;
pub mod root;

/// Shared by every worker; handlers keep no state of their own
pub struct AppState {
    pub storage: Arc<dyn QaStorage>,
    pub pagination: PaginationConfig,
}

impl AppState {
    pub fn new(storage: Arc<dyn QaStorage>, pagination: PaginationConfig) -> Self {
        Self {
            storage,
            pagination,
        }
    }
}

/// Absolute URL for `path` on the host the request came in on
pub(crate) fn absolute_url(req: &HttpRequest, path: &str) -> String {
    let info = req.connection_info();
    format!("{}://{}{}", info.scheme(), info.host(), path)
}
