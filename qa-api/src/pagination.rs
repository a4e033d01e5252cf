//! Page-number pagination for the question list.
//!
//! Pages are 1-based. An empty collection still has one (empty) page, and
//! `page=last` addresses the final page.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid page.")]
pub struct InvalidPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub number: u64,
    pub num_pages: u64,
    pub page_size: u64,
}

impl PageWindow {
    pub fn resolve(raw: Option<&str>, total: u64, page_size: u64) -> Result<Self, InvalidPage> {
        let page_size = page_size.max(1);
        let num_pages = total.div_ceil(page_size).max(1);

        let number = match raw.map(str::trim) {
            None | Some("") => 1,
            Some("last") => num_pages,
            Some(raw) => raw.parse::<u64>().map_err(|_| InvalidPage)?,
        };

        if number == 0 || number > num_pages {
            return Err(InvalidPage);
        }

        Ok(Self {
            number,
            num_pages,
            page_size,
        })
    }

    pub fn offset(&self) -> u64 {
        (self.number - 1) * self.page_size
    }

    pub fn limit(&self) -> u64 {
        self.page_size
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn next_link(&self, base_url: &str) -> Option<String> {
        self.has_next()
            .then(|| page_link(base_url, self.number + 1))
    }

    pub fn previous_link(&self, base_url: &str) -> Option<String> {
        self.has_previous()
            .then(|| page_link(base_url, self.number - 1))
    }
}

/// The first page is addressed without a `page` parameter.
fn page_link(base_url: &str, number: u64) -> String {
    if number == 1 {
        base_url.to_string()
    } else {
        format!("{}?page={}", base_url, number)
    }
}
