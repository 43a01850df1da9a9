//
//  ibm-cis
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination Types for CIS List Responses
//!
//! CIS list endpoints use page-number pagination: the request carries
//! `page` (1-indexed) and `per_page`, and the envelope answers with a
//! `result_info` block describing the page that was returned.
//!
//! ```json
//! "result_info": {"page": 2, "per_page": 20, "count": 20, "total_count": 57}
//! ```
//!
//! To walk every page, request `page = 1`, then keep asking for
//! [`ResultInfo::next_page`] until it returns `None`.
//!
//! # Notes
//!
//! - `count` is the number of items on *this* page
//! - `total_count` may be missing on some resources, in which case paging
//!   stops when a short page is returned

use serde::{Deserialize, Serialize};

/// Maximum number of pages a single paginated walk will request.
pub const MAX_PAGES: u32 = 100;

/// Default page size used when walking pages and the caller gave none.
pub const DEFAULT_PER_PAGE: u32 = 50;

/// Page metadata from a CIS list response.
///
/// # Example
///
/// ```rust
/// use ibm_cis::api::common::ResultInfo;
///
/// let info: ResultInfo = serde_json::from_str(
///     r#"{"page": 1, "per_page": 20, "count": 20, "total_count": 45}"#,
/// ).unwrap();
///
/// assert!(info.has_next());
/// assert_eq!(info.next_page(), Some(2));
/// assert_eq!(info.total_pages(), Some(3));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultInfo {
    /// Current page number (1-indexed).
    #[serde(default)]
    pub page: u32,

    /// Requested page size.
    #[serde(default)]
    pub per_page: u32,

    /// Number of items on this page.
    #[serde(default)]
    pub count: u32,

    /// Total number of items across all pages, when reported.
    #[serde(default)]
    pub total_count: Option<u64>,
}

impl ResultInfo {
    /// Checks if there are more pages of results available.
    ///
    /// With a `total_count` this compares the items seen so far against it;
    /// without one, a full page is taken to mean more may follow.
    pub fn has_next(&self) -> bool {
        if self.per_page == 0 || self.count == 0 {
            return false;
        }
        match self.total_count {
            Some(total) => u64::from(self.page) * u64::from(self.per_page) < total,
            None => self.count >= self.per_page,
        }
    }

    /// Returns the number of the next page, if there is one.
    pub fn next_page(&self) -> Option<u32> {
        self.has_next().then(|| self.page.max(1) + 1)
    }

    /// Returns the total number of pages, when `total_count` is known.
    pub fn total_pages(&self) -> Option<u64> {
        if self.per_page == 0 {
            return None;
        }
        let per_page = u64::from(self.per_page);
        self.total_count.map(|total| total.div_ceil(per_page))
    }
}
