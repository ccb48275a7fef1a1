//! Recording transfer
//!
//! A `Fetcher` moves one video URL into one local file and must be able to
//! pick up a partial file where it left off.

mod http;
mod wget;

use std::path::Path;

use crate::error::FetchError;

pub(crate) use http::HttpFetcher;
pub(crate) use wget::WgetFetcher;

pub(crate) trait Fetcher {
    /// Blocks until `dest` holds the whole video or the transfer failed
    fn fetch(&self, url: &str, dest: &Path) -> Result<(), FetchError>;
}
