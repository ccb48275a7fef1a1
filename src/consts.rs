/// Standard date format used throughout the codebase: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Base URL of the service; also sent as the referer
pub(crate) const BASE_URL: &str = "https://www.cambly.com/";

pub(crate) const USER_PATH: &str = "api/users/current";
pub(crate) const CHATS_PATH: &str = "api/chats";
pub(crate) const TUTORS_PATH: &str = "api/tutors";

/// Browser user agent; the API and the video CDN reject unknown clients
pub(crate) const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/99.0.4844.74 Safari/537.36";

/// Only one page is ever requested
pub(crate) const CHAT_PAGE_LIMIT: &str = "50";

/// Name used in log lines and config paths
pub(crate) const APP_NAME: &str = "cambly-dl";
