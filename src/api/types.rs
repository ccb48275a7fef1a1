//! Wire types for the `result` payloads

use serde::Deserialize;

/// `api/users/current`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CurrentUser {
    pub(crate) username: String,
}

/// One entry of `api/chats`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawChat {
    pub(crate) tutor: String,
    /// Unix seconds
    pub(crate) start_time: f64,
    #[serde(rename = "videoURL", default)]
    pub(crate) video_url: Option<String>,
}

/// Value of the `api/tutors` map, keyed by tutor id
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawTutor {
    pub(crate) display_name: String,
}
