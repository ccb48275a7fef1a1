//! Lesson listing and download planning
//!
//! Everything between the API client and the fetcher: cutoff filtering,
//! tutor name resolution and collision-free file naming.

mod chats;
mod naming;
mod tutors;
mod types;

pub(crate) use chats::list_chats;
pub(crate) use naming::plan_downloads;
pub(crate) use tutors::resolve_tutors;
pub(crate) use types::DownloadTask;
