use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("authentication failed: {0}")]
    Auth(#[source] ApiError),

    #[error("failed to fetch chat list: {0}")]
    ChatList(#[source] ApiError),

    #[error("failed to resolve tutor names: {0}")]
    TutorLookup(#[source] ApiError),

    #[error("no display name returned for tutor {tutor_id}")]
    UnknownTutor { tutor_id: String },

    #[error("cannot use output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("download of {file_name} failed: {source}")]
    Download {
        file_name: String,
        source: FetchError,
    },

    #[error("{} download(s) failed: {}", .failed.len(), .failed.join(", "))]
    Incomplete { failed: Vec<String> },
}

impl AppError {
    /// Process exit code; a failed wget keeps its own code
    pub(crate) fn exit_code(&self) -> i32 {
        match self {
            AppError::Download {
                source: FetchError::Exit { code: Some(code) },
                ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response has no \"result\" field")]
    MissingResult,
}

impl From<ureq::Error> for ApiError {
    fn from(e: ureq::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

#[derive(Debug, Error)]
pub(crate) enum FetchError {
    #[error("{program} not found. Please install it or use --fetcher native.")]
    NotFound { program: String },

    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("downloader exited with {}", describe_exit(.code))]
    Exit { code: Option<i32> },

    #[error("request failed: {0}")]
    Http(String),

    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },

    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("code {c}"),
        None => "a signal".to_string(),
    }
}

impl From<ureq::Error> for FetchError {
    fn from(e: ureq::Error) -> Self {
        FetchError::Http(e.to_string())
    }
}
