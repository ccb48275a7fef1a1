use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use super::Fetcher;
use crate::consts::{BASE_URL, USER_AGENT};
use crate::error::FetchError;

const CHUNK_SIZE: usize = 1024 * 1024;
const BAR_TEMPLATE: &str = "{msg} [{bar:40}] {bytes}/{total_bytes} ({eta})";
const SPINNER_TEMPLATE: &str = "{spinner} {msg} {bytes}";

/// In-process download with `Range` resume
pub(crate) struct HttpFetcher {
    agent: ureq::Agent,
    show_progress: bool,
}

impl HttpFetcher {
    pub(crate) fn new(timeout_secs: u64, show_progress: bool) -> Self {
        let timeout = Duration::from_secs(timeout_secs);
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_connect(Some(timeout))
            .timeout_recv_response(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();
        Self {
            agent,
            show_progress,
        }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<(), FetchError> {
        let existing = fs::metadata(dest).map(|m| m.len()).unwrap_or(0);

        let mut request = self
            .agent
            .get(url)
            .header("user-agent", USER_AGENT)
            .header("referer", BASE_URL);
        if existing > 0 {
            request = request.header("range", format!("bytes={existing}-"));
        }
        let mut response = request.call()?;

        let (mut file, offset) = match response.status().as_u16() {
            206 => (OpenOptions::new().append(true).open(dest)?, existing),
            200 => (File::create(dest)?, 0),
            // Range starts at or past the end: nothing left to fetch
            416 if existing > 0 => return Ok(()),
            status => return Err(FetchError::Status { status }),
        };

        let total = response
            .headers()
            .get("content-length")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
            .map(|len| len + offset);

        let bar = if self.show_progress {
            progress_bar(total, offset)
        } else {
            ProgressBar::hidden()
        };
        if let Some(name) = dest.file_name() {
            bar.set_message(name.to_string_lossy().into_owned());
        }

        let mut reader = response.body_mut().with_config().limit(u64::MAX).reader();
        let mut buf = vec![0u8; CHUNK_SIZE];
        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            file.write_all(&buf[..n])?;
            bar.inc(n as u64);
        }
        file.flush()?;
        bar.finish_and_clear();
        Ok(())
    }
}

/// Byte bar when the size is known, spinner otherwise; starts at `offset`
fn progress_bar(total: Option<u64>, offset: u64) -> ProgressBar {
    let bar = match total {
        Some(len) => {
            let bar = ProgressBar::new(len);
            if let Ok(style) = ProgressStyle::with_template(BAR_TEMPLATE) {
                bar.set_style(style.progress_chars("=> "));
            }
            bar
        }
        None => {
            let bar = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::with_template(SPINNER_TEMPLATE) {
                bar.set_style(style);
            }
            bar
        }
    };
    bar.set_position(offset);
    bar
}
