use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::Fetcher;
use crate::consts::USER_AGENT;
use crate::error::FetchError;

/// Delegates the transfer to `wget -c` with unlimited retries
pub(crate) struct WgetFetcher {
    program: PathBuf,
    timeout_secs: u64,
}

impl WgetFetcher {
    pub(crate) fn new(program: Option<PathBuf>, timeout_secs: u64) -> Self {
        Self {
            program: program.unwrap_or_else(|| PathBuf::from("wget")),
            timeout_secs,
        }
    }

    fn args(&self, url: &str, dest: &Path) -> Vec<OsString> {
        vec![
            "-t".into(),
            "0".into(),
            "-q".into(),
            "-O".into(),
            dest.as_os_str().to_os_string(),
            "-c".into(),
            url.into(),
            "--show-progress".into(),
            "-T".into(),
            self.timeout_secs.to_string().into(),
            "--user-agent".into(),
            USER_AGENT.into(),
        ]
    }
}

impl Fetcher for WgetFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<(), FetchError> {
        let status = Command::new(&self.program)
            .args(self.args(url, dest))
            .status()
            .map_err(|e| {
                let program = self.program.display().to_string();
                if e.kind() == std::io::ErrorKind::NotFound {
                    FetchError::NotFound { program }
                } else {
                    FetchError::Spawn { program, source: e }
                }
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(FetchError::Exit {
                code: status.code(),
            })
        }
    }
}
