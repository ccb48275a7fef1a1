use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::api::{ApiClient, Transport};
use crate::core::{DownloadTask, list_chats, plan_downloads, resolve_tutors};
use crate::error::AppError;
use crate::fetcher::Fetcher;
use crate::utils::{Logger, Timezone};

pub(crate) struct RunOptions {
    /// Keep lessons starting on or after this date
    pub(crate) cutoff: Option<NaiveDate>,
    pub(crate) timezone: Timezone,
    pub(crate) output_dir: PathBuf,
    /// Continue after a failed download instead of aborting the batch
    pub(crate) keep_going: bool,
    pub(crate) dry_run: bool,
}

#[derive(Debug, Default, PartialEq)]
pub(crate) struct RunSummary {
    pub(crate) planned: usize,
    pub(crate) downloaded: usize,
}

/// Resolve the user, list lessons, name files and fetch them in order
pub(crate) fn download_videos<T: Transport>(
    client: &ApiClient<T>,
    fetcher: &dyn Fetcher,
    options: &RunOptions,
    logger: &Logger,
) -> Result<RunSummary, AppError> {
    logger.debug("Get user id");
    let user = client.current_user().map_err(AppError::Auth)?;
    logger.debug(format!("Logged in as {}", user.username));

    let chat_list = list_chats(
        client,
        &user.username,
        options.cutoff,
        options.timezone,
        logger,
    )?;
    if chat_list.is_empty() {
        logger.info("No videos to download");
        return Ok(RunSummary::default());
    }

    let tutors = resolve_tutors(client, &chat_list.tutor_ids, logger)?;
    logger.debug(format!("Resolved {} tutor names", tutors.len()));

    let tasks = plan_downloads(&chat_list.chats, &tutors)?;
    logger.debug(format!("{} videos need to download", tasks.len()));

    if options.dry_run {
        for task in &tasks {
            println!("{} <- {}", task.file_name, task.video_url);
        }
        return Ok(RunSummary {
            planned: tasks.len(),
            downloaded: 0,
        });
    }

    fs::create_dir_all(&options.output_dir).map_err(|source| AppError::OutputDir {
        path: options.output_dir.clone(),
        source,
    })?;

    run_tasks(&tasks, fetcher, options, logger)
}

fn run_tasks(
    tasks: &[DownloadTask],
    fetcher: &dyn Fetcher,
    options: &RunOptions,
    logger: &Logger,
) -> Result<RunSummary, AppError> {
    let mut failed = Vec::new();
    let mut downloaded = 0;

    for task in tasks {
        logger.debug(format!("Save video {}", task.video_url));
        logger.announce(&task.file_name);

        let dest = options.output_dir.join(&task.file_name);
        match fetcher.fetch(&task.video_url, &dest) {
            Ok(()) => downloaded += 1,
            Err(source) if options.keep_going => {
                logger.warn(format!("{} failed: {}", task.file_name, source));
                failed.push(task.file_name.clone());
            }
            Err(source) => {
                return Err(AppError::Download {
                    file_name: task.file_name.clone(),
                    source,
                });
            }
        }
    }

    if !failed.is_empty() {
        return Err(AppError::Incomplete { failed });
    }

    Ok(RunSummary {
        planned: tasks.len(),
        downloaded,
    })
}
