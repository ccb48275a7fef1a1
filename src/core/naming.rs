use std::collections::HashMap;

use super::types::{ChatRecord, DownloadTask, TutorDirectory};
use crate::consts::DATE_FORMAT;
use crate::error::AppError;

/// Assigns `{date}_{tutor}{suffix}.mp4` names, numbering repeats of the
/// same tutor and date within one run.
#[derive(Debug, Default)]
pub(crate) struct FileNamer {
    seen: HashMap<String, usize>,
}

impl FileNamer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// `date` is already formatted as YYYY-MM-DD
    pub(crate) fn next_name(&mut self, tutor_name: &str, date: &str) -> String {
        let tutor = file_safe_name(tutor_name);
        let count = self.seen.entry(format!("{tutor}.{date}")).or_insert(0);
        let suffix = if *count == 0 {
            String::new()
        } else {
            format!(".{count}")
        };
        *count += 1;
        format!("{date}_{tutor}{suffix}.mp4")
    }
}

/// Spaces become dots; path separators would escape the output directory
fn file_safe_name(name: &str) -> String {
    name.replace(' ', ".").replace(['/', '\\'], "-")
}

/// Pair every chat with its file name, in chat order
pub(crate) fn plan_downloads(
    chats: &[ChatRecord],
    tutors: &TutorDirectory,
) -> Result<Vec<DownloadTask>, AppError> {
    let mut namer = FileNamer::new();
    chats
        .iter()
        .map(|chat| {
            let tutor = tutors
                .get(&chat.tutor_id)
                .ok_or_else(|| AppError::UnknownTutor {
                    tutor_id: chat.tutor_id.clone(),
                })?;
            let date = chat.start_time.format(DATE_FORMAT).to_string();
            Ok(DownloadTask {
                file_name: namer.next_name(tutor, &date),
                video_url: chat.video_url.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Timezone;

    fn chat(tutor_id: &str, secs: f64) -> ChatRecord {
        ChatRecord {
            tutor_id: tutor_id.to_string(),
            video_url: format!("https://video/{secs}.mp4"),
            start_time: Timezone::Named(chrono_tz::UTC)
                .localize_unix_seconds(secs)
                .unwrap(),
        }
    }

    fn directory() -> TutorDirectory {
        [
            ("t1".to_string(), "Jane Doe".to_string()),
            ("t2".to_string(), "Mary Ann Van Dyke".to_string()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn first_occurrence_has_no_suffix() {
        let mut namer = FileNamer::new();
        assert_eq!(namer.next_name("Bob", "2024-01-02"), "2024-01-02_Bob.mp4");
    }

    #[test]
    fn same_tutor_same_date_counts_up() {
        let mut namer = FileNamer::new();
        let names: Vec<String> = (0..3)
            .map(|_| namer.next_name("Jane Doe", "2024-01-02"))
            .collect();
        assert_eq!(
            names,
            vec![
                "2024-01-02_Jane.Doe.mp4",
                "2024-01-02_Jane.Doe.1.mp4",
                "2024-01-02_Jane.Doe.2.mp4",
            ]
        );
    }

    #[test]
    fn counters_are_per_tutor_and_date() {
        let mut namer = FileNamer::new();
        assert_eq!(namer.next_name("Jane", "2024-01-02"), "2024-01-02_Jane.mp4");
        assert_eq!(namer.next_name("Jane", "2024-01-03"), "2024-01-03_Jane.mp4");
        assert_eq!(namer.next_name("Bob", "2024-01-02"), "2024-01-02_Bob.mp4");
        assert_eq!(namer.next_name("Jane", "2024-01-02"), "2024-01-02_Jane.1.mp4");
    }

    #[test]
    fn every_space_becomes_a_dot() {
        let mut namer = FileNamer::new();
        assert_eq!(
            namer.next_name("Mary Ann  Van Dyke", "2024-01-02"),
            "2024-01-02_Mary.Ann..Van.Dyke.mp4"
        );
    }

    #[test]
    fn path_separators_are_replaced() {
        let mut namer = FileNamer::new();
        assert_eq!(namer.next_name("A/B\\C", "2024-01-02"), "2024-01-02_A-B-C.mp4");
    }

    #[test]
    fn plan_follows_chat_order() {
        // 2024-01-02T12:00Z, 2024-01-02T09:00Z, 2024-01-01T12:00Z
        let chats = vec![
            chat("t1", 1_704_196_800.0),
            chat("t2", 1_704_186_000.0),
            chat("t1", 1_704_186_000.0),
            chat("t1", 1_704_110_400.0),
        ];
        let tasks = plan_downloads(&chats, &directory()).unwrap();
        let names: Vec<&str> = tasks.iter().map(|t| t.file_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "2024-01-02_Jane.Doe.mp4",
                "2024-01-02_Mary.Ann.Van.Dyke.mp4",
                "2024-01-02_Jane.Doe.1.mp4",
                "2024-01-01_Jane.Doe.mp4",
            ]
        );
        assert_eq!(tasks[0].video_url, chats[0].video_url);
    }

    #[test]
    fn unknown_tutor_is_an_error() {
        let chats = vec![chat("t9", 1_704_196_800.0)];
        let err = plan_downloads(&chats, &directory()).unwrap_err();
        assert!(matches!(err, AppError::UnknownTutor { ref tutor_id } if tutor_id == "t9"));
    }
}
