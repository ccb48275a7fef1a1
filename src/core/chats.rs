use chrono::NaiveDate;

use super::types::{ChatList, ChatRecord};
use crate::api::{ApiClient, RawChat, Transport};
use crate::error::AppError;
use crate::utils::{Logger, Timezone};

/// Fetch the student's completed lessons and keep those on or after `cutoff`
pub(crate) fn list_chats<T: Transport>(
    client: &ApiClient<T>,
    user_id: &str,
    cutoff: Option<NaiveDate>,
    timezone: Timezone,
    logger: &Logger,
) -> Result<ChatList, AppError> {
    match cutoff {
        Some(date) => logger.debug(format!("Get chat list after {date}")),
        None => logger.debug("Get chat list"),
    }
    let raw = client.chats(user_id).map_err(AppError::ChatList)?;
    logger.debug(format!("API returned {} chats", raw.len()));
    Ok(filter_chats(raw, cutoff, timezone, logger))
}

/// Apply the inclusive cutoff, preserving API order.
///
/// The cutoff is midnight of `cutoff` in `timezone`, so comparing calendar
/// dates is enough.
pub(crate) fn filter_chats(
    raw: Vec<RawChat>,
    cutoff: Option<NaiveDate>,
    timezone: Timezone,
    logger: &Logger,
) -> ChatList {
    let mut list = ChatList::default();

    for chat in raw {
        let Some(start_time) = timezone.localize_unix_seconds(chat.start_time) else {
            logger.warn(format!(
                "Skipping chat with tutor {}: invalid start time {}",
                chat.tutor, chat.start_time
            ));
            continue;
        };

        if let Some(date) = cutoff
            && start_time.date_naive() < date
        {
            continue;
        }

        let Some(video_url) = chat.video_url.filter(|url| !url.is_empty()) else {
            logger.warn(format!(
                "Skipping chat with tutor {} at {}: no recording",
                chat.tutor, start_time
            ));
            continue;
        };

        list.push(ChatRecord {
            tutor_id: chat.tutor,
            video_url,
            start_time,
        });
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FakeTransport;
    use crate::consts::CHATS_PATH;

    const UTC: Timezone = Timezone::Named(chrono_tz::UTC);

    // 2023-12-31T12:00:00Z, 2024-01-01T00:00:00Z, 2024-01-02T12:00:00Z
    const DEC_31: f64 = 1_704_024_000.0;
    const JAN_1_MIDNIGHT: f64 = 1_704_067_200.0;
    const JAN_2: f64 = 1_704_196_800.0;

    fn raw(tutor: &str, start_time: f64) -> RawChat {
        RawChat {
            tutor: tutor.to_string(),
            start_time,
            video_url: Some(format!("https://video/{tutor}/{start_time}.mp4")),
        }
    }

    fn cutoff() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2024, 1, 1)
    }

    #[test]
    fn no_cutoff_keeps_everything() {
        let list = filter_chats(
            vec![raw("t1", JAN_2), raw("t2", DEC_31)],
            None,
            UTC,
            &Logger::quiet(),
        );
        assert_eq!(list.len(), 2);
        assert_eq!(list.tutor_ids, vec!["t1", "t2"]);
    }

    #[test]
    fn cutoff_excludes_earlier_records() {
        let list = filter_chats(
            vec![raw("t1", JAN_2), raw("t2", DEC_31)],
            cutoff(),
            UTC,
            &Logger::quiet(),
        );
        assert_eq!(list.len(), 1);
        assert_eq!(list.chats[0].tutor_id, "t1");
        assert_eq!(list.tutor_ids, vec!["t1"]);
    }

    #[test]
    fn cutoff_is_inclusive_at_midnight() {
        let list = filter_chats(
            vec![raw("t1", JAN_1_MIDNIGHT), raw("t2", JAN_1_MIDNIGHT - 1.0)],
            cutoff(),
            UTC,
            &Logger::quiet(),
        );
        assert_eq!(list.tutor_ids, vec!["t1"]);
    }

    #[test]
    fn cutoff_uses_display_timezone() {
        // Jan 1 02:00 UTC is Dec 31 in New York
        let tz = Timezone::parse(Some("America/New_York")).unwrap();
        let list = filter_chats(
            vec![raw("t1", JAN_1_MIDNIGHT + 7200.0)],
            cutoff(),
            tz,
            &Logger::quiet(),
        );
        assert!(list.is_empty());
    }

    #[test]
    fn preserves_api_order() {
        let list = filter_chats(
            vec![raw("a", JAN_2 + 10.0), raw("b", JAN_2 + 5.0), raw("c", JAN_2)],
            cutoff(),
            UTC,
            &Logger::quiet(),
        );
        let ids: Vec<_> = list.chats.iter().map(|c| c.tutor_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn drops_chats_without_recording() {
        let mut missing = raw("t2", JAN_2);
        missing.video_url = None;
        let mut empty = raw("t3", JAN_2);
        empty.video_url = Some(String::new());
        let list = filter_chats(
            vec![raw("t1", JAN_2), missing, empty],
            None,
            UTC,
            &Logger::quiet(),
        );
        assert_eq!(list.tutor_ids, vec!["t1"]);
    }

    #[test]
    fn list_chats_maps_api_failure() {
        let client = ApiClient::new(FakeTransport::new().respond(CHATS_PATH, 500, ""));
        let err = list_chats(&client, "me", None, UTC, &Logger::quiet()).unwrap_err();
        assert!(matches!(err, AppError::ChatList(_)));
    }

    #[test]
    fn list_chats_parses_result() {
        let client = ApiClient::new(FakeTransport::new().respond(
            CHATS_PATH,
            200,
            r#"{"result":[
                {"tutor":"t1","startTime":1704196800,"videoURL":"https://v/2.mp4"},
                {"tutor":"t1","startTime":1704024000,"videoURL":"https://v/1.mp4"}
            ]}"#,
        ));
        let list = list_chats(&client, "me", cutoff(), UTC, &Logger::quiet()).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.chats[0].video_url, "https://v/2.mp4");
    }
}
