use std::collections::HashSet;

use super::types::TutorDirectory;
use crate::api::{ApiClient, Transport};
use crate::error::AppError;
use crate::utils::Logger;

/// Look up display names for `ids` with a single batched request
pub(crate) fn resolve_tutors<T: Transport>(
    client: &ApiClient<T>,
    ids: &[String],
    logger: &Logger,
) -> Result<TutorDirectory, AppError> {
    let mut seen = HashSet::new();
    let unique: Vec<String> = ids
        .iter()
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect();

    if unique.is_empty() {
        return Ok(TutorDirectory::default());
    }

    logger.debug(format!("Get tutor list ({} tutors)", unique.len()));
    let tutors = client.tutors(&unique).map_err(AppError::TutorLookup)?;

    Ok(tutors
        .into_iter()
        .map(|(id, tutor)| (id, tutor.display_name))
        .collect())
}
