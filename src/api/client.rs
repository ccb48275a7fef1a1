use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::transport::Transport;
use super::types::{CurrentUser, RawChat, RawTutor};
use crate::consts::{CHAT_PAGE_LIMIT, CHATS_PATH, TUTORS_PATH, USER_PATH};
use crate::error::ApiError;

pub(crate) struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub(crate) fn new(transport: T) -> Self {
        Self { transport }
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    /// GET `path` and decode the `result` field of a 200 response
    fn get_result<R: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<R, ApiError> {
        let response = self.transport.get(path, params)?;
        if response.status != 200 {
            return Err(ApiError::Status {
                status: response.status,
            });
        }

        let mut body: Value = serde_json::from_str(&response.body)?;
        let result = body
            .get_mut("result")
            .map(Value::take)
            .ok_or(ApiError::MissingResult)?;
        Ok(serde_json::from_value(result)?)
    }

    pub(crate) fn current_user(&self) -> Result<CurrentUser, ApiError> {
        self.get_result(USER_PATH, &[])
    }

    /// Completed lessons as student, newest first. Single page only.
    pub(crate) fn chats(&self, user_id: &str) -> Result<Vec<RawChat>, ApiError> {
        let params = [
            ("language", "en".to_string()),
            ("userId", user_id.to_string()),
            ("state", "2".to_string()),
            ("role", "student".to_string()),
            ("sort", "-1".to_string()),
            ("limit", CHAT_PAGE_LIMIT.to_string()),
            ("viewAs", "student".to_string()),
        ];
        self.get_result(CHATS_PATH, &params)
    }

    /// Batch lookup, one `ids[]` parameter per id
    pub(crate) fn tutors(&self, ids: &[String]) -> Result<HashMap<String, RawTutor>, ApiError> {
        let params: Vec<(&str, String)> = ids.iter().map(|id| ("ids[]", id.clone())).collect();
        self.get_result(TUTORS_PATH, &params)
    }
}
