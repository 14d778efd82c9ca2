use chrono::NaiveDateTime;
use database::services::time_entry::{EntryWithUser, NewTimeEntry, TimeEntryChanges};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TimeEntryResponse {
    pub id: i32,
    pub user_id: i32,
    pub username: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Worked time in minutes
    pub minutes: i64,
    pub note: Option<String>,
}

impl From<EntryWithUser> for TimeEntryResponse {
    fn from((entry, user): EntryWithUser) -> Self {
        Self {
            id: entry.id,
            user_id: entry.user_id,
            username: user.map(|u| u.username),
            start: entry.start,
            end: entry.end,
            minutes: (entry.end - entry.start).num_minutes(),
            note: entry.note,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTimeEntryRequest {
    /// Defaults to the caller
    pub user_id: Option<i32>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub note: Option<String>,
}

impl CreateTimeEntryRequest {
    pub fn into_new(self, default_user_id: i32) -> NewTimeEntry {
        NewTimeEntry {
            user_id: self.user_id.unwrap_or(default_user_id),
            start: self.start,
            end: self.end,
            note: self.note,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateTimeEntryRequest {
    pub user_id: Option<i32>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub note: Option<String>,
}

impl From<UpdateTimeEntryRequest> for TimeEntryChanges {
    fn from(req: UpdateTimeEntryRequest) -> Self {
        Self {
            user_id: req.user_id,
            start: req.start,
            end: req.end,
            note: req.note,
        }
    }
}
