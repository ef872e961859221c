use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Category, Priority};

/// A single unit of work tracked by MZ.
///
/// `completed_at` is set exactly when `completed` is true. Tasks are only
/// built by the store's validated create path and only mutated through
/// [`Task::mark_completed`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub content: String,
    #[serde(default, deserialize_with = "crate::lenient::blank_as_none")]
    #[schemars(with = "Option<Priority>")]
    pub priority: Option<Priority>,
    #[serde(default, deserialize_with = "crate::lenient::blank_as_none")]
    #[schemars(with = "Option<Category>")]
    pub category: Option<Category>,
    #[serde(default, deserialize_with = "crate::lenient::blank_as_none")]
    #[schemars(with = "Option<NaiveDate>")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "crate::lenient::blank_as_none")]
    #[schemars(with = "Option<String>")]
    pub priority_reasoning: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(deserialize_with = "crate::timestamps::deserialize")]
    #[schemars(with = "DateTime<Utc>")]
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "crate::timestamps::deserialize_option")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Whether the task still needs doing.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.completed
    }

    /// Flag the task done and stamp the completion time.
    ///
    /// Re-completing refreshes `completed_at`.
    pub fn mark_completed(&mut self, at: DateTime<Utc>) {
        self.completed = true;
        self.completed_at = Some(at);
    }

    /// Make `completed_at` agree with `completed`: stamp a completed task that
    /// has no time with `now`, clear the time on an open task.
    ///
    /// Returns whether anything changed.
    pub fn reconcile_completion(&mut self, now: DateTime<Utc>) -> bool {
        match (self.completed, self.completed_at) {
            (true, None) => {
                self.completed_at = Some(now);
                true
            }
            (false, Some(_)) => {
                self.completed_at = None;
                true
            }
            _ => false,
        }
    }
}
