//! Task input validation.
//!
//! Every field is checked and every problem collected; nothing short-circuits,
//! so the user sees all reasons at once.

use chrono::NaiveDate;
use mz_core::enums::{Category, Priority};
use mz_core::errors::{CoreError, ValidationFailure};

use crate::NewTask;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Task fields that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidTask {
    pub content: String,
    pub priority: Option<Priority>,
    pub category: Option<Category>,
    pub due_date: Option<NaiveDate>,
    pub reasoning: Option<String>,
}

fn present(raw: Option<&String>) -> Option<&str> {
    raw.map(|value| value.trim()).filter(|value| !value.is_empty())
}

/// Validate raw task input.
pub fn validate(input: &NewTask) -> Result<ValidTask, ValidationFailure> {
    let mut errors = Vec::new();

    if input.content.trim().is_empty() {
        errors.push(CoreError::EmptyContent);
    }

    let priority = present(input.priority.as_ref())
        .and_then(|raw| raw.parse::<Priority>().map_err(|e| errors.push(e)).ok());

    let category = present(input.category.as_ref())
        .and_then(|raw| raw.parse::<Category>().map_err(|e| errors.push(e)).ok());

    let due_date = present(input.due_date.as_ref()).and_then(|raw| {
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map_err(|_| errors.push(CoreError::InvalidDate(raw.to_string())))
            .ok()
    });

    if let Some(failure) = ValidationFailure::from_errors(errors) {
        return Err(failure);
    }

    Ok(ValidTask {
        content: input.content.clone(),
        priority,
        category,
        due_date,
        reasoning: present(input.reasoning.as_ref()).map(String::from),
    })
}
