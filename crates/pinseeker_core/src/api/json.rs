//! JSON boundary for the persistence and sync collaborators.
//!
//! The engine itself mandates no storage format; these helpers are the
//! string-in/string-out seam the host uses to move boundary shapes in and
//! out. Serde errors surface through [`EngineError`] so callers handle them
//! like any other engine error.

use crate::error::Result;
use crate::models::club::ClubProfile;
use crate::models::course::Course;
use crate::models::round::RoundHistory;

pub fn round_history_to_json(history: &RoundHistory) -> Result<String> {
    Ok(serde_json::to_string(history)?)
}

pub fn round_history_from_json(json: &str) -> Result<RoundHistory> {
    Ok(serde_json::from_str(json)?)
}

pub fn course_to_json(course: &Course) -> Result<String> {
    Ok(serde_json::to_string(course)?)
}

pub fn course_from_json(json: &str) -> Result<Course> {
    Ok(serde_json::from_str(json)?)
}

pub fn bag_to_json(bag: &[ClubProfile]) -> Result<String> {
    Ok(serde_json::to_string(bag)?)
}

pub fn bag_from_json(json: &str) -> Result<Vec<ClubProfile>> {
    Ok(serde_json::from_str(json)?)
}
