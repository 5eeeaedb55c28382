use serde::{Deserialize, Serialize};

use crate::activity::ActivityBrief;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentSummary {
    pub id: String,
    pub name: String,
}

/// Student joined with its company and teacher, plus the hour totals of its
/// activities. The totals are rendered as text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentDetail {
    pub id: String,
    pub name: String,
    pub company: String,
    pub teacher: String,
    pub total_hours_to_do: f64,
    pub total_time_required_done: String,
    pub total_time_optional_done: String,
    pub required_remaining_time: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentActivities {
    pub student: StudentSummary,
    pub activities: Vec<ActivityBrief>,
}
