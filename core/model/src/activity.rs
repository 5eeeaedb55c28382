use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Message, ValidationError};

/// Label that marks an activity as required. Every other label is optional.
pub const REQUIRED_LABEL: &str = "Obligatorio";

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityKind {
    Required,
    Optional(String),
}

impl ActivityKind {
    pub fn from_label(label: &str) -> Self {
        if label == REQUIRED_LABEL {
            ActivityKind::Required
        } else {
            ActivityKind::Optional(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ActivityKind::Required => REQUIRED_LABEL,
            ActivityKind::Optional(label) => label,
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, ActivityKind::Required)
    }
}

impl From<String> for ActivityKind {
    fn from(label: String) -> Self {
        ActivityKind::from_label(&label)
    }
}

impl From<ActivityKind> for String {
    fn from(kind: ActivityKind) -> Self {
        kind.label().to_string()
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Duration of an activity in hours, kept as the text it was submitted with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityTime(String);

impl ActivityTime {
    pub fn new(text: impl Into<String>) -> Self {
        ActivityTime(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value, `None` when the stored text is not a finite number.
    pub fn hours(&self) -> Option<f64> {
        self.0
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }
}

impl fmt::Display for ActivityTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `time` as it arrives on the wire: clients send either a number or a string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTime {
    Number(serde_json::Number),
    Text(String),
}

impl RawTime {
    fn into_text(self) -> String {
        match self {
            RawTime::Number(number) => number.to_string(),
            RawTime::Text(text) => text,
        }
    }
}

/// Request body of activity creation and update.
///
/// Every field is optional on the wire so a missing field is reported by
/// [`NewActivity::validate`] instead of failing deserialization.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewActivity {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<RawTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewActivity {
    pub fn validate(self) -> Result<ActivityFields, ValidationError> {
        let kind = required_text("type", self.activity_type)?;
        let date = required_text("date", self.date)?;
        let time = required_text("time", self.time.map(RawTime::into_text))?;
        let description = required_text("description", self.description)?;

        let time = ActivityTime::new(time);
        match time.hours() {
            None => return Err(ValidationError::NotNumeric(time.to_string())),
            Some(hours) if hours == 0.0 => return Err(ValidationError::Missing("time")),
            Some(_) => (),
        }

        Ok(ActivityFields {
            kind: ActivityKind::from(kind),
            date,
            time,
            description,
        })
    }
}

fn required_text(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ValidationError::Missing(field)),
    }
}

/// The four fields of an activity after they passed validation.
#[derive(Clone, Debug, PartialEq)]
pub struct ActivityFields {
    pub kind: ActivityKind,
    pub date: String,
    pub time: ActivityTime,
    pub description: String,
}

impl ActivityFields {
    pub fn into_activity(self, id: impl Into<String>) -> Activity {
        Activity {
            id: id.into(),
            kind: self.kind,
            date: self.date,
            time: self.time,
            description: self.description,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub date: String,
    pub time: ActivityTime,
    pub description: String,
}

/// Short form used when listing the activities of a student.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityBrief {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub time: ActivityTime,
}

impl From<Activity> for ActivityBrief {
    fn from(activity: Activity) -> Self {
        ActivityBrief {
            id: activity.id,
            kind: activity.kind,
            time: activity.time,
        }
    }
}

pub fn deleted_message(activity_id: &str) -> Message {
    Message::new(format!(
        "Actividad {} fue eliminada correctamente",
        activity_id
    ))
}
