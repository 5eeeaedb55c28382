use hb_model::activity::Activity;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoursSummary {
    pub required_done: f64,
    pub optional_done: f64,
    /// `total_hours_to_do - required_done`, negative once the student did more
    /// than required.
    pub remaining: f64,
}

impl HoursSummary {
    pub fn compute(total_hours_to_do: f64, activities: &[Activity]) -> Self {
        let mut required_done = 0.0;
        let mut optional_done = 0.0;

        for activity in activities {
            let hours = match activity.time.hours() {
                Some(hours) => hours,
                None => {
                    log::warn!(
                        "Activity {} has non-numeric time '{}', counting it as 0",
                        activity.id,
                        activity.time
                    );
                    0.0
                }
            };

            if activity.kind.is_required() {
                required_done += hours;
            } else {
                optional_done += hours;
            }
        }

        HoursSummary {
            required_done,
            optional_done,
            remaining: total_hours_to_do - required_done,
        }
    }
}

/// Shortest decimal form that parses back to the same value, always with a
/// fractional part: `3.0`, `2.5`, `-4.0`.
pub fn render_hours(hours: f64) -> String {
    format!("{:?}", hours)
}
