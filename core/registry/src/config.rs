use structopt::StructOpt;
use strum::VariantNames;
use strum::{Display, EnumString, EnumVariantNames};

/// What `PUT` and `DELETE /activity/{id}` answer when no activity has the id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, EnumVariantNames)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum MissingActivityPolicy {
    /// Answer as if the operation succeeded.
    Ignore,
    NotFound,
}

/// What an activity body that failed validation is answered with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, EnumVariantNames)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum InvalidPayloadPolicy {
    /// 400 with the validation envelope.
    Reject,
    /// 404 with the not-found envelope.
    NotFound,
}

impl Default for MissingActivityPolicy {
    fn default() -> Self {
        MissingActivityPolicy::Ignore
    }
}

impl Default for InvalidPayloadPolicy {
    fn default() -> Self {
        InvalidPayloadPolicy::Reject
    }
}

#[derive(StructOpt, Clone, Debug, Default)]
pub struct ApiConfig {
    /// Answer for update or delete of an unknown activity
    #[structopt(
        long,
        env = "HOURBOOK_MISSING_ACTIVITY",
        default_value = "ignore",
        possible_values = MissingActivityPolicy::VARIANTS,
        case_insensitive = true
    )]
    pub missing_activity: MissingActivityPolicy,
    /// Answer for an activity body that failed validation
    #[structopt(
        long,
        env = "HOURBOOK_INVALID_PAYLOAD",
        default_value = "reject",
        possible_values = InvalidPayloadPolicy::VARIANTS,
        case_insensitive = true
    )]
    pub invalid_payload: InvalidPayloadPolicy,
}
