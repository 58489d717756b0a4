use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::measurements::Sex;
use crate::national_id::NationalId;

/// The slice of a client record the assessment workflow reads.
///
/// Client records are owned by the roster screens; unknown fields in the
/// stored document are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ClientProfile {
    pub national_id: NationalId,
    pub name: String,
    pub birth_date: jiff::civil::Date,
    #[serde(default)]
    pub sex: Option<Sex>,
}
