use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered contestant.
///
/// The name is the unique key; registration rejects a name that is
/// already present. `joinedAt` defaults to the server clock when the
/// client does not send one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub name: String,
    #[serde(default = "Utc::now")]
    pub joined_at: DateTime<Utc>,
}
