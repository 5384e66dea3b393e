use serde::{Deserialize, Serialize};

/// One record of the station directory
///
/// Several stations share a `line`/`operator` pair; only `stop_id` is unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub stop_id: String,
    pub stop_name: String,
    pub line: String,
    pub operator: String,
}

impl Station {
    #[must_use]
    pub fn new(stop_id: &str, stop_name: &str, line: &str, operator: &str) -> Self {
        Self {
            stop_id: stop_id.to_string(),
            stop_name: stop_name.to_string(),
            line: line.to_string(),
            operator: operator.to_string(),
        }
    }
}
