mod route;
mod station;

pub use route::{RoutePlan, RouteReply, RouteResponse, Segment, TotalTime};
pub use station::Station;

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` the same as a missing string field
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
