use serde::{Deserialize, Serialize};
use std::fmt;

/// Total travel time exactly as the routing service reported it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TotalTime {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for TotalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One stop of an itinerary, in travel order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub station: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub line: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub operator: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub line_info: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub arrival: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub departure: String,
}

/// Body of a route computation reply, before classification
///
/// The service answers with either an `error` or a `total_time` plus
/// `route_info`; every field is optional here so both shapes decode. Other
/// keys in the body (stop id lists, map paths, stats) are skipped.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RouteResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub total_time: Option<TotalTime>,
    #[serde(default)]
    pub route_info: Option<Vec<Segment>>,
}

/// A successfully computed itinerary
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    pub total_time: TotalTime,
    pub route_info: Vec<Segment>,
}

/// What a well-formed route reply means
#[derive(Debug, Clone, PartialEq)]
pub enum RouteReply {
    Found(RoutePlan),
    /// The service could not compute a route; carries its message verbatim
    Rejected(String),
}

impl RouteResponse {
    /// Classify the reply
    ///
    /// An empty `error` string counts as absent. Returns `None` when the body
    /// carries neither an error nor both success fields.
    #[must_use]
    pub fn into_reply(self) -> Option<RouteReply> {
        if let Some(message) = self.error.filter(|m| !m.is_empty()) {
            return Some(RouteReply::Rejected(message));
        }
        match (self.total_time, self.route_info) {
            (Some(total_time), Some(route_info)) => Some(RouteReply::Found(RoutePlan {
                total_time,
                route_info,
            })),
            _ => None,
        }
    }
}
