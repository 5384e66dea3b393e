use crate::constants::{labels, MAP_RESULT_PATH};
use crate::line_colors::color_for;
use crate::models::{RoutePlan, Segment};
use crate::pipeline::Ticket;

/// Display data for one stop of the timeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentView {
    pub station: String,
    pub accent_color: &'static str,
    pub arrival: Option<String>,
    pub departure: Option<String>,
    pub line_info: Option<String>,
}

impl SegmentView {
    #[must_use]
    pub fn arrival_label(&self) -> Option<String> {
        self.arrival
            .as_ref()
            .map(|time| format!("{}{time}", labels::ARRIVAL_PREFIX))
    }

    #[must_use]
    pub fn departure_label(&self) -> Option<String> {
        self.departure
            .as_ref()
            .map(|time| format!("{}{time}", labels::DEPARTURE_PREFIX))
    }

    /// Line info wrapped in parentheses
    #[must_use]
    pub fn line_info_label(&self) -> Option<String> {
        self.line_info.as_ref().map(|info| format!("({info})"))
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

impl From<&Segment> for SegmentView {
    fn from(segment: &Segment) -> Self {
        Self {
            station: segment.station.clone(),
            accent_color: color_for(&segment.operator, &segment.line),
            arrival: non_empty(&segment.arrival),
            departure: non_empty(&segment.departure),
            line_info: non_empty(&segment.line_info),
        }
    }
}

/// A run of consecutive stops on the same operator and line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegView {
    pub line: String,
    pub color: &'static str,
    pub stops: usize,
}

/// Group consecutive segments sharing an operator and line
#[must_use]
pub fn legs(segments: &[Segment]) -> Vec<LegView> {
    let mut legs: Vec<LegView> = Vec::new();
    let mut current: Option<(&str, &str)> = None;

    for segment in segments {
        let key = (segment.operator.as_str(), segment.line.as_str());
        if current == Some(key) {
            if let Some(leg) = legs.last_mut() {
                leg.stops += 1;
                continue;
            }
        }
        legs.push(LegView {
            line: segment.line.clone(),
            color: color_for(&segment.operator, &segment.line),
            stops: 1,
        });
        current = Some(key);
    }
    legs
}

/// Everything the result panel shows for one itinerary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteView {
    pub total_time: String,
    pub segments: Vec<SegmentView>,
    pub legs: Vec<LegView>,
    pub map_src: String,
}

impl RouteView {
    /// Build the view for `plan`, in travel order
    #[must_use]
    pub fn render(plan: &RoutePlan, ticket: Ticket) -> Self {
        Self {
            total_time: plan.total_time.to_string(),
            segments: plan.route_info.iter().map(SegmentView::from).collect(),
            legs: legs(&plan.route_info),
            map_src: map_src(ticket),
        }
    }

    #[must_use]
    pub fn transfers(&self) -> usize {
        self.legs.len().saturating_sub(1)
    }
}

/// Map document URL for a submission
///
/// The route service overwrites `static/route_result.html` on every search
/// instead of serving a per-route document. Keying the frame URL by the
/// submission number keeps the browser from showing a cached map of an
/// earlier route.
#[must_use]
pub fn map_src(ticket: Ticket) -> String {
    format!("{MAP_RESULT_PATH}?v={}", ticket.sequence())
}
