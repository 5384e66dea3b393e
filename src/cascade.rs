use crate::constants::{labels, DEFAULT_OPERATOR, FROM_STATION_FIELD, LINE_GLYPH, TO_STATION_FIELD};
use crate::directory::StationDirectory;
use crate::line_colors::color_for;
use crate::models::Station;
use std::rc::Rc;

/// Which end of the journey a cascade selects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Origin,
    Destination,
}

impl Endpoint {
    /// Form field the selected station is submitted under
    #[must_use]
    pub fn field_name(self) -> &'static str {
        match self {
            Self::Origin => FROM_STATION_FIELD,
            Self::Destination => TO_STATION_FIELD,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Origin => labels::ORIGIN,
            Self::Destination => labels::DESTINATION,
        }
    }

    /// Prefix for element ids, e.g. `from-line`, `to-station`
    #[must_use]
    pub fn id_prefix(self) -> &'static str {
        match self {
            Self::Origin => "from",
            Self::Destination => "to",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOption {
    pub line: String,
    pub label: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationOption {
    pub stop_id: String,
    pub stop_name: String,
    pub color: &'static str,
}

impl From<&Station> for StationOption {
    fn from(station: &Station) -> Self {
        Self {
            stop_id: station.stop_id.clone(),
            stop_name: station.stop_name.clone(),
            color: color_for(&station.operator, &station.line),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CascadeError {
    #[error("station {stop_id} is not offered for line {line:?}")]
    StationNotOffered { stop_id: String, line: String },
}

/// A line control coupled to a station control
///
/// The station options always come from the selected line, and the selected
/// station is always one of them. Changing the line clears the station.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorCascade {
    endpoint: Endpoint,
    directory: Rc<StationDirectory>,
    selected_line: String,
    selected_station_id: Option<String>,
    station_options: Vec<StationOption>,
}

impl SelectorCascade {
    #[must_use]
    pub fn new(endpoint: Endpoint, directory: Rc<StationDirectory>) -> Self {
        Self {
            endpoint,
            directory,
            selected_line: String::new(),
            selected_station_id: None,
            station_options: Vec::new(),
        }
    }

    /// Origin and destination cascades over one shared directory
    #[must_use]
    pub fn pair(directory: &Rc<StationDirectory>) -> (Self, Self) {
        (
            Self::new(Endpoint::Origin, Rc::clone(directory)),
            Self::new(Endpoint::Destination, Rc::clone(directory)),
        )
    }

    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    #[must_use]
    pub fn selected_line(&self) -> &str {
        &self.selected_line
    }

    #[must_use]
    pub fn selected_station_id(&self) -> Option<&str> {
        self.selected_station_id.as_deref()
    }

    /// Whether the line control has anything to offer yet
    #[must_use]
    pub fn is_line_enabled(&self) -> bool {
        !self.directory.is_empty()
    }

    #[must_use]
    pub fn is_station_enabled(&self) -> bool {
        !self.selected_line.is_empty()
    }

    /// Options for the station control, not counting the placeholder
    #[must_use]
    pub fn station_options(&self) -> &[StationOption] {
        &self.station_options
    }

    /// Options for the line control, each with its glyph and color
    ///
    /// A line takes the color of the operator of its first listed station.
    #[must_use]
    pub fn line_options(&self) -> Vec<LineOption> {
        self.directory
            .distinct_lines()
            .iter()
            .map(|line| {
                let operator = self.directory.operator_for_line(line).unwrap_or(DEFAULT_OPERATOR);
                LineOption {
                    line: line.clone(),
                    label: format!("{LINE_GLYPH}{line}"),
                    color: color_for(operator, line),
                }
            })
            .collect()
    }

    /// Color of the currently selected line, if any
    #[must_use]
    pub fn selected_line_color(&self) -> Option<&'static str> {
        if self.selected_line.is_empty() {
            return None;
        }
        let operator = self
            .directory
            .operator_for_line(&self.selected_line)
            .unwrap_or(DEFAULT_OPERATOR);
        Some(color_for(operator, &self.selected_line))
    }

    /// Select a line and rebuild the station options for it
    ///
    /// An empty line disables the station control.
    pub fn set_line(&mut self, line: &str) {
        line.clone_into(&mut self.selected_line);
        self.selected_station_id = None;
        self.station_options = self
            .directory
            .stations_for_line(line)
            .into_iter()
            .map(StationOption::from)
            .collect();
    }

    /// Select a station among the current options
    ///
    /// An empty id selects the placeholder and clears the selection.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the state unchanged, if `stop_id` is not one
    /// of the current station options.
    pub fn set_station(&mut self, stop_id: &str) -> Result<(), CascadeError> {
        if stop_id.is_empty() {
            self.selected_station_id = None;
            return Ok(());
        }
        if !self.station_options.iter().any(|o| o.stop_id == stop_id) {
            return Err(CascadeError::StationNotOffered {
                stop_id: stop_id.to_string(),
                line: self.selected_line.clone(),
            });
        }
        self.selected_station_id = Some(stop_id.to_string());
        Ok(())
    }
}
