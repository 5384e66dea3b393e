use crate::api::{ApiError, StationSource};
use crate::collation::locale_cmp;
use crate::log;
use crate::models::Station;
use indexmap::IndexSet;

/// The full list of stations, loaded once per session
///
/// Built empty, replaced by one successful [`StationDirectory::load`], and
/// read-only afterwards. Cascades share it through an `Rc`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationDirectory {
    stations: Vec<Station>,
    lines: Vec<String>,
}

impl StationDirectory {
    #[must_use]
    pub fn from_stations(stations: Vec<Station>) -> Self {
        #[cfg(all(target_arch = "wasm32", feature = "perf_timing"))]
        let start = crate::logging::perf_now();

        let mut lines: Vec<String> = stations
            .iter()
            .map(|s| s.line.clone())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect();
        // Stable sort: equal keys keep first-occurrence order
        lines.sort_by(|a, b| locale_cmp(a, b));

        #[cfg(all(target_arch = "wasm32", feature = "perf_timing"))]
        {
            if let (Some(start), Some(end)) = (start, crate::logging::perf_now()) {
                log!("⏱ distinct lines over {} stations: {:.2}ms", stations.len(), end - start);
            }
        }

        Self { stations, lines }
    }

    /// Fetch the station list from `source`
    ///
    /// # Errors
    ///
    /// Returns the source's error unchanged; the caller keeps its empty
    /// directory in that case.
    pub async fn load<S: StationSource>(source: &S) -> Result<Self, ApiError> {
        let stations = source.fetch_stations().await?;
        let directory = Self::from_stations(stations);
        log!(
            "Station directory loaded: {} stations on {} lines",
            directory.len(),
            directory.lines.len()
        );
        Ok(directory)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    #[must_use]
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Each line name once, in locale order
    #[must_use]
    pub fn distinct_lines(&self) -> &[String] {
        &self.lines
    }

    /// Stations on `line`, sorted by name in locale order
    ///
    /// Unknown or empty lines yield no stations.
    #[must_use]
    pub fn stations_for_line(&self, line: &str) -> Vec<&Station> {
        if line.is_empty() {
            return Vec::new();
        }
        let mut stations: Vec<&Station> = self.stations.iter().filter(|s| s.line == line).collect();
        stations.sort_by(|a, b| locale_cmp(&a.stop_name, &b.stop_name));
        stations
    }

    /// Operator of the first station listed on `line`
    #[must_use]
    pub fn operator_for_line(&self, line: &str) -> Option<&str> {
        self.stations
            .iter()
            .find(|s| s.line == line)
            .map(|s| s.operator.as_str())
    }
}
