/// Station directory endpoint, relative to the page
pub const STATIONS_ENDPOINT: &str = "api/stations";

/// Route computation endpoint, relative to the page
pub const FIND_ROUTE_ENDPOINT: &str = "api/find_route";

/// Map document written by the routing service after each successful search
pub const MAP_RESULT_PATH: &str = "static/route_result.html";

/// Page base used when no browser window is available (native builds and tests)
pub const FALLBACK_PAGE_BASE: &str = "http://localhost:5001/";

/// Color used for any (operator, line) pair missing from the line color table
pub const FALLBACK_LINE_COLOR: &str = "#CCCCCC";

/// Operator assumed for a line option when no station on that line is known
pub const DEFAULT_OPERATOR: &str = "A1";

/// Leading glyph on line options
pub const LINE_GLYPH: &str = "● ";

/// Form field names understood by the routing service
pub const FROM_STATION_FIELD: &str = "from_station";
pub const TO_STATION_FIELD: &str = "to_station";
pub const DEPARTURE_TIME_FIELD: &str = "departure_time";

/// User-visible labels
pub mod labels {
    pub const PAGE_TITLE: &str = "지하철 경로 찾기";
    pub const ORIGIN: &str = "출발";
    pub const DESTINATION: &str = "도착";
    pub const LINE_PLACEHOLDER: &str = "호선 선택";
    pub const STATION_PLACEHOLDER: &str = "역 선택";
    pub const DEPARTURE_TIME: &str = "출발 시간";
    pub const SUBMIT: &str = "경로 검색";
    pub const LOADING: &str = "경로를 검색하는 중...";
    pub const TOTAL_TIME: &str = "총 소요시간";
    pub const TRANSFERS: &str = "환승";
    pub const ARRIVAL_PREFIX: &str = "도착: ";
    pub const DEPARTURE_PREFIX: &str = "출발: ";
    pub const DIRECTORY_LOAD_FAILED: &str = "역 목록 불러오기에 실패했습니다.";
    pub const ROUTE_REQUEST_FAILED: &str = "경로 검색 중 오류가 발생했습니다.";
}
