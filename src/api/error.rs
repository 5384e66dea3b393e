/// Failures talking to the station directory or routing service
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or the body could not be read
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint path could not be resolved against the page URL
    #[error("invalid endpoint URL: {url}")]
    InvalidUrl { url: String },

    /// The service answered with a non-success status
    #[error("API error {status}")]
    Status { status: u16 },

    /// The body was not the JSON shape we expect
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// The route reply carried neither an error nor a complete itinerary
    #[error("route response has neither an error nor an itinerary")]
    MalformedRoute,
}
