use super::{ApiError, HttpApi, StationSource};
use crate::constants::STATIONS_ENDPOINT;
use crate::log;
use crate::models::Station;

impl StationSource for HttpApi {
    async fn fetch_stations(&self) -> Result<Vec<Station>, ApiError> {
        let url = self.endpoint(STATIONS_ENDPOINT)?;
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let stations: Vec<Station> = serde_json::from_str(&body).map_err(|e| ApiError::Json {
            message: e.to_string(),
        })?;

        log!("Received {} stations", stations.len());
        Ok(stations)
    }
}
