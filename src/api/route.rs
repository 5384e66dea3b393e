use super::{ApiError, HttpApi, RouteService};
use crate::constants::FIND_ROUTE_ENDPOINT;
use crate::log;
use crate::models::RouteResponse;
use crate::pipeline::RouteRequest;

impl RouteService for HttpApi {
    async fn find_route(&self, request: &RouteRequest) -> Result<RouteResponse, ApiError> {
        let url = self.endpoint(FIND_ROUTE_ENDPOINT)?;
        let response = self.http.post(url).form(request.fields()).send().await?;

        // Error replies come back as 4xx/5xx with a JSON `error` body, so the
        // status alone does not decide the outcome.
        log!("find_route status: {}", response.status());

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Json {
            message: e.to_string(),
        })
    }
}
