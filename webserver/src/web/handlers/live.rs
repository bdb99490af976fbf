//! Live-value handlers
//!
//! Poll counter, simulated weather and health. These are the only handlers
//! that mutate the shared interaction state.

use axum::{extract::State, response::Json};
use shared::route_debug;

use crate::core::format_temperature;
use crate::traits::{MarkupSanitizer, UserDirectory};
use crate::types::{HealthReport, PollReading};
use crate::webserver_impl::WebServer;

/// `GET /poll` - advance the counter and report it
pub async fn poll<D, S>(State(server): State<WebServer<D, S>>) -> Json<PollReading>
where
    D: UserDirectory + 'static,
    S: MarkupSanitizer + 'static,
{
    let value = server.state().record_poll();
    route_debug!("/poll", "🔁 Poll counter advanced to {}", value);

    Json(PollReading { value })
}

/// `GET /weather` - drift the simulated temperature and report it
pub async fn weather<D, S>(State(server): State<WebServer<D, S>>) -> String
where
    D: UserDirectory + 'static,
    S: MarkupSanitizer + 'static,
{
    let temperature = server.state().next_temperature().await;
    route_debug!("/weather", "🌡️ Temperature now {:.3}", temperature);

    format_temperature(temperature)
}

/// `GET /health`
pub async fn health<D, S>(State(server): State<WebServer<D, S>>) -> Json<HealthReport>
where
    D: UserDirectory + 'static,
    S: MarkupSanitizer + 'static,
{
    Json(HealthReport {
        status: "healthy".to_string(),
        uptime_seconds: server.state().uptime_seconds(),
        poll_count: server.state().poll_count(),
    })
}
