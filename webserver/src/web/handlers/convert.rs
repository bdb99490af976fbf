//! Fahrenheit to Celsius conversion with simulated backend latency

use axum::extract::State;
use axum::response::Html;
use shared::route_debug;

use crate::core::Conversion;
use crate::core::conversion::display_number;
use crate::error::WebServerResult;
use crate::traits::{MarkupSanitizer, UserDirectory};
use crate::types::ConvertForm;
use crate::web::extract::Submission;
use crate::web::views::{ConversionFragment, render};
use crate::webserver_impl::WebServer;

/// `POST /convert` - answers after the configured conversion latency.
/// Unparseable input converts as NaN.
pub async fn convert<D, S>(
    State(server): State<WebServer<D, S>>,
    Submission(form): Submission<ConvertForm>,
) -> WebServerResult<Html<String>>
where
    D: UserDirectory + 'static,
    S: MarkupSanitizer + 'static,
{
    tokio::time::sleep(server.latency().conversion).await;

    let fahrenheit = form.fahrenheit.map(|value| value.as_f64()).unwrap_or(f64::NAN);
    let conversion = Conversion::from_fahrenheit(fahrenheit);
    route_debug!("/convert", "🌡️ {} F -> {} C", conversion.fahrenheit, conversion.celsius);

    render(&ConversionFragment {
        fahrenheit: display_number(conversion.fahrenheit),
        celsius: display_number(conversion.celsius),
    })
}
