use crate::domain::logging::LogComponent;
use crate::domain::market_data::MarketDataRepository;
use crate::domain::state::{AppEvent, PriceRequest};
use crate::{log_error, log_info};

/// Runs one price fetch and turns the outcome into the event carrying the
/// request's sequence number. No retry: a failure is reported as-is.
pub async fn fetch_price_series<R: MarketDataRepository>(
    repository: &R,
    request: PriceRequest,
) -> AppEvent {
    let PriceRequest { seq, symbol, range } = request;
    log_info!(
        LogComponent::Application("ChartService"),
        "request #{}: prices for {} ({})",
        seq,
        symbol,
        range.map(|r| r.to_string()).unwrap_or_else(|| "full history".to_string())
    );

    match repository.fetch_price_series(&symbol, range).await {
        Ok(series) => {
            log_info!(
                LogComponent::Application("ChartService"),
                "request #{}: {} points for {}",
                seq,
                series.len(),
                symbol
            );
            AppEvent::PricesLoaded { seq, series }
        }
        Err(error) => {
            log_error!(
                LogComponent::Application("ChartService"),
                "Error fetching price data for {}: {}",
                symbol,
                error
            );
            AppEvent::PricesFailed { seq, symbol }
        }
    }
}
