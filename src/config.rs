use crate::application::retry::RetryPolicy;
use crate::domain::chart::ChartDimensions;
use crate::domain::logging::LogComponent;
use crate::log_warn;

pub const API_BASE_META: &str = "tracker-api-base";
pub const RANGE_SELECTOR_META: &str = "tracker-range-selector";

/// Page-level settings. Defaults match a backend served from the same origin.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub api_base_url: String,
    pub symbol_retry: RetryPolicy,
    pub range_selector: bool,
    pub chart: ChartDimensions,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            symbol_retry: RetryPolicy::default(),
            range_selector: true,
            chart: ChartDimensions::default(),
        }
    }
}

impl TrackerConfig {
    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    pub fn with_symbol_retry(mut self, policy: RetryPolicy) -> Self {
        self.symbol_retry = policy;
        self
    }

    pub fn with_range_selector(mut self, enabled: bool) -> Self {
        self.range_selector = enabled;
        self
    }

    pub fn with_chart(mut self, chart: ChartDimensions) -> Self {
        self.chart = chart;
        self
    }

    /// Defaults overridden by `<meta name="tracker-...">` tags on the page.
    pub fn from_window() -> Self {
        Self::default().with_overrides(meta_content(API_BASE_META), meta_content(RANGE_SELECTOR_META))
    }

    /// Apply raw override values; unparseable ones are ignored with a warning.
    pub fn with_overrides(mut self, api_base: Option<String>, range_selector: Option<String>) -> Self {
        if let Some(base) = api_base {
            self.api_base_url = base.trim().to_string();
        }
        if let Some(raw) = range_selector {
            match parse_flag(&raw) {
                Some(enabled) => self.range_selector = enabled,
                None => {
                    log_warn!(
                        LogComponent::Presentation("Config"),
                        "ignoring {}='{}', expected on/off",
                        RANGE_SELECTOR_META,
                        raw
                    );
                }
            }
        }
        self
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

fn meta_content(name: &str) -> Option<String> {
    gloo::utils::document()
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()??
        .get_attribute("content")
}
