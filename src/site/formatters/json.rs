use crate::site::view_models::PageData;

/// JSON formatter for composed page data
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format page data as pretty-printed JSON
    pub fn format(page: &PageData<'_>) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(page)
    }

    /// Format page data as compact JSON (no whitespace)
    pub fn format_compact(page: &PageData<'_>) -> Result<String, serde_json::Error> {
        serde_json::to_string(page)
    }
}
