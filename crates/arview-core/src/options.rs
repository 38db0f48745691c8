/// Per-page options for the viewer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewerOptions {
    /// Enter AR as soon as the model has loaded (menu QR codes link with `?ar=true`).
    pub start_in_ar: bool,
}

impl ViewerOptions {
    /// Read options from a URL query string, with or without the leading `?`.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let start_in_ar = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .any(|(k, v)| k == "ar" && v == "true");
        Self { start_in_ar }
    }
}

/// Coarse AR capability check: iOS (Quick Look) and Android (Scene Viewer).
pub fn is_ar_capable(user_agent: &str) -> bool {
    ["iPad", "iPhone", "iPod", "Android"]
        .iter()
        .any(|needle| user_agent.contains(needle))
}
