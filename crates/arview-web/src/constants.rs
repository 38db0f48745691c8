// Page element ids and <model-viewer> event names.

pub const MODEL_VIEWER_ID: &str = "model-viewer";
pub const MODEL_VIEWER_TAG: &str = "model-viewer";

// Overlays
pub const HINT_ID: &str = "ar-gesture-hint";
pub const LOADING_ID: &str = "model-loading";
pub const AR_UNSUPPORTED_ID: &str = "ar-unsupported";

// Buttons
pub const AR_BUTTON_ID: &str = "ar-button";
pub const RESET_VIEW_ID: &str = "reset-view";
pub const AUTO_ROTATE_ID: &str = "toggle-rotate";

// Events
pub const AR_STATUS_EVENT: &str = "ar-status";
pub const LOAD_EVENT: &str = "load";
pub const TOUCH_EVENTS: [&str; 4] = ["touchstart", "touchmove", "touchend", "touchcancel"];
