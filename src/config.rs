//! Page Configuration
//!
//! Optional JSON override in `<body data-config='{...}'>`.

use todo_core::WidgetConfig;

const CONFIG_ATTR: &str = "data-config";

pub fn body_config() -> WidgetConfig {
    let raw = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.body())
        .and_then(|body| body.get_attribute(CONFIG_ATTR));
    WidgetConfig::from_json_or_default(raw.as_deref())
}
