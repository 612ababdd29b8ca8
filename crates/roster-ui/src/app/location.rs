//! Page location helpers.

use gloo::utils::window;

/// Base URL for API calls: the origin that served the page.
///
/// Falls back to an empty prefix, which keeps request paths relative.
pub(crate) fn api_base_url() -> String {
    window().location().origin().unwrap_or_default()
}
