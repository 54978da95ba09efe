//! Utility functions for the record list view.
//!
//! - **User feedback**: transient toast notifications for save confirmations.
//! - **Confirmation gate**: the yes/no dialog in front of destructive bulk
//!   actions.
//! - **File save**: turning an exported CSV payload into a browser download.
//! - **Display formatting**: phone numbers in table cells.

use regex::Regex;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

/// Displays a temporary notification message at the bottom of the screen.
/// The toast removes itself after a few seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Native yes/no gate naming the number of rows about to be deleted.
pub fn confirm_delete(count: usize, singular: &str) -> bool {
    let message = format!("Are you sure you want to delete {} {}(s)?", count, singular);
    web_sys::window()
        .and_then(|window| window.confirm_with_message(&message).ok())
        .unwrap_or(false)
}

/// Saves `contents` as a file download named `filename` by clicking a
/// synthetic anchor bound to an object URL.
pub fn download_csv(filename: &str, contents: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };

    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv");
    let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return;
    };

    if let Some(anchor) = document
        .create_element("a")
        .ok()
        .and_then(|element| element.dyn_into::<web_sys::HtmlAnchorElement>().ok())
    {
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();
    }
    web_sys::Url::revoke_object_url(&url).ok();
}

/// Uppercases the first letter of an entity noun for titles and buttons.
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Renders a ten-digit US phone number as `(XXX) XXX-XXXX`; anything else is
/// passed through untouched.
pub fn format_phone(raw: &str) -> String {
    let re = Regex::new(r"^\(?(\d{3})\)?[-. ]?(\d{3})[-. ]?(\d{4})$").unwrap();
    match re.captures(raw.trim()) {
        Some(caps) => format!("({}) {}-{}", &caps[1], &caps[2], &caps[3]),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_plain_and_dashed_numbers() {
        assert_eq!(format_phone("6025551234"), "(602) 555-1234");
        assert_eq!(format_phone("602-555-1234"), "(602) 555-1234");
        assert_eq!(format_phone("(602) 555.1234"), "(602) 555-1234");
    }

    #[test]
    fn passes_through_everything_else() {
        assert_eq!(format_phone("+1 602 555 1234 x89"), "+1 602 555 1234 x89");
        assert_eq!(format_phone(""), "");
    }

    #[test]
    fn title_cases_entity_nouns() {
        assert_eq!(title_case("patient"), "Patient");
        assert_eq!(title_case(""), "");
    }
}
