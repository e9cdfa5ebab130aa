// Template chosen on another page, handed over through localStorage
use crate::error::OverlayError;
use crate::platform::storage;
use crate::state::ImageSource;
use crate::util::clog;

pub const TEMPLATE_KEY: &str = "selectedTemplatePath";

/// Consumes the stored template path: it is removed whether or not it parses.
pub fn take_selected_template() -> Option<Result<ImageSource, OverlayError>> {
    let path = storage::get(TEMPLATE_KEY)?;
    storage::remove(TEMPLATE_KEY);
    clog(&format!("template selected: {path}"));
    Some(ImageSource::parse(&path))
}
