//! Server-rendered HTML pages.

pub mod artists;
pub mod errors;
pub mod format;
pub mod forms;
pub mod home;
pub mod layout;
pub mod search;
pub mod shows;
pub mod venues;

use std::borrow::Cow;

pub use format::{DateFormat, format_datetime};
pub use layout::{Page, SearchTarget};

pub(crate) fn text(value: &str) -> Cow<'_, str> {
    html_escape::encode_text(value)
}

pub(crate) fn attr(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}
