//! Attribute injection into already-rendered control markup.
//!
//! The markup is never parsed: the attribute is inserted right before the
//! first `>`, padded with one space on each side. Each injection lands at the
//! same spot, so when decorators are stacked the attribute injected last (the
//! outermost decorator) ends up rightmost, next to the `>`.

use crate::error::{FormError, FormResult};
use crate::markup::Markup;

/// Insert `attribute` before the first `>` of `markup`.
///
/// Returns a new fragment; the input is left untouched.
pub fn inject(markup: &Markup, attribute: &str) -> FormResult<Markup> {
    let pos = markup
        .insertion_point()
        .ok_or_else(|| FormError::MalformedMarkup {
            markup: markup.to_string(),
        })?;

    let (prefix, suffix) = markup.as_str().split_at(pos);
    let mut html = String::with_capacity(markup.len() + attribute.len() + 2);
    html.push_str(prefix);
    html.push(' ');
    html.push_str(attribute);
    html.push(' ');
    html.push_str(suffix);

    tracing::trace!(attribute, at = pos, "injected attribute");
    Ok(Markup::from(html))
}
