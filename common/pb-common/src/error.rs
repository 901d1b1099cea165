//! Error reporting helpers
//!
//! Formats an error together with its `source()` chain so that command-line
//! tools can print one readable line instead of a Debug dump.

use std::error::Error;

/// Render an error and every cause beneath it as `outer: inner: root`
///
/// Causes whose message is already contained in their parent's message are
/// skipped, since `thiserror` variants commonly embed `{0}` of the source.
///
/// # Example
///
/// ```rust,ignore
/// eprintln!("pb-search: {}", pb_common::error_chain(&err));
/// ```
pub fn error_chain(err: &(dyn Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut last = message.clone();
    let mut source = err.source();

    while let Some(cause) = source {
        let text = cause.to_string();
        if !last.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        last = text;
        source = cause.source();
    }

    message
}
