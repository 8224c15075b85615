//! Long-form rendering of an error and its causes.
//!
//! ```text
//! <detail>
//! Caused by (1/N): <cause rendering>
//!  <continuation line of that cause>
//! Caused by (2/N): <cause rendering>
//! ```
//!
//! Every continuation line of a cause is prefixed with a single space so it
//! stays visually under its label.

use super::CodedError;

/// Errors are at most two levels deep: a top-level error and its leaf causes.
const MAX_DEPTH: usize = 2;

pub fn stack_trace<E: CodedError + ?Sized>(err: &E) -> String {
    render(err, 1)
}

fn render<E: CodedError + ?Sized>(err: &E, depth: usize) -> String {
    let mut out = err.detail().to_string();
    if depth >= MAX_DEPTH {
        return out;
    }

    let causes = err.causes();
    if !causes.is_empty() {
        let total = causes.len();
        for (index, cause) in causes.iter().enumerate() {
            out.push_str(&format!(
                "\nCaused by ({}/{}): {}",
                index + 1,
                total,
                indent(&render(cause, depth + 1))
            ));
        }
    } else if let Some(cause) = err.source() {
        out.push_str(&format!("\nCaused by: {}", indent(&cause.to_string())));
    }

    out
}

fn indent(text: &str) -> String {
    text.replace('\n', "\n ")
}
