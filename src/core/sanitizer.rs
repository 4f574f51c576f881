//! Removal of the reserved style placeholder from user text

/// Placeholder the renderer injects around styled regions.
///
/// Every occurrence in a format string consumes one style argument, so user
/// text must never carry it.
pub const PLACEHOLDER: &str = "%c";

/// Strip every `%c` from `input`.
///
/// Removal repeats until none is left, so `"%%cc"` cannot collapse into a
/// fresh placeholder.
pub fn sanitize(input: &str) -> String {
    let mut output = input.replace(PLACEHOLDER, "");
    while output.contains(PLACEHOLDER) {
        output = output.replace(PLACEHOLDER, "");
    }
    output
}
