//! Placeholder substitution for message templates
//!
//! Templates use the two-character `{}` placeholder. Each occurrence is
//! replaced by the next unused argument's `Display` rendering, left to right.
//! Mismatches are handled gracefully in both directions: surplus arguments are
//! ignored and exhausted arguments leave the remaining placeholders literal.
//! `\{}` escapes a placeholder without consuming an argument.

use std::fmt::{Display, Write};

/// The placeholder token recognized in message templates.
pub const PLACEHOLDER: &str = "{}";

/// Substitute `{}` placeholders in `template` with `args`, in order.
///
/// Never panics, for any template/argument combination.
///
/// # Examples
///
/// ```
/// use simple_logger_system::core::format_message;
///
/// let line = format_message("Some {} string", &[&"formatted"]);
/// assert_eq!(line, "Some formatted string");
///
/// // Arguments that run out leave the placeholder literal
/// let line = format_message("{} and {}", &[&"one"]);
/// assert_eq!(line, "one and {}");
/// ```
#[must_use]
pub fn format_message(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut rest = template;
    let mut next_arg = 0;

    while let Some(idx) = rest.find(PLACEHOLDER) {
        if idx > 0 && rest.as_bytes()[idx - 1] == b'\\' {
            // Escaped placeholder: drop the backslash, keep the braces.
            out.push_str(&rest[..idx - 1]);
            out.push_str(PLACEHOLDER);
            rest = &rest[idx + PLACEHOLDER.len()..];
            continue;
        }

        if next_arg >= args.len() {
            // Arguments exhausted: the placeholder stays literal.
            out.push_str(&rest[..idx + PLACEHOLDER.len()]);
            rest = &rest[idx + PLACEHOLDER.len()..];
            continue;
        }

        out.push_str(&rest[..idx]);
        let _ = write!(out, "{}", args[next_arg]);
        next_arg += 1;
        rest = &rest[idx + PLACEHOLDER.len()..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_substitution() {
        let result = format_message("Some {} string", &[&"formatted"]);
        assert_eq!(result, "Some formatted string");
    }

    #[test]
    fn test_multiple_substitutions_in_order() {
        let result = format_message("{} + {} = {}", &[&1, &2, &3]);
        assert_eq!(result, "1 + 2 = 3");
    }

    #[test]
    fn test_no_placeholders() {
        let result = format_message("plain message", &[&"ignored"]);
        assert_eq!(result, "plain message");
    }

    #[test]
    fn test_surplus_arguments_ignored() {
        let result = format_message("only {}", &[&"first", &"second"]);
        assert_eq!(result, "only first");
    }

    #[test]
    fn test_exhausted_arguments_leave_placeholder_literal() {
        let result = format_message("{} then {} then {}", &[&"a"]);
        assert_eq!(result, "a then {} then {}");
    }

    #[test]
    fn test_no_arguments_at_all() {
        let result = format_message("value is {}", &[]);
        assert_eq!(result, "value is {}");
    }

    #[test]
    fn test_escaped_placeholder() {
        let result = format_message("set \\{} to {}", &[&42]);
        assert_eq!(result, "set {} to 42");
    }

    #[test]
    fn test_lone_open_brace_is_literal() {
        let result = format_message("brace { only {}", &[&"x"]);
        assert_eq!(result, "brace { only x");
    }

    #[test]
    fn test_mixed_display_types() {
        let result = format_message("{}={} ({}%)", &[&"load", &0.75, &75]);
        assert_eq!(result, "load=0.75 (75%)");
    }

    #[test]
    fn test_adjacent_placeholders() {
        let result = format_message("{}{}", &[&"ab", &"cd"]);
        assert_eq!(result, "abcd");
    }

    #[test]
    fn test_empty_template() {
        assert_eq!(format_message("", &[&"x"]), "");
    }
}
