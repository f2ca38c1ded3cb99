//! Message template substitution.
//!
//! Templates use printf-style directives: `%s` renders any value, `%d`
//! renders integers only, `%n` is a newline and `%%` a literal percent.
//! Substitution is all-or-nothing: any mismatch yields `None` so the caller
//! can fall back to the raw template.

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

fn directive_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"%(.?)").expect("directive regex must compile"))
}

/// Fills `template` with `args` in order.
///
/// Returns `None` when an argument is missing, a `%d` receives a
/// non-integer, or a directive is unknown. Surplus arguments are ignored.
pub fn substitute(template: &str, args: &[Value]) -> Option<String> {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut last = 0;

    for caps in directive_re().captures_iter(template) {
        let whole = caps.get(0)?;
        out.push_str(&template[last..whole.start()]);
        match caps.get(1).map_or("", |m| m.as_str()) {
            "%" => out.push('%'),
            "n" => out.push('\n'),
            "s" => out.push_str(&render_any(args.next()?)),
            "d" => out.push_str(&render_integer(args.next()?)?),
            _ => return None,
        }
        last = whole.end();
    }

    out.push_str(&template[last..]);
    Some(out)
}

/// Strings render bare, everything else in its JSON form.
pub fn render_any(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn render_integer(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
        _ => None,
    }
}

/// Number of arguments `template` consumes, or `None` if it contains an
/// unknown directive.
pub fn arity(template: &str) -> Option<usize> {
    let mut count = 0;
    for caps in directive_re().captures_iter(template) {
        match caps.get(1).map_or("", |m| m.as_str()) {
            "%" | "n" => {}
            "s" | "d" => count += 1,
            _ => return None,
        }
    }
    Some(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fills_string_and_integer_directives() {
        let out = substitute("between %s and %d", &[json!("a"), json!(3)]);
        assert_eq!(out.as_deref(), Some("between a and 3"));
    }

    #[test]
    fn non_string_values_render_as_json() {
        let out = substitute("got %s", &[json!(1.5)]);
        assert_eq!(out.as_deref(), Some("got 1.5"));
        let out = substitute("got %s", &[json!(null)]);
        assert_eq!(out.as_deref(), Some("got null"));
    }

    #[test]
    fn escapes_and_newlines() {
        assert_eq!(substitute("100%% sure", &[]).as_deref(), Some("100% sure"));
        assert_eq!(substitute("a%nb", &[]).as_deref(), Some("a\nb"));
    }

    #[test]
    fn mismatches_yield_none() {
        assert_eq!(substitute("%s and %s", &[json!("one")]), None);
        assert_eq!(substitute("age %d", &[json!("ten")]), None);
        assert_eq!(substitute("age %d", &[json!(1.5)]), None);
        assert_eq!(substitute("odd %q", &[json!(1)]), None);
        assert_eq!(substitute("dangling %", &[json!(1)]), None);
    }

    #[test]
    fn surplus_arguments_are_ignored() {
        assert_eq!(
            substitute("only %s", &[json!("one"), json!("two")]).as_deref(),
            Some("only one")
        );
    }

    #[test]
    fn arity_counts_value_directives() {
        assert_eq!(arity("%s %s is currently locked"), Some(2));
        assert_eq!(arity("100%% of %d"), Some(1));
        assert_eq!(arity("bad %x"), None);
    }
}
