//! Line grammar for `.params` declaration files.
//!
//! A relevant line looks like `NAME{v1,v2,...}[default]` or
//! `NAME [lo, hi] [default]`. Matching proceeds in three stages:
//!
//! 1. structure: name token, opening `{` or `[`, range body up to the first
//!    `}` or `]`, then a `[` introducing the default (the closing `]` of the
//!    default is optional);
//! 2. the range body is split on commas;
//! 3. every token is reduced to its last `.`-separated segment.
//!
//! When the name token itself contains brackets the longest name that still
//! leaves a well-formed remainder is used.

use crate::models::{ParameterDeclaration, RangeKind};

/// Marker for a range value that stands for "flag set".
const REMOVED: &str = "REMOVED";
/// Marker for a range value that stands for "flag unset".
const REMOVE_PREV: &str = "REMOVE_PREV";
/// Names containing this are internal and never documented.
const HIDDEN: &str = "HIDDEN";

/// Raw segments of a structurally matching line.
#[derive(Debug, PartialEq, Eq)]
struct RawDeclaration<'a> {
    name: &'a str,
    kind: RangeKind,
    range: &'a str,
    default: &'a str,
}

/// Parse one line into a declaration.
///
/// Returns `None` for lines that do not match the grammar and for
/// declarations that are filtered out (hidden, commented, or removed).
pub fn parse_declaration(line: &str) -> Option<ParameterDeclaration> {
    let raw = match_line(line)?;

    if raw.name.contains(HIDDEN) || raw.name.starts_with('#') {
        return None;
    }
    if raw.range == REMOVED {
        return None;
    }

    Some(ParameterDeclaration {
        display_name: strip_namespace(raw.name).to_string(),
        range_kind: raw.kind,
        range_values: split_range(raw.range).into_iter().map(reduce_token).collect(),
        default_value: reduce_token(raw.default),
    })
}

fn match_line(line: &str) -> Option<RawDeclaration<'_>> {
    let line = line.trim_start();
    let token_len = line.find(char::is_whitespace).unwrap_or(line.len());

    // Every char boundary inside the first token is a candidate name end.
    let mut name_ends: Vec<usize> = line[..token_len]
        .char_indices()
        .map(|(i, _)| i)
        .skip(1)
        .collect();
    name_ends.push(token_len);

    name_ends
        .into_iter()
        .rev()
        .filter(|&end| end > 0)
        .find_map(|end| match_tail(&line[..end], &line[end..]))
}

fn match_tail<'a>(name: &'a str, rest: &'a str) -> Option<RawDeclaration<'a>> {
    let rest = rest.trim_start();
    let kind = match rest.chars().next()? {
        '{' => RangeKind::Categorical,
        '[' => RangeKind::Numeric,
        _ => return None,
    };

    let body = &rest[1..];
    let close = body.find(['}', ']'])?;
    if close == 0 {
        return None;
    }
    let range = &body[..close];

    let after = body[close + 1..].trim_start().strip_prefix('[')?;
    let default_len = after.find(']').unwrap_or(after.len());
    if default_len == 0 {
        return None;
    }

    Some(RawDeclaration {
        name,
        kind,
        range,
        default: &after[..default_len],
    })
}

/// Drop a `prefix_` namespace, keeping what follows the last underscore.
fn strip_namespace(name: &str) -> &str {
    match name.rfind('_') {
        Some(i) if i > 0 => &name[i + 1..],
        _ => name,
    }
}

/// Split a range body on commas, dropping trailing empty fields.
fn split_range(range: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = range.split(',').map(str::trim).collect();
    while tokens.last().is_some_and(|t| t.is_empty()) {
        tokens.pop();
    }
    tokens
}

/// Reduce `Enum.VALUE` to `VALUE` and rewrite the special markers.
///
/// Numeric tokens such as `1.0` are left intact.
fn reduce_token(token: &str) -> String {
    let token = token.trim();
    let reduced = if token.parse::<f64>().is_ok() {
        token
    } else {
        token
            .trim_end_matches('.')
            .rsplit('.')
            .next()
            .unwrap_or_default()
    };

    match reduced {
        REMOVED => "true".to_string(),
        REMOVE_PREV => "false".to_string(),
        other => other.to_string(),
    }
}
