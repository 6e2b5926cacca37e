//! Line formatting: message templates, loosely-typed arguments, styling
//!
//! [`format_line`] is a pure function from severity + template + arguments
//! to a fully styled, newline-terminated line. It never fails: absent
//! arguments leave the template verbatim, a `{}` placeholder is
//! interpolated, and anything else is appended space-separated.

use super::severity::Severity;
use super::style::config_for;
use chrono::Local;
use std::fmt;

/// Placeholder marker recognized in message templates.
const PLACEHOLDER: &str = "{}";

/// Timestamp layout for rendered lines (local time).
const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// A loosely-typed message argument.
///
/// Carries the values callers pass alongside a template. Anything not
/// covered by a `From` impl can be wrapped with [`LogValue::display`].
#[derive(Debug, Clone, PartialEq)]
pub enum LogValue {
    String(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Null,
}

impl LogValue {
    /// Capture any `Display` value (errors, paths, durations, ...).
    pub fn display(value: impl fmt::Display) -> Self {
        LogValue::String(value.to_string())
    }
}

impl fmt::Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogValue::String(s) => write!(f, "{}", s),
            LogValue::Int(i) => write!(f, "{}", i),
            LogValue::Uint(u) => write!(f, "{}", u),
            LogValue::Float(fl) => write!(f, "{}", fl),
            LogValue::Bool(b) => write!(f, "{}", b),
            LogValue::Null => write!(f, "null"),
        }
    }
}

impl From<String> for LogValue {
    fn from(s: String) -> Self {
        LogValue::String(s)
    }
}

impl From<&str> for LogValue {
    fn from(s: &str) -> Self {
        LogValue::String(s.to_string())
    }
}

impl From<i64> for LogValue {
    fn from(i: i64) -> Self {
        LogValue::Int(i)
    }
}

impl From<i32> for LogValue {
    fn from(i: i32) -> Self {
        LogValue::Int(i64::from(i))
    }
}

impl From<u64> for LogValue {
    fn from(u: u64) -> Self {
        LogValue::Uint(u)
    }
}

impl From<u32> for LogValue {
    fn from(u: u32) -> Self {
        LogValue::Uint(u64::from(u))
    }
}

impl From<usize> for LogValue {
    fn from(u: usize) -> Self {
        LogValue::Uint(u as u64)
    }
}

impl From<f64> for LogValue {
    fn from(f: f64) -> Self {
        LogValue::Float(f)
    }
}

impl From<f32> for LogValue {
    fn from(f: f32) -> Self {
        LogValue::Float(f64::from(f))
    }
}

impl From<bool> for LogValue {
    fn from(b: bool) -> Self {
        LogValue::Bool(b)
    }
}

/// Sanitize a rendered message to keep each entry a single line.
///
/// Replaces newlines, carriage returns, and tabs with escape sequences so
/// callers cannot inject fake log entries.
fn sanitize_message(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Render the message portion from a template and its arguments.
///
/// Three branches:
/// 1. no arguments: the template verbatim;
/// 2. template contains `{}`: placeholders replaced in order, surplus
///    placeholders left literal, surplus arguments appended space-separated;
/// 3. otherwise: template and arguments concatenated space-separated.
pub fn render_message(template: &str, args: &[LogValue]) -> String {
    if args.is_empty() {
        return template.to_string();
    }
    if template.contains(PLACEHOLDER) {
        return interpolate(template, args);
    }
    let mut out = String::from(template);
    for arg in args {
        out.push(' ');
        out.push_str(&arg.to_string());
    }
    out
}

fn interpolate(template: &str, args: &[LogValue]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut parts = template.split(PLACEHOLDER);
    let mut values = args.iter();

    if let Some(first) = parts.next() {
        out.push_str(first);
    }
    for part in parts {
        match values.next() {
            Some(value) => out.push_str(&value.to_string()),
            None => out.push_str(PLACEHOLDER),
        }
        out.push_str(part);
    }
    for surplus in values {
        out.push(' ');
        out.push_str(&surplus.to_string());
    }
    out
}

/// Build the fully styled, newline-terminated line for one log entry.
///
/// Layout follows the per-severity preset: styled `timestamp `, styled
/// padded label, styled ` message ` segment, each reset-terminated, one
/// trailing newline.
pub fn format_line(severity: Severity, template: &str, args: &[LogValue]) -> String {
    let config = config_for(severity);
    let timestamp = format!("{} ", Local::now().format(TIMESTAMP_FORMAT));
    let message = sanitize_message(&render_message(template, args));

    format!(
        "{}{}{}\n",
        config.timestamp.apply(&timestamp),
        config.level.apply(config.label),
        config.message.apply(&format!(" {} ", message)),
    )
}
