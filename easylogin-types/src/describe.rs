//! Single-line diagnostic rendering for logs and error messages.
//!
//! Output is meant for humans only and is never parsed back.

use crate::{AttributeBag, DirectoryValue};
use chrono::SecondsFormat;
use std::fmt::{self, Write};

/// Bytes shown before a binary value is elided.
const MAX_BYTES_SHOWN: usize = 16;

/// Types with a deterministic one-line diagnostic form.
pub trait Describe {
    /// Appends the description to `out`.
    fn write_description(&self, out: &mut String);

    /// Returns the description as a new string.
    fn describe(&self) -> String {
        let mut out = String::new();
        self.write_description(&mut out);
        out
    }
}

/// Renders a value for a log line.
pub fn describe_object<D: Describe + ?Sized>(value: &D) -> String {
    value.describe()
}

/// Renders anything else through its `Debug` form, folded onto one line.
pub fn describe_debug<T: fmt::Debug + ?Sized>(value: &T) -> String {
    let raw = format!("{value:?}");
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl Describe for DirectoryValue {
    fn write_description(&self, out: &mut String) {
        match self {
            // Debug quoting escapes control characters, keeping output on one line.
            Self::String(s) => {
                let _ = write!(out, "{s:?}");
            }
            Self::Bytes(bytes) => {
                let shown = &bytes[..bytes.len().min(MAX_BYTES_SHOWN)];
                let _ = write!(out, "<{} bytes {}", bytes.len(), hex::encode(shown));
                if bytes.len() > MAX_BYTES_SHOWN {
                    out.push_str("...");
                }
                out.push('>');
            }
            Self::Date(date) => {
                out.push_str(&date.to_rfc3339_opts(SecondsFormat::Secs, true));
            }
            Self::List(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    item.write_description(out);
                }
                out.push(']');
            }
            Self::Bag(map) => write_map(map.iter(), out),
        }
    }
}

impl Describe for AttributeBag {
    fn write_description(&self, out: &mut String) {
        write_map(self.iter(), out);
    }
}

impl<T: Describe> Describe for [T] {
    fn write_description(&self, out: &mut String) {
        out.push('[');
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            item.write_description(out);
        }
        out.push(']');
    }
}

impl<T: Describe> Describe for Vec<T> {
    fn write_description(&self, out: &mut String) {
        self.as_slice().write_description(out);
    }
}

impl<T: Describe> Describe for Option<T> {
    fn write_description(&self, out: &mut String) {
        match self {
            Some(inner) => inner.write_description(out),
            None => out.push_str("(none)"),
        }
    }
}

/// Appends `text` with control characters escaped, so names taken from
/// records cannot break the line.
pub fn write_escaped(out: &mut String, text: &str) {
    out.extend(text.escape_debug());
}

fn write_map<'a>(entries: impl Iterator<Item = (&'a String, &'a DirectoryValue)>, out: &mut String) {
    out.push('{');
    for (i, (key, value)) in entries.enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_escaped(out, key);
        out.push_str(": ");
        value.write_description(out);
    }
    out.push('}');
}
