//! Line encoder for stdout
//!
//! Records are written as one JSON object per line in the spaced shape
//! `{"key": value, "key": value}`. Non-ASCII characters are written as
//! `\uXXXX` escapes, so the line is pure ASCII.

use crate::error::Result;
use serde::Serialize;
use serde_json::ser::Formatter;
use std::io::{self, Write};

/// Compact JSON with a space after each `:` and `,` and ASCII-only strings
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }

        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                // Astral characters become a surrogate pair
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// Serialize `value` to a single line string, without the trailing newline
pub fn to_line<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut ser)?;
    // Output is ASCII
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write `value` as one line to `writer` and flush it
pub fn write_line<W: Write, T: Serialize>(writer: &mut W, value: &T) -> Result<()> {
    let mut line = to_line(value)?;
    line.push('\n');

    writer.write_all(line.as_bytes())?;
    writer.flush()?;
    Ok(())
}
