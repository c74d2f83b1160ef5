use std::io;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use crate::defines::*;
use crate::error::{Error, Result};
use crate::mappings::MediaTypeMappings;

/// Text wrapped around the serialized mappings.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeclarationStyle {
    prefix: String,
    suffix: String,
}

impl Default for DeclarationStyle {
    fn default() -> Self {
        Self::default_export()
    }
}

impl DeclarationStyle {
    /// `export default = { ... } as const;`
    pub fn default_export() -> Self {
        Self {
            prefix: DEFAULT_EXPORT_PREFIX.to_owned(),
            suffix: CONST_ASSERTION_SUFFIX.to_owned(),
        }
    }

    /// `export const NAME = { ... } as const;`
    pub fn named_export(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_identifier(&name)?;
        Ok(Self {
            prefix: format!("{NAMED_EXPORT_KEYWORDS} {name} = "),
            suffix: CONST_ASSERTION_SUFFIX.to_owned(),
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

pub fn render_declaration(
    mappings: &MediaTypeMappings,
    style: &DeclarationStyle,
) -> Result<String> {
    let mut buf = Vec::with_capacity(style.prefix.len() + style.suffix.len() + mappings.len() * 48);
    buf.extend_from_slice(style.prefix.as_bytes());

    let mut ser = serde_json::Serializer::with_formatter(&mut buf, AsciiPrettyFormatter::new());
    mappings.serialize(&mut ser)?;

    buf.extend_from_slice(style.suffix.as_bytes());
    Ok(String::from_utf8(buf)?)
}

fn validate_identifier(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid_head = chars.next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$');
    let valid_tail = chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');

    if valid_head && valid_tail {
        Ok(())
    } else {
        Err(Error::InvalidIdentifier(name.to_owned()))
    }
}

/// Two-space pretty printer that escapes everything outside printable ASCII as `\uXXXX`.
struct AsciiPrettyFormatter {
    inner: PrettyFormatter<'static>,
}

impl AsciiPrettyFormatter {
    fn new() -> Self {
        Self { inner: PrettyFormatter::with_indent(INDENT) }
    }
}

impl Formatter for AsciiPrettyFormatter {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if c.is_ascii() && c != '\x7f' {
                continue;
            }

            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}
