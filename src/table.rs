use tracing::warn;
use crate::defines::*;

/// Extension-to-media-type table as published in MDN's "Common media types" reference,
/// one tab-delimited row per entry: extensions, description, media types.
pub const BUILTIN_TABLE: &str = include_str!("../res/mdn_media_types.tsv");

/// What to do with free-text commentary embedded in the media type column.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum AnnotationPolicy {
    /// Keep every comma-separated token exactly as written.
    #[default]
    Keep,
    /// Reduce each token to its leading `type/subtype` word and drop tokens that have none.
    Strip,
}

/// A single row of the reference table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReferenceRow<'a> {
    pub extensions: Vec<&'a str>,
    pub media_types: Vec<&'a str>,
}

pub fn parse_reference_table(content: &str) -> Vec<ReferenceRow<'_>> {
    content.trim()
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }

            let row = parse_reference_row(line);
            if row.is_none() {
                warn!("Ignoring malformed line in reference table:\n    {line}");
            }
            row
        })
        .collect()
}

pub fn parse_reference_row(line: &str) -> Option<ReferenceRow<'_>> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() < MIN_ROW_FIELDS {
        return None;
    }

    // the description sits in between and may itself be split by stray tabs
    let extensions = fields[0].split(LIST_SEPARATOR).map(normalize_extension).collect();
    let media_types = fields[fields.len() - 1].split(LIST_SEPARATOR).map(str::trim).collect();

    Some(ReferenceRow { extensions, media_types })
}

pub fn normalize_extension(token: &str) -> &str {
    let token = token.trim();
    token.strip_prefix(EXTENSION_PREFIX).unwrap_or(token)
}

impl AnnotationPolicy {
    pub fn apply<'a>(&self, media_type: &'a str) -> Option<&'a str> {
        match self {
            AnnotationPolicy::Keep => Some(media_type),
            AnnotationPolicy::Strip => {
                let word = media_type.split_whitespace().next()?
                    .trim_end_matches(ANNOTATION_TRAILERS);
                if word.contains(MEDIA_TYPE_SUBTYPE_SEPARATOR) {
                    Some(word)
                } else {
                    None
                }
            }
        }
    }
}
