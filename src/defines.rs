// reference table layout
pub(crate) const FIELD_SEPARATOR: char = '\t';
pub(crate) const LIST_SEPARATOR: char = ',';
pub(crate) const EXTENSION_PREFIX: char = '.';

// rows with fewer fields than this are skipped
pub(crate) const MIN_ROW_FIELDS: usize = 3;

// annotation stripping
pub(crate) const MEDIA_TYPE_SUBTYPE_SEPARATOR: char = '/';
pub(crate) const ANNOTATION_TRAILERS: &[char] = &['.', ';'];

// declaration output
pub const DEFAULT_EXPORT_PREFIX: &str = "export default = ";
pub const CONST_ASSERTION_SUFFIX: &str = " as const;";
pub(crate) const NAMED_EXPORT_KEYWORDS: &str = "export const";
pub(crate) const INDENT: &[u8] = b"  ";
