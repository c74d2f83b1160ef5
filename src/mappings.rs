use indexmap::IndexMap;
use tracing::debug;
use crate::table::{parse_reference_table, AnnotationPolicy, BUILTIN_TABLE};

/// Extension keys mapped to their sorted, deduplicated media types, in first-seen key order.
pub type MediaTypeMappings = IndexMap<String, Vec<String>>;

pub fn load_builtin_media_types() -> MediaTypeMappings {
    load_media_types_from_table(BUILTIN_TABLE, AnnotationPolicy::Keep)
}

pub fn load_media_types_from_table(content: &str, policy: AnnotationPolicy) -> MediaTypeMappings {
    let rows = parse_reference_table(content);
    let mut mappings = MediaTypeMappings::new();

    for row in &rows {
        let media_types: Vec<String> = row.media_types.iter()
            .filter_map(|mt| policy.apply(mt))
            .map(str::to_owned)
            .collect();

        for ext in &row.extensions {
            // re-inserting keeps the key's original position
            if mappings.insert(ext.to_string(), media_types.clone()).is_some() {
                debug!("Extension '{ext}' redefined, replacing its media types");
            }
        }
    }

    for media_types in mappings.values_mut() {
        media_types.sort_unstable();
        media_types.dedup();
    }

    debug!("Loaded {} media type mappings from {} rows", mappings.len(), rows.len());

    mappings
}
