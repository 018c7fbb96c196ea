//! Last-modified timestamp used for cache-busting image URLs.

use tracing::debug;

use crate::properties::ValueMap;

pub const JCR_LAST_MODIFIED: &str = "jcr:lastModified";
pub const JCR_CREATED: &str = "jcr:created";

/// Epoch milliseconds of the last modification, falling back to creation.
///
/// Returns 0 when neither date is usable. A property that is present but
/// does not read as a date is skipped.
pub fn resolve_last_modified(properties: &ValueMap) -> i64 {
    [JCR_LAST_MODIFIED, JCR_CREATED]
        .into_iter()
        .filter(|key| properties.contains_key(key))
        .find_map(|key| {
            let date = properties.get_date(key);
            if date.is_none() {
                debug!(key, value = ?properties.get(key), "property is not a date");
            }
            date.map(|d| d.timestamp_millis())
        })
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: i64 = 1_700_000_000_000;

    #[test]
    fn prefers_last_modified() {
        let props = ValueMap::new()
            .with(JCR_LAST_MODIFIED, T)
            .with(JCR_CREATED, 1_600_000_000_000i64);
        assert_eq!(resolve_last_modified(&props), T);
    }

    #[test]
    fn falls_back_to_created() {
        let props = ValueMap::new().with(JCR_CREATED, "2023-11-14T22:13:20Z");
        assert_eq!(resolve_last_modified(&props), T);
    }

    #[test]
    fn zero_when_both_absent() {
        assert_eq!(resolve_last_modified(&ValueMap::new()), 0);
    }

    #[test]
    fn unreadable_last_modified_falls_back_to_created() {
        let props = ValueMap::new()
            .with(JCR_LAST_MODIFIED, "yesterday")
            .with(JCR_CREATED, T);
        assert_eq!(resolve_last_modified(&props), T);
    }

    #[test]
    fn unreadable_dates_are_zero() {
        let props = ValueMap::new().with(JCR_CREATED, true);
        assert_eq!(resolve_last_modified(&props), 0);
    }
}
