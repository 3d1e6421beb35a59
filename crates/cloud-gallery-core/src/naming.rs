//! Display names for stored object keys.

/// Shown when a key is missing or yields nothing printable.
pub const FALLBACK_DISPLAY_NAME: &str = "file";

/// Derive a human-readable name from a storage key.
///
/// Keeps the segment after the last `/` and strips everything up to and
/// including the first `-` in it, so `uploads/12345-report.pdf` becomes
/// `report.pdf`. Segments without a `-` are returned unchanged. Total for
/// every input: absent, blank, or fully-stripped keys map to
/// [`FALLBACK_DISPLAY_NAME`].
pub fn display_name(key: Option<&str>) -> String {
    let Some(key) = key.filter(|key| !key.trim().is_empty()) else {
        return FALLBACK_DISPLAY_NAME.to_string();
    };

    let segment = key.rsplit('/').next().unwrap_or(key);
    let name = segment
        .split_once('-')
        .map_or(segment, |(_prefix, rest)| rest);

    if name.is_empty() {
        FALLBACK_DISPLAY_NAME.to_string()
    } else {
        name.to_string()
    }
}
