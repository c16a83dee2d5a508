//! Display names for the known specification sources.

/// Source-label prefix to human-readable title.
static SPEC_TITLES: &[(&str, &str)] = &[
    ("ts_124008", "TS 24.008 - 2G/3G NAS (MM/GMM/SM/CC)"),
    ("ts_124301", "TS 24.301 - LTE NAS (EMM/ESM)"),
    ("ts_124501", "TS 24.501 - 5G NAS (5GMM/5GSM)"),
    ("ts_136300", "TS 36.300 - E-UTRA Overall Description"),
];

/// Map a corpus source label to its display title.
///
/// Labels may carry a version suffix (e.g. `ts_124301_v17.8`); the part
/// before `_v` selects the title. Unmapped labels are shown as-is.
pub fn display_name(label: &str) -> &str {
    let key = label.split("_v").next().unwrap_or(label);
    SPEC_TITLES
        .iter()
        .find(|(prefix, _)| *prefix == key)
        .map_or(label, |(_, title)| title)
}
