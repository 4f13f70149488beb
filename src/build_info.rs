//! Commit hash and build date, embedded by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Short label for the info panel, e.g. `2026-10-19 (a1b2c3d)`.
pub fn build_label() -> String {
    format!("{} ({})", BUILD_DATE, BUILD_COMMIT)
}
