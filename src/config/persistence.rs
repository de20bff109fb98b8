//! Output file naming

/// Base filename for generated option trees (without extension)
pub const OPTIONS_FILENAME_WITHOUT_EXT: &str = "options";

/// Version of the emitted document shape.
/// Bump when a field of the serialized tree changes meaning.
pub const OPTIONS_VERSION: u32 = 1;

/// Filename used when `--output` points at a directory.
/// Example: "options_v1.json"
pub fn options_filename() -> String {
    format!("{}_v{}.json", OPTIONS_FILENAME_WITHOUT_EXT, OPTIONS_VERSION)
}
