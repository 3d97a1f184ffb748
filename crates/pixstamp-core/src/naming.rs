//! Download filename derivation.

/// Suffix appended to the base name of every converted download.
pub const DOWNLOAD_SUFFIX: &str = "_60x60.png";

/// Fallback name for sources without a usable file name (clipboard pastes,
/// empty names).
pub const FALLBACK_DOWNLOAD_NAME: &str = "converted-image.png";

/// Derive the download filename for a converted image.
///
/// The base name is everything before the **first** `.` in the original
/// name, suffixed with `_60x60.png`:
///
/// * `photo.jpg` -> `photo_60x60.png`
/// * `a.b.jpg` -> `a_60x60.png`
///
/// Sources with no name, an empty name, or a name with nothing before the
/// first `.` (dotfiles) fall back to `converted-image.png`.
pub fn download_name(original: Option<&str>) -> String {
    let base = original
        .map(|name| name.split('.').next().unwrap_or(""))
        .unwrap_or("");

    if base.is_empty() {
        return FALLBACK_DOWNLOAD_NAME.to_string();
    }

    format!("{base}{DOWNLOAD_SUFFIX}")
}
