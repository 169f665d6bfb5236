//! Building `SelectedImage` values from browser files, plus preview URLs.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

use decoder::SelectedImage;

/// Build a selection from the metadata a browser `File` exposes.
///
/// Browsers report size as a float and an unknown type as `""`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn selected_image<F>(handle: F, name: String, size: f64, mime: &str) -> SelectedImage<F> {
    let size = if size.is_finite() && size > 0.0 { size as u64 } else { 0 };
    let mime = if mime.is_empty() { None } else { Some(mime.to_owned()) };
    SelectedImage { name, size, mime, handle }
}

#[cfg(feature = "hydrate")]
pub fn from_file(file: web_sys::File) -> SelectedImage<web_sys::File> {
    let name = file.name();
    let size = file.size();
    let mime = file.type_();
    selected_image(file, name, size, &mime)
}

/// Create a `blob:` URL for previewing the file. Must be revoked when replaced.
#[cfg(feature = "hydrate")]
pub fn create_preview_url(file: &web_sys::File) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(file).ok()
}

#[cfg(feature = "hydrate")]
pub fn revoke_preview_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}
