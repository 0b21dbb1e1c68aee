//! Lecture des fichiers choisis dans le navigateur.

use snareshare::SelectedFile;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

/// Read a picked `File` into memory.
///
/// The browser's reported type is kept as-is; an empty type falls back
/// to `application/octet-stream` at upload time.
pub async fn read_file(file: &File) -> Result<SelectedFile, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    Ok(SelectedFile::new(file.name(), Some(file.type_()), bytes))
}
