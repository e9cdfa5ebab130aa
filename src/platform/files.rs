// Image files picked by the user, read into data URLs
use js_sys::{Function, Promise};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileList, FileReader};

use crate::error::OverlayError;
use crate::state::ImageSource;

pub fn file_list_to_vec(files: &FileList) -> Vec<File> {
    let mut out = Vec::new();
    for i in 0..files.length() {
        if let Some(f) = files.get(i) {
            out.push(f);
        }
    }
    out
}

pub async fn read_image(file: &File) -> Result<ImageSource, OverlayError> {
    let name = file.name();
    let reader = FileReader::new().map_err(OverlayError::from_js)?;
    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        let done = reader.clone();
        let onload = Closure::once_into_js(move |_: JsValue| {
            let result = done.result().unwrap_or(JsValue::NULL);
            let _ = resolve.call1(&JsValue::NULL, &result);
        });
        let onerror = Closure::once_into_js(move |_: JsValue| {
            let _ = reject.call0(&JsValue::NULL);
        });
        reader.set_onload(Some(onload.unchecked_ref()));
        reader.set_onerror(Some(onerror.unchecked_ref()));
    });
    reader
        .read_as_data_url(file)
        .map_err(|_| OverlayError::DecodeFailed(name.clone()))?;
    let data = JsFuture::from(promise)
        .await
        .map_err(|_| OverlayError::DecodeFailed(name.clone()))?;
    let url = data
        .as_string()
        .ok_or_else(|| OverlayError::DecodeFailed(name.clone()))?;
    ImageSource::parse(&url).map_err(|_| OverlayError::DecodeFailed(name))
}
