use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::state::{GalleryImage, ImageHandle};

#[derive(Properties, PartialEq, Clone)]
pub struct ThumbnailStripProps {
    pub images: Vec<GalleryImage>,
    pub on_select: Callback<ImageHandle>,
    pub on_files: Callback<Vec<web_sys::File>>,
}

#[function_component(ThumbnailStrip)]
pub fn thumbnail_strip(props: &ThumbnailStripProps) -> Html {
    let input_ref = use_node_ref();

    let open_picker = {
        let input_ref = input_ref.clone();
        Callback::from(move |_| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };
    let on_change = {
        let cb = props.on_files.clone();
        Callback::from(move |e: Event| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            if let Some(list) = input.files() {
                let files = crate::platform::files::file_list_to_vec(&list);
                if !files.is_empty() {
                    cb.emit(files);
                }
            }
            // allow picking the same file again
            input.set_value("");
        })
    };

    let thumbs = props.images.iter().map(|img| {
        let id = img.id;
        let cb = props.on_select.clone();
        let onclick = Callback::from(move |_| cb.emit(id));
        let border = if img.is_active { "#58a6ff" } else { "#30363d" };
        html! {
            <img
                key={id.0}
                class={classes!("thumbnail", img.is_active.then_some("active"))}
                src={img.source.as_str().to_string()}
                {onclick}
                style={format!("width:56px; height:56px; object-fit:cover; border-radius:6px; border:2px solid {border}; flex:0 0 auto; cursor:pointer;")}
            />
        }
    });

    html! {<div id="image-thumbnails" style="position:absolute; left:0; right:0; bottom:0; z-index:30; display:flex; gap:8px; padding:10px 12px; overflow-x:auto; background:rgba(13,17,23,0.85); border-top:1px solid #30363d;">
        <input ref={input_ref} type="file" accept="image/*" multiple=true style="display:none;" onchange={on_change} />
        <button id="add-image-btn" onclick={open_picker} style="width:56px; height:56px; flex:0 0 auto; font-size:24px;">{"+"}</button>
        { for thumbs }
    </div>}
}
