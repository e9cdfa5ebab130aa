use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::state::transform::{MAX_SCALE, MIN_SCALE};
use crate::util::css_num;

#[derive(Properties, PartialEq, Clone)]
pub struct OverlayControlsProps {
    pub opacity: f64,
    pub scale: f64,
    pub on_opacity: Callback<f64>,
    pub on_scale: Callback<f64>,
}

fn slider_value(e: &InputEvent) -> Option<f64> {
    let v = e.target_unchecked_into::<HtmlInputElement>().value_as_number();
    if v.is_nan() { None } else { Some(v) }
}

/// Opacity and zoom sliders. Both mirror the transform, so a pinch moves the
/// zoom slider too.
#[function_component(OverlayControls)]
pub fn overlay_controls(props: &OverlayControlsProps) -> Html {
    let opacity_cb = {
        let cb = props.on_opacity.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(v) = slider_value(&e) {
                cb.emit(v);
            }
        })
    };
    let scale_cb = {
        let cb = props.on_scale.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(v) = slider_value(&e) {
                cb.emit(v);
            }
        })
    };
    html! {<div style="position:absolute; left:12px; right:12px; bottom:96px; z-index:30; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; flex-direction:column; gap:6px; color:#e6edf3; font-size:12px;">
        <label style="display:flex; align-items:center; gap:8px;">
            <span style="width:56px;">{"Opacity"}</span>
            <input type="range" min="0" max="1" step="0.01" style="flex:1;"
                value={css_num(props.opacity)} oninput={opacity_cb} />
        </label>
        <label style="display:flex; align-items:center; gap:8px;">
            <span style="width:56px;">{"Zoom"}</span>
            <input type="range" min={css_num(MIN_SCALE)} max={css_num(MAX_SCALE)} step="0.01" style="flex:1;"
                value={css_num(props.scale)} oninput={scale_cb} />
        </label>
    </div>}
}
