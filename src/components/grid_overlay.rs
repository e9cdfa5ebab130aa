use yew::prelude::*;

use crate::state::GridOverlay;
use crate::util::css_num;

#[derive(Properties, PartialEq, Clone)]
pub struct GridOverlayProps {
    pub grid: GridOverlay,
}

#[function_component(GridOverlayView)]
pub fn grid_overlay_view(props: &GridOverlayProps) -> Html {
    if !props.grid.visible {
        return html! {};
    }
    let cell = css_num(props.grid.cell_percent());
    let style = format!(
        "position:absolute; inset:0; pointer-events:none; z-index:20; \
         background-image:linear-gradient(to right, rgba(255,255,255,0.45) 1px, transparent 1px), \
         linear-gradient(to bottom, rgba(255,255,255,0.45) 1px, transparent 1px); \
         background-size:{cell}% {cell}%;"
    );
    html! { <div class="grid-overlay" style={style}></div> }
}
