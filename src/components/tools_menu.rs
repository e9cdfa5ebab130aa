use yew::prelude::*;

use crate::state::grid::GRID_SIZES;
use crate::state::{FlashState, GridOverlay};

#[derive(Properties, PartialEq, Clone)]
pub struct ToolsMenuProps {
    pub grid: GridOverlay,
    pub flash: FlashState,
    pub on_grid_size: Callback<u32>,
    pub on_toggle_grid: Callback<()>,
    pub on_flash: Callback<()>,
}

/// Right-hand menu: grid options and the flashlight.
#[function_component]
pub fn ToolsMenu(props: &ToolsMenuProps) -> Html {
    let open = use_state(|| false);
    let show_sizes = use_state(|| false);

    let toggle_cb = {
        let open = open.clone();
        Callback::from(move |_| open.set(!*open))
    };
    let grid_btn_cb = {
        let show_sizes = show_sizes.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            show_sizes.set(!*show_sizes);
        })
    };
    let grid_dbl_cb = {
        let cb = props.on_toggle_grid.clone();
        let show_sizes = show_sizes.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            show_sizes.set(false);
            cb.emit(());
        })
    };
    let flash_cb = {
        let cb = props.on_flash.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let sizes = GRID_SIZES.iter().map(|&n| {
        let cb = props.on_grid_size.clone();
        let show_sizes = show_sizes.clone();
        let onclick = Callback::from(move |_| {
            show_sizes.set(false);
            cb.emit(n);
        });
        html! { <button key={n} {onclick}>{ format!("{n}×{n}") }</button> }
    });

    let flash_style = if props.flash.is_on() {
        "background:#d29922; color:#0d1117;"
    } else {
        ""
    };

    html! {<div style="position:absolute; top:12px; right:12px; z-index:40; display:flex; flex-direction:column; align-items:flex-end; gap:6px;">
        <button id="right-nav-toggle" onclick={toggle_cb}>{"Tools"}</button>
        { if *open { html!{
            <div id="right-nav-menu" style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:160px; display:flex; flex-direction:column; gap:6px;">
                <div class="grid-controls" style="display:flex; flex-direction:column; gap:4px;">
                    <button id="toggle-grid-btn" onclick={grid_btn_cb} ondblclick={grid_dbl_cb}>{ props.grid.label() }</button>
                    { if *show_sizes { html!{
                        <div class="grid-options" style="display:grid; grid-template-columns:repeat(3, 1fr); gap:4px;">{ for sizes }</div>
                    } } else { html!{} } }
                </div>
                <button
                    id="toggle-flashlight-btn"
                    onclick={flash_cb}
                    disabled={!props.flash.is_enabled()}
                    style={flash_style}
                >{ props.flash.label() }</button>
            </div>
        } } else { html!{} } }
    </div>}
}
