use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NavMenuProps {
    pub can_save: bool,
    pub on_reset: Callback<()>,
    pub on_reset_all: Callback<()>,
    pub on_save: Callback<()>,
}

#[function_component]
pub fn NavMenu(props: &NavMenuProps) -> Html {
    let open = use_state(|| false);
    let toggle_cb = {
        let open = open.clone();
        Callback::from(move |_| open.set(!*open))
    };
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reset_all_cb = {
        let cb = props.on_reset_all.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let save_cb = {
        let cb = props.on_save.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; top:12px; left:12px; z-index:40; display:flex; flex-direction:column; gap:6px;">
        <button id="nav-toggle" onclick={toggle_cb}>{ if *open { "✕" } else { "☰" } }</button>
        { if *open { html!{
            <div id="nav-menu" style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:160px; display:flex; flex-direction:column; gap:6px;">
                <button id="reset-btn" onclick={reset_cb}>{"Reset"}</button>
                <button id="reset-all-btn" onclick={reset_all_cb}>{"Reset All"}</button>
                <button onclick={save_cb} disabled={!props.can_save}>{"Save Project"}</button>
            </div>
        } } else { html!{} } }
    </div>}
}
