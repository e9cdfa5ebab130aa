use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NoticeProps {
    pub message: Option<String>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn Notice(props: &NoticeProps) -> Html {
    let Some(msg) = props.message.clone() else {
        return html! {};
    };
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); z-index:60; background:rgba(0,0,0,0.87); border:2px solid #30363d; padding:18px 24px; border-radius:12px; max-width:420px; width:85%; text-align:center; color:#e6edf3;">
            <p style="margin:0 0 12px 0;">{ msg }</p>
            <button onclick={close_cb}>{"OK"}</button>
        </div>
    }
}
