use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{
    ar_view::ArView, nav_menu::NavMenu, notice::Notice, overlay_controls::OverlayControls,
    thumbnail_strip::ThumbnailStrip, tools_menu::ToolsMenu,
};
use crate::model::{OverlayAction, OverlayWidget};
use crate::platform::{files, projects, template, CameraSource};
use crate::settings::Settings;
use crate::state::FlashState;
use crate::util::{clog, cwarn};

#[function_component(App)]
pub fn app() -> Html {
    let widget = use_reducer(|| {
        let settings = Settings::load();
        let mut w = OverlayWidget::new();
        w.set_opacity(settings.opacity);
        w.grid.restore(settings.grid_size);
        w
    });
    let camera = use_mut_ref(|| None::<Rc<CameraSource>>);
    let notice = use_state(|| None::<String>);

    let notify = {
        let notice = notice.clone();
        Callback::from(move |msg: String| notice.set(Some(msg)))
    };

    // Template handed over from the template picker, then saved projects
    {
        let dispatcher = widget.dispatcher();
        let notify = notify.clone();
        use_effect_with((), move |_| {
            match template::take_selected_template() {
                Some(Ok(src)) => {
                    clog("template loaded");
                    dispatcher.dispatch(OverlayAction::AddTemplate(src));
                }
                Some(Err(e)) => {
                    cwarn(&format!("template: {e}"));
                    notify.emit("Couldn't load the selected template. Please try again.".into());
                }
                None => {}
            }
            spawn_local(async move {
                let saved = projects::list_projects().await;
                dispatcher.dispatch(OverlayAction::LoadRemote(saved));
            });
            || ()
        });
    }
    // Persist settings
    {
        let opacity = widget.user_opacity;
        let grid_size = widget.grid.size;
        use_effect_with((opacity.to_bits(), grid_size), move |_| {
            Settings { opacity, grid_size }.save();
            || ()
        });
    }

    let on_camera = {
        let camera = camera.clone();
        let dispatcher = widget.dispatcher();
        Callback::from(move |source: Option<Rc<CameraSource>>| {
            let state = match &source {
                Some(s) if s.supports_torch() => FlashState::Off,
                Some(_) => FlashState::Unknown,
                None => FlashState::Unsupported,
            };
            *camera.borrow_mut() = source;
            dispatcher.dispatch(OverlayAction::SetFlash(state));
        })
    };
    let on_flash = {
        let camera = camera.clone();
        let widget = widget.clone();
        Callback::from(move |_| {
            let current = widget.flash;
            let dispatcher = widget.dispatcher();
            let Some(source) = camera.borrow().clone() else {
                dispatcher.dispatch(OverlayAction::SetFlash(FlashState::Unsupported));
                return;
            };
            spawn_local(async move {
                let result = source.set_torch(current.wanted()).await;
                if let Err(e) = &result {
                    cwarn(&format!("flashlight: {e}"));
                }
                dispatcher.dispatch(OverlayAction::SetFlash(current.after_toggle(result)));
            });
        })
    };
    let on_files = {
        let dispatcher = widget.dispatcher();
        let notify = notify.clone();
        Callback::from(move |list: Vec<web_sys::File>| {
            let dispatcher = dispatcher.clone();
            let notify = notify.clone();
            // one at a time so images land in selection order
            spawn_local(async move {
                for file in list {
                    match files::read_image(&file).await {
                        Ok(src) => dispatcher.dispatch(OverlayAction::AddImage(src)),
                        Err(e) => {
                            cwarn(&e.to_string());
                            notify.emit(e.to_string());
                        }
                    }
                }
            });
        })
    };
    let on_save = {
        let widget = widget.clone();
        let notify = notify.clone();
        Callback::from(move |_| {
            let Some(img) = widget.displayed().map(|i| i.source.clone()) else {
                return;
            };
            let notify = notify.clone();
            spawn_local(async move {
                match projects::save_project(&img).await {
                    Some(id) => notify.emit(format!("Project saved (#{id}).")),
                    None => notify.emit("Couldn't save the project.".into()),
                }
            });
        })
    };
    let dispatch_cb = |make: fn() -> OverlayAction| {
        let dispatcher = widget.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(make()))
    };
    let on_select = {
        let dispatcher = widget.dispatcher();
        Callback::from(move |h| dispatcher.dispatch(OverlayAction::Activate(h)))
    };
    let on_opacity = {
        let dispatcher = widget.dispatcher();
        Callback::from(move |v| dispatcher.dispatch(OverlayAction::SetOpacity(v)))
    };
    let on_scale = {
        let dispatcher = widget.dispatcher();
        Callback::from(move |v| dispatcher.dispatch(OverlayAction::SetScale(v)))
    };
    let on_grid_size = {
        let dispatcher = widget.dispatcher();
        Callback::from(move |n| dispatcher.dispatch(OverlayAction::SelectGridSize(n)))
    };
    let close_notice = {
        let notice = notice.clone();
        Callback::from(move |_| notice.set(None))
    };

    html! {
        <div id="app" style="position:fixed; inset:0; font-family:system-ui, sans-serif;">
            <ArView widget={widget.clone()} on_camera={on_camera} notify={notify.clone()} />
            <NavMenu
                can_save={widget.displayed().is_some()}
                on_reset={dispatch_cb(|| OverlayAction::Hide)}
                on_reset_all={dispatch_cb(|| OverlayAction::ClearAll)}
                on_save={on_save}
            />
            <ToolsMenu
                grid={widget.grid}
                flash={widget.flash}
                on_grid_size={on_grid_size}
                on_toggle_grid={dispatch_cb(|| OverlayAction::ToggleGrid)}
                on_flash={on_flash}
            />
            { if widget.displayed().is_some() { html!{
                <OverlayControls
                    opacity={widget.current().opacity}
                    scale={widget.current().scale}
                    on_opacity={on_opacity}
                    on_scale={on_scale}
                />
            } } else { html!{} } }
            <ThumbnailStrip
                images={widget.gallery.images().to_vec()}
                on_select={on_select}
                on_files={on_files}
            />
            <Notice message={(*notice).clone()} on_close={close_notice} />
        </div>
    }
}
