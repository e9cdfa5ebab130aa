use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, HtmlVideoElement, TouchEvent};
use yew::prelude::*;

use crate::model::{OverlayAction, OverlayWidget};
use crate::platform::CameraSource;
use crate::state::Point;
use crate::util::{cwarn, MountFlag};

use super::grid_overlay::GridOverlayView;

#[derive(Properties, PartialEq, Clone)]
pub struct ArViewProps {
    pub widget: UseReducerHandle<OverlayWidget>,
    pub on_camera: Callback<Option<Rc<CameraSource>>>,
    pub notify: Callback<String>,
}

fn touch_points(e: &TouchEvent) -> Vec<Point> {
    let list = e.touches();
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(t) = list.item(i) {
            out.push(Point::new(t.client_x() as f64, t.client_y() as f64));
        }
    }
    out
}

#[function_component(ArView)]
pub fn ar_view(props: &ArViewProps) -> Html {
    let video_ref = use_node_ref();
    let overlay_ref = use_node_ref();
    let camera = use_mut_ref(|| None::<Rc<CameraSource>>);

    // Camera: start once, stop tracks on unmount
    {
        let video_ref = video_ref.clone();
        let camera = camera.clone();
        let on_camera = props.on_camera.clone();
        let notify = props.notify.clone();
        use_effect_with((), move |_| {
            let camera_task = camera.clone();
            let mounted = MountFlag::new();
            let mounted_task = mounted.clone();
            spawn_local(async move {
                let acquired = CameraSource::acquire().await;
                // unmounted while the permission prompt was up
                let Some(acquired) = mounted_task.claim(acquired, |r| {
                    if let Ok(source) = r {
                        source.stop();
                    }
                }) else {
                    return;
                };
                match acquired {
                    Ok(source) => {
                        if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                            video.set_src_object(Some(source.stream()));
                        }
                        let source = Rc::new(source);
                        *camera_task.borrow_mut() = Some(source.clone());
                        on_camera.emit(Some(source));
                    }
                    Err(e) => {
                        cwarn(&format!("camera: {e}"));
                        on_camera.emit(None);
                        notify.emit(format!("Camera error: {e}"));
                    }
                }
            });
            move || {
                mounted.unmount();
                if let Some(source) = camera.borrow_mut().take() {
                    source.stop();
                }
            }
        });
    }

    // Touch gestures on the overlay image
    {
        let overlay_ref = overlay_ref.clone();
        let dispatcher = props.widget.dispatcher();
        use_effect_with((), move |_| {
            let overlay = overlay_ref.cast::<HtmlElement>();
            let touch_start_cb = {
                let dispatcher = dispatcher.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    dispatcher.dispatch(OverlayAction::TouchStart(touch_points(&e)));
                }) as Box<dyn FnMut(_)>)
            };
            let touch_move_cb = {
                let dispatcher = dispatcher.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    e.prevent_default();
                    dispatcher.dispatch(OverlayAction::TouchMove(touch_points(&e)));
                }) as Box<dyn FnMut(_)>)
            };
            let touch_end_cb = {
                let dispatcher = dispatcher.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    dispatcher.dispatch(OverlayAction::TouchEnd(touch_points(&e)));
                }) as Box<dyn FnMut(_)>)
            };
            if let Some(el) = &overlay {
                let _ = el.add_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                );
                let _ = el.add_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                );
                let _ = el
                    .add_event_listener_with_callback("touchend", touch_end_cb.as_ref().unchecked_ref());
                let _ = el.add_event_listener_with_callback(
                    "touchcancel",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
            }
            move || {
                if let Some(el) = &overlay {
                    let _ = el.remove_event_listener_with_callback(
                        "touchstart",
                        touch_start_cb.as_ref().unchecked_ref(),
                    );
                    let _ = el.remove_event_listener_with_callback(
                        "touchmove",
                        touch_move_cb.as_ref().unchecked_ref(),
                    );
                    let _ = el.remove_event_listener_with_callback(
                        "touchend",
                        touch_end_cb.as_ref().unchecked_ref(),
                    );
                    let _ = el.remove_event_listener_with_callback(
                        "touchcancel",
                        touch_end_cb.as_ref().unchecked_ref(),
                    );
                }
                let _keep_alive = (&touch_start_cb, &touch_move_cb, &touch_end_cb);
            }
        });
    }

    let widget = &props.widget;
    let (src, overlay_style) = match widget.displayed() {
        Some(img) => (
            img.source.as_str().to_string(),
            format!(
                "position:absolute; max-width:80%; max-height:80%; z-index:10; touch-action:none; {}",
                widget.current().style()
            ),
        ),
        None => (String::new(), "display:none;".to_string()),
    };

    html! {
        <div id="ar-view" style="position:fixed; inset:0; overflow:hidden; background:#000;">
            <video
                ref={video_ref}
                autoplay=true
                muted=true
                playsinline=true
                style="position:absolute; inset:0; width:100%; height:100%; object-fit:cover;"
            />
            <img ref={overlay_ref} alt="overlay" src={src} style={overlay_style} />
            <GridOverlayView grid={widget.grid} />
        </div>
    }
}
