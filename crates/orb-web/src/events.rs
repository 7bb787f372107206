use crate::dom;
use orb_core::{ndc_from_css, OrbitState, SkillSphere};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Everything the pointer handlers need to share with the frame loop.
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<SkillSphere>>,
    pub orbit: Rc<RefCell<OrbitState>>,
    pub on_hover: Rc<RefCell<Option<js_sys::Function>>>,
}

/// Owned pointer listeners. They stay attached for the lifetime of this
/// value; `detach` unhooks them so the canvas can be dropped without
/// leaving callbacks behind.
pub struct PointerClosures {
    canvas: web::HtmlCanvasElement,
    pointer_move: Closure<dyn FnMut(web::PointerEvent)>,
    pointer_down: Closure<dyn FnMut(web::PointerEvent)>,
    pointer_up: Closure<dyn FnMut(web::PointerEvent)>,
    pointer_leave: Closure<dyn FnMut(web::PointerEvent)>,
}

impl PointerClosures {
    pub fn detach(&self) {
        for (name, closure) in [
            ("pointermove", &self.pointer_move),
            ("pointerdown", &self.pointer_down),
            ("pointerup", &self.pointer_up),
            ("pointerleave", &self.pointer_leave),
        ] {
            let _ = self
                .canvas
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
    }
}

/// Push a new hover index into the scene; on change, update the page cursor
/// and notify the host callback with the label (or `null`).
pub fn apply_hover(
    scene: &Rc<RefCell<SkillSphere>>,
    on_hover: &Rc<RefCell<Option<js_sys::Function>>>,
    index: Option<usize>,
) {
    let changed = scene.borrow_mut().set_hovered(index);
    if !changed {
        return;
    }
    let label = scene.borrow().hovered_label().map(|s| s.to_string());
    dom::set_page_cursor(if label.is_some() { "pointer" } else { "auto" });
    publish_hover(on_hover, label.as_deref());
    log::info!("[hover] {}", label.as_deref().unwrap_or("none"));
}

pub fn publish_hover(
    on_hover: &Rc<RefCell<Option<js_sys::Function>>>,
    label: Option<&str>,
) {
    // Clone the function out first; the callback may re-enter the widget.
    let cb = on_hover.borrow().clone();
    if let Some(cb) = cb {
        let value = match label {
            Some(s) => JsValue::from_str(s),
            None => JsValue::NULL,
        };
        if let Err(e) = cb.call1(&JsValue::NULL, &value) {
            log::warn!("[hover] callback error: {:?}", e);
        }
    }
}

/// Attach the pointer handlers to the widget canvas.
///
/// All four listeners live on the canvas itself; pointer capture on
/// `pointerdown` keeps drag events flowing when the pointer leaves the
/// element mid-gesture.
pub fn wire_pointer_handlers(w: PointerWiring) -> PointerClosures {
    // pointermove: feed the drag if one is active, then re-pick the hover
    let pointer_move = {
        let scene_m = w.scene.clone();
        let orbit_m = w.orbit.clone();
        let on_hover_m = w.on_hover.clone();
        let canvas_m = w.canvas.clone();
        Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let rect = canvas_m.get_bounding_client_rect();
            let x = ev.client_x() as f32 - rect.left() as f32;
            let y = ev.client_y() as f32 - rect.top() as f32;
            let w_css = rect.width() as f32;
            let h_css = rect.height() as f32;

            if orbit_m.borrow().is_dragging() {
                orbit_m.borrow_mut().drag_to(x, y, h_css);
            }

            let ndc = match ndc_from_css(x, y, w_css, h_css) {
                Some(ndc) => ndc,
                None => return,
            };
            let aspect = canvas_m.width() as f32 / canvas_m.height().max(1) as f32;
            let camera = orbit_m.borrow().camera(aspect);
            let (ro, rd) = camera.ray_from_ndc(ndc);
            let hit = scene_m.borrow().pick(ro, rd);
            apply_hover(&scene_m, &on_hover_m, hit);
        }) as Box<dyn FnMut(_)>)
    };
    let _ = w
        .canvas
        .add_event_listener_with_callback("pointermove", pointer_move.as_ref().unchecked_ref());

    // pointerdown: start an orbit drag and capture the pointer
    let pointer_down = {
        let orbit_m = w.orbit.clone();
        let canvas_m = w.canvas.clone();
        Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let rect = canvas_m.get_bounding_client_rect();
            let x = ev.client_x() as f32 - rect.left() as f32;
            let y = ev.client_y() as f32 - rect.top() as f32;
            orbit_m.borrow_mut().begin_drag(x, y);
            let _ = canvas_m.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>)
    };
    let _ = w
        .canvas
        .add_event_listener_with_callback("pointerdown", pointer_down.as_ref().unchecked_ref());

    // pointerup: release the drag, momentum keeps spinning via update()
    let pointer_up = {
        let orbit_m = w.orbit.clone();
        Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            orbit_m.borrow_mut().end_drag();
        }) as Box<dyn FnMut(_)>)
    };
    let _ = w
        .canvas
        .add_event_listener_with_callback("pointerup", pointer_up.as_ref().unchecked_ref());

    // pointerleave: clear the hover so the host never shows a stale label
    let pointer_leave = {
        let scene_m = w.scene.clone();
        let orbit_m = w.orbit.clone();
        let on_hover_m = w.on_hover.clone();
        Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            orbit_m.borrow_mut().end_drag();
            apply_hover(&scene_m, &on_hover_m, None);
        }) as Box<dyn FnMut(_)>)
    };
    let _ = w
        .canvas
        .add_event_listener_with_callback("pointerleave", pointer_leave.as_ref().unchecked_ref());

    PointerClosures {
        canvas: w.canvas,
        pointer_move,
        pointer_down,
        pointer_up,
        pointer_leave,
    }
}

/// Owned window `resize` listener that keeps the canvas backing store in
/// sync with its CSS size.
pub struct ResizeHook {
    closure: Closure<dyn FnMut()>,
}

impl ResizeHook {
    pub fn detach(&self) {
        if let Some(w) = web::window() {
            let _ = w
                .remove_event_listener_with_callback("resize", self.closure.as_ref().unchecked_ref());
        }
    }
}

pub fn wire_resize_hook(canvas: &web::HtmlCanvasElement) -> ResizeHook {
    let canvas_resize = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        let _ = w.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    ResizeHook { closure }
}
