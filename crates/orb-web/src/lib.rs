#![cfg(target_arch = "wasm32")]

mod atlas;
mod caption;
mod dom;
mod events;
mod frame;
mod render;

use frame::FrameContext;
use instant::Instant;
use orb_core::constants::{DEFAULT_SKILLS, POINT_SPHERE_RADIUS};
use orb_core::palette::{Palette, Theme};
use orb_core::{OrbitState, SkillSphere};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

const DEMO_CONTAINER_ID: &str = "skill-orb";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orb-web starting");

    if let Err(e) = demo_init() {
        log::warn!("demo init skipped: {:?}", e);
    }
    Ok(())
}

// Auto-mount for the demo page. Pages that embed the widget from JS omit
// the #skill-orb container and construct `SkillOrb` themselves.
fn demo_init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    if document.get_element_by_id(DEMO_CONTAINER_ID).is_none() {
        return Ok(());
    }

    let orb = SkillOrb::new(DEMO_CONTAINER_ID.to_string(), None, None)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    // Mirror hover changes into the caption element
    let caption_document = document.clone();
    let on_hover = Closure::wrap(Box::new(move |label: JsValue| {
        caption::update(&caption_document, label.as_string().as_deref());
    }) as Box<dyn FnMut(JsValue)>);
    orb.set_hover_callback(Some(
        on_hover.as_ref().unchecked_ref::<js_sys::Function>().clone(),
    ));
    on_hover.forget();

    // The theme button flips the `dark` class on <html> and rebuilds
    let orb_toggle = orb.duplicate();
    let toggle_document = document.clone();
    dom::add_click_listener(&document, "theme-toggle", move || {
        let dark = toggle_document
            .document_element()
            .and_then(|el| el.class_list().toggle("dark").ok())
            .unwrap_or(false);
        orb_toggle.set_theme(dark);
    });

    // Demo instance lives for the page lifetime
    std::mem::forget(orb);
    Ok(())
}

struct OrbConfig {
    container_id: String,
    labels: Vec<String>,
}

/// One mounted widget: DOM nodes, listeners, frame loop and (once the async
/// init lands) the GPU state. Dropping it after `teardown` releases all of
/// them.
struct OrbInstance {
    theme: Theme,
    canvas: web::HtmlCanvasElement,
    scene: Rc<RefCell<SkillSphere>>,
    pointer: events::PointerClosures,
    resize: events::ResizeHook,
    frame_ctx: Rc<RefCell<FrameContext>>,
    frame_loop: frame::FrameLoop,
}

struct OrbHandle {
    config: OrbConfig,
    on_hover: Rc<RefCell<Option<js_sys::Function>>>,
    instance: Option<OrbInstance>,
    // Bumped on every unmount; async GPU results for older generations are
    // dropped instead of being attached to a rebuilt widget
    generation: u64,
}

impl Drop for OrbHandle {
    fn drop(&mut self) {
        teardown(self);
    }
}

/// Undo everything a mount did. Returns `true` when a hovered label was
/// cleared, so the caller can publish the change once no borrows are held.
fn teardown(handle: &mut OrbHandle) -> bool {
    let Some(inst) = handle.instance.take() else {
        return false;
    };
    inst.frame_loop.cancel();
    inst.pointer.detach();
    inst.resize.detach();
    let was_hovered = inst.scene.borrow_mut().set_hovered(None);
    dom::set_page_cursor("auto");
    inst.canvas.remove();
    log::info!("[orb] unmounted");
    was_hovered
}

/// Rotating skill sphere bound to a host page container.
#[wasm_bindgen]
pub struct SkillOrb {
    inner: Rc<RefCell<OrbHandle>>,
}

#[wasm_bindgen]
impl SkillOrb {
    /// Mount a sphere of `labels` (the default skill set when omitted) into
    /// the container element. `dark` overrides the page theme detection.
    #[wasm_bindgen(constructor)]
    pub fn new(
        container_id: String,
        labels: Option<js_sys::Array>,
        dark: Option<bool>,
    ) -> Result<SkillOrb, JsValue> {
        let labels = labels
            .map(|a| labels_from_js(&a))
            .unwrap_or_else(default_labels);
        let orb = SkillOrb {
            inner: Rc::new(RefCell::new(OrbHandle {
                config: OrbConfig {
                    container_id,
                    labels,
                },
                on_hover: Rc::new(RefCell::new(None)),
                instance: None,
                generation: 0,
            })),
        };
        orb.mount(dark.map(Theme::from_dark_flag))
            .map_err(|e| JsValue::from_str(&format!("{:?}", e)))?;
        Ok(orb)
    }

    /// Currently hovered skill label, if any.
    pub fn hovered(&self) -> Option<String> {
        self.inner
            .borrow()
            .instance
            .as_ref()
            .and_then(|inst| inst.scene.borrow().hovered_label().map(String::from))
    }

    /// Whether the renderer is live: `false` until the async GPU init lands,
    /// and permanently `false` when WebGPU is unavailable.
    pub fn is_active(&self) -> bool {
        self.inner
            .borrow()
            .instance
            .as_ref()
            .map(|inst| inst.frame_ctx.borrow().gpu.is_some())
            .unwrap_or(false)
    }

    /// Subscribe to hover changes; the callback receives the hovered label
    /// string or `null`. Passing nothing unsubscribes.
    pub fn set_hover_callback(&self, callback: Option<js_sys::Function>) {
        *self.inner.borrow().on_hover.borrow_mut() = callback;
    }

    /// Switch between the light and dark palette by rebuilding the scene.
    /// A matching theme is a no-op; an unmounted widget stays unmounted.
    pub fn set_theme(&self, dark: bool) {
        let theme = Theme::from_dark_flag(dark);
        {
            let handle = self.inner.borrow();
            match &handle.instance {
                Some(inst) if inst.theme != theme => {}
                _ => return,
            }
        }
        if let Err(e) = self.mount(Some(theme)) {
            log::error!("theme remount error: {:?}", e);
        }
    }

    /// Tear the widget down: stop the frame loop, detach the listeners,
    /// restore the page cursor and remove the canvas.
    pub fn unmount(&self) {
        let (was_hovered, on_hover) = {
            let mut handle = self.inner.borrow_mut();
            handle.generation += 1;
            (teardown(&mut handle), handle.on_hover.clone())
        };
        if was_hovered {
            events::publish_hover(&on_hover, None);
        }
    }
}

impl SkillOrb {
    fn duplicate(&self) -> SkillOrb {
        SkillOrb {
            inner: self.inner.clone(),
        }
    }

    fn mount(&self, theme_override: Option<Theme>) -> anyhow::Result<()> {
        self.unmount();

        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

        let mut handle = self.inner.borrow_mut();
        let generation = handle.generation;

        let container = document
            .get_element_by_id(&handle.config.container_id)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", handle.config.container_id))?;
        let theme = theme_override
            .unwrap_or_else(|| Theme::from_dark_flag(dom::is_dark_theme(&document)));
        let palette = Palette::for_theme(theme);

        // Everything fallible happens before the canvas joins the DOM, so a
        // failed mount leaves no residue
        let labels = handle.config.labels.clone();
        let instance_count = labels.len();
        let label_atlas = atlas::rasterize_labels(&document, &labels, palette.label_text_css)?;
        let label_uv_rects: Vec<[f32; 4]> = (0..instance_count)
            .map(|i| label_atlas.plan.uv_rect(i))
            .collect();

        let canvas = dom::create_canvas_in(&document, &container)?;
        dom::sync_canvas_backing_size(&canvas);

        let scene = Rc::new(RefCell::new(SkillSphere::new(labels, POINT_SPHERE_RADIUS)));
        let orbit = Rc::new(RefCell::new(OrbitState::default()));

        let pointer = events::wire_pointer_handlers(events::PointerWiring {
            canvas: canvas.clone(),
            scene: scene.clone(),
            orbit: orbit.clone(),
            on_hover: handle.on_hover.clone(),
        });
        let resize = events::wire_resize_hook(&canvas);

        let frame_ctx = Rc::new(RefCell::new(FrameContext {
            scene: scene.clone(),
            orbit,
            canvas: canvas.clone(),
            gpu: None,
            label_uv_rects,
            last_instant: Instant::now(),
        }));
        let frame_loop = frame::start_loop(frame_ctx.clone());

        handle.instance = Some(OrbInstance {
            theme,
            canvas: canvas.clone(),
            scene,
            pointer,
            resize,
            frame_ctx: frame_ctx.clone(),
            frame_loop,
        });
        log::info!(
            "[orb] mounted {} labels into #{} ({:?})",
            instance_count,
            handle.config.container_id,
            theme
        );
        drop(handle);

        // The device arrives asynchronously; results for a torn-down
        // generation are dropped on the floor
        let inner = self.inner.clone();
        spawn_local(async move {
            let gpu = frame::init_gpu(&canvas, &label_atlas, &palette, instance_count).await;
            let mut handle = inner.borrow_mut();
            if handle.generation != generation {
                return;
            }
            match gpu {
                Some(g) => {
                    if let Some(inst) = &handle.instance {
                        inst.frame_ctx.borrow_mut().gpu = Some(g);
                        log::info!("[orb] WebGPU renderer ready");
                    }
                }
                None => {
                    // No adapter or device: leave the page as it was,
                    // including the caption fed by the hover callback
                    let was_hovered = teardown(&mut handle);
                    let on_hover = handle.on_hover.clone();
                    drop(handle);
                    if was_hovered {
                        events::publish_hover(&on_hover, None);
                    }
                }
            }
        });
        Ok(())
    }
}

fn labels_from_js(array: &js_sys::Array) -> Vec<String> {
    array.iter().filter_map(|v| v.as_string()).collect()
}

fn default_labels() -> Vec<String> {
    DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect()
}
