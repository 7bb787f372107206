use crate::atlas::LabelAtlas;
use crate::render;
use instant::Instant;
use orb_core::constants::MARKER_RADIUS;
use orb_core::palette::Palette;
use orb_core::{OrbitState, SkillSphere};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<SkillSphere>>,
    pub orbit: Rc<RefCell<OrbitState>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,
    pub label_uv_rects: Vec<[f32; 4]>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        self.orbit.borrow_mut().update(dt.as_secs_f32());

        // Until the async GPU init lands, frames only advance the orbit
        if let Some(g) = &mut self.gpu {
            let width = self.canvas.width();
            let height = self.canvas.height();
            g.resize_if_needed(width, height);
            let aspect = width as f32 / height.max(1) as f32;
            let camera = self.orbit.borrow().camera(aspect);

            let scene = self.scene.borrow();
            let mut markers = Vec::with_capacity(scene.len());
            let mut labels = Vec::with_capacity(scene.len());
            for (i, pos) in scene.marker_positions().iter().enumerate() {
                markers.push(render::MarkerInstance {
                    pos: pos.to_array(),
                    scale: MARKER_RADIUS * scene.marker_scale(i),
                });
            }
            for (i, anchor) in scene.label_anchors().iter().enumerate() {
                let size = scene.label_size(i);
                labels.push(render::LabelInstance {
                    pos: anchor.to_array(),
                    size: [size.x, size.y],
                    uv_rect: self.label_uv_rects[i],
                });
            }
            drop(scene);

            if let Err(e) = g.render(&camera, &markers, &labels) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    atlas: &LabelAtlas,
    palette: &Palette,
    instance_capacity: usize,
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, atlas, palette, instance_capacity).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Handle on a running requestAnimationFrame loop.
///
/// `cancel` stops the chain and drops the tick closure, so an unmounted
/// widget leaves nothing scheduled behind.
pub struct FrameLoop {
    alive: Rc<Cell<bool>>,
    raf_id: Rc<Cell<i32>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn cancel(&self) {
        self.alive.set(false);
        if let Some(w) = web::window() {
            let _ = w.cancel_animation_frame(self.raf_id.get());
        }
        self.tick.borrow_mut().take();
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let alive = Rc::new(Cell::new(true));
    let raf_id = Rc::new(Cell::new(0));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let alive_tick = alive.clone();
    let raf_id_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !alive_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    raf_id_tick.set(id);
                }
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                raf_id.set(id);
            }
        }
    }

    FrameLoop {
        alive,
        raf_id,
        tick,
    }
}
