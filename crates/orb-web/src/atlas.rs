//! Label text rasterization into a single RGBA atlas.
//!
//! Each label is drawn centered in a fixed-size tile on an offscreen 2D
//! canvas, then the whole canvas is read back for upload as one texture.

use orb_core::atlas::AtlasPlan;
use orb_core::constants::{ATLAS_FONT, ATLAS_TILE_HEIGHT, ATLAS_TILE_WIDTH};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct LabelAtlas {
    pub plan: AtlasPlan,
    pub pixels: Vec<u8>,
}

/// Rasterize `labels` with the given CSS fill color.
///
/// The scratch canvas never touches the DOM. An empty label list yields a
/// transparent one-tile atlas so the GPU texture keeps a valid extent.
pub fn rasterize_labels(
    document: &web::Document,
    labels: &[String],
    text_css: &str,
) -> anyhow::Result<LabelAtlas> {
    let plan = AtlasPlan::for_tiles(labels.len(), ATLAS_TILE_WIDTH, ATLAS_TILE_HEIGHT);
    if labels.is_empty() {
        return Ok(LabelAtlas {
            plan,
            pixels: vec![0; (plan.width * plan.height * 4) as usize],
        });
    }

    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_width(plan.width);
    canvas.set_height(plan.height);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    ctx.set_font(ATLAS_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_fill_style_str(text_css);
    for (i, label) in labels.iter().enumerate() {
        let (ox, oy) = plan.tile_origin(i);
        let cx = ox as f64 + plan.tile_width as f64 / 2.0;
        let cy = oy as f64 + plan.tile_height as f64 / 2.0;
        ctx.fill_text(label, cx, cy)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }

    let image = ctx
        .get_image_data(0.0, 0.0, plan.width as f64, plan.height as f64)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(LabelAtlas {
        plan,
        pixels: image.data().0,
    })
}
