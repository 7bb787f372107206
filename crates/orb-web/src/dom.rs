use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Create the widget canvas inside `container`, styled to fill it.
pub fn create_canvas_in(
    document: &web::Document,
    container: &web::Element,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let _ = canvas.set_attribute(
        "style",
        "width:100%;height:100%;display:block;touch-action:none",
    );
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Set the page-wide cursor (`"pointer"` over a marker, `"auto"` otherwise).
pub fn set_page_cursor(cursor: &str) {
    if let Some(doc) = window_document() {
        if let Some(body) = doc.body() {
            let _ = body.style().set_property("cursor", cursor);
        }
    }
}

/// The page opts into the dark palette with a `dark` class on `<html>`.
#[inline]
pub fn is_dark_theme(document: &web::Document) -> bool {
    document
        .document_element()
        .map(|el| el.class_list().contains("dark"))
        .unwrap_or(false)
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
