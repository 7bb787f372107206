//! Demo-page caption below the sphere mirroring the hovered skill.

use web_sys as web;

pub const CAPTION_ID: &str = "skill-caption";

#[inline]
pub fn update(document: &web::Document, label: Option<&str>) {
    if let Some(el) = document.get_element_by_id(CAPTION_ID) {
        el.set_text_content(Some(label.unwrap_or("")));
    }
}
