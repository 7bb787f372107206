//! The skill sphere scene: labels, marker positions and the hover state.

use crate::constants::{
    LABEL_HOVER_SIZE, LABEL_SIZE, MARKER_HOVER_SCALE, PICK_SPHERE_RADIUS,
};
use crate::layout;
use crate::picking;
use glam::{Vec2, Vec3};

/// One marker per label, evenly spread over a sphere, with at most one
/// marker hovered at a time.
///
/// Positions are computed once at construction; interaction only ever
/// changes the hover index. Hit-testing uses the idle marker radius even
/// while a marker is enlarged, so the pick result is stable for a resting
/// pointer.
#[derive(Clone, Debug)]
pub struct SkillSphere {
    labels: Vec<String>,
    markers: Vec<Vec3>,
    label_anchors: Vec<Vec3>,
    hovered: Option<usize>,
}

impl SkillSphere {
    pub fn new(labels: Vec<String>, radius: f32) -> Self {
        let markers = layout::sphere_points(labels.len(), radius);
        let label_anchors = markers.iter().copied().map(layout::label_anchor).collect();
        Self {
            labels,
            markers,
            label_anchors,
            hovered: None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[inline]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[inline]
    pub fn marker_positions(&self) -> &[Vec3] {
        &self.markers
    }

    #[inline]
    pub fn label_anchors(&self) -> &[Vec3] {
        &self.label_anchors
    }

    #[inline]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn hovered_label(&self) -> Option<&str> {
        self.hovered.map(|i| self.labels[i].as_str())
    }

    /// Replace the hover state. Returns `true` when the hovered index
    /// actually changed, which is the host's cue to republish.
    pub fn set_hovered(&mut self, index: Option<usize>) -> bool {
        if let Some(i) = index {
            debug_assert!(i < self.labels.len());
        }
        if self.hovered == index {
            return false;
        }
        self.hovered = index;
        true
    }

    /// Cast a ray against all markers and return the nearest hit index.
    pub fn pick(&self, ray_origin: Vec3, ray_dir: Vec3) -> Option<usize> {
        picking::nearest_hit(ray_origin, ray_dir, &self.markers, PICK_SPHERE_RADIUS)
            .map(|(i, _)| i)
    }

    /// Scale factor for a marker instance (hover enlarges it).
    #[inline]
    pub fn marker_scale(&self, index: usize) -> f32 {
        if self.hovered == Some(index) {
            MARKER_HOVER_SCALE
        } else {
            1.0
        }
    }

    /// World-space quad size for a label instance (hover enlarges it).
    #[inline]
    pub fn label_size(&self, index: usize) -> Vec2 {
        let s = if self.hovered == Some(index) {
            LABEL_HOVER_SIZE
        } else {
            LABEL_SIZE
        };
        Vec2::new(s[0], s[1])
    }
}
