//! Geometry helpers for framing groups of objects

use glam::Vec2;

use super::{Bounds, Camera, CameraError};

/// Something the camera should keep on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FitTarget {
    Point(Vec2),
    Rect(Bounds),
}

impl FitTarget {
    pub fn bounds(&self) -> Bounds {
        match self {
            FitTarget::Point(p) => Bounds::point(*p),
            FitTarget::Rect(r) => *r,
        }
    }
}

impl From<Vec2> for FitTarget {
    fn from(p: Vec2) -> Self {
        FitTarget::Point(p)
    }
}

impl From<Bounds> for FitTarget {
    fn from(r: Bounds) -> Self {
        FitTarget::Rect(r)
    }
}

/// Edge insets added around fitted bounds, in world units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl Padding {
    pub fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    pub fn uniform(inset: f32) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Grows `bounds` outward by this padding (y up, so `top` moves `max.y`)
    ///
    /// Negative insets shrink the bounds. An axis shrunk past zero collapses to
    /// the midpoint of its inset edges rather than turning inside out.
    pub fn expand(&self, bounds: &Bounds) -> Bounds {
        let min = Vec2::new(bounds.min.x - self.left, bounds.min.y - self.bottom);
        let max = Vec2::new(bounds.max.x + self.right, bounds.max.y + self.top);
        let mid = (min + max) / 2.0;
        let crossed = min.cmpgt(max);

        Bounds {
            min: Vec2::select(crossed, mid, min),
            max: Vec2::select(crossed, mid, max),
        }
    }
}

/// Coordinate space a fitted rectangle is reported in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitSpace {
    #[default]
    World,
    /// Projected through the camera's current transform
    Screen,
}

/// Smallest world rectangle enclosing every target, grown by `padding`
///
/// The result is not clamped to the world; the camera setters do that.
pub fn fit_bounds<I, T>(objects: I, padding: Padding) -> Result<Bounds, CameraError>
where
    I: IntoIterator<Item = T>,
    T: Into<FitTarget>,
{
    let enclosing = objects
        .into_iter()
        .map(|o| o.into().bounds())
        .reduce(|a, b| a.union(&b))
        .ok_or(CameraError::EmptyInput)?;

    Ok(padding.expand(&enclosing))
}

impl Camera {
    /// Bounds covering all `objects` plus `padding`, in the requested space
    pub fn bounds_for_fit_objects<I, T>(
        &self,
        objects: I,
        padding: Padding,
        space: FitSpace,
    ) -> Result<Bounds, CameraError>
    where
        I: IntoIterator<Item = T>,
        T: Into<FitTarget>,
    {
        let bounds = fit_bounds(objects, padding)?;
        Ok(match space {
            FitSpace::World => bounds,
            FitSpace::Screen => Bounds::new(
                self.world_to_screen(bounds.min),
                self.world_to_screen(bounds.max),
            ),
        })
    }

    /// Frames all `objects`; leaves the camera untouched on [`CameraError::EmptyInput`]
    pub fn fit_objects<I, T>(&mut self, objects: I, padding: Padding) -> Result<(), CameraError>
    where
        I: IntoIterator<Item = T>,
        T: Into<FitTarget>,
    {
        let bounds = fit_bounds(objects, padding)?;
        self.set_visible_world_rect(bounds);
        Ok(())
    }

    pub fn center_of_rect(&self, rect: &Bounds) -> Vec2 {
        rect.center()
    }

    /// Zoom that fits `rect` entirely in the viewport, before clamping
    ///
    /// A zero-sized axis does not constrain the zoom; a point yields infinity.
    pub fn zoom_for_rect(&self, rect: &Bounds) -> f32 {
        self.zoom_for_width(rect.width())
            .min(self.zoom_for_height(rect.height()))
    }

    pub fn zoom_for_width(&self, width: f32) -> f32 {
        self.viewport_size().x / width
    }

    pub fn zoom_for_height(&self, height: f32) -> f32 {
        self.viewport_size().y / height
    }
}
