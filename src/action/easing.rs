//! Easing curve selection for camera transitions

use std::fmt;
use std::str::FromStr;

use keyframe::EasingFunction;
use keyframe::functions::{
    EaseIn, EaseInCubic, EaseInOut, EaseInOutCubic, EaseInOutQuad, EaseInQuad, EaseOut,
    EaseOutCubic, EaseOutQuad, Linear,
};
use serde::{Deserialize, Serialize};

use crate::camera::CameraError;

/// Named easing curve; the curves themselves come from `keyframe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
}

impl Easing {
    pub const ALL: [Easing; 10] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::EaseInQuad,
        Easing::EaseOutQuad,
        Easing::EaseInOutQuad,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
    ];

    /// Maps linear progress `t` (clamped to `[0, 1]`) through the curve
    pub fn apply(self, t: f32) -> f32 {
        let x = f64::from(t.clamp(0.0, 1.0));
        let y = match self {
            Easing::Linear => Linear.y(x),
            Easing::EaseIn => EaseIn.y(x),
            Easing::EaseOut => EaseOut.y(x),
            Easing::EaseInOut => EaseInOut.y(x),
            Easing::EaseInQuad => EaseInQuad.y(x),
            Easing::EaseOutQuad => EaseOutQuad.y(x),
            Easing::EaseInOutQuad => EaseInOutQuad.y(x),
            Easing::EaseInCubic => EaseInCubic.y(x),
            Easing::EaseOutCubic => EaseOutCubic.y(x),
            Easing::EaseInOutCubic => EaseInOutCubic.y(x),
        };
        y as f32
    }

    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "ease_in",
            Easing::EaseOut => "ease_out",
            Easing::EaseInOut => "ease_in_out",
            Easing::EaseInQuad => "ease_in_quad",
            Easing::EaseOutQuad => "ease_out_quad",
            Easing::EaseInOutQuad => "ease_in_out_quad",
            Easing::EaseInCubic => "ease_in_cubic",
            Easing::EaseOutCubic => "ease_out_cubic",
            Easing::EaseInOutCubic => "ease_in_out_cubic",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = CameraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Easing::ALL
            .into_iter()
            .find(|e| e.name() == s)
            .ok_or_else(|| CameraError::invalid("easing", s))
    }
}
