use crate::{
    foundation::core::{Canvas, Vec2},
    foundation::error::{MotifError, MotifResult},
};

/// Edge the incoming scene enters from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideDirection {
    /// Enters from the left edge.
    FromLeft,
    /// Enters from the right edge.
    FromRight,
    /// Enters from the top edge.
    FromTop,
    /// Enters from the bottom edge.
    FromBottom,
}

impl SlideDirection {
    /// Unit vector both layers move along (y grows downward).
    pub fn motion(self) -> Vec2 {
        match self {
            Self::FromLeft => Vec2::new(1.0, 0.0),
            Self::FromRight => Vec2::new(-1.0, 0.0),
            Self::FromTop => Vec2::new(0.0, 1.0),
            Self::FromBottom => Vec2::new(0.0, -1.0),
        }
    }

    /// True for left and right.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::FromLeft | Self::FromRight)
    }

    /// Distance a layer travels over the whole transition.
    pub fn extent(self, canvas: Canvas) -> f64 {
        if self.is_horizontal() {
            f64::from(canvas.width)
        } else {
            f64::from(canvas.height)
        }
    }
}

/// Direction the wipe edge travels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WipeDir {
    /// Edge moves rightward.
    LeftToRight,
    /// Edge moves leftward.
    RightToLeft,
    /// Edge moves downward.
    TopToBottom,
    /// Edge moves upward.
    BottomToTop,
}

/// Visual mechanism used to hand over from one scene to the next.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Presentation {
    /// Incoming pushes outgoing out of frame.
    Slide {
        /// Entry edge of the incoming scene.
        direction: SlideDirection,
    },
    /// Cross-dissolve.
    Fade,
    /// Incoming is revealed behind a moving edge.
    Wipe {
        /// Edge travel direction.
        dir: WipeDir,
        /// Width of the feathered edge as a fraction of the wipe extent, in `[0, 1]`.
        #[serde(default)]
        soft_edge: f64,
    },
}

/// Directional reveal mask applied to a layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WipeMask {
    /// Edge travel direction.
    pub dir: WipeDir,
    /// Revealed fraction of the frame.
    pub coverage: f64,
    /// Feather width as a fraction of the extent.
    pub soft_edge: f64,
}

/// How a renderer should place one layer of a transition.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerBlend {
    /// Translation in pixels.
    pub offset: Vec2,
    /// In `[0, 1]`.
    pub opacity: f64,
    /// Reveal mask, set only on the incoming side of a wipe.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wipe: Option<WipeMask>,
}

impl LayerBlend {
    /// Untransformed, fully opaque.
    pub fn identity() -> Self {
        Self {
            offset: Vec2::ZERO,
            opacity: 1.0,
            wipe: None,
        }
    }
}

impl Default for LayerBlend {
    fn default() -> Self {
        Self::identity()
    }
}

/// Blend instructions for both sides of a transition at one progress value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BlendPair {
    /// Scene being left.
    pub outgoing: LayerBlend,
    /// Scene being entered.
    pub incoming: LayerBlend,
}

impl Presentation {
    /// Slide from `direction`.
    pub fn slide(direction: SlideDirection) -> Self {
        Self::Slide { direction }
    }

    /// Matches the serialized `type` tag.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Slide { .. } => "slide",
            Self::Fade => "fade",
            Self::Wipe { .. } => "wipe",
        }
    }

    /// A wipe's `soft_edge` must lie in `[0, 1]`.
    pub fn validate(&self) -> MotifResult<()> {
        if let Self::Wipe { soft_edge, .. } = self
            && !(0.0..=1.0).contains(soft_edge)
        {
            return Err(MotifError::config(format!(
                "wipe soft_edge must be within [0, 1] (got {soft_edge})"
            )));
        }
        Ok(())
    }

    /// Blend for `progress` (clamped to `[0, 1]`) on `canvas`.
    ///
    /// At `progress = 0` the outgoing layer is untouched; at `progress = 1` the incoming one is.
    pub fn blend(&self, progress: f64, canvas: Canvas) -> BlendPair {
        let p = progress.clamp(0.0, 1.0);
        match *self {
            Self::Slide { direction } => {
                let travel = direction.motion() * direction.extent(canvas);
                BlendPair {
                    outgoing: LayerBlend {
                        offset: travel * p,
                        ..LayerBlend::identity()
                    },
                    incoming: LayerBlend {
                        offset: -travel * (1.0 - p),
                        ..LayerBlend::identity()
                    },
                }
            }
            Self::Fade => BlendPair {
                outgoing: LayerBlend {
                    opacity: 1.0 - p,
                    ..LayerBlend::identity()
                },
                incoming: LayerBlend {
                    opacity: p,
                    ..LayerBlend::identity()
                },
            },
            Self::Wipe { dir, soft_edge } => BlendPair {
                outgoing: LayerBlend::identity(),
                incoming: LayerBlend {
                    wipe: Some(WipeMask {
                        dir,
                        coverage: p,
                        soft_edge,
                    }),
                    ..LayerBlend::identity()
                },
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/presentation.rs"]
mod tests;
