use crate::{
    animation::ease::Ease,
    foundation::error::{MotifError, MotifResult},
};

/// Rule for inputs outside the declared input range, chosen per side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Hold the nearest boundary output value.
    Clamp,
    /// Continue the nearest segment's slope.
    #[default]
    Extend,
    /// Return the input unchanged.
    Identity,
}

/// Piecewise-linear mapping from an input range onto an output range.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InterpolationSpec {
    /// Strictly increasing breakpoints (at least two).
    pub input_range: Vec<f64>,
    /// Output value at each breakpoint.
    pub output_range: Vec<f64>,
    /// Policy below the first breakpoint.
    #[serde(default)]
    pub extrapolate_left: Extrapolate,
    /// Policy above the last breakpoint.
    #[serde(default)]
    pub extrapolate_right: Extrapolate,
    /// Shape applied to progress inside a bracket.
    #[serde(default)]
    pub ease: Ease,
}

impl InterpolationSpec {
    /// Both sides extend, linear shape.
    pub fn new(input_range: impl Into<Vec<f64>>, output_range: impl Into<Vec<f64>>) -> Self {
        Self {
            input_range: input_range.into(),
            output_range: output_range.into(),
            extrapolate_left: Extrapolate::Extend,
            extrapolate_right: Extrapolate::Extend,
            ease: Ease::Linear,
        }
    }

    /// Clamp on both sides.
    pub fn clamp(self) -> Self {
        self.extrapolate(Extrapolate::Clamp, Extrapolate::Clamp)
    }

    /// Clamp below the first breakpoint.
    pub fn clamp_left(mut self) -> Self {
        self.extrapolate_left = Extrapolate::Clamp;
        self
    }

    /// Clamp above the last breakpoint.
    pub fn clamp_right(mut self) -> Self {
        self.extrapolate_right = Extrapolate::Clamp;
        self
    }

    /// Set both policies at once.
    pub fn extrapolate(mut self, left: Extrapolate, right: Extrapolate) -> Self {
        self.extrapolate_left = left;
        self.extrapolate_right = right;
        self
    }

    /// Shape progress inside each bracket.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Validate breakpoint ordering and range lengths.
    pub fn validate(&self) -> MotifResult<()> {
        validate_breakpoints(&self.input_range, self.output_range.len())?;
        if self.output_range.iter().any(|v| !v.is_finite()) {
            return Err(MotifError::domain("output_range values must be finite"));
        }
        Ok(())
    }
}

fn validate_breakpoints(input_range: &[f64], output_len: usize) -> MotifResult<()> {
    if input_range.len() < 2 {
        return Err(MotifError::domain(
            "input_range must have at least two breakpoints",
        ));
    }
    if input_range.len() != output_len {
        return Err(MotifError::domain(format!(
            "input_range and output_range lengths differ ({} vs {output_len})",
            input_range.len()
        )));
    }
    if input_range.iter().any(|v| !v.is_finite()) {
        return Err(MotifError::domain("input_range values must be finite"));
    }
    if !input_range.windows(2).all(|w| w[0] < w[1]) {
        return Err(MotifError::domain("input_range must be strictly increasing"));
    }
    Ok(())
}

/// Index `i` of the bracket `[range[i], range[i + 1]]` used for `input`.
///
/// Inputs below the range map to the first bracket, inputs above it to the last.
fn bracket_index(input_range: &[f64], input: f64) -> usize {
    let last = input_range.len() - 2;
    input_range[1..=last]
        .iter()
        .position(|&b| b >= input)
        .unwrap_or(last)
}

/// Map `input` through `spec`.
///
/// Outside the input range the left/right [`Extrapolate`] policies apply independently. The
/// easing shape only affects progress inside a bracket; extension beyond the range is linear.
pub fn interpolate(input: f64, spec: &InterpolationSpec) -> MotifResult<f64> {
    spec.validate()?;
    if input.is_nan() {
        return Err(MotifError::domain("cannot interpolate a NaN input"));
    }

    let i = bracket_index(&spec.input_range, input);
    let (in_lo, in_hi) = (spec.input_range[i], spec.input_range[i + 1]);
    let (out_lo, out_hi) = (spec.output_range[i], spec.output_range[i + 1]);

    if input < in_lo {
        match spec.extrapolate_left {
            Extrapolate::Identity => return Ok(input),
            Extrapolate::Clamp => return Ok(out_lo),
            Extrapolate::Extend => {}
        }
    }
    if input > in_hi {
        match spec.extrapolate_right {
            Extrapolate::Identity => return Ok(input),
            Extrapolate::Clamp => return Ok(out_hi),
            Extrapolate::Extend => {}
        }
    }
    if out_lo == out_hi {
        return Ok(out_lo);
    }

    let t = (input - in_lo) / (in_hi - in_lo);
    let shaped = if (0.0..=1.0).contains(&t) {
        spec.ease.apply(t)
    } else {
        t
    };
    Ok(lerp(out_lo, out_hi, shaped))
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
