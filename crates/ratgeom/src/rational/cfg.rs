//! Conversion configuration.
//!
//! Policy
//! - Defaults match what `Rational::to_f64`/`to_f32` do: round half to even,
//!   saturate to signed infinity. Only callers that want overflow to be an
//!   error need to build a non-default config.

use super::convert::FloatOverflow;
use super::round::RoundingMode;

/// Settings for rational → float conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConvertCfg {
    pub rounding: RoundingMode,
    pub float_overflow: FloatOverflow,
}

impl ConvertCfg {
    #[inline]
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    #[inline]
    pub fn with_float_overflow(mut self, float_overflow: FloatOverflow) -> Self {
        self.float_overflow = float_overflow;
        self
    }
}
