//! Resampling primitives for the external raster-conversion tool.
//!
//! The warp tool accepts a fixed set of resampling algorithms. Anything the
//! pipeline forwards to it must be a member of that set, so the enumeration
//! here is closed and membership is exact and case-sensitive.

use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

/// Resampling algorithm supported by the external warp tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResamplingMethod {
    /// Nearest neighbour.
    Nearest,
    /// Bilinear interpolation.
    Bilinear,
    /// Cubic convolution.
    Cubic,
    /// Cubic spline interpolation.
    CubicSpline,
    /// Lanczos windowed sinc.
    Lanczos,
    /// Weighted average of contributing pixels.
    Average,
    /// Most frequent contributing value.
    Mode,
}

impl ResamplingMethod {
    /// Every method the warp tool accepts, in documentation order.
    pub const ALL: [Self; 7] = [
        Self::Nearest,
        Self::Bilinear,
        Self::Cubic,
        Self::CubicSpline,
        Self::Lanczos,
        Self::Average,
        Self::Mode,
    ];

    /// Render the method as the identifier the warp tool expects.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::Bilinear => "bilinear",
            Self::Cubic => "cubic",
            Self::CubicSpline => "cubicspline",
            Self::Lanczos => "lanczos",
            Self::Average => "average",
            Self::Mode => "mode",
        }
    }

    /// Whether `value` is an exact member of the supported set.
    ///
    /// Case variants and synonyms are rejected; a `false` result is not an
    /// error, and the caller decides whether to reject or fall back.
    #[must_use]
    pub fn is_supported(value: &str) -> bool {
        value.parse::<Self>().is_ok()
    }
}

impl FromStr for ResamplingMethod {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nearest" => Ok(Self::Nearest),
            "bilinear" => Ok(Self::Bilinear),
            "cubic" => Ok(Self::Cubic),
            "cubicspline" => Ok(Self::CubicSpline),
            "lanczos" => Ok(Self::Lanczos),
            "average" => Ok(Self::Average),
            "mode" => Ok(Self::Mode),
            other => Err(anyhow!("unsupported resampling method '{other}'")),
        }
    }
}

impl fmt::Display for ResamplingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Argument vector for the external warp invocation.
///
/// The resampling flag precedes the positional source/target pair. The
/// subprocess launch itself is the executor's concern.
#[must_use]
pub fn warp_args(source: &str, target: &str, method: ResamplingMethod) -> Vec<String> {
    vec![
        "-r".to_string(),
        method.as_str().to_string(),
        source.to_string(),
        target.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_documented_method_is_supported() {
        for method in ResamplingMethod::ALL {
            assert!(ResamplingMethod::is_supported(method.as_str()));
            assert_eq!(method.as_str().parse::<ResamplingMethod>().ok(), Some(method));
        }
    }

    #[test]
    fn membership_is_exact_and_case_sensitive() {
        for value in ["Nearest", "bicubic", "", "cubic_spline", "NEAREST"] {
            assert!(!ResamplingMethod::is_supported(value), "accepted '{value}'");
        }
    }

    #[test]
    fn serde_uses_the_warp_tool_identifiers() -> Result<()> {
        assert_eq!(
            serde_json::to_string(&ResamplingMethod::CubicSpline)?,
            "\"cubicspline\""
        );
        let parsed: ResamplingMethod = serde_json::from_str("\"lanczos\"")?;
        assert_eq!(parsed, ResamplingMethod::Lanczos);
        Ok(())
    }

    #[test]
    fn warp_args_place_the_resampling_flag_first() {
        let args = warp_args("/in.tif", "s3://imagery/out.tif", ResamplingMethod::Average);
        assert_eq!(args, ["-r", "average", "/in.tif", "s3://imagery/out.tif"]);
    }
}
