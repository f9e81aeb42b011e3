//! Image focal points and zoom.
//!
//! A position descriptor has two components, X then Y, each either a keyword
//! (`left`/`center`/`right`, `top`/`center`/`bottom`) or a percentage. The
//! two forms are interchangeable: `"left top"` and `"0% 0%"` describe the same
//! focal point.

use serde::{Deserialize, Serialize};

use crate::content::{DEFAULT_POSITION, DEFAULT_ZOOM};

/// A focal point in percent of the image box, each axis in `0.0..=100.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocalPoint {
  pub x: f64,
  pub y: f64,
}

impl Default for FocalPoint {
  fn default() -> Self { Self::CENTER }
}

impl FocalPoint {
  pub const CENTER: Self = Self { x: 50.0, y: 50.0 };

  /// Clamp both axes into range.
  pub fn new(x: f64, y: f64) -> Self {
    Self { x: clamp_percent(x), y: clamp_percent(y) }
  }

  /// Parse a descriptor of exactly two components. An unknown keyword, a
  /// keyword on the wrong axis or an unparseable percentage yields `None`.
  pub fn try_parse(descriptor: &str) -> Option<Self> {
    let mut parts = descriptor.split_whitespace();
    let (x, y) = (parts.next()?, parts.next()?);
    if parts.next().is_some() {
      return None;
    }
    Some(Self::new(axis(x, "left", "right")?, axis(y, "top", "bottom")?))
  }

  /// Lenient parse; anything malformed is the centre.
  pub fn parse(descriptor: &str) -> Self {
    Self::try_parse(descriptor).unwrap_or_default()
  }

  /// Canonical percentage form, e.g. `"25% 100%"`.
  pub fn descriptor(&self) -> String { format!("{:.0}% {:.0}%", self.x, self.y) }
}

/// Position to store or render. A well-formed descriptor is kept as written
/// with its whitespace collapsed; anything else is the default.
pub fn position_or_default(position: Option<&str>) -> String {
  match position {
    Some(p) if FocalPoint::try_parse(p).is_some() => {
      p.split_whitespace().collect::<Vec<_>>().join(" ")
    }
    _ => DEFAULT_POSITION.to_owned(),
  }
}

/// Replace a missing, non-finite or sub-1 zoom with 1.
pub fn clamp_zoom(zoom: Option<f64>) -> f64 {
  match zoom {
    Some(z) if z.is_finite() && z >= 1.0 => z,
    _ => DEFAULT_ZOOM,
  }
}

fn axis(token: &str, low: &str, high: &str) -> Option<f64> {
  if let Some(pct) = token.strip_suffix('%') {
    return pct.parse::<f64>().ok().filter(|v| v.is_finite());
  }
  match token {
    "center" => Some(50.0),
    t if t == low => Some(0.0),
    t if t == high => Some(100.0),
    _ => None,
  }
}

fn clamp_percent(v: f64) -> f64 {
  if v.is_nan() { 50.0 } else { v.clamp(0.0, 100.0) }
}
