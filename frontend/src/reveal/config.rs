use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_THRESHOLD: f64 = 0.1;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RevealError {
    #[error("threshold must be a number between 0 and 1, got {0}")]
    InvalidThreshold(f64),
    #[error("invalid root margin {margin:?}: {reason}")]
    InvalidRootMargin { margin: String, reason: String },
    #[error("could not create intersection observer: {0}")]
    Observe(String),
}

/// One side of a root margin, as the browser understands it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl Length {
    /// Resolves against the root box extent of the same axis.
    pub fn resolve(self, extent: f64) -> f64 {
        match self {
            Length::Px(px) => px,
            Length::Percent(pct) => extent * pct / 100.0,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(px) => write!(f, "{}px", px),
            Length::Percent(pct) => write!(f, "{}%", pct),
        }
    }
}

/// CSS-like margin around the viewport box. Positive values grow the box,
/// negative values shrink it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootMargin {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
}

impl RootMargin {
    pub const ZERO: RootMargin = RootMargin::uniform(Length::Px(0.0));

    pub const fn uniform(length: Length) -> Self {
        Self {
            top: length,
            right: length,
            bottom: length,
            left: length,
        }
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        Self::ZERO
    }
}

fn parse_length(margin: &str, token: &str) -> Result<Length, RevealError> {
    let invalid = |reason: String| RevealError::InvalidRootMargin {
        margin: margin.to_string(),
        reason,
    };

    let (number, percent) = if let Some(number) = token.strip_suffix("px") {
        (number, false)
    } else if let Some(number) = token.strip_suffix('%') {
        (number, true)
    } else if token.parse::<f64>().ok() == Some(0.0) {
        return Ok(Length::Px(0.0));
    } else {
        return Err(invalid(format!("{:?} must be in pixels or percent", token)));
    };

    let value: f64 = number
        .parse()
        .map_err(|_| invalid(format!("{:?} is not a number", token)))?;
    if !value.is_finite() {
        return Err(invalid(format!("{:?} is not finite", token)));
    }

    Ok(if percent {
        Length::Percent(value)
    } else {
        Length::Px(value)
    })
}

impl FromStr for RootMargin {
    type Err = RevealError;

    fn from_str(margin: &str) -> Result<Self, Self::Err> {
        let lengths = margin
            .split_whitespace()
            .map(|token| parse_length(margin, token))
            .collect::<Result<Vec<_>, _>>()?;

        // Same expansion as the CSS `margin` shorthand
        let (top, right, bottom, left) = match lengths.as_slice() {
            [all] => (*all, *all, *all, *all),
            [vertical, horizontal] => (*vertical, *horizontal, *vertical, *horizontal),
            [top, horizontal, bottom] => (*top, *horizontal, *bottom, *horizontal),
            [top, right, bottom, left] => (*top, *right, *bottom, *left),
            _ => {
                return Err(RevealError::InvalidRootMargin {
                    margin: margin.to_string(),
                    reason: format!("expected 1 to 4 lengths, got {}", lengths.len()),
                })
            }
        };

        Ok(Self {
            top,
            right,
            bottom,
            left,
        })
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            top,
            right,
            bottom,
            left,
        } = self;
        if top == right && top == bottom && top == left {
            write!(f, "{}", top)
        } else if top == bottom && right == left {
            write!(f, "{} {}", top, right)
        } else if right == left {
            write!(f, "{} {} {}", top, right, bottom)
        } else {
            write!(f, "{} {} {} {}", top, right, bottom, left)
        }
    }
}

/// Options as they appear in content files. Anything omitted takes the default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RevealOptions {
    pub threshold: Option<f64>,
    pub root_margin: Option<String>,
}

/// When a watched node counts as "in view".
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "RevealOptions")]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: RootMargin,
}

impl RevealConfig {
    pub const DEFAULT: RevealConfig = RevealConfig {
        threshold: DEFAULT_THRESHOLD,
        root_margin: RootMargin::ZERO,
    };

    /// Inset trigger region for list items: they need to be well inside the
    /// viewport before revealing.
    pub const ITEMS: RevealConfig = RevealConfig {
        threshold: 0.3,
        root_margin: RootMargin::uniform(Length::Px(-50.0)),
    };

    pub fn at_threshold(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            ..Self::DEFAULT
        }
    }

    pub fn parse(threshold: Option<f64>, root_margin: Option<&str>) -> Result<Self, RevealError> {
        let threshold = match threshold {
            Some(t) if !(0.0..=1.0).contains(&t) => return Err(RevealError::InvalidThreshold(t)),
            Some(t) => t,
            None => DEFAULT_THRESHOLD,
        };
        let root_margin = match root_margin {
            Some(margin) => margin.parse()?,
            None => RootMargin::ZERO,
        };
        Ok(Self {
            threshold,
            root_margin,
        })
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<RevealOptions> for RevealConfig {
    type Error = RevealError;

    fn try_from(options: RevealOptions) -> Result<Self, Self::Error> {
        Self::parse(options.threshold, options.root_margin.as_deref())
    }
}
