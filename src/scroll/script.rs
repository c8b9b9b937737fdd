//! Recorded scroll input for offline replay.
//!
//! A script is plain text, one `<time_seconds> <offset_px>` pair per line.
//! Blank lines and `#` comments are skipped. Samples must be in
//! non-decreasing time order.
//!
//! ```text
//! # scroll to section 1, then fling to 3
//! 0.5  400
//! 1.0  900
//! 3.0  2700
//! ```

use crate::error::ParallaxError;

/// One recorded scroll event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    /// Seconds since replay start.
    pub time: f64,
    /// Absolute offset in pixels.
    pub offset: f64,
}

/// Time-ordered scroll samples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollScript {
    samples: Vec<ScrollSample>,
}

impl ScrollScript {
    /// Parse script text.
    pub fn parse(text: &str) -> Result<Self, ParallaxError> {
        let mut samples: Vec<ScrollSample> = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let content = raw.split('#').next().unwrap_or_default().trim();
            if content.is_empty() {
                continue;
            }

            let mut fields = content.split_whitespace();
            let (Some(time), Some(offset), None) =
                (fields.next(), fields.next(), fields.next())
            else {
                return Err(ParallaxError::Script {
                    line,
                    message: format!(
                        "expected `<time> <offset>`, got `{content}`"
                    ),
                });
            };
            let time = parse_number(time, "time", line)?;
            let offset = parse_number(offset, "offset", line)?;

            if time < 0.0 {
                return Err(ParallaxError::Script {
                    line,
                    message: format!("negative time {time}"),
                });
            }
            if samples.last().is_some_and(|prev| time < prev.time) {
                return Err(ParallaxError::Script {
                    line,
                    message: format!("time {time} goes backwards"),
                });
            }
            samples.push(ScrollSample { time, offset });
        }
        Ok(Self { samples })
    }

    /// Samples in time order.
    #[must_use]
    pub fn samples(&self) -> &[ScrollSample] {
        &self.samples
    }

    /// Time of the last sample, or 0 for an empty script.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.samples.last().map_or(0.0, |s| s.time)
    }
}

fn parse_number(
    text: &str,
    what: &str,
    line: usize,
) -> Result<f64, ParallaxError> {
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParallaxError::Script {
            line,
            message: format!("invalid {what} `{text}`"),
        }),
    }
}
