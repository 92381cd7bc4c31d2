//! Mapping from word counts to font sizes.

use clap::ValueEnum;

pub const MIN_FONT: usize = 11;
pub const MAX_FONT: usize = 48;

const FONT_RANGE: usize = MAX_FONT - MIN_FONT;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ScaleMode {
    /// `count / (max / 37) + 11`, with the divisor floored at 1
    #[default]
    Shift,
    /// Interpolate between the smallest and largest count in the selection
    Linear,
}

/// Font scale fixed for one selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontScaler {
    mode: ScaleMode,
    min_count: usize,
    max_count: usize,
    shift: usize,
}

impl FontScaler {
    /// Builds a scaler for counts in `min_count..=max_count`.
    pub fn new(mode: ScaleMode, min_count: usize, max_count: usize) -> Self {
        // Small selections would otherwise divide by zero.
        let shift = (max_count / FONT_RANGE).max(1);
        FontScaler {
            mode,
            min_count: min_count.min(max_count),
            max_count,
            shift,
        }
    }

    pub fn shift(&self) -> usize {
        self.shift
    }

    /// Font size for `count`, always within `MIN_FONT..=MAX_FONT`.
    pub fn font_size(&self, count: usize) -> usize {
        let size = match self.mode {
            ScaleMode::Shift => count / self.shift + MIN_FONT,
            ScaleMode::Linear => {
                let span = self.max_count - self.min_count;
                if span == 0 {
                    MAX_FONT
                } else {
                    let offset = count.saturating_sub(self.min_count).min(span);
                    MIN_FONT + offset * FONT_RANGE / span
                }
            }
        };
        size.clamp(MIN_FONT, MAX_FONT)
    }
}
