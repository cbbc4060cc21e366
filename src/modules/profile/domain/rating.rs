use std::fmt;

pub const MAX_STARS: u8 = 5;

const FILLED: char = '★';
const HALF: char = '½';
const EMPTY: char = '☆';

/// Star breakdown of a testimonial score.
///
/// `filled = floor(score)`, one half glyph when the score has a fractional
/// part, and `empty = 5 - ceil(score)`. Scores are clamped to `[0, 5]`;
/// NaN counts as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub filled: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarRating {
    pub fn from_score(score: f64) -> Self {
        let score = if score.is_nan() {
            0.0
        } else {
            score.clamp(0.0, f64::from(MAX_STARS))
        };

        Self {
            filled: score.floor() as u8,
            half: score.fract() > 0.0,
            empty: MAX_STARS - score.ceil() as u8,
        }
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stars = String::new();
        stars.extend(std::iter::repeat(FILLED).take(self.filled as usize));
        if self.half {
            stars.push(HALF);
        }
        stars.extend(std::iter::repeat(EMPTY).take(self.empty as usize));
        f.write_str(&stars)
    }
}
