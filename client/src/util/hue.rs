//! Hue math for the hue-match widget.

#[cfg(test)]
#[path = "hue_test.rs"]
mod hue_test;

use rand::Rng;

/// Shortest angular distance between two hues in degrees (0 to 180).
#[must_use]
pub fn hue_distance_deg(a: f64, b: f64) -> f64 {
    let delta = (a - b).abs().rem_euclid(360.0);
    delta.min(360.0 - delta)
}

/// Score a guess against the target hue: 100 at an exact match, falling
/// linearly to 0 at the opposite side of the wheel.
#[must_use]
pub fn match_score(target_deg: f64, guess_deg: f64) -> u32 {
    let distance = hue_distance_deg(target_deg, guess_deg);
    let score = ((1.0 - (distance / 180.0)) * 100.0).round();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        score.clamp(0.0, 100.0) as u32
    }
}

/// A uniformly random hue on the wheel.
pub fn random_hue<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random_range(0.0..360.0)
}

/// CSS color for a hue at the widget's fixed saturation and lightness.
#[must_use]
pub fn swatch_css(hue_deg: f64) -> String {
    format!("hsl({:.0}, 70%, 55%)", hue_deg.rem_euclid(360.0))
}
