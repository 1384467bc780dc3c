//! Min-max rescale of raw skill counts into the 0 – 10 range.

use crate::analysis::skills::SkillScores;

pub const SCALE_MAX: f64 = 10.0;

/// Rescales all raw scores jointly: `v * scale - min * scale` with
/// `scale = 10 / (max - min)`, rounded to two decimals (ties to even).
/// Entries that do not end up strictly positive are dropped, so the minimum-scoring
/// skills always disappear.
///
/// When every raw score is equal the range is zero and every entry scales to 0,
/// which leaves an empty result.
pub fn normalize_skills(raw: &SkillScores) -> SkillScores {
    let Some((min, max)) = bounds(raw) else {
        return SkillScores::new();
    };
    // A zero range is treated as unit range, which maps every entry to 0.
    let range = if max > min { max - min } else { 1.0 };
    let scale = SCALE_MAX / range;
    let offset = -min * scale;

    raw.iter()
        .filter_map(|(skill, value)| {
            let scaled = round2(value * scale + offset);
            (scaled > 0.0).then_some((skill, scaled))
        })
        .collect()
}

fn bounds(scores: &SkillScores) -> Option<(f64, f64)> {
    scores.iter().fold(None, |acc, (_, v)| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Rounds to two decimal places, halves going to the even neighbour.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
