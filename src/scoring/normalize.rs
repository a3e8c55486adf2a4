use anyhow::Result;

use crate::candidate::AttributeValue;

use super::standards::{AttributeStandard, Reference, ScoreMode};

/// Base score anchoring the neutral point. A value at the reference (or at
/// min, depending on mode) scores here; everything else scales in the
/// remaining headroom toward 1.0.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Division guard: `None` when the denominator is zero, so the caller can
/// fall back to the neutral score instead of producing inf/NaN.
fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator)
    }
}

/// Normalize one raw value into a unit-interval suitability score.
///
/// Numeric faults never abort a score calculation: a zero denominator, a
/// non-numeric value in a numeric mode, or a missing numeric reference for
/// ABOVE/BELOW all return the neutral score. The only errors are genuine
/// configuration mistakes: a TOLERANCE standard without a reference or
/// without a tolerance band.
///
/// ABOVE and BELOW are deliberately not clamped; values outside [min, max]
/// can score above 1.0 or below 0.0.
pub fn normalize(value: &AttributeValue, standard: &AttributeStandard) -> Result<f64> {
    let bs = NEUTRAL_SCORE;

    if standard.mode == ScoreMode::Match {
        let matched = match (value, standard.reference) {
            (AttributeValue::Text(v), Some(Reference::Text(r))) => v.as_str() == r,
            (AttributeValue::Number(v), Some(Reference::Numeric(r))) => *v == r,
            _ => false,
        };
        return Ok(if matched { 1.0 } else { 0.0 });
    }

    if standard.mode == ScoreMode::Tolerance {
        let reference = match standard.reference.and_then(|r| r.as_numeric()) {
            Some(r) => r,
            None => anyhow::bail!(
                "tolerance mode requires a reference value for '{}'",
                standard.key
            ),
        };
        let band = match standard.tolerance {
            Some(t) => t,
            None => anyhow::bail!(
                "tolerance mode requires a tolerance band for '{}'",
                standard.key
            ),
        };
        let Some(v) = value.as_number() else {
            return Ok(bs);
        };
        return Ok(match ratio((v - reference).abs(), band) {
            Some(r) => (1.0 - r).max(0.0),
            None => bs,
        });
    }

    // Remaining modes are purely numeric; a categorical value here is a
    // malformed attribute and scores neutral.
    let Some(v) = value.as_number() else {
        return Ok(bs);
    };
    let (min, max) = (standard.min, standard.max);

    let score = match standard.mode {
        ScoreMode::Above => {
            let Some(reference) = standard.reference.and_then(|r| r.as_numeric()) else {
                return Ok(bs);
            };
            if v >= reference {
                ratio(v - reference, max - reference).map(|r| bs + r * (1.0 - bs))
            } else {
                ratio((v - reference).abs(), reference - min)
                    .map(|r| bs + (1.0 - r) * (1.0 - bs))
            }
        }
        ScoreMode::Below => {
            let Some(reference) = standard.reference.and_then(|r| r.as_numeric()) else {
                return Ok(bs);
            };
            if v <= reference {
                ratio(reference - v, reference - min).map(|r| bs + r * (1.0 - bs))
            } else {
                ratio(max - v, max - reference).map(|r| bs + r * (1.0 - bs))
            }
        }
        ScoreMode::Range => ratio(v - min, max - min).map(|r| bs + r * (1.0 - bs)),
        ScoreMode::ReverseRange => ratio(max - v, max - min).map(|r| bs + r * (1.0 - bs)),
        ScoreMode::Match | ScoreMode::Tolerance => unreachable!("handled above"),
    };

    Ok(score.unwrap_or(bs))
}
