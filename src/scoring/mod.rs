pub mod compare;
pub mod engine;
pub mod normalize;
pub mod sensitivity;
pub mod standards;
pub mod validation;
pub mod weights;

pub use compare::{compare_candidates, ComparisonResult};
pub use engine::{calculate_score, score_grade, ScoreResult};
pub use normalize::{normalize, NEUTRAL_SCORE};
pub use sensitivity::{analyze_sensitivity, SensitivityResult};
pub use standards::{standard_for, AttributeStandard, ScoreMode, STANDARDS};
pub use validation::{validate_candidate, validate_weights};
pub use weights::{builtin_scenarios, default_weights, WeightProfile, BASELINE_SCENARIO};
