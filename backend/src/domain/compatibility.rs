//! Pure compatibility scoring over aesthetic trait vectors.
//!
//! The scorer compares two [`TraitVector`]s axis by axis. Differences are not
//! penalised uniformly: the quiz's behavioural hypothesis is that social and
//! abstract-taste differences between two people are tolerable, even
//! complementary, while emotional-processing and structure-preference
//! differences matter far more. The weights below encode that hypothesis and
//! are the single place to tune it.
//!
//! All functions here are deterministic and free of I/O; the surrounding
//! service owns profile resolution and persistence.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::personality::{PersonalityCode, TraitVector};
use super::user::UserId;

/// Fraction of an axis gap that counts against the pair on axes where
/// differences are acceptable or complementary (social, abstract).
pub const DIFFERENCE_TOLERANT_WEIGHT: f64 = 0.3;

/// Fraction of an axis gap that counts against the pair on axes where
/// similarity matters (emotional, structured).
pub const SIMILARITY_CRITICAL_WEIGHT: f64 = 0.8;

/// Contribution of the social dimension to the overall score.
pub const OVERALL_WEIGHT_SOCIAL: f64 = 0.20;
/// Contribution of the artistic dimension to the overall score.
pub const OVERALL_WEIGHT_ARTISTIC: f64 = 0.20;
/// Contribution of the emotional dimension to the overall score.
pub const OVERALL_WEIGHT_EMOTIONAL: f64 = 0.35;
/// Contribution of the structural dimension to the overall score.
pub const OVERALL_WEIGHT_STRUCTURAL: f64 = 0.25;

/// Axis gap above which opposite social or abstract styles are reported as a
/// complementary pairing.
pub const COMPLEMENTARY_GAP_THRESHOLD: f64 = 60.0;

/// Axis gap below which emotional or structured styles are reported as being
/// in harmony.
pub const HARMONY_GAP_THRESHOLD: f64 = 30.0;

/// Per-dimension compatibility sub-scores, each an integer in `[0, 100]`.
///
/// The external key names diverge from the internal trait names on two axes:
/// the abstract trait is reported as `artistic` and the structured trait as
/// `structural`. That naming is part of the stored and served contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScores {
    /// Social axis sub-score.
    pub social: u8,
    /// Abstract axis sub-score, reported under the `artistic` key.
    pub artistic: u8,
    /// Emotional axis sub-score.
    pub emotional: u8,
    /// Structured axis sub-score, reported under the `structural` key.
    pub structural: u8,
}

/// Free-form quiz answers used only for shared-interest tagging.
///
/// The payload is loosely typed by design; unknown keys are ignored and every
/// field may be absent. A missing payload means "no match possible", never an
/// error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizResponses {
    /// Preferred art style, e.g. `impressionism`.
    pub favorite_art_style: Option<String>,
    /// Self-reported museum visit cadence.
    pub museum_visit_frequency: Option<String>,
    /// Colours the user gravitates towards, treated as an unordered set.
    pub preferred_colors: Vec<String>,
}

/// Unordered pair of user identifiers with a canonical ordering.
///
/// Scoring is symmetric, so `(a, b)` and `(b, a)` must address the same
/// stored score. The constructor orders the two identifiers, making the pair
/// a stable persistence key regardless of argument order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserPair {
    first: UserId,
    second: UserId,
}

impl UserPair {
    /// Build a canonically ordered pair from two identifiers.
    ///
    /// # Examples
    /// ```
    /// use sayu_backend::domain::{UserId, UserPair};
    ///
    /// let a = UserId::random();
    /// let b = UserId::random();
    /// assert_eq!(UserPair::new(a, b), UserPair::new(b, a));
    /// ```
    pub fn new(a: UserId, b: UserId) -> Self {
        if a <= b {
            Self {
                first: a,
                second: b,
            }
        } else {
            Self {
                first: b,
                second: a,
            }
        }
    }

    /// Lower identifier under canonical ordering.
    pub const fn first(&self) -> UserId {
        self.first
    }

    /// Higher identifier under canonical ordering.
    pub const fn second(&self) -> UserId {
        self.second
    }
}

/// Persisted compatibility result for a user pair.
///
/// Upserted on every scoring run for the pair; last write wins. The codes are
/// captured at calculation time so later quiz retakes do not silently change
/// the meaning of a stored score.
#[derive(Debug, Clone, PartialEq)]
pub struct CompatibilityScore {
    /// Canonically ordered pair the score belongs to.
    pub pair: UserPair,
    /// Personality code of [`UserPair::first`] at calculation time.
    pub first_code: PersonalityCode,
    /// Personality code of [`UserPair::second`] at calculation time.
    pub second_code: PersonalityCode,
    /// Overall compatibility in `[0, 100]`.
    pub overall: u8,
    /// Per-dimension sub-scores.
    pub dimensions: DimensionScores,
    /// Human-readable shared-interest tags.
    pub shared_interests: Vec<String>,
    /// Human-readable complementary-trait tags.
    pub complementary_traits: Vec<String>,
    /// When the calculation ran.
    pub calculated_at: DateTime<Utc>,
}

fn dimension_score(a: f64, b: f64, gap_weight: f64) -> u8 {
    round_to_score((a - b).abs().mul_add(-gap_weight, 100.0))
}

fn round_to_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

/// Score each axis of the two trait vectors.
///
/// Every sub-score is `100 - gap * weight`, with the tolerant weight on the
/// social and abstract axes and the critical weight on the emotional and
/// structured axes.
///
/// # Examples
/// ```
/// use sayu_backend::domain::{score_dimensions, PersonalityCode};
///
/// let a = "LAEF".parse::<PersonalityCode>().expect("valid code").traits();
/// let b = "SRMC".parse::<PersonalityCode>().expect("valid code").traits();
/// let dims = score_dimensions(&a, &b);
/// assert_eq!((dims.social, dims.emotional), (70, 20));
/// ```
pub fn score_dimensions(first: &TraitVector, second: &TraitVector) -> DimensionScores {
    DimensionScores {
        social: dimension_score(first.social, second.social, DIFFERENCE_TOLERANT_WEIGHT),
        artistic: dimension_score(
            first.abstraction,
            second.abstraction,
            DIFFERENCE_TOLERANT_WEIGHT,
        ),
        emotional: dimension_score(first.emotional, second.emotional, SIMILARITY_CRITICAL_WEIGHT),
        structural: dimension_score(
            first.structured,
            second.structured,
            SIMILARITY_CRITICAL_WEIGHT,
        ),
    }
}

/// Weighted average of the four dimension scores, rounded to an integer.
pub fn overall_score(dimensions: DimensionScores) -> u8 {
    let weighted = f64::from(dimensions.social) * OVERALL_WEIGHT_SOCIAL
        + f64::from(dimensions.artistic) * OVERALL_WEIGHT_ARTISTIC
        + f64::from(dimensions.emotional) * OVERALL_WEIGHT_EMOTIONAL
        + f64::from(dimensions.structural) * OVERALL_WEIGHT_STRUCTURAL;
    round_to_score(weighted)
}

fn both_present_and_equal(a: Option<&String>, b: Option<&String>) -> bool {
    // A field absent on both sides is "neither stated a preference", not a
    // shared one, so the comparison requires two present values.
    matches!((a, b), (Some(left), Some(right)) if left == right)
}

/// Derive shared-interest tags from two quiz response payloads.
///
/// Each check contributes at most one tag, in check order. Missing payloads
/// or fields simply produce no tag.
pub fn shared_interests(
    first: Option<&QuizResponses>,
    second: Option<&QuizResponses>,
) -> Vec<String> {
    let (Some(first), Some(second)) = (first, second) else {
        return Vec::new();
    };

    let mut tags = Vec::new();

    if both_present_and_equal(
        first.favorite_art_style.as_ref(),
        second.favorite_art_style.as_ref(),
    ) {
        tags.push("Same preferred art style".to_owned());
    }

    if both_present_and_equal(
        first.museum_visit_frequency.as_ref(),
        second.museum_visit_frequency.as_ref(),
    ) {
        tags.push("Similar museum visit frequency".to_owned());
    }

    let first_colours: BTreeSet<&String> = first.preferred_colors.iter().collect();
    let second_colours: BTreeSet<&String> = second.preferred_colors.iter().collect();
    let shared_colours = first_colours.intersection(&second_colours).count();
    if shared_colours > 0 {
        let noun = if shared_colours == 1 {
            "colour preference"
        } else {
            "colour preferences"
        };
        tags.push(format!("{shared_colours} shared {noun}"));
    }

    tags
}

/// Derive complementary-trait tags from two trait vectors.
///
/// The four checks are independent, so anywhere from zero to four tags can
/// result: wide gaps on the tolerant axes read as complementary, narrow gaps
/// on the critical axes read as harmonious.
pub fn complementary_traits(first: &TraitVector, second: &TraitVector) -> Vec<String> {
    let mut tags = Vec::new();

    if (first.social - second.social).abs() > COMPLEMENTARY_GAP_THRESHOLD {
        tags.push("Balances solo and shared viewing styles".to_owned());
    }
    if (first.abstraction - second.abstraction).abs() > COMPLEMENTARY_GAP_THRESHOLD {
        tags.push("Brings together abstract and representational tastes".to_owned());
    }
    if (first.emotional - second.emotional).abs() < HARMONY_GAP_THRESHOLD {
        tags.push("Harmonious emotional approach to art".to_owned());
    }
    if (first.structured - second.structured).abs() < HARMONY_GAP_THRESHOLD {
        tags.push("Aligned pace when moving through an exhibition".to_owned());
    }

    tags
}
