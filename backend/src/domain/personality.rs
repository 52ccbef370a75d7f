//! Aesthetic personality codes and their numeric trait encoding.
//!
//! A personality code is a four-letter categorical summary assigned at quiz
//! completion. Each position is one of two letters covering an independent
//! axis:
//!
//! | Position | Axis       | Letters            |
//! |----------|------------|--------------------|
//! | 1        | Social     | `L` lone, `S` social |
//! | 2        | Abstract   | `R` representational, `A` abstract |
//! | 3        | Emotional  | `M` meaning-driven, `E` emotion-driven |
//! | 4        | Structured | `F` flowing, `C` constructive |
//!
//! Scoring never works on letters directly; each code is expanded into a
//! [`TraitVector`] whose axes sit at either end of a 0–100 scale.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Numeric value of the low letter on every axis.
pub const AXIS_LOW: f64 = 0.0;
/// Numeric value of the high letter on every axis.
pub const AXIS_HIGH: f64 = 100.0;

/// Social axis: does the user prefer viewing art alone or together?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocialStyle {
    /// `L` — prefers solo viewing.
    Lone,
    /// `S` — prefers shared viewing.
    Social,
}

/// Abstract axis: representational versus abstract taste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbstractStyle {
    /// `R` — drawn to representational work.
    Representational,
    /// `A` — drawn to abstract work.
    Abstract,
}

/// Emotional axis: meaning-driven versus emotion-driven engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmotionalStyle {
    /// `M` — engages through meaning and context.
    MeaningDriven,
    /// `E` — engages through immediate emotion.
    EmotionDriven,
}

/// Structured axis: free-flowing versus constructive viewing habits.
///
/// The quiz encodes this axis with `C` at the high end, unlike the other
/// three where the second letter of the pair is high. The numeric mapping
/// preserves that original convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructuredStyle {
    /// `F` — wanders freely through an exhibition.
    Flowing,
    /// `C` — follows a deliberate, structured route.
    Constructive,
}

/// Errors raised when parsing a personality code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersonalityCodeError {
    /// Codes are exactly four letters.
    #[error("personality code must be exactly 4 letters, got {length}")]
    WrongLength {
        /// Number of characters in the rejected input.
        length: usize,
    },
    /// A position held a letter outside its axis alphabet.
    #[error("invalid letter '{letter}' at position {position} of personality code")]
    InvalidLetter {
        /// One-based position of the offending character.
        position: usize,
        /// The rejected character.
        letter: char,
    },
}

/// A validated four-letter aesthetic personality code.
///
/// Immutable once constructed; assigned to a profile at quiz completion and
/// only ever read afterwards.
///
/// # Examples
/// ```
/// use sayu_backend::domain::PersonalityCode;
///
/// let code: PersonalityCode = "LAEF".parse().expect("valid code");
/// assert_eq!(code.to_string(), "LAEF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonalityCode {
    social: SocialStyle,
    abstract_style: AbstractStyle,
    emotional: EmotionalStyle,
    structured: StructuredStyle,
}

impl PersonalityCode {
    /// Assemble a code from its four axis values.
    pub const fn new(
        social: SocialStyle,
        abstract_style: AbstractStyle,
        emotional: EmotionalStyle,
        structured: StructuredStyle,
    ) -> Self {
        Self {
            social,
            abstract_style,
            emotional,
            structured,
        }
    }

    /// Social axis value.
    pub const fn social(&self) -> SocialStyle {
        self.social
    }

    /// Abstract axis value.
    pub const fn abstract_style(&self) -> AbstractStyle {
        self.abstract_style
    }

    /// Emotional axis value.
    pub const fn emotional(&self) -> EmotionalStyle {
        self.emotional
    }

    /// Structured axis value.
    pub const fn structured(&self) -> StructuredStyle {
        self.structured
    }

    /// Expand the code into its numeric trait vector.
    ///
    /// # Examples
    /// ```
    /// use sayu_backend::domain::PersonalityCode;
    ///
    /// let traits = "LAEF".parse::<PersonalityCode>().expect("valid").traits();
    /// assert_eq!(traits.social, 0.0);
    /// assert_eq!(traits.abstraction, 100.0);
    /// ```
    pub const fn traits(&self) -> TraitVector {
        TraitVector {
            social: match self.social {
                SocialStyle::Lone => AXIS_LOW,
                SocialStyle::Social => AXIS_HIGH,
            },
            abstraction: match self.abstract_style {
                AbstractStyle::Representational => AXIS_LOW,
                AbstractStyle::Abstract => AXIS_HIGH,
            },
            emotional: match self.emotional {
                EmotionalStyle::MeaningDriven => AXIS_LOW,
                EmotionalStyle::EmotionDriven => AXIS_HIGH,
            },
            structured: match self.structured {
                StructuredStyle::Flowing => AXIS_LOW,
                StructuredStyle::Constructive => AXIS_HIGH,
            },
        }
    }
}

impl std::str::FromStr for PersonalityCode {
    type Err = PersonalityCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut letters = s.chars();
        let (Some(first), Some(second), Some(third), Some(fourth), None) = (
            letters.next(),
            letters.next(),
            letters.next(),
            letters.next(),
            letters.next(),
        ) else {
            return Err(PersonalityCodeError::WrongLength {
                length: s.chars().count(),
            });
        };

        let social = match first {
            'L' => SocialStyle::Lone,
            'S' => SocialStyle::Social,
            letter => {
                return Err(PersonalityCodeError::InvalidLetter {
                    position: 1,
                    letter,
                });
            }
        };
        let abstract_style = match second {
            'R' => AbstractStyle::Representational,
            'A' => AbstractStyle::Abstract,
            letter => {
                return Err(PersonalityCodeError::InvalidLetter {
                    position: 2,
                    letter,
                });
            }
        };
        let emotional = match third {
            'M' => EmotionalStyle::MeaningDriven,
            'E' => EmotionalStyle::EmotionDriven,
            letter => {
                return Err(PersonalityCodeError::InvalidLetter {
                    position: 3,
                    letter,
                });
            }
        };
        let structured = match fourth {
            'F' => StructuredStyle::Flowing,
            'C' => StructuredStyle::Constructive,
            letter => {
                return Err(PersonalityCodeError::InvalidLetter {
                    position: 4,
                    letter,
                });
            }
        };

        Ok(Self::new(social, abstract_style, emotional, structured))
    }
}

impl std::fmt::Display for PersonalityCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letters = [
            match self.social {
                SocialStyle::Lone => 'L',
                SocialStyle::Social => 'S',
            },
            match self.abstract_style {
                AbstractStyle::Representational => 'R',
                AbstractStyle::Abstract => 'A',
            },
            match self.emotional {
                EmotionalStyle::MeaningDriven => 'M',
                EmotionalStyle::EmotionDriven => 'E',
            },
            match self.structured {
                StructuredStyle::Flowing => 'F',
                StructuredStyle::Constructive => 'C',
            },
        ];
        for letter in letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl TryFrom<String> for PersonalityCode {
    type Error = PersonalityCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PersonalityCode> for String {
    fn from(value: PersonalityCode) -> Self {
        value.to_string()
    }
}

/// Ephemeral numeric encoding of a [`PersonalityCode`].
///
/// Each axis sits at [`AXIS_LOW`] or [`AXIS_HIGH`]; the vector exists only
/// for the duration of a scoring computation and is never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraitVector {
    /// Social axis value.
    pub social: f64,
    /// Abstract axis value.
    pub abstraction: f64,
    /// Emotional axis value.
    pub emotional: f64,
    /// Structured axis value.
    pub structured: f64,
}
