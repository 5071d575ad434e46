use std::fmt;

use strum::EnumString;

/// Gender as used by the Mifflin-St Jeor equation. Only `male` has its own
/// branch, any other value is kept verbatim in `Other`.
///
/// Build values with `Categorical::from_value`. Lookups go through
/// `canonical`, so a hand-built `Other("male")` still counts as male.
#[derive(Debug, Clone, PartialEq, Eq, EnumString)]
#[cfg_attr(
    feature = "serde",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
#[strum(serialize_all = "snake_case")]
pub enum Gender {
    Male,
    #[strum(default)]
    Other(String),
}

impl Gender {
    pub fn as_str(&self) -> &str {
        match self {
            Gender::Male => "male",
            Gender::Other(s) => s,
        }
    }
}

/// Goals other than weight loss and muscle gain get the balanced plan.
#[derive(Debug, Clone, PartialEq, Eq, EnumString)]
#[cfg_attr(
    feature = "serde",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
#[strum(serialize_all = "snake_case")]
pub enum FitnessGoal {
    WeightLoss,
    MuscleGain,
    #[strum(default)]
    Other(String),
}

impl FitnessGoal {
    pub fn as_str(&self) -> &str {
        match self {
            FitnessGoal::WeightLoss => "weight_loss",
            FitnessGoal::MuscleGain => "muscle_gain",
            FitnessGoal::Other(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, EnumString)]
#[cfg_attr(
    feature = "serde",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
#[strum(serialize_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
    #[strum(default)]
    Other(String),
}

impl ActivityLevel {
    pub fn as_str(&self) -> &str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::ExtraActive => "extra_active",
            ActivityLevel::Other(s) => s,
        }
    }
}

/// Categorical input where any string maps to a variant, unrecognized ones
/// to `Other`.
pub trait Categorical: Sized {
    fn from_value(value: &str) -> Self;
}

macro_rules! impl_categorical {
    ($($t:ty),*) => {
        $(
            impl fmt::Display for $t {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl $t {
                /// Re-parses the value, so `Other` holding a recognized
                /// string becomes the matching variant.
                pub fn canonical(&self) -> Self {
                    Self::from_value(self.as_str())
                }
            }

            impl Categorical for $t {
                fn from_value(value: &str) -> Self {
                    value
                        .parse()
                        .unwrap_or_else(|_| Self::Other(value.to_owned()))
                }
            }
        )*
    };
}

impl_categorical!(Gender, FitnessGoal, ActivityLevel);

/// Biometric inputs and preferences a plan is computed from.
/// Age in years, height in centimeters, weight in kilograms.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Profile {
    pub age: f64,
    pub gender: Gender,
    pub height: f64,
    pub weight: f64,
    pub fitness_goal: FitnessGoal,
    pub activity_level: ActivityLevel,
}

impl Profile {
    pub fn new(
        age: f64,
        gender: Gender,
        height: f64,
        weight: f64,
        fitness_goal: FitnessGoal,
        activity_level: ActivityLevel,
    ) -> Self {
        Self {
            age,
            gender,
            height,
            weight,
            fitness_goal,
            activity_level,
        }
    }
}
