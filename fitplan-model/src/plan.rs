use std::borrow::Cow;

pub type Text = Cow<'static, str>;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exercise {
    pub name: Text,
    pub sets: Text,
    pub video: Text,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkoutPlan {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: Text,
    pub frequency: Text,
    pub duration: Text,
    pub exercises: Cow<'static, [Exercise]>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DietPlan {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: Text,
    pub meals: Text,
    pub description: Text,
}

/// Complete plan returned for a single profile.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanResult {
    pub daily_calories: i64,
    pub workout_plan: WorkoutPlan,
    pub diet_plan: DietPlan,
    pub weekly_plan: Text,
}
