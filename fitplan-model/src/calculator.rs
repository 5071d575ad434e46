//! Calorie target and plan selection.
//!
//! BMR follows the Mifflin-St Jeor equation:
//! `10 * weight + 6.25 * height - 5 * age + s`, with `s = 5` for men and
//! `s = -161` otherwise.

use crate::plan::PlanResult;
use crate::profile::{ActivityLevel, FitnessGoal, Gender, Profile};
use crate::templates::{PlanTemplate, WEEKLY_PLAN};

const MALE_CONSTANT: f64 = 5.0;
const OTHER_CONSTANT: f64 = -161.0;
const GOAL_OFFSET: f64 = 500.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    #[error("daily calories {0} do not fit a whole number of kcal")]
    CaloriesOutOfRange(f64),
}

pub fn compute_bmr(age: f64, gender: &Gender, height: f64, weight: f64) -> f64 {
    let constant = match gender.canonical() {
        Gender::Male => MALE_CONSTANT,
        Gender::Other(_) => OTHER_CONSTANT,
    };
    10.0 * weight + 6.25 * height - 5.0 * age + constant
}

/// Unrecognized levels use the sedentary multiplier.
pub fn activity_multiplier(activity_level: &ActivityLevel) -> f64 {
    match activity_level.canonical() {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::LightlyActive => 1.375,
        ActivityLevel::ModeratelyActive => 1.55,
        ActivityLevel::VeryActive => 1.725,
        ActivityLevel::ExtraActive => 1.9,
        ActivityLevel::Other(_) => 1.2,
    }
}

pub fn calorie_offset(fitness_goal: &FitnessGoal) -> f64 {
    match fitness_goal.canonical() {
        FitnessGoal::WeightLoss => -GOAL_OFFSET,
        FitnessGoal::MuscleGain => GOAL_OFFSET,
        FitnessGoal::Other(_) => 0.0,
    }
}

pub fn tdee(profile: &Profile) -> f64 {
    compute_bmr(
        profile.age,
        &profile.gender,
        profile.height,
        profile.weight,
    ) * activity_multiplier(&profile.activity_level)
}

fn round_calories(daily_calories: f64) -> Result<i64, PlanError> {
    let rounded = daily_calories.round_ties_even();
    // i64::MAX as f64 is 2^63, one past the largest i64
    if rounded.is_finite() && rounded >= i64::MIN as f64 && rounded < i64::MAX as f64 {
        Ok(rounded as i64)
    } else {
        Err(PlanError::CaloriesOutOfRange(daily_calories))
    }
}

/// Computes the plan for a profile. The goal offset is applied before
/// rounding, and ties round to even. Fails when the calorie target is not
/// finite or does not fit an `i64`.
pub fn predict_plan(profile: &Profile) -> Result<PlanResult, PlanError> {
    let daily_calories = tdee(profile) + calorie_offset(&profile.fitness_goal);
    let template = PlanTemplate::for_goal(&profile.fitness_goal);

    Ok(PlanResult {
        daily_calories: round_calories(daily_calories)?,
        workout_plan: template.workout.clone(),
        diet_plan: template.diet.clone(),
        weekly_plan: WEEKLY_PLAN.into(),
    })
}
