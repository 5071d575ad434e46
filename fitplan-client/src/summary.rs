use fitplan_model::{plan::PlanResult, profile::Profile};
use itertools::Itertools;
use log::info;

use crate::client::{Client, Result};

/// Human readable rendering of a plan, one section per part.
pub fn render(plan: &PlanResult) -> String {
    let exercises = plan
        .workout_plan
        .exercises
        .iter()
        .map(|e| format!("  - {} ({}): {}", e.name, e.sets, e.video))
        .join("\n");

    format!(
        "Daily calories: {} kcal\n\
         Workout: {}, {}, {}\n\
         {}\n\
         Diet: {} ({})\n  {}\n\
         Week: {}",
        plan.daily_calories,
        plan.workout_plan.kind,
        plan.workout_plan.frequency,
        plan.workout_plan.duration,
        exercises,
        plan.diet_plan.kind,
        plan.diet_plan.meals,
        plan.diet_plan.description,
        plan.weekly_plan,
    )
}

pub async fn request_summary(client: &dyn Client, profile: &Profile) -> Result<String> {
    info!(
        "Requesting {} plan for {} activity level",
        profile.fitness_goal, profile.activity_level
    );
    let plan = client.predict(profile).await?;
    info!("Received plan with {} kcal", plan.daily_calories);
    Ok(render(&plan))
}
