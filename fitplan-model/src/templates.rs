use std::borrow::Cow;

use crate::plan::{DietPlan, Exercise, WorkoutPlan};
use crate::profile::FitnessGoal;

/// Split shared by every goal.
pub const WEEKLY_PLAN: &str = "Monday: Upper Body, Tuesday: Lower Body, Wednesday: Rest/Cardio, Thursday: Full Body, Friday: Active Recovery, Sat/Sun: Rest";

macro_rules! exercise {
    ($name:tt, $sets:tt, $query:tt) => {
        Exercise {
            name: Cow::Borrowed($name),
            sets: Cow::Borrowed($sets),
            video: Cow::Borrowed(concat!(
                "https://www.youtube.com/results?search_query=",
                $query
            )),
        }
    };
}

pub struct PlanTemplate {
    pub workout: WorkoutPlan,
    pub diet: DietPlan,
}

impl PlanTemplate {
    /// Template for a goal. Anything but weight loss or muscle gain gets the
    /// balanced template.
    pub fn for_goal(goal: &FitnessGoal) -> &'static PlanTemplate {
        match goal.canonical() {
            FitnessGoal::WeightLoss => &WEIGHT_LOSS,
            FitnessGoal::MuscleGain => &MUSCLE_GAIN,
            FitnessGoal::Other(_) => &BALANCED,
        }
    }
}

static WEIGHT_LOSS_EXERCISES: [Exercise; 4] = [
    exercise!("Burpees", "3x15", "how+to+do+burpees"),
    exercise!("Mountain Climbers", "3x45s", "mountain+climbers+exercise"),
    exercise!("Jump Rope", "10 mins", "jump+rope+workout"),
    exercise!("High Knees", "3x30s", "high+knees+exercise"),
];

static MUSCLE_GAIN_EXERCISES: [Exercise; 4] = [
    exercise!("Bench Press", "4x8-12", "bench+press+form"),
    exercise!("Squats", "4x8-12", "barbell+squat+form"),
    exercise!("Deadlifts", "3x5-8", "deadlift+form"),
    exercise!("Overhead Press", "3x8-12", "overhead+press+form"),
];

static BALANCED_EXERCISES: [Exercise; 4] = [
    exercise!("Push-ups", "3x12", "push+ups+form"),
    exercise!("Lunges", "3x12/leg", "lunges+exercise"),
    exercise!("Plank", "3x60s", "plank+exercise"),
    exercise!("Bodyweight Squats", "3x20", "bodyweight+squats"),
];

pub static WEIGHT_LOSS: PlanTemplate = PlanTemplate {
    workout: WorkoutPlan {
        kind: Cow::Borrowed("Cardio + HIIT"),
        frequency: Cow::Borrowed("5 days/week"),
        duration: Cow::Borrowed("45-60 mins"),
        exercises: Cow::Borrowed(&WEIGHT_LOSS_EXERCISES),
    },
    diet: DietPlan {
        kind: Cow::Borrowed("High Protein, Low Carbs"),
        meals: Cow::Borrowed("3 main meals + 2 snacks"),
        description: Cow::Borrowed("Focus on lean proteins (chicken, fish, tofu) and leafy greens. Minimize sugar and refined carbs."),
    },
};

pub static MUSCLE_GAIN: PlanTemplate = PlanTemplate {
    workout: WorkoutPlan {
        kind: Cow::Borrowed("Strength Training"),
        frequency: Cow::Borrowed("5-6 days/week"),
        duration: Cow::Borrowed("60-90 mins"),
        exercises: Cow::Borrowed(&MUSCLE_GAIN_EXERCISES),
    },
    diet: DietPlan {
        kind: Cow::Borrowed("High Protein, Moderate Carbs"),
        meals: Cow::Borrowed("4-5 meals"),
        description: Cow::Borrowed(
            "Eat in a surplus. Prioritize protein with every meal. Carbs around workouts.",
        ),
    },
};

pub static BALANCED: PlanTemplate = PlanTemplate {
    workout: WorkoutPlan {
        kind: Cow::Borrowed("Balanced Mix"),
        frequency: Cow::Borrowed("3-4 days/week"),
        duration: Cow::Borrowed("45 mins"),
        exercises: Cow::Borrowed(&BALANCED_EXERCISES),
    },
    diet: DietPlan {
        kind: Cow::Borrowed("Balanced Diet"),
        meals: Cow::Borrowed("3 main meals"),
        description: Cow::Borrowed("Eat a variety of foods. Focus on whole grains, fruits, vegetables, and lean proteins."),
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Categorical;

    #[test]
    fn every_template_has_four_exercises() {
        for (i, template) in [&WEIGHT_LOSS, &MUSCLE_GAIN, &BALANCED].into_iter().enumerate() {
            assert_eq!(template.workout.exercises.len(), 4, "Test case #{}", i);
            for exercise in template.workout.exercises.iter() {
                assert!(
                    exercise
                        .video
                        .starts_with("https://www.youtube.com/results?search_query="),
                    "Test case #{}",
                    i
                );
            }
        }
    }

    #[test]
    fn template_selection() {
        let test_data = [
            (FitnessGoal::WeightLoss, "Cardio + HIIT", "High Protein, Low Carbs"),
            (FitnessGoal::MuscleGain, "Strength Training", "High Protein, Moderate Carbs"),
            (FitnessGoal::from_value("endurance"), "Balanced Mix", "Balanced Diet"),
            (FitnessGoal::from_value(""), "Balanced Mix", "Balanced Diet"),
            (FitnessGoal::from_value("Weight_Loss"), "Balanced Mix", "Balanced Diet"),
        ];

        for (i, (goal, workout, diet)) in test_data.into_iter().enumerate() {
            let template = PlanTemplate::for_goal(&goal);
            assert_eq!(template.workout.kind, workout, "Test case #{}", i);
            assert_eq!(template.diet.kind, diet, "Test case #{}", i);
        }
    }

    #[test]
    fn exercise_urls_are_complete() {
        assert_eq!(
            BALANCED.workout.exercises[1],
            Exercise {
                name: "Lunges".into(),
                sets: "3x12/leg".into(),
                video: "https://www.youtube.com/results?search_query=lunges+exercise".into(),
            }
        );
    }
}
