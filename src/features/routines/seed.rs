//! Starter routines inserted into an empty catalog.

use super::types::{Difficulty, Exercise, Routine, RoutineDefinition, RoutineExercise};

fn exercise(
    id: &str,
    name: &str,
    category: &str,
    difficulty: Difficulty,
    muscles: &[&str],
    calories_per_minute: f64,
) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{name} exercise"),
        category: category.to_string(),
        difficulty,
        muscles_worked: muscles.iter().map(ToString::to_string).collect(),
        calories_per_minute: Some(calories_per_minute),
    }
}

fn slot(exercise: Exercise, order_index: u32, reps: u32) -> RoutineExercise {
    RoutineExercise {
        exercise,
        order_index,
        sets: 3,
        reps: Some(reps),
        duration_seconds: Some(45),
        rest_seconds: 30,
    }
}

/// The starter routines.
#[must_use]
pub fn builtin_routines() -> Vec<RoutineDefinition> {
    let push_up = exercise(
        "push-up",
        "Push Up",
        "strength",
        Difficulty::Beginner,
        &["chest", "triceps"],
        8.0,
    );
    let squat = exercise(
        "squat",
        "Squat",
        "strength",
        Difficulty::Beginner,
        &["legs", "glutes"],
        7.0,
    );
    let lunges = exercise(
        "lunges",
        "Lunges",
        "strength",
        Difficulty::Intermediate,
        &["legs", "glutes"],
        7.0,
    );
    let plank = exercise(
        "plank",
        "Plank",
        "core",
        Difficulty::Beginner,
        &["abs", "back"],
        6.0,
    );

    let mut routines = vec![
        RoutineDefinition {
            routine: Routine {
                id: "full-body".to_string(),
                name: "Full Body Basics".to_string(),
                description: "Push-ups and squats for an all-round session".to_string(),
                difficulty: Difficulty::Beginner,
                category: "strength".to_string(),
                estimated_minutes: 0,
            },
            exercises: vec![slot(push_up, 0, 10), slot(squat, 1, 12)],
        },
        RoutineDefinition {
            routine: Routine {
                id: "legs-core".to_string(),
                name: "Legs & Core".to_string(),
                description: "Lunges and planks for lower body and trunk".to_string(),
                difficulty: Difficulty::Intermediate,
                category: "strength".to_string(),
                estimated_minutes: 0,
            },
            exercises: vec![slot(lunges, 0, 10), slot(plank, 1, 30)],
        },
    ];

    for routine in &mut routines {
        // Static data; validation only fills in the estimate.
        if let Err(e) = routine.validate() {
            tracing::warn!(routine = %routine.routine.id, "built-in routine invalid: {e}");
        }
    }

    routines
}
