// ABOUTME: Generated plan models - macro targets, meal plan, and workout sessions
// ABOUTME: Deserialized atomically from one provider response; partial plans never survive
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BodyRecomp

use serde::{Deserialize, Serialize};

/// Daily macronutrient targets
///
/// Calories are provider-asserted. The 4p + 4c + 9f relationship is a
/// display-time approximation, not a stored invariant, and is never
/// recomputed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTarget {
    /// Daily protein target in grams
    #[serde(rename = "protein")]
    pub protein_g: u32,
    /// Daily carbohydrate target in grams
    #[serde(rename = "carbs")]
    pub carbs_g: u32,
    /// Daily fat target in grams
    #[serde(rename = "fats")]
    pub fats_g: u32,
    /// Daily calorie target
    pub calories: u32,
}

/// A single food item within a meal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealItem {
    /// Food name
    pub name: String,
    /// Quantity description (e.g. "150g", "2 unidades")
    pub quantity: String,
    /// Calories for this item
    pub calories: u32,
    /// Protein in grams
    pub protein: u32,
    /// Carbohydrates in grams
    pub carbs: u32,
    /// Fat in grams
    pub fats: u32,
}

/// A meal with its ordered items and a provider-supplied calorie total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    /// Meal name (e.g. "Café da Manhã", "Almoço")
    pub name: String,
    /// Ordered food items
    pub items: Vec<MealItem>,
    /// Total calories as asserted by the provider, not recomputed
    #[serde(rename = "totalCalories")]
    pub total_calories: u32,
}

/// A single exercise prescription
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// Number of sets
    pub sets: u32,
    /// Repetitions; a string because the provider prescribes ranges like "8-12"
    pub reps: String,
    /// Execution notes
    pub notes: String,
}

/// One training day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutSession {
    /// Day label (e.g. "Dia 1", "Segunda-feira")
    #[serde(rename = "dayName")]
    pub day_name: String,
    /// Session focus (e.g. "Superiores", "Pernas")
    pub focus: String,
    /// Warmup description
    pub warmup: String,
    /// Ordered exercise prescriptions
    pub exercises: Vec<Exercise>,
    /// Optional cardio finisher description
    pub cardio: String,
}

/// The complete plan returned for one user profile
///
/// Created atomically from a single provider response. A parse failure
/// discards the whole object; the plan is superseded wholesale when the
/// user restarts onboarding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPlan {
    /// Short motivational summary of the strategy
    pub summary: String,
    /// Daily macro targets
    pub macros: MacroTarget,
    /// Ordered meal plan
    #[serde(rename = "nutritionPlan")]
    pub nutrition_plan: Vec<Meal>,
    /// Ordered workout sessions
    #[serde(rename = "workoutPlan")]
    pub workout_plan: Vec<WorkoutSession>,
}
