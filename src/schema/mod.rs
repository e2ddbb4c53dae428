// ABOUTME: Declarative response shapes for Gemini structured generation
// ABOUTME: Single source of truth for the JSON shape a plan response must satisfy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BodyRecomp

//! # Schema Registry
//!
//! Machine-checkable shapes for every entity the provider must return,
//! expressed in the Gemini `responseSchema` dialect (uppercase type tags,
//! per-field descriptions, explicit `required` lists).
//!
//! The registry serves the outbound request: it is attached as the
//! response-format constraint on every structured call. Inbound validation
//! is enforced by typed deserialization into [`crate::models`], which
//! rejects any response that omits a required field or misuses a type.
//!
//! All operations are pure and stateless.

use serde_json::{json, Value};

/// Entity kinds with a registered response shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// Daily macronutrient targets
    MacroTarget,
    /// A single food item within a meal
    MealItem,
    /// A meal with ordered items and a calorie total
    Meal,
    /// A single exercise prescription
    Exercise,
    /// One training day
    WorkoutSession,
    /// The complete top-level plan
    Plan,
}

/// Return the Gemini response schema for an entity kind
///
/// The plan shape composes the nested shapes as arrays of objects, never
/// flattened.
#[must_use]
pub fn shape_for(kind: EntityKind) -> Value {
    match kind {
        EntityKind::MacroTarget => macro_target_shape(),
        EntityKind::MealItem => meal_item_shape(),
        EntityKind::Meal => meal_shape(),
        EntityKind::Exercise => exercise_shape(),
        EntityKind::WorkoutSession => workout_session_shape(),
        EntityKind::Plan => plan_shape(),
    }
}

fn macro_target_shape() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "protein": {
                "type": "INTEGER",
                "description": "Meta diária de proteína em gramas"
            },
            "carbs": {
                "type": "INTEGER",
                "description": "Meta diária de carboidratos em gramas"
            },
            "fats": {
                "type": "INTEGER",
                "description": "Meta diária de gorduras em gramas"
            },
            "calories": {
                "type": "INTEGER",
                "description": "Meta calórica diária total"
            }
        },
        "required": ["protein", "carbs", "fats", "calories"]
    })
}

fn meal_item_shape() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": {
                "type": "STRING",
                "description": "Nome do alimento"
            },
            "quantity": {
                "type": "STRING",
                "description": "Quantidade, ex: '150g' ou '2 unidades'"
            },
            "calories": {
                "type": "INTEGER",
                "description": "Calorias deste item"
            },
            "protein": {
                "type": "INTEGER",
                "description": "Proteína em gramas"
            },
            "carbs": {
                "type": "INTEGER",
                "description": "Carboidratos em gramas"
            },
            "fats": {
                "type": "INTEGER",
                "description": "Gorduras em gramas"
            }
        },
        "required": ["name", "quantity", "calories", "protein", "carbs", "fats"]
    })
}

fn meal_shape() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": {
                "type": "STRING",
                "description": "Nome da refeição, ex: 'Café da Manhã'"
            },
            "items": {
                "type": "ARRAY",
                "description": "Alimentos desta refeição, em ordem",
                "items": meal_item_shape()
            },
            "totalCalories": {
                "type": "INTEGER",
                "description": "Total de calorias da refeição"
            }
        },
        "required": ["name", "items", "totalCalories"]
    })
}

fn exercise_shape() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": {
                "type": "STRING",
                "description": "Nome do exercício"
            },
            "sets": {
                "type": "INTEGER",
                "description": "Número de séries"
            },
            "reps": {
                "type": "STRING",
                "description": "Repetições, pode ser uma faixa como '8-12'"
            },
            "notes": {
                "type": "STRING",
                "description": "Observações de execução"
            }
        },
        "required": ["name", "sets", "reps", "notes"]
    })
}

fn workout_session_shape() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "dayName": {
                "type": "STRING",
                "description": "Identificação do dia, ex: 'Dia 1'"
            },
            "focus": {
                "type": "STRING",
                "description": "Foco da sessão, ex: 'Superiores' ou 'Pernas'"
            },
            "warmup": {
                "type": "STRING",
                "description": "Aquecimento recomendado"
            },
            "exercises": {
                "type": "ARRAY",
                "description": "Exercícios da sessão, em ordem",
                "items": exercise_shape()
            },
            "cardio": {
                "type": "STRING",
                "description": "Cardio ao final da sessão, se houver"
            }
        },
        "required": ["dayName", "focus", "warmup", "exercises", "cardio"]
    })
}

fn plan_shape() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": {
                "type": "STRING",
                "description": "Resumo motivacional da estratégia do plano"
            },
            "macros": macro_target_shape(),
            "nutritionPlan": {
                "type": "ARRAY",
                "description": "Plano alimentar diário, refeições em ordem",
                "items": meal_shape()
            },
            "workoutPlan": {
                "type": "ARRAY",
                "description": "Sessões de treino da semana, em ordem",
                "items": workout_session_shape()
            }
        },
        "required": ["summary", "macros", "nutritionPlan", "workoutPlan"]
    })
}
