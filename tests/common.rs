// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides common profile, plan, and server resource creation helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BodyRecomp
#![allow(dead_code)]

//! Shared test utilities for `recomp_coach_server`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use std::sync::{Arc, Once};

use recomp_coach_server::config::environment::{Environment, LlmConfig, LogLevel, ServerConfig};
use recomp_coach_server::llm::LlmProvider;
use recomp_coach_server::models::{
    ActivityLevel, Gender, GeneratedPlan, Goal, TrainingEnvironment, UserProfile,
};
use recomp_coach_server::server::ServerResources;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .init();
    });
}

/// The scenario profile used across tests: 25y, 80kg, 175cm, gym recomposition
pub fn sample_profile() -> UserProfile {
    UserProfile {
        age: 25,
        weight_kg: 80.0,
        height_cm: 175.0,
        gender: Gender::Male,
        activity_level: ActivityLevel::Sedentary,
        goal: Goal::Recomposition,
        environment: TrainingEnvironment::Gym,
        restrictions: String::new(),
    }
}

/// A well-formed provider plan response matching the registered shape
pub fn sample_plan_json() -> &'static str {
    r#"{
        "summary": "Plano de recomposição com déficit calórico moderado",
        "macros": {"protein": 180, "carbs": 200, "fats": 60, "calories": 2200},
        "nutritionPlan": [
            {
                "name": "Café da Manhã",
                "items": [
                    {"name": "Ovos mexidos", "quantity": "3 unidades", "calories": 210, "protein": 18, "carbs": 2, "fats": 15},
                    {"name": "Aveia", "quantity": "50g", "calories": 190, "protein": 7, "carbs": 33, "fats": 4}
                ],
                "totalCalories": 400
            },
            {
                "name": "Almoço",
                "items": [
                    {"name": "Frango grelhado", "quantity": "150g", "calories": 250, "protein": 45, "carbs": 0, "fats": 6}
                ],
                "totalCalories": 250
            }
        ],
        "workoutPlan": [
            {
                "dayName": "Dia 1",
                "focus": "Superiores",
                "warmup": "5 min de esteira e mobilidade de ombros",
                "exercises": [
                    {"name": "Supino reto", "sets": 4, "reps": "8-12", "notes": "Cadência controlada"},
                    {"name": "Remada curvada", "sets": 4, "reps": "8-12", "notes": "Coluna neutra"}
                ],
                "cardio": "15 min moderado"
            }
        ]
    }"#
}

/// Parsed version of [`sample_plan_json`]
pub fn sample_plan() -> GeneratedPlan {
    serde_json::from_str(sample_plan_json()).expect("sample plan JSON must parse")
}

fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_owned(),
        http_port: 0,
        log_level: LogLevel::Warn,
        environment: Environment::Testing,
        request_timeout_secs: 5,
        llm: LlmConfig { model: None },
    }
}

/// Build server resources around an optional injected provider
pub fn test_resources(provider: Option<Arc<dyn LlmProvider>>) -> Arc<ServerResources> {
    init_test_logging();
    Arc::new(ServerResources::new(test_config(), provider))
}
