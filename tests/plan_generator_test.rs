// ABOUTME: Integration tests for the plan generation client
// ABOUTME: Verifies prompt content, schema attachment, temperature, and response parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BodyRecomp

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use std::sync::Arc;

use common::{init_test_logging, sample_plan_json, sample_profile};
use helpers::stub_provider::StubProvider;
use recomp_coach_server::errors::ErrorCode;
use recomp_coach_server::plan::{PlanGenerator, NO_RESTRICTIONS_PLACEHOLDER, PLAN_TEMPERATURE};
use recomp_coach_server::schema::{shape_for, EntityKind};

#[tokio::test]
async fn test_generate_parses_valid_plan() {
    init_test_logging();
    let provider = Arc::new(StubProvider::with_text(sample_plan_json()));
    let generator = PlanGenerator::new(provider.clone());

    let plan = generator.generate(&sample_profile()).await.unwrap();

    assert_eq!(plan.macros.calories, 2200);
    assert_eq!(plan.macros.protein_g, 180);
    assert_eq!(plan.nutrition_plan.len(), 2);
    assert_eq!(plan.workout_plan.len(), 1);
    assert_eq!(plan.workout_plan[0].exercises[0].reps, "8-12");
}

#[tokio::test]
async fn test_generate_submits_schema_and_temperature() {
    init_test_logging();
    let provider = Arc::new(StubProvider::with_text(sample_plan_json()));
    let generator = PlanGenerator::new(provider.clone());

    generator.generate(&sample_profile()).await.unwrap();

    let requests = provider.structured_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].temperature, Some(PLAN_TEMPERATURE));
    assert_eq!(requests[0].response_schema, shape_for(EntityKind::Plan));
}

#[tokio::test]
async fn test_generate_prompt_renders_profile_fields() {
    init_test_logging();
    let provider = Arc::new(StubProvider::with_text(sample_plan_json()));
    let generator = PlanGenerator::new(provider.clone());

    generator.generate(&sample_profile()).await.unwrap();

    let prompt = &provider.structured_requests()[0].prompt;
    assert!(prompt.contains("25 anos"));
    assert!(prompt.contains("80 kg"));
    assert!(prompt.contains("175 cm"));
    assert!(prompt.contains("Academia"));
    // Empty restrictions render as the placeholder
    assert!(prompt.contains(NO_RESTRICTIONS_PLACEHOLDER));
}

#[tokio::test]
async fn test_generate_empty_text_fails_empty_response() {
    init_test_logging();
    for text in ["", "   \n\t"] {
        let provider = Arc::new(StubProvider::with_text(text));
        let generator = PlanGenerator::new(provider);

        let error = generator.generate(&sample_profile()).await.unwrap_err();
        assert_eq!(error.code, ErrorCode::EmptyResponse);
    }
}

#[tokio::test]
async fn test_generate_invalid_json_fails_malformed() {
    init_test_logging();
    let provider = Arc::new(StubProvider::with_text("{not json"));
    let generator = PlanGenerator::new(provider);

    let error = generator.generate(&sample_profile()).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::MalformedResponse);
    assert!(error.source.is_some());
}

#[tokio::test]
async fn test_generate_missing_required_field_fails_malformed() {
    init_test_logging();
    // Valid JSON but the macros object is absent
    let provider = Arc::new(StubProvider::with_text(
        r#"{"summary": "plano", "nutritionPlan": [], "workoutPlan": []}"#,
    ));
    let generator = PlanGenerator::new(provider);

    let error = generator.generate(&sample_profile()).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::MalformedResponse);
}

#[tokio::test]
async fn test_generate_propagates_provider_failure() {
    init_test_logging();
    let provider = Arc::new(StubProvider::failing(
        ErrorCode::GenerationTimeout,
        "deadline expired",
    ));
    let generator = PlanGenerator::new(provider.clone());

    let error = generator.generate(&sample_profile()).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::GenerationTimeout);
    // Exactly one outbound exchange, no retries
    assert_eq!(provider.call_count(), 1);
}
