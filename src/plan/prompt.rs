// ABOUTME: Prompt builder turning a user profile into the plan-generation instruction
// ABOUTME: Pure and deterministic; every profile field is rendered into the prompt
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BodyRecomp

use crate::models::UserProfile;

/// Literal substituted when the profile declares no restrictions
pub const NO_RESTRICTIONS_PLACEHOLDER: &str = "Nenhuma";

/// Build the natural-language plan-generation instruction for a profile
///
/// Deterministically renders every profile field into a pt-BR instruction
/// and appends the explicit JSON-only requirement. A missing profile field
/// is a caller contract violation (the onboarding client validates before
/// submission); this function does not guard against it.
///
/// No side effects, no I/O.
#[must_use]
pub fn build_plan_prompt(profile: &UserProfile) -> String {
    let restrictions = if profile.restrictions.trim().is_empty() {
        NO_RESTRICTIONS_PLACEHOLDER
    } else {
        profile.restrictions.as_str()
    };

    format!(
        "Você é um nutricionista esportivo e personal trainer especializado em recomposição corporal.\n\
         Crie um plano completo de dieta e treino para o seguinte perfil:\n\
         - Idade: {age} anos\n\
         - Peso: {weight} kg\n\
         - Altura: {height} cm\n\
         - Gênero: {gender}\n\
         - Nível de atividade: {activity}\n\
         - Objetivo: {goal}\n\
         - Ambiente de treino: {environment}\n\
         - Restrições: {restrictions}\n\
         \n\
         O plano deve conter: um resumo da estratégia, as metas diárias de macronutrientes \
         (proteína, carboidratos, gorduras e calorias), um plano alimentar com refeições e \
         alimentos em ordem, e um plano de treino semanal com aquecimento, exercícios \
         (séries, repetições e observações) e cardio por sessão.\n\
         Responda APENAS com JSON válido no formato exigido, sem nenhum texto adicional.",
        age = profile.age,
        weight = profile.weight_kg,
        height = profile.height_cm,
        gender = profile.gender,
        activity = profile.activity_level,
        goal = profile.goal,
        environment = profile.environment,
        restrictions = restrictions,
    )
}
