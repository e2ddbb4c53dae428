// ABOUTME: Context assembler building the synthetic bootstrap exchange for each turn
// ABOUTME: Encodes the active plan's key numbers so the stateless provider "remembers" it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BodyRecomp

use crate::models::{ChatMessage, GeneratedPlan};

/// Fixed sentence used when no plan has been generated yet
pub const NO_PLAN_CONTEXT: &str = "O usuário ainda não gerou um plano.";

/// Fixed model-role acknowledgment closing the seed exchange
pub const SEED_ACKNOWLEDGMENT: &str = "Entendido, Coach pronto para ajudar. Qual sua dúvida?";

/// Build the synthetic seed exchange prepended to every provider call
///
/// Always exactly two messages: a user-role message carrying the context
/// string and a model-role fixed acknowledgment. Rebuilt fresh on every
/// turn from the current plan reference, so a plan swap between turns is
/// reflected immediately; the seed is never stored in the visible history.
#[must_use]
pub fn build_seed(plan: Option<&GeneratedPlan>) -> [ChatMessage; 2] {
    let context = plan.map_or_else(
        || NO_PLAN_CONTEXT.to_owned(),
        |plan| {
            format!(
                "CONTEXTO DO PLANO DO USUÁRIO: Calorias: {}, Proteína: {}g. Foco: Hipertrofia e perda de gordura.",
                plan.macros.calories, plan.macros.protein_g
            )
        },
    );

    [
        ChatMessage::user(format!("Configuração Inicial. {context}")),
        ChatMessage::model(SEED_ACKNOWLEDGMENT),
    ]
}
