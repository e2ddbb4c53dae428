// ABOUTME: User profile model collected during onboarding
// ABOUTME: Enum labels are the pt-BR display strings the client submits verbatim
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BodyRecomp

use serde::{Deserialize, Serialize};
use std::fmt;

/// Biological gender as selected during onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "Masculino")]
    Male,
    #[serde(rename = "Feminino")]
    Female,
    #[serde(rename = "Outro")]
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "Masculino"),
            Self::Female => write!(f, "Feminino"),
            Self::Other => write!(f, "Outro"),
        }
    }
}

/// Weekly activity level, ordered from least to most active
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActivityLevel {
    #[serde(rename = "Sedentário")]
    Sedentary,
    #[serde(rename = "Levemente Ativo")]
    LightlyActive,
    #[serde(rename = "Moderadamente Ativo")]
    ModeratelyActive,
    #[serde(rename = "Muito Ativo")]
    VeryActive,
    #[serde(rename = "Extremamente Ativo")]
    SuperActive,
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sedentary => write!(f, "Sedentário"),
            Self::LightlyActive => write!(f, "Levemente Ativo"),
            Self::ModeratelyActive => write!(f, "Moderadamente Ativo"),
            Self::VeryActive => write!(f, "Muito Ativo"),
            Self::SuperActive => write!(f, "Extremamente Ativo"),
        }
    }
}

/// Training goal driving both the diet and the workout split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    #[serde(rename = "Foco em Perda de Gordura")]
    LoseFat,
    #[serde(rename = "Foco em Ganho Muscular")]
    BuildMuscle,
    #[serde(rename = "Recomposição (Ambos)")]
    Recomposition,
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoseFat => write!(f, "Foco em Perda de Gordura"),
            Self::BuildMuscle => write!(f, "Foco em Ganho Muscular"),
            Self::Recomposition => write!(f, "Recomposição (Ambos)"),
        }
    }
}

/// Where the user trains, which constrains exercise selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainingEnvironment {
    #[serde(rename = "Academia")]
    Gym,
    #[serde(rename = "Em Casa (Peso do corpo/Halteres)")]
    Home,
}

impl fmt::Display for TrainingEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gym => write!(f, "Academia"),
            Self::Home => write!(f, "Em Casa (Peso do corpo/Halteres)"),
        }
    }
}

/// Physical profile and training goal submitted by the onboarding client
///
/// Immutable once submitted; the prompt builder consumes it read-only.
/// Field presence is validated by the client before submission, so the
/// core treats a missing field as a deserialization failure, not a
/// recoverable condition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Age in years
    pub age: u32,
    /// Body weight in kilograms
    #[serde(rename = "weight")]
    pub weight_kg: f64,
    /// Height in centimeters
    #[serde(rename = "height")]
    pub height_cm: f64,
    /// Gender
    pub gender: Gender,
    /// Weekly activity level
    #[serde(rename = "activityLevel")]
    pub activity_level: ActivityLevel,
    /// Training goal
    pub goal: Goal,
    /// Training environment
    pub environment: TrainingEnvironment,
    /// Dietary or physical restrictions, may be empty
    pub restrictions: String,
}
