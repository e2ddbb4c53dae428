// ABOUTME: Configuration module organization
// ABOUTME: Environment-only configuration following the deployment-variable approach
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BodyRecomp

/// Environment-based server configuration
pub mod environment;
