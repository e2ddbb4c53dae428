// ABOUTME: Test helper module organization
// ABOUTME: Axum request helper and the deterministic stub provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BodyRecomp
#![allow(dead_code)]

pub mod axum_test;
pub mod stub_provider;
