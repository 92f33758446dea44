// ABOUTME: Re-exports command modules for platewise-cli
// ABOUTME: Provides access to menu analysis and Google Maps commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

pub mod analyze;
pub mod maps;
