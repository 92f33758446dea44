// ABOUTME: Re-exports helper modules for platewise-cli
// ABOUTME: Provides JSON file loading and output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

pub mod io;
