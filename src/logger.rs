/*
 * ==========================================================================
 * MICO - A Teaching Language
 * ==========================================================================
 *
 * This file is part of the Mico compiler project.
 *
 * Mico is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

//! Tracing setup for the `mico` binary.
//!
//! The compiler library only emits `tracing` events (the per-token
//! recognition trace at TRACE, error and scope notes at DEBUG); the binary
//! decides whether anyone is listening. Embedders can install their own
//! subscriber instead.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry};

/// Initializes a compact subscriber: `[LEVEL] message`, no timestamps, no
/// module paths, no color.
pub fn init(level: tracing::Level) {
    let filter = tracing_subscriber::filter::LevelFilter::from_level(level);

    let layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_level(true)
        .with_ansi(false)
        .compact()
        .with_filter(filter);

    Registry::default().with(layer).init();
}
