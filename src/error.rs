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

use thiserror::Error;

/// Failures at the driver boundary.
///
/// Compile diagnostics are not errors in this sense: the parser always runs
/// to completion and reports them through the [`Reporter`] sink. `MicoError`
/// covers the cases where the driver itself cannot proceed, or where it
/// maps a non-zero diagnostic count onto the process exit status.
///
/// [`Reporter`]: crate::diagnostics::Reporter
#[derive(Debug, Error)]
pub enum MicoError {
    #[error("usage: mico [--json] [--trace] <source-file>")]
    Usage,

    #[error("cannot read '{path}': {source}")]
    Source {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize diagnostics: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} error(s) reported")]
    Rejected(usize),
}
