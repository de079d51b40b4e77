/*
 * ==========================================================================
 * MICO - A Teaching Language
 * ==========================================================================
 *
 * File:     main.rs
 * Purpose:  The `mico` command-line driver: load a source file, run the
 *           front end, render diagnostics, map the result to an exit code.
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

use std::env;
use std::fs;
use std::process::ExitCode;

use mico::diagnostics::{self, DiagnosticPrinter};
use mico::{logger, MicoError};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), MicoError> {
    let mut json = false;
    let mut trace = false;
    let mut path = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "--trace" => trace = true,
            _ => path = Some(arg),
        }
    }
    let path = path.ok_or(MicoError::Usage)?;

    logger::init(if trace {
        tracing::Level::TRACE
    } else {
        tracing::Level::WARN
    });

    let source = fs::read_to_string(&path).map_err(|source| MicoError::Source {
        path: path.clone(),
        source,
    })?;

    let outcome = mico::parse(&source);

    if json {
        println!("{}", diagnostics::to_json(&outcome.diagnostics)?);
    } else {
        let printer = DiagnosticPrinter::new(&path, &source);
        for diagnostic in &outcome.diagnostics {
            printer.print(diagnostic);
        }
    }

    match outcome.error_count() {
        0 => Ok(()),
        n => Err(MicoError::Rejected(n)),
    }
}
