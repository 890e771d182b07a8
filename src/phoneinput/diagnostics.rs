// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

/// Observations the core reports without changing its result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// A canonical value belongs to another country than the one the caller
    /// selected. `actual` is the value's country, or `+<calling code>` when
    /// the value's country is ambiguous.
    #[error("Phone number {value} corresponds to {actual} but country {expected} was specified")]
    CountryMismatch {
        value: String,
        expected: String,
        actual: String,
    },
}

/// Receiver of [`Diagnostic`]s. Any `FnMut(Diagnostic)` closure is a sink.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl<F: FnMut(Diagnostic)> DiagnosticSink for F {
    fn report(&mut self, diagnostic: Diagnostic) {
        self(diagnostic)
    }
}

