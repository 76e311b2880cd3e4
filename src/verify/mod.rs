// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: runtime contracts between pipeline stages.
//!
//! Types already carry the structural invariants (a `KeywordCode` cannot be
//! out of range, a `Fingerprint` cannot be appended to). What types cannot
//! express, such as "this set of vertices really is a clique", is checked here
//! with `debug_assert!` so tests catch it and release builds pay nothing.

pub mod contracts;
