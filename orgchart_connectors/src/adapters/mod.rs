// Copyright 2025 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters for reading boxes from other crates.

#[cfg(feature = "registry_adapter")]
pub mod registry;
