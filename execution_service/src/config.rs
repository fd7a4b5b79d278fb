// Copyright 2026 the Execution Graph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Service-facing runtime configuration.
//!
//! None of this is a contract the core (`execution_graph`) relies on — it exists only so the
//! service collaborator has soft caps to hand to `TokioRuntimeHost` consumers. Parsed by hand
//! from the environment, since pulling in a config-from-env crate for three fields would cost
//! more than it saves.

use std::env;

const CHANNEL_CAPACITY_VAR: &str = "EXECUTION_CHANNEL_CAPACITY";
const MAX_CONCURRENT_ENTRIES_VAR: &str = "EXECUTION_MAX_CONCURRENT_ENTRIES";

const DEFAULT_CHANNEL_CAPACITY: usize = 64;
const DEFAULT_MAX_CONCURRENT_ENTRIES: usize = 256;

/// Soft operational limits for the service boundary.
///
/// Advisory: neither field is enforced by `execution_graph` itself. `max_concurrent_entries` is a
/// fallback a host implementation may use to bound fan-out, not an invariant of the scope model —
/// a scope with more entries than this simply launches them all; nothing here rejects it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Default buffer size for channels the service layer creates on a graph's behalf.
    pub channel_capacity: usize,
    /// Soft cap on concurrently launched entries per scope.
    pub max_concurrent_entries: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            max_concurrent_entries: DEFAULT_MAX_CONCURRENT_ENTRIES,
        }
    }
}

impl RuntimeConfig {
    /// Loads configuration from the environment, falling back to documented defaults for any
    /// variable that is unset or fails to parse.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            channel_capacity: parse_env_or(CHANNEL_CAPACITY_VAR, defaults.channel_capacity),
            max_concurrent_entries: parse_env_or(
                MAX_CONCURRENT_ENTRIES_VAR,
                defaults.max_concurrent_entries,
            ),
        }
    }
}

fn parse_env_or(var: &str, default: usize) -> usize {
    env::var(var)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_the_environment_is_unset() {
        let config = RuntimeConfig {
            channel_capacity: parse_env_or("EXECUTION_CHANNEL_CAPACITY_TEST_UNSET", 64),
            max_concurrent_entries: parse_env_or(
                "EXECUTION_MAX_CONCURRENT_ENTRIES_TEST_UNSET",
                256,
            ),
        };
        assert_eq!(config.channel_capacity, 64);
        assert_eq!(config.max_concurrent_entries, 256);
    }
}
