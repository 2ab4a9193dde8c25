// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Default interpreter used to launch the worker
pub const DEFAULT_WORKER_PROGRAM: &str = "python";
/// Default worker entrypoint module, invoked via `-m`
pub const DEFAULT_WORKER_MODULE: &str = "aiparser.entrypoints.find_codes_entrypoint";
/// Default wall-clock deadline for one worker invocation (10 minutes)
pub const DEFAULT_WORKER_TIMEOUT_SECS: u64 = 600;
/// Maximum ancestor levels examined while discovering the worker root
pub const WORKDIR_SEARCH_DEPTH: usize = 10;
/// Cap on the stdout prefix carried inside malformed-output diagnostics
pub const STDOUT_PREFIX_LIMIT: usize = 500;
