// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config; // descriptor + loading + overrides
pub mod errors; // error handling
pub mod observability;
