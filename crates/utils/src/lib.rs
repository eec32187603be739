// Copyright 2024 Ulvetanna Inc.

pub mod env;
pub mod tracing;
