// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-based test modules

mod execute_properties;
mod projection_laws;
