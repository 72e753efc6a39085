//! Tests for shared types.
