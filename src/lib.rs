//! Workspace root package.
//!
//! Exists to anchor repository-wide tooling (cargo-husky git hooks); all real
//! code lives in the `crates/` members.
