//! Fixture tests for hastjsx, generated from the files in `tests/`.
//!
//! Each `<suite>.hast.json` holds a hast tree; each
//! `<suite>.<case>.json` holds the CLI arguments to convert it with and
//! either the `expected` program or the expected `error` message.

include!(concat!(env!("OUT_DIR"), "/tests.rs"));
