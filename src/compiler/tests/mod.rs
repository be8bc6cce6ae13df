//! Compiler tests: shared behavior in `core`, per-dialect quirks in
//! `dialects`.

mod core;
