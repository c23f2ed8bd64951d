//! Integration tests driving the ap2p-build binary against fake compilers.

#![cfg(unix)]

mod build_tests;
