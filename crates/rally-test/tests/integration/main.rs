//! Integration tests for practice scheduling.

mod helpers;
mod http;
mod scheduling;
