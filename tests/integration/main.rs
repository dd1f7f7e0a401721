//! Integration tests for the oap-setup CLI
//!
//! These tests spawn the actual binary against a temporary repository tree
//! and test end-to-end behavior, including exit codes.

mod cli_tests;
