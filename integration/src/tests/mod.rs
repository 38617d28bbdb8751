//! Integration tests for the deployment runner

mod failures;
