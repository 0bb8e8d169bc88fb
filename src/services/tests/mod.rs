//! Tests for the remote service clients
//!
//! These tests run the real request/response path against a local mock
//! server, covering payload shape, parsing and error mapping.
