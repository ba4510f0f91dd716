//! Property-based tests for the interval dispatcher.
