//! Progress display for in-flight fetches and answers

pub mod reporter;
