//! Unit tests for `wordlight`.

mod document_tests;
mod style_tests;
