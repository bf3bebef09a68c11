pub mod analyzer;
pub mod classifier;
pub mod conjugator;
pub mod engine;
pub mod stem;
pub mod syllabary;
pub mod templates;
pub mod trie;
pub mod types;
