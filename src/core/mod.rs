pub mod classifier;
pub mod engine;
pub mod mapper;
pub mod normalizer;
pub mod renderer;
pub mod segments;
pub mod syllable;
pub mod tables;
pub mod trie;
pub mod types;
