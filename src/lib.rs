// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod paradigm;
pub mod persistence;
pub mod tree;

pub use crate::config::EngineConfig;
pub use crate::core::analyzer::WordAnalyzer;
pub use crate::core::engine::MorphEngine;
pub use crate::core::types::{
    AnalysisCandidate, ConjugatedForm, Radical, Root, Stem, SubjectAgreement, Tense, VerbType,
    VowelOrder,
};
pub use crate::error::{Error, Result};
pub use crate::paradigm::{ParadigmComparator, ParadigmTable};
pub use crate::tree::{Cell, RootTree, RootTreeBuilder};
