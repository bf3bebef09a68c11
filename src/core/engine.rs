use crate::config::EngineConfig;
use crate::core::analyzer::WordAnalyzer;
use crate::core::conjugator;
use crate::core::types::{AnalysisCandidate, ConjugatedForm, Root, Stem, SubjectAgreement, Tense};
use crate::error::Result;
use crate::paradigm::{ParadigmComparator, ParadigmTable};
use crate::tree::{RootTree, RootTreeBuilder};
use tracing::debug;

// The engine holds only configuration; every call is independent and
// may run on any thread.
#[derive(Debug, Clone, Default)]
pub struct MorphEngine {
    config: EngineConfig,
    analyzer: WordAnalyzer,
}

impl MorphEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let analyzer = WordAnalyzer::with_max_candidates(config.max_candidates);
        Ok(Self { config, analyzer })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Every form of a 3- or 4-radical root.
    pub fn expand(&self, root: &str) -> Result<RootTree> {
        let root = Root::parse(root.trim())?;
        RootTreeBuilder::build(&root)
    }

    /// Ranked decompositions of a surface word; empty when unanalyzable.
    pub fn analyze(&self, word: &str) -> Result<Vec<AnalysisCandidate>> {
        if word.trim().is_empty() {
            return Ok(vec![]);
        }
        self.analyzer.analyze(word)
    }

    pub fn generate(
        &self,
        root: &str,
        stem: Stem,
        tense: Tense,
        agreement: SubjectAgreement,
    ) -> Result<ConjugatedForm> {
        let root = Root::parse(root.trim())?;
        conjugator::generate(&root, stem, tense, agreement)
    }

    /// Compares one slot across `roots`, or across one exemplar per verb
    /// type when `roots` is empty.
    pub fn compare(
        &self,
        roots: &[&str],
        stem: Stem,
        tense: Tense,
        agreement: SubjectAgreement,
    ) -> Result<ParadigmTable> {
        let roots = if roots.is_empty() {
            ParadigmComparator::reference_roots()
        } else {
            roots
                .iter()
                .map(|r| Root::parse(r.trim()))
                .collect::<Result<Vec<_>>>()?
        };
        debug!(roots = roots.len(), %stem, %tense, %agreement, "comparing paradigm");
        ParadigmComparator::compare(&roots, stem, tense, agreement)
    }
}
