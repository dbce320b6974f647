//! Language specifications
//!
//!     A specification is an ordered list of categories, each bound to one or more
//!     pattern matchers. Order inside a category does not matter. Order across
//!     categories does: when several categories match the same candidate, the one
//!     declared first wins.
//!
//!     A specification may also name "wrong" categories. These are honeypots: a
//!     pattern that should never produce a real token (a malformed number, say).
//!     If the scanner is about to emit one, the whole call fails.
//!
//!     Finally a specification can carry a post-lex transformation pipeline and an
//!     opaque metadata map. The engine runs the pipeline after scanning and never
//!     looks at the metadata.
//!
//!     Specifications are immutable once built and are shared behind an `Arc`
//!     between every lexer for that language.

use crate::error::LexError;
use crate::lexing::matcher::PatternMatcher;
use crate::lexing::transformations::TransformPipeline;
use std::collections::{BTreeMap, HashSet};

/// A named token category and its matchers.
#[derive(Debug, Clone)]
pub struct Category {
    name: String,
    matchers: Vec<PatternMatcher>,
}

impl Category {
    pub fn new<S: AsRef<str>>(name: impl Into<String>, patterns: &[S]) -> Result<Self, LexError> {
        let name = name.into();
        if patterns.is_empty() {
            return Err(LexError::config(format!(
                "category '{name}' has no patterns"
            )));
        }
        let matchers = patterns
            .iter()
            .map(|p| PatternMatcher::new(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Category { name, matchers })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn matchers(&self) -> &[PatternMatcher] {
        &self.matchers
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.matchers.iter().any(|m| m.matches(candidate))
    }
}

/// An immutable, ordered set of categories plus the optional post-lex pipeline.
#[derive(Debug)]
pub struct LanguageSpec {
    name: String,
    categories: Vec<Category>,
    wrong: HashSet<String>,
    metadata: BTreeMap<String, String>,
    transform: Option<TransformPipeline>,
}

impl LanguageSpec {
    /// Build a specification from its parts.
    ///
    /// Fails when there are no categories, a category has no patterns, a pattern
    /// does not compile, a category name repeats, or a wrong category is not
    /// among the declared ones.
    pub fn new(
        name: impl Into<String>,
        categories: Vec<Category>,
        wrong: HashSet<String>,
        metadata: BTreeMap<String, String>,
        transform: Option<TransformPipeline>,
    ) -> Result<Self, LexError> {
        let name = name.into();
        if categories.is_empty() {
            return Err(LexError::config(format!(
                "language '{name}' declares no categories"
            )));
        }

        let mut seen = HashSet::new();
        for category in &categories {
            if !seen.insert(category.name()) {
                return Err(LexError::config(format!(
                    "language '{name}' declares category '{}' twice",
                    category.name()
                )));
            }
        }
        if let Some(unknown) = wrong.iter().find(|w| !seen.contains(w.as_str())) {
            return Err(LexError::config(format!(
                "language '{name}' marks unknown category '{unknown}' as wrong"
            )));
        }

        tracing::debug!(
            language = %name,
            categories = categories.len(),
            wrong = wrong.len(),
            transform = transform.is_some(),
            "built language specification"
        );

        Ok(LanguageSpec {
            name,
            categories,
            wrong,
            metadata,
            transform,
        })
    }

    pub fn builder(name: impl Into<String>) -> LanguageSpecBuilder {
        LanguageSpecBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(Category::name)
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.name() == name)
    }

    pub fn is_wrong(&self, category: &str) -> bool {
        self.wrong.contains(category)
    }

    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    pub fn transform(&self) -> Option<&TransformPipeline> {
        self.transform.as_ref()
    }

    /// Fails if any name in `names` is not a declared category.
    pub fn check_categories<'a, I>(&self, names: I) -> Result<(), LexError>
    where
        I: IntoIterator<Item = &'a String>,
    {
        for name in names {
            if !self.has_category(name) {
                return Err(LexError::config(format!(
                    "language '{}' has no category '{name}'",
                    self.name
                )));
            }
        }
        Ok(())
    }
}

/// Incremental construction of a [`LanguageSpec`], keeping declaration order.
///
/// Errors are deferred to [`build`](LanguageSpecBuilder::build) so that a
/// specification reads as one chained expression.
pub struct LanguageSpecBuilder {
    name: String,
    categories: Vec<(String, Vec<String>)>,
    wrong: HashSet<String>,
    metadata: BTreeMap<String, String>,
    transform: Option<TransformPipeline>,
}

impl LanguageSpecBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        LanguageSpecBuilder {
            name: name.into(),
            categories: Vec::new(),
            wrong: HashSet::new(),
            metadata: BTreeMap::new(),
            transform: None,
        }
    }

    pub fn category(mut self, name: &str, patterns: &[&str]) -> Self {
        self.categories.push((
            name.to_string(),
            patterns.iter().map(|p| p.to_string()).collect(),
        ));
        self
    }

    /// Declare a category and mark it wrong in one step.
    pub fn wrong_category(mut self, name: &str, patterns: &[&str]) -> Self {
        self.wrong.insert(name.to_string());
        self.category(name, patterns)
    }

    pub fn wrong(mut self, name: &str) -> Self {
        self.wrong.insert(name.to_string());
        self
    }

    pub fn metadata(mut self, key: &str, value: &str) -> Self {
        self.metadata.insert(key.to_string(), value.to_string());
        self
    }

    pub fn transform(mut self, pipeline: TransformPipeline) -> Self {
        self.transform = Some(pipeline);
        self
    }

    pub fn build(self) -> Result<LanguageSpec, LexError> {
        let categories = self
            .categories
            .into_iter()
            .map(|(name, patterns)| Category::new(name, &patterns))
            .collect::<Result<Vec<_>, _>>()?;
        LanguageSpec::new(
            self.name,
            categories,
            self.wrong,
            self.metadata,
            self.transform,
        )
    }
}
