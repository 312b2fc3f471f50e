pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::analysis::InvestmentAnalyzer;
use crate::application::designate::Designator;
use crate::application::filter::{filter, FilterCriteria};
use crate::application::load_catalog::{load_catalog, load_from_source};
use crate::application::summary::{comparison_rows, ComparisonRow, MarketSummary};
use crate::application::tiers::{RankedCluster, TierClassifier};
use crate::config::EngineConfig;
use crate::domain::entities::catalog::Catalog;
use crate::domain::entities::cluster::ClusterSummary;
use crate::domain::entities::property::{Property, PropertyId};
use crate::domain::error::DomainError;
use crate::domain::ports::listing_source::{ListingSource, RawRecord};
use crate::domain::values::investment::InvestmentInputs;
use crate::domain::values::scenario::ScenarioResult;
use crate::domain::values::tier::MarketTier;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Host-side entry point owning one authoritative catalog.
///
/// Designations take the write lock, so two racing `set_base` calls are
/// serialized and never leave two base properties. Reads take the read lock
/// and always see a fully applied catalog.
pub struct CompFinder {
    config: EngineConfig,
    catalog: RwLock<Catalog>,
    designator: Designator,
    analyzer: InvestmentAnalyzer,
    classifier: TierClassifier,
}

impl CompFinder {
    pub fn new(config: EngineConfig, catalog: Catalog) -> Result<Self, DomainError> {
        config.validate()?;
        catalog
            .verify(config.max_pinned)
            .map_err(|e| DomainError::Config(format!("Catalog is inconsistent: {e}")))?;

        Ok(Self {
            designator: Designator::new(config.max_pinned),
            analyzer: InvestmentAnalyzer::new(config.scenarios),
            classifier: TierClassifier::new(config.tiers),
            catalog: RwLock::new(catalog),
            config,
        })
    }

    pub fn from_records(config: EngineConfig, records: Vec<RawRecord>) -> Result<Self, DomainError> {
        let catalog = load_catalog(records, config.max_pinned)?;
        Self::new(config, catalog)
    }

    pub fn from_source(config: EngineConfig, source: &dyn ListingSource) -> Result<Self, DomainError> {
        let catalog = load_from_source(source, config.max_pinned)?;
        Self::new(config, catalog)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// A consistent copy of the catalog.
    pub fn snapshot(&self) -> Result<Catalog, DomainError> {
        Ok(self.read()?.clone())
    }

    pub fn property(&self, id: PropertyId) -> Result<Option<Property>, DomainError> {
        Ok(self.read()?.get(id).cloned())
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> Result<Vec<Property>, DomainError> {
        let catalog = self.read()?;
        let kept = filter(&catalog, criteria, &self.config.reliability)?;
        Ok(kept.into_iter().cloned().collect())
    }

    pub fn toggle_pin(&self, id: PropertyId) -> Result<bool, DomainError> {
        self.designator.toggle_pin(&mut *self.write()?, id)
    }

    pub fn set_base(&self, id: PropertyId) -> Result<(), DomainError> {
        self.designator.set_base(&mut *self.write()?, id)
    }

    pub fn set_target(&self, id: PropertyId) -> Result<(), DomainError> {
        self.designator.set_target(&mut *self.write()?, id)
    }

    pub fn clear_base(&self) -> Result<Option<PropertyId>, DomainError> {
        Ok(self.designator.clear_base(&mut *self.write()?))
    }

    pub fn clear_target(&self) -> Result<Option<PropertyId>, DomainError> {
        Ok(self.designator.clear_target(&mut *self.write()?))
    }

    pub fn analyze(&self, inputs: &InvestmentInputs) -> Result<ScenarioResult, DomainError> {
        self.analyzer.analyze(&*self.read()?, inputs)
    }

    pub fn classify(&self, adr: f64) -> MarketTier {
        self.classifier.classify(adr)
    }

    pub fn classify_cluster(&self, cluster: &ClusterSummary) -> MarketTier {
        self.classifier.classify_cluster(cluster)
    }

    pub fn rank_clusters(&self, clusters: &[ClusterSummary]) -> Vec<RankedCluster> {
        self.classifier.rank_clusters(clusters)
    }

    pub fn market_summary(&self) -> Result<MarketSummary, DomainError> {
        let catalog = self.read()?;
        Ok(MarketSummary::from_properties(catalog.iter(), &self.classifier))
    }

    pub fn comparison(&self) -> Result<Vec<ComparisonRow>, DomainError> {
        Ok(comparison_rows(&*self.read()?, &self.classifier))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Catalog>, DomainError> {
        self.catalog.read().map_err(|_| DomainError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Catalog>, DomainError> {
        self.catalog.write().map_err(|_| DomainError::LockPoisoned)
    }
}
