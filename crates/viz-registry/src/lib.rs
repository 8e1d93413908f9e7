//! Visualization kind registry
//!
//! The single source of truth mapping visualization kind to its static
//! `VizDescriptor`. Registration happens once at startup through
//! `register_all_visualizations()`; after that the catalog is immutable and
//! lookups need no synchronization. Tests construct fresh `VizRegistry`
//! values instead of sharing the process-wide one.

pub mod kinds;

use geostress_shared::{CompState, GridSize, Renderer, VizSettings};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Where a visualization kind may be offered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum UsageContext {
    GeneralAnalysis,
    RunAnalysis,
    ShowAnalysis,
}

impl std::fmt::Display for UsageContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UsageContext::GeneralAnalysis => write!(f, "general-analysis"),
            UsageContext::RunAnalysis => write!(f, "run-analysis"),
            UsageContext::ShowAnalysis => write!(f, "show-analysis"),
        }
    }
}

/// Coarse grouping used by the "Add visualization" dialog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VizCategory {
    Orientation,
    Statistics,
    Stress,
    Spatial,
}

impl std::fmt::Display for VizCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VizCategory::Orientation => write!(f, "orientation"),
            VizCategory::Statistics => write!(f, "statistics"),
            VizCategory::Stress => write!(f, "stress"),
            VizCategory::Spatial => write!(f, "spatial"),
        }
    }
}

/// Static declaration of one visualization kind. Pure data, no behavior.
#[derive(Debug, Clone)]
pub struct VizDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub contexts: &'static [UsageContext],
    pub category: VizCategory,
    pub default_layout: GridSize,
    /// Discriminant tag of this kind's `VizSettings` variant.
    pub state_type: &'static str,
    pub default_settings: fn() -> VizSettings,
    pub create_initial_state: fn(f64, f64) -> CompState,
    pub make_renderer: fn() -> Box<dyn Renderer>,
}

/// Read-only aggregate over the catalog.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegistryStats {
    pub total: usize,
    pub by_context: BTreeMap<String, usize>,
    pub by_category: BTreeMap<String, usize>,
}

/// Catalog of descriptors, keyed by id, ordered by registration.
#[derive(Default)]
pub struct VizRegistry {
    order: Vec<&'static str>,
    entries: HashMap<&'static str, VizDescriptor>,
}

impl VizRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a descriptor. A duplicate id replaces the prior entry
    /// (last-registration-wins) while keeping its original position in
    /// registration order; the override is logged because an accidental
    /// double registration is otherwise invisible.
    ///
    /// Panics on a malformed descriptor. This only ever runs during startup
    /// registration, so a violation fails fast before any lookup.
    pub fn register(&mut self, descriptor: VizDescriptor) {
        Self::validate(&descriptor);
        let id = descriptor.id;
        if self.entries.insert(id, descriptor).is_some() {
            log::warn!("visualization kind '{id}' registered twice, replacing previous entry");
        } else {
            self.order.push(id);
        }
    }

    fn validate(descriptor: &VizDescriptor) {
        assert!(!descriptor.id.is_empty(), "descriptor id must not be empty");
        assert!(
            descriptor.default_layout.w > 0 && descriptor.default_layout.h > 0,
            "descriptor '{}' has a zero-sized default layout",
            descriptor.id
        );
        let defaults = (descriptor.default_settings)();
        assert_eq!(
            defaults.state_type(),
            descriptor.state_type,
            "descriptor '{}' default settings tag does not match its state_type",
            descriptor.id
        );
        let initial = (descriptor.create_initial_state)(100.0, 100.0);
        assert_eq!(
            initial.state_type(),
            descriptor.state_type,
            "descriptor '{}' initial state tag does not match its state_type",
            descriptor.id
        );
    }

    /// Lookup by kind id. A miss is recoverable: the caller renders an
    /// "unknown visualization type" placeholder.
    pub fn get_by_id(&self, id: &str) -> Option<&VizDescriptor> {
        self.entries.get(id)
    }

    /// Descriptors offered in a context, in registration order.
    pub fn get_by_context(&self, context: UsageContext) -> Vec<&VizDescriptor> {
        self.order
            .iter()
            .filter_map(|id| self.entries.get(id))
            .filter(|d| d.contexts.contains(&context))
            .collect()
    }

    /// Descriptors of one category, in registration order.
    pub fn get_by_category(&self, category: VizCategory) -> Vec<&VizDescriptor> {
        self.order
            .iter()
            .filter_map(|id| self.entries.get(id))
            .filter(|d| d.category == category)
            .collect()
    }

    /// All descriptors in registration order.
    pub fn all(&self) -> Vec<&VizDescriptor> {
        self.order
            .iter()
            .filter_map(|id| self.entries.get(id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> RegistryStats {
        let mut by_context = BTreeMap::new();
        let mut by_category = BTreeMap::new();
        for descriptor in self.all() {
            for context in descriptor.contexts {
                *by_context.entry(context.to_string()).or_insert(0) += 1;
            }
            *by_category
                .entry(descriptor.category.to_string())
                .or_insert(0) += 1;
        }
        RegistryStats {
            total: self.entries.len(),
            by_context,
            by_category,
        }
    }
}

static REGISTRY: OnceCell<VizRegistry> = OnceCell::new();

/// One-time startup registration of every known visualization kind.
///
/// Idempotent: later calls return the already-initialized catalog. No other
/// code path mutates the process-wide registry after this completes.
pub fn register_all_visualizations() -> &'static VizRegistry {
    REGISTRY.get_or_init(|| {
        let mut registry = VizRegistry::new();
        for descriptor in kinds::all_descriptors() {
            registry.register(descriptor);
        }
        log::info!("registered {} visualization kinds", registry.len());
        registry
    })
}

/// The process-wide catalog. Equivalent to `register_all_visualizations()`.
pub fn registry() -> &'static VizRegistry {
    register_all_visualizations()
}
