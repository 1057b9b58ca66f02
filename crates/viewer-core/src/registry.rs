//! Static list of slider widgets established once at setup.

use crate::math::clamp;
use crate::{TargetId, WidgetId};
use fnv::{FnvHashMap, FnvHashSet};
use thiserror::Error;

/// A widget as declared by the page, before validation.
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetDecl {
    pub id: String,
    pub domain_min: f32,
    pub domain_max: f32,
    pub target_id: String,
    /// Starting position; `None` starts at `domain_max` (layer fully shown).
    pub initial_position: Option<f32>,
}

impl WidgetDecl {
    pub fn new(id: &str, domain: (f32, f32), target_id: &str) -> Self {
        Self {
            id: id.to_owned(),
            domain_min: domain.0,
            domain_max: domain.1,
            target_id: target_id.to_owned(),
            initial_position: None,
        }
    }

    pub fn with_initial_position(mut self, position: f32) -> Self {
        self.initial_position = Some(position);
        self
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum RegistryError {
    #[error("slider #{index} has no id")]
    MissingWidgetId { index: usize },
    #[error("slider `{widget}` has no opacity target")]
    MissingTarget { widget: String },
    #[error("slider `{widget}` target `{target}` does not resolve")]
    UnresolvedTarget { widget: String, target: String },
    #[error("slider `{widget}` has an invalid domain [{min}, {max}]")]
    InvalidDomain { widget: String, min: f32, max: f32 },
    #[error("slider `{widget}` is declared more than once")]
    DuplicateWidget { widget: String },
    #[error("target `{target}` is already bound to slider `{bound_to}`")]
    TargetAlreadyBound { target: String, bound_to: String },
}

/// A validated widget entry.
#[derive(Clone, Debug, PartialEq)]
pub struct RegisteredWidget {
    pub id: WidgetId,
    pub domain_min: f32,
    pub domain_max: f32,
    pub target_id: TargetId,
    pub initial_position: f32,
}

#[derive(Clone, Debug, Default)]
pub struct WidgetRegistry {
    widgets: Vec<RegisteredWidget>,
    index: FnvHashMap<WidgetId, usize>,
}

impl WidgetRegistry {
    /// Validate `decls`, keeping the good ones in declaration order.
    ///
    /// Every rejected declaration produces one error; the rest of the
    /// registry is unaffected.
    pub fn build(decls: impl IntoIterator<Item = WidgetDecl>) -> (Self, Vec<RegistryError>) {
        Self::build_with(decls, |_| true)
    }

    /// Like [`WidgetRegistry::build`], additionally rejecting widgets whose
    /// target `resolves` says does not exist.
    pub fn build_with(
        decls: impl IntoIterator<Item = WidgetDecl>,
        resolves: impl Fn(&str) -> bool,
    ) -> (Self, Vec<RegistryError>) {
        let mut registry = Self::default();
        let mut errors = Vec::new();
        let mut bound: FnvHashMap<String, String> = FnvHashMap::default();
        let mut seen: FnvHashSet<String> = FnvHashSet::default();

        for (i, decl) in decls.into_iter().enumerate() {
            if let Err(e) = validate(i, &decl, &seen, &bound, &resolves) {
                errors.push(e);
                continue;
            }
            seen.insert(decl.id.clone());
            bound.insert(decl.target_id.clone(), decl.id.clone());

            let initial = clamp(
                decl.initial_position.unwrap_or(decl.domain_max),
                decl.domain_min,
                decl.domain_max,
            );
            let id = WidgetId(decl.id);
            registry.index.insert(id.clone(), registry.widgets.len());
            registry.widgets.push(RegisteredWidget {
                id,
                domain_min: decl.domain_min,
                domain_max: decl.domain_max,
                target_id: TargetId(decl.target_id),
                initial_position: initial,
            });
        }

        for e in &errors {
            log::warn!("[registry] excluded: {}", e);
        }
        (registry, errors)
    }

    pub fn get(&self, id: &WidgetId) -> Option<&RegisteredWidget> {
        self.index.get(id).map(|&i| &self.widgets[i])
    }

    #[inline]
    pub fn contains(&self, id: &WidgetId) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisteredWidget> {
        self.widgets.iter()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

fn validate(
    index: usize,
    decl: &WidgetDecl,
    seen: &FnvHashSet<String>,
    bound: &FnvHashMap<String, String>,
    resolves: &impl Fn(&str) -> bool,
) -> Result<(), RegistryError> {
    if decl.id.trim().is_empty() {
        return Err(RegistryError::MissingWidgetId { index });
    }
    if decl.target_id.trim().is_empty() {
        return Err(RegistryError::MissingTarget {
            widget: decl.id.clone(),
        });
    }
    let (min, max) = (decl.domain_min, decl.domain_max);
    if !min.is_finite() || !max.is_finite() || min >= max {
        return Err(RegistryError::InvalidDomain {
            widget: decl.id.clone(),
            min,
            max,
        });
    }
    if seen.contains(&decl.id) {
        return Err(RegistryError::DuplicateWidget {
            widget: decl.id.clone(),
        });
    }
    if let Some(other) = bound.get(&decl.target_id) {
        return Err(RegistryError::TargetAlreadyBound {
            target: decl.target_id.clone(),
            bound_to: other.clone(),
        });
    }
    if !resolves(&decl.target_id) {
        return Err(RegistryError::UnresolvedTarget {
            widget: decl.id.clone(),
            target: decl.target_id.clone(),
        });
    }
    Ok(())
}
