//! Allocation method catalog
//!
//! An ordered, read-only set of [`AllocationMethod`]s. Every catalog is
//! validated on construction, so a `Catalog` value always satisfies:
//! - at least one method exists (the lookup fallback),
//! - every method has shares, each fraction is finite and in `(0, 1]`,
//! - the fractions of each method sum to `1.0` within [`FRACTION_SUM_TOLERANCE`],
//! - method ids are unique.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use split_types::{AllocationMethod, Share};
use tracing::debug;

use crate::error::CatalogError;

/// Allowed deviation of a method's fraction sum from `1.0`.
pub const FRACTION_SUM_TOLERANCE: f64 = 1e-9;

/// Built-in methods as (id, name, shares), in display order.
const BUILTIN_METHODS: &[(&str, &str, &[(f64, &str)])] = &[
    (
        "50/30/20",
        "Règle 50/30/20",
        &[
            (0.5, "Besoins essentiels"),
            (0.3, "Désirs personnels"),
            (0.2, "Épargne et remboursement des dettes"),
        ],
    ),
    ("80/20", "Méthode 80/20 (Pareto)", &[(0.8, "Dépenses courantes"), (0.2, "Épargne")]),
    (
        "70/20/10",
        "Méthode 70/20/10",
        &[(0.7, "Dépenses courantes"), (0.2, "Épargne"), (0.1, "Dons ou investissements")],
    ),
    (
        "Jars",
        "Système à six comptes (Jars)",
        &[
            (0.55, "Nécessités financières"),
            (0.1, "Loisirs"),
            (0.1, "Épargne à long terme"),
            (0.1, "Éducation"),
            (0.05, "Dons"),
            (0.1, "Compte principal"),
        ],
    ),
    ("Zero-based", "Méthode zéro-based budgeting", &[(1.0, "Budget total à allouer")]),
    (
        "60% Rule",
        "Règle 60% (Richard Jenkins)",
        &[
            (0.6, "Dépenses engagées"),
            (0.1, "Épargne retraite"),
            (0.1, "Épargne à long terme"),
            (0.1, "Épargne à court terme"),
            (0.1, "Loisirs"),
        ],
    ),
    (
        "100-10-10-10",
        "Méthode 100-10-10-10",
        &[
            (0.7, "Dépenses (après prélèvements)"),
            (0.1, "Épargne retraite"),
            (0.1, "Épargne d'urgence"),
            (0.1, "Investissements"),
        ],
    ),
    ("Enveloppes", "Méthode des enveloppes", &[(1.0, "À répartir manuellement")]),
];

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    let methods = BUILTIN_METHODS
        .iter()
        .map(|(id, name, shares)| {
            AllocationMethod::new(
                *id,
                *name,
                shares.iter().map(|(fraction, label)| Share::new(*fraction, *label)).collect(),
            )
        })
        .collect();

    // The built-in table is authored data; a violation here is a programming error.
    Catalog::new(methods).unwrap_or_else(|err| panic!("built-in allocation catalog is invalid: {err}"))
});

/// Checks one method against the authoring contract.
pub fn validate_method(method: &AllocationMethod) -> Result<(), CatalogError> {
    if method.shares.is_empty() {
        return Err(CatalogError::NoShares { method_id: method.id.clone() });
    }

    for share in &method.shares {
        if !share.fraction.is_finite() || share.fraction <= 0.0 || share.fraction > 1.0 {
            return Err(CatalogError::InvalidFraction {
                method_id: method.id.clone(),
                label: share.label.clone(),
                fraction: share.fraction,
            });
        }
    }

    let sum = method.fraction_sum();
    if (sum - 1.0).abs() > FRACTION_SUM_TOLERANCE {
        return Err(CatalogError::SharesDoNotSumToOne { method_id: method.id.clone(), sum });
    }

    Ok(())
}

/// Ordered, validated, immutable set of allocation methods.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    methods: Vec<AllocationMethod>,
}

impl Catalog {
    /// Builds a catalog, validating every method and the uniqueness of ids.
    pub fn new(methods: Vec<AllocationMethod>) -> Result<Self, CatalogError> {
        if methods.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(methods.len());
        for method in &methods {
            validate_method(method)?;
            if !seen.insert(method.id.as_str()) {
                return Err(CatalogError::DuplicateId { method_id: method.id.clone() });
            }
        }

        debug!(methods = methods.len(), "allocation catalog validated");
        Ok(Self { methods })
    }

    /// The process-wide built-in catalog, constructed on first use.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Built-in methods followed by `extra`, validated as a whole.
    pub fn with_extra(extra: Vec<AllocationMethod>) -> Result<Self, CatalogError> {
        let mut methods = Self::builtin().methods.clone();
        methods.extend(extra);
        Self::new(methods)
    }

    /// All methods, in authored order.
    pub fn list_methods(&self) -> &[AllocationMethod] {
        &self.methods
    }

    /// Strict lookup by id.
    pub fn get(&self, id: &str) -> Option<&AllocationMethod> {
        self.methods.iter().find(|method| method.id == id)
    }

    /// Looks up a method by id, falling back to the first method when the id is unknown.
    pub fn find_method(&self, id: &str) -> &AllocationMethod {
        self.get(id).unwrap_or_else(|| self.default_method())
    }

    /// The first method of the catalog, used whenever no valid selection exists.
    pub fn default_method(&self) -> &AllocationMethod {
        // Non-empty by construction.
        &self.methods[0]
    }

    /// Number of methods; at least one by construction.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Always `false` for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}
