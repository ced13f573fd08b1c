//! Shared Domain Types for TourDesk
//!
//! This crate is the SINGLE SOURCE OF TRUTH for all types crossing the
//! panel/host boundary.
//!
//! ## Rules
//!
//! 1. All boundary types live here - no inline struct definitions in panels
//!    or host shells
//! 2. Money is `rust_decimal::Decimal`, never a binary float
//! 3. Ids are opaque newtypes

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// PRODUCTS
// ============================================================================

/// Opaque product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A sellable product as pushed in by the host.
///
/// `name` is the display key. Input lists are not guaranteed unique by name;
/// lookups treat the name as unique and resolve to the first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

// ============================================================================
// CUSTOMER ROWS
// ============================================================================

/// One customer aggregate in a result set.
///
/// Rows are immutable once received from the host; a new lookup replaces the
/// whole set, there are no merge semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRow {
    pub customer_name: String,
    pub customer_email: String,
    pub purchase_count: u32,
    pub total_spent: Decimal,
    pub last_purchase: NaiveDate,
}

// ============================================================================
// FILTER CRITERIA
// ============================================================================

/// Lookup criteria the host assembles when the user applies the filter.
///
/// Date bounds carry the raw text typed by the user; parsing and validation
/// are the host's burden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub product_id: ProductId,
    #[serde(default)]
    pub date_from: Option<String>,
    #[serde(default)]
    pub date_to: Option<String>,
}

// ============================================================================
// TESTS
// ============================================================================
