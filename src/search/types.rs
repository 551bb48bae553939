//! Search spec types and builder

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default page size when none (or a negative one) is supplied
pub const DEFAULT_PAGE_SIZE: u32 = 1000;

// ============================================================================
// Scope
// ============================================================================

/// Breadth of a directory search
///
/// Only the two paging-relevant scopes are supported; in particular the
/// protocol's single-entry `base` scope is rejected, since paging a
/// one-entry result set is meaningless.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Entire subtree under the base
    #[default]
    Subtree,
    /// Single level directly under the base
    OneLevel,
}

impl Scope {
    /// Parse a scope from its string form
    ///
    /// Accepts the long names used in spec definitions and the short
    /// aliases common in directory tooling (`sub`, `one`).
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "subtree" | "sub" => Ok(Self::Subtree),
            "onelevel" | "one" => Ok(Self::OneLevel),
            other => Err(Error::invalid_scope(other)),
        }
    }

    /// Protocol wire code for this scope
    pub fn protocol_code(self) -> u8 {
        match self {
            Self::OneLevel => 1,
            Self::Subtree => 2,
        }
    }
}

// ============================================================================
// Alias Dereference Policy
// ============================================================================

/// Alias-dereference policy, matching the protocol-level options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DerefPolicy {
    /// Never dereference aliases
    #[default]
    Never,
    /// Dereference aliases in subordinates of the base, not the base itself
    Searching,
    /// Dereference aliases when locating the base, not during the search
    FindingBase,
    /// Always dereference aliases
    Always,
}

impl DerefPolicy {
    /// Parse a dereference policy from its string form
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "never" => Ok(Self::Never),
            "searching" => Ok(Self::Searching),
            "finding_base" | "finding" => Ok(Self::FindingBase),
            "always" => Ok(Self::Always),
            other => Err(Error::invalid_deref(other)),
        }
    }

    /// Protocol wire code for this policy
    pub fn protocol_code(self) -> u8 {
        match self {
            Self::Never => 0,
            Self::Searching => 1,
            Self::FindingBase => 2,
            Self::Always => 3,
        }
    }
}

// ============================================================================
// SearchSpec
// ============================================================================

/// Parameters of one paged search, immutable after construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSpec {
    base: String,
    filter: String,
    attributes: Vec<String>,
    scope: Scope,
    attrs_only: bool,
    page_size: u32,
    time_limit_secs: u32,
    deref: DerefPolicy,
}

impl SearchSpec {
    /// Start building a spec for the given base DN and filter
    pub fn builder(base: impl Into<String>, filter: impl Into<String>) -> SearchSpecBuilder {
        SearchSpecBuilder::new(base, filter)
    }

    /// Load a spec from a YAML definition
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let def: SearchSpecDef = serde_yaml::from_str(yaml)?;
        def.into_spec()
    }

    /// Base location (DN) of the search
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Filter expression
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Attribute projection; empty means "all attributes"
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Search scope
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Whether to return attribute names only, without values
    pub fn attrs_only(&self) -> bool {
        self.attrs_only
    }

    /// Requested page size; 0 means "server default/unbounded per page"
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Per-search time limit in seconds; 0 means unlimited
    pub fn time_limit_secs(&self) -> u32 {
        self.time_limit_secs
    }

    /// Alias-dereference policy
    pub fn deref(&self) -> DerefPolicy {
        self.deref
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`SearchSpec`]
///
/// Scope and dereference policy are taken as raw strings and validated in
/// [`build`](Self::build), matching how spec definitions carry them.
#[derive(Debug, Clone)]
pub struct SearchSpecBuilder {
    base: String,
    filter: String,
    attributes: Vec<String>,
    scope: String,
    attrs_only: bool,
    page_size: i64,
    time_limit_secs: u32,
    deref: String,
}

impl SearchSpecBuilder {
    /// Create a builder with required fields and defaults for the rest
    pub fn new(base: impl Into<String>, filter: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            filter: filter.into(),
            attributes: Vec::new(),
            scope: "subtree".to_string(),
            attrs_only: false,
            page_size: i64::from(DEFAULT_PAGE_SIZE),
            time_limit_secs: 0,
            deref: "never".to_string(),
        }
    }

    /// Set the search scope (`"subtree"` or `"onelevel"`)
    #[must_use]
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    /// Set the attribute projection
    #[must_use]
    pub fn attributes<I, S>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes = attrs.into_iter().map(Into::into).collect();
        self
    }

    /// Return attribute names only, without values
    #[must_use]
    pub fn attrs_only(mut self, attrs_only: bool) -> Self {
        self.attrs_only = attrs_only;
        self
    }

    /// Set the page size; negative values normalize to the default (1000),
    /// zero is passed through verbatim (server-defined behavior)
    #[must_use]
    pub fn page_size(mut self, page_size: i64) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the per-search time limit in seconds (0 = unlimited)
    #[must_use]
    pub fn time_limit_secs(mut self, secs: u32) -> Self {
        self.time_limit_secs = secs;
        self
    }

    /// Set the alias-dereference policy by name
    #[must_use]
    pub fn deref(mut self, policy: impl Into<String>) -> Self {
        self.deref = policy.into();
        self
    }

    /// Validate and build the spec
    pub fn build(self) -> Result<SearchSpec> {
        if self.filter.is_empty() {
            return Err(Error::EmptyFilter);
        }
        let scope = Scope::parse(&self.scope)?;
        let deref = DerefPolicy::parse(&self.deref)?;
        Ok(SearchSpec {
            base: self.base,
            filter: self.filter,
            attributes: self.attributes,
            scope,
            attrs_only: self.attrs_only,
            page_size: normalize_page_size(self.page_size),
            time_limit_secs: self.time_limit_secs,
            deref,
        })
    }
}

/// Negative sizes come from callers forwarding signed protocol fields;
/// they normalize to the default rather than erroring.
fn normalize_page_size(size: i64) -> u32 {
    if size < 0 {
        DEFAULT_PAGE_SIZE
    } else {
        u32::try_from(size).unwrap_or(u32::MAX)
    }
}

// ============================================================================
// YAML definition
// ============================================================================

/// Raw search-spec definition as loaded from YAML
///
/// Field-for-field the serializable twin of [`SearchSpec`], with scope and
/// deref as strings and the page size signed. Converted (and validated)
/// via [`into_spec`](Self::into_spec).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSpecDef {
    /// Base location (DN) of the search
    pub base: String,

    /// Filter expression
    pub filter: String,

    /// Attribute projection; empty means "all attributes"
    #[serde(default)]
    pub attributes: Vec<String>,

    /// Search scope name
    #[serde(default = "default_scope")]
    pub scope: String,

    /// Return attribute names only
    #[serde(default)]
    pub attrs_only: bool,

    /// Page size (negative normalizes to the default)
    #[serde(default = "default_page_size")]
    pub page_size: i64,

    /// Time limit in seconds (0 = unlimited)
    #[serde(default)]
    pub time_limit_secs: u32,

    /// Alias-dereference policy name
    #[serde(default = "default_deref")]
    pub deref: String,
}

fn default_scope() -> String {
    "subtree".to_string()
}

fn default_page_size() -> i64 {
    i64::from(DEFAULT_PAGE_SIZE)
}

fn default_deref() -> String {
    "never".to_string()
}

impl SearchSpecDef {
    /// Validate the definition and convert it into a [`SearchSpec`]
    pub fn into_spec(self) -> Result<SearchSpec> {
        SearchSpecBuilder {
            base: self.base,
            filter: self.filter,
            attributes: self.attributes,
            scope: self.scope,
            attrs_only: self.attrs_only,
            page_size: self.page_size,
            time_limit_secs: self.time_limit_secs,
            deref: self.deref,
        }
        .build()
    }
}
