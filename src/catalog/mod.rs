//! Static product catalog.
//!
//! The catalog is an ordered, typed list of [`CatalogEntry`] values. It is
//! built once at startup (usually from [`Catalog::builtin`]) and shared
//! read-only by the recommendation strategies and the prompt renderer.

mod builtin;

pub use builtin::*;

use serde::{Deserialize, Serialize};

/// URL used when neither a plan nor an entry provides one.
pub const FALLBACK_URL: &str = "#";

/// Role an entry plays in a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryRole {
    /// Eligible to be the primary recommendation.
    Principal,
    /// The multi-product trial aggregator, always listed as an alternative.
    Explorer,
}

/// Commercial tier of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanTier {
    Free,
    Premium,
    Team,
}

/// A purchasable plan of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub name: String,
    /// Display-only price text.
    pub price: String,
    pub features: String,
    pub url: String,
    pub tier: PlanTier,
}

/// A known product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Unique key.
    pub name: String,
    pub description: String,
    pub role: EntryRole,
    /// Short blurb used when the entry is listed as an alternative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default)]
    pub plans: Vec<Plan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Ordered collection of catalog entries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Plan {
    /// Create a new plan.
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        features: impl Into<String>,
        url: impl Into<String>,
        tier: PlanTier,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            features: features.into(),
            url: url.into(),
            tier,
        }
    }
}

impl CatalogEntry {
    /// Create a principal product entry.
    pub fn principal(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_role(name, description, EntryRole::Principal)
    }

    /// Create the explorer entry.
    pub fn explorer(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_role(name, description, EntryRole::Explorer)
    }

    fn with_role(name: impl Into<String>, description: impl Into<String>, role: EntryRole) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            role,
            tagline: None,
            plans: Vec::new(),
            general_url: None,
            url: None,
        }
    }

    /// Append a plan.
    pub fn with_plan(mut self, plan: Plan) -> Self {
        self.plans.push(plan);
        self
    }

    /// Set the alternative-card blurb.
    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = Some(tagline.into());
        self
    }

    /// Set the general landing URL.
    pub fn with_general_url(mut self, url: impl Into<String>) -> Self {
        self.general_url = Some(url.into());
        self
    }

    /// Set the bare URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Find a plan by exact name.
    pub fn plan(&self, name: &str) -> Option<&Plan> {
        self.plans.iter().find(|p| p.name == name)
    }

    /// First plan of the given tier.
    pub fn plan_by_tier(&self, tier: PlanTier) -> Option<&Plan> {
        self.plans.iter().find(|p| p.tier == tier)
    }

    /// General URL, then bare URL.
    pub fn landing_url(&self) -> Option<&str> {
        self.general_url
            .as_deref()
            .or(self.url.as_deref())
            .filter(|u| !u.is_empty())
    }

    /// Blurb for alternative listings, falling back to the description.
    pub fn blurb(&self) -> &str {
        self.tagline.as_deref().unwrap_or(&self.description)
    }
}

impl Catalog {
    /// Create a catalog from entries in display order.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// All entries in order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Principal products in catalog order.
    pub fn principals(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries
            .iter()
            .filter(|e| e.role == EntryRole::Principal)
    }

    /// The explorer entry, if configured.
    pub fn explorer(&self) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.role == EntryRole::Explorer)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> CatalogEntry {
        CatalogEntry::principal("Tool", "A tool")
            .with_plan(Plan::new("Free", "無料", "basic", "https://tool/free", PlanTier::Free))
            .with_plan(Plan::new("Pro", "$20", "more", "https://tool/pro", PlanTier::Premium))
            .with_general_url("https://tool/")
    }

    #[test]
    fn test_plan_lookup_by_name_and_tier() {
        let entry = sample_entry();
        assert_eq!(entry.plan("Pro").unwrap().url, "https://tool/pro");
        assert!(entry.plan("Enterprise").is_none());
        assert_eq!(entry.plan_by_tier(PlanTier::Free).unwrap().name, "Free");
        assert!(entry.plan_by_tier(PlanTier::Team).is_none());
    }

    #[test]
    fn test_landing_url_prefers_general_url() {
        let entry = sample_entry().with_url("https://tool/bare");
        assert_eq!(entry.landing_url(), Some("https://tool/"));

        let explorer = CatalogEntry::explorer("Hub", "many tools").with_url("https://hub/");
        assert_eq!(explorer.landing_url(), Some("https://hub/"));

        let bare = CatalogEntry::explorer("Nowhere", "no links");
        assert_eq!(bare.landing_url(), None);
    }

    #[test]
    fn test_empty_url_is_not_a_landing_url() {
        let entry = CatalogEntry::explorer("Hub", "x").with_url("");
        assert_eq!(entry.landing_url(), None);
    }

    #[test]
    fn test_blurb_falls_back_to_description() {
        let entry = sample_entry();
        assert_eq!(entry.blurb(), "A tool");
        let entry = entry.with_tagline("short");
        assert_eq!(entry.blurb(), "short");
    }

    #[test]
    fn test_catalog_roles() {
        let catalog = Catalog::new(vec![
            sample_entry(),
            CatalogEntry::explorer("Hub", "many tools"),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.principals().count(), 1);
        assert_eq!(catalog.explorer().unwrap().name, "Hub");
        assert!(catalog.get("Tool").is_some());
        assert!(catalog.get("Missing").is_none());
    }

    #[test]
    fn test_catalog_serializes_camel_case() {
        let json = serde_json::to_value(sample_entry()).unwrap();
        assert_eq!(json["generalUrl"], "https://tool/");
        assert_eq!(json["role"], "principal");
        assert_eq!(json["plans"][1]["tier"], "premium");
        assert!(json.get("url").is_none());
    }
}
