//! Policy records

use serde::Serialize;

/// A single insurance policy from the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Policy {
    /// Insurer brand name
    pub brand: String,
    /// Policy name, unique within a well-formed catalog
    pub policy: String,
    /// Annual premium in rupees
    pub price: i64,
    /// Lowercased matching tags ("high", "senior", "budget", ...)
    pub tags: Vec<String>,
    /// Free-text remarks shown on the card
    pub remarks: String,
    /// Coverage description
    pub coverage: String,
    /// Product page link
    pub url: String,
}

impl Policy {
    /// Create a policy with the required fields; optional text is left empty
    pub fn new(brand: impl Into<String>, policy: impl Into<String>, price: i64) -> Self {
        Self {
            brand: brand.into(),
            policy: policy.into(),
            price,
            tags: Vec::new(),
            remarks: String::new(),
            coverage: String::new(),
            url: super::DEFAULT_POLICY_URL.to_string(),
        }
    }

    /// Builder: set tags from a comma-separated list
    pub fn tags(mut self, tags: &str) -> Self {
        self.tags = parse_tags(tags);
        self
    }

    /// Builder: set remarks
    pub fn remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = remarks.into();
        self
    }

    /// Builder: set coverage description
    pub fn coverage(mut self, coverage: impl Into<String>) -> Self {
        self.coverage = coverage.into();
        self
    }

    /// Builder: set product URL
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Whether the policy carries the given (lowercase) tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Split a comma-separated tag cell into trimmed, lowercased, non-empty tags
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Parsed catalog, in file order
#[derive(Debug, Clone, Default)]
pub struct PolicyCatalog {
    policies: Vec<Policy>,
}

impl PolicyCatalog {
    pub fn new(policies: Vec<Policy>) -> Self {
        Self { policies }
    }

    pub fn policies(&self) -> &[Policy] {
        &self.policies
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags_normalizes() {
        assert_eq!(
            parse_tags(" High, Senior ,,CHRONIC "),
            vec!["high", "senior", "chronic"]
        );
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn test_has_tag() {
        let policy = Policy::new("Acme", "Acme Secure", 12000).tags("low,Budget");
        assert!(policy.has_tag("budget"));
        assert!(!policy.has_tag("high"));
    }
}
