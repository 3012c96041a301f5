//! CSV Loader
//!
//! Reads the policy catalog from CSV. Header names are matched
//! case-insensitively; cell values are normalized the way the catalog
//! has always been interpreted:
//!
//! - `price`: numeric, fractional part truncated, anything else becomes 0
//! - `tags`: comma-separated, trimmed and lowercased
//! - `url`: empty cells fall back to the configured default link

use std::path::Path;

use super::error::{CatalogError, CatalogResult};
use super::policy::{parse_tags, Policy, PolicyCatalog};

/// CSV catalog reader
pub struct CatalogLoader {
    default_url: String,
}

/// Column positions resolved from the header row
struct Columns {
    brand: usize,
    policy: usize,
    price: usize,
    tags: usize,
    remarks: Option<usize>,
    coverage: Option<usize>,
    url: Option<usize>,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> CatalogResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };
        let require = |name: &'static str| find(name).ok_or(CatalogError::MissingColumn(name));

        Ok(Self {
            brand: require("brand")?,
            policy: require("policy")?,
            price: require("price")?,
            tags: require("tags")?,
            remarks: find("remarks"),
            coverage: find("coverage"),
            url: find("url"),
        })
    }
}

impl CatalogLoader {
    pub fn new(default_url: impl Into<String>) -> Self {
        Self {
            default_url: default_url.into(),
        }
    }

    /// Load a catalog from a CSV file
    pub fn load(&self, path: &Path) -> CatalogResult<PolicyCatalog> {
        let file = std::fs::File::open(path).map_err(|e| CatalogError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        self.read(file)
    }

    /// Load a catalog from CSV text (useful for testing)
    pub fn load_str(&self, csv_data: &str) -> CatalogResult<PolicyCatalog> {
        self.read(csv_data.as_bytes())
    }

    fn read<R: std::io::Read>(&self, source: R) -> CatalogResult<PolicyCatalog> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(source);

        let columns = Columns::resolve(reader.headers()?)?;
        let mut policies = Vec::new();

        for result in reader.records() {
            let record = result?;
            let cell = |idx: usize| record.get(idx).unwrap_or("").trim();
            let optional = |idx: Option<usize>| idx.map(cell).unwrap_or("").to_string();

            let url = optional(columns.url);
            let url = if url.is_empty() {
                self.default_url.clone()
            } else {
                url
            };

            policies.push(Policy {
                brand: cell(columns.brand).to_string(),
                policy: cell(columns.policy).to_string(),
                price: coerce_price(cell(columns.price)),
                tags: parse_tags(cell(columns.tags)),
                remarks: optional(columns.remarks),
                coverage: optional(columns.coverage),
                url,
            });
        }

        Ok(PolicyCatalog::new(policies))
    }
}

/// Numeric coercion for the price column; non-numbers become 0
fn coerce_price(raw: &str) -> i64 {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => value.trunc() as i64,
        _ => 0,
    }
}
