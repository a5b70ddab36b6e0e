//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use serde::Serialize;

/// Coverage data for a single culture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CultureCoverage {
    /// Culture tag (e.g., "sv", "en-US").
    pub culture: String,
    /// Number of invariant keys translated.
    pub translated: usize,
    /// Number of invariant keys.
    pub total: usize,
    /// Invariant keys the culture lacks.
    pub missing: Vec<String>,
    /// Keys the culture defines that the invariant culture does not.
    pub unknown: Vec<String>,
}

impl CultureCoverage {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Format coverage data as an ASCII table.
pub fn format_coverage_table(coverage: &[CultureCoverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Culture", "Coverage", "Missing", "Unknown"]);

    for culture in coverage {
        table.add_row(vec![
            culture.culture.clone(),
            format!("{}/{}", culture.translated, culture.total),
            culture.missing.len().to_string(),
            culture.unknown.len().to_string(),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_row_per_culture() {
        let coverage = vec![
            CultureCoverage {
                culture: "sv".to_string(),
                translated: 2,
                total: 3,
                missing: vec!["Farewell".to_string()],
                unknown: Vec::new(),
            },
            CultureCoverage {
                culture: "en".to_string(),
                translated: 3,
                total: 3,
                missing: Vec::new(),
                unknown: vec!["Extra".to_string()],
            },
        ];

        let table = format_coverage_table(&coverage);
        assert_eq!(table.row_iter().count(), 2);

        let rendered = table.to_string();
        assert!(rendered.contains("2/3"));
        assert!(rendered.contains("3/3"));
        assert!(!coverage[0].is_complete());
        assert!(coverage[1].is_complete());
    }
}
