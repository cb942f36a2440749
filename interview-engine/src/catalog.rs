use error_common::IntakeError;

/// Ordered, fixed list of interview topics
///
/// Catalog order defines interview progression: the next field to ask about
/// is always the first catalog entry not yet completed. There is no
/// priority or weighting rule beyond catalog order.
#[derive(Debug, Clone)]
pub struct FieldCatalog {
    fields: Vec<String>,
}

impl FieldCatalog {
    /// Build a catalog from an ordered field list
    ///
    /// # Errors
    ///
    /// Returns a validation error when the list is empty or contains a
    /// duplicate identifier.
    pub fn new<I, S>(fields: I) -> Result<Self, IntakeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        if fields.is_empty() {
            return Err(IntakeError::ValidationError(
                "field catalog must not be empty".to_string(),
            ));
        }
        for (index, field) in fields.iter().enumerate() {
            if fields.iter().skip(index.saturating_add(1)).any(|other| other == field) {
                return Err(IntakeError::ValidationError(format!(
                    "duplicate field in catalog: {}",
                    field
                )));
            }
        }
        Ok(Self { fields })
    }

    /// The standard medical screening catalog
    pub fn standard() -> Self {
        Self {
            fields: [
                "chief_complaint",
                "symptoms",
                "duration",
                "severity",
                "medical_history",
                "current_medications",
                "allergies",
                "family_history",
                "lifestyle",
                "additional_notes",
            ]
            .iter()
            .map(|field| (*field).to_string())
            .collect(),
        }
    }

    /// First field of the interview
    pub fn first(&self) -> &str {
        self.fields.first().map(String::as_str).unwrap_or_default()
    }

    /// All fields in interview order
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|candidate| candidate == field)
    }

    /// First catalog entry not present in `completed`, in catalog order
    pub fn next_unfilled(&self, completed: &[String]) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| !completed.contains(field))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Default for FieldCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_starts_with_chief_complaint() {
        let catalog = FieldCatalog::standard();
        assert_eq!(catalog.first(), "chief_complaint");
        assert_eq!(catalog.len(), 10);
    }

    #[test]
    fn test_standard_catalog_has_no_duplicates() {
        let catalog = FieldCatalog::standard();
        let rebuilt = FieldCatalog::new(catalog.fields().to_vec());
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let result = FieldCatalog::new(Vec::<String>::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let result = FieldCatalog::new(["symptoms", "duration", "symptoms"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_next_unfilled_follows_catalog_order() {
        let catalog = FieldCatalog::new(["a", "b", "c"]).unwrap();
        assert_eq!(catalog.next_unfilled(&[]), Some("a"));
        assert_eq!(catalog.next_unfilled(&["a".to_string()]), Some("b"));
        // Completion order does not influence the scan
        assert_eq!(
            catalog.next_unfilled(&["b".to_string(), "a".to_string()]),
            Some("c")
        );
        assert_eq!(
            catalog.next_unfilled(&["a".to_string(), "b".to_string(), "c".to_string()]),
            None
        );
    }
}
