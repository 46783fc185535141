use geoapi::metadata::citation::{Citation, Identifier};

use crate::error::ValidationResult;
use crate::validator::{ValidatorBase, ValidatorContainer};

/// Validates citations and identifiers.
#[derive(Debug)]
pub struct CitationValidator {
    base: ValidatorBase,
}

impl Default for CitationValidator {
    fn default() -> Self {
        Self {
            base: ValidatorBase::new("geoapi::metadata::citation"),
        }
    }
}

impl CitationValidator {
    /// Obligation checks and policy flags.
    pub fn base(&self) -> &ValidatorBase {
        &self.base
    }

    /// Validates a citation, its titles and its identifiers.
    pub fn validate_citation(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn Citation>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        let title = object.title();
        self.base.mandatory("Citation: must have a title.", &title)?;
        container.validate_international_string(title)?;
        for title in object.alternate_titles() {
            container.validate_international_string(Some(title))?;
        }
        container.validate_international_string(object.edition())?;
        for identifier in object.identifiers() {
            self.validate_identifier(container, Some(identifier))?;
        }

        Ok(())
    }

    /// Validates an identifier and its authority.
    pub fn validate_identifier(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn Identifier>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        self.base
            .mandatory("Identifier: must have a code.", &object.code())?;
        self.validate_citation(container, object.authority())?;
        container.validate_international_string(object.description())
    }
}
