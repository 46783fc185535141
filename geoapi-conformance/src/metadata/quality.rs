use geoapi::metadata::quality::{
    ConformanceResult, DataQuality, DescriptiveResult, Element, QualityResult,
    QuantitativeResult, ResultKind, Scope,
};

use crate::error::ValidationResult;
use crate::validator::{ValidatorBase, ValidatorContainer};

/// Validates data quality reports and their results.
#[derive(Debug)]
pub struct QualityValidator {
    base: ValidatorBase,
}

impl Default for QualityValidator {
    fn default() -> Self {
        Self {
            base: ValidatorBase::new("geoapi::metadata::quality"),
        }
    }
}

impl QualityValidator {
    /// Obligation checks and policy flags.
    pub fn base(&self) -> &ValidatorBase {
        &self.base
    }

    /// Validates a data quality object, its scope and its reports.
    pub fn validate_data_quality(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn DataQuality>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        let scope = object.scope();
        self.base
            .mandatory("DataQuality: must have a scope.", &scope)?;
        self.validate_scope(container, scope)?;

        let reports = object.reports();
        self.base
            .mandatory("DataQuality: must have at least one report.", &reports)?;
        for report in reports {
            self.validate_element(container, Some(report))?;
        }

        Ok(())
    }

    /// Validates the scope of a quality report or result.
    pub fn validate_scope(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn Scope>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        self.base
            .mandatory("Scope: must have a level.", &object.level())?;
        for extent in object.extents() {
            container.validate_extent(Some(extent))?;
        }

        Ok(())
    }

    /// Validates a quality element and its results.
    pub fn validate_element(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn Element>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        container.validate_identifier(object.measure_identification())?;
        container.validate_citation(object.evaluation_procedure())?;
        for result in object.results() {
            self.dispatch_result(container, Some(result))?;
        }

        Ok(())
    }

    /// Validates a result according to its kind.
    pub fn dispatch_result(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn QualityResult>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        match object.kind() {
            ResultKind::Descriptive(result) => self.validate_descriptive(container, Some(result)),
            ResultKind::Conformance(result) => self.validate_conformance(container, Some(result)),
            ResultKind::Quantitative(result) => self.validate_quantitative(container, Some(result)),
            ResultKind::Other => self.validate_scope(container, object.result_scope()),
        }
    }

    /// Validates a result given as a textual statement.
    pub fn validate_descriptive(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn DescriptiveResult>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        self.validate_scope(container, object.result_scope())?;
        let statement = object.statement();
        self.base
            .mandatory("DescriptiveResult: must have a statement.", &statement)?;
        container.validate_international_string(statement)
    }

    /// Validates a pass/fail result against a specification.
    pub fn validate_conformance(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn ConformanceResult>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        self.validate_scope(container, object.result_scope())?;
        let specification = object.specification();
        self.base.mandatory(
            "ConformanceResult: must have a specification.",
            &specification,
        )?;
        container.validate_citation(specification)?;
        container.validate_international_string(object.explanation())?;
        self.base
            .mandatory("ConformanceResult: must have a Boolean.", &object.pass())
    }

    /// Validates a result given as numerical values.
    pub fn validate_quantitative(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn QuantitativeResult>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        self.validate_scope(container, object.result_scope())?;
        self.base.mandatory(
            "QuantitativeResult: must have at least one value.",
            &object.values(),
        )
    }
}
