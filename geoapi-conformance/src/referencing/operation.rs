use geoapi::referencing::crs::CoordinateReferenceSystem;
use geoapi::referencing::operation::{
    ConcatenatedOperation, Conversion, CoordinateOperation, Formula, MathTransform, OperationKind,
    OperationMethod, PassThroughOperation, SingleOperation, TransformKind, Transformation,
};

use super::{crs_dimension, validate_identified_object};
use crate::assertions::{assert_between, assert_equals, assert_not_same, assert_same, assert_strictly_positive};
use crate::error::ValidationResult;
use crate::validator::{ValidatorBase, ValidatorContainer};

/// Validates coordinate operations, operation methods and math transforms.
#[derive(Debug)]
pub struct OperationValidator {
    base: ValidatorBase,
}

impl Default for OperationValidator {
    fn default() -> Self {
        Self {
            base: ValidatorBase::new("geoapi::referencing::operation"),
        }
    }
}

fn assert_crs_dimension(
    message: &str,
    crs: Option<&dyn CoordinateReferenceSystem>,
    dimension: usize,
) -> ValidationResult {
    match crs.and_then(crs_dimension) {
        Some(expected) => assert_equals(message, expected, dimension),
        None => Ok(()),
    }
}

impl OperationValidator {
    /// Obligation checks and policy flags.
    pub fn base(&self) -> &ValidatorBase {
        &self.base
    }

    /// Validates an operation according to its kind.
    pub fn dispatch(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn CoordinateOperation>,
    ) -> ValidationResult {
        match object {
            Some(object) => self.dispatch_operation(container, object),
            None => Ok(()),
        }
    }

    fn dispatch_operation<T: CoordinateOperation + ?Sized>(
        &self,
        container: &ValidatorContainer,
        object: &T,
    ) -> ValidationResult {
        match object.kind() {
            OperationKind::Conversion(operation) => self.validate_conversion(container, Some(operation)),
            OperationKind::Transformation(operation) => {
                self.validate_transformation(container, Some(operation))
            }
            OperationKind::Concatenated(operation) => {
                self.validate_concatenated(container, Some(operation))
            }
            OperationKind::PassThrough(operation) => {
                self.validate_pass_through(container, Some(operation))
            }
            OperationKind::Single(operation) => self.validate_single(container, operation),
            OperationKind::Other => self.validate_coordinate_operation(container, object),
        }
    }

    /// Checks the properties common to all operations. The math transform dimensions must match the CRS ones.
    fn validate_coordinate_operation<T: CoordinateOperation + ?Sized>(
        &self,
        container: &ValidatorContainer,
        object: &T,
    ) -> ValidationResult {
        validate_identified_object(&self.base, container, object)?;
        container.validate_international_string(object.scope())?;
        container.validate_extent(object.domain_of_validity())?;

        let source_crs = object.source_crs();
        let target_crs = object.target_crs();
        container.validate_crs(source_crs)?;
        container.validate_crs(target_crs)?;

        let Some(transform) = object.math_transform() else {
            return Ok(());
        };

        self.validate_math_transform(Some(transform))?;
        assert_crs_dimension(
            "CoordinateOperation: MathTransform source dimension must match sourceCRS dimension.",
            source_crs,
            transform.source_dimensions(),
        )?;
        assert_crs_dimension(
            "CoordinateOperation: MathTransform target dimension must match targetCRS dimension.",
            target_crs,
            transform.target_dimensions(),
        )
    }

    /// Checks the method and the parameter values of a single operation.
    fn validate_single<T: SingleOperation + ?Sized>(
        &self,
        container: &ValidatorContainer,
        object: &T,
    ) -> ValidationResult {
        self.validate_coordinate_operation(container, object)?;

        let method = object.method();
        self.base
            .mandatory("Operation: OperationMethod is mandatory.", &method)?;
        if let Some(method) = method {
            self.validate_method(container, Some(method))?;
            if let Some(transform) = object.math_transform() {
                if let Some(dimension) = method.source_dimensions() {
                    assert_equals(
                        "Operation: MathTransform source dimension must match OperationMethod source dimension.",
                        dimension,
                        transform.source_dimensions(),
                    )?;
                }
                if let Some(dimension) = method.target_dimensions() {
                    assert_equals(
                        "Operation: MathTransform target dimension must match OperationMethod target dimension.",
                        dimension,
                        transform.target_dimensions(),
                    )?;
                }
            }
        }

        let parameters = object.parameter_values();
        self.base
            .mandatory("Operation: ParameterValues are mandatory.", &parameters)?;
        container.validate_parameter_value_group(parameters)
    }

    /// Validates a conversion.
    ///
    /// A defining conversion has no math transform and must not have source and target CRS. Other conversions
    /// must have both. The operation version is forbidden in all cases.
    pub fn validate_conversion(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn Conversion>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        self.validate_single(container, object)?;
        let defining = object.math_transform().is_none();
        let (source_message, target_message) = if defining {
            (
                "Conversion: defining conversion should not have source CRS.",
                "Conversion: defining conversion should not have target CRS.",
            )
        } else {
            (
                "Conversion: non-defining conversion should have a source CRS.",
                "Conversion: non-defining conversion should have a target CRS.",
            )
        };
        self.base
            .conditional(source_message, &object.source_crs(), !defining)?;
        self.base
            .conditional(target_message, &object.target_crs(), !defining)?;
        self.base.forbidden(
            "Conversion: should not have operation version.",
            &object.operation_version(),
        )
    }

    /// Validates a transformation. Version, CRS and math transform are mandatory.
    pub fn validate_transformation(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn Transformation>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        self.validate_single(container, object)?;
        self.base.mandatory(
            "Transformation: operationVersion is a mandatory attribute.",
            &object.operation_version(),
        )?;
        self.base.mandatory(
            "Transformation: sourceCRS is a mandatory attribute.",
            &object.source_crs(),
        )?;
        self.base.mandatory(
            "Transformation: targetCRS is a mandatory attribute.",
            &object.target_crs(),
        )?;
        self.base.mandatory(
            "Transformation: MathTransform is a mandatory attribute.",
            &object.math_transform(),
        )
    }

    /// Validates a chain of operations. Each step must start where the previous one ends.
    pub fn validate_concatenated(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn ConcatenatedOperation>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        self.validate_coordinate_operation(container, object)?;
        let transform = object.math_transform();
        self.base.mandatory(
            "ConcatenatedOperation: shall have a MathTransform.",
            &transform,
        )?;

        let operations = object.operations();
        self.base.mandatory(
            "ConcatenatedOperation: shall contain at least one single operation.",
            &operations,
        )?;
        let mut previous: Option<&dyn SingleOperation> = None;
        for &single in &operations {
            assert_not_same(
                "ConcatenatedOperation: can't contain itself as a single element.",
                object,
                single,
            )?;
            self.dispatch_operation(container, single)?;
            if let Some(previous) = previous {
                if let (Some(last), Some(next)) = (previous.math_transform(), single.math_transform()) {
                    assert_equals(
                        "ConcatenatedOperation: source dimension of a single operation must match the target dimension of the previous one.",
                        last.target_dimensions(),
                        next.source_dimensions(),
                    )?;
                }
                if let Some(dimension) = single.source_crs().and_then(crs_dimension) {
                    assert_crs_dimension(
                        "ConcatenatedOperation: source dimension of a single operation must match the target dimension of the previous one.",
                        previous.target_crs(),
                        dimension,
                    )?;
                }
            }
            previous = Some(single);
        }

        let (Some(&first), Some(&last)) = (operations.first(), operations.last()) else {
            return Ok(());
        };
        if let Some(transform) = transform {
            if let Some(first) = first.math_transform() {
                assert_equals(
                    "ConcatenatedOperation: source dimension must match the source dimension of the first single operation.",
                    first.source_dimensions(),
                    transform.source_dimensions(),
                )?;
            }
            if let Some(last) = last.math_transform() {
                assert_equals(
                    "ConcatenatedOperation: target dimension must match the target dimension of the last single operation.",
                    last.target_dimensions(),
                    transform.target_dimensions(),
                )?;
            }
        }
        if let (Some(expected), Some(actual)) = (first.source_crs(), object.source_crs()) {
            assert_same(
                "ConcatenatedOperation: sourceCRS must be the source of the first single operation.",
                expected,
                actual,
            )?;
        }
        if let (Some(expected), Some(actual)) = (last.target_crs(), object.target_crs()) {
            assert_same(
                "ConcatenatedOperation: targetCRS must be the target of the last single operation.",
                expected,
                actual,
            )?;
        }

        Ok(())
    }

    /// Validates an operation applied on a subset of the coordinates.
    pub fn validate_pass_through(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn PassThroughOperation>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        self.validate_coordinate_operation(container, object)?;
        let transform = object.math_transform();
        self.base.mandatory(
            "PassThroughOperation: shall have a MathTransform.",
            &transform,
        )?;

        let operation = object.operation();
        self.base.mandatory(
            "PassThroughOperation: operation() is mandatory.",
            &operation,
        )?;
        if let Some(operation) = operation {
            assert_not_same(
                "PassThroughOperation: operation() can't be this.",
                object,
                operation,
            )?;
            self.dispatch_operation(container, operation)?;
        }

        let index = object.modified_coordinates();
        self.base.mandatory(
            "PassThroughOperation: modified coordinates are mandatory.",
            &index,
        )?;
        let (Some(transform), Some(method), Some(index)) = (
            transform,
            operation.and_then(|operation| operation.method()),
            index,
        ) else {
            return Ok(());
        };

        let source_dimensions = transform.source_dimensions();
        if let Some(method_source) = method.source_dimensions() {
            assert_equals(
                "PassThroughOperation: the number of modified coordinates must match the source dimension of the operation to apply.",
                method_source,
                index.len(),
            )?;
            if let Some(method_target) = method.target_dimensions() {
                assert_equals(
                    "PassThroughOperation: wrong target dimension.",
                    (source_dimensions + method_target).checked_sub(method_source),
                    Some(transform.target_dimensions()),
                )?;
            }
        }
        for i in index {
            assert_between(
                "PassThroughOperation: invalid modified coordinate index.",
                0,
                source_dimensions.saturating_sub(1),
                i,
            )?;
        }

        Ok(())
    }

    /// Validates an operation method, its formula and its parameter descriptors.
    pub fn validate_method(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn OperationMethod>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        if let Some(dimension) = object.source_dimensions() {
            assert_strictly_positive("OperationMethod: source dimension must be greater than zero.", dimension)?;
        }
        if let Some(dimension) = object.target_dimensions() {
            assert_strictly_positive("OperationMethod: target dimension must be greater than zero.", dimension)?;
        }
        self.validate_formula(container, object.formula())?;
        container.validate_parameter_descriptor_group(object.parameters())?;
        validate_identified_object(&self.base, container, object)
    }

    /// Validates a formula.
    pub fn validate_formula(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn Formula>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        container.validate_international_string(object.formula())?;
        container.validate_citation(object.citation())
    }

    /// Validates the dimensions of a math transform.
    pub fn validate_math_transform(&self, object: Option<&dyn MathTransform>) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        let source = object.source_dimensions();
        let target = object.target_dimensions();
        assert_strictly_positive("MathTransform: source dimension must be greater than zero.", source)?;
        assert_strictly_positive("MathTransform: target dimension must be greater than zero.", target)?;
        match object.kind() {
            TransformKind::OneDimensional => {
                assert_equals("MathTransform1D: source dimension must be 1.", 1, source)?;
                assert_equals("MathTransform1D: target dimension must be 1.", 1, target)?;
            }
            TransformKind::TwoDimensional => {
                assert_equals("MathTransform2D: source dimension must be 2.", 2, source)?;
                assert_equals("MathTransform2D: target dimension must be 2.", 2, target)?;
            }
            TransformKind::General => {}
        }
        if object.is_identity() {
            assert_equals(
                "MathTransform: identity transforms must have the same source and target dimensions.",
                source,
                target,
            )?;
        }

        Ok(())
    }
}
