use geoapi::geometry::{DirectPosition, Envelope, Geometry};
use geoapi::metadata::citation::{Citation, Identifier};
use geoapi::metadata::extent::{Extent, GeographicExtent, TemporalExtent, VerticalExtent};
use geoapi::metadata::quality::{DataQuality, Element, QualityResult};
use geoapi::parameter::{
    GeneralParameterDescriptor, GeneralParameterValue, ParameterDescriptorGroup, ParameterValueGroup,
};
use geoapi::referencing::crs::{CoordinateReferenceSystem, VerticalCrs};
use geoapi::referencing::cs::{CoordinateSystem, CoordinateSystemAxis};
use geoapi::referencing::datum::{
    Datum, Ellipsoid, EngineeringDatum, GeodeticDatum, ImageDatum, PrimeMeridian, TemporalDatum, VerticalDatum,
};
use geoapi::referencing::operation::{
    ConcatenatedOperation, Conversion, CoordinateOperation, Formula, MathTransform, OperationMethod,
    PassThroughOperation, Transformation,
};
use geoapi::referencing::{IdentifiedKind, IdentifiedObject};
use geoapi::util::{GenericName, InternationalString, NameSpace};
use geoapi::{Describable, Role};
use log::debug;

use super::ValidatorBase;
use crate::configuration::keys;
use crate::error::{ConfigurationError, ValidationResult};
use crate::geometry::GeometryValidator;
use crate::metadata::{CitationValidator, ExtentValidator, QualityValidator};
use crate::referencing::{
    self, CrsValidator, CsValidator, DatumValidator, OperationValidator, ParameterValidator,
};
use crate::util::NameValidator;
use crate::{Configuration, Units};

/// The set of validators used together, one per family of ISO types.
///
/// Validators call each other through the container, so replacing a field changes the validation of that family
/// wherever it appears in an object graph.
#[derive(Debug, Default)]
pub struct ValidatorContainer {
    /// Names, name spaces and international strings.
    pub naming: NameValidator,
    /// Citations and identifiers.
    pub citation: CitationValidator,
    /// Spatial and temporal extents.
    pub extent: ExtentValidator,
    /// Data quality.
    pub quality: QualityValidator,
    /// Datums, ellipsoids and prime meridians.
    pub datum: DatumValidator,
    /// Coordinate systems and axes.
    pub cs: CsValidator,
    /// Coordinate reference systems.
    pub crs: CrsValidator,
    /// Parameter descriptors and values.
    pub parameter: ParameterValidator,
    /// Coordinate operations.
    pub operation: OperationValidator,
    /// Positions, envelopes and geometries.
    pub geometry: GeometryValidator,
}

impl ValidatorContainer {
    fn bases(&self) -> [&ValidatorBase; 10] {
        [
            self.naming.base(),
            self.citation.base(),
            self.extent.base(),
            self.quality.base(),
            self.datum.base(),
            self.cs.base(),
            self.crs.base(),
            self.parameter.base(),
            self.operation.base(),
            self.geometry.base(),
        ]
    }

    /// Sets whether missing mandatory attributes fail the validation, for all validators.
    pub fn set_require_mandatory_attributes(&self, value: bool) {
        for base in self.bases() {
            base.set_require_mandatory_attributes(value);
        }
    }

    /// Sets whether present forbidden attributes fail the validation, for all validators.
    pub fn set_enforce_forbidden_attributes(&self, value: bool) {
        for base in self.bases() {
            base.set_enforce_forbidden_attributes(value);
        }
    }

    /// Applies the policy found in the configuration.
    ///
    /// When [`keys::IS_VALIDATION_ENABLED`] is `false`, obligation violations are only logged. Units stored under
    /// [`keys::UNITS`] replace the default ones.
    pub fn configure(&mut self, configuration: &Configuration) -> Result<(), ConfigurationError> {
        if configuration.get(&keys::IS_VALIDATION_ENABLED)? == Some(&false) {
            debug!("Validation disabled by configuration, obligations are relaxed");
            self.set_require_mandatory_attributes(false);
            self.set_enforce_forbidden_attributes(false);
        }

        self.datum.units = Units::from_configuration(configuration)?;
        Ok(())
    }

    /// Validates the object for every role it plays. Stops at the first failure.
    pub fn dispatch(&self, object: &dyn Describable) -> ValidationResult {
        for role in object.roles() {
            match role {
                Role::InternationalString(object) => self.validate_international_string(Some(object))?,
                Role::Identifier(object) => self.validate_identifier(Some(object))?,
                Role::Citation(object) => self.validate_citation(Some(object))?,
                Role::GenericName(object) => self.validate_generic_name(Some(object))?,
                Role::NameSpace(object) => self.validate_name_space(Some(object))?,
                Role::IdentifiedObject(object) => self.validate_identified_object(Some(object))?,
                Role::ParameterValue(object) => self.validate_parameter_value(Some(object))?,
                Role::DirectPosition(object) => self.validate_direct_position(Some(object))?,
                Role::Envelope(object) => self.validate_envelope(Some(object))?,
                Role::Extent(object) => self.validate_extent(Some(object))?,
                Role::GeographicExtent(object) => self.validate_geographic_extent(Some(object))?,
                Role::VerticalExtent(object) => self.validate_vertical_extent(Some(object))?,
                Role::TemporalExtent(object) => self.validate_temporal_extent(Some(object))?,
                Role::DataQuality(object) => self.validate_data_quality(Some(object))?,
                Role::QualityElement(object) => self.validate_quality_element(Some(object))?,
                Role::QualityResult(object) => self.validate_quality_result(Some(object))?,
            }
        }

        Ok(())
    }

    /// Validates an identified object according to its family.
    pub fn validate_identified_object(&self, object: Option<&dyn IdentifiedObject>) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        match object.identified_kind() {
            IdentifiedKind::ReferenceSystem(crs) => self.validate_crs(Some(crs)),
            IdentifiedKind::CoordinateSystem(cs) => self.validate_coordinate_system(Some(cs)),
            IdentifiedKind::Axis(axis) => self.validate_axis(Some(axis)),
            IdentifiedKind::Datum(datum) => self.validate_datum(Some(datum)),
            IdentifiedKind::PrimeMeridian(meridian) => self.validate_prime_meridian(Some(meridian)),
            IdentifiedKind::Ellipsoid(ellipsoid) => self.validate_ellipsoid(Some(ellipsoid)),
            IdentifiedKind::Operation(operation) => self.validate_coordinate_operation(Some(operation)),
            IdentifiedKind::OperationMethod(method) => self.validate_operation_method(Some(method)),
            IdentifiedKind::ParameterDescriptor(descriptor) => {
                self.validate_parameter_descriptor(Some(descriptor))
            }
            IdentifiedKind::Other => {
                referencing::validate_identified_object(self.crs.base(), self, object)
            }
        }
    }

    // Naming

    /// Validates a localizable string.
    pub fn validate_international_string(&self, object: Option<&dyn InternationalString>) -> ValidationResult {
        self.naming.validate_international_string(object)
    }

    /// Validates a generic name according to its kind.
    pub fn validate_generic_name(&self, object: Option<&dyn GenericName>) -> ValidationResult {
        self.naming.dispatch(object)
    }

    /// Validates a name space.
    pub fn validate_name_space(&self, object: Option<&dyn NameSpace>) -> ValidationResult {
        self.naming.validate_name_space(object)
    }

    // Metadata

    /// Validates a citation.
    pub fn validate_citation(&self, object: Option<&dyn Citation>) -> ValidationResult {
        self.citation.validate_citation(self, object)
    }

    /// Validates an identifier.
    pub fn validate_identifier(&self, object: Option<&dyn Identifier>) -> ValidationResult {
        self.citation.validate_identifier(self, object)
    }

    /// Validates an extent.
    pub fn validate_extent(&self, object: Option<&dyn Extent>) -> ValidationResult {
        self.extent.validate_extent(self, object)
    }

    /// Validates a geographic extent according to its kind.
    pub fn validate_geographic_extent(&self, object: Option<&dyn GeographicExtent>) -> ValidationResult {
        self.extent.dispatch_geographic(self, object)
    }

    /// Validates a vertical extent.
    pub fn validate_vertical_extent(&self, object: Option<&dyn VerticalExtent>) -> ValidationResult {
        self.extent.validate_vertical(self, object)
    }

    /// Validates a temporal extent.
    pub fn validate_temporal_extent(&self, object: Option<&dyn TemporalExtent>) -> ValidationResult {
        self.extent.validate_temporal(object)
    }

    /// Validates a data quality object.
    pub fn validate_data_quality(&self, object: Option<&dyn DataQuality>) -> ValidationResult {
        self.quality.validate_data_quality(self, object)
    }

    /// Validates a data quality element.
    pub fn validate_quality_element(&self, object: Option<&dyn Element>) -> ValidationResult {
        self.quality.validate_element(self, object)
    }

    /// Validates a data quality result according to its kind.
    pub fn validate_quality_result(&self, object: Option<&dyn QualityResult>) -> ValidationResult {
        self.quality.dispatch_result(self, object)
    }

    // Referencing

    /// Validates a datum according to its kind.
    pub fn validate_datum(&self, object: Option<&dyn Datum>) -> ValidationResult {
        self.datum.dispatch(self, object)
    }

    /// Validates a geodetic datum.
    pub fn validate_geodetic_datum(&self, object: Option<&dyn GeodeticDatum>) -> ValidationResult {
        self.datum.validate_geodetic(self, object)
    }

    /// Validates a vertical datum.
    pub fn validate_vertical_datum(&self, object: Option<&dyn VerticalDatum>) -> ValidationResult {
        self.datum.validate_vertical(self, object)
    }

    /// Validates a temporal datum.
    pub fn validate_temporal_datum(&self, object: Option<&dyn TemporalDatum>) -> ValidationResult {
        self.datum.validate_temporal(self, object)
    }

    /// Validates an image datum.
    pub fn validate_image_datum(&self, object: Option<&dyn ImageDatum>) -> ValidationResult {
        self.datum.validate_image(self, object)
    }

    /// Validates an engineering datum.
    pub fn validate_engineering_datum(&self, object: Option<&dyn EngineeringDatum>) -> ValidationResult {
        self.datum.validate_engineering(self, object)
    }

    /// Validates an ellipsoid.
    pub fn validate_ellipsoid(&self, object: Option<&dyn Ellipsoid>) -> ValidationResult {
        self.datum.validate_ellipsoid(self, object)
    }

    /// Validates a prime meridian.
    pub fn validate_prime_meridian(&self, object: Option<&dyn PrimeMeridian>) -> ValidationResult {
        self.datum.validate_prime_meridian(self, object)
    }

    /// Validates a coordinate system according to its kind.
    pub fn validate_coordinate_system(&self, object: Option<&dyn CoordinateSystem>) -> ValidationResult {
        self.cs.dispatch(self, object)
    }

    /// Validates a coordinate system axis.
    pub fn validate_axis(&self, object: Option<&dyn CoordinateSystemAxis>) -> ValidationResult {
        self.cs.validate_axis(self, object)
    }

    /// Validates a CRS according to its kind.
    pub fn validate_crs(&self, object: Option<&dyn CoordinateReferenceSystem>) -> ValidationResult {
        self.crs.dispatch(self, object)
    }

    /// Validates a vertical CRS.
    pub fn validate_vertical_crs(&self, object: Option<&dyn VerticalCrs>) -> ValidationResult {
        self.crs.validate_vertical(self, object)
    }

    /// Validates a parameter descriptor or a group of descriptors.
    pub fn validate_parameter_descriptor(
        &self,
        object: Option<&dyn GeneralParameterDescriptor>,
    ) -> ValidationResult {
        self.parameter.dispatch_descriptor(self, object)
    }

    /// Validates a group of parameter descriptors.
    pub fn validate_parameter_descriptor_group(
        &self,
        object: Option<&dyn ParameterDescriptorGroup>,
    ) -> ValidationResult {
        self.parameter.validate_descriptor_group(self, object)
    }

    /// Validates a parameter value or a group of values.
    pub fn validate_parameter_value(&self, object: Option<&dyn GeneralParameterValue>) -> ValidationResult {
        self.parameter.dispatch_value(self, object)
    }

    /// Validates a group of parameter values.
    pub fn validate_parameter_value_group(&self, object: Option<&dyn ParameterValueGroup>) -> ValidationResult {
        self.parameter.validate_value_group(self, object)
    }

    /// Validates a coordinate operation according to its kind.
    pub fn validate_coordinate_operation(&self, object: Option<&dyn CoordinateOperation>) -> ValidationResult {
        self.operation.dispatch(self, object)
    }

    /// Validates a conversion.
    pub fn validate_conversion(&self, object: Option<&dyn Conversion>) -> ValidationResult {
        self.operation.validate_conversion(self, object)
    }

    /// Validates a transformation.
    pub fn validate_transformation(&self, object: Option<&dyn Transformation>) -> ValidationResult {
        self.operation.validate_transformation(self, object)
    }

    /// Validates a concatenated operation.
    pub fn validate_concatenated_operation(
        &self,
        object: Option<&dyn ConcatenatedOperation>,
    ) -> ValidationResult {
        self.operation.validate_concatenated(self, object)
    }

    /// Validates a pass-through operation.
    pub fn validate_pass_through_operation(
        &self,
        object: Option<&dyn PassThroughOperation>,
    ) -> ValidationResult {
        self.operation.validate_pass_through(self, object)
    }

    /// Validates an operation method.
    pub fn validate_operation_method(&self, object: Option<&dyn OperationMethod>) -> ValidationResult {
        self.operation.validate_method(self, object)
    }

    /// Validates a formula.
    pub fn validate_formula(&self, object: Option<&dyn Formula>) -> ValidationResult {
        self.operation.validate_formula(self, object)
    }

    /// Validates a math transform.
    pub fn validate_math_transform(&self, object: Option<&dyn MathTransform>) -> ValidationResult {
        self.operation.validate_math_transform(object)
    }

    // Geometry

    /// Validates a direct position.
    pub fn validate_direct_position(&self, object: Option<&dyn DirectPosition>) -> ValidationResult {
        self.geometry.validate_direct_position(self, object)
    }

    /// Validates an envelope.
    pub fn validate_envelope(&self, object: Option<&dyn Envelope>) -> ValidationResult {
        self.geometry.validate_envelope(self, object)
    }

    /// Validates a geometry.
    pub fn validate_geometry(&self, object: Option<&dyn Geometry>) -> ValidationResult {
        self.geometry.validate_geometry(self, object)
    }
}
