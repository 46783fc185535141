use std::fmt::{Debug, Formatter};
use std::sync::OnceLock;
use std::time::SystemTime;

use geoapi::geometry::{DirectPosition, Envelope};
use geoapi::metadata::citation::Identifier;
use geoapi::metadata::extent::Extent;
use geoapi::parameter::{
    DescriptorKind, GeneralParameterDescriptor, GeneralParameterValue, ParameterDescriptor, ParameterDescriptorGroup,
    ParameterKind, ParameterValue, ParameterValueGroup, Value, ValueType,
};
use geoapi::referencing::crs::{
    CompoundCrs, CoordinateReferenceSystem, CrsKind, GeneralDerivedCrs, GeodeticCrs, ProjectedCrs, SingleCrs,
    VerticalCrs,
};
use geoapi::referencing::cs::{AxisDirection, CoordinateSystem, CoordinateSystemAxis, CsKind, RangeMeaning};
use geoapi::referencing::datum::{
    Datum, DatumKind, Ellipsoid, GeodeticDatum, PrimeMeridian, TemporalDatum, VerticalDatum, VerticalDatumType,
};
use geoapi::referencing::operation::{
    Conversion, CoordinateOperation, Formula, MathTransform, Matrix, OperationKind, OperationMethod, SingleOperation,
    TransformKind, Transformation,
};
use geoapi::referencing::{IdentifiedKind, IdentifiedObject, ReferenceSystem};
use geoapi::util::{GenericName, InternationalString};
use geoapi::{Describable, Role, Unit};
use lazy_static::lazy_static;

use super::{leak, SimpleCitation, SimpleIdentifier, TestExtent, TestLocalName, GLOBAL};

pub type StaticCrs = &'static (dyn CoordinateReferenceSystem + Sync);

fn epsg(code: &str) -> SimpleIdentifier {
    SimpleIdentifier::new(code)
        .with_code_space("EPSG")
        .with_authority(SimpleCitation::new("EPSG Geodetic Parameter Dataset").with_alternate_title("EPSG"))
}

macro_rules! identified_role {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Describable for $ty {
                fn roles(&self) -> Vec<Role<'_>> {
                    vec![Role::IdentifiedObject(self)]
                }
            }
        )+
    };
}

identified_role!(
    TestAxis,
    TestCs,
    TestEllipsoid,
    TestPrimeMeridian,
    TestGeodeticDatum,
    TestTemporalDatum,
    TestVerticalDatum,
    TestGeodeticCrs,
    TestVerticalCrs,
    TestCompoundCrs,
    TestProjectedCrs,
    TestConversion,
    TestTransformation,
    TestMethod,
    TestParameterDescriptor,
    TestDescriptorGroup,
);

// Coordinate systems

#[derive(Debug, Clone)]
pub struct TestAxis {
    name: SimpleIdentifier,
    abbreviation: String,
    direction: AxisDirection,
    unit: Unit,
    minimum: f64,
    maximum: f64,
    range_meaning: Option<RangeMeaning>,
}

impl TestAxis {
    fn unbounded(name: &str, abbreviation: &str, direction: AxisDirection, unit: Unit) -> Self {
        Self {
            name: SimpleIdentifier::new(name),
            abbreviation: abbreviation.to_string(),
            direction,
            unit,
            minimum: f64::NEG_INFINITY,
            maximum: f64::INFINITY,
            range_meaning: None,
        }
    }

    pub fn latitude() -> Self {
        Self {
            range_meaning: Some(RangeMeaning::Exact),
            ..Self::unbounded("Geodetic latitude", "φ", AxisDirection::North, Unit::degree())
        }
        .with_range(-90.0, 90.0)
    }

    pub fn longitude() -> Self {
        Self {
            range_meaning: Some(RangeMeaning::Wraparound),
            ..Self::unbounded("Geodetic longitude", "λ", AxisDirection::East, Unit::degree())
        }
        .with_range(-180.0, 180.0)
    }

    pub fn height() -> Self {
        Self::unbounded("Gravity-related height", "H", AxisDirection::Up, Unit::metre())
    }

    pub fn easting() -> Self {
        Self::unbounded("Easting", "E", AxisDirection::East, Unit::metre())
    }

    pub fn northing() -> Self {
        Self::unbounded("Northing", "N", AxisDirection::North, Unit::metre())
    }

    pub fn geocentric(direction: AxisDirection) -> Self {
        let label = format!("{direction:?}");
        Self::unbounded(&label, &label, direction, Unit::metre())
    }

    pub fn with_range(mut self, minimum: f64, maximum: f64) -> Self {
        self.minimum = minimum;
        self.maximum = maximum;
        self
    }
}

impl IdentifiedObject for TestAxis {
    fn name(&self) -> Option<&dyn Identifier> {
        Some(&self.name)
    }

    fn identified_kind(&self) -> IdentifiedKind<'_> {
        IdentifiedKind::Axis(self)
    }
}

impl CoordinateSystemAxis for TestAxis {
    fn abbreviation(&self) -> Option<&str> {
        Some(&self.abbreviation)
    }

    fn direction(&self) -> Option<AxisDirection> {
        Some(self.direction)
    }

    fn unit(&self) -> Option<&Unit> {
        Some(&self.unit)
    }

    fn minimum_value(&self) -> f64 {
        self.minimum
    }

    fn maximum_value(&self) -> f64 {
        self.maximum
    }

    fn range_meaning(&self) -> Option<RangeMeaning> {
        self.range_meaning
    }
}

#[derive(Debug, Clone)]
pub struct TestCs {
    name: SimpleIdentifier,
    kind: CsKind,
    axes: Vec<TestAxis>,
}

impl TestCs {
    pub fn new(name: &str, kind: CsKind, axes: Vec<TestAxis>) -> Self {
        Self {
            name: SimpleIdentifier::new(name),
            kind,
            axes,
        }
    }
}

impl IdentifiedObject for TestCs {
    fn name(&self) -> Option<&dyn Identifier> {
        Some(&self.name)
    }

    fn identified_kind(&self) -> IdentifiedKind<'_> {
        IdentifiedKind::CoordinateSystem(self)
    }
}

impl CoordinateSystem for TestCs {
    fn dimension(&self) -> usize {
        self.axes.len()
    }

    fn axis(&self, dimension: usize) -> Option<&dyn CoordinateSystemAxis> {
        self.axes
            .get(dimension)
            .map(|axis| axis as &dyn CoordinateSystemAxis)
    }

    fn kind(&self) -> CsKind {
        self.kind
    }
}

// Datums

#[derive(Debug, Clone)]
pub struct TestEllipsoid {
    name: SimpleIdentifier,
    semi_major: f64,
    semi_minor: f64,
    inverse_flattening: f64,
    unit: Unit,
}

impl TestEllipsoid {
    pub fn new(name: &str, semi_major: f64, semi_minor: f64, inverse_flattening: f64) -> Self {
        Self {
            name: SimpleIdentifier::new(name),
            semi_major,
            semi_minor,
            inverse_flattening,
            unit: Unit::metre(),
        }
    }

    pub fn flattened(name: &str, semi_major: f64, inverse_flattening: f64) -> Self {
        let semi_minor = semi_major * (1.0 - 1.0 / inverse_flattening);
        Self::new(name, semi_major, semi_minor, inverse_flattening)
    }

    pub fn sphere(name: &str, radius: f64) -> Self {
        Self::new(name, radius, radius, f64::INFINITY)
    }
}

impl IdentifiedObject for TestEllipsoid {
    fn name(&self) -> Option<&dyn Identifier> {
        Some(&self.name)
    }

    fn identified_kind(&self) -> IdentifiedKind<'_> {
        IdentifiedKind::Ellipsoid(self)
    }
}

impl Ellipsoid for TestEllipsoid {
    fn axis_unit(&self) -> Option<&Unit> {
        Some(&self.unit)
    }

    fn semi_major_axis(&self) -> f64 {
        self.semi_major
    }

    fn semi_minor_axis(&self) -> f64 {
        self.semi_minor
    }

    fn inverse_flattening(&self) -> f64 {
        self.inverse_flattening
    }

    fn is_ivf_definitive(&self) -> bool {
        self.inverse_flattening.is_finite()
    }
}

#[derive(Debug, Clone)]
pub struct TestPrimeMeridian {
    name: SimpleIdentifier,
    longitude: f64,
    unit: Option<Unit>,
}

impl TestPrimeMeridian {
    pub fn new(name: &str, longitude: f64, unit: Option<Unit>) -> Self {
        Self {
            name: SimpleIdentifier::new(name),
            longitude,
            unit,
        }
    }

    pub fn greenwich() -> Self {
        Self::new("Greenwich", 0.0, Some(Unit::degree()))
    }
}

impl IdentifiedObject for TestPrimeMeridian {
    fn name(&self) -> Option<&dyn Identifier> {
        Some(&self.name)
    }

    fn identified_kind(&self) -> IdentifiedKind<'_> {
        IdentifiedKind::PrimeMeridian(self)
    }
}

impl PrimeMeridian for TestPrimeMeridian {
    fn greenwich_longitude(&self) -> f64 {
        self.longitude
    }

    fn angular_unit(&self) -> Option<&Unit> {
        self.unit.as_ref()
    }
}

#[derive(Debug, Clone)]
pub struct TestGeodeticDatum {
    name: SimpleIdentifier,
    ellipsoid: TestEllipsoid,
    prime_meridian: TestPrimeMeridian,
}

impl TestGeodeticDatum {
    pub fn wgs84() -> Self {
        Self {
            name: SimpleIdentifier::new("World Geodetic System 1984"),
            ellipsoid: TestEllipsoid::flattened("WGS 84", 6_378_137.0, 298.257_223_563),
            prime_meridian: TestPrimeMeridian::greenwich(),
        }
    }
}

impl IdentifiedObject for TestGeodeticDatum {
    fn name(&self) -> Option<&dyn Identifier> {
        Some(&self.name)
    }

    fn identified_kind(&self) -> IdentifiedKind<'_> {
        IdentifiedKind::Datum(self)
    }
}

impl Datum for TestGeodeticDatum {
    fn kind(&self) -> DatumKind<'_> {
        DatumKind::Geodetic(self)
    }
}

impl GeodeticDatum for TestGeodeticDatum {
    fn ellipsoid(&self) -> Option<&dyn Ellipsoid> {
        Some(&self.ellipsoid)
    }

    fn prime_meridian(&self) -> Option<&dyn PrimeMeridian> {
        Some(&self.prime_meridian)
    }
}

#[derive(Debug, Clone)]
pub struct TestTemporalDatum {
    name: SimpleIdentifier,
    origin: Option<SystemTime>,
    realization_epoch: Option<SystemTime>,
}

impl TestTemporalDatum {
    pub fn new(origin: Option<SystemTime>) -> Self {
        Self {
            name: SimpleIdentifier::new("Unix time"),
            origin,
            realization_epoch: None,
        }
    }

    pub fn with_realization_epoch(mut self, epoch: SystemTime) -> Self {
        self.realization_epoch = Some(epoch);
        self
    }
}

impl IdentifiedObject for TestTemporalDatum {
    fn name(&self) -> Option<&dyn Identifier> {
        Some(&self.name)
    }

    fn identified_kind(&self) -> IdentifiedKind<'_> {
        IdentifiedKind::Datum(self)
    }
}

impl Datum for TestTemporalDatum {
    fn realization_epoch(&self) -> Option<SystemTime> {
        self.realization_epoch
    }

    fn kind(&self) -> DatumKind<'_> {
        DatumKind::Temporal(self)
    }
}

impl TemporalDatum for TestTemporalDatum {
    fn origin(&self) -> Option<SystemTime> {
        self.origin
    }
}

#[derive(Debug, Clone)]
pub struct TestVerticalDatum {
    name: SimpleIdentifier,
    datum_type: Option<VerticalDatumType>,
}

impl TestVerticalDatum {
    pub fn new(name: &str, datum_type: Option<VerticalDatumType>) -> Self {
        Self {
            name: SimpleIdentifier::new(name),
            datum_type,
        }
    }
}

impl IdentifiedObject for TestVerticalDatum {
    fn name(&self) -> Option<&dyn Identifier> {
        Some(&self.name)
    }

    fn identified_kind(&self) -> IdentifiedKind<'_> {
        IdentifiedKind::Datum(self)
    }
}

impl Datum for TestVerticalDatum {
    fn kind(&self) -> DatumKind<'_> {
        DatumKind::Vertical(self)
    }
}

impl VerticalDatum for TestVerticalDatum {
    fn vertical_datum_type(&self) -> Option<VerticalDatumType> {
        self.datum_type
    }
}

// Coordinate reference systems

lazy_static! {
    static ref WGS84: TestGeodeticCrs = TestGeodeticCrs::geographic(
        "WGS 84",
        TestCs::new(
            "Ellipsoidal 2D",
            CsKind::Ellipsoidal,
            vec![TestAxis::latitude(), TestAxis::longitude()],
        ),
    )
    .registered("4326", "Horizontal component of 3D system.");
    static ref GEOCENTRIC: TestGeodeticCrs = TestGeodeticCrs::geocentric(
        "WGS 84 (geocentric)",
        TestCs::new(
            "Earth centred Cartesian 3D",
            CsKind::Cartesian,
            vec![
                TestAxis::geocentric(AxisDirection::GeocentricX),
                TestAxis::geocentric(AxisDirection::GeocentricY),
                TestAxis::geocentric(AxisDirection::GeocentricZ),
            ],
        ),
    )
    .registered("4978", "Geodesy.");
    static ref GRAVITY_RELATED_HEIGHT: TestVerticalCrs = TestVerticalCrs {
        name: SimpleIdentifier::new("MSL height"),
        cs: TestCs::new("Vertical", CsKind::Vertical, vec![TestAxis::height()]),
        datum: TestVerticalDatum::new("Mean Sea Level", Some(VerticalDatumType::Geoidal)),
    };
}

/// Geographic CRS with (latitude, longitude) axes in degrees.
pub fn wgs84() -> &'static TestGeodeticCrs {
    &WGS84
}

/// Geocentric CRS with (X, Y, Z) axes in metres.
pub fn geocentric() -> &'static TestGeodeticCrs {
    &GEOCENTRIC
}

/// Vertical CRS with a single height axis.
pub fn gravity_related_height() -> &'static TestVerticalCrs {
    &GRAVITY_RELATED_HEIGHT
}

#[derive(Debug)]
pub struct TestGeodeticCrs {
    name: SimpleIdentifier,
    alias: Vec<TestLocalName>,
    identifiers: Vec<SimpleIdentifier>,
    domain: Option<TestExtent>,
    scope: Option<String>,
    cs: TestCs,
    datum: TestGeodeticDatum,
    geocentric: bool,
}

impl TestGeodeticCrs {
    fn new(name: &str, cs: TestCs, geocentric: bool) -> Self {
        Self {
            name: SimpleIdentifier::new(name),
            alias: Vec::new(),
            identifiers: Vec::new(),
            domain: None,
            scope: None,
            cs,
            datum: TestGeodeticDatum::wgs84(),
            geocentric,
        }
    }

    pub fn geographic(name: &str, cs: TestCs) -> Self {
        Self::new(name, cs, false)
    }

    pub fn geocentric(name: &str, cs: TestCs) -> Self {
        Self::new(name, cs, true)
    }

    fn registered(mut self, code: &str, scope: &str) -> Self {
        self.alias.push(TestLocalName::new(
            self.name.code().unwrap_or_default().replace(' ', ""),
            Some(&GLOBAL),
        ));
        self.identifiers.push(epsg(code));
        self.domain = Some(TestExtent::world());
        self.scope = Some(scope.to_string());
        self
    }
}

impl IdentifiedObject for TestGeodeticCrs {
    fn name(&self) -> Option<&dyn Identifier> {
        Some(&self.name)
    }

    fn alias(&self) -> Vec<&dyn GenericName> {
        self.alias.iter().map(|alias| alias as &dyn GenericName).collect()
    }

    fn identifiers(&self) -> Vec<&dyn Identifier> {
        self.identifiers
            .iter()
            .map(|identifier| identifier as &dyn Identifier)
            .collect()
    }

    fn identified_kind(&self) -> IdentifiedKind<'_> {
        IdentifiedKind::ReferenceSystem(self)
    }
}

impl ReferenceSystem for TestGeodeticCrs {
    fn domain_of_validity(&self) -> Option<&dyn Extent> {
        self.domain.as_ref().map(|domain| domain as &dyn Extent)
    }

    fn scope(&self) -> Option<&dyn InternationalString> {
        self.scope
            .as_ref()
            .map(|scope| scope as &dyn InternationalString)
    }
}

impl CoordinateReferenceSystem for TestGeodeticCrs {
    fn coordinate_system(&self) -> Option<&dyn CoordinateSystem> {
        Some(&self.cs)
    }

    fn kind(&self) -> CrsKind<'_> {
        if self.geocentric {
            CrsKind::Geocentric(self)
        } else {
            CrsKind::Geographic(self)
        }
    }
}

impl SingleCrs for TestGeodeticCrs {
    fn datum(&self) -> Option<&dyn Datum> {
        Some(&self.datum)
    }
}

impl GeodeticCrs for TestGeodeticCrs {
    fn geodetic_datum(&self) -> Option<&dyn GeodeticDatum> {
        Some(&self.datum)
    }
}

#[derive(Debug)]
pub struct TestVerticalCrs {
    name: SimpleIdentifier,
    cs: TestCs,
    datum: TestVerticalDatum,
}

impl IdentifiedObject for TestVerticalCrs {
    fn name(&self) -> Option<&dyn Identifier> {
        Some(&self.name)
    }

    fn identified_kind(&self) -> IdentifiedKind<'_> {
        IdentifiedKind::ReferenceSystem(self)
    }
}

impl ReferenceSystem for TestVerticalCrs {}

impl CoordinateReferenceSystem for TestVerticalCrs {
    fn coordinate_system(&self) -> Option<&dyn CoordinateSystem> {
        Some(&self.cs)
    }

    fn kind(&self) -> CrsKind<'_> {
        CrsKind::Vertical(self)
    }
}

impl SingleCrs for TestVerticalCrs {
    fn datum(&self) -> Option<&dyn Datum> {
        Some(&self.datum)
    }
}

impl VerticalCrs for TestVerticalCrs {
    fn vertical_datum(&self) -> Option<&dyn VerticalDatum> {
        Some(&self.datum)
    }
}

#[derive(Debug)]
pub struct TestCompoundCrs {
    name: SimpleIdentifier,
    components: Vec<StaticCrs>,
}

impl TestCompoundCrs {
    pub fn new(name: &str) -> Self {
        Self {
            name: SimpleIdentifier::new(name),
            components: Vec::new(),
        }
    }

    pub fn with_component(mut self, component: StaticCrs) -> Self {
        self.components.push(component);
        self
    }
}

impl IdentifiedObject for TestCompoundCrs {
    fn name(&self) -> Option<&dyn Identifier> {
        Some(&self.name)
    }

    fn identified_kind(&self) -> IdentifiedKind<'_> {
        IdentifiedKind::ReferenceSystem(self)
    }
}

impl ReferenceSystem for TestCompoundCrs {}

impl CoordinateReferenceSystem for TestCompoundCrs {
    fn coordinate_system(&self) -> Option<&dyn CoordinateSystem> {
        None
    }

    fn kind(&self) -> CrsKind<'_> {
        CrsKind::Compound(self)
    }
}

impl CompoundCrs for TestCompoundCrs {
    fn components(&self) -> Vec<&dyn CoordinateReferenceSystem> {
        self.components
            .iter()
            .map(|component| *component as &dyn CoordinateReferenceSystem)
            .collect()
    }
}

lazy_static! {
    static ref MERCATOR: &'static TestProjectedCrs = {
        let crs = leak(TestProjectedCrs {
            name: SimpleIdentifier::new("WGS 84 / World Mercator"),
            base: wgs84(),
            cs: TestCs::new(
                "Cartesian 2D",
                CsKind::Cartesian,
                vec![TestAxis::easting(), TestAxis::northing()],
            ),
            conversion: TestConversion {
                source: Some(wgs84()),
                transform: Some(IdentityTransform::new(2)),
                ..TestConversion::defining("World Mercator")
            },
        });
        // The conversion target is the projected CRS itself.
        let _ = crs.conversion.target.set(crs);
        crs
    };
}

/// Projected CRS based on [`wgs84`]. Its conversion goes from [`wgs84`] to this CRS.
pub fn mercator() -> &'static TestProjectedCrs {
    *MERCATOR
}

#[derive(Debug)]
pub struct TestProjectedCrs {
    name: SimpleIdentifier,
    base: &'static TestGeodeticCrs,
    cs: TestCs,
    conversion: TestConversion,
}

impl IdentifiedObject for TestProjectedCrs {
    fn name(&self) -> Option<&dyn Identifier> {
        Some(&self.name)
    }

    fn identified_kind(&self) -> IdentifiedKind<'_> {
        IdentifiedKind::ReferenceSystem(self)
    }
}

impl ReferenceSystem for TestProjectedCrs {
    fn domain_of_validity(&self) -> Option<&dyn Extent> {
        self.base.domain_of_validity()
    }
}

impl CoordinateReferenceSystem for TestProjectedCrs {
    fn coordinate_system(&self) -> Option<&dyn CoordinateSystem> {
        Some(&self.cs)
    }

    fn kind(&self) -> CrsKind<'_> {
        CrsKind::Projected(self)
    }
}

impl SingleCrs for TestProjectedCrs {
    fn datum(&self) -> Option<&dyn Datum> {
        self.base.datum()
    }
}

impl GeneralDerivedCrs for TestProjectedCrs {
    fn base_crs(&self) -> Option<&dyn CoordinateReferenceSystem> {
        Some(self.base)
    }

    fn conversion_from_base(&self) -> Option<&dyn Conversion> {
        Some(&self.conversion)
    }
}

impl ProjectedCrs for TestProjectedCrs {
    fn base_geographic_crs(&self) -> Option<&dyn GeodeticCrs> {
        Some(self.base)
    }
}

// Operations

#[derive(Debug, Clone)]
pub struct IdentityTransform {
    dimension: usize,
    kind: TransformKind,
}

impl IdentityTransform {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            kind: TransformKind::General,
        }
    }

    pub fn two_dimensional(mut self) -> Self {
        self.kind = TransformKind::TwoDimensional;
        self
    }
}

impl MathTransform for IdentityTransform {
    fn source_dimensions(&self) -> usize {
        self.dimension
    }

    fn target_dimensions(&self) -> usize {
        self.dimension
    }

    fn is_identity(&self) -> bool {
        true
    }

    fn kind(&self) -> TransformKind {
        self.kind
    }
}

#[derive(Debug)]
pub struct TestFormula {
    text: String,
}

impl Formula for TestFormula {
    fn formula(&self) -> Option<&dyn InternationalString> {
        Some(&self.text)
    }
}

#[derive(Debug)]
pub struct TestMethod {
    name: SimpleIdentifier,
    formula: Option<TestFormula>,
    parameters: &'static TestDescriptorGroup,
}

impl TestMethod {
    fn new(name: &str, formula: Option<&str>, parameters: &'static TestDescriptorGroup) -> Self {
        Self {
            name: SimpleIdentifier::new(name),
            formula: formula.map(|text| TestFormula { text: text.to_string() }),
            parameters,
        }
    }
}

impl IdentifiedObject for TestMethod {
    fn name(&self) -> Option<&dyn Identifier> {
        Some(&self.name)
    }

    fn identified_kind(&self) -> IdentifiedKind<'_> {
        IdentifiedKind::OperationMethod(self)
    }
}

impl OperationMethod for TestMethod {
    fn formula(&self) -> Option<&dyn Formula> {
        self.formula.as_ref().map(|formula| formula as &dyn Formula)
    }

    fn source_dimensions(&self) -> Option<usize> {
        Some(2)
    }

    fn target_dimensions(&self) -> Option<usize> {
        Some(2)
    }

    fn parameters(&self) -> Option<&dyn ParameterDescriptorGroup> {
        Some(self.parameters)
    }
}

/// Mercator conversion. Without source, target and transform it is a defining conversion.
pub struct TestConversion {
    name: SimpleIdentifier,
    method: TestMethod,
    parameters: &'static TestParameterGroup,
    source: Option<StaticCrs>,
    target: OnceLock<StaticCrs>,
    transform: Option<IdentityTransform>,
    version: Option<String>,
}

impl TestConversion {
    pub fn defining(name: &str) -> Self {
        Self {
            name: SimpleIdentifier::new(name),
            method: TestMethod::new(
                "Mercator (variant A)",
                Some("EPSG guidance note 7-2"),
                mercator_parameters().descriptor,
            ),
            parameters: mercator_parameters(),
            source: None,
            target: OnceLock::new(),
            transform: None,
            version: None,
        }
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }
}

// The target CRS refers back to this conversion.
impl Debug for TestConversion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestConversion")
            .field("name", &self.name)
            .field("transform", &self.transform)
            .finish_non_exhaustive()
    }
}

impl IdentifiedObject for TestConversion {
    fn name(&self) -> Option<&dyn Identifier> {
        Some(&self.name)
    }

    fn identified_kind(&self) -> IdentifiedKind<'_> {
        IdentifiedKind::Operation(self)
    }
}

impl CoordinateOperation for TestConversion {
    fn source_crs(&self) -> Option<&dyn CoordinateReferenceSystem> {
        self.source.map(|crs| crs as &dyn CoordinateReferenceSystem)
    }

    fn target_crs(&self) -> Option<&dyn CoordinateReferenceSystem> {
        self.target
            .get()
            .map(|crs| *crs as &dyn CoordinateReferenceSystem)
    }

    fn operation_version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    fn math_transform(&self) -> Option<&dyn MathTransform> {
        self.transform
            .as_ref()
            .map(|transform| transform as &dyn MathTransform)
    }

    fn kind(&self) -> OperationKind<'_> {
        OperationKind::Conversion(self)
    }
}

impl SingleOperation for TestConversion {
    fn method(&self) -> Option<&dyn OperationMethod> {
        Some(&self.method)
    }

    fn parameter_values(&self) -> Option<&dyn ParameterValueGroup> {
        Some(self.parameters)
    }
}

impl Conversion for TestConversion {}

/// Longitude rotation from [`wgs84`] to itself.
#[derive(Debug)]
pub struct TestTransformation {
    name: SimpleIdentifier,
    method: TestMethod,
    parameters: &'static TestParameterGroup,
    transform: IdentityTransform,
    version: Option<String>,
}

impl TestTransformation {
    pub fn new(name: &str, version: Option<&str>) -> Self {
        let descriptors = leak(TestDescriptorGroup::new(
            "Longitude rotation",
            vec![leak(
                TestParameterDescriptor::real("longitude_offset")
                    .with_range(Value::Real(-180.0), Value::Real(180.0))
                    .with_default(Value::Real(2.337_229_17))
                    .with_unit(Unit::degree()),
            )],
        ));
        Self {
            name: SimpleIdentifier::new(name),
            method: TestMethod::new("Longitude rotation", None, descriptors),
            parameters: leak(TestParameterGroup::from_defaults(descriptors)),
            transform: IdentityTransform::new(2),
            version: version.map(str::to_string),
        }
    }
}

impl IdentifiedObject for TestTransformation {
    fn name(&self) -> Option<&dyn Identifier> {
        Some(&self.name)
    }

    fn identified_kind(&self) -> IdentifiedKind<'_> {
        IdentifiedKind::Operation(self)
    }
}

impl CoordinateOperation for TestTransformation {
    fn source_crs(&self) -> Option<&dyn CoordinateReferenceSystem> {
        Some(wgs84())
    }

    fn target_crs(&self) -> Option<&dyn CoordinateReferenceSystem> {
        Some(wgs84())
    }

    fn operation_version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    fn math_transform(&self) -> Option<&dyn MathTransform> {
        Some(&self.transform)
    }

    fn kind(&self) -> OperationKind<'_> {
        OperationKind::Transformation(self)
    }
}

impl SingleOperation for TestTransformation {
    fn method(&self) -> Option<&dyn OperationMethod> {
        Some(&self.method)
    }

    fn parameter_values(&self) -> Option<&dyn ParameterValueGroup> {
        Some(self.parameters)
    }
}

impl Transformation for TestTransformation {}

// Parameters

#[derive(Debug, Clone)]
pub struct TestParameterDescriptor {
    name: SimpleIdentifier,
    value_type: ValueType,
    valid_values: Vec<Value>,
    minimum: Option<Value>,
    maximum: Option<Value>,
    default: Option<Value>,
    unit: Option<Unit>,
}

impl TestParameterDescriptor {
    fn new(name: &str, value_type: ValueType) -> Self {
        Self {
            name: SimpleIdentifier::new(name),
            value_type,
            valid_values: Vec::new(),
            minimum: None,
            maximum: None,
            default: None,
            unit: None,
        }
    }

    pub fn real(name: &str) -> Self {
        Self::new(name, ValueType::Real)
    }

    pub fn integer(name: &str) -> Self {
        Self::new(name, ValueType::Integer)
    }

    pub fn with_range(mut self, minimum: Value, maximum: Value) -> Self {
        self.minimum = Some(minimum);
        self.maximum = Some(maximum);
        self
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_valid_values(mut self, values: Vec<Value>) -> Self {
        self.valid_values = values;
        self
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }
}

impl IdentifiedObject for TestParameterDescriptor {
    fn name(&self) -> Option<&dyn Identifier> {
        Some(&self.name)
    }

    fn identified_kind(&self) -> IdentifiedKind<'_> {
        IdentifiedKind::ParameterDescriptor(self)
    }
}

impl GeneralParameterDescriptor for TestParameterDescriptor {
    fn kind(&self) -> DescriptorKind<'_> {
        DescriptorKind::Single(self)
    }
}

impl ParameterDescriptor for TestParameterDescriptor {
    fn value_type(&self) -> Option<ValueType> {
        Some(self.value_type)
    }

    fn valid_values(&self) -> Vec<Value> {
        self.valid_values.clone()
    }

    fn minimum_value(&self) -> Option<Value> {
        self.minimum.clone()
    }

    fn maximum_value(&self) -> Option<Value> {
        self.maximum.clone()
    }

    fn default_value(&self) -> Option<Value> {
        self.default.clone()
    }

    fn unit(&self) -> Option<&Unit> {
        self.unit.as_ref()
    }
}

#[derive(Debug)]
pub struct TestDescriptorGroup {
    name: SimpleIdentifier,
    descriptors: Vec<&'static TestParameterDescriptor>,
}

impl TestDescriptorGroup {
    pub fn new(name: &str, descriptors: Vec<&'static TestParameterDescriptor>) -> Self {
        Self {
            name: SimpleIdentifier::new(name),
            descriptors,
        }
    }
}

impl IdentifiedObject for TestDescriptorGroup {
    fn name(&self) -> Option<&dyn Identifier> {
        Some(&self.name)
    }

    fn identified_kind(&self) -> IdentifiedKind<'_> {
        IdentifiedKind::ParameterDescriptor(self)
    }
}

impl GeneralParameterDescriptor for TestDescriptorGroup {
    fn kind(&self) -> DescriptorKind<'_> {
        DescriptorKind::Group(self)
    }
}

impl ParameterDescriptorGroup for TestDescriptorGroup {
    fn descriptors(&self) -> Vec<&dyn GeneralParameterDescriptor> {
        self.descriptors
            .iter()
            .map(|descriptor| *descriptor as &dyn GeneralParameterDescriptor)
            .collect()
    }

    fn descriptor(&self, name: &str) -> Option<&dyn GeneralParameterDescriptor> {
        self.descriptors
            .iter()
            .find(|descriptor| descriptor.name.code() == Some(name))
            .map(|descriptor| *descriptor as &dyn GeneralParameterDescriptor)
    }
}

#[derive(Debug, Clone)]
pub struct TestParameterValue {
    descriptor: &'static TestParameterDescriptor,
    value: Option<Value>,
}

impl TestParameterValue {
    pub fn new(descriptor: &'static TestParameterDescriptor, value: Option<Value>) -> Self {
        Self { descriptor, value }
    }
}

impl GeneralParameterValue for TestParameterValue {
    fn general_descriptor(&self) -> Option<&dyn GeneralParameterDescriptor> {
        Some(self.descriptor)
    }

    fn kind(&self) -> ParameterKind<'_> {
        ParameterKind::Value(self)
    }
}

impl ParameterValue for TestParameterValue {
    fn descriptor(&self) -> Option<&dyn ParameterDescriptor> {
        Some(self.descriptor)
    }

    fn value(&self) -> Option<Value> {
        self.value.clone()
    }
}

impl Describable for TestParameterValue {
    fn roles(&self) -> Vec<Role<'_>> {
        vec![Role::ParameterValue(self)]
    }
}

#[derive(Debug)]
pub struct TestParameterGroup {
    descriptor: &'static TestDescriptorGroup,
    values: Vec<TestParameterValue>,
}

impl TestParameterGroup {
    /// One value per descriptor, set to the descriptor default.
    pub fn from_defaults(descriptor: &'static TestDescriptorGroup) -> Self {
        let values = descriptor
            .descriptors
            .iter()
            .map(|&parameter| TestParameterValue::new(parameter, parameter.default.clone()))
            .collect();
        Self { descriptor, values }
    }
}

impl GeneralParameterValue for TestParameterGroup {
    fn general_descriptor(&self) -> Option<&dyn GeneralParameterDescriptor> {
        Some(self.descriptor)
    }

    fn kind(&self) -> ParameterKind<'_> {
        ParameterKind::Group(self)
    }
}

impl ParameterValueGroup for TestParameterGroup {
    fn group_descriptor(&self) -> Option<&dyn ParameterDescriptorGroup> {
        Some(self.descriptor)
    }

    fn values(&self) -> Vec<&dyn GeneralParameterValue> {
        self.values
            .iter()
            .map(|value| value as &dyn GeneralParameterValue)
            .collect()
    }

    fn parameter(&self, name: &str) -> Option<&dyn ParameterValue> {
        self.values
            .iter()
            .find(|value| value.descriptor.name.code() == Some(name))
            .map(|value| value as &dyn ParameterValue)
    }
}

impl Describable for TestParameterGroup {
    fn roles(&self) -> Vec<Role<'_>> {
        vec![Role::ParameterValue(self)]
    }
}

lazy_static! {
    static ref MERCATOR_PARAMETERS: TestParameterGroup = {
        let descriptors = [
            TestParameterDescriptor::real("latitude_of_origin")
                .with_range(Value::Real(-90.0), Value::Real(90.0))
                .with_unit(Unit::degree()),
            TestParameterDescriptor::real("central_meridian")
                .with_range(Value::Real(-180.0), Value::Real(180.0))
                .with_unit(Unit::degree()),
            TestParameterDescriptor::real("scale_factor")
                .with_default(Value::Real(1.0))
                .with_unit(Unit::unity()),
            TestParameterDescriptor::real("false_easting").with_unit(Unit::metre()),
            TestParameterDescriptor::real("false_northing").with_unit(Unit::metre()),
        ];
        let descriptors = descriptors
            .into_iter()
            .map(|descriptor| match descriptor.default {
                Some(_) => descriptor,
                None => descriptor.with_default(Value::Real(0.0)),
            })
            .map(leak)
            .collect();
        TestParameterGroup::from_defaults(leak(TestDescriptorGroup::new("Mercator (variant A)", descriptors)))
    };
}

/// Parameter values of the Mercator projection, all set to their defaults.
pub fn mercator_parameters() -> &'static TestParameterGroup {
    &MERCATOR_PARAMETERS
}

// Geometry

#[derive(Debug, Clone)]
pub struct TestMatrix {
    rows: usize,
    columns: usize,
    elements: Vec<f64>,
}

impl TestMatrix {
    pub fn identity(size: usize) -> Self {
        let mut elements = vec![0.0; size * size];
        for i in 0..size {
            elements[i * size + i] = 1.0;
        }
        Self {
            rows: size,
            columns: size,
            elements,
        }
    }

    pub fn set(&mut self, row: usize, column: usize, value: f64) {
        self.elements[row * self.columns + column] = value;
    }
}

impl Matrix for TestMatrix {
    fn num_row(&self) -> usize {
        self.rows
    }

    fn num_col(&self) -> usize {
        self.columns
    }

    fn element(&self, row: usize, column: usize) -> f64 {
        self.elements[row * self.columns + column]
    }
}

#[derive(Debug, Clone)]
pub struct TestPosition {
    coordinates: Vec<f64>,
    crs: Option<StaticCrs>,
}

impl TestPosition {
    pub fn new(coordinates: Vec<f64>) -> Self {
        Self {
            coordinates,
            crs: None,
        }
    }

    pub fn with_crs(mut self, crs: StaticCrs) -> Self {
        self.crs = Some(crs);
        self
    }
}

impl DirectPosition for TestPosition {
    fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    fn coordinates(&self) -> Vec<f64> {
        self.coordinates.clone()
    }

    fn coordinate(&self, dimension: usize) -> f64 {
        self.coordinates
            .get(dimension)
            .copied()
            .unwrap_or(f64::NAN)
    }

    fn crs(&self) -> Option<&dyn CoordinateReferenceSystem> {
        self.crs.map(|crs| crs as &dyn CoordinateReferenceSystem)
    }
}

impl Describable for TestPosition {
    fn roles(&self) -> Vec<Role<'_>> {
        vec![Role::DirectPosition(self)]
    }
}

/// Envelope between two corners. `span_error` is added to every reported span.
#[derive(Debug, Clone)]
pub struct TestEnvelope {
    lower: TestPosition,
    upper: TestPosition,
    span_error: f64,
}

impl TestEnvelope {
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Self {
        Self {
            lower: TestPosition::new(lower),
            upper: TestPosition::new(upper),
            span_error: 0.0,
        }
    }

    pub fn with_span_error(mut self, error: f64) -> Self {
        self.span_error = error;
        self
    }
}

impl Envelope for TestEnvelope {
    fn dimension(&self) -> usize {
        self.lower.dimension()
    }

    fn lower_corner(&self) -> Option<&dyn DirectPosition> {
        Some(&self.lower)
    }

    fn upper_corner(&self) -> Option<&dyn DirectPosition> {
        Some(&self.upper)
    }

    fn minimum(&self, dimension: usize) -> f64 {
        self.lower.coordinate(dimension)
    }

    fn maximum(&self, dimension: usize) -> f64 {
        self.upper.coordinate(dimension)
    }

    fn span(&self, dimension: usize) -> f64 {
        self.maximum(dimension) - self.minimum(dimension) + self.span_error
    }
}

impl Describable for TestEnvelope {
    fn roles(&self) -> Vec<Role<'_>> {
        vec![Role::Envelope(self)]
    }
}
