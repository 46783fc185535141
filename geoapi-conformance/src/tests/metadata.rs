use std::time::SystemTime;

use geoapi::metadata::citation::{Citation, Identifier};
use geoapi::metadata::extent::{
    Extent, GeographicBoundingBox, GeographicExtent, GeographicExtentKind, TemporalExtent, VerticalExtent,
};
use geoapi::metadata::quality::{
    ConformanceResult, DataQuality, Element, QualityResult, QuantitativeResult, ResultKind, Scope,
};
use geoapi::util::{Factory, InternationalString};
use geoapi::{Describable, Role};

#[derive(Debug, Clone)]
pub struct SimpleCitation {
    title: Option<String>,
    alternate_titles: Vec<String>,
}

impl SimpleCitation {
    pub fn new(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            alternate_titles: Vec::new(),
        }
    }

    pub fn untitled() -> Self {
        Self {
            title: None,
            alternate_titles: Vec::new(),
        }
    }

    pub fn with_alternate_title(mut self, title: &str) -> Self {
        self.alternate_titles.push(title.to_string());
        self
    }
}

impl Citation for SimpleCitation {
    fn title(&self) -> Option<&dyn InternationalString> {
        self.title
            .as_ref()
            .map(|title| title as &dyn InternationalString)
    }

    fn alternate_titles(&self) -> Vec<&dyn InternationalString> {
        self.alternate_titles
            .iter()
            .map(|title| title as &dyn InternationalString)
            .collect()
    }
}

impl Describable for SimpleCitation {
    fn roles(&self) -> Vec<Role<'_>> {
        vec![Role::Citation(self)]
    }
}

#[derive(Debug, Clone)]
pub struct SimpleIdentifier {
    code: Option<String>,
    code_space: Option<String>,
    authority: Option<SimpleCitation>,
}

impl SimpleIdentifier {
    pub fn new(code: &str) -> Self {
        Self {
            code: Some(code.to_string()),
            code_space: None,
            authority: None,
        }
    }

    pub fn with_code_space(mut self, code_space: &str) -> Self {
        self.code_space = Some(code_space.to_string());
        self
    }

    pub fn with_authority(mut self, authority: SimpleCitation) -> Self {
        self.authority = Some(authority);
        self
    }
}

impl Identifier for SimpleIdentifier {
    fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    fn code_space(&self) -> Option<&str> {
        self.code_space.as_deref()
    }

    fn authority(&self) -> Option<&dyn Citation> {
        self.authority
            .as_ref()
            .map(|authority| authority as &dyn Citation)
    }
}

impl Describable for SimpleIdentifier {
    fn roles(&self) -> Vec<Role<'_>> {
        vec![Role::Identifier(self)]
    }
}

#[derive(Debug)]
pub struct TestFactory {
    vendor: Option<SimpleCitation>,
}

impl TestFactory {
    pub fn new(vendor: Option<&str>) -> Self {
        Self {
            vendor: vendor.map(SimpleCitation::new),
        }
    }
}

impl Factory for TestFactory {
    fn vendor(&self) -> Option<&dyn Citation> {
        self.vendor.as_ref().map(|vendor| vendor as &dyn Citation)
    }
}

#[derive(Debug, Clone)]
pub struct TestBoundingBox {
    west: f64,
    east: f64,
    south: f64,
    north: f64,
}

impl TestBoundingBox {
    pub fn new(west: f64, east: f64, south: f64, north: f64) -> Self {
        Self {
            west,
            east,
            south,
            north,
        }
    }
}

impl GeographicExtent for TestBoundingBox {
    fn kind(&self) -> GeographicExtentKind<'_> {
        GeographicExtentKind::BoundingBox(self)
    }
}

impl GeographicBoundingBox for TestBoundingBox {
    fn west_bound_longitude(&self) -> f64 {
        self.west
    }

    fn east_bound_longitude(&self) -> f64 {
        self.east
    }

    fn south_bound_latitude(&self) -> f64 {
        self.south
    }

    fn north_bound_latitude(&self) -> f64 {
        self.north
    }
}

impl Describable for TestBoundingBox {
    fn roles(&self) -> Vec<Role<'_>> {
        vec![Role::GeographicExtent(self)]
    }
}

#[derive(Debug, Clone)]
pub struct TestVerticalExtent {
    minimum: Option<f64>,
    maximum: Option<f64>,
}

impl TestVerticalExtent {
    pub fn new(minimum: Option<f64>, maximum: Option<f64>) -> Self {
        Self { minimum, maximum }
    }
}

impl VerticalExtent for TestVerticalExtent {
    fn minimum_value(&self) -> Option<f64> {
        self.minimum
    }

    fn maximum_value(&self) -> Option<f64> {
        self.maximum
    }
}

#[derive(Debug, Clone)]
pub struct TestTemporalExtent {
    begin: SystemTime,
    end: SystemTime,
}

impl TestTemporalExtent {
    pub fn new(begin: SystemTime, end: SystemTime) -> Self {
        Self { begin, end }
    }
}

impl TemporalExtent for TestTemporalExtent {
    fn begin(&self) -> Option<SystemTime> {
        Some(self.begin)
    }

    fn end(&self) -> Option<SystemTime> {
        Some(self.end)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TestExtent {
    description: Option<String>,
    pub geographic: Vec<TestBoundingBox>,
    pub vertical: Vec<TestVerticalExtent>,
    pub temporal: Vec<TestTemporalExtent>,
}

impl TestExtent {
    pub fn described(description: &str) -> Self {
        Self {
            description: Some(description.to_string()),
            ..Default::default()
        }
    }

    pub fn world() -> Self {
        Self {
            geographic: vec![TestBoundingBox::new(-180.0, 180.0, -90.0, 90.0)],
            ..Default::default()
        }
    }
}

impl Extent for TestExtent {
    fn description(&self) -> Option<&dyn InternationalString> {
        self.description
            .as_ref()
            .map(|description| description as &dyn InternationalString)
    }

    fn geographic_elements(&self) -> Vec<&dyn GeographicExtent> {
        self.geographic
            .iter()
            .map(|element| element as &dyn GeographicExtent)
            .collect()
    }

    fn vertical_elements(&self) -> Vec<&dyn VerticalExtent> {
        self.vertical
            .iter()
            .map(|element| element as &dyn VerticalExtent)
            .collect()
    }

    fn temporal_elements(&self) -> Vec<&dyn TemporalExtent> {
        self.temporal
            .iter()
            .map(|element| element as &dyn TemporalExtent)
            .collect()
    }
}

impl Describable for TestExtent {
    fn roles(&self) -> Vec<Role<'_>> {
        vec![Role::Extent(self)]
    }
}

#[derive(Debug)]
pub struct TestScope {
    level: String,
}

impl Scope for TestScope {
    fn level(&self) -> Option<&str> {
        Some(&self.level)
    }
}

#[derive(Debug)]
pub struct TestElement {
    results: Vec<Box<dyn QualityResult>>,
}

impl Element for TestElement {
    fn results(&self) -> Vec<&dyn QualityResult> {
        self.results.iter().map(|result| &**result).collect()
    }
}

/// Data quality with a single report holding the given results.
#[derive(Debug)]
pub struct TestDataQuality {
    scope: Option<TestScope>,
    report: TestElement,
}

impl TestDataQuality {
    pub fn new(level: Option<&str>, results: Vec<Box<dyn QualityResult>>) -> Self {
        Self {
            scope: level.map(|level| TestScope {
                level: level.to_string(),
            }),
            report: TestElement { results },
        }
    }
}

impl DataQuality for TestDataQuality {
    fn scope(&self) -> Option<&dyn Scope> {
        self.scope.as_ref().map(|scope| scope as &dyn Scope)
    }

    fn reports(&self) -> Vec<&dyn Element> {
        vec![&self.report]
    }
}

impl Describable for TestDataQuality {
    fn roles(&self) -> Vec<Role<'_>> {
        vec![Role::DataQuality(self)]
    }
}

#[derive(Debug)]
pub struct TestConformanceResult {
    specification: SimpleCitation,
    pass: Option<bool>,
}

impl TestConformanceResult {
    pub fn new(pass: Option<bool>) -> Self {
        Self {
            specification: SimpleCitation::new("ISO 19115"),
            pass,
        }
    }
}

impl QualityResult for TestConformanceResult {
    fn kind(&self) -> ResultKind<'_> {
        ResultKind::Conformance(self)
    }
}

impl ConformanceResult for TestConformanceResult {
    fn specification(&self) -> Option<&dyn Citation> {
        Some(&self.specification)
    }

    fn explanation(&self) -> Option<&dyn InternationalString> {
        None
    }

    fn pass(&self) -> Option<bool> {
        self.pass
    }
}

#[derive(Debug)]
pub struct TestQuantitativeResult {
    values: Vec<f64>,
}

impl TestQuantitativeResult {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }
}

impl QualityResult for TestQuantitativeResult {
    fn kind(&self) -> ResultKind<'_> {
        ResultKind::Quantitative(self)
    }
}

impl QuantitativeResult for TestQuantitativeResult {
    fn values(&self) -> Vec<f64> {
        self.values.clone()
    }
}
