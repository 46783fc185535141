use crate::geometry::{DirectPosition, Envelope};
use crate::metadata::citation::{Citation, Identifier};
use crate::metadata::extent::{Extent, GeographicExtent, TemporalExtent, VerticalExtent};
use crate::metadata::quality::{DataQuality, Element, QualityResult};
use crate::parameter::GeneralParameterValue;
use crate::referencing::IdentifiedObject;
use crate::util::{GenericName, InternationalString, NameSpace};

/// One facet of the ISO type graph played by an object.
///
/// An object can play several roles at once, in which case every role is validated.
#[derive(Debug, Copy, Clone)]
pub enum Role<'a> {
    /// Localizable string.
    InternationalString(&'a dyn InternationalString),
    /// Identifier of an object.
    Identifier(&'a dyn Identifier),
    /// Citation of a resource.
    Citation(&'a dyn Citation),
    /// Generic name.
    GenericName(&'a dyn GenericName),
    /// Name space.
    NameSpace(&'a dyn NameSpace),
    /// Any object of the referencing model.
    IdentifiedObject(&'a dyn IdentifiedObject),
    /// Parameter value or group of values.
    ParameterValue(&'a dyn GeneralParameterValue),
    /// Direct position.
    DirectPosition(&'a dyn DirectPosition),
    /// Envelope.
    Envelope(&'a dyn Envelope),
    /// Extent.
    Extent(&'a dyn Extent),
    /// Geographic extent.
    GeographicExtent(&'a dyn GeographicExtent),
    /// Vertical extent.
    VerticalExtent(&'a dyn VerticalExtent),
    /// Temporal extent.
    TemporalExtent(&'a dyn TemporalExtent),
    /// Data quality.
    DataQuality(&'a dyn DataQuality),
    /// Data quality element.
    QualityElement(&'a dyn Element),
    /// Data quality result.
    QualityResult(&'a dyn QualityResult),
}

/// An object that can be handed to the validators.
pub trait Describable {
    /// All roles played by this object. Empty if the object is not part of the modeled type graph.
    fn roles(&self) -> Vec<Role<'_>>;
}

impl Describable for String {
    fn roles(&self) -> Vec<Role<'_>> {
        vec![Role::InternationalString(self)]
    }
}

impl Describable for &'static str {
    fn roles(&self) -> Vec<Role<'_>> {
        vec![Role::InternationalString(self)]
    }
}
