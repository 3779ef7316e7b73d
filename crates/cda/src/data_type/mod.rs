//! Value encoders: scalar clinical data values that render themselves
//! onto an output node as attributes and/or child content.
//!
//! Every type here implements [`crate::RenderValue`]. Absent optional
//! fields are omitted from the output, never written as empty strings.

mod boolean;
mod code;
mod identifier;
mod interval;
mod name;
mod quantity;
mod set;
mod text;

pub use boolean::BooleanValue;
pub use code::{
    CodedOrdinal, CodedSimple, CodedValue, Confidentiality, LoincCode, SnomedCtCode,
};
pub use identifier::InstanceIdentifier;
pub use interval::{IntervalOfTime, Period, PeriodicIntervalOfTime};
pub use name::{EntityName, NamePartKind, PersonName};
pub use quantity::{PhysicalQuantity, TimeStamp};
pub use set::Set;
pub use text::{EncapsulatedData, NarrativeBlock, NarrativeString};
