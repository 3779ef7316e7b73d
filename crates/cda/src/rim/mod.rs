//! RIM node families: acts, participations, roles and entities, each
//! with its fixed class/mood/type code emitted on its own element.

pub mod act;
pub mod entity;
pub mod participation;
pub mod role;

pub use act::{Act, EntryAct, SubstanceAdministration};
pub use entity::{ManufacturedLabeledDrug, Patient, Person, RepresentedCustodianOrganization};
pub use participation::{Author, Consumable, Custodian, RecordTarget};
pub use role::{AssignedAuthor, AssignedCustodian, ManufacturedProduct, PatientRole};
