mod interfaces;
/// This module is automatically generated from /resources/*.proto
mod proto_gen;
mod generated;
pub mod phonedirectory;
pub mod profilefield;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use interfaces::{CountryNameTranslator, FieldDataStore, ProfileFieldPlugin};
pub use proto_gen::countryphonedata::{CountryPhoneDataCollection, CountryPhoneRecord};
pub use phonedirectory::{
    normalize_number, AlphaForm, CountryKey, PhoneDirectory, ValidatedPhone, PHONE_DIRECTORY,
};
pub use profilefield::{
    AssociatedUserField, FieldError, DefineError, FieldErrors, PhoneFieldDefinition,
    PhoneFormDefaults, PhoneFormElement, PhoneProfileField, PhoneSubmission, StoredPhone,
    SubmissionContext,
};
