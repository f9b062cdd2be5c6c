//! Passenger record shapes and the merge/normalize logic between them.
//!
//! Three shapes exist:
//! - [`CreatePassenger`] -- the creation payload, validated before it
//!   reaches the store.
//! - [`UpdatePassenger`] -- the partial update payload. A field absent
//!   from the request body is excluded from the merge entirely; an
//!   explicit JSON `null` on an optional field clears it.
//! - [`Passenger`] -- the response shape: a fixed field list pulled from
//!   the stored mapping. Stored fields outside the list are never exposed.
//!
//! Calendar dates arrive as typed `NaiveDate` values and are persisted
//! and returned in ISO-8601 date-string form.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::{Validate, ValidateEmail};

use crate::error::CoreError;
use crate::types::{DbId, Document};

// ---------------------------------------------------------------------------
// Stored field names
// ---------------------------------------------------------------------------

pub const FIELD_TITLE: &str = "title";
pub const FIELD_GIVEN_NAME: &str = "given_name";
pub const FIELD_SURNAME: &str = "surname";
pub const FIELD_PASSPORT_NUMBER: &str = "passport_number";
pub const FIELD_DATE_OF_BIRTH: &str = "date_of_birth";
pub const FIELD_DATE_OF_EXPIRATION: &str = "date_of_expiration";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_MOBILE: &str = "mobile";
pub const FIELD_EMERGENCY_CONTACT: &str = "emergency_contact";
pub const FIELD_ORGANIZATION_NAME: &str = "organization_name";
pub const FIELD_DESIGNATION: &str = "designation";
pub const FIELD_FREQUENT_FLYER_NUMBER: &str = "frequent_flyer_number";
pub const FIELD_RECENT_ROUTE: &str = "recent_route";
pub const FIELD_FAVOURITE_CARRIER: &str = "favourite_carrier";
pub const FIELD_MEAL_PREFERENCE: &str = "meal_preference";
pub const FIELD_ACCESSIBILITY: &str = "accessibility";
pub const FIELD_BAGGAGE_PREFERENCE: &str = "baggage_preference";

// ---------------------------------------------------------------------------
// Response shape
// ---------------------------------------------------------------------------

/// The external response shape: the record identity plus the fixed set of
/// named fields. Date fields are ISO-8601 strings here, exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Passenger {
    pub id: String,
    pub title: String,
    pub given_name: String,
    pub surname: String,
    pub passport_number: Option<String>,
    pub date_of_birth: Option<String>,
    pub date_of_expiration: Option<String>,
    pub email: String,
    pub mobile: String,
    pub emergency_contact: Option<String>,
    pub organization_name: Option<String>,
    pub designation: Option<String>,
    pub frequent_flyer_number: Option<String>,
    pub recent_route: Option<String>,
    pub favourite_carrier: Option<String>,
    pub meal_preference: Option<String>,
    pub accessibility: Option<String>,
    pub baggage_preference: Option<String>,
}

impl Passenger {
    /// Normalize a stored field mapping into the response shape.
    ///
    /// Pulls exactly the listed fields; anything else in the stored
    /// document stays invisible to callers. Required fields are read
    /// directly -- the store is trusted to contain them once a record
    /// exists. Optional fields default to absent.
    pub fn from_document(id: DbId, fields: &Document) -> Self {
        Self {
            id: id.to_string(),
            title: required_str(fields, FIELD_TITLE),
            given_name: required_str(fields, FIELD_GIVEN_NAME),
            surname: required_str(fields, FIELD_SURNAME),
            passport_number: optional_str(fields, FIELD_PASSPORT_NUMBER),
            date_of_birth: optional_str(fields, FIELD_DATE_OF_BIRTH),
            date_of_expiration: optional_str(fields, FIELD_DATE_OF_EXPIRATION),
            email: required_str(fields, FIELD_EMAIL),
            mobile: required_str(fields, FIELD_MOBILE),
            emergency_contact: optional_str(fields, FIELD_EMERGENCY_CONTACT),
            organization_name: optional_str(fields, FIELD_ORGANIZATION_NAME),
            designation: optional_str(fields, FIELD_DESIGNATION),
            frequent_flyer_number: optional_str(fields, FIELD_FREQUENT_FLYER_NUMBER),
            recent_route: optional_str(fields, FIELD_RECENT_ROUTE),
            favourite_carrier: optional_str(fields, FIELD_FAVOURITE_CARRIER),
            meal_preference: optional_str(fields, FIELD_MEAL_PREFERENCE),
            accessibility: optional_str(fields, FIELD_ACCESSIBILITY),
            baggage_preference: optional_str(fields, FIELD_BAGGAGE_PREFERENCE),
        }
    }

    /// The record's full field mapping as persisted.
    ///
    /// The identity is the store key, not a document field, so it is not
    /// part of the mapping.
    pub fn to_fields(&self) -> Document {
        let mut fields = Document::new();
        fields.insert(FIELD_TITLE.into(), Value::String(self.title.clone()));
        fields.insert(FIELD_GIVEN_NAME.into(), Value::String(self.given_name.clone()));
        fields.insert(FIELD_SURNAME.into(), Value::String(self.surname.clone()));
        fields.insert(FIELD_PASSPORT_NUMBER.into(), opt_string(self.passport_number.clone()));
        fields.insert(FIELD_DATE_OF_BIRTH.into(), opt_string(self.date_of_birth.clone()));
        fields.insert(FIELD_DATE_OF_EXPIRATION.into(), opt_string(self.date_of_expiration.clone()));
        fields.insert(FIELD_EMAIL.into(), Value::String(self.email.clone()));
        fields.insert(FIELD_MOBILE.into(), Value::String(self.mobile.clone()));
        fields.insert(FIELD_EMERGENCY_CONTACT.into(), opt_string(self.emergency_contact.clone()));
        fields.insert(FIELD_ORGANIZATION_NAME.into(), opt_string(self.organization_name.clone()));
        fields.insert(FIELD_DESIGNATION.into(), opt_string(self.designation.clone()));
        fields.insert(
            FIELD_FREQUENT_FLYER_NUMBER.into(),
            opt_string(self.frequent_flyer_number.clone()),
        );
        fields.insert(FIELD_RECENT_ROUTE.into(), opt_string(self.recent_route.clone()));
        fields.insert(FIELD_FAVOURITE_CARRIER.into(), opt_string(self.favourite_carrier.clone()));
        fields.insert(FIELD_MEAL_PREFERENCE.into(), opt_string(self.meal_preference.clone()));
        fields.insert(FIELD_ACCESSIBILITY.into(), opt_string(self.accessibility.clone()));
        fields.insert(FIELD_BAGGAGE_PREFERENCE.into(), opt_string(self.baggage_preference.clone()));
        fields
    }
}

// ---------------------------------------------------------------------------
// Creation shape
// ---------------------------------------------------------------------------

/// The creation payload. Required fields must be present and non-empty;
/// email syntax is checked before anything reaches the store.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePassenger {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub given_name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub surname: String,
    pub passport_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_expiration: Option<NaiveDate>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub mobile: String,
    pub emergency_contact: Option<String>,
    pub organization_name: Option<String>,
    pub designation: Option<String>,
    pub frequent_flyer_number: Option<String>,
    pub recent_route: Option<String>,
    pub favourite_carrier: Option<String>,
    pub meal_preference: Option<String>,
    pub accessibility: Option<String>,
    pub baggage_preference: Option<String>,
}

impl CreatePassenger {
    /// Encode the payload as a stored field mapping. Date fields become
    /// ISO-8601 strings; unset optional fields are stored as null.
    pub fn into_document(self) -> Document {
        let mut fields = Document::new();
        fields.insert(FIELD_TITLE.into(), Value::String(self.title));
        fields.insert(FIELD_GIVEN_NAME.into(), Value::String(self.given_name));
        fields.insert(FIELD_SURNAME.into(), Value::String(self.surname));
        fields.insert(FIELD_PASSPORT_NUMBER.into(), opt_string(self.passport_number));
        fields.insert(FIELD_DATE_OF_BIRTH.into(), opt_date(self.date_of_birth));
        fields.insert(FIELD_DATE_OF_EXPIRATION.into(), opt_date(self.date_of_expiration));
        fields.insert(FIELD_EMAIL.into(), Value::String(self.email));
        fields.insert(FIELD_MOBILE.into(), Value::String(self.mobile));
        fields.insert(FIELD_EMERGENCY_CONTACT.into(), opt_string(self.emergency_contact));
        fields.insert(FIELD_ORGANIZATION_NAME.into(), opt_string(self.organization_name));
        fields.insert(FIELD_DESIGNATION.into(), opt_string(self.designation));
        fields.insert(
            FIELD_FREQUENT_FLYER_NUMBER.into(),
            opt_string(self.frequent_flyer_number),
        );
        fields.insert(FIELD_RECENT_ROUTE.into(), opt_string(self.recent_route));
        fields.insert(FIELD_FAVOURITE_CARRIER.into(), opt_string(self.favourite_carrier));
        fields.insert(FIELD_MEAL_PREFERENCE.into(), opt_string(self.meal_preference));
        fields.insert(FIELD_ACCESSIBILITY.into(), opt_string(self.accessibility));
        fields.insert(FIELD_BAGGAGE_PREFERENCE.into(), opt_string(self.baggage_preference));
        fields
    }
}

// ---------------------------------------------------------------------------
// Partial update shape
// ---------------------------------------------------------------------------

/// The partial update payload.
///
/// Required fields use a single `Option`: absent means "not supplied".
/// Optional fields use a double `Option` so an absent key (`None`) is
/// distinguishable from an explicit JSON `null` (`Some(None)`), which
/// clears the field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePassenger {
    pub title: Option<String>,
    pub given_name: Option<String>,
    pub surname: Option<String>,
    #[serde(default, deserialize_with = "supplied")]
    pub passport_number: Option<Option<String>>,
    #[serde(default, deserialize_with = "supplied")]
    pub date_of_birth: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "supplied")]
    pub date_of_expiration: Option<Option<NaiveDate>>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    #[serde(default, deserialize_with = "supplied")]
    pub emergency_contact: Option<Option<String>>,
    #[serde(default, deserialize_with = "supplied")]
    pub organization_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "supplied")]
    pub designation: Option<Option<String>>,
    #[serde(default, deserialize_with = "supplied")]
    pub frequent_flyer_number: Option<Option<String>>,
    #[serde(default, deserialize_with = "supplied")]
    pub recent_route: Option<Option<String>>,
    #[serde(default, deserialize_with = "supplied")]
    pub favourite_carrier: Option<Option<String>>,
    #[serde(default, deserialize_with = "supplied")]
    pub meal_preference: Option<Option<String>>,
    #[serde(default, deserialize_with = "supplied")]
    pub accessibility: Option<Option<String>>,
    #[serde(default, deserialize_with = "supplied")]
    pub baggage_preference: Option<Option<String>>,
}

/// Deserialize a present key as `Some(inner)`, so a missing key (handled
/// by `#[serde(default)]`) stays `None` while `null` becomes `Some(None)`.
fn supplied<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl UpdatePassenger {
    /// Validate the supplied fields: required fields, when supplied, must
    /// be non-empty; a supplied email must be syntactically valid.
    pub fn validate_fields(&self) -> Result<(), CoreError> {
        let required = [
            (FIELD_TITLE, &self.title),
            (FIELD_GIVEN_NAME, &self.given_name),
            (FIELD_SURNAME, &self.surname),
            (FIELD_MOBILE, &self.mobile),
        ];
        for (name, value) in required {
            if let Some(value) = value {
                if value.is_empty() {
                    return Err(CoreError::Validation(format!("{name}: must not be empty")));
                }
            }
        }
        if let Some(email) = &self.email {
            if !email.validate_email() {
                return Err(CoreError::Validation(format!(
                    "{FIELD_EMAIL}: must be a valid email address"
                )));
            }
        }
        Ok(())
    }

    /// Overlay the supplied fields onto an existing record.
    ///
    /// Starts from the record's full field mapping and overwrites exactly
    /// the fields present in the update, so the result always carries
    /// every field -- the write payload is the whole merged mapping, not
    /// the diff.
    pub fn merge_into(&self, existing: &Passenger) -> Document {
        let mut fields = existing.to_fields();
        if let Some(v) = &self.title {
            fields.insert(FIELD_TITLE.into(), Value::String(v.clone()));
        }
        if let Some(v) = &self.given_name {
            fields.insert(FIELD_GIVEN_NAME.into(), Value::String(v.clone()));
        }
        if let Some(v) = &self.surname {
            fields.insert(FIELD_SURNAME.into(), Value::String(v.clone()));
        }
        if let Some(v) = &self.passport_number {
            fields.insert(FIELD_PASSPORT_NUMBER.into(), opt_string(v.clone()));
        }
        if let Some(v) = &self.date_of_birth {
            fields.insert(FIELD_DATE_OF_BIRTH.into(), opt_date(*v));
        }
        if let Some(v) = &self.date_of_expiration {
            fields.insert(FIELD_DATE_OF_EXPIRATION.into(), opt_date(*v));
        }
        if let Some(v) = &self.email {
            fields.insert(FIELD_EMAIL.into(), Value::String(v.clone()));
        }
        if let Some(v) = &self.mobile {
            fields.insert(FIELD_MOBILE.into(), Value::String(v.clone()));
        }
        if let Some(v) = &self.emergency_contact {
            fields.insert(FIELD_EMERGENCY_CONTACT.into(), opt_string(v.clone()));
        }
        if let Some(v) = &self.organization_name {
            fields.insert(FIELD_ORGANIZATION_NAME.into(), opt_string(v.clone()));
        }
        if let Some(v) = &self.designation {
            fields.insert(FIELD_DESIGNATION.into(), opt_string(v.clone()));
        }
        if let Some(v) = &self.frequent_flyer_number {
            fields.insert(FIELD_FREQUENT_FLYER_NUMBER.into(), opt_string(v.clone()));
        }
        if let Some(v) = &self.recent_route {
            fields.insert(FIELD_RECENT_ROUTE.into(), opt_string(v.clone()));
        }
        if let Some(v) = &self.favourite_carrier {
            fields.insert(FIELD_FAVOURITE_CARRIER.into(), opt_string(v.clone()));
        }
        if let Some(v) = &self.meal_preference {
            fields.insert(FIELD_MEAL_PREFERENCE.into(), opt_string(v.clone()));
        }
        if let Some(v) = &self.accessibility {
            fields.insert(FIELD_ACCESSIBILITY.into(), opt_string(v.clone()));
        }
        if let Some(v) = &self.baggage_preference {
            fields.insert(FIELD_BAGGAGE_PREFERENCE.into(), opt_string(v.clone()));
        }
        fields
    }
}

// ---------------------------------------------------------------------------
// Value helpers
// ---------------------------------------------------------------------------

fn opt_string(value: Option<String>) -> Value {
    value.map(Value::String).unwrap_or(Value::Null)
}

fn opt_date(value: Option<NaiveDate>) -> Value {
    value.map(|d| Value::String(d.to_string())).unwrap_or(Value::Null)
}

fn required_str(fields: &Document, key: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn optional_str(fields: &Document, key: &str) -> Option<String> {
    fields.get(key).and_then(Value::as_str).map(str::to_string)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
