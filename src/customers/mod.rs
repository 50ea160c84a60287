//! Customers

use std::fmt;

use jiff::{Zoned, civil::Date};
use smallvec::{SmallVec, smallvec};
use thiserror::Error;
use tracing::warn;

use crate::dates::{self, DateField};

pub mod address;

pub use address::MailingAddress;

/// Placeholder written into a description when a derived value cannot be computed.
pub const NOT_A_NUMBER: &str = "NaN";

/// Errors computing a customer's derived values.
#[derive(Debug, Error)]
pub enum CustomerError {
    /// A date attribute could not be parsed as a calendar date.
    #[error("Invalid {field} {value:?}: {source}")]
    InvalidDate {
        /// Attribute the value was read from
        field: DateField,

        /// Value as supplied
        value: String,

        /// Underlying parse failure
        source: jiff::Error,
    },
}

/// A motel customer's profile and current stay.
///
/// Date attributes are held as supplied and parsed on demand, so a malformed
/// date only affects the derived values that depend on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRecord {
    /// Customer name
    pub name: String,

    /// Birth date (ISO 8601)
    pub birth_date: String,

    /// Gender
    pub gender: String,

    /// Room preferences, in order of importance
    pub room_preferences: SmallVec<[String; 4]>,

    /// Payment method
    pub payment_method: String,

    /// Mailing address
    pub mailing_address: MailingAddress,

    /// Phone number
    pub phone_number: String,

    /// Check-in date (ISO 8601)
    pub check_in_date: String,

    /// Check-out date (ISO 8601)
    pub check_out_date: String,
}

impl CustomerRecord {
    /// The built-in demonstration customer.
    pub fn sample() -> Self {
        Self {
            name: "George Clooney".to_string(),
            birth_date: "1961-05-06".to_string(),
            gender: "Male".to_string(),
            room_preferences: smallvec!["Non-smoking".to_string(), "King size bed".to_string()],
            payment_method: "Credit Card".to_string(),
            mailing_address: MailingAddress::new("123 Main St", "Los Angeles", "CA"),
            phone_number: "555-1234".to_string(),
            check_in_date: "2024-07-20".to_string(),
            check_out_date: "2024-07-25".to_string(),
        }
    }

    /// Age in whole years on `today`.
    ///
    /// A birth date after `today` gives a negative age.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerError::InvalidDate`] if the birth date cannot be parsed.
    pub fn age(&self, today: Date) -> Result<i16, CustomerError> {
        let birth = dates::parse(DateField::BirthDate, &self.birth_date)?;

        Ok(dates::years_between(birth.date(), today))
    }

    /// Age in whole years on the system's current local date.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerError::InvalidDate`] if the birth date cannot be parsed.
    pub fn age_today(&self) -> Result<i16, CustomerError> {
        self.age(Zoned::now().date())
    }

    /// Length of the stay in days, rounded to the nearest day.
    ///
    /// Check-in and check-out are interchangeable.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerError::InvalidDate`] if either stay date cannot be parsed.
    pub fn stay_duration(&self) -> Result<i64, CustomerError> {
        let check_in = dates::parse(DateField::CheckIn, &self.check_in_date)?;
        let check_out = dates::parse(DateField::CheckOut, &self.check_out_date)?;

        Ok(dates::whole_days_between(check_in, check_out))
    }

    /// Human readable, multi-line description of the customer as of `today`.
    ///
    /// Derived values that cannot be computed are written as [`NOT_A_NUMBER`].
    pub fn describe(&self, today: Date) -> String {
        let age = derived_or_nan(self.age(today));
        let stay_duration = derived_or_nan(self.stay_duration());

        format!(
            "The Customer's Name is {name}.\n\
             Age is {age}.\n\
             Gender is {gender}.\n\
             Room Preferences as followed {preferences}.\n\
             Payment Method: {payment}\n\
             Mailing Address on file is {address}.\n\
             Phone Number on file is {phone}.\n\
             Check-in Date  {check_in}.\n\
             Check-out Date was {check_out}.\n\
             Duration of Stay: {stay_duration} days",
            name = self.name,
            gender = self.gender,
            preferences = self.room_preferences.join(", "),
            payment = self.payment_method,
            address = self.mailing_address,
            phone = self.phone_number,
            check_in = self.check_in_date,
            check_out = self.check_out_date,
        )
    }
}

fn derived_or_nan<T: fmt::Display>(value: Result<T, CustomerError>) -> String {
    match value {
        Ok(value) => value.to_string(),
        Err(error) => {
            warn!(%error, "derived value unavailable, writing {NOT_A_NUMBER}");

            NOT_A_NUMBER.to_string()
        }
    }
}
