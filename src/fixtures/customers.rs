//! Customer Fixtures

use serde::Deserialize;

use crate::customers::{CustomerRecord, MailingAddress};

/// Wrapper for a customer in YAML
#[derive(Debug, Deserialize)]
pub struct CustomersFixture {
    /// The customer record
    pub customer: CustomerFixture,
}

/// Customer fixture from YAML
///
/// Dates are read as strings and left unparsed.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomerFixture {
    /// Customer name
    pub name: String,

    /// Birth date
    pub birth_date: String,

    /// Gender
    pub gender: String,

    /// Room preferences, empty when omitted
    #[serde(default)]
    pub room_preferences: Vec<String>,

    /// Payment method
    pub payment_method: String,

    /// Mailing address
    pub mailing_address: MailingAddress,

    /// Phone number
    pub phone_number: String,

    /// Check-in date
    pub check_in_date: String,

    /// Check-out date
    pub check_out_date: String,
}

impl From<CustomerFixture> for CustomerRecord {
    fn from(fixture: CustomerFixture) -> Self {
        Self {
            name: fixture.name,
            birth_date: fixture.birth_date,
            gender: fixture.gender,
            room_preferences: fixture.room_preferences.into(),
            payment_method: fixture.payment_method,
            mailing_address: fixture.mailing_address,
            phone_number: fixture.phone_number,
            check_in_date: fixture.check_in_date,
            check_out_date: fixture.check_out_date,
        }
    }
}
