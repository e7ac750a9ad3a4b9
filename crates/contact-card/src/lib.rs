//! Contact details and their vCard 3.0 text form.
//!
//! The record is built fresh from a submitted form and rendered into the
//! minimal vCard layout that phone cameras understand when scanning a QR code.

use serde::Deserialize;

/// Contact details as submitted through the form.
///
/// All fields are free text. A field missing from the submission
/// deserializes to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactRecord {
    pub first_name: String,
    pub sur_name: String,
    pub company: String,
    pub title: String,
    pub email: String,
    pub phone: String,
}

impl ContactRecord {
    /// Display name, `First Sur`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.sur_name)
    }

    /// Render the record as vCard 3.0 text.
    ///
    /// Field order and line layout are fixed and empty fields keep their
    /// line. Values are inserted verbatim: a value containing a newline or a
    /// semicolon changes the structure of the card.
    pub fn to_vcard(&self) -> String {
        format!(
            "BEGIN:VCARD\nVERSION:3.0\nN:{sur};{first};;;\nFN:{full}\nORG:{org}\nTITLE:{title}\nEMAIL:{email}\nTEL:{tel}\nEND:VCARD",
            sur = self.sur_name,
            first = self.first_name,
            full = self.full_name(),
            org = self.company,
            title = self.title,
            email = self.email,
            tel = self.phone,
        )
    }
}
