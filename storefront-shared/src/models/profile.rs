//! Shipping details kept on the user's profile.

use serde::{Deserialize, Serialize};

/// Body of `GET /api/profile/user` and `PUT /api/profile/update`. Every
/// field starts out empty for a new account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UserProfile {
    /// Street address.
    pub address_line_1: String,
    /// Apartment, suite or building.
    pub address_line_2: String,
    /// City.
    pub city: String,
    /// State, province or region.
    pub state_province_region: String,
    /// Postal code.
    pub zipcode: String,
    /// Contact phone number.
    pub phone: String,
    /// Country or region.
    pub country_region: String,
}

impl UserProfile {
    /// Set the field called `name`; returns `false` for unknown names.
    pub fn set_field(&mut self, name: &str, value: String) -> bool {
        let field = match name {
            "address_line_1" => &mut self.address_line_1,
            "address_line_2" => &mut self.address_line_2,
            "city" => &mut self.city,
            "state_province_region" => &mut self.state_province_region,
            "zipcode" => &mut self.zipcode,
            "phone" => &mut self.phone,
            "country_region" => &mut self.country_region,
            _ => return false,
        };
        *field = value;
        true
    }
}

/// Envelope around [`UserProfile`] used by both profile endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileResponse {
    /// The stored profile.
    pub profile: UserProfile,
}
