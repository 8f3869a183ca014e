//! Caller-supplied personal data

use crate::label::Label;
use serde::{Deserialize, Serialize};

/// The closed set of personal-data fields a caller may supply.
///
/// Serde names match the wire keys used by the clinical record format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonalField {
    #[serde(rename = "nome")]
    FirstName,
    #[serde(rename = "cognome")]
    LastName,
    #[serde(rename = "nazione_nascita")]
    BirthCountry,
    #[serde(rename = "luogo_nascita")]
    BirthPlace,
    #[serde(rename = "data_nascita")]
    BirthDate,
    #[serde(rename = "nazione_residenza")]
    ResidenceCountry,
    #[serde(rename = "luogo_residenza")]
    ResidencePlace,
    #[serde(rename = "prov_residenza")]
    ResidenceProvince,
}

impl PersonalField {
    /// Fixed label this field's matches are tagged with.
    pub fn label(self) -> Label {
        match self {
            PersonalField::FirstName | PersonalField::LastName => Label::Patient,
            PersonalField::BirthCountry
            | PersonalField::BirthPlace
            | PersonalField::ResidenceCountry
            | PersonalField::ResidencePlace => Label::Gpe,
            PersonalField::BirthDate => Label::Date,
            PersonalField::ResidenceProvince => Label::Prov,
        }
    }

    /// Code fields are matched byte-exact; free-text fields fold case.
    pub fn case_sensitive(self) -> bool {
        matches!(self, PersonalField::ResidenceProvince)
    }
}

/// Known personal data for the patient a record is about.
///
/// Every field is optional; empty or absent values contribute no matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cognome: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nazione_nascita: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub luogo_nascita: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_nascita: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nazione_residenza: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub luogo_residenza: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prov_residenza: Option<String>,
}

impl PersonalData {
    /// Iterate the non-empty fields with their values.
    pub fn entries(&self) -> impl Iterator<Item = (PersonalField, &str)> {
        [
            (PersonalField::FirstName, &self.nome),
            (PersonalField::LastName, &self.cognome),
            (PersonalField::BirthCountry, &self.nazione_nascita),
            (PersonalField::BirthPlace, &self.luogo_nascita),
            (PersonalField::BirthDate, &self.data_nascita),
            (PersonalField::ResidenceCountry, &self.nazione_residenza),
            (PersonalField::ResidencePlace, &self.luogo_residenza),
            (PersonalField::ResidenceProvince, &self.prov_residenza),
        ]
        .into_iter()
        .filter_map(|(field, value)| {
            let value = value.as_deref()?.trim();
            if value.is_empty() {
                None
            } else {
                Some((field, value))
            }
        })
    }

    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }
}
