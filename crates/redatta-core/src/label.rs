//! Entity labels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label attached to a detected span.
///
/// The closed set covers everything the rule layer and the default
/// recognizer emit. Labels produced by a recognizer outside this set are
/// carried through unchanged as [`Label::Other`].
///
/// `Display` renders the tag name used inside `[...]` placeholders and
/// `FromStr` parses it back; downstream tooling relies on this round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Label {
    /// Person name
    Per,
    /// The patient the record is about
    Patient,
    /// Geo-political entity (municipality, region, nation)
    Gpe,
    /// Non-GPE location
    Loc,
    /// Facility (hospital, ward, building)
    Fac,
    /// Organization
    Org,
    /// Italian province code
    Prov,
    /// Date
    Date,
    /// Nationality, religious or political group
    Norp,
    /// Email address
    Mail,
    /// Phone number
    Phone,
    /// URL
    Url,
    /// Fiscal/government/clinical code or generic identifier
    Code,
    /// Recognizer-specific label passed through unchanged
    Other(String),
}

impl Label {
    /// Tag name as it appears inside `[...]` placeholders.
    pub fn tag(&self) -> &str {
        match self {
            Label::Per => "PER",
            Label::Patient => "PATIENT",
            Label::Gpe => "GPE",
            Label::Loc => "LOC",
            Label::Fac => "FAC",
            Label::Org => "ORG",
            Label::Prov => "PROV",
            Label::Date => "DATE",
            Label::Norp => "NORP",
            Label::Mail => "MAIL",
            Label::Phone => "PHONE",
            Label::Url => "URL",
            Label::Code => "CODE",
            Label::Other(s) => s,
        }
    }

    fn from_tag(s: &str) -> Option<Label> {
        Some(match s {
            "PER" => Label::Per,
            "PATIENT" => Label::Patient,
            "GPE" => Label::Gpe,
            "LOC" => Label::Loc,
            "FAC" => Label::Fac,
            "ORG" => Label::Org,
            "PROV" => Label::Prov,
            "DATE" => Label::Date,
            "NORP" => Label::Norp,
            "MAIL" => Label::Mail,
            "PHONE" => Label::Phone,
            "URL" => Label::Url,
            "CODE" => Label::Code,
            _ => return None,
        })
    }

    /// The label set redacted when the caller does not narrow it down.
    pub fn default_entities() -> Vec<Label> {
        vec![
            Label::Patient,
            Label::Per,
            Label::Loc,
            Label::Org,
            Label::Fac,
            Label::Gpe,
            Label::Prov,
            Label::Date,
            Label::Norp,
            Label::Code,
            Label::Mail,
            Label::Phone,
            Label::Url,
        ]
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Label {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Label::from_tag(s).unwrap_or_else(|| Label::Other(s.to_string())))
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        match Label::from_tag(&s) {
            Some(label) => label,
            None => Label::Other(s),
        }
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        label.tag().to_string()
    }
}
