//! Type-safe enumerations for the generated datasets.
//!
//! Every enum here renders to the exact text that appears in the exported
//! CSV columns, so serde renames and `as_str` must stay in sync.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender as recorded in the population registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The nine South African provinces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Province {
    #[serde(rename = "Eastern Cape")]
    EasternCape,
    #[serde(rename = "Free State")]
    FreeState,
    Gauteng,
    #[serde(rename = "KwaZulu-Natal")]
    KwaZuluNatal,
    Limpopo,
    Mpumalanga,
    #[serde(rename = "Northern Cape")]
    NorthernCape,
    #[serde(rename = "North West")]
    NorthWest,
    #[serde(rename = "Western Cape")]
    WesternCape,
}

impl Province {
    pub const ALL: [Province; 9] = [
        Province::EasternCape,
        Province::FreeState,
        Province::Gauteng,
        Province::KwaZuluNatal,
        Province::Limpopo,
        Province::Mpumalanga,
        Province::NorthernCape,
        Province::NorthWest,
        Province::WesternCape,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Province::EasternCape => "Eastern Cape",
            Province::FreeState => "Free State",
            Province::Gauteng => "Gauteng",
            Province::KwaZuluNatal => "KwaZulu-Natal",
            Province::Limpopo => "Limpopo",
            Province::Mpumalanga => "Mpumalanga",
            Province::NorthernCape => "Northern Cape",
            Province::NorthWest => "North West",
            Province::WesternCape => "Western Cape",
        }
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Province {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Province::ALL
            .iter()
            .find(|province| province.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| format!("Unknown province: {s}"))
    }
}

/// What a DHA application is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationType {
    #[serde(rename = "ID Card")]
    IdCard,
    Passport,
}

impl ApplicationType {
    pub const ALL: [ApplicationType; 2] = [ApplicationType::IdCard, ApplicationType::Passport];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationType::IdCard => "ID Card",
            ApplicationType::Passport => "Passport",
        }
    }
}

impl fmt::Display for ApplicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Processing status of an application.
///
/// Absence of a status is modelled as `Option<ApplicationStatus>` on the
/// record, never as an extra variant: a missing status is a first-class
/// (intentional) state in the generated data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Approved,
    Rejected,
    Completed,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 5] = [
        ApplicationStatus::Pending,
        ApplicationStatus::InProgress,
        ApplicationStatus::Approved,
        ApplicationStatus::Rejected,
        ApplicationStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::InProgress => "In Progress",
            ApplicationStatus::Approved => "Approved",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How an application was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubmissionChannel {
    Branch,
    Online,
    #[serde(rename = "Mobile Unit")]
    MobileUnit,
}

impl SubmissionChannel {
    pub const ALL: [SubmissionChannel; 3] = [
        SubmissionChannel::Branch,
        SubmissionChannel::Online,
        SubmissionChannel::MobileUnit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionChannel::Branch => "Branch",
            SubmissionChannel::Online => "Online",
            SubmissionChannel::MobileUnit => "Mobile Unit",
        }
    }
}

impl fmt::Display for SubmissionChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn province_from_str_round_trips() {
        for province in Province::ALL {
            assert_eq!(province.as_str().parse::<Province>().unwrap(), province);
        }
        assert_eq!("kwazulu-natal".parse::<Province>().unwrap(), Province::KwaZuluNatal);
        assert!("Transvaal".parse::<Province>().is_err());
    }

    #[test]
    fn serde_matches_display() {
        let json = serde_json::to_string(&Province::NorthWest).unwrap();
        assert_eq!(json, "\"North West\"");
        let json = serde_json::to_string(&ApplicationStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
        let json = serde_json::to_string(&SubmissionChannel::MobileUnit).unwrap();
        assert_eq!(json, "\"Mobile Unit\"");
        let json = serde_json::to_string(&ApplicationType::IdCard).unwrap();
        assert_eq!(json, "\"ID Card\"");
    }
}
