//! Fixed province → DHA branch directory.
//!
//! Branch names are the ground truth the application generator samples from;
//! a branch drawn from a *different* province's list is the deliberate
//! "province mismatch" defect, so the mapping itself must stay stable.

use crate::enums::Province;

impl Province {
    /// DHA branches located in this province.
    pub fn branches(self) -> &'static [&'static str] {
        match self {
            Province::EasternCape => &["Port Elizabeth", "East London", "Mthatha"],
            Province::FreeState => &["Bloemfontein", "Welkom"],
            Province::Gauteng => &["Johannesburg", "Pretoria", "Soweto", "Sandton", "Midrand"],
            Province::KwaZuluNatal => &["Durban", "Pietermaritzburg", "Newcastle"],
            Province::Limpopo => &["Polokwane", "Tzaneen"],
            Province::Mpumalanga => &["Nelspruit", "Witbank"],
            Province::NorthernCape => &["Kimberley", "Upington"],
            Province::NorthWest => &["Mahikeng", "Rustenburg"],
            Province::WesternCape => &["Cape Town", "Stellenbosch", "George"],
        }
    }

    /// True when `branch` belongs to this province.
    pub fn has_branch(self, branch: &str) -> bool {
        self.branches().contains(&branch)
    }
}

/// Every `(province, branch)` pair in directory order.
pub fn branch_directory() -> impl Iterator<Item = (Province, &'static str)> {
    Province::ALL
        .into_iter()
        .flat_map(|province| province.branches().iter().map(move |branch| (province, *branch)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_province_has_branches() {
        for province in Province::ALL {
            assert!(!province.branches().is_empty(), "{province} has no branches");
        }
    }

    #[test]
    fn branch_names_are_unique_across_provinces() {
        let all: Vec<&str> = branch_directory().map(|(_, branch)| branch).collect();
        let mut deduped = all.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(all.len(), deduped.len());
    }

    #[test]
    fn membership_check_matches_directory() {
        assert!(Province::Gauteng.has_branch("Soweto"));
        assert!(!Province::Gauteng.has_branch("Durban"));
    }
}
