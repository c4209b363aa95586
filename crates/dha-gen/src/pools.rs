//! Fixed candidate pools for generated free-text fields.
//!
//! Values are drawn uniformly; keeping the pools in-crate keeps fixed-seed
//! runs stable across machines.

pub const FIRST_NAMES: &[&str] = &[
    "Thabo", "Sipho", "Lerato", "Nomvula", "Bongani", "Zanele", "Mandla", "Precious", "Kagiso",
    "Ayanda", "Lindiwe", "Tshepo", "Nandi", "Sibusiso", "Palesa", "Thandiwe", "Johan", "Pieter",
    "Annelie", "Marius", "Elsabe", "Riaan", "Sarah", "James", "Emily", "Daniel", "Jessica",
    "Michael", "Chloe", "David", "Fatima", "Yusuf", "Aisha", "Rajesh", "Priya", "Anand",
    "Charmaine", "Werner", "Busisiwe", "Katlego",
];

pub const LAST_NAMES: &[&str] = &[
    "Dlamini", "Nkosi", "Khumalo", "Mokoena", "Ndlovu", "Mahlangu", "Sithole", "Zulu", "Mthembu",
    "Molefe", "Van der Merwe", "Botha", "Pretorius", "Du Plessis", "Venter", "Smith", "Jacobs",
    "Williams", "Petersen", "Daniels", "Naidoo", "Pillay", "Govender", "Reddy", "Moodley",
    "Khan", "Abrahams", "Adams", "Fourie", "Nel", "Steyn", "Mabaso", "Radebe", "Tshabalala",
    "Maseko", "Ngcobo", "Cele", "Gumede", "Hadebe", "Mkhize",
];

pub const CITIES: &[&str] = &[
    "Johannesburg", "Cape Town", "Durban", "Pretoria", "Port Elizabeth", "Bloemfontein",
    "East London", "Polokwane", "Nelspruit", "Kimberley", "Pietermaritzburg", "Rustenburg",
    "George", "Welkom", "Mthatha", "Upington", "Soweto", "Benoni", "Vereeniging", "Paarl",
    "Stellenbosch", "Midrand", "Newcastle", "Tzaneen",
];

pub const STREET_NAMES: &[&str] = &[
    "Church", "Long", "Main", "Loop", "Bree", "Market", "Kerk", "Voortrekker", "Jan Smuts",
    "Nelson Mandela", "Oxford", "Rivonia", "Pritchard", "Commissioner", "Adderley", "Strand",
    "Umgeni", "Florida", "Baobab", "Protea",
];

pub const STREET_TYPES: &[&str] = &["Street", "Road", "Avenue", "Drive", "Lane", "Crescent"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pools_are_non_empty_and_deduplicated() {
        for pool in [FIRST_NAMES, LAST_NAMES, CITIES, STREET_NAMES, STREET_TYPES] {
            assert!(!pool.is_empty());
            let mut sorted = pool.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), pool.len());
        }
    }
}
