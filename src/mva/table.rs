//! Static MVA reference data keyed by NCM.
//!
//! Each entry carries one MVA per declared interstate rate bracket
//! (4%, 7%, 12%) plus the original MVA used for any other rate.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Declared ICMS rate bracket used to pick an MVA column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RateBracket {
    /// Interstate 4% (imported goods).
    Rate4,
    /// Interstate 7%.
    Rate7,
    /// Interstate 12%.
    Rate12,
    /// Any other rate, including 0 and intrastate rates.
    Other,
}

impl RateBracket {
    /// Bracket for a declared rate.
    ///
    /// The rate is rounded to the nearest integer, ties away from zero
    /// (11.5 → 12, 12.5 → 13), then matched against 4, 7 and 12.
    pub fn for_rate(rate: Decimal) -> Self {
        let rounded = rate.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        if rounded == dec!(4) {
            Self::Rate4
        } else if rounded == dec!(7) {
            Self::Rate7
        } else if rounded == dec!(12) {
            Self::Rate12
        } else {
            Self::Other
        }
    }
}

/// MVA percentages per rate bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MvaBrackets {
    pub mva4: Decimal,
    pub mva7: Decimal,
    pub mva12: Decimal,
    /// Original MVA, for rates outside the interstate brackets.
    pub original: Decimal,
}

impl MvaBrackets {
    pub const fn new(mva4: Decimal, mva7: Decimal, mva12: Decimal, original: Decimal) -> Self {
        Self {
            mva4,
            mva7,
            mva12,
            original,
        }
    }

    /// MVA for a bracket.
    pub fn get(&self, bracket: RateBracket) -> Decimal {
        match bracket {
            RateBracket::Rate4 => self.mva4,
            RateBracket::Rate7 => self.mva7,
            RateBracket::Rate12 => self.mva12,
            RateBracket::Other => self.original,
        }
    }
}

/// Segment-wide MVA for auto parts (CEST 01.xxx.xx and listed NCMs).
pub const AUTOPECAS: MvaBrackets =
    MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78));

/// Segment-wide MVA for construction materials (CEST 10.xxx.xx).
pub const MATERIAIS_CONSTRUCAO: MvaBrackets =
    MvaBrackets::new(dec!(82.34), dec!(76.64), dec!(67.14), dec!(51.00));

/// MVA brackets for an NCM, if it is listed.
pub fn lookup_ncm(ncm: &str) -> Option<&'static MvaBrackets> {
    MVA_TABLE
        .binary_search_by(|(key, _)| (*key).cmp(ncm))
        .ok()
        .map(|i| &MVA_TABLE[i].1)
}

/// Number of NCMs in the general table.
pub fn table_len() -> usize {
    MVA_TABLE.len()
}

/// General MVA table by NCM. Sorted for binary search.
static MVA_TABLE: &[(&str, MvaBrackets)] = &[
    ("12074090", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("19021900", MvaBrackets::new(dec!(44.91), dec!(40.38), dec!(32.83), dec!(20))),
    ("19052010", MvaBrackets::new(dec!(56.98), dec!(45), dec!(43.9), dec!(30))),
    ("19053100", MvaBrackets::new(dec!(56.98), dec!(52.08), dec!(43.9), dec!(30))),
    ("19053200", MvaBrackets::new(dec!(75.09), dec!(45), dec!(60.5), dec!(45))),
    ("19059010", MvaBrackets::new(dec!(44.91), dec!(40.38), dec!(32.83), dec!(20))),
    ("19059020", MvaBrackets::new(dec!(56.98), dec!(45), dec!(43.9), dec!(30))),
    ("19059090", MvaBrackets::new(dec!(56.98), dec!(45), dec!(43.9), dec!(30))),
    ("21050010", MvaBrackets::new(dec!(105.28), dec!(98.87), dec!(88.18), dec!(70))),
    ("21069090", MvaBrackets::new(dec!(105.28), dec!(98.87), dec!(88.18), dec!(70))),
    ("22011000", MvaBrackets::new(dec!(189.81), dec!(140), dec!(165.66), dec!(140))),
    ("27101932", MvaBrackets::new(dec!(109.45), dec!(102.9), dec!(92), dec!(73.45))),
    ("29362940", MvaBrackets::new(dec!(70.67), dec!(65.34), dec!(56.45), dec!(41.34))),
    ("32081010", MvaBrackets::new(dec!(63.02), dec!(57.92), dec!(49.43), dec!(35))),
    ("32091010", MvaBrackets::new(dec!(63.02), dec!(57.92), dec!(49.43), dec!(35))),
    ("32149000", MvaBrackets::new(dec!(70.26), dec!(64.94), dec!(56.08), dec!(41))),
    ("33049990", MvaBrackets::new(dec!(59.13), dec!(54.16), dec!(45.87), dec!(31.78))),
    ("33051000", MvaBrackets::new(dec!(65.29), dec!(60.12), dec!(51.51), dec!(36.88))),
    ("33059000", MvaBrackets::new(dec!(83.2), dec!(77.47), dec!(67.93), dec!(51.71))),
    ("33061000", MvaBrackets::new(dec!(63.34), dec!(58.24), dec!(49.73), dec!(35.27))),
    ("33072010", MvaBrackets::new(dec!(81.1), dec!(75.44), dec!(66), dec!(49.97))),
    ("33072090", MvaBrackets::new(dec!(82.88), dec!(77.17), dec!(67.64), dec!(51.45))),
    ("34011190", MvaBrackets::new(dec!(88.11), dec!(82.23), dec!(72.44), dec!(55.78))),
    ("39161000", MvaBrackets::new(dec!(89.58), dec!(83.66), dec!(73.79), dec!(57))),
    ("39169090", MvaBrackets::new(dec!(89.58), dec!(83.66), dec!(73.79), dec!(57))),
    ("39172100", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("39172300", MvaBrackets::new(dec!(64.23), dec!(59.09), dec!(50.54), dec!(36))),
    ("39173229", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("39173290", MvaBrackets::new(dec!(64.23), dec!(59.09), dec!(50.54), dec!(36))),
    ("39173900", MvaBrackets::new(dec!(64.23), dec!(59.09), dec!(50.54), dec!(36))),
    ("39174090", MvaBrackets::new(dec!(64.23), dec!(59.09), dec!(50.54), dec!(36))),
    ("39191020", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("39199090", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("39201010", MvaBrackets::new(dec!(83.55), dec!(77.81), dec!(68.25), dec!(52))),
    ("39201099", MvaBrackets::new(dec!(83.55), dec!(77.81), dec!(68.25), dec!(52))),
    ("39205100", MvaBrackets::new(dec!(83.55), dec!(77.81), dec!(68.25), dec!(52))),
    ("39206100", MvaBrackets::new(dec!(84.75), dec!(78.98), dec!(69.35), dec!(53))),
    ("39209200", MvaBrackets::new(dec!(83.55), dec!(77.81), dec!(68.25), dec!(52))),
    ("39209990", MvaBrackets::new(dec!(83.55), dec!(77.81), dec!(68.25), dec!(52))),
    ("39219019", MvaBrackets::new(dec!(84.75), dec!(78.98), dec!(69.36), dec!(53))),
    ("39229000", MvaBrackets::new(dec!(79.92), dec!(74.3), dec!(64.93), dec!(49))),
    ("39233090", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("39241000", MvaBrackets::new(dec!(108.53), dec!(102.01), dec!(91.15), dec!(72.69))),
    ("39249000", MvaBrackets::new(dec!(117.36), dec!(110.57), dec!(99.25), dec!(80))),
    ("39259090", MvaBrackets::new(dec!(76.3), dec!(70.79), dec!(61.61), dec!(46))),
    ("39263000", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("39269010", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("39269090", MvaBrackets::new(dec!(70.67), dec!(65.34), dec!(56.45), dec!(41.34))),
    ("40081100", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("40091100", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("40091290", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("40092210", MvaBrackets::new(dec!(105.28), dec!(98.87), dec!(88.18), dec!(70))),
    ("40093100", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("40094100", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("40094290", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("40103100", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("40103200", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("40103300", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("40103500", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("40103900", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("40118090", MvaBrackets::new(dec!(59.4), dec!(54.42), dec!(46.11), dec!(32))),
    ("40119090", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("40129010", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("40129090", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("40139000", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("40149090", MvaBrackets::new(dec!(108.53), dec!(102.01), dec!(91.15), dec!(72.69))),
    ("40161010", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("40161090", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("40169300", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("40169990", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("45049000", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("48181000", MvaBrackets::new(dec!(104.07), dec!(97.7), dec!(87.09), dec!(69.29))),
    ("48182000", MvaBrackets::new(dec!(82.07), dec!(76.38), dec!(66.9), dec!(50.78))),
    ("48183000", MvaBrackets::new(dec!(90.48), dec!(84.53), dec!(74.61), dec!(57.74))),
    ("48185000", MvaBrackets::new(dec!(104.07), dec!(97.7), dec!(87.09), dec!(69.29))),
    ("48211000", MvaBrackets::new(dec!(104.07), dec!(97.7), dec!(87.09), dec!(69.29))),
    ("48239099", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("56012190", MvaBrackets::new(dec!(80.71), dec!(75.06), dec!(65.65), dec!(49.65))),
    ("56031290", MvaBrackets::new(dec!(104.07), dec!(97.7), dec!(87.09), dec!(69.29))),
    ("61159500", MvaBrackets::new(dec!(82.07), dec!(76.38), dec!(66.9), dec!(50.78))),
    ("62101000", MvaBrackets::new(dec!(82.07), dec!(76.38), dec!(66.9), dec!(50.78))),
    ("63025300", MvaBrackets::new(dec!(82.07), dec!(76.38), dec!(66.9), dec!(50.78))),
    ("63026000", MvaBrackets::new(dec!(82.07), dec!(76.38), dec!(66.9), dec!(50.78))),
    ("63029300", MvaBrackets::new(dec!(82.07), dec!(76.38), dec!(66.9), dec!(50.78))),
    ("63039200", MvaBrackets::new(dec!(82.07), dec!(76.38), dec!(66.9), dec!(50.78))),
    ("63049100", MvaBrackets::new(dec!(82.07), dec!(76.38), dec!(66.9), dec!(50.78))),
    ("63079010", MvaBrackets::new(dec!(82.07), dec!(76.38), dec!(66.9), dec!(50.78))),
    ("68129990", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("68138110", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("68138190", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("68138910", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("69120000", MvaBrackets::new(dec!(120.98), dec!(114.08), dec!(102.57), dec!(83))),
    ("70071100", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("70071900", MvaBrackets::new(dec!(73.89), dec!(68.45), dec!(59.4), dec!(44))),
    ("70091000", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("70181090", MvaBrackets::new(dec!(94.09), dec!(88.03), dec!(77.93), dec!(60.75))),
    ("72171090", MvaBrackets::new(dec!(73.89), dec!(68.45), dec!(59.4), dec!(44))),
    ("73049090", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("73071100", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("73071910", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("73071920", MvaBrackets::new(dec!(65.43), dec!(60.26), dec!(51.65), dec!(37))),
    ("73071990", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("73072100", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("73072200", MvaBrackets::new(dec!(65.43), dec!(60.26), dec!(51.65), dec!(37))),
    ("73072300", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("73072900", MvaBrackets::new(dec!(65.43), dec!(60.26), dec!(51.65), dec!(37))),
    ("73079100", MvaBrackets::new(dec!(65.43), dec!(60.26), dec!(51.65), dec!(37))),
    ("73079200", MvaBrackets::new(dec!(65.43), dec!(60.26), dec!(51.65), dec!(37))),
    ("73079900", MvaBrackets::new(dec!(65.43), dec!(60.26), dec!(51.65), dec!(37))),
    ("73089010", MvaBrackets::new(dec!(99.25), dec!(93.02), dec!(82.64), dec!(65))),
    ("73121090", MvaBrackets::new(dec!(73.89), dec!(68.45), dec!(59.4), dec!(44))),
    ("73151100", MvaBrackets::new(dec!(142.72), dec!(135.13), dec!(122.49), dec!(101))),
    ("73151210", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("73151290", MvaBrackets::new(dec!(142.72), dec!(135.13), dec!(122.49), dec!(101))),
    ("73181100", MvaBrackets::new(dec!(82.34), dec!(76.64), dec!(67.14), dec!(51))),
    ("73181500", MvaBrackets::new(dec!(82.34), dec!(76.64), dec!(67.14), dec!(51))),
    ("73181600", MvaBrackets::new(dec!(82.34), dec!(76.64), dec!(67.14), dec!(51))),
    ("73181900", MvaBrackets::new(dec!(82.34), dec!(76.64), dec!(67.14), dec!(51))),
    ("73182100", MvaBrackets::new(dec!(82.34), dec!(76.64), dec!(67.14), dec!(51))),
    ("73182200", MvaBrackets::new(dec!(82.34), dec!(76.64), dec!(67.14), dec!(51))),
    ("73182400", MvaBrackets::new(dec!(82.34), dec!(76.64), dec!(67.14), dec!(51))),
    ("73182900", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("73202010", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("73202090", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("73209000", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("73261900", MvaBrackets::new(dec!(117.36), dec!(110.57), dec!(99.25), dec!(80))),
    ("73269090", MvaBrackets::new(dec!(119.51), dec!(112.65), dec!(101.22), dec!(81.78))),
    ("74122000", MvaBrackets::new(dec!(60.6), dec!(55.58), dec!(47.22), dec!(33))),
    ("74152100", MvaBrackets::new(dec!(95.62), dec!(89.51), dec!(79.32), dec!(62))),
    ("76090000", MvaBrackets::new(dec!(66.64), dec!(61.43), dec!(52.75), dec!(38))),
    ("76109000", MvaBrackets::new(dec!(66.64), dec!(61.43), dec!(52.75), dec!(38))),
    ("76161000", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("82055900", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("82142000", MvaBrackets::new(dec!(89.4), dec!(83.48), dec!(73.62), dec!(56.85))),
    ("83012000", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("83014000", MvaBrackets::new(dec!(85.96), dec!(80.15), dec!(70.47), dec!(54))),
    ("83016000", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("83017000", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("83023000", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("83079000", MvaBrackets::new(dec!(95.62), dec!(89.51), dec!(79.32), dec!(62))),
    ("83111000", MvaBrackets::new(dec!(93.21), dec!(87.17), dec!(77.11), dec!(60))),
    ("84099114", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84099115", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84099116", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84099117", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84099120", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84099140", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84099190", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84099915", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84099929", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84099959", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84099979", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84099999", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84122190", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84122900", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84123110", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84129080", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84133010", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84133030", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84133090", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84135010", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84136011", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84137090", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84145910", MvaBrackets::new(dec!(44.91), dec!(40.38), dec!(32.83), dec!(20))),
    ("84145990", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("84146000", MvaBrackets::new(dec!(44.91), dec!(40.38), dec!(32.83), dec!(20))),
    ("84149020", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84149031", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84149033", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84149034", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84149039", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84151011", MvaBrackets::new(dec!(44.91), dec!(40.38), dec!(32.83), dec!(20))),
    ("84151019", MvaBrackets::new(dec!(44.91), dec!(40.38), dec!(32.83), dec!(20))),
    ("84158190", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84158290", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84158300", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84182100", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("84183000", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("84184000", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("84185010", MvaBrackets::new(dec!(104.07), dec!(97.7), dec!(87.09), dec!(69.29))),
    ("84185090", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84189900", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84212300", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84212990", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84213100", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84219910", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84219999", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84241000", MvaBrackets::new(dec!(104.07), dec!(97.7), dec!(87.09), dec!(69.29))),
    ("84242000", MvaBrackets::new(dec!(104.07), dec!(97.7), dec!(87.09), dec!(69.29))),
    ("84243010", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("84248229", MvaBrackets::new(dec!(104.07), dec!(97.7), dec!(87.09), dec!(69.29))),
    ("84248990", MvaBrackets::new(dec!(85.96), dec!(80.15), dec!(70.47), dec!(54))),
    ("84254200", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84289090", MvaBrackets::new(dec!(85.96), dec!(80.15), dec!(70.47), dec!(54))),
    ("84314390", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84314922", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84314929", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84331100", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("84339090", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84433111", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("84433299", MvaBrackets::new(dec!(44.91), dec!(40.38), dec!(32.83), dec!(20))),
    ("84439199", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("84439923", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("84439933", MvaBrackets::new(dec!(44.91), dec!(40.38), dec!(32.83), dec!(20))),
    ("84439990", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("84529099", MvaBrackets::new(dec!(104.07), dec!(97.7), dec!(87.09), dec!(69.29))),
    ("84716052", MvaBrackets::new(dec!(44.91), dec!(40.38), dec!(32.83), dec!(20))),
    ("84716053", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("84717040", MvaBrackets::new(dec!(44.91), dec!(40.38), dec!(32.83), dec!(20))),
    ("84733041", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("84733042", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("84733049", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("84733090", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("84798999", MvaBrackets::new(dec!(104.07), dec!(97.7), dec!(87.09), dec!(69.29))),
    ("84811000", MvaBrackets::new(dec!(77.51), dec!(71.96), dec!(62.72), dec!(47))),
    ("84812019", MvaBrackets::new(dec!(77.51), dec!(71.96), dec!(62.72), dec!(47))),
    ("84812090", MvaBrackets::new(dec!(77.51), dec!(71.96), dec!(62.72), dec!(47))),
    ("84813000", MvaBrackets::new(dec!(77.51), dec!(71.96), dec!(62.72), dec!(47))),
    ("84814000", MvaBrackets::new(dec!(77.51), dec!(71.96), dec!(62.72), dec!(47))),
    ("84818011", MvaBrackets::new(dec!(77.51), dec!(71.96), dec!(62.72), dec!(47))),
    ("84818021", MvaBrackets::new(dec!(77.51), dec!(71.96), dec!(62.72), dec!(47))),
    ("84818092", MvaBrackets::new(dec!(77.51), dec!(71.96), dec!(62.72), dec!(47))),
    ("84818093", MvaBrackets::new(dec!(77.51), dec!(71.96), dec!(62.72), dec!(47.00))),
    ("84818095", MvaBrackets::new(dec!(77.51), dec!(71.96), dec!(62.72), dec!(47))),
    ("84818097", MvaBrackets::new(dec!(77.51), dec!(71.96), dec!(62.72), dec!(47))),
    ("84818099", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84819010", MvaBrackets::new(dec!(77.51), dec!(71.96), dec!(62.72), dec!(47))),
    ("84819090", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84821010", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84821090", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84822010", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84822090", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84823000", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84824000", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84825010", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84825090", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84828000", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84829119", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84829120", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84829910", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84829990", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84831020", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84831050", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84831090", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84833010", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84833029", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84833090", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84834010", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84834090", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84835010", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84835090", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84836090", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84839000", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84841000", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84842000", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("84849000", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("85013210", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("85044010", MvaBrackets::new(dec!(44.91), dec!(40.38), dec!(32.83), dec!(20.00))),
    ("85044021", MvaBrackets::new(dec!(81.13), dec!(75.47), dec!(66.04), dec!(50))),
    ("85044022", MvaBrackets::new(dec!(81.13), dec!(75.47), dec!(66.04), dec!(50))),
    ("85044029", MvaBrackets::new(dec!(81.13), dec!(75.47), dec!(66.04), dec!(50))),
    ("85044030", MvaBrackets::new(dec!(81.13), dec!(75.47), dec!(66.04), dec!(50))),
    ("85044060", MvaBrackets::new(dec!(81.13), dec!(75.47), dec!(66.04), dec!(50))),
    ("85044090", MvaBrackets::new(dec!(81.13), dec!(75.47), dec!(66.04), dec!(50))),
    ("85045000", MvaBrackets::new(dec!(81.13), dec!(75.47), dec!(66.04), dec!(50))),
    ("85112010", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("85114000", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("85115010", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("85118030", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("85119000", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("85122011", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("85122023", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("85123000", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("85129000", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("85171300", MvaBrackets::new(dec!(44.91), dec!(40.38), dec!(32.83), dec!(20))),
    ("85171800", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("85176241", MvaBrackets::new(dec!(44.91), dec!(40.38), dec!(32.83), dec!(20))),
    ("85176255", MvaBrackets::new(dec!(90.48), dec!(57.74), dec!(74.61), dec!(57.74))),
    ("85176259", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("85177110", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("85177900", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.50), dec!(45.00))),
    ("85258913", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.50), dec!(45.00))),
    ("85258929", MvaBrackets::new(dec!(90.48), dec!(84.53), dec!(74.61), dec!(57.74))),
    ("85272100", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("85272900", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("85286200", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("85287119", MvaBrackets::new(dec!(44.91), dec!(40.38), dec!(32.83), dec!(20))),
    ("85287200", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("85291019", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("85311090", MvaBrackets::new(dec!(97.36), dec!(91.19), dec!(80.91), dec!(63.44))),
    ("85354090", MvaBrackets::new(dec!(76.3), dec!(70.79), dec!(61.61), dec!(46))),
    ("85361000", MvaBrackets::new(dec!(72.68), dec!(67.28), dec!(58.29), dec!(43))),
    ("85365090", MvaBrackets::new(dec!(72.68), dec!(67.28), dec!(58.29), dec!(43))),
    ("85366990", MvaBrackets::new(dec!(72.68), dec!(67.28), dec!(58.29), dec!(43))),
    ("85369030", MvaBrackets::new(dec!(72.68), dec!(67.28), dec!(58.29), dec!(43))),
    ("85369090", MvaBrackets::new(dec!(72.68), dec!(67.28), dec!(58.29), dec!(43))),
    ("85389010", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("85392190", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("85392200", MvaBrackets::new(dec!(104.07), dec!(97.7), dec!(87.09), dec!(69.29))),
    ("85394900", MvaBrackets::new(dec!(104.07), dec!(97.7), dec!(87.09), dec!(69.29))),
    ("85395200", MvaBrackets::new(dec!(97.64), dec!(91.46), dec!(81.17), dec!(63.67))),
    ("85399090", MvaBrackets::new(dec!(104.07), dec!(97.7), dec!(87.09), dec!(69.29))),
    ("85414121", MvaBrackets::new(dec!(83.27), dec!(77.54), dec!(68), dec!(51.77))),
    ("85414300", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("85423190", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("85437039", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("85443000", MvaBrackets::new(dec!(70.26), dec!(64.94), dec!(56.08), dec!(41))),
    ("85444200", MvaBrackets::new(dec!(70.26), dec!(64.94), dec!(56.08), dec!(41))),
    ("85444900", MvaBrackets::new(dec!(70.26), dec!(64.94), dec!(56.08), dec!(41))),
    ("85479000", MvaBrackets::new(dec!(94.55), dec!(88.47), dec!(78.34), dec!(61.11))),
    ("87043190", MvaBrackets::new(dec!(56.98), dec!(52.08), dec!(43.9), dec!(30))),
    ("87082100", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("87082919", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("87082999", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("87083011", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("87083019", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("87083090", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("87084090", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("87085019", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("87085099", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("87087010", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("87087090", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("87088000", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("87089100", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("87089200", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("87089300", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("87089412", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("87089482", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("87089483", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("87089490", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("87089910", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("87089990", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("87141000", MvaBrackets::new(dec!(104.07), dec!(97.7), dec!(87.09), dec!(69.29))),
    ("87169090", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("90029090", MvaBrackets::new(dec!(104.07), dec!(97.7), dec!(87.09), dec!(69.29))),
    ("90049020", MvaBrackets::new(dec!(104.07), dec!(97.7), dec!(87.09), dec!(69.29))),
    ("90069110", MvaBrackets::new(dec!(104.07), dec!(97.7), dec!(87.09), dec!(69.29))),
    ("90069190", MvaBrackets::new(dec!(104.07), dec!(97.7), dec!(87.09), dec!(69.29))),
    ("90069900", MvaBrackets::new(dec!(104.07), dec!(97.7), dec!(87.09), dec!(69.29))),
    ("90109090", MvaBrackets::new(dec!(104.07), dec!(97.7), dec!(87.09), dec!(69.29))),
    ("90138090", MvaBrackets::new(dec!(104.07), dec!(97.7), dec!(87.09), dec!(69.29))),
    ("90248029", MvaBrackets::new(dec!(104.07), dec!(97.7), dec!(87.09), dec!(69.29))),
    ("90251990", MvaBrackets::new(dec!(90.48), dec!(57.74), dec!(74.61), dec!(57.74))),
    ("90261019", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("90262010", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("90262090", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("90268000", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("90269090", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("90292010", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("90299090", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("90303390", MvaBrackets::new(dec!(87.5), dec!(81.64), dec!(71.87), dec!(55.27))),
    ("90308990", MvaBrackets::new(dec!(84.67), dec!(78.9), dec!(69.28), dec!(52.93))),
    ("90321010", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("90321090", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("90322000", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("90328929", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("90328981", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("90328982", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("90328989", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("90328990", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("91031000", MvaBrackets::new(dec!(104.07), dec!(97.7), dec!(87.09), dec!(69.29))),
    ("91052100", MvaBrackets::new(dec!(104.07), dec!(97.7), dec!(87.09), dec!(69.29))),
    ("91059900", MvaBrackets::new(dec!(104.07), dec!(97.7), dec!(87.09), dec!(69.29))),
    ("91139090", MvaBrackets::new(dec!(104.07), dec!(97.7), dec!(87.09), dec!(69.29))),
    ("94012000", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("94017100", MvaBrackets::new(dec!(107.43), dec!(100.95), dec!(90.15), dec!(71.78))),
    ("94051093", MvaBrackets::new(dec!(72.68), dec!(67.28), dec!(58.29), dec!(43))),
    ("94051190", MvaBrackets::new(dec!(72.68), dec!(67.28), dec!(58.29), dec!(43))),
    ("94051990", MvaBrackets::new(dec!(72.68), dec!(67.28), dec!(58.29), dec!(43))),
    ("94052900", MvaBrackets::new(dec!(72.68), dec!(67.28), dec!(58.29), dec!(43))),
    ("94054100", MvaBrackets::new(dec!(59.4), dec!(54.42), dec!(46.11), dec!(32))),
    ("94054200", MvaBrackets::new(dec!(59.4), dec!(54.42), dec!(46.11), dec!(32))),
    ("94056100", MvaBrackets::new(dec!(83.55), dec!(77.81), dec!(68.25), dec!(52))),
    ("94059200", MvaBrackets::new(dec!(81.13), dec!(75.47), dec!(66.04), dec!(50))),
    ("94059900", MvaBrackets::new(dec!(81.13), dec!(75.47), dec!(66.04), dec!(50))),
    ("95045000", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("95067000", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("95069100", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("95069900", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("96032100", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("96032900", MvaBrackets::new(dec!(85.96), dec!(80.15), dec!(70.47), dec!(54))),
    ("96033000", MvaBrackets::new(dec!(85.96), dec!(80.15), dec!(70.47), dec!(54))),
    ("96034010", MvaBrackets::new(dec!(85.96), dec!(80.15), dec!(70.47), dec!(54))),
    ("96034090", MvaBrackets::new(dec!(85.96), dec!(80.15), dec!(70.47), dec!(54))),
    ("96035000", MvaBrackets::new(dec!(85.96), dec!(80.15), dec!(70.47), dec!(54))),
    ("96039000", MvaBrackets::new(dec!(85.96), dec!(80.15), dec!(70.47), dec!(54))),
    ("96050000", MvaBrackets::new(dec!(85.96), dec!(80.15), dec!(70.47), dec!(54))),
    ("96099000", MvaBrackets::new(dec!(71.03), dec!(65.68), dec!(56.77), dec!(41.68))),
    ("96151100", MvaBrackets::new(dec!(85.96), dec!(80.15), dec!(70.47), dec!(54))),
    ("96151900", MvaBrackets::new(dec!(85.96), dec!(80.15), dec!(70.47), dec!(54))),
    ("96162000", MvaBrackets::new(dec!(85.96), dec!(80.15), dec!(70.47), dec!(54))),
    ("96170010", MvaBrackets::new(dec!(75.09), dec!(69.62), dec!(60.5), dec!(45))),
    ("96190000", MvaBrackets::new(dec!(44.91), dec!(40.38), dec!(32.83), dec!(20))),
    ("96200000", MvaBrackets::new(dec!(108.53), dec!(102.01), dec!(91.15), dec!(72.69))),
];
