// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod territory;

use std::collections::{HashMap, VecDeque};

use log::{trace, warn};

use crate::{
    i18n::RegionCode,
    interfaces::{MatcherApi, MetadataApi},
    regex_based_matcher::RegexBasedMatcher,
};

pub use territory::TerritoryRecord;
pub(crate) use territory::TERRITORIES;

/// Numbering plan table backed by [`TerritoryRecord`] rows.
pub struct Metadata {
    /// An API for leading digits matching.
    matcher_api: Box<dyn MatcherApi>,

    /// A mapping from a region code to its row.
    region_to_territory_map: HashMap<&'static str, TerritoryRecord>,

    /// A mapping from a country calling code to the regions sharing it. Note
    /// regions under NANPA share the country calling code 1 and Russia and
    /// Kazakhstan share the country calling code 7. The main region for the
    /// code is always the first element.
    calling_code_to_regions_map: HashMap<&'static str, Vec<String>>,

    /// Sorted region codes.
    supported_regions: Vec<&'static str>,
}

impl Metadata {
    /// Table compiled into the crate from `resources/territories.txt`.
    pub fn new() -> Self {
        Self::from_records(TERRITORIES)
    }

    pub fn from_records(records: &[TerritoryRecord]) -> Self {
        let mut region_to_territory_map = HashMap::with_capacity(records.len());
        // Storing data in a temporary map to make it easier to put the main
        // region of a calling code in front.
        let mut calling_code_to_region_map = HashMap::<&'static str, VecDeque<String>>::new();

        for record in records {
            if !RegionCode::is_well_formed(record.id) {
                warn!("Malformed region code {:?} in numbering plan table", record.id);
            }
            if region_to_territory_map.insert(record.id, *record).is_some() {
                warn!("Duplicate numbering plan row for region {}, the last one wins", record.id);
                continue;
            }
            let regions = calling_code_to_region_map
                .entry(record.calling_code)
                .or_default();
            if record.main_country_for_code {
                regions.push_front(record.id.to_owned());
            } else {
                regions.push_back(record.id.to_owned());
            }
        }

        let mut supported_regions: Vec<&'static str> =
            region_to_territory_map.keys().copied().collect();
        supported_regions.sort_unstable();

        trace!(
            "Loaded numbering plan: {} regions, {} calling codes",
            supported_regions.len(),
            calling_code_to_region_map.len()
        );

        Self {
            matcher_api: Box::new(RegexBasedMatcher::new()),
            region_to_territory_map,
            calling_code_to_regions_map: calling_code_to_region_map
                .into_iter()
                .map(|(code, regions)| (code, Vec::from(regions)))
                .collect(),
            supported_regions,
        }
    }

    fn territory(&self, country: &str) -> Option<&TerritoryRecord> {
        self.region_to_territory_map.get(country)
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataApi for Metadata {
    fn calling_code(&self, country: &str) -> Option<&str> {
        self.territory(country).map(|t| t.calling_code)
    }

    fn countries_for_calling_code(&self, calling_code: &str) -> &[String] {
        self.calling_code_to_regions_map
            .get(calling_code)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn max_national_number_length(&self, country: &str) -> Option<usize> {
        self.territory(country).map(|t| t.max_national_number_length)
    }

    fn leading_digits(&self, country: &str) -> Option<&str> {
        self.territory(country).and_then(|t| t.leading_digits)
    }

    fn national_prefix(&self, country: &str) -> Option<&str> {
        self.territory(country).and_then(|t| t.national_prefix)
    }

    fn national_prefix_in_national_format(&self, country: &str) -> bool {
        self.territory(country)
            .is_some_and(|t| t.national_prefix.is_some() && t.national_prefix_in_national_format)
    }

    fn matches_leading_digits(&self, country: &str, national_number: &str) -> bool {
        self.leading_digits(country)
            .is_some_and(|pattern| self.matcher_api.match_prefix(national_number, pattern))
    }

    fn is_national_number_start(&self, country: &str, digits: &str) -> bool {
        match self.territory(country).and_then(|t| t.national_number_start) {
            Some(pattern) => self.matcher_api.match_prefix(digits, pattern),
            None => true,
        }
    }

    fn supported_countries(&self) -> Vec<&str> {
        self.supported_regions.clone()
    }
}
