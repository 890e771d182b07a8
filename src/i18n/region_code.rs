pub struct RegionCode {
}

impl RegionCode {
    /// Returns a region code string representing the "unknown" region.
    ///
    /// Country label maps use it as the key for the "International" option.
    pub fn get_unknown() -> &'static str {
        return Self::zz();
    }

    pub fn zz() -> &'static str {
        return "ZZ";
    }

    /// Whether `code` looks like an ISO 3166-1 alpha-2 region code.
    pub fn is_well_formed(code: &str) -> bool {
        code.len() == 2 && code.bytes().all(|b| b.is_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::RegionCode;

    #[test]
    fn well_formed_codes() {
        assert!(RegionCode::is_well_formed("RU"));
        assert!(RegionCode::is_well_formed(RegionCode::get_unknown()));
        assert!(!RegionCode::is_well_formed("ru"));
        assert!(!RegionCode::is_well_formed("RUS"));
        assert!(!RegionCode::is_well_formed(""));
    }
}
