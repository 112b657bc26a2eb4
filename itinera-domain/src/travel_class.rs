/// Resolves a travel-class code to its display label. Codes cover both cabin
/// tiers (flights) and stateroom/room categories (cruises, hotels); anything
/// outside the table renders as "Unknown".
pub fn label(code: &str) -> &'static str {
    match code {
        "FST" => "First Class",
        "BSN" => "Business",
        "ECN" => "Economy",
        "OCNVI" => "Ocean View Interior",
        "OCNV" => "Ocean View",
        "INT" => "Interior",
        "DELX" => "Deluxe Suite",
        "DLX" => "Deluxe",
        "DBL" => "Double",
        "SNG" => "Single",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve_to_fixed_labels() {
        let expected = [
            ("FST", "First Class"),
            ("BSN", "Business"),
            ("ECN", "Economy"),
            ("OCNVI", "Ocean View Interior"),
            ("OCNV", "Ocean View"),
            ("INT", "Interior"),
            ("DELX", "Deluxe Suite"),
            ("DLX", "Deluxe"),
            ("DBL", "Double"),
            ("SNG", "Single"),
        ];
        for (code, name) in expected {
            assert_eq!(label(code), name, "code {}", code);
        }
    }

    #[test]
    fn unknown_codes_resolve_to_unknown() {
        assert_eq!(label("XYZ"), "Unknown");
        assert_eq!(label(""), "Unknown");
        // Lookup is case-sensitive, matching the stored codes.
        assert_eq!(label("ecn"), "Unknown");
    }
}
