//! Colorado county FIPS codes.
//!
//! Only Colorado's 64 counties are tabulated. Any other three-digit code,
//! including valid codes from other states, is unrecognized.

/// Three-digit county FIPS codes for every Colorado county, in code order.
pub const COLORADO_COUNTY_FIPS: &[&str] = &[
    "001", "003", "005", "007", "009", "011", "013", "014", "015", "017", "019", "021", "023",
    "025", "027", "029", "031", "033", "035", "037", "039", "041", "043", "045", "047", "049",
    "051", "053", "055", "057", "059", "061", "063", "065", "067", "069", "071", "073", "075",
    "077", "079", "081", "083", "085", "087", "089", "091", "093", "095", "097", "099", "101",
    "103", "105", "107", "109", "111", "113", "115", "117", "119", "121", "123", "125",
];

/// Maps a three-digit county FIPS code to a Colorado county name.
#[must_use]
pub fn county_name(fips: &str) -> Option<&'static str> {
    let name = match fips {
        "001" => "Adams",
        "003" => "Alamosa",
        "005" => "Arapahoe",
        "007" => "Archuleta",
        "009" => "Baca",
        "011" => "Bent",
        "013" => "Boulder",
        "014" => "Broomfield",
        "015" => "Chaffee",
        "017" => "Cheyenne",
        "019" => "Clear Creek",
        "021" => "Conejos",
        "023" => "Costilla",
        "025" => "Crowley",
        "027" => "Custer",
        "029" => "Delta",
        "031" => "Denver",
        "033" => "Dolores",
        "035" => "Douglas",
        "037" => "Eagle",
        "039" => "Elbert",
        "041" => "El Paso",
        "043" => "Fremont",
        "045" => "Garfield",
        "047" => "Gilpin",
        "049" => "Grand",
        "051" => "Gunnison",
        "053" => "Hinsdale",
        "055" => "Huerfano",
        "057" => "Jackson",
        "059" => "Jefferson",
        "061" => "Kiowa",
        "063" => "Kit Carson",
        "065" => "Lake",
        "067" => "La Plata",
        "069" => "Larimer",
        "071" => "Las Animas",
        "073" => "Lincoln",
        "075" => "Logan",
        "077" => "Mesa",
        "079" => "Mineral",
        "081" => "Moffat",
        "083" => "Montezuma",
        "085" => "Montrose",
        "087" => "Morgan",
        "089" => "Otero",
        "091" => "Ouray",
        "093" => "Park",
        "095" => "Phillips",
        "097" => "Pitkin",
        "099" => "Prowers",
        "101" => "Pueblo",
        "103" => "Rio Blanco",
        "105" => "Rio Grande",
        "107" => "Routt",
        "109" => "Saguache",
        "111" => "San Juan",
        "113" => "San Miguel",
        "115" => "Sedgwick",
        "117" => "Summit",
        "119" => "Teller",
        "121" => "Washington",
        "123" => "Weld",
        "125" => "Yuma",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn county_count() {
        assert_eq!(COLORADO_COUNTY_FIPS.len(), 64);
    }

    #[test]
    fn name_coverage() {
        for fips in COLORADO_COUNTY_FIPS {
            assert!(county_name(fips).is_some(), "no name for county FIPS: {fips}");
        }
    }

    #[test]
    fn names_are_distinct() {
        let mut names: Vec<&str> = COLORADO_COUNTY_FIPS
            .iter()
            .filter_map(|f| county_name(f))
            .collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 64);
    }

    #[test]
    fn broomfield_is_the_only_even_code() {
        let even: Vec<&str> = COLORADO_COUNTY_FIPS
            .iter()
            .copied()
            .filter(|f| f.ends_with(['0', '2', '4', '6', '8']))
            .collect();
        assert_eq!(even, vec!["014"]);
        assert_eq!(county_name("014"), Some("Broomfield"));
    }

    #[test]
    fn unknown_codes() {
        assert_eq!(county_name("999"), None);
        assert_eq!(county_name("127"), None);
        assert_eq!(county_name("1"), None);
    }
}
