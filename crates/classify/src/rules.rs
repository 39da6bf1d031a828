//! Ordered keyword rules for event categorization.
//!
//! Keywords mix English, Sinhala, and Tamil surface forms so headlines from
//! local outlets match without translation. Rule order is the priority
//! order: the first rule that matches a headline wins.

use types::Category;

/// One classification rule: a category and the keywords that signal it.
#[derive(Debug)]
pub struct Rule {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

/// Priority-ordered rule table. Headlines that match nothing here fall back
/// to [`Category::General`].
pub const RULES: &[Rule] = &[
    // Weather and natural hazards
    Rule {
        category: Category::Flood,
        keywords: &[
            "flood", "flooding", "flash flood", "flood water", "flooded",
            "inundation", "inundated", "water level rising", "river overflow",
            "river burst", "bank overflow", "reservoir spill", "dam overflow",
            "low lying areas under water", "roads under water",
            "ගංවතුර", "ජල මට්ටම", "ජල මට්ටම ඉහළ", "වැලි පල්ලටුව",
            "වේලි ඇරිය", "නදී ජලය පිරී", "පස බිම ගිලෙනවා",
            "வெள்ளம்", "வெள்ளப்பெருக்கு", "நீர்மட்டம் உயர்வு",
            "ஆறு கரை மீறி", "நீர் மூழ்கியது",
        ],
    },
    Rule {
        category: Category::HeavyRain,
        keywords: &[
            "heavy rain", "torrential rain", "rainfall", "showers",
            "thundershowers", "rain storm", "monsoon rain",
            "adverse weather", "bad weather", "rain warning",
            "downpour", "cloudburst",
            "වැසි", "අධික වැසි", "මහ වැසි", "වැසි තත්ත්වය",
            "කුණාටු සහිත වැසි", "අවදානම් කාලගුණ",
            "மழை", "கனமழை", "முழு மழை", "மழை எச்சரிக்கை",
            "இடியுடன் கூடிய மழை",
        ],
    },
    Rule {
        category: Category::Landslide,
        keywords: &[
            "landslide", "land slip", "earth slip", "slope failure",
            "mudslide", "hill collapse", "unstable slope", "nbro warning",
            "පස් කන්ද", "බිම අත්පත් වීම", "බිම ගිලී", "භූස්කරය",
            "நிலச்சரிவு", "பூமிச்சரிவு", "மண் சரிவு",
        ],
    },
    Rule {
        category: Category::Drought,
        keywords: &[
            "drought", "dry spell", "water shortage", "no rainfall",
            "irrigation failure", "crop drying", "heatwave", "extreme heat",
            "දහඩිය", "දිය නොමැති", "ජල හිඟය", "උණ පීඩා",
            "வறட்சி", "தண்ணீர் தட்டுப்பாடு", "வெப்ப அலை",
        ],
    },
    Rule {
        category: Category::StrongWind,
        keywords: &[
            "strong wind", "gale force wind", "high winds", "monsoon wind",
            "gusty wind", "wind advisory", "wind warning",
            "සුළං", "තද සුළං", "සුළං දරුණු", "සුළං හමා",
            "கனத்த காற்று", "வேகமான காற்று", "புயல் காற்று",
        ],
    },
    Rule {
        category: Category::Cyclone,
        keywords: &[
            "cyclone", "tropical storm", "low pressure area",
            "storm surge", "cyclonic system", "deep depression",
            "කුණාටුව", "අවපීඩන බලකේන්ද්‍රය",
            "புயல்", "குறைந்த காற்றழுத்த பகுதி",
        ],
    },
    Rule {
        category: Category::Lightning,
        keywords: &[
            "lightning", "lightning strikes", "thunderstorm",
            "electrical storm", "lightning advisory",
            "මෙරුණු", "අකුණ", "අකුණු පහර",
            "மின்னல்", "இடி மின்னல்",
        ],
    },
    // Transport and logistics
    Rule {
        category: Category::TrainIssue,
        keywords: &[
            "train delay", "train cancelled", "train cancellation",
            "railway strike", "rail strike", "train strike",
            "train derailment", "train accident", "locomotive failure",
            "slr strike", "railway line blocked",
        ],
    },
    Rule {
        category: Category::BusIssue,
        keywords: &[
            "bus strike", "sltb strike", "private bus strike",
            "bus service suspended", "bus service disrupted",
            "no bus service", "bus protest",
        ],
    },
    Rule {
        category: Category::TransportDisruption,
        keywords: &[
            "traffic jam", "heavy traffic", "road closed", "road closure",
            "road blocked", "highway closed", "bridge collapsed",
            "road diversion", "vehicle breakdown", "multi vehicle collision",
            "road accident", "fatal accident", "road flooded", "traffic congestion",
        ],
    },
    Rule {
        category: Category::PortDisruption,
        keywords: &[
            "port congestion", "shipping delay", "container backlog",
            "colombo port", "sagt delay", "port strike",
            "harbour closed", "terminal shutdown", "vessel delay",
        ],
    },
    Rule {
        category: Category::AirportIssue,
        keywords: &[
            "flight delay", "flight cancelled", "schedule disruption",
            "airport congestion", "runway closed", "air traffic control issue",
        ],
    },
    // Economy and policy
    Rule {
        category: Category::FuelPriceIncrease,
        keywords: &[
            "fuel price", "petrol price", "diesel price", "fuel hike",
            "fuel revision", "cpc price", "pump price increase",
            "lp gas price", "gas price increase", "kerosene price",
            "fuel surcharge",
            "ඉන්ධන මිල", "පෙට්‍රල් මිල", "ඩීසල් මිල", "ඉන්ධන ඉහළ දැමීම",
            "අමතර ඉන්ධන ගාස්තු",
            "எரிபொருள் விலை", "பெட்ரோல் விலை", "டீசல் விலை",
            "விலை உயர்வு", "எரிவாயு விலை",
        ],
    },
    Rule {
        category: Category::PolicyChange,
        keywords: &[
            "vat increase", "tax revision", "tax hike", "new tax",
            "government policy", "cabinet decision", "regulation change",
            "import ban", "import restriction", "tariff change",
            "license requirement", "price control", "subsidy removed",
            "ණය ප්‍රතිපත්තිය", "බදු සංශෝධනය", "පාලනාත්මක මිල",
            "ආනයන තහනම් කිරීම",
            "வரி உயர்வு", "ஆட்சியின் தீர்மானம்",
        ],
    },
    Rule {
        category: Category::EconomicUpdate,
        keywords: &[
            "cbsl", "central bank", "policy rate", "interest rate",
            "inflation", "gdp growth", "economic growth", "economic slowdown",
            "recession", "rupee depreciation", "exchange rate",
            "foreign reserves", "unemployment", "debt restructuring",
            "මූල්‍ය ප්‍රතිපත්තිය", "අර්ථිකය", "මුදල් අමිලය",
            "பொருளாதார", "ரூபாய் மதிப்பு குறைவு",
        ],
    },
    Rule {
        category: Category::CurrencyFluctuation,
        keywords: &[
            "rupee", "exchange rate", "forex", "currency depreciation",
            "විනිමය අනුපාතය", "රුපියල අඩුවීම",
            "ரூபாய் வீழ்ச்சி",
        ],
    },
    // Labour and civil
    Rule {
        category: Category::Strike,
        keywords: &[
            "strike", "hartal", "union action", "work stoppage",
            "work to rule", "industrial action", "walkout", "labour protest",
            "trade union protest",
        ],
    },
    Rule {
        category: Category::CrimeEvent,
        keywords: &[
            "shooting", "murder", "robbery", "explosion", "bomb blast",
            "කොල්ලකෑම", "ඝාතනය", "ප්‍රහාරය",
            "குற்றம்", "தாக்குதல்",
        ],
    },
    Rule {
        category: Category::Protest,
        keywords: &[
            "protest", "demonstration", "march", "riot",
            "ප්රదర్శනය", "එරෙහි පුරප්පාට", "සඹර",
            "ஆர்ப்பாட்டம்",
        ],
    },
    Rule {
        category: Category::PoliticalEvent,
        keywords: &[
            "president", "prime minister", "parliament", "cabinet meeting",
            "political rally", "election", "polling", "dissolution of parliament",
            "no confidence motion", "political crisis",
            "නායක", "විපක්ෂය", "මැතිවරණය",
            "தேர்தல்", "அரசு",
        ],
    },
    // Health
    Rule {
        category: Category::HealthAlert,
        keywords: &[
            "dengue outbreak", "dengue cases", "dengue rise",
            "viral fever", "virus outbreak", "health warning",
            "epidemic", "disease spread", "hospital overload",
            "covid", "coronavirus", "influenza",
            "ඩෙංගු", "වයිරස්", "සෞඛ්‍ය අනතුරු අඟවිකර",
            "டெங்குச்சூடு", "வைரஸ்", "சுகாதார எச்சரிக்கை",
        ],
    },
    // Tourism
    Rule {
        category: Category::Tourism,
        keywords: &[
            "tourist arrivals", "tourist arrival", "hotel bookings",
            "holiday season", "tourism boom", "travel advisory",
            "visa free", "visa on arrival", "charter flights",
            "tourism promotion", "occupancy rate",
            "ප්රවේශන වීසා", "සෞඛ්‍ය උපදෙස්",
            "சுற்றுலா",
        ],
    },
    // Industry and utilities
    Rule {
        category: Category::FactoryIncident,
        keywords: &[
            "factory fire", "warehouse fire", "industrial accident",
            "production halt", "production stopped", "plant shutdown",
            "factory closure", "machine breakdown", "equipment failure",
            "කර්මාන්ත ශාලාව", "වැසීම", "ගින්න",
            "தொழிற்சாலை தீ", "தொழிற் விபத்து",
        ],
    },
    Rule {
        category: Category::PowerCut,
        keywords: &[
            "power cut", "electricity outage", "blackout",
            "load shedding", "power failure", "grid failure",
            "විදුලිය කප්පාදුව", "බල මඟ හරවී",
            "மின்தடை", "மின்தடைப்பு",
        ],
    },
    Rule {
        category: Category::WaterSupplyIssue,
        keywords: &[
            "water cut", "no water supply", "pipe burst",
            "water disruption", "water supply interruption",
            "ජල කප්පාදුව", "ජල හිඟය", "ජල බිඳවැටීම",
            "தண்ணீர் தடை", "தண்ணீர் தட்டுப்பாடு",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_have_unique_categories() {
        let mut seen = std::collections::HashSet::new();
        for rule in RULES {
            assert!(seen.insert(rule.category), "duplicate rule for {:?}", rule.category);
        }
    }

    #[test]
    fn test_rules_cover_every_non_default_category() {
        // Every category except the General fallback has a rule.
        assert_eq!(RULES.len(), Category::ALL.len() - 1);
        assert!(RULES.iter().all(|r| r.category != Category::General));
    }

    #[test]
    fn test_rule_order_starts_with_weather() {
        assert_eq!(RULES[0].category, Category::Flood);
        assert_eq!(RULES[1].category, Category::HeavyRain);
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for rule in RULES {
            for kw in rule.keywords {
                assert_eq!(*kw, kw.to_lowercase(), "{:?} keyword not lowercase", rule.category);
            }
        }
    }
}
