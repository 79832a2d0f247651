//! Per-region configuration.
//!
//! Both deployments run the same pipeline; everything that differs between
//! them lives in a [`RegionProfile`] value built once at startup and passed
//! down by reference. Tests build their own profiles with substituted tables.

use std::time::Duration;

/// Placeholders understood by query templates.
pub const TITLE_PLACEHOLDER: &str = "{title}";
pub const LOCATION_PLACEHOLDER: &str = "{location}";
pub const TERM_PLACEHOLDER: &str = "{term}";

/// Search region and language hints sent with every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchLocale {
    pub region_code: String,
    pub relevance_language: String,
}

impl SearchLocale {
    pub fn new(region_code: &str, relevance_language: &str) -> Self {
        Self {
            region_code: region_code.to_string(),
            relevance_language: relevance_language.to_string(),
        }
    }
}

/// Last-resort query issued with a different language pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageFallback {
    pub template: String,
    pub locale: SearchLocale,
}

/// Category to search-term lookup, with a default list for unknown
/// categories. Queries use the first term of a list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTerms {
    entries: Vec<(String, Vec<String>)>,
    default_terms: Vec<String>,
}

impl CategoryTerms {
    pub fn new(entries: &[(&str, &[&str])], default_terms: &[&str]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(category, terms)| {
                    (
                        category.to_string(),
                        terms.iter().map(|term| term.to_string()).collect(),
                    )
                })
                .collect(),
            default_terms: default_terms.iter().map(|term| term.to_string()).collect(),
        }
    }

    /// Every term listed for `category`, or the default terms.
    pub fn terms_for(&self, category: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, terms)| terms.as_slice())
            .filter(|terms| !terms.is_empty())
            .unwrap_or(&self.default_terms)
    }

    /// First term for the category, or the first default term.
    pub fn primary_term(&self, category: &str) -> &str {
        self.terms_for(category)
            .first()
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// Names of the files a profile reads and writes inside the data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFileNames {
    pub catalog: String,
    pub catalog_key: String,
    pub aggregate: String,
    /// Daily files are `{daily_prefix}YYYY-MM-DD.json`.
    pub daily_prefix: String,
    pub ledger: String,
}

#[derive(Debug, Clone)]
pub struct RegionProfile {
    pub name: String,
    /// Plural noun used in console output, e.g. "camping sites".
    pub site_noun: String,
    /// What pending sites lack, as printed in "N sites still need ...".
    pub wanted_noun: String,
    pub files: DataFileNames,
    pub primary_template: String,
    pub location_template: String,
    pub language_fallback: Option<LanguageFallback>,
    pub category_terms: CategoryTerms,
    pub locale: SearchLocale,
    pub max_results_per_call: u32,
    /// Fallback queries run while fewer than this many videos were kept.
    pub fallback_minimum: usize,
    pub view_threshold: u64,
    pub excluded_channel: Option<String>,
    pub target_videos: usize,
    pub record_location_name: bool,
    pub default_limit: usize,
    pub show_category: bool,
    pub title_width: Option<usize>,
    pub site_delay: Duration,
}

const SITE_DELAY: Duration = Duration::from_secs(2);
const TARGET_VIDEOS: usize = 5;

impl RegionProfile {
    /// Victoria camping sites: English queries, single location fallback.
    pub fn victoria() -> Self {
        Self {
            name: "victoria".to_string(),
            site_noun: "camping sites".to_string(),
            wanted_noun: "videos".to_string(),
            files: DataFileNames {
                catalog: "victoria-camping-sites.json".to_string(),
                catalog_key: "campingSites".to_string(),
                aggregate: "community-videos.json".to_string(),
                daily_prefix: "community-videos-".to_string(),
                ledger: "sites-need-more-videos.json".to_string(),
            },
            primary_template: "\"{title}\" camping victoria".to_string(),
            location_template: "{title} {location} camping".to_string(),
            language_fallback: None,
            category_terms: CategoryTerms::default(),
            locale: SearchLocale::new("AU", "en"),
            max_results_per_call: 5,
            fallback_minimum: 2,
            view_threshold: 100,
            excluded_channel: None,
            target_videos: TARGET_VIDEOS,
            record_location_name: false,
            default_limit: 100,
            show_category: false,
            title_width: None,
            site_delay: SITE_DELAY,
        }
    }

    /// Korea adventure sites: Korean category terms with an English vlog
    /// fallback, and the site's own channel filtered out.
    pub fn korea() -> Self {
        Self {
            name: "korea".to_string(),
            site_noun: "adventure sites".to_string(),
            wanted_noun: "community videos".to_string(),
            files: DataFileNames {
                catalog: "korea-adventure-sites.json".to_string(),
                catalog_key: "adventureSites".to_string(),
                aggregate: "korea-community-videos.json".to_string(),
                daily_prefix: "korea-community-videos-".to_string(),
                ledger: "korea-sites-need-more-videos.json".to_string(),
            },
            primary_template: "{title} {term}".to_string(),
            location_template: "{location} {title} {term}".to_string(),
            language_fallback: Some(LanguageFallback {
                template: "{title} {location} travel vlog".to_string(),
                locale: SearchLocale::new("KR", "en"),
            }),
            category_terms: korea_category_terms(),
            locale: SearchLocale::new("KR", "ko"),
            max_results_per_call: 10,
            fallback_minimum: 3,
            view_threshold: 50,
            excluded_channel: Some("OutboundScape".to_string()),
            target_videos: TARGET_VIDEOS,
            record_location_name: true,
            default_limit: 50,
            show_category: true,
            title_width: Some(50),
            site_delay: SITE_DELAY,
        }
    }
}

const KOREA_CATEGORY_TERMS: &[(&str, &[&str])] = &[
    ("Mountain", &["등산", "하이킹", "산행"]),
    ("National Park", &["국립공원", "등산", "트레킹"]),
    ("Hiking", &["등산", "하이킹", "트레킹"]),
    ("Camping", &["캠핑", "야영", "캠핑장"]),
    ("Glamping", &["글램핑", "캠핑"]),
    ("Fishing", &["낚시", "낚시터", "fishing"]),
    ("Valley", &["계곡", "물놀이", "계곡캠핑"]),
    ("Beach", &["해변", "바다", "해수욕장"]),
    ("Temple", &["사찰", "템플스테이", "절"]),
    ("Nature", &["자연", "여행", "힐링"]),
    ("Urban", &["도심", "서울여행", "도보여행"]),
    ("Cultural", &["문화", "역사", "관광"]),
    ("Garden", &["정원", "수목원", "공원"]),
    ("Waterfall", &["폭포", "계곡"]),
    ("Trail", &["둘레길", "트레킹", "걷기여행"]),
    ("Scenic Drive", &["드라이브", "드라이브코스"]),
];

const KOREA_DEFAULT_TERMS: &[&str] = &["여행", "관광"];

fn korea_category_terms() -> CategoryTerms {
    CategoryTerms::new(KOREA_CATEGORY_TERMS, KOREA_DEFAULT_TERMS)
}
