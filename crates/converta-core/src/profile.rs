use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Categorical buckets
// ---------------------------------------------------------------------------

string_enum! {
    /// Headcount bucket collected by the assessment form.
    pub enum CompanySize {
        Micro => "1-10",
        Small => "11-50",
        Medium => "51-200",
        Large => "200+",
    }
}

string_enum! {
    /// Annual revenue bucket (GBP).
    pub enum AnnualRevenue {
        UpTo50k => "0-50k",
        From50kTo250k => "50k-250k",
        From250kTo1m => "250k-1m",
        From1mTo5m => "1m-5m",
        Over5m => "5m+",
    }
}

string_enum! {
    /// Planned time to UK market entry.
    pub enum Timeline {
        ThreeToSixMonths => "3-6 months",
        SixToTwelveMonths => "6-12 months",
        OneToTwoYears => "1-2 years",
        OverTwoYears => "2+ years",
    }
}

string_enum! {
    /// Budget set aside for UK expansion.
    pub enum Budget {
        UpTo10k => "0-10k",
        From10kTo50k => "10k-50k",
        From50kTo100k => "50k-100k",
        Over100k => "100k+",
    }
}

impl CompanySize {
    /// Small businesses for partner affinity: the two smallest buckets, or
    /// any free-text size mentioning "small".
    pub fn is_small(&self) -> bool {
        match self {
            Self::Micro | Self::Small => true,
            Self::Medium | Self::Large => false,
            Self::Other(raw) => raw.to_lowercase().contains("small"),
        }
    }

    pub fn is_large(&self) -> bool {
        match self {
            Self::Large => true,
            Self::Micro | Self::Small | Self::Medium => false,
            Self::Other(raw) => raw.to_lowercase().contains("large"),
        }
    }
}

// ---------------------------------------------------------------------------
// Business profile
// ---------------------------------------------------------------------------

/// Free-form business attributes collected by the readiness form.
///
/// Every field is optional. Missing collections deserialise as empty and
/// missing flags as `false`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessProfile {
    pub industry: Option<String>,
    pub company_size: Option<CompanySize>,
    pub annual_revenue: Option<AnnualRevenue>,
    pub description: Option<String>,
    pub products: Option<String>,
    pub current_markets: Vec<String>,
    pub digital_presence: Vec<String>,
    pub has_online_store: bool,
    pub has_ecommerce_platform: bool,
    pub has_english_website: bool,
    pub website: Option<String>,
    pub regulatory_compliance: Vec<String>,
    pub quality_certifications: Vec<String>,
    pub timeline: Option<Timeline>,
    pub budget: Option<Budget>,
    /// Four-digit year; accepts a JSON number or numeric string.
    #[serde(deserialize_with = "deserialize_year")]
    pub year_established: Option<i32>,
}

impl BusinessProfile {
    /// Canonical industry key, e.g. "Food & Beverage" -> "food-beverage".
    pub fn industry_key(&self) -> Option<String> {
        self.industry
            .as_deref()
            .map(canonical_industry)
            .filter(|k| !k.is_empty())
    }

    /// Whether the canonical industry key is one of `keys`.
    pub fn industry_in(&self, keys: &[&str]) -> bool {
        self.industry_key()
            .map(|key| keys.contains(&key.as_str()))
            .unwrap_or(false)
    }

    pub fn has_website(&self) -> bool {
        self.website
            .as_deref()
            .map(|w| !w.trim().is_empty())
            .unwrap_or(false)
    }

    /// Description and products joined, lower-cased, for keyword matching.
    pub fn keyword_text(&self) -> String {
        let description = self.description.as_deref().unwrap_or("");
        let products = self.products.as_deref().unwrap_or("");
        format!("{} {}", description, products).to_lowercase()
    }

    /// Whole years trading as of `reference_year`. Zero when unknown or in
    /// the future.
    pub fn years_in_business(&self, reference_year: i32) -> i32 {
        self.year_established
            .and_then(|y| reference_year.checked_sub(y))
            .map_or(0, |years| years.max(0))
    }
}

/// Lower-case the industry and join its alphanumeric runs with `-`.
pub fn canonical_industry(raw: &str) -> String {
    raw.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Founding years outside this range are treated as unknown.
const PLAUSIBLE_YEARS: std::ops::RangeInclusive<i64> = 1800..=9999;

#[derive(Deserialize)]
#[serde(untagged)]
enum YearRepr {
    Integer(i64),
    Float(f64),
    Text(String),
    Unsupported(serde::de::IgnoredAny),
}

fn deserialize_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let repr = Option::<YearRepr>::deserialize(deserializer)?;
    let year = match repr {
        Some(YearRepr::Integer(n)) => Some(n),
        Some(YearRepr::Float(f)) if f.is_finite() && f.fract() == 0.0 => {
            Some(f.clamp(i64::MIN as f64, i64::MAX as f64) as i64)
        }
        Some(YearRepr::Text(s)) => s.trim().parse::<i64>().ok(),
        Some(YearRepr::Float(_)) | Some(YearRepr::Unsupported(_)) | None => None,
    };
    Ok(year
        .filter(|y| PLAUSIBLE_YEARS.contains(y))
        .and_then(|y| i32::try_from(y).ok()))
}
