use serde::{Deserialize, Serialize};

/// Categorical verdict for a single SEO check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeoStatus {
    Good,
    Improvement,
    Error,
}

impl SeoStatus {
    /// Returns the more severe of two statuses (Error > Improvement > Good).
    pub fn worst(self, other: SeoStatus) -> SeoStatus {
        match (self, other) {
            (SeoStatus::Error, _) | (_, SeoStatus::Error) => SeoStatus::Error,
            (SeoStatus::Improvement, _) | (_, SeoStatus::Improvement) => SeoStatus::Improvement,
            _ => SeoStatus::Good,
        }
    }
}

/// One evaluated SEO signal: raw value, derived status, and explanatory text.
/// The status is always a pure function of the value under fixed thresholds;
/// callers never set it independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoCheck<T> {
    pub value: T,
    pub status: SeoStatus,
    pub message: String,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAltCounts {
    pub count: u32,
    pub missing: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordDensity {
    pub keyword: String,
    pub density: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkCounts {
    pub internal: u32,
    pub external: u32,
    pub broken: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Headings {
    pub h1: SeoCheck<Vec<String>>,
    pub h2: SeoCheck<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnPageData {
    pub title: SeoCheck<String>,
    #[serde(rename = "metaDescription")]
    pub meta_description: SeoCheck<String>,
    pub headings: Headings,
    #[serde(rename = "imageAlts")]
    pub image_alts: SeoCheck<ImageAltCounts>,
    #[serde(rename = "keywordDensity")]
    pub keyword_density: SeoCheck<KeywordDensity>,
    #[serde(rename = "contentLength")]
    pub content_length: SeoCheck<u32>,
    pub links: SeoCheck<LinkCounts>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSpeed {
    pub mobile: SeoCheck<u32>,
    pub desktop: SeoCheck<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreWebVitals {
    pub lcp: SeoCheck<f64>,
    pub inp: SeoCheck<f64>,
    pub cls: SeoCheck<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalData {
    #[serde(rename = "pageSpeed")]
    pub page_speed: PageSpeed,
    #[serde(rename = "coreWebVitals")]
    pub core_web_vitals: CoreWebVitals,
    pub ssl: SeoCheck<bool>,
    #[serde(rename = "robotsTxt")]
    pub robots_txt: SeoCheck<bool>,
    pub sitemap: SeoCheck<bool>,
    #[serde(rename = "mobileFriendly")]
    pub mobile_friendly: SeoCheck<bool>,
    #[serde(rename = "structuredData")]
    pub structured_data: SeoCheck<Vec<String>>,
    #[serde(rename = "canonicalUrl")]
    pub canonical_url: SeoCheck<Option<String>>,
}

impl OnPageData {
    /// Statuses of the leaf checks in this group. Nested groups (headings)
    /// contribute their children, never themselves.
    pub fn leaf_statuses(&self) -> Vec<SeoStatus> {
        vec![
            self.title.status,
            self.meta_description.status,
            self.headings.h1.status,
            self.headings.h2.status,
            self.image_alts.status,
            self.keyword_density.status,
            self.content_length.status,
            self.links.status,
        ]
    }
}

impl TechnicalData {
    pub fn leaf_statuses(&self) -> Vec<SeoStatus> {
        vec![
            self.page_speed.mobile.status,
            self.page_speed.desktop.status,
            self.core_web_vitals.lcp.status,
            self.core_web_vitals.inp.status,
            self.core_web_vitals.cls.status,
            self.ssl.status,
            self.robots_txt.status,
            self.sitemap.status,
            self.mobile_friendly.status,
            self.structured_data.status,
            self.canonical_url.status,
        ]
    }
}

/// The full assembled audit for one URL: grouped checks plus aggregate score.
/// Built once per analysis and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub url: String,
    #[serde(rename = "onPage")]
    pub on_page: OnPageData,
    pub technical: TechnicalData,
    pub score: u8,
}
