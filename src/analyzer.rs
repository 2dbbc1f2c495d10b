use url::Url;

use crate::classifier::{
    self, CONTENT_LENGTH_RANGE, META_DESCRIPTION_RANGE, TITLE_RANGE,
};
use crate::generator::UrlSeed;
use crate::models::{
    CoreWebVitals, Headings, ImageAltCounts, KeywordDensity, LinkCounts, OnPageData, PageSpeed,
    Report, SeoCheck, SeoStatus, TechnicalData,
};
use crate::scorer;

// Seed offsets, one per metric so draws stay independent given the URL.
const TITLE_LENGTH: u64 = 1;
const META_DESCRIPTION_LENGTH: u64 = 2;
const H1_COUNT: u64 = 3;
const IMAGE_COUNT: u64 = 4;
const MISSING_ALTS: u64 = 5;
const MOBILE_SCORE: u64 = 6;
const DESKTOP_SCORE: u64 = 7;
const KEYWORD_DENSITY: u64 = 8;
const LCP: u64 = 9;
const INP: u64 = 10;
const CLS: u64 = 11;
const SSL: u64 = 12;
const ROBOTS_TXT: u64 = 13;
const SITEMAP: u64 = 14;
const MOBILE_FRIENDLY: u64 = 15;
const CANONICAL_URL: u64 = 16;
const CONTENT_LENGTH: u64 = 17;
const INTERNAL_LINKS: u64 = 18;
const EXTERNAL_LINKS: u64 = 19;
const BROKEN_LINKS: u64 = 20;
const STRUCTURED_DATA: u64 = 21;
const H1_COUNT_FALLBACK: u64 = 22;

/// Builds the full audit report for one URL. Pure and synchronous: the same
/// URL always yields an identical report, and no string input can fail.
/// An empty URL just degenerates to seed 0.
pub fn build_report(url: &str) -> Report {
    let seed = UrlSeed::new(url);

    let on_page = synthesize_on_page(&seed, url);
    let technical = synthesize_technical(&seed, url);

    let mut report = Report {
        url: url.to_string(),
        on_page,
        technical,
        score: 0,
    };
    report.score = scorer::score_report_checks(&report);
    report
}

fn synthesize_on_page(seed: &UrlSeed, url: &str) -> OnPageData {
    let title_length = seed.in_range(TITLE_LENGTH, 30, 40);
    let desc_length = seed.in_range(META_DESCRIPTION_LENGTH, 70, 90);
    let h1_count = if seed.present(H1_COUNT, 0.1) {
        1
    } else if seed.present(H1_COUNT_FALLBACK, 0.5) {
        0
    } else {
        2
    };
    let image_count = seed.in_range(IMAGE_COUNT, 5, 15);
    let missing_alts = (seed.unit(MISSING_ALTS) * f64::from(image_count) / 4.0).floor() as u32;
    let word_count = seed.in_range(CONTENT_LENGTH, 300, 1200);

    let internal = seed.in_range(INTERNAL_LINKS, 10, 40);
    let external = seed.in_range(EXTERNAL_LINKS, 0, 15);
    let broken_draw = seed.unit(BROKEN_LINKS);
    let broken = if broken_draw > 0.8 {
        1 + ((broken_draw - 0.8) * 15.0).floor() as u32
    } else {
        0
    };
    let links = LinkCounts {
        internal,
        external,
        broken,
    };

    let keyword = primary_keyword(url);
    let density = 1.5 + seed.unit(KEYWORD_DENSITY);

    OnPageData {
        title: SeoCheck {
            value: format!("Sample Title for {url}"),
            status: classifier::range_status(title_length, TITLE_RANGE.0, TITLE_RANGE.1),
            message: format!("Title length is {title_length} characters. Recommended: 30-60."),
            details: "The title tag is the clickable headline shown in search results. \
                      Between 30 and 60 characters displays without truncation."
                .to_string(),
        },
        meta_description: SeoCheck {
            value: "This is a sample meta description to demonstrate the SEO analysis for \
                    the provided URL."
                .to_string(),
            status: classifier::range_status(
                desc_length,
                META_DESCRIPTION_RANGE.0,
                META_DESCRIPTION_RANGE.1,
            ),
            message: format!(
                "Meta description length is {desc_length} characters. Recommended: 70-160."
            ),
            details: "The meta description is the snippet search engines show beneath the \
                      title. Too short wastes space; too long gets cut off."
                .to_string(),
        },
        headings: Headings {
            h1: SeoCheck {
                value: vec!["Example H1 Heading".to_string(); h1_count],
                status: classifier::h1_count_status(h1_count),
                message: format!("Found {h1_count} <h1> tag(s). Exactly one is recommended."),
                details: "The H1 tag tells search engines what the page is about. Every page \
                          should have exactly one."
                    .to_string(),
            },
            h2: SeoCheck {
                value: vec!["Sub-heading 1".to_string(), "Sub-heading 2".to_string()],
                status: SeoStatus::Good,
                message: "Found 2 <h2> tags.".to_string(),
                details: "H2 tags structure the page into sections and help search engines \
                          understand its outline."
                    .to_string(),
            },
        },
        image_alts: SeoCheck {
            value: ImageAltCounts {
                count: image_count,
                missing: missing_alts,
            },
            status: classifier::image_alt_status(missing_alts),
            message: format!("{missing_alts} of {image_count} images are missing alt text."),
            details: "Alt text describes images to search engines and screen readers. Every \
                      content image should have one."
                .to_string(),
        },
        keyword_density: SeoCheck {
            value: KeywordDensity { keyword, density },
            status: SeoStatus::Good,
            message: "Keyword density is within the optimal range.".to_string(),
            details: "Keyword density around 1-3% signals relevance without looking like \
                      keyword stuffing."
                .to_string(),
        },
        content_length: SeoCheck {
            value: word_count,
            status: classifier::range_status(
                word_count,
                CONTENT_LENGTH_RANGE.0,
                CONTENT_LENGTH_RANGE.1,
            ),
            message: format!("Page contains {word_count} words. Recommended: 500-2500."),
            details: "Thin content rarely ranks well. Substantive pages give search engines \
                      more to index and users more to engage with."
                .to_string(),
        },
        links: SeoCheck {
            status: classifier::link_status(&links),
            message: format!(
                "Found {internal} internal and {external} external links; {broken} broken."
            ),
            details: "Internal links spread authority across the site, external links add \
                      context, and broken links hurt both users and crawlers."
                .to_string(),
            value: links,
        },
    }
}

fn synthesize_technical(seed: &UrlSeed, url: &str) -> TechnicalData {
    let mobile_score = seed.in_range(MOBILE_SCORE, 50, 50);
    let desktop_score = seed.in_range(DESKTOP_SCORE, 60, 40);

    let lcp = 1.8 + seed.unit(LCP);
    let inp = 150.0 + seed.unit(INP) * 100.0;
    let cls = 0.05 + seed.unit(CLS) * 0.1;

    let ssl = seed.present(SSL, 0.05);
    let robots_txt = seed.present(ROBOTS_TXT, 0.1);
    let sitemap = seed.present(SITEMAP, 0.15);
    let mobile_friendly = seed.present(MOBILE_FRIENDLY, 0.1);
    let canonical = seed.present(CANONICAL_URL, 0.2);
    let structured = seed.present(STRUCTURED_DATA, 0.3);

    let structured_types = if structured {
        vec!["Organization".to_string(), "WebSite".to_string()]
    } else {
        Vec::new()
    };

    TechnicalData {
        page_speed: PageSpeed {
            mobile: SeoCheck {
                value: mobile_score,
                status: classifier::score_status(f64::from(mobile_score) / 100.0),
                message: format!("Mobile PageSpeed score is {mobile_score}."),
                details: "Google uses mobile-first indexing, so mobile performance weighs \
                          directly on rankings."
                    .to_string(),
            },
            desktop: SeoCheck {
                value: desktop_score,
                status: classifier::score_status(f64::from(desktop_score) / 100.0),
                message: format!("Desktop PageSpeed score is {desktop_score}."),
                details: "Desktop performance still matters for users arriving from search \
                          on larger screens."
                    .to_string(),
            },
        },
        core_web_vitals: CoreWebVitals {
            lcp: SeoCheck {
                value: lcp,
                status: SeoStatus::Good,
                message: "Largest Contentful Paint is good.".to_string(),
                details: "LCP measures how quickly the main content becomes visible. Under \
                          2.5 seconds is considered good."
                    .to_string(),
            },
            inp: SeoCheck {
                value: inp,
                status: SeoStatus::Good,
                message: "Interaction to Next Paint is good.".to_string(),
                details: "INP measures responsiveness to user input. Under 200 milliseconds \
                          is considered good."
                    .to_string(),
            },
            cls: SeoCheck {
                value: cls,
                status: SeoStatus::Good,
                message: "Cumulative Layout Shift is good.".to_string(),
                details: "CLS measures visual stability while the page loads. Under 0.1 is \
                          considered good."
                    .to_string(),
            },
        },
        ssl: SeoCheck {
            value: ssl,
            status: classifier::presence_status(ssl),
            message: if ssl {
                "SSL certificate is valid and properly configured.".to_string()
            } else {
                "SSL certificate not found or is invalid.".to_string()
            },
            details: "HTTPS is a confirmed ranking signal and browsers flag plain-HTTP pages \
                      as not secure."
                .to_string(),
        },
        robots_txt: SeoCheck {
            value: robots_txt,
            status: classifier::presence_status(robots_txt),
            message: if robots_txt {
                "robots.txt file is present and accessible.".to_string()
            } else {
                "robots.txt file is missing.".to_string()
            },
            details: "robots.txt tells crawlers which parts of the site they may visit."
                .to_string(),
        },
        sitemap: SeoCheck {
            value: sitemap,
            status: classifier::presence_status(sitemap),
            message: if sitemap {
                "XML Sitemap is present and correctly formatted.".to_string()
            } else {
                "XML Sitemap is missing.".to_string()
            },
            details: "An XML sitemap helps search engines discover every indexable page."
                .to_string(),
        },
        mobile_friendly: SeoCheck {
            value: mobile_friendly,
            status: classifier::presence_status(mobile_friendly),
            message: if mobile_friendly {
                "Page is mobile-friendly.".to_string()
            } else {
                "Page is not mobile-friendly.".to_string()
            },
            details: "Pages that render poorly on phones are demoted in mobile search results."
                .to_string(),
        },
        structured_data: SeoCheck {
            status: classifier::soft_presence_status(structured),
            message: if structured {
                format!("Found {} structured data block(s).", structured_types.len())
            } else {
                "No structured data found.".to_string()
            },
            details: "Schema.org markup makes pages eligible for rich results in search."
                .to_string(),
            value: structured_types,
        },
        canonical_url: SeoCheck {
            value: if canonical { Some(url.to_string()) } else { None },
            status: classifier::soft_presence_status(canonical),
            message: if canonical {
                "Canonical URL is set.".to_string()
            } else {
                "No canonical URL specified.".to_string()
            },
            details: "A canonical tag tells search engines which variant of a page to index, \
                      avoiding duplicate-content dilution."
                .to_string(),
        },
    }
}

/// First host label of the URL, skipping a leading "www". Falls back to a
/// generic keyword when the input does not parse as a URL.
fn primary_keyword(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .and_then(|host| {
            host.split('.')
                .find(|label| !label.is_empty() && *label != "www")
                .map(str::to_string)
        })
        .unwrap_or_else(|| "example".to_string())
}
