use crate::models::{LinkCounts, SeoStatus};

/// Recommended character band for title tags.
pub const TITLE_RANGE: (u32, u32) = (30, 60);
/// Recommended character band for meta descriptions.
pub const META_DESCRIPTION_RANGE: (u32, u32) = (70, 160);
/// Recommended word-count band for page content.
pub const CONTENT_LENGTH_RANGE: (u32, u32) = (500, 2500);

/// Range rule: needs improvement outside the recommended band, good inside.
/// Both bounds are inclusive.
pub fn range_status(value: u32, min: u32, max: u32) -> SeoStatus {
    if value < min || value > max {
        SeoStatus::Improvement
    } else {
        SeoStatus::Good
    }
}

/// Score-percentage rule for normalized [0, 1] scores. Boundaries are
/// exclusive: exactly 0.8 is still "needs improvement".
pub fn score_status(normalized: f64) -> SeoStatus {
    if normalized > 0.8 {
        SeoStatus::Good
    } else if normalized > 0.5 {
        SeoStatus::Improvement
    } else {
        SeoStatus::Error
    }
}

/// Exact-count rule for H1 tags: anything other than exactly one is an error.
pub fn h1_count_status(count: usize) -> SeoStatus {
    if count == 1 {
        SeoStatus::Good
    } else {
        SeoStatus::Error
    }
}

/// Hard presence rule (SSL, robots.txt, sitemap, mobile-friendly): absence
/// is an error.
pub fn presence_status(present: bool) -> SeoStatus {
    if present {
        SeoStatus::Good
    } else {
        SeoStatus::Error
    }
}

/// Soft presence rule (structured data, canonical URL): absence only needs
/// improvement, never an error.
pub fn soft_presence_status(present: bool) -> SeoStatus {
    if present {
        SeoStatus::Good
    } else {
        SeoStatus::Improvement
    }
}

/// Image alt rule: any image missing alt text needs improvement.
pub fn image_alt_status(missing: u32) -> SeoStatus {
    if missing > 0 {
        SeoStatus::Improvement
    } else {
        SeoStatus::Good
    }
}

/// Link rule: broken links escalate to error regardless of the other counts;
/// otherwise a page with no internal or no external links needs improvement.
pub fn link_status(links: &LinkCounts) -> SeoStatus {
    if links.broken > 0 {
        SeoStatus::Error
    } else if links.internal == 0 || links.external == 0 {
        SeoStatus::Improvement
    } else {
        SeoStatus::Good
    }
}
