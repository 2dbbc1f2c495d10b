use crate::models::{Report, SeoCheck, SeoStatus};
use anyhow::Result;
use colored::*;
use std::fs::File;
use std::io::Write;

pub struct Reporter;

impl Reporter {
    pub fn print_text_report(report: &Report, insights: Option<&str>) {
        println!("\n{}", "=".repeat(80).bright_blue());
        println!("{}", "Reportify - SEO Audit Report".bright_cyan().bold());
        println!("{}", "=".repeat(80).bright_blue());
        println!();

        println!("{}: {}", "URL".bright_white().bold(), report.url);
        println!(
            "{}: {}",
            "Generated".bright_white().bold(),
            chrono::Utc::now().to_rfc3339()
        );
        println!();

        println!(
            "{} {}",
            "Overall Score:".bright_yellow().bold(),
            Self::colored_score(report.score)
        );
        println!();

        if let Some(insights) = insights {
            println!(
                "{}",
                "Actionable Insights".bright_yellow().bold().underline()
            );
            println!("  {}", insights);
            println!();
        }

        println!("{}", "On-Page SEO".bright_yellow().bold().underline());
        Self::print_check("Title Tag", &report.on_page.title);
        Self::print_check("Meta Description", &report.on_page.meta_description);
        Self::print_check("H1 Headings", &report.on_page.headings.h1);
        Self::print_check("H2 Headings", &report.on_page.headings.h2);
        Self::print_check("Image ALT Attributes", &report.on_page.image_alts);
        Self::print_check("Keyword Density", &report.on_page.keyword_density);
        Self::print_check("Content Length", &report.on_page.content_length);
        Self::print_check("Links", &report.on_page.links);
        println!();

        println!("{}", "Technical SEO".bright_yellow().bold().underline());
        Self::print_check("PageSpeed (Mobile)", &report.technical.page_speed.mobile);
        Self::print_check("PageSpeed (Desktop)", &report.technical.page_speed.desktop);
        Self::print_check("LCP", &report.technical.core_web_vitals.lcp);
        Self::print_check("INP", &report.technical.core_web_vitals.inp);
        Self::print_check("CLS", &report.technical.core_web_vitals.cls);
        Self::print_check("SSL Certificate", &report.technical.ssl);
        Self::print_check("robots.txt", &report.technical.robots_txt);
        Self::print_check("XML Sitemap", &report.technical.sitemap);
        Self::print_check("Mobile Friendly", &report.technical.mobile_friendly);
        Self::print_check("Structured Data", &report.technical.structured_data);
        Self::print_check("Canonical URL", &report.technical.canonical_url);

        println!();
        println!("{}", "=".repeat(80).bright_blue());
    }

    fn print_check<T>(name: &str, check: &SeoCheck<T>) {
        let status_str = match check.status {
            SeoStatus::Good => "GOOD ".bright_green(),
            SeoStatus::Improvement => "WARN ".yellow(),
            SeoStatus::Error => "ERROR".bright_red(),
        };
        println!(
            "  [{}] {} {}",
            status_str,
            format!("{}:", name).bright_white().bold(),
            check.message
        );
    }

    fn colored_score(score: u8) -> ColoredString {
        let text = format!("{score}/100");
        if score > 80 {
            text.bright_green().bold()
        } else if score > 50 {
            text.yellow().bold()
        } else {
            text.bright_red().bold()
        }
    }

    pub fn save_json_report(report: &Report, filename: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        let mut file = File::create(filename)?;
        file.write_all(json.as_bytes())?;
        println!("Report saved to: {}", filename.bright_green());
        Ok(())
    }
}
