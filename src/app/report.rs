use crate::config::LeadConfig;
use crate::core::stats::LeadStats;
use crate::domain::model::{CategoryBreakdown, LeadCategory};
use std::io::{self, Write};
use std::path::Path;

const RULE_WIDTH: usize = 60;

pub fn write_config_line<W: Write>(out: &mut W, config: &LeadConfig) -> io::Result<()> {
    writeln!(
        out,
        "Lead Finder configured for {}-mile radius around {}",
        config.geography.radius_miles, config.geography.center_zip
    )?;
    writeln!(
        out,
        "Searching for customers NEEDING handyman services, not competitors"
    )
}

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "\n{}", rule)?;
    writeln!(out, "HANDYMAN LEAD FINDER - Main Script")?;
    writeln!(out, "{}", rule)
}

pub fn write_scrape_preview<W: Write>(out: &mut W, config: &LeadConfig) -> io::Result<()> {
    let (lat, lon) = config.geography.center_coords;
    writeln!(out, "\n[SCRAPING] Finding leads...")?;
    writeln!(
        out,
        "   - Center: {} ({}, {})",
        config.geography.center_zip, lat, lon
    )?;
    writeln!(out, "   - Radius: {} miles", config.geography.radius_miles)?;
    writeln!(out, "   - Keywords: {}", config.keyword_preview(5))?;
    writeln!(out, "   - Regions: {}", config.region_names().join(", "))?;
    writeln!(
        out,
        "\n   [NOTE] Using sample leads for demo (real scraper coming soon)"
    )
}

pub fn write_found<W: Write>(out: &mut W, count: usize) -> io::Result<()> {
    writeln!(out, "\n✓ Found {} leads", count)
}

pub fn write_breakdown<W: Write>(out: &mut W, breakdown: &CategoryBreakdown) -> io::Result<()> {
    writeln!(out, "\n   Breakdown:")?;
    for category in LeadCategory::ALL {
        let label = format!("{}:", category);
        writeln!(
            out,
            "   {} {:<7}{} leads ({})",
            category.icon(),
            label,
            breakdown.count(category),
            category.action_hint()
        )?;
    }
    Ok(())
}

pub fn write_export_start<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    writeln!(out, "\n[EXPORTING] Writing to {}...", path.display())
}

pub fn write_export_done<W: Write>(out: &mut W, path: &Path, count: usize) -> io::Result<()> {
    writeln!(out, "✓ Exported {} leads to CSV", count)?;
    writeln!(out, "\n📄 Open in Excel: {}", path.display())?;
    writeln!(out, "📊 Or Google Sheets: Upload the CSV file")
}

pub fn write_nothing_to_export<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "No leads to export. Run --scrape first.")
}

pub fn write_sample_note<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "\n   [NOTE] No leads loaded, using sample leads for statistics"
    )
}

pub fn write_statistics<W: Write>(
    out: &mut W,
    stats: Option<&LeadStats>,
    config: &LeadConfig,
) -> io::Result<()> {
    let Some(stats) = stats else {
        return writeln!(out, "No leads found. Run --scrape first.");
    };

    writeln!(out, "\n[STATISTICS]")?;
    writeln!(out, "\nTotal Leads: {}", stats.total())?;
    writeln!(out, "With Email: {} of {}", stats.with_email, stats.total())?;
    write_breakdown(out, &stats.breakdown)?;

    writeln!(out, "\nAverage Distance: {:.1} miles", stats.mean_distance)?;
    writeln!(
        out,
        "Closest Lead: {} miles ({})",
        stats.closest.distance_miles, stats.closest.name
    )?;
    writeln!(
        out,
        "Farthest Lead: {} miles ({})",
        stats.farthest.distance_miles, stats.farthest.name
    )?;

    writeln!(out, "\nScoring Rules:")?;
    for category in LeadCategory::ALL {
        let rule = config.scoring.rule(category);
        writeln!(
            out,
            "   {} {} (within {} miles, threshold {})",
            category.icon(),
            rule.description,
            rule.distance_max_miles,
            rule.score_threshold
        )?;
    }
    Ok(())
}

pub fn write_reset_start<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n[RESET] Clearing all data...")
}

pub fn write_reset_done<W: Write>(out: &mut W, cleared: usize) -> io::Result<()> {
    writeln!(out, "✓ Session cleared ({} leads removed)", cleared)
}

pub fn write_usage<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nUsage: lead-finder [--scrape] [--export] [--stats] [--reset]")?;
    writeln!(out, "\nRun: lead-finder --scrape  to get started")?;
    writeln!(out, "\nFor help: lead-finder --help")
}
