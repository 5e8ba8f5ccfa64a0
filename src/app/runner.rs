use super::report;
use crate::core::session::{ExportOutcome, LeadSession, SessionState};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::io::Write;

/// What a single invocation does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Load leads, then export them.
    Scrape,
    Export,
    Stats,
    Reset,
    Usage,
}

/// Runs one command against the session, writing the report to `out`.
pub fn run<S: Storage, W: Write>(
    command: Command,
    session: &mut LeadSession<S>,
    out: &mut W,
) -> Result<()> {
    report::write_config_line(out, session.config())?;
    report::write_banner(out)?;

    tracing::debug!("Running {:?}", command);
    match command {
        Command::Scrape => {
            scrape(session, out)?;
            export(session, out)
        }
        Command::Export => export(session, out),
        Command::Stats => stats(session, out),
        Command::Reset => reset(session, out),
        Command::Usage => Ok(report::write_usage(out)?),
    }
}

fn scrape<S: Storage, W: Write>(session: &mut LeadSession<S>, out: &mut W) -> Result<()> {
    report::write_scrape_preview(out, session.config())?;
    let count = session.populate();
    tracing::info!("Loaded {} sample leads", count);

    report::write_found(out, count)?;
    report::write_breakdown(out, &session.summarize())?;
    Ok(())
}

fn export<S: Storage, W: Write>(session: &LeadSession<S>, out: &mut W) -> Result<()> {
    if session.state() == SessionState::Populated {
        report::write_export_start(out, &session.config().export_path())?;
    }

    match session.export()? {
        ExportOutcome::NothingToExport => report::write_nothing_to_export(out)?,
        ExportOutcome::Written { path, count } => report::write_export_done(out, &path, count)?,
    }
    Ok(())
}

fn stats<S: Storage, W: Write>(session: &mut LeadSession<S>, out: &mut W) -> Result<()> {
    if session.ensure_populated() {
        tracing::info!("Statistics requested on an empty session, loaded sample leads");
        report::write_sample_note(out)?;
    }

    let stats = session.statistics();
    report::write_statistics(out, stats.as_ref(), session.config())?;
    Ok(())
}

fn reset<S: Storage, W: Write>(session: &mut LeadSession<S>, out: &mut W) -> Result<()> {
    report::write_reset_start(out)?;
    let cleared = session.reset();
    report::write_reset_done(out, cleared)?;
    Ok(())
}
