use clap::Parser;
use lead_finder::utils::logger;
use lead_finder::{CliArgs, LeadConfig, LeadError, LeadSession, LocalStorage};

fn fail(e: &LeadError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn main() {
    let args = CliArgs::parse();

    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }
    tracing::debug!("CLI args: {:?}", args);

    let config = match LeadConfig::resolve(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    let storage = LocalStorage::new(&config.storage.export_dir);
    tracing::debug!("Exports go to {}", storage.base_path().display());
    let mut session = LeadSession::new(config, storage);

    let command = args.command();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = lead_finder::run(command, &mut session, &mut out) {
        fail(&e);
    }
}
