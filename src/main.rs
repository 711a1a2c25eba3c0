use clap::Parser;
use facility_browser::core::registry;
use facility_browser::utils::{logger, validation::Validate};
use facility_browser::{
    spawn_fetch, ApiFacilitySource, BrowserConfig, CliArgs, FacilityBrowser, FacilitySource,
    PageView,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    if args.list_categories {
        print_categories();
        return Ok(());
    }

    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting facility-browser");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let config = match BrowserConfig::resolve(&args) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let source: Arc<dyn FacilitySource> = Arc::new(ApiFacilitySource::new(&config));
    let handle = spawn_fetch(source);

    // A cancelled fetch would yield None; here nothing cancels it, but the
    // view still starts empty rather than erroring when the API is down.
    let facilities = handle.join().await.unwrap_or_default();
    tracing::info!("Loaded {} facilities", facilities.len());

    let mut browser = FacilityBrowser::new(facilities, config.page_size);
    for label in &args.fuel_type {
        browser.toggle_fueltech_category(label, true);
    }
    for label in &args.status {
        browser.toggle_status_category(label, true);
    }
    for _ in 0..args.page {
        browser.next_page();
    }

    print_page(&browser.current_page());

    Ok(())
}

fn print_categories() {
    println!("Fuel-type categories (--fuel-type):");
    for label in registry::FUELTECH_CATEGORIES {
        println!("  {}", label);
    }
    println!("Status categories (--status):");
    for label in registry::STATUS_CATEGORIES {
        println!("  {}", label);
    }
}

fn print_page(view: &PageView<'_>) {
    println!(
        "{:<12} {:<32} {:<8} {:<8} {:>6} {}",
        "CODE", "NAME", "NETWORK", "REGION", "UNITS", "FUELTECHS"
    );
    for facility in &view.facilities {
        let fueltechs: Vec<&str> = facility
            .units
            .iter()
            .map(|u| u.fueltech_id.as_str())
            .collect();
        println!(
            "{:<12} {:<32} {:<8} {:<8} {:>6} {}",
            facility.code,
            facility.name,
            facility.network_id,
            facility.network_region,
            facility.units.len(),
            fueltechs.join(",")
        );
    }
    println!(
        "page {} | {} matching facilities | prev: {} | next: {}",
        view.page,
        view.filtered_len,
        if view.has_previous { "yes" } else { "no" },
        if view.has_next { "yes" } else { "no" }
    );
}
