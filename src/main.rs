use birdnote::ui::cli::{search_summary, Cli, Commands};
use birdnote::{
    create_note, meets_query_threshold, Config, FsVault, SearchTui, Settings, TaxonomyClient,
    MIN_QUERY_LEN,
};
use clap::Parser;
use std::path::PathBuf;
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

fn main() -> birdnote::Result<()> {
    let cli = Cli::parse();
    let config = Config::new(cli.base_dir.as_deref().map(PathBuf::from))?;

    match &cli.command {
        Some(Commands::Init) => {
            init_tracing();
            handle_init(&config)
        }
        Some(Commands::Search { query, limit }) => {
            init_tracing();
            handle_search(&config, query, *limit)
        }
        Some(Commands::Create { query, pick }) => {
            init_tracing();
            handle_create(&config, query, *pick)
        }
        Some(Commands::Config { folder, api_key }) => {
            init_tracing();
            handle_config(&config, folder.as_deref(), api_key.as_deref())
        }
        // The TUI owns the terminal; log output would corrupt the alternate screen.
        None => handle_tui(&config),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("birdnote=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_init(config: &Config) -> birdnote::Result<()> {
    println!("Initializing birdnote...");

    if config.is_initialized() && config.settings_path.exists() {
        println!("birdnote is already initialized at: {:?}", config.base_dir);
        return Ok(());
    }

    config.init()?;
    let settings = Settings::load(config)?;
    settings.save(config)?;

    println!("✓ Created configuration directory: {:?}", config.base_dir);
    println!("✓ Wrote default settings: {:?}", config.settings_path);
    println!("\nInitialization complete!");
    println!("Next steps:");
    println!("  1. Create the notes folder: mkdir \"{}\"", settings.folder);
    println!("  2. Run birdnote with no arguments to open the search interface.");

    Ok(())
}

fn handle_search(config: &Config, query: &str, limit: usize) -> birdnote::Result<()> {
    if !meets_query_threshold(query) {
        println!("Query must be at least {} characters.", MIN_QUERY_LEN);
        return Ok(());
    }

    let settings = Settings::load(config)?;
    let client = TaxonomyClient::new(&settings.ebird_api_key);
    let runtime = Runtime::new()?;

    let results = runtime.block_on(client.search(query))?;
    if results.is_empty() {
        println!("No species found for \"{}\".", query);
        return Ok(());
    }

    println!("{}", search_summary(results.len(), limit));
    for (i, result) in results.iter().take(limit).enumerate() {
        println!("{:3}. {} [{}]", i + 1, result.name, result.code);
    }

    Ok(())
}

fn handle_create(config: &Config, query: &str, pick: usize) -> birdnote::Result<()> {
    if !meets_query_threshold(query) {
        println!("Query must be at least {} characters.", MIN_QUERY_LEN);
        return Ok(());
    }

    let settings = Settings::load(config)?;
    let client = TaxonomyClient::new(&settings.ebird_api_key);
    let runtime = Runtime::new()?;

    let results = runtime.block_on(client.search(query))?;
    let result = match pick.checked_sub(1).and_then(|i| results.get(i)) {
        Some(r) => r,
        None => {
            println!(
                "No result #{} for \"{}\" ({} found).",
                pick,
                query,
                results.len()
            );
            return Ok(());
        }
    };

    let vault = FsVault::new(std::env::current_dir()?);
    let path = create_note(result, &settings, &vault)?;
    println!("✓ Created {}", path.display());

    Ok(())
}

fn handle_config(
    config: &Config,
    folder: Option<&str>,
    api_key: Option<&str>,
) -> birdnote::Result<()> {
    let mut settings = Settings::load(config)?;

    let changed = folder.is_some() || api_key.is_some();
    if let Some(folder) = folder {
        settings.folder = folder.to_string();
    }
    if let Some(api_key) = api_key {
        settings.ebird_api_key = api_key.to_string();
    }
    if changed {
        settings.save(config)?;
        println!("✓ Settings saved to {:?}", config.settings_path);
    }

    println!("Folder:  {}", settings.folder);
    println!("API key: {}", settings.ebird_api_key);

    Ok(())
}

fn handle_tui(config: &Config) -> birdnote::Result<()> {
    let settings = Settings::load(config)?;
    let client = TaxonomyClient::new(&settings.ebird_api_key);
    let vault = FsVault::new(std::env::current_dir()?);
    let runtime = Runtime::new()?;

    SearchTui::new(settings, client, vault, runtime).run()
}
