use clap::{Parser, Subcommand};
use gem_site::router::Route;
use gem_site::store::{DocumentStore, FirestoreStore, LocalStore};
use gem_site::{config, generate, loader, output};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

fn version_string() -> &'static str {
    let hash = env!("GIT_HASH");
    if hash.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        // Leaked once at startup
        Box::leak(format!("{}@{hash}", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "gem-site")]
#[command(about = "Static site generator for the La Católica GEM school website")]
#[command(long_about = "\
Static site generator for the La Católica GEM school website

Pages are fixed: Inicio, Inicial, Primaria, Secundaria and Ciclo Vacacional.
Images come from one shared document (imagenes/image) that maps slot keys
to Google Drive file ids. Each page reads it once; a missing document or a
failed read renders the page without images.

Stores:

  Firestore (default)    [store] section of config.toml
  Local directory        --local-store DIR, reads DIR/imagenes/image.json

Logging goes to stderr; set RUST_LOG=debug for per-field detail.

Run 'gem-site gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Directory holding config.toml
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Read the image document from a local directory instead of Firestore
    #[arg(long, global = true, value_name = "DIR")]
    local_store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every page into the output directory
    Build,
    /// Render one path to stdout
    Render {
        /// Site path, e.g. /primaria
        path: String,
        /// Seconds of slideshow time to let pass after the images load
        #[arg(long, default_value_t = 0)]
        elapsed_secs: u64,
    },
    /// List the site's routes
    Routes,
    /// Fetch the image document and show each resolved URL
    Images,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let site_config = config::load_config(&cli.source)?;
            init_thread_pool(&site_config.processing);
            let store = open_store(&cli.local_store, &site_config)?;
            println!(
                "==> Building {} from {}",
                cli.output.display(),
                store.describe()
            );
            let result = generate::generate(&site_config, store, &cli.output)?;
            output::print_build_output(&result);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Render { path, elapsed_secs } => {
            let site_config = config::load_config(&cli.source)?;
            // Unmatched paths render nothing.
            let Some(route) = Route::resolve(&path) else {
                log::warn!("no page at {path}");
                return Ok(());
            };
            let store = open_store(&cli.local_store, &site_config)?;
            let html = generate::render_route(
                route,
                store,
                &site_config,
                Duration::from_secs(elapsed_secs),
            );
            println!("{}", html.into_string());
        }
        Command::Routes => {
            output::print_routes();
        }
        Command::Images => {
            let site_config = config::load_config(&cli.source)?;
            let store = open_store(&cli.local_store, &site_config)?;
            let images = loader::load_image_config(store.as_ref());
            output::print_images(&images);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Pick the document store: a local directory when given, Firestore otherwise.
fn open_store(
    local: &Option<PathBuf>,
    site_config: &config::SiteConfig,
) -> Result<Arc<dyn DocumentStore>, Box<dyn std::error::Error>> {
    let store: Arc<dyn DocumentStore> = match local {
        Some(dir) => Arc::new(LocalStore::new(dir.clone())),
        None => Arc::new(FirestoreStore::new(&site_config.store)?),
    };
    Ok(store)
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores: user can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
