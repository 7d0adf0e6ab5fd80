use clap::{Parser, Subcommand};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use emoji_art::api;
use emoji_art::models::AppConfig;
use emoji_art::server;
use emoji_art::services::ConvertService;
use emoji_palette::{ColorName, Palette, Srgb};

#[derive(Parser)]
#[command(name = "emoji-art")]
#[command(about = "Convert images into colored-square emoji art")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Convert an image file to emoji text
    Convert {
        /// Input image, or "-" for stdin
        input: PathBuf,

        /// Write the glyph text here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print grid size and per-color cell counts to stderr
        #[arg(short, long)]
        stats: bool,

        /// Longest side of the glyph grid (default from config, 32)
        #[arg(short, long)]
        max_side: Option<u32>,
    },
    /// Classify a single hex color (e.g. "#87CEFA")
    Classify {
        color: String,
    },
    /// List the palette colors and glyphs
    Palette,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Emoji Art API",
        description = "Convert images into colored-square emoji art",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_convert,
        api::handle_palette,
        api::handle_classify,
    ),
    components(schemas(
        api::ConvertResponse,
        api::HistogramEntry,
        api::OutputFormat,
        api::PaletteColor,
        api::ClassifyResponse,
    )),
    tags(
        (name = "Convert", description = "Image to emoji conversion"),
        (name = "Palette", description = "Palette inspection and single-color classification")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Convert {
            input,
            output,
            stats,
            max_side,
        }) => run_convert_command(&input, output.as_deref(), stats, max_side),
        Some(Commands::Classify { color }) => run_classify_command(&color),
        Some(Commands::Palette) => {
            run_palette_command();
            Ok(())
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for CLI commands
fn init_cli_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "emoji_art=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();
}

/// Convert an image file to emoji text (no server needed)
fn run_convert_command(
    input: &Path,
    output: Option<&Path>,
    stats: bool,
    max_side: Option<u32>,
) -> anyhow::Result<()> {
    init_cli_logging();

    let mut config = AppConfig::load();
    if let Some(side) = max_side {
        config.render.max_side = side;
    }

    let bytes = if input.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        std::fs::read(input)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", input.display()))?
    };

    let service = ConvertService::from_config(&config);
    let conversion = service.convert(&bytes).map_err(|e| {
        tracing::warn!(error = %e, "Conversion failed");
        anyhow::anyhow!("{}", emoji_art::error::UNREADABLE_IMAGE)
    })?;
    let text = conversion.text();

    match output {
        Some(path) => {
            std::fs::write(path, &text)?;
            eprintln!("Wrote {}", path.display());
        }
        None => std::io::stdout().write_all(text.as_bytes())?,
    }

    if stats {
        eprintln!(
            "{}x{} -> {}x{} ({})",
            conversion.source_width,
            conversion.source_height,
            conversion.target.width,
            conversion.target.height,
            conversion.target.filter.as_str()
        );
        for (name, count) in conversion.grid.histogram() {
            eprintln!("  {} {:<7} {count}", name.glyph(), name.as_str());
        }
    }

    Ok(())
}

/// Classify a single color and print its palette name
fn run_classify_command(color: &str) -> anyhow::Result<()> {
    init_cli_logging();

    let parsed: Srgb = color
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid color '{color}': {e}"))?;
    let name = emoji_palette::classify(parsed.r, parsed.g, parsed.b);
    println!("{parsed} {} {name}", name.glyph());
    Ok(())
}

/// Print the palette
fn run_palette_command() {
    for entry in Palette::standard().entries() {
        println!(
            "{} {:<7} {}",
            entry.name.glyph(),
            entry.name.as_str(),
            entry.reference
        );
    }
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();
    let config = AppConfig::load();

    // Header
    println!("Emoji Art v{VERSION}");
    println!("Images to colored-square emoji\n");

    // Environment variables section
    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    // Effective configuration
    println!("\nConfiguration:");
    println!("  bind_addr        {}", config.server.bind_addr);
    println!("  max_upload_bytes {}", config.server.max_upload_bytes);
    println!("  max_side         {}", config.render.max_side);
    println!("  alpha_threshold  {}", config.render.alpha_threshold);
    println!("  light_threshold  {}", config.render.light_threshold);

    // Palette
    let glyphs: String = ColorName::ALL.iter().map(|n| n.glyph()).collect();
    println!("\nPalette: {glyphs}");

    // Commands section
    println!("\nCommands:");
    println!("  emoji-art serve      Start the HTTP server");
    println!("  emoji-art convert    Convert an image file to emoji text");
    println!("  emoji-art classify   Classify a single color");
    println!("  emoji-art palette    List palette colors");
    println!("\nRun 'emoji-art --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "emoji_art=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load();
    let bind_addr = config.server.bind_addr.clone();

    tracing::info!(
        max_upload_bytes = config.server.max_upload_bytes,
        max_side = config.render.max_side,
        "Configuration loaded"
    );

    // Create application state using shared server module
    let state = server::create_app_state(config);

    // Build router: shared API routes plus production-only documentation
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Emoji Art server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
