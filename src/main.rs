use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use brickboard::api;
use brickboard::assets::AssetLoader;
use brickboard::models::{self, AppConfig};
use brickboard::server;
use brickboard::services::MosaicPipeline;

#[derive(Parser)]
#[command(name = "brickboard")]
#[command(about = "Brickboard - turn photos into brick mosaics")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Quantize a PNG and cut it into boards
    Render {
        /// Input PNG, already sized to the board grid
        #[arg(short, long)]
        input: PathBuf,

        /// Board layout: "1x1", "2x2", "3x2", "3x3", "4x2" or a board count
        /// (default: from config)
        #[arg(short, long)]
        boards: Option<String>,

        /// Output JSON file path
        #[arg(short, long)]
        output: PathBuf,

        /// Also write the quantized image to this PNG file
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Print the configured palette
    Palette,
    /// Extract the embedded config.yaml for customization
    Init {
        /// Target path (default: CONFIG_FILE or ./config.yaml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Brickboard API",
        description = "Photo to brick mosaic generation and editing",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_palette,
        api::handle_mosaic,
        api::handle_create_session,
        api::handle_get_session,
        api::handle_session_event,
        api::handle_delete_session,
    ),
    components(schemas(
        models::PaletteColor,
        models::ColorUsageData,
        models::BoardPosition,
        models::BoardData,
        models::MosaicData,
        api::BoardCount,
        api::MosaicRequest,
        api::CreateSessionRequest,
        api::PointerButton,
        api::EditorEvent,
        api::ViewData,
        api::SessionResponse,
    )),
    tags(
        (name = "Palette", description = "Brick color palette"),
        (name = "Mosaic", description = "Stateless mosaic generation"),
        (name = "Sessions", description = "Editor sessions with undo/redo")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render {
            input,
            boards,
            output,
            image,
        }) => run_render_command(&input, boards, &output, image.as_deref()),
        Some(Commands::Palette) => run_palette_command(),
        Some(Commands::Init { config, force }) => run_init_command(config.as_deref(), force),
        Some(Commands::Serve) => run_server().await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for CLI commands
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brickboard=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn load_config() -> AppConfig {
    let loader = AssetLoader::from_env();
    if let Err(e) = loader.seed_if_configured() {
        tracing::warn!(%e, "Failed to seed config");
    }
    AppConfig::load_from_assets(&loader)
}

/// Generate a mosaic from a PNG file (no server needed)
fn run_render_command(
    input: &Path,
    boards: Option<String>,
    output: &Path,
    image: Option<&Path>,
) -> anyhow::Result<()> {
    init_cli_tracing();

    let config = load_config();
    let boards = boards.unwrap_or_else(|| config.default_boards.clone());
    let palette = config
        .build_palette()
        .map_err(|e| anyhow::anyhow!("Invalid palette: {e}"))?;
    let pipeline = MosaicPipeline::new(palette, config.tile_size);

    let png_bytes = std::fs::read(input)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", input.display()))?;
    let result = pipeline
        .generate(&png_bytes, &boards)
        .map_err(|e| anyhow::anyhow!("Render error: {e}"))?;
    let data = MosaicPipeline::to_wire(&result)?;

    std::fs::write(output, serde_json::to_string_pretty(&data)?)?;
    println!(
        "Rendered {} ({} boards, {} colors, {} tiles)",
        output.display(),
        data.boards.len(),
        data.color_map.len(),
        data.total_tiles
    );

    if let Some(path) = image {
        let png = brickboard::rendering::encode_png(result.quantized())?;
        std::fs::write(path, &png)?;
        println!("Wrote {} ({} bytes)", path.display(), png.len());
    }

    Ok(())
}

/// Print the palette in tie-break order
fn run_palette_command() -> anyhow::Result<()> {
    init_cli_tracing();

    let palette = load_config()
        .build_palette()
        .map_err(|e| anyhow::anyhow!("Invalid palette: {e}"))?;
    for (idx, color) in palette.iter().enumerate() {
        println!("{idx:>3}  {}  {}", color.hex(), color.name);
    }
    Ok(())
}

/// Extract the embedded config to the filesystem
fn run_init_command(target: Option<&Path>, force: bool) -> anyhow::Result<()> {
    let loader = AssetLoader::from_env();
    let report = loader.init(target, force)?;

    for f in &report.written {
        println!("Extracted {f}");
    }
    for f in &report.skipped {
        println!("Skipped existing {f} (use --force to overwrite)");
    }
    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("Brickboard v{VERSION}");
    println!("Photo to brick mosaic service\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    let loader = AssetLoader::new(config_file.clone().map(PathBuf::from));
    let config_source = match config_file {
        Some(ref path) if loader.has_external_config() => path.to_string(),
        Some(_) => "embedded (file not found)".to_string(),
        None => "embedded".to_string(),
    };
    println!("\nConfig:  {config_source}");

    let config = loader
        .read_config_string()
        .ok()
        .and_then(|content| AppConfig::from_yaml(&content).ok());
    match config {
        Some(config) => {
            println!("Palette: {} colors", config.palette.len());
            println!("Tile:    {0}x{0} cells per board", config.tile_size);
        }
        None => println!("Palette: (config unreadable)"),
    }

    println!("\nCommands:");
    println!("  brickboard serve    Start the HTTP server");
    println!("  brickboard render   Build a mosaic from a PNG file");
    println!("  brickboard palette  List palette colors");
    println!("  brickboard init     Extract the embedded config");
    println!("\nRun 'brickboard --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brickboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let asset_loader = Arc::new(AssetLoader::from_env());

    tracing::info!(
        config = ?asset_loader
            .config_file()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "embedded".to_string()),
        "Config source"
    );

    match asset_loader.seed_if_configured() {
        Ok(true) => tracing::info!("Seeded missing config file with embedded default"),
        Err(e) => tracing::warn!(%e, "Failed to seed config"),
        Ok(false) => {}
    }

    let state = server::create_app_state(asset_loader)?;

    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Brickboard server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
