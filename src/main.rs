//! ChefInBox command line entry point
//!
//! A terminal rendition of the app flow: seed the session with typed
//! ingredients and/or a photo, then generate a scaled recipe batch.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use chefinbox::core::load_captured_image;
use chefinbox::services::gemini::DEFAULT_MODEL;
use chefinbox::{ChefApp, ChefError, GeminiClient, PromptProfile};

/// Recipe suggestions from the ingredients you have on hand
#[derive(Parser)]
#[command(name = "chefinbox")]
#[command(about = "Turns a photo or a list of ingredients into recipe suggestions")]
struct Args {
    /// Ingredient to add before generating (repeatable)
    #[arg(short, long = "ingredient")]
    ingredient: Vec<String>,

    /// JPEG photo to analyze for ingredients
    #[arg(long)]
    image: Option<PathBuf>,

    /// Serving count the recipes are scaled to (clamped to 1..=12)
    #[arg(long, default_value = "2")]
    servings: u32,

    /// Gemini model name
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Request timeout in milliseconds
    #[arg(long, default_value = "30000")]
    timeout_ms: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Culinary tradition the suggestions stick to
    #[arg(long, default_value = "Italian")]
    cuisine: String,

    /// Language the recipes are written in
    #[arg(long, default_value = "Italian")]
    language: String,
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = format!("chefinbox={log_level},reqwest=warn");
    fmt()
        .with_env_filter(EnvFilter::new(&filter))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Pick up the API key from a local .env during development
    let _ = dotenvy::dotenv();
    init_tracing(&args.log_level);

    let api_key = std::env::var("GEMINI_API_KEY")
        .or_else(|_| std::env::var("GOOGLE_API_KEY"))
        .map_err(|_| ChefError::ConfigError {
            message: "set GEMINI_API_KEY or GOOGLE_API_KEY".to_string(),
        })?;

    let profile = PromptProfile {
        cuisine: args.cuisine,
        language: args.language,
        ..PromptProfile::default()
    };
    let gemini = GeminiClient::new(api_key)
        .with_model(args.model)
        .with_timeout(Duration::from_millis(args.timeout_ms))
        .with_profile(profile);

    let app = ChefApp::new(gemini.clone(), gemini);
    app.set_servings(args.servings).await;

    for name in &args.ingredient {
        if let Some(entry) = app.add_ingredient(name).await {
            println!("🧺 Added {}", entry.name);
        }
    }

    if let Some(path) = &args.image {
        let image = load_captured_image(path)
            .with_context(|| format!("failed to load {}", path.display()))?;
        println!("📷 Analyzing {}...", path.display());
        let added = app.request_analysis(&image).await?;
        for entry in &added {
            println!("🧺 Recognized {}", entry.name);
        }
        if added.is_empty() {
            println!("   (no new ingredients recognized)");
        }
    }

    let snapshot = app.snapshot().await;
    if snapshot.ingredients.is_empty() {
        anyhow::bail!("no ingredients to cook with; pass --ingredient or --image");
    }

    println!(
        "👨‍🍳 Generating recipes for {} servings from {} ingredients...",
        snapshot.servings,
        snapshot.ingredients.len()
    );
    let batch = app.request_generation().await?;

    for recipe in &batch {
        println!();
        println!("=== {} ===", recipe.title);
        println!("{}", recipe.description);
        print!(
            "⏱ {} | {} | serves {}",
            recipe.prep_time, recipe.difficulty, recipe.servings
        );
        if let Some(calories) = &recipe.calories {
            print!(" | {calories}");
        }
        println!();
        println!("Ingredients:");
        for line in &recipe.ingredients {
            println!("  - {line}");
        }
        println!("Steps:");
        for (i, step) in recipe.instructions.iter().enumerate() {
            println!("  {}. {step}", i + 1);
        }
        println!("Image: {}", recipe.image_url);
    }

    Ok(())
}
