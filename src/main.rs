use clap::{Parser, Subcommand};
use photo_prep::imaging::RustBackend;
use photo_prep::{config, output, process};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked exactly once, at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "photo-prep")]
#[command(about = "Resize photos to WebP and write a JSON collection manifest")]
#[command(long_about = "\
Resize photos to WebP and write a JSON collection manifest

Point --source at a flat folder of photographs (.jpg/.jpeg/.png/.webp/.tiff,
top level only). Every run reprocesses everything and replaces the collection
file in full — there is no cache and no merge with manual edits.

Commands:

  build   photos/dawn.jpg → <output>/thumbs/dawn.webp   (800px,  q80)
                            <output>/display/dawn.webp  (1920px, q85)
          collection entries carry \"thumb\" + \"display\" paths

  index   photos/dawn.jpg → <output>/dawn.webp          (1920px, q85)
          collection entries carry a single \"src\" path

Derivatives are never upscaled: a source narrower than the target width is
re-encoded at its own width. A corrupt file is reported and skipped; the
batch continues and still exits 0.

Widths, qualities, and the web path prefix can be overridden by a
config.toml in the source directory. Run 'photo-prep gen-config' to print a
documented stock file.")]
#[command(version = version_string())]
struct Cli {
    /// Source photo directory (created if missing)
    #[arg(long, default_value = "photos", global = true)]
    source: PathBuf,

    /// Output root for WebP derivatives
    #[arg(long, default_value = "site/images", global = true)]
    output: PathBuf,

    /// Path of the JSON collection file
    #[arg(long, default_value = "site/data/photos.json", global = true)]
    collection: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Produce thumbnail + display derivatives and the collection file
    Build,
    /// Produce one display-size derivative per photo and the collection file
    Index,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let config = config::load_config(&cli.source)?;
            let backend = RustBackend::new();
            let summary = process::derivatives(
                &backend,
                &cli.source,
                &cli.output,
                &cli.collection,
                &config,
            )?;
            output::print_summary(
                summary.processed,
                summary.skipped,
                summary.source_bytes,
                summary.output_bytes,
            );
        }
        Command::Index => {
            let config = config::load_config(&cli.source)?;
            let backend = RustBackend::new();
            let summary =
                process::single(&backend, &cli.source, &cli.output, &cli.collection, &config)?;
            output::print_summary(
                summary.processed,
                summary.skipped,
                summary.source_bytes,
                summary.output_bytes,
            );
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
