use clap::{Parser, Subcommand};
use duotone_cli::resolve_variant_paths;
use duotone_core::verbose_println;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "duotone")]
#[command(version, about = "Light/dark logo variant generator for Flutter apps", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate logo variants and apply the Flutter packaging hooks
    Generate {
        /// Path to pubspec.yaml
        #[arg(short, long, value_name = "FILE", default_value = "pubspec.yaml")]
        pubspec: PathBuf,

        /// Input logo file (overrides pubspec config)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output directory for generated variants (overrides pubspec config)
        #[arg(short, long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// Light theme output filename (used with --out-dir)
        #[arg(long, value_name = "NAME")]
        light_name: Option<String>,

        /// Dark theme output filename (used with --out-dir)
        #[arg(long, value_name = "NAME")]
        dark_name: Option<String>,

        /// Only generate logo variants, skip running flutter commands
        #[arg(long)]
        no_apply: bool,

        /// Skip running flutter_launcher_icons
        #[arg(long)]
        skip_icons: bool,

        /// Skip running flutter_native_splash
        #[arg(long)]
        skip_splash: bool,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze a logo's brightness without writing variants
    Analyze {
        /// Input logo file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Save the analysis report to a JSON file
        #[arg(short, long, value_name = "FILE")]
        save: Option<PathBuf>,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            pubspec,
            input,
            out_dir,
            light_name,
            dark_name,
            no_apply,
            skip_icons,
            skip_splash,
            verbose,
        } => cmd_generate(
            pubspec, input, out_dir, light_name, dark_name, no_apply, skip_icons, skip_splash,
            verbose,
        ),

        Commands::Analyze {
            input,
            save,
            verbose,
        } => cmd_analyze(input, save, verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_generate(
    pubspec: PathBuf,
    input: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    light_name: Option<String>,
    dark_name: Option<String>,
    no_apply: bool,
    skip_icons: bool,
    skip_splash: bool,
    verbose: bool,
) -> Result<(), String> {
    duotone_core::config::set_verbose(verbose);

    let logo_config = duotone_core::config::load_manifest(&pubspec)?;
    let paths = resolve_variant_paths(&logo_config, input, out_dir, light_name, dark_name);

    verbose_println!("Reading logo from: {}", paths.source.display());

    let image = duotone_core::decoders::decode_image(&paths.source)?;
    println!("  Logo: {}x{}", image.width, image.height);

    let report = duotone_core::pipeline::analyze_brightness(&image);
    verbose_println!(
        "Logo brightness: {:.1} ({})",
        report.score,
        if report.is_dark {
            "dark logo"
        } else {
            "light logo"
        }
    );

    let variants = duotone_core::pipeline::generate_variants(&image, report.is_dark);

    duotone_core::exporters::export_png(&variants.light, &paths.light)?;
    duotone_core::exporters::export_png(&variants.dark, &paths.dark)?;

    println!("Generated logo variants: light and dark");

    if no_apply {
        verbose_println!("Skipping flutter commands (--no-apply)");
        return Ok(());
    }

    if !skip_icons {
        println!("Running flutter_launcher_icons...");
        duotone_core::hooks::run_launcher_icons()?;
    }

    if !skip_splash {
        println!("Running flutter_native_splash...");
        duotone_core::hooks::run_native_splash()?;
    }

    println!("Done");
    Ok(())
}

fn cmd_analyze(input: PathBuf, save: Option<PathBuf>, verbose: bool) -> Result<(), String> {
    duotone_core::config::set_verbose(verbose);

    println!("Analyzing logo brightness for {}...", input.display());

    let image = duotone_core::decoders::decode_image(&input)?;
    println!("Image: {}x{}", image.width, image.height);

    let report = duotone_core::pipeline::analyze_brightness(&image);

    println!("\nBrightness Analysis:");
    println!("  Score: {:.2}", report.score);
    println!(
        "  Polarity: {}",
        if report.is_dark { "dark" } else { "light" }
    );
    println!("  Opaque pixels: {}", report.opaque_pixels);

    if let Some(save_path) = save {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Failed to serialize analysis report: {}", e))?;
        std::fs::write(&save_path, json)
            .map_err(|e| format!("Failed to write analysis report: {}", e))?;
        println!("\nAnalysis report saved to: {}", save_path.display());
    }

    Ok(())
}
