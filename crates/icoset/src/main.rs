//! Command-line front end for icoset.
//!
//! Converts images to multi-size ICO files and generates favicon sets.

mod logging;

use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use icoset_core::handlers::{self, BatchEvent, BatchRequest, FaviconRequest, IcoRequest};
use icoset_core::options::OptionsFile;
use icoset_core::{Color, FaviconOptions, SizeSet};

#[derive(Parser)]
#[command(name = "icoset")]
#[command(about = "Convert images to ICO files and generate favicon sets")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an image to a multi-size ICO file
    Ico {
        /// Input image (PNG or any other supported raster format)
        input: PathBuf,

        /// Output ICO file (defaults to the input path with an .ico extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Sizes to embed (comma-separated)
        #[arg(short, long, value_delimiter = ',', default_value = "16,32,48,64,128,256")]
        sizes: Vec<u32>,
    },
    /// Convert several images to ICO files in one directory
    Batch {
        /// Input images
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory for the ICO files
        #[arg(short, long)]
        output: PathBuf,

        /// Sizes to embed (comma-separated)
        #[arg(short, long, value_delimiter = ',', default_value = "16,32,48,64,128,256")]
        sizes: Vec<u32>,
    },
    /// Generate a favicon set (ICO, PNGs, manifest.json, favicon.html)
    Favicon {
        /// Source image, ideally square and at least 512x512
        input: PathBuf,

        /// Output directory for the generated files
        #[arg(short, long)]
        output: PathBuf,

        /// JSON file with default favicon options
        #[arg(long)]
        config: Option<PathBuf>,

        /// Prefix for generated image filenames (letters, digits, '-' and '_')
        #[arg(short, long)]
        prefix: Option<String>,

        /// Background color for apple-touch-icon.png
        #[arg(long)]
        background: Option<Color>,

        /// Manifest theme_color and the theme-color meta tag
        #[arg(long)]
        theme_color: Option<Color>,

        /// Manifest background_color
        #[arg(long)]
        manifest_background: Option<Color>,

        /// Manifest name
        #[arg(long)]
        name: Option<String>,

        /// Manifest short_name
        #[arg(long)]
        short_name: Option<String>,

        /// Print the HTML snippet after writing the files
        #[arg(long)]
        print_html: bool,
    },
    /// List the entry sizes of an ICO file
    Inspect {
        /// ICO file to read
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Ico {
            input,
            output,
            sizes,
        } => run_ico(input, output, &sizes),
        Commands::Batch {
            inputs,
            output,
            sizes,
        } => run_batch(inputs, output, &sizes),
        Commands::Favicon {
            input,
            output,
            config,
            prefix,
            background,
            theme_color,
            manifest_background,
            name,
            short_name,
            print_html,
        } => {
            let overrides = OptionsFile {
                prefix,
                background,
                theme_color,
                manifest_background,
                name,
                short_name,
            };
            run_favicon(input, output, config, overrides, print_html)
        }
        Commands::Inspect { input } => run_inspect(input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_ico(input: PathBuf, output: Option<PathBuf>, sizes: &[u32]) -> Result<(), Box<dyn Error>> {
    let request = IcoRequest {
        input,
        output,
        sizes: SizeSet::new(sizes)?,
    };
    let response = handlers::convert_ico(&request)?;

    let size_list: Vec<String> = response.sizes.iter().map(|s| format!("{}px", s)).collect();
    println!("Created {}", response.output.display());
    println!("Sizes included: {}", size_list.join(", "));
    Ok(())
}

fn run_batch(inputs: Vec<PathBuf>, output_dir: PathBuf, sizes: &[u32]) -> Result<(), Box<dyn Error>> {
    let request = BatchRequest {
        inputs,
        output_dir,
        sizes: SizeSet::new(sizes)?,
    };

    let report = handlers::convert_batch(&request, |event| match event {
        BatchEvent::Converting { input, index, total } => {
            println!("[{}/{}] {}", index + 1, total, input.display());
        }
        BatchEvent::Converted { output, .. } => {
            println!("  -> {}", output.display());
        }
        BatchEvent::Failed { error, .. } => {
            println!("  FAILED: {}", error);
        }
    });

    if report.is_success() {
        println!("Converted {} files to {}", report.converted.len(), request.output_dir.display());
        return Ok(());
    }

    println!("{} OK, {} failed", report.converted.len(), report.failed.len());
    for (input, error) in &report.failed {
        eprintln!("  {}: {}", input.display(), error);
    }
    Err(format!(
        "{} of {} files failed to convert",
        report.failed.len(),
        request.inputs.len()
    )
    .into())
}

fn run_favicon(
    input: PathBuf,
    output_dir: PathBuf,
    config: Option<PathBuf>,
    overrides: OptionsFile,
    print_html: bool,
) -> Result<(), Box<dyn Error>> {
    let mut options = FaviconOptions::default();
    if let Some(path) = config {
        options = OptionsFile::load(&path)?.merge_into(options);
    }
    options = overrides.merge_into(options);

    let request = FaviconRequest {
        input,
        output_dir,
        options,
    };
    let response = handlers::generate_favicons(&request)?;

    println!(
        "Favicon set generated in {}",
        request.output_dir.display()
    );
    for path in &response.written {
        if let Some(name) = path.file_name() {
            println!("  - {}", name.to_string_lossy());
        }
    }
    if print_html {
        println!();
        print!("{}", response.html);
    }
    Ok(())
}

fn run_inspect(input: PathBuf) -> Result<(), Box<dyn Error>> {
    let entries = handlers::inspect_ico(&input)?;
    println!("{}: {} entries", input.display(), entries.len());
    for (width, height) in entries {
        println!("  {}x{}", width, height);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn ico_sizes_default_to_full_set() {
        let cli = Cli::try_parse_from(["icoset", "ico", "logo.png"]).unwrap();
        match cli.command {
            Commands::Ico { sizes, output, .. } => {
                assert_eq!(sizes, vec![16, 32, 48, 64, 128, 256]);
                assert!(output.is_none());
            }
            _ => panic!("expected ico command"),
        }
    }

    #[test]
    fn ico_sizes_are_comma_separated() {
        let cli = Cli::try_parse_from(["icoset", "ico", "logo.png", "-s", "16,48"]).unwrap();
        match cli.command {
            Commands::Ico { sizes, .. } => assert_eq!(sizes, vec![16, 48]),
            _ => panic!("expected ico command"),
        }
    }

    #[test]
    fn favicon_parses_colors() {
        let cli = Cli::try_parse_from([
            "icoset",
            "favicon",
            "logo.png",
            "-o",
            "public",
            "--prefix",
            "site-",
            "--background",
            "#000",
            "--theme-color",
            "336699",
        ])
        .unwrap();
        match cli.command {
            Commands::Favicon {
                prefix,
                background,
                theme_color,
                manifest_background,
                ..
            } => {
                assert_eq!(prefix.as_deref(), Some("site-"));
                assert_eq!(background, Some(Color::BLACK));
                assert_eq!(theme_color, Some(Color::new(0x33, 0x66, 0x99)));
                assert_eq!(manifest_background, None);
            }
            _ => panic!("expected favicon command"),
        }
    }

    #[test]
    fn favicon_rejects_bad_color() {
        let result = Cli::try_parse_from([
            "icoset",
            "favicon",
            "logo.png",
            "-o",
            "public",
            "--background",
            "blue",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn batch_requires_inputs() {
        let result = Cli::try_parse_from(["icoset", "batch", "-o", "out"]);
        assert!(result.is_err());
    }

    #[test]
    fn ico_with_no_sizes_fails() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("logo.png");
        image::RgbaImage::from_pixel(32, 32, image::Rgba([5, 5, 5, 255]))
            .save(&input)
            .unwrap();

        let result = run_ico(input, None, &[]);
        assert!(result.is_err());
        assert!(!dir.path().join("logo.ico").exists());
    }

    #[test]
    fn batch_failure_is_returned_as_error() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.png");
        image::RgbaImage::from_pixel(32, 32, image::Rgba([5, 5, 5, 255]))
            .save(&good)
            .unwrap();
        let bad = dir.path().join("bad.png");
        std::fs::write(&bad, b"garbage").unwrap();
        let out = dir.path().join("out");

        let result = run_batch(vec![good, bad], out.clone(), &[16]);

        let message = result.unwrap_err().to_string();
        assert_eq!(message, "1 of 2 files failed to convert");
        assert!(out.join("good.ico").exists());
    }

    #[test]
    fn favicon_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("logo.png");
        image::RgbaImage::from_pixel(64, 64, image::Rgba([5, 5, 5, 255]))
            .save(&input)
            .unwrap();
        let config = dir.path().join("icoset.json");
        std::fs::write(&config, r#"{ "prefix": "file-", "name": "From File" }"#).unwrap();
        let out = dir.path().join("out");

        let overrides = OptionsFile {
            prefix: Some("flag-".to_string()),
            ..OptionsFile::default()
        };
        run_favicon(input, out.clone(), Some(config), overrides, false).unwrap();

        assert!(out.join("flag-favicon.ico").exists());
        assert!(!out.join("file-favicon.ico").exists());
        let manifest = std::fs::read_to_string(out.join("manifest.json")).unwrap();
        assert!(manifest.contains("\"name\": \"From File\""));
    }
}
