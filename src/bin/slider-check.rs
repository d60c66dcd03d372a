use shopslide::{RenderState, ShortcodeEngine, SliderDocument, SliderError};
use std::env;
use std::fs;
use std::process;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let mut print_html = false;
    let mut files = Vec::new();
    for arg in &args[1..] {
        if arg == "--print" {
            print_html = true;
        } else {
            files.push(arg.clone());
        }
    }

    if files.is_empty() {
        eprintln!("Usage: slider-check [--print] <document.json|document.yaml>...");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  slider-check fixtures/valid-basic.yaml");
        eprintln!("  slider-check --print fixtures/*.yaml");
        process::exit(1);
    }

    let mut exit_code = 0;

    for file_path in files {
        match check_file(&file_path, print_html) {
            Ok(()) => {
                println!("✓ {} renders", file_path);
            }
            Err(e) => {
                eprintln!("✗ {} failed:", file_path);
                print_error(&e);
                exit_code = 1;
            }
        }
    }

    process::exit(exit_code);
}

fn check_file(path: &str, print_html: bool) -> Result<(), SliderError> {
    let content = fs::read_to_string(path)
        .map_err(|e| SliderError::Document(format!("Failed to read file: {}", e)))?;

    let document = if path.ends_with(".json") {
        SliderDocument::from_json(&content)?
    } else {
        SliderDocument::from_yaml(&content)?
    };

    let store = document.store();
    let catalog = document.catalog();
    let media = document.media_library();
    let engine = ShortcodeEngine::new(&store, &catalog, &media);

    let id_attr = document.slider.id.to_string();
    let (state, output) = engine.evaluate(Some(&id_attr));

    match state {
        RenderState::Ready => {
            if print_html {
                if let Some(output) = output {
                    println!("{}", output.html());
                }
            }
            Ok(())
        }
        RenderState::IdInvalid => Err(SliderError::InvalidId),
        RenderState::NotFoundOrUnpublished => {
            Err(SliderError::NotPublished { id: document.slider.id })
        }
        RenderState::NoSlidesConfigured => Err(SliderError::NothingConfigured),
        RenderState::NoResolvedSlides => Err(SliderError::NoValidSlides),
    }
}

fn print_error(error: &SliderError) {
    match error {
        SliderError::Document(msg) => {
            eprintln!("  Document error:");
            eprintln!("    {}", msg);
        }
        SliderError::NotPublished { id } => {
            eprintln!("  Slider {} is not published", id);
            eprintln!("    Only published sliders render on the public path");
        }
        SliderError::NothingConfigured => {
            eprintln!("  No products or custom slides selected");
        }
        SliderError::NoValidSlides => {
            eprintln!("  Nothing resolved: all product references are stale or");
            eprintln!("  every custom slide is missing a usable image");
        }
        e => {
            eprintln!("  {}", e);
        }
    }
}
