//! `studydash preview`

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use studydash_core::preview::{DocumentKind, UNSUPPORTED_MESSAGE};

#[derive(Args, Debug)]
pub struct PreviewArgs {
    file: PathBuf,
}

pub fn run(args: PreviewArgs) -> Result<()> {
    match DocumentKind::from_path(&args.file) {
        kind if kind.is_text() => {
            let text = fs::read_to_string(&args.file)
                .with_context(|| format!("Failed to read {}", args.file.display()))?;
            print!("{}", text);
            if !text.ends_with('\n') {
                println!();
            }
        }
        DocumentKind::Pdf => {
            let size = fs::metadata(&args.file)
                .with_context(|| format!("Failed to read {}", args.file.display()))?
                .len();
            println!(
                "{}: PDF, {} bytes. Page rendering is only available in the web dashboard.",
                args.file.display(),
                size
            );
        }
        _ => println!("{}", UNSUPPORTED_MESSAGE),
    }
    Ok(())
}
