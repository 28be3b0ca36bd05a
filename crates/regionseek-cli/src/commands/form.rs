use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use regionseek_core::api::{Endpoint, SearchForm};
use regionseek_core::config::FrontendConfig;
use regionseek_core::consts::DEFAULT_TOP_K;
use regionseek_core::selection::{CropRect, ImageFile};

use super::parse_crop;

#[derive(Args)]
pub struct FormArgs {
    /// Query image
    pub image: PathBuf,

    /// Dataset to search (repeatable)
    #[arg(short, long = "dataset", required = true)]
    pub datasets: Vec<String>,

    /// Number of results to request
    #[arg(long, default_value_t = DEFAULT_TOP_K)]
    pub top_k: u32,

    /// Crop as x,y,w,h
    #[arg(long, value_parser = parse_crop, default_value = "0,0,0,0")]
    pub crop: CropRect,
}

pub fn run(args: &FormArgs, config: &FrontendConfig) -> Result<()> {
    let file = ImageFile::open(&args.image)
        .with_context(|| format!("Failed to read {}", args.image.display()))?;

    let form = args
        .datasets
        .iter()
        .fold(SearchForm::new(&file, args.crop), |form, name| {
            form.dataset(name.as_str())
        })
        .top_k(args.top_k);
    form.validate()?;

    let endpoint = Endpoint::Search;
    println!(
        "{} {}",
        endpoint.method(),
        endpoint.url(&config.api.base_url)
    );
    for (name, value) in form.text_fields() {
        println!("  {name} = {value}");
    }
    let part = form.file_part();
    println!(
        "  {} = <{}, {} bytes>",
        part.field,
        part.filename,
        part.bytes.len()
    );

    Ok(())
}
