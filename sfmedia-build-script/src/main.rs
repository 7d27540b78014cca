use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Generate the C header for sfmedia-capi.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The directory of the sfmedia-capi crate, containing its cbindgen.toml.
    #[arg(short, long, default_value = "sfmedia-capi")]
    crate_dir: PathBuf,
    /// The path of the header to write.
    #[arg(short, long, default_value = "sfmedia.h")]
    out: PathBuf,
}

pub fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let bindings = cbindgen::generate(&args.crate_dir)
        .with_context(|| format!("unable to generate bindings for {}", args.crate_dir.display()))?;

    let file = File::create(&args.out)
        .with_context(|| format!("unable to open {}", args.out.display()))?;
    let mut writer = BufWriter::new(file);
    bindings.write(&mut writer);
    writer.flush().context("unable to write bindings")?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
