// SPDX-License-Identifier: MIT
//! PIQ container packing tool
//!
//! Bundles every file matching a search pattern into a single PIQ
//! container, in sorted path order.

use std::env;
use std::fs::{self, File};
use std::io::BufWriter;

use anyhow::Context;
use tracing::debug;

use piq_container::{resolve_inputs, ContainerWriter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        println!("Creates a PIQ (picture sequence) container from multiple input files.");
        println!("Usage: makepiq <search-pattern> <output-file>");
        println!("The search pattern may contain wildcards.");
        return Ok(());
    }

    let pattern = &args[1];
    let outname = &args[2];

    let files = resolve_inputs(pattern)?;
    debug!(count = files.len(), pattern = %pattern, "resolved inputs");

    let outfile =
        File::create(outname).with_context(|| format!("failed to create {}", outname))?;
    let mut writer = ContainerWriter::new(BufWriter::new(outfile), files.len())?;

    for (idx, path) in files.iter().enumerate() {
        let data =
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        println!("{}: {} (length: {})", idx, path.display(), data.len());
        writer.write_chunk(&data)?;
        debug!(index = idx, len = data.len(), "chunk written");
    }

    writer.finish()?;
    println!("{} files -> {}", files.len(), outname);

    Ok(())
}
