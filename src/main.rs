/*
Copyright 2025 Connor Nolan

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

use anyhow::{Context, Result};
use clap::Parser;
use mos6502asm::assemble;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[clap(version, author = "Connor Nolan")]
struct Opts {
    /// Path to the 6502 assembly source file.
    #[clap(short, long)]
    input: PathBuf,
    /// Path to write the assembled byte stream to.
    #[clap(short, long)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    let source = fs::read_to_string(&opts.input)
        .with_context(|| format!("Failed to read input file: {}", opts.input.display()))?;

    let bytes = assemble(&source)?;

    fs::write(&opts.output, bytes)
        .with_context(|| format!("Failed to write output file: {}", opts.output.display()))?;

    println!(
        "Successfully assembled {} to {}",
        opts.input.display(),
        opts.output.display()
    );

    Ok(())
}
