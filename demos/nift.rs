// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use nift::value::Form;
use nift::read::{read, read_file};
use nift::print::write_all;
use nift::json::form_to_json_string;
use nift::html::form_to_html;
use nift::repl;
use nift::settings::{Settings, Modes, NIFT_FORMAT};
use clap::Parser as ClapParser;
use std::io::{stdin, stdout, stderr, BufWriter, IsTerminal};
use std::path::PathBuf;
use anyhow::{Result, bail};
use tracing_subscriber::EnvFilter;


const SAMPLE: &str = "\
html
:lang en
(meta :encoding utf-8)
(title \"My Website\")
(h1 \"Hello World!\")
(br)
(p \"Lorem ipsum dolor sit amet\")";

#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Output the data as JSON
    #[clap(short, long, value_parser)]
    json: bool,
    /// Output the data as HTML
    #[clap(long, value_parser)]
    html: bool,
    /// Print the data back as nift (the default when reading a file)
    #[clap(short, long, value_parser)]
    print: bool,
    /// Use the built-in sample document instead of a file
    #[clap(long, value_parser)]
    demo: bool,
    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[clap(short, long, parse(from_occurrences))]
    verbose: u64,
    /// Path to the input file; without one (and without --demo), run
    /// an interactive loop on stdin
    #[clap(value_parser)]
    input_path: Option<PathBuf>,
}

fn directive_for_verbosity(v: u64) -> &'static str {
    match v {
        0 => "nift=warn",
        1 => "nift=debug",
        _ => "nift=trace",
    }
}

fn output(form: &Form, args: &Args) -> Result<()> {
    let mut shown = false;
    if args.json {
        println!("{}", form_to_json_string(form)?);
        shown = true;
    }
    if args.html {
        println!("{}", form_to_html(form, 0)?);
        shown = true;
    }
    if args.print || ! shown {
        write_all(BufWriter::new(stdout()), [form])?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(args.verbose))),
        )
        .with_writer(stderr)
        .init();

    if args.demo {
        if args.input_path.is_some() {
            bail!("--demo does not take an input path")
        }
        println!("{}", SAMPLE);
        println!("---");
        output(&read(SAMPLE)?, &args)
    } else if let Some(path) = &args.input_path {
        let form = read_file(path)?;
        output(&form, &args)
    } else {

        // Answer line by line; only prompt when someone is typing.

        let modes = Modes { prompt: stdin().is_terminal() };
        let settings = Settings { format: &NIFT_FORMAT, modes: &modes };
        repl::run(stdin(), stdout(), stderr(), "stdin", &settings)
    }
}
