#![allow(unused)]

#[macro_use]
extern crate lazy_static;

use std::io::Read;

use structopt::StructOpt;
use anyhow::Result;

use html_unlink::unlink_html;
use shed_common::fs::filepath_contents_as_string;

/// html_unlink - take HTML input from the given file(s), or stdin if none are set, and
/// replace all linked stylesheets, external scripts and images with embedded content so
/// the result can be distributed as a single standalone file. The transformed HTML is
/// printed to stdout.
/// Relative resource paths are resolved from the current dir, not from the input files
#[derive(StructOpt)]
pub struct CliOpts {

    /// report embedded resources on stderr
    #[structopt(short,long)]
    verbose: bool,

    /// HTML input file(s), stdin if none given
    input: Vec<String>
}

lazy_static! {
    static ref ARGS: CliOpts = CliOpts::from_args();
}

fn main() -> Result<()> {
    let loglevel = if ARGS.verbose {"info"} else {"warn"};
    env_logger::init_from_env( env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, loglevel));

    let mut input = String::new();
    if ARGS.input.is_empty() {
        std::io::stdin().read_to_string(&mut input)?;
    } else {
        // empty input files are fine, they just contribute nothing
        for path in &ARGS.input {
            input.push_str( filepath_contents_as_string(path)?.as_str());
        }
    }

    // nothing goes to stdout unless every referenced resource resolved
    println!("{}", unlink_html(input.as_str())?);
    Ok(())
}
