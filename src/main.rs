//! # add-signatures
//!
//! A tool that adds author signature blocks to the top of source files.

use anyhow::Result;
use signature_tool::cli::{Cli, run_sign};

fn main() -> Result<()> {
  let cli = Cli::parse_args();
  run_sign(cli.sign_args)
}
