use clap::{Parser, Subcommand};

#[derive(Parser)]
#[clap(name = "planar")]
#[clap(about = "Shape walkthroughs for sum-type dispatch and ownership", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Box-held shapes with exclusive, scope-bound lifetimes
    Owned,
    /// Rc-held shapes with reference-counted lifetimes
    Shared,
    /// Both walkthroughs in sequence (the default)
    All,
}
