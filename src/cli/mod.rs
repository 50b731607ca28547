pub mod completions;
pub mod info;
pub mod init;
pub mod render;

use clap::{Parser, Subcommand};

/// txtshade - raster images as shaded text art
#[derive(Parser, Debug)]
#[command(name = "txtshade")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render images to text art
    Render(render::RenderArgs),

    /// Inspect images and the grid they would render to
    Info(info::InfoArgs),

    /// Initialize a txtshade.yaml settings file
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
