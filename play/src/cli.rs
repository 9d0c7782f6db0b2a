use clap::Parser;

/// Play tic-tac-toe against the MCTS engine
#[derive(Parser)]
pub struct Args {
    /// Number of rollouts per engine move
    #[clap(short, long, default_value_t = 50)]
    pub rollouts: u32,
    /// Exploration weight used during search
    #[clap(short, long, default_value_t = 1.0)]
    pub exploration: f32,
    /// Show visit statistics for the moves the engine considered
    #[clap(short, long)]
    pub show_tree: bool,
    /// Write logs to this file
    #[clap(short, long)]
    pub log_file: Option<String>,
}
