use clap::{Parser, Subcommand};

/// MacroPlanner — derive a daily macro plan from body weight and adjust it.
#[derive(Parser, Debug)]
#[command(name = "macro_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the baseline plan for a body weight.
    Compute {
        /// Body weight in pounds (0 < weight <= 1000).
        #[arg(short, long)]
        weight: f64,

        /// Print the plan as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Compute a baseline and apply one adjustment pass.
    ///
    /// A lone calorie delta rescales the macros proportionally; any macro
    /// delta switches to direct-macro mode and the total is derived from the
    /// adjusted grams instead.
    Adjust {
        /// Body weight in pounds (0 < weight <= 1000).
        #[arg(short, long)]
        weight: f64,

        /// Calorie delta.
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        calories: i32,

        /// Protein delta in grams.
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        protein: i32,

        /// Fat delta in grams.
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        fat: i32,

        /// Carb delta in grams.
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        carbs: i32,

        /// Print the plan as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Run an interactive planning session.
    Interactive,
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive
    }
}
