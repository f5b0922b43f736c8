use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tripwise")]
#[command(author, version, about = "Plan a trip through a short travel interview", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the travel interview directly
    Plan {
        /// Print the final trip record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Talk to the supervisor; travel requests start the interview
    Chat,

    /// Normalize a raw dates answer into a start/end range
    Normalize {
        /// JSON value or plain text, e.g. "{'startDate': '2024-02-01', 'endDate': '2024-02-05'}"
        dates: String,
    },

    /// Show how the supervisor would route a message
    Route { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan_with_json_flag() {
        let cli = Cli::try_parse_from(["tripwise", "plan", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Plan { json: true }));
    }

    #[test]
    fn test_parse_normalize_argument() {
        let cli = Cli::try_parse_from(["tripwise", "normalize", "next weekend"]).unwrap();
        match cli.command {
            Commands::Normalize { dates } => assert_eq!(dates, "next weekend"),
            _ => panic!("expected normalize"),
        }
    }
}
