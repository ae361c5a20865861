use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use storybook_backend::client::{
    with_busy_indicator, ClientOutcome, StoryClient, BUSY_MESSAGE, DEFAULT_API_BASE,
};
use storybook_backend::domain::story::StoryRequest;

/// Adaptive Storybook Creator
#[derive(Parser, Debug)]
#[command(name = "storybook-client")]
#[command(about = "Create a personalized storybook for a child", long_about = None)]
#[command(version)]
struct Cli {
    /// Child's age
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(i64).range(1..=15))]
    age: i64,

    /// Reading level
    #[arg(long, default_value = "Beginner", value_parser = ["Beginner", "Intermediate", "Advanced"])]
    reading_level: String,

    /// Favorite theme (e.g. Space, Animals, Magic)
    #[arg(long, default_value = "Animals")]
    theme: String,

    /// Gender
    #[arg(long, default_value = "Male", value_parser = ["Male", "Female"])]
    gender: String,

    /// Additional preferences (e.g. "A story about a brave little lion")
    #[arg(long, default_value = "")]
    description: String,

    /// Storybook service base URL
    #[arg(long, env = "STORYBOOK_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Also write the storybook to this markdown file
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let request = StoryRequest {
        age: cli.age,
        reading_level: cli.reading_level,
        theme: cli.theme,
        gender: cli.gender,
        description: Some(cli.description),
    };

    let client = StoryClient::new(&cli.api_base);
    let result = with_busy_indicator(BUSY_MESSAGE, client.submit(&request)).await;

    match result {
        Ok(ClientOutcome::Story(markdown)) => {
            if let Some(path) = cli.output {
                if let Err(e) = std::fs::write(&path, &markdown) {
                    eprintln!("Failed to write {}: {}", path.display(), e);
                    return ExitCode::FAILURE;
                }
                eprintln!("Storybook saved to {}", path.display());
            }
            println!("{}", markdown);
            ExitCode::SUCCESS
        }
        Ok(outcome) => {
            if let Some(message) = outcome.error_message() {
                eprintln!("{}", message);
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
