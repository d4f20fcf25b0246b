use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use apollo_compiler::Schema;
use clap::Parser;
use graphql_query_facts::FactsSummary;
use graphql_query_facts::QueryFacts;

/// Inspect a GraphQL query document: the operations it defines and, given a
/// schema, the resolved type of every declared variable.
#[derive(Parser)]
struct Cli {
    /// Path to the query document to inspect.
    query: PathBuf,
    /// Path to a schema document; enables variable type resolution.
    #[arg(long)]
    schema: Option<PathBuf>,
    /// Print the facts as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let document_text = match fs::read_to_string(&cli.query) {
        Ok(text) => text,
        Err(error) => {
            eprintln!("failed to read {}: {error}", cli.query.display());
            return ExitCode::FAILURE;
        }
    };
    let schema = match &cli.schema {
        Some(path) => match read_schema(path) {
            Ok(schema) => Some(schema),
            Err(error) => {
                eprintln!("{error}");
                return ExitCode::FAILURE;
            }
        },
        None => None,
    };

    let Some(facts) = QueryFacts::extract(schema.as_ref(), &document_text) else {
        eprintln!(
            "{}: no facts derived; the document is empty or does not parse",
            cli.query.display()
        );
        return ExitCode::FAILURE;
    };

    let summary = FactsSummary::from(&facts);
    if cli.json {
        let json = serde_json::to_string_pretty(&summary).expect("summary serializes to JSON");
        println!("{json}");
    } else {
        print!("{summary}");
    }
    ExitCode::SUCCESS
}

fn read_schema(path: &Path) -> Result<Schema, String> {
    let text = fs::read_to_string(path)
        .map_err(|error| format!("failed to read {}: {error}", path.display()))?;
    Schema::parse(text, path)
        .map_err(|invalid| format!("invalid schema {}: {}", path.display(), invalid.errors))
}
