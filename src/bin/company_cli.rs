// src/bin/company_cli.rs
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;

use company_search::render::render_results;
use company_search::services::importer::{import_csv, seed_if_empty, ImportOutcome};
use company_search::{
    AppConfig, CompanyFilter, CompanyStore, MemoryCompanyStore, RedisCompanyStore, SearchField,
};

#[derive(Parser)]
#[command(name = "company-cli")]
#[command(about = "Import and search the public company collection", long_about = None)]
struct Cli {
    /// Use a throwaway in-memory store instead of Redis (dry run)
    #[arg(long, global = true)]
    memory: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a name,ticker,price CSV into the store
    Import {
        csv: Option<String>,
        /// Import even when the collection already has records
        #[arg(long)]
        force: bool,
    },
    /// Search by name or ticker
    Search {
        text: String,
        #[arg(short, long, default_value = "name")]
        r#type: String,
        /// Print the same HTML fragment the server returns
        #[arg(long)]
        html: bool,
    },
    /// Print the number of stored companies
    Count,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    let store: Box<dyn CompanyStore> = if cli.memory {
        Box::new(MemoryCompanyStore::new())
    } else {
        Box::new(RedisCompanyStore::connect(&config).await?)
    };

    run(store.as_ref(), &config, cli.command).await
}

async fn run(store: &dyn CompanyStore, config: &AppConfig, command: Commands) -> Result<()> {
    match command {
        Commands::Import { csv, force } => {
            let path = csv.unwrap_or_else(|| config.seed_csv.clone());
            if force {
                let count = import_csv(store, &path).await?;
                println!("✅ Imported {} companies from {}", count, path);
            } else {
                match seed_if_empty(store, &path).await? {
                    ImportOutcome::Imported { count } => {
                        println!("✅ Imported {} companies from {}", count, path)
                    }
                    ImportOutcome::Skipped { existing } => {
                        println!("ℹ️  Store already holds {} companies, nothing imported", existing)
                    }
                }
            }
        }
        Commands::Search { text, r#type, html } => {
            let Some(field) = SearchField::from_param(Some(r#type.as_str())) else {
                bail!("unknown search type '{}', expected name or ticker", r#type);
            };
            let companies = store.find(&CompanyFilter::new(field, &text)?).await?;
            if html {
                println!("{}", render_results(&companies));
            } else if companies.is_empty() {
                println!("No results found.");
            } else {
                for company in companies {
                    println!("{} ({}): ${}", company.name, company.ticker, company.price);
                }
            }
        }
        Commands::Count => {
            println!("{}", store.count().await?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn memory_flag_is_accepted_after_the_subcommand() {
        let cli = Cli::try_parse_from(["company-cli", "count", "--memory"]).unwrap();
        assert!(cli.memory);

        let cli = Cli::try_parse_from(["company-cli", "--memory", "search", "acme", "-t", "ticker"]).unwrap();
        assert!(cli.memory);
        assert!(matches!(cli.command, Commands::Search { ref r#type, .. } if r#type == "ticker"));
    }

    #[tokio::test]
    async fn dry_run_import_fills_memory_store() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"Acme Corp,ACME,12.5\nGlobex,GBX,40\n").unwrap();
        let csv = file.path().to_string_lossy().to_string();

        let store = MemoryCompanyStore::new();
        let config = AppConfig::default();

        let import = Commands::Import { csv: Some(csv.clone()), force: false };
        run(&store, &config, import).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 2);

        let again = Commands::Import { csv: Some(csv), force: false };
        run(&store, &config, again).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn search_rejects_unknown_type() {
        let store = MemoryCompanyStore::new();
        let search = Commands::Search { text: "acme".into(), r#type: "price".into(), html: false };
        assert!(run(&store, &AppConfig::default(), search).await.is_err());
    }
}
