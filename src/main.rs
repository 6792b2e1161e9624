use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;

use newsgate::app::WriteGateway;
use newsgate::domain::{ExecutionResult, PublisherFields};
use newsgate::error;
use newsgate::infra::adapters::PsqlExecutor;
use newsgate::infra::config::{self, CONFIG_FILE};

/// Seed the news-aggregation schema with demo rows.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the connection config file
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Connection string, overriding config file and environment
    #[arg(long)]
    dsn: Option<String>,

    /// Per-statement timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

fn report(label: &str, result: &ExecutionResult) -> Option<i64> {
    if result.success {
        let id = result.generated_id;
        match id {
            Some(id) => println!("{label}: inserted (id {id})"),
            None => println!("{label}: inserted"),
        }
        id
    } else {
        let message = result
            .error
            .as_ref()
            .map_or("unknown error", |e| e.message.as_str());
        println!("{label}: FAILED - {message}");
        None
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    error::install_hooks()?;

    let args = Args::parse();
    let dsn = match args.dsn {
        Some(dsn) => dsn,
        None => config::load_profile(&args.config)?.to_dsn(),
    };

    let executor = Arc::new(PsqlExecutor::with_timeout(dsn, args.timeout));
    let gateway = WriteGateway::new(executor);

    let category = gateway
        .insert_category(
            "International",
            "All news related to International Current Affairs",
        )
        .await?;
    let category_id = report("category", &category);

    let reporter = gateway.insert_reporter("Tom H", "tommy@example.com").await?;
    let reporter_id = report("reporter", &reporter);

    let publisher = gateway
        .insert_publisher(PublisherFields {
            name: "Prothom Alo".to_string(),
            email: "P_alo@prothomalo.com".to_string(),
            phone_number: "01545464513".to_string(),
            head_office_add: "Chittagong".to_string(),
            website: "www.Paloo.com".to_string(),
            facebook: "www.fb.com/palooo".to_string(),
            twitter: "www.twitter.com/palooo".to_string(),
            linkedin: "www.linkedin.com/palooo".to_string(),
            instagram: "www.instagram.com/palooo".to_string(),
        })
        .await?;
    let publisher_id = report("publisher", &publisher);

    // News rows need all three parents; images and summaries need the news
    // row. A failed parent skips its dependents but never aborts the batch.
    let news_id = match (category_id, reporter_id, publisher_id) {
        (Some(category_id), Some(reporter_id), Some(publisher_id)) => {
            let news = gateway
                .insert_news(
                    category_id,
                    reporter_id,
                    publisher_id,
                    "2024-05-03 00:00:00",
                    "News",
                    "Ronaldo wins World Cup",
                    "https://trustmebro.com/sheinews",
                )
                .await?;
            report("news", &news)
        }
        _ => {
            println!("news: skipped (missing parent row)");
            None
        }
    };

    match news_id {
        Some(news_id) => {
            let image = gateway
                .insert_image(
                    news_id,
                    "https://unsplash.com/photos/macbook-pro-on-brown-wooden-table-ygCCHPr_q2U",
                )
                .await?;
            report("image", &image);

            let summary = gateway
                .insert_summary(
                    news_id,
                    "This is the summary of Ronaldo's Career: Penalty & tap in; the end",
                )
                .await?;
            report("summary", &summary);
        }
        None => {
            println!("image: skipped (missing news row)");
            println!("summary: skipped (missing news row)");
        }
    }

    println!("Demo data seeding finished");
    Ok(())
}
