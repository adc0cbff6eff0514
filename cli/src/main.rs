use clap::Parser;
use dotenv::dotenv;

mod table;

/// Average programmer salaries in Moscow, per language, from hh.ru and
/// SuperJob.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    let _cli = Cli::parse();

    // Checked before any request goes out, so a bad key never wastes the
    // hh.ru crawl.
    let api_key = match std::env::var("SUPERJOB_KEY") {
        Ok(key) => key,
        Err(_) => {
            eprintln!("SUPERJOB_KEY is not set, no requests were made");
            return;
        }
    };

    log::info!(
        "collecting vacancy statistics for {} languages per source",
        job_stats::LANGUAGES.len()
    );
    let hh_results = job_stats::hh::client::collect_stats()
        .await
        .expect("Failed to collect hh.ru statistics");
    let superjob_results = job_stats::superjob::collect_stats(&api_key)
        .await
        .expect("Failed to collect SuperJob statistics");

    println!("{}", table::render("hh.ru Moscow", &hh_results));
    println!();
    println!("{}", table::render("SuperJob Moscow", &superjob_results));
}
