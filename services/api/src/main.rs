use feedsieve_api::run;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("feedsieve error: {err}");
        std::process::exit(1);
    }
}
