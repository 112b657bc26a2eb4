use std::io::{self, BufRead, Write};

use itinera_client::api::ApiClient;
use itinera_client::render::{page, RenderTargets};
use itinera_client::search::{submit, SearchInput};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "itinera_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_url =
        std::env::var("ITINERA_API_URL").unwrap_or_else(|_| "http://localhost:8000".into());
    let out_path =
        std::env::var("ITINERA_PAGE_PATH").unwrap_or_else(|_| "itinerary.html".into());

    let client = ApiClient::new(base_url);
    let mut input = SearchInput::default();
    let mut targets = RenderTargets::default();

    let stdin = io::stdin();
    prompt();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };

        input.set(&line);
        // Awaited to completion: the next search cannot start until this one
        // has rendered or failed.
        match submit(&mut input, &client, &mut targets).await {
            Ok(customer_id) => match std::fs::write(&out_path, page(&targets)) {
                Ok(()) => println!("Rendered customer {} to {}", customer_id, out_path),
                Err(err) => eprintln!("Failed to write {}: {}", out_path, err),
            },
            Err(err) => eprintln!("{}", err),
        }
        prompt();
    }
}

fn prompt() {
    print!("Customer ID> ");
    io::stdout().flush().ok();
}
