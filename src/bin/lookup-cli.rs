use clap::Parser;
use lookup_proxy::client::{LookupClient, ResultView};

#[derive(Parser)]
#[command(name = "lookup-cli")]
#[command(about = "Look a name up through the lookup proxy", long_about = None)]
struct Cli {
    /// Base URL of the proxy.
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    /// Name to look up.
    name: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = LookupClient::new(&cli.url)?;

    let mut view = ResultView::new();
    client.search(&cli.name, &mut view).await;

    if view.is_error() {
        eprintln!("{}", view);
        std::process::exit(1);
    }

    println!("{}", view);
    Ok(())
}
