use clap::{Parser, Subcommand};
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;

/// Staff cli for the billing service
#[derive(Parser, Debug)]
#[command(name = "billing")]
#[command(about = "client cli used by restaurant staffs to interact with the billing service", version, long_about = None
)]
struct Cli {
    #[arg(long, env = "BILLING_HOST", default_value = "http://localhost:8080")]
    host: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// register plates delivered to a guest
    #[command(arg_required_else_help = true)]
    Deliver {
        #[arg(short = 'g', long, help = "Guest id")]
        guest: i64,
        #[arg(short = 'o', long, help = "Order id")]
        order: i64,
        #[arg(long, help = "Delivered food ids.", value_name = "MENU_ITEM_IDs", num_args = 1..)]
        food: Vec<i64>,
        #[arg(long, help = "Delivered drink ids.", value_name = "MENU_ITEM_IDs", num_args = 1..)]
        drinks: Vec<i64>,
    },
    /// show delivered but unpaid items of a guest
    #[command(arg_required_else_help = true)]
    Ledger { guest: i64 },
    /// generate the bill of a guest
    #[command(arg_required_else_help = true)]
    Bill { guest: i64 },
    /// pay a bill
    #[command(arg_required_else_help = true)]
    Pay {
        #[arg(value_parser = clap::value_parser!(i64).range(1..))]
        bill: i64,
    },
    /// list payment methods for an amount
    #[command(arg_required_else_help = true)]
    Options { amount: f64 },
}

async fn print_response(res: Response) -> Result<(), anyhow::Error> {
    match res.status() {
        StatusCode::OK => {
            let body = res.text().await?;
            if body.is_empty() {
                println!("ok");
            } else {
                let json: Value = serde_json::from_str(&body)?;
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
        }
        StatusCode::NOT_FOUND => {
            println!("Resource not found");
        }
        StatusCode::SERVICE_UNAVAILABLE => {
            println!("Menu is not loaded yet, try again later");
        }
        unexpected => {
            println!("got unexpected status code, {}, {}", unexpected, res.text().await?);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Cli::parse();
    let host = args.host.trim_end_matches('/');
    let client = Client::new();

    let res = match args.command {
        Commands::Deliver { guest, order, food, drinks } => {
            println!("registering delivery for guest={} order={}", guest, order);
            client
                .post(format!("{}/v1/deliveries", host))
                .json(&serde_json::json!({
                    "guest": guest,
                    "order": order,
                    "food": food,
                    "drinks": drinks,
                }))
                .send()
                .await?
        }
        Commands::Ledger { guest } => {
            client
                .get(format!("{}/v1/guests/{}/ledger", host, guest))
                .send()
                .await?
        }
        Commands::Bill { guest } => {
            println!("generating bill for guest={}", guest);
            client
                .post(format!("{}/v1/guests/{}/bill", host, guest))
                .send()
                .await?
        }
        Commands::Pay { bill } => {
            println!("paying bill={}", bill);
            client
                .post(format!("{}/v1/bills/{}/payment", host, bill))
                .send()
                .await?
        }
        Commands::Options { amount } => {
            client
                .get(format!("{}/v1/payment-options", host))
                .query(&[("amount", amount)])
                .send()
                .await?
        }
    };
    print_response(res).await
}
