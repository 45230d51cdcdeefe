use std::env;

use chefkoch_extract::{fetch_detail, fetch_summaries};

const USAGE: &str = "Usage: chefkoch-extract <searchterm> [page] | --detail <url>";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("--detail") => {
            let url = args.get(2).ok_or(USAGE)?;
            let detail = fetch_detail(url)?;
            println!("{}", serde_json::to_string(&detail)?);
        }
        Some(term) => {
            let page = args.get(2).map(String::as_str).unwrap_or("0");
            let summaries = fetch_summaries(term, page)?;
            println!("{}", serde_json::to_string(&summaries)?);
        }
        None => return Err(USAGE.into()),
    }

    Ok(())
}
