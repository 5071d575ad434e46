use std::{env, error::Error, fs::File, io::BufReader};

use fitplan_model::profile::Profile;
use log::info;

const DEFAULT_URL: &str = "http://localhost:5001/predict";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    log4rs::init_file("log4rs.yml", Default::default())?;

    let path = env::args().nth(1).unwrap_or_else(|| "profile.json".to_owned());
    let url = env::var("FITPLAN_URL").unwrap_or_else(|_| DEFAULT_URL.to_owned());

    info!("Loading profile from {}", path);
    let file = File::open(&path)?;
    let profile: Profile = serde_json::from_reader(BufReader::new(file))?;

    let client = fitplan_client::create(url);
    println!("{}", fitplan_client::request_summary(&client, &profile).await?);

    Ok(())
}
