use dotenv::dotenv;
use portfolio_client::Portfolio;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    // Needs PORTFOLIO_API_URL, MEDIA_STORAGE_URL and MEDIA_STORAGE_KEY
    let portfolio = Portfolio::from_env()?;

    println!("Starting media upload demo");

    // A 1x1 pixel PNG
    let image: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48,
        0x44, 0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00,
        0x00, 0x1F, 0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x08,
        0xD7, 0x63, 0x60, 0x00, 0x00, 0x00, 0x02, 0x00, 0x01, 0xE2, 0x21, 0xBC, 0x33, 0x00,
        0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ];

    println!("Uploading pixel.png ({} bytes)", image.len());
    let url = portfolio.media()?.upload("pixel.png", image.to_vec()).await?;

    println!("Uploaded: {}", url);

    Ok(())
}
