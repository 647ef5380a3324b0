use dotenv::dotenv;
use portfolio_client::resources::MessageDraft;
use portfolio_client::Portfolio;
use std::env;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let url = env::var("PORTFOLIO_API_URL").expect("PORTFOLIO_API_URL must be set");
    let portfolio = Portfolio::new(&url);

    println!("Starting contact form demo");

    let draft = MessageDraft {
        name: "Demo Visitor".to_string(),
        email: "visitor@example.com".to_string(),
        message: "Sent from the contact form demo.".to_string(),
        phone: None,
    };

    println!("Submitting a message from {}", draft.email);
    portfolio.contact().send(&draft).await?;

    println!("Message submitted successfully");

    Ok(())
}
