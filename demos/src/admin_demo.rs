use dotenv::dotenv;
use portfolio_client::collection::CategoryFilter;
use portfolio_client::resources::SkillField;
use portfolio_client::Portfolio;
use std::env;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let url = env::var("PORTFOLIO_API_URL").expect("PORTFOLIO_API_URL must be set");
    let email = env::var("PORTFOLIO_ADMIN_EMAIL").expect("PORTFOLIO_ADMIN_EMAIL must be set");
    let password =
        env::var("PORTFOLIO_ADMIN_PASSWORD").expect("PORTFOLIO_ADMIN_PASSWORD must be set");

    let portfolio = Portfolio::new(&url);

    println!("Starting admin demo");

    // Sign in through the admin gate
    println!("Signing in as {}", email);
    let session = portfolio.auth().sign_in(&email, &password).await?;
    println!("Signed in at {}", session.signed_in_at());

    let admin = portfolio.admin(&session);

    // Load the skills collection
    let mut skills = admin.skills();
    skills.load().await?;

    println!("\n{} skills on file:", skills.records().len());
    for skill in skills.view() {
        println!(
            "  {} [{}]: {}",
            skill.name,
            skill.category.as_str(),
            skill.desc
        );
    }

    // Narrow the view without refetching
    skills.search("re");
    skills.filter_by_category(CategoryFilter::only("frontend"));

    println!("\nFrontend skills matching \"re\":");
    for skill in skills.view() {
        println!("  {}", skill.name);
    }

    // Flip the sort on the active field
    skills.search("");
    skills.filter_by_category(CategoryFilter::All);
    skills.sort(SkillField::Name);

    println!("\nSkills, descending:");
    for skill in skills.view() {
        println!("  {}", skill.name);
    }

    // Check the inbox
    let mut messages = admin.messages();
    messages.load().await?;

    println!("\n{} messages in the inbox:", messages.records().len());
    for message in messages.view() {
        println!(
            "  {} <{}> at {}: {}",
            message.name, message.email, message.submitted_at, message.message
        );
    }

    println!("\nAdmin demo completed");

    Ok(())
}
