use anyhow::Result;
use tracing::info;

use devosoft_content::client::ApiClient;
use devosoft_content::config::Config;
use devosoft_content::i18n::{strings_for, Locale};
use devosoft_content::pages::load_contact_page;
use devosoft_content::view::FetchScope;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("devosoft_content=info".parse()?),
        )
        .init();

    info!("Starting contact page fetch");

    // Load configuration from environment
    let config = Config::from_env()?;

    // Locale: first CLI argument, else the configured default; unknown
    // codes degrade to the fallback locale
    let code = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.default_locale.clone());
    let locale = Locale::from_code_or_fallback(&code);
    info!("Rendering in {} ({})", locale.name(), locale.code());

    let client = ApiClient::from_config(&config)?;

    // Fetch inside a scope so an early exit aborts anything in flight
    let mut scope = FetchScope::new();
    let fetch = {
        let client = client.clone();
        scope.spawn(async move { load_contact_page(&client, locale).await })
    };

    let Some(page) = fetch.join().await else {
        anyhow::bail!("Contact page fetch was cancelled");
    };

    if page.fields_failed {
        info!("{}", strings_for(locale).content_unavailable);
    }

    println!("Contact cards:");
    for card in &page.cards {
        println!("  [{}] {}: {} ({})", card.icon, card.title, card.contact, card.description);
    }

    println!("\nFAQ ({} entries):", page.faqs.data().len());
    for faq in page.faqs.data() {
        println!("  {}\n    {}", faq.title, faq.description);
    }

    println!("\nServices:");
    for service in page.services.data() {
        println!("  {} ({})", service.title, service.id);
    }

    info!("Contact page rendered");
    Ok(())
}
