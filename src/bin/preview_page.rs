//! Render a page's localized content in every enabled locale.
//!
//! Content review helper: shows side by side what each locale's visitors
//! will see, including where a missing translation falls back to the
//! default text.
//!
//! Usage: `preview [contact|footer|blog|portfolio|careers|about]`

use anyhow::Result;
use tracing::info;

use devosoft_content::client::ApiClient;
use devosoft_content::config::Config;
use devosoft_content::i18n::{Locale, LocaleRegistry};
use devosoft_content::pages::{
    load_about_page, load_blog_page, load_careers_page, load_contact_page, load_footer,
    load_portfolio_page,
};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("devosoft_content=info".parse()?),
        )
        .init();

    let page_name = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "contact".to_string());

    let config = Config::from_env()?;
    let client = ApiClient::from_config(&config)?;

    for locale_config in LocaleRegistry::get().list_enabled() {
        let locale = Locale::from_code_or_fallback(locale_config.code);
        println!("\n===== {} ({}) =====", locale_config.native_name, locale_config.code);
        preview(&client, &page_name, locale).await;
    }

    info!("Preview of '{}' complete", page_name);
    Ok(())
}

async fn preview(client: &ApiClient, page_name: &str, locale: Locale) {
    match page_name {
        "footer" => {
            let footer = load_footer(client, locale).await;
            for line in footer.contact_lines.iter().flatten() {
                println!("  {}", line);
            }
            for service in footer.services.data() {
                println!("  service: {}", service);
            }
        }
        "blog" => {
            let page = load_blog_page(client, locale).await;
            for post in page.posts.data() {
                println!("  {} [{}]", post.title, post.tags.join(", "));
            }
        }
        "portfolio" => {
            let page = load_portfolio_page(client, locale).await;
            for project in page.projects.data() {
                println!("  {} [{}]", project.title, project.categories.join(", "));
            }
        }
        "careers" => {
            let page = load_careers_page(client, locale).await;
            for job in page.jobs.data() {
                println!("  {} - {} ({})", job.title, job.location, job.salary);
            }
        }
        "about" => {
            let page = load_about_page(client, locale).await;
            for member in page.members.data() {
                println!("  {} - {}", member.name, member.role);
            }
        }
        _ => {
            let page = load_contact_page(client, locale).await;
            for card in &page.cards {
                println!("  {}: {} ({})", card.title, card.contact, card.description);
            }
            for faq in page.faqs.data() {
                println!("  FAQ: {}", faq.title);
            }
        }
    }
}
