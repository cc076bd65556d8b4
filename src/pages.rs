//! Page view models: localized, display-ready projections of API content.
//!
//! Each page fetches its slices concurrently, converts every result into a
//! `FetchState` independently (one failing endpoint never blanks the rest of
//! the page), and resolves all text against the locale passed in. Locale is
//! always an explicit parameter; re-invoking a loader with a different
//! locale is how a mid-session language switch takes effect.

use futures::join;

use crate::client::{endpoints, ApiClient};
use crate::i18n::Locale;
use crate::merge::{default_contact_slots, merge_slots, MergedCard};
use crate::record::LocalizedRecord;
use crate::view::{into_state, FetchState};

/// Index of the first contact card entry in the sorted `fields/` collection.
///
/// The backend keys nothing here; the admin panel's insertion order is the
/// only thing that puts the contact values at this position. Known
/// fragility: reordering fields server-side shifts the cards.
pub const CONTACT_FIELDS_OFFSET: usize = 16;

/// Number of single-value contact lines the footer takes from `fields/`,
/// starting at [`CONTACT_FIELDS_OFFSET`]: email, phone, address.
pub const FOOTER_CONTACT_LINES: usize = 3;

/// Category filter value meaning "no filter".
pub const ALL_CATEGORIES: &str = "All";

// ==================== Contact ====================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqItem {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOption {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactPage {
    /// The four contact cards, static defaults overlaid with field records
    pub cards: Vec<MergedCard>,
    pub faqs: FetchState<Vec<FaqItem>>,
    /// Options for the contact form's service selector
    pub services: FetchState<Vec<ServiceOption>>,
    /// Whether the fields fetch failed and the cards are purely static
    pub fields_failed: bool,
}

pub async fn load_contact_page(client: &ApiClient, locale: Locale) -> ContactPage {
    let (fields, faqs, services) = join!(client.fields(), client.faqs(), client.services());

    build_contact_page(
        into_state(endpoints::FIELDS, fields),
        into_state(endpoints::FAQS, faqs),
        into_state(endpoints::SERVICES, services),
        locale,
    )
}

fn build_contact_page(
    fields: FetchState<Vec<LocalizedRecord>>,
    faqs: FetchState<Vec<LocalizedRecord>>,
    services: FetchState<Vec<LocalizedRecord>>,
    locale: Locale,
) -> ContactPage {
    let slots = default_contact_slots(locale);
    let card_records = contact_field_records(fields.data());
    let cards = merge_slots(&slots, card_records, locale);

    let faqs = map_loaded(faqs, |records| {
        records
            .iter()
            .map(|record| FaqItem {
                title: resolved_or_empty(record, locale, "title"),
                description: resolved_or_empty(record, locale, "description"),
            })
            .collect()
    });

    let services = map_loaded(services, |records| {
        records
            .iter()
            .filter_map(|record| {
                Some(ServiceOption {
                    id: record.id()?,
                    title: resolved_or_empty(record, locale, "title"),
                })
            })
            .collect()
    });

    ContactPage {
        cards,
        faqs,
        services,
        fields_failed: fields.is_failed(),
    }
}

/// The slice of sorted field records the contact cards merge against.
fn contact_field_records(fields: &[LocalizedRecord]) -> &[LocalizedRecord] {
    fields.get(CONTACT_FIELDS_OFFSET..).unwrap_or(&[])
}

// ==================== Footer ====================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    /// Localized titles of the service links
    pub services: FetchState<Vec<String>>,
    /// Email, phone and address lines from the fields collection; `None`
    /// where the record is missing or carries no text
    pub contact_lines: Vec<Option<String>>,
}

pub async fn load_footer(client: &ApiClient, locale: Locale) -> Footer {
    let (fields, services) = join!(client.fields(), client.services());

    build_footer(
        into_state(endpoints::FIELDS, fields),
        into_state(endpoints::SERVICES, services),
        locale,
    )
}

fn build_footer(
    fields: FetchState<Vec<LocalizedRecord>>,
    services: FetchState<Vec<LocalizedRecord>>,
    locale: Locale,
) -> Footer {
    let contact_lines = (0..FOOTER_CONTACT_LINES)
        .map(|line| {
            fields
                .data()
                .get(CONTACT_FIELDS_OFFSET + line)
                .and_then(|record| record.resolve(locale, "value"))
                .filter(|text| !text.is_empty())
                .map(str::to_string)
        })
        .collect();

    let services = map_loaded(services, |records| {
        records
            .iter()
            .map(|record| resolved_or_empty(record, locale, "title"))
            .collect()
    });

    Footer {
        services,
        contact_lines,
    }
}

// ==================== Blog ====================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub context: String,
    pub tags: Vec<String>,
    pub estimated_read_time: Option<u64>,
    pub featured: bool,
    pub posted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPage {
    pub posts: FetchState<Vec<BlogPost>>,
}

pub async fn load_blog_page(client: &ApiClient, locale: Locale) -> BlogPage {
    let posts = client.posts().await;
    build_blog_page(into_state(endpoints::POSTS, posts), locale)
}

fn build_blog_page(posts: FetchState<Vec<LocalizedRecord>>, locale: Locale) -> BlogPage {
    let posts = map_loaded(posts, |records| {
        records
            .iter()
            .filter_map(|record| {
                Some(BlogPost {
                    id: record.id()?,
                    title: resolved_or_empty(record, locale, "title"),
                    context: resolved_or_empty(record, locale, "context"),
                    tags: child_titles(record, "tags", locale),
                    estimated_read_time: record.number("estimated_read_time"),
                    featured: record.flag("featured"),
                    posted: record.flag("posted"),
                })
            })
            .collect()
    });

    BlogPage { posts }
}

/// Unique tag titles across posts, for the filter bar.
pub fn tag_filters(posts: &[BlogPost]) -> Vec<String> {
    let mut filters: Vec<String> = Vec::new();
    for post in posts {
        for tag in &post.tags {
            if !filters.contains(tag) {
                filters.push(tag.clone());
            }
        }
    }
    filters
}

/// Posts carrying the given tag title.
pub fn filter_posts_by_tag<'a>(posts: &'a [BlogPost], tag: &str) -> Vec<&'a BlogPost> {
    posts
        .iter()
        .filter(|post| post.tags.iter().any(|t| t == tag))
        .collect()
}

// ==================== Portfolio ====================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub categories: Vec<String>,
    pub technologies: Vec<String>,
    pub key_challenges: String,
    pub results_impact: String,
    pub live_demo_url: Option<String>,
    pub code_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioPage {
    pub projects: FetchState<Vec<ProjectItem>>,
}

pub async fn load_portfolio_page(client: &ApiClient, locale: Locale) -> PortfolioPage {
    let projects = client.projects().await;
    build_portfolio_page(into_state(endpoints::PROJECTS, projects), locale)
}

fn build_portfolio_page(
    projects: FetchState<Vec<LocalizedRecord>>,
    locale: Locale,
) -> PortfolioPage {
    let projects = map_loaded(projects, |records| {
        records
            .iter()
            .filter_map(|record| {
                Some(ProjectItem {
                    id: record.id()?,
                    title: resolved_or_empty(record, locale, "title"),
                    description: resolved_or_empty(record, locale, "description"),
                    categories: child_titles(record, "categories", locale),
                    technologies: child_titles(record, "technologies", locale),
                    key_challenges: resolved_or_empty(record, locale, "key_challenges"),
                    results_impact: resolved_or_empty(record, locale, "results_impact"),
                    live_demo_url: record.text("live_demo_url").map(str::to_string),
                    code_url: record.text("code_url").map(str::to_string),
                })
            })
            .collect()
    });

    PortfolioPage { projects }
}

/// `"All"` plus the unique localized category titles, in first-seen order.
pub fn category_filters(projects: &[ProjectItem]) -> Vec<String> {
    let mut filters = vec![ALL_CATEGORIES.to_string()];
    for project in projects {
        for category in &project.categories {
            if !filters.contains(category) {
                filters.push(category.clone());
            }
        }
    }
    filters
}

/// Projects in the given category; `"All"` passes everything through.
pub fn filter_projects_by_category<'a>(
    projects: &'a [ProjectItem],
    category: &str,
) -> Vec<&'a ProjectItem> {
    projects
        .iter()
        .filter(|project| {
            category == ALL_CATEGORIES || project.categories.iter().any(|c| c == category)
        })
        .collect()
}

// ==================== Careers ====================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobItem {
    pub id: String,
    pub title: String,
    pub location: String,
    pub salary: String,
    pub experience: String,
    pub description: String,
    pub skills: Vec<String>,
    pub employment: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareersPage {
    pub jobs: FetchState<Vec<JobItem>>,
}

pub async fn load_careers_page(client: &ApiClient, locale: Locale) -> CareersPage {
    let jobs = client.jobs().await;
    build_careers_page(into_state(endpoints::JOBS, jobs), locale)
}

fn build_careers_page(jobs: FetchState<Vec<LocalizedRecord>>, locale: Locale) -> CareersPage {
    let jobs = map_loaded(jobs, |records| {
        records
            .iter()
            .filter_map(|record| {
                Some(JobItem {
                    id: record.id()?,
                    title: resolved_or_empty(record, locale, "title"),
                    location: resolved_or_empty(record, locale, "location"),
                    salary: record.text("salary").unwrap_or_default().to_string(),
                    experience: record.text("experience").unwrap_or_default().to_string(),
                    description: resolved_or_empty(record, locale, "description"),
                    skills: child_names(record, "skills", locale),
                    employment: child_titles(record, "employment", locale),
                })
            })
            .collect()
    });

    CareersPage { jobs }
}

// ==================== About ====================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberItem {
    pub name: String,
    pub role: String,
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackItem {
    pub name: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutPage {
    pub members: FetchState<Vec<MemberItem>>,
    pub feedbacks: FetchState<Vec<FeedbackItem>>,
}

pub async fn load_about_page(client: &ApiClient, locale: Locale) -> AboutPage {
    let (members, feedbacks) = join!(client.members(), client.feedbacks());

    build_about_page(
        into_state(endpoints::MEMBERS, members),
        into_state(endpoints::FEEDBACKS, feedbacks),
        locale,
    )
}

fn build_about_page(
    members: FetchState<Vec<LocalizedRecord>>,
    feedbacks: FetchState<Vec<LocalizedRecord>>,
    locale: Locale,
) -> AboutPage {
    let members = map_loaded(members, |records| {
        records
            .iter()
            .map(|record| MemberItem {
                name: record.text("name").unwrap_or_default().to_string(),
                role: resolved_or_empty(record, locale, "role"),
                bio: resolved_or_empty(record, locale, "bio"),
            })
            .collect()
    });

    let feedbacks = map_loaded(feedbacks, |records| {
        records
            .iter()
            .map(|record| FeedbackItem {
                name: record.text("name").unwrap_or_default().to_string(),
                text: resolved_or_empty(record, locale, "text"),
            })
            .collect()
    });

    AboutPage { members, feedbacks }
}

// ==================== Helpers ====================

fn resolved_or_empty(record: &LocalizedRecord, locale: Locale, base: &str) -> String {
    record.resolve(locale, base).unwrap_or_default().to_string()
}

fn child_titles(record: &LocalizedRecord, key: &str, locale: Locale) -> Vec<String> {
    record
        .children(key)
        .iter()
        .map(|child| resolved_or_empty(child, locale, "title"))
        .collect()
}

fn child_names(record: &LocalizedRecord, key: &str, locale: Locale) -> Vec<String> {
    record
        .children(key)
        .iter()
        .map(|child| resolved_or_empty(child, locale, "name"))
        .collect()
}

fn map_loaded<T, U, F>(state: FetchState<T>, project: F) -> FetchState<U>
where
    F: FnOnce(&T) -> U,
{
    match state {
        FetchState::Loading => FetchState::Loading,
        FetchState::Failed => FetchState::Failed,
        FetchState::Loaded(data) => FetchState::Loaded(project(&data)),
    }
}
