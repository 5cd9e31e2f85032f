//! Title, description, keywords, canonical and social tags

use crate::analysis::types::{SeoFields, SocialMetadata};
use scraper::{Html, Selector};

/// Maximum length of the reported meta description, in characters
pub const META_DESCRIPTION_LIMIT: usize = 160;

/// Extracts the SEO elements of a document
pub fn extract_seo(document: &Html, url: &str) -> SeoFields {
    SeoFields {
        title: extract_title(document),
        meta_description: extract_meta_description(document),
        keywords: extract_keywords(document),
        url: url.to_string(),
        canonical: first_attr(document, "link[rel='canonical']", "href"),
        social: extract_social(document),
    }
}

/// Extracts Open Graph title/image and Twitter card presence
pub fn extract_social(document: &Html) -> SocialMetadata {
    SocialMetadata {
        og_title: first_attr(document, "meta[property='og:title']", "content"),
        og_image: first_attr(document, "meta[property='og:image']", "content"),
        twitter_card: exists(document, "meta[name='twitter:card']"),
    }
}

fn extract_title(document: &Html) -> String {
    let Ok(selector) = Selector::parse("title") else {
        return String::new();
    };

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

fn extract_meta_description(document: &Html) -> String {
    first_attr(document, "meta[name='description']", "content")
        .map(|content| content.chars().take(META_DESCRIPTION_LIMIT).collect())
        .unwrap_or_default()
}

fn extract_keywords(document: &Html) -> String {
    let Ok(selector) = Selector::parse("meta[name='keywords']") else {
        return String::new();
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("content"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// First value of `attr` on elements matching `selector`
pub(crate) fn first_attr(document: &Html, selector: &str, attr: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .find_map(|element| element.value().attr(attr))
        .map(str::to_string)
}

pub(crate) fn exists(document: &Html, selector: &str) -> bool {
    Selector::parse(selector)
        .map(|selector| document.select(&selector).next().is_some())
        .unwrap_or(false)
}
