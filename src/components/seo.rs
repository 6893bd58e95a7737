//! Per-page document head management: title, meta tags, canonical link and
//! structured data. Rendered once per page, renders nothing itself.

use serde_json::json;
use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct SeoProps {
    pub title: String,
    pub description: String,
    #[prop_or_default]
    pub keywords: String,
    #[prop_or(String::from("/"))]
    pub path: String,
    #[prop_or(String::from("website"))]
    pub og_type: String,
}

#[function_component(SeoTags)]
pub fn seo_tags(props: &SeoProps) -> Html {
    let deps = (
        props.title.clone(),
        props.description.clone(),
        props.keywords.clone(),
        props.path.clone(),
        props.og_type.clone(),
    );

    use_effect_with_deps(
        move |(title, description, keywords, path, og_type): &(
            String,
            String,
            String,
            String,
            String,
        )| {
            let document = web_sys::window().unwrap().document().unwrap();
            document.set_title(title);

            let canonical = format!("{}{}", config::get_site_url(), path);

            set_meta(&document, "name", "description", description);
            if !keywords.is_empty() {
                set_meta(&document, "name", "keywords", keywords);
            }
            set_meta(&document, "name", "robots", "index, follow");
            set_meta(&document, "property", "og:title", title);
            set_meta(&document, "property", "og:description", description);
            set_meta(&document, "property", "og:type", og_type);
            set_meta(&document, "property", "og:url", &canonical);
            set_meta(&document, "property", "og:site_name", config::SITE_NAME);
            set_meta(&document, "name", "twitter:card", "summary_large_image");
            set_meta(&document, "name", "twitter:title", title);
            set_meta(&document, "name", "twitter:description", description);
            set_canonical(&document, &canonical);
            set_structured_data(&document, description, &canonical);

            || ()
        },
        deps,
    );

    html! {}
}

fn set_meta(document: &web_sys::Document, attr: &str, key: &str, content: &str) {
    let selector = format!("meta[{}='{}']", attr, key);
    let tag = match document.query_selector(&selector).ok().flatten() {
        Some(tag) => tag,
        None => {
            let tag = document.create_element("meta").unwrap();
            let _ = tag.set_attribute(attr, key);
            if let Some(head) = document.head() {
                let _ = head.append_child(&tag);
            }
            tag
        }
    };
    let _ = tag.set_attribute("content", content);
}

fn set_canonical(document: &web_sys::Document, href: &str) {
    let link = match document.query_selector("link[rel='canonical']").ok().flatten() {
        Some(link) => link,
        None => {
            let link = document.create_element("link").unwrap();
            let _ = link.set_attribute("rel", "canonical");
            if let Some(head) = document.head() {
                let _ = head.append_child(&link);
            }
            link
        }
    };
    let _ = link.set_attribute("href", href);
}

fn set_structured_data(document: &web_sys::Document, description: &str, url: &str) {
    let data = json!({
        "@context": "https://schema.org",
        "@type": "ProfessionalService",
        "name": config::SITE_NAME,
        "description": description,
        "url": url,
        "telephone": config::CONTACT_PHONE,
        "email": config::CONTACT_EMAIL,
        "address": config::CONTACT_ADDRESS,
    });
    let script = match document
        .query_selector("script[type='application/ld+json']")
        .ok()
        .flatten()
    {
        Some(script) => script,
        None => {
            let script = document.create_element("script").unwrap();
            let _ = script.set_attribute("type", "application/ld+json");
            if let Some(head) = document.head() {
                let _ = head.append_child(&script);
            }
            script
        }
    };
    script.set_text_content(Some(&data.to_string()));
}
