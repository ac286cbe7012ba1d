use url::Url;

use crate::domain::site::{self, Link};
use crate::presentation::views::{
    BrandView, FooterView, LayoutChrome, NavigationLinkView, NavigationView, PageMetaView,
};

const META_TITLE: &str = "Suncrest Finance";
const META_DESCRIPTION: &str = "Expert financial consulting for individuals and businesses: \
                                investment planning, tax, insurance and retirement advice.";
const BLOG_DETAIL_PREFIX: &str = "/blog/";

#[derive(Clone)]
pub struct ChromeService {
    public_url: Url,
}

impl ChromeService {
    pub fn new(public_url: Url) -> Self {
        Self { public_url }
    }

    /// Shared layout for a page served at `path`, with the matching navigation entry active.
    pub fn load(&self, path: &str) -> LayoutChrome {
        let entries = site::NAVIGATION
            .iter()
            .map(|link| link_view(link, path))
            .collect();

        let footer = &site::FOOTER;
        LayoutChrome {
            brand: BrandView {
                title: site::SITE_NAME.to_string(),
                tagline: site::SITE_TAGLINE.to_string(),
                href: "/".to_string(),
            },
            navigation: NavigationView {
                entries,
                cta: link_view(&site::NAV_CTA, ""),
            },
            footer: FooterView {
                about: footer.about.to_string(),
                quick_links: footer.quick_links.iter().map(|l| link_view(l, "")).collect(),
                service_links: footer
                    .service_links
                    .iter()
                    .map(|l| link_view(l, ""))
                    .collect(),
                socials: footer.socials,
                address_lines: footer.address_lines,
                phone: footer.phone.to_string(),
                email: footer.email.to_string(),
                legal_links: footer.legal_links,
                copy: site::COPYRIGHT.to_string(),
            },
            meta: PageMetaView {
                title: META_TITLE.to_string(),
                description: META_DESCRIPTION.to_string(),
                canonical: String::new(),
            },
        }
        .with_canonical(self.canonical_url(path))
    }

    pub fn canonical_url(&self, path: &str) -> String {
        self.public_url
            .join(path.trim_start_matches('/'))
            .map(String::from)
            .unwrap_or_else(|_| self.public_url.to_string())
    }
}

fn link_view(link: &Link, path: &str) -> NavigationLinkView {
    NavigationLinkView {
        label: link.label.to_string(),
        href: link.href.to_string(),
        is_active: is_active(link.href, path),
    }
}

fn is_active(href: &str, path: &str) -> bool {
    if path.is_empty() {
        return false;
    }
    if href == "/" {
        return path == "/";
    }
    if href == "/blogs" && path.starts_with(BLOG_DETAIL_PREFIX) {
        return true;
    }
    path == href
        || path
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ChromeService {
        ChromeService::new(Url::parse("https://suncrest.example/").expect("url"))
    }

    fn active_labels(chrome: &LayoutChrome) -> Vec<String> {
        chrome
            .navigation
            .entries
            .iter()
            .filter(|entry| entry.is_active)
            .map(|entry| entry.label.clone())
            .collect()
    }

    #[test]
    fn home_is_only_active_on_root() {
        let chrome = service().load("/");
        assert_eq!(active_labels(&chrome), ["Home"]);

        let chrome = service().load("/services");
        assert_eq!(active_labels(&chrome), ["Services"]);
    }

    #[test]
    fn blog_detail_highlights_blogs() {
        let chrome = service().load("/blog/goal-based-investing");
        assert_eq!(active_labels(&chrome), ["Blogs"]);
    }

    #[test]
    fn canonical_url_joins_public_url() {
        let chrome = service().load("/about");
        assert_eq!(chrome.meta.canonical, "https://suncrest.example/about");
    }

    #[test]
    fn footer_lists_every_service() {
        let chrome = service().load("/");
        assert_eq!(chrome.footer.service_links.len(), site::SERVICES.len());
        assert!(chrome.footer.quick_links.iter().all(|link| !link.is_active));
    }
}
