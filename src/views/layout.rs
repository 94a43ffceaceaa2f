use axum::response::Html;
use std::fmt::Write;
use url::Url;

use super::{attr, text};
use crate::api::flash::FlashMessage;

/// Which search box the page header carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTarget {
    Venues,
    Artists,
}

impl SearchTarget {
    #[must_use]
    pub const fn action(self) -> &'static str {
        match self {
            Self::Venues => "/venues/search",
            Self::Artists => "/artists/search",
        }
    }

    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Venues => "venues",
            Self::Artists => "artists",
        }
    }

    /// Detail page path for a result id.
    #[must_use]
    pub fn link(self, id: i32) -> String {
        format!("/{}/{id}", self.noun())
    }
}

pub struct Page<'a> {
    pub title: &'a str,
    pub flashes: &'a [FlashMessage],
    pub search: Option<SearchTarget>,
}

impl<'a> Page<'a> {
    #[must_use]
    pub const fn new(title: &'a str, flashes: &'a [FlashMessage]) -> Self {
        Self {
            title,
            flashes,
            search: None,
        }
    }

    #[must_use]
    pub const fn with_search(mut self, target: SearchTarget) -> Self {
        self.search = Some(target);
        self
    }

    #[must_use]
    pub fn render(&self, body: &str) -> Html<String> {
        let mut flashes = String::new();
        for flash in self.flashes {
            let _ = write!(
                flashes,
                r#"<div class="alert alert-{}" role="alert">{}</div>"#,
                flash.level.as_str(),
                text(&flash.message)
            );
        }

        let search = self.search.map_or_else(String::new, |target| {
            format!(
                r#"<form class="search" method="post" action="{action}">
        <input name="search_term" type="search" placeholder="Find {noun}" aria-label="Search {noun}">
      </form>"#,
                action = target.action(),
                noun = target.noun()
            )
        });

        Html(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title} | Fyyur</title>
  <style>
    body {{ font-family: system-ui, -apple-system, sans-serif; margin: 0; color: #222; }}
    header {{ display: flex; gap: 20px; align-items: center; padding: 12px 24px; background: #1d1d28; }}
    header a {{ color: #eee; text-decoration: none; }}
    header .brand {{ font-weight: 700; font-size: 20px; }}
    main {{ max-width: 960px; margin: 24px auto; padding: 0 16px; }}
    .alert {{ padding: 10px 14px; border-radius: 4px; margin-bottom: 12px; }}
    .alert-success {{ background: #dff0d8; color: #2b542c; }}
    .alert-danger {{ background: #f2dede; color: #a94442; }}
    .items {{ list-style: none; padding: 0; }}
    .items li {{ padding: 8px 0; border-bottom: 1px solid #eee; }}
    .genres span {{ display: inline-block; background: #eef; border-radius: 10px; padding: 2px 10px; margin-right: 4px; }}
    .error {{ color: #a94442; font-size: 13px; }}
    label {{ display: block; margin-top: 12px; }}
  </style>
</head>
<body>
  <header>
    <a class="brand" href="/">🔥 Fyyur</a>
    <a href="/venues">Venues</a>
    <a href="/artists">Artists</a>
    <a href="/shows">Shows</a>
    {search}
  </header>
  <main>
    {flashes}
    {body}
  </main>
</body>
</html>
"#,
            title = attr(self.title),
        ))
    }
}

/// Renders an optional link, or nothing when absent. Only http(s) targets
/// become links.
pub(crate) fn maybe_link(label: &str, href: Option<&str>) -> String {
    href.filter(|href| is_web_url(href)).map_or_else(String::new, |href| {
        format!(
            r#"<p><a href="{}" target="_blank" rel="noopener">{}</a></p>"#,
            attr(href),
            text(label)
        )
    })
}

fn is_web_url(href: &str) -> bool {
    Url::parse(href.trim()).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

pub(crate) fn genre_tags(genres: &[String]) -> String {
    let mut html = String::from(r#"<div class="genres">"#);
    for genre in genres {
        let _ = write!(html, "<span>{}</span>", text(genre));
    }
    html.push_str("</div>");
    html
}

pub(crate) fn image(src: Option<&str>, alt: &str) -> String {
    src.map_or_else(String::new, |src| {
        format!(
            r#"<img src="{}" alt="{}" width="300">"#,
            attr(src),
            attr(alt)
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maybe_link_only_renders_web_urls() {
        let link = maybe_link("Website", Some("https://www.themusicalhop.com"));
        assert!(link.contains(r#"href="https://www.themusicalhop.com""#));

        assert!(maybe_link("Website", Some("javascript:alert(1)")).is_empty());
        assert!(maybe_link("Facebook", Some(" JavaScript:alert(1)")).is_empty());
        assert!(maybe_link("Website", Some("www.example.com")).is_empty());
        assert!(maybe_link("Website", None).is_empty());
    }
}
