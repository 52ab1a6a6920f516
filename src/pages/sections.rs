//! Building blocks shared by several pages.
//!
//! Image slots follow one rule: an empty URL renders a placeholder block,
//! never an `<img>` with an empty `src`. Background slots simply omit the
//! `background-image` style.

use crate::shell::wave;
use maud::{Markup, html};

/// Inline style for a background image. The URL is quoted so proxy URLs
/// containing `(` or `)` stay intact.
pub fn background_image(url: &str) -> String {
    format!("background-image: url(\"{url}\")")
}

/// `style` attribute value for an optional background, `None` when unset.
pub fn background_style(url: &str) -> Option<String> {
    (!url.is_empty()).then(|| background_image(url))
}

/// An image slot, or a placeholder when no image is configured.
pub fn photo(url: &str, alt: &str) -> Markup {
    html! {
        @if url.is_empty() {
            div.image-placeholder role="img" aria-label=(alt) {}
        } @else {
            img.photo src=(url) alt=(alt) loading="lazy";
        }
    }
}

/// Full-width hero with an optional background image under a dark overlay.
pub fn hero(background: &str, tall: bool, content: Markup) -> Markup {
    html! {
        section.hero.hero-tall[tall] style=[background_style(background)] {
            div.overlay {}
            div.container.hero-content {
                (content)
            }
            (wave("var(--color-bg)", false))
        }
    }
}

/// Heading text followed by a highlighted tail, e.g. "Nivel **Primaria**".
pub fn accented(lead: &str, accent: &str) -> Markup {
    html! {
        (lead) " " span.accent { (accent) }
    }
}

/// Pill label shown above hero titles.
pub fn eyebrow(text: &str) -> Markup {
    html! {
        span.eyebrow { (text) }
    }
}

/// Bulleted list with check marks.
pub fn check_list(items: &[&str]) -> Markup {
    html! {
        ul.check-list {
            @for item in items {
                li { span.check aria-hidden="true" { "✔" } (item) }
            }
        }
    }
}

/// Embedded YouTube video in a 16:9 frame.
pub fn video(src: &str, title: &str) -> Markup {
    html! {
        div.video-frame {
            iframe src=(src) title=(title)
                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                allowfullscreen {}
        }
    }
}

/// Horizontally scrolling row of image cards, one per key.
pub fn gallery(urls: &[String], alt: &str) -> Markup {
    html! {
        div.carousel {
            @for url in urls {
                div.carousel-card {
                    (photo(url, alt))
                }
            }
        }
    }
}

/// Grid of icon + title + description tiles.
pub fn feature_grid(items: &[(&str, &str, &str)]) -> Markup {
    html! {
        div.feature-grid {
            @for (icon, title, desc) in items {
                article.feature {
                    span.feature-icon aria-hidden="true" { (icon) }
                    h3 { (title) }
                    @if !desc.is_empty() {
                        p { (desc) }
                    }
                }
            }
        }
    }
}
