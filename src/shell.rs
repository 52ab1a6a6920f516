//! Document skeleton and navigation chrome shared by every page.

use crate::router::{ADMIN_PATH, Route};
use maud::{DOCTYPE, Markup, html};

pub const PHONE_NUMBERS: [&str; 2] = ["960 119 354", "943 794 727"];
pub const WHATSAPP_URL: &str = "https://api.whatsapp.com/send?phone=51960119354";
pub const ADDRESS: &str = "Jr. Simón Bolívar N° 150 – Pilcomayo";

/// Stylesheet and script locations, relative to the site root.
#[derive(Debug, Clone)]
pub struct Assets {
    pub stylesheet: String,
    pub script: String,
}

/// Renders the base HTML document structure
pub fn base_document(
    title: &str,
    lang: &str,
    assets: &Assets,
    route: Route,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href={ "/" (assets.stylesheet) };
                script src={ "/" (assets.script) } defer {}
            }
            body {
                (site_header(route))
                div.page-offset {
                    (content)
                }
                (site_footer())
            }
        }
    }
}

/// Fixed header: logo, route pills with the current one highlighted, admin link.
pub fn site_header(current: Route) -> Markup {
    html! {
        header.site-header {
            div.container.header-row {
                a.brand href="/" {
                    img.brand-logo src="/logo-catolica.jpg" alt="La Católica GEM";
                    span.brand-text {
                        span.brand-name { "La Católica GEM" }
                        span.brand-tagline { "Colegio & Academia" }
                    }
                }
                nav.site-nav {
                    @for route in Route::ALL {
                        @let active = route == current;
                        a.nav-pill.active[active]
                            href=(route.path())
                            aria-current=[active.then_some("page")] {
                            (route.nav_label())
                        }
                    }
                }
                a.btn.btn-primary.admin-link href=(ADMIN_PATH) { "Admin" }
            }
        }
    }
}

/// Footer: blurb, contact block, quick links, copyright.
pub fn site_footer() -> Markup {
    html! {
        footer.site-footer {
            (wave("var(--color-deep)", true))
            div.container.footer-grid {
                div {
                    h3.footer-title { "Colegio" br; "La Católica GEM" }
                    p.muted-light {
                        "22 años formando estudiantes con valores, disciplina y excelencia "
                        "académica. Orgullo educativo de Pilcomayo."
                    }
                    div.badges {
                        span.badge { "🎓 Educación Integral" }
                        span.badge { "⭐ 22 años de experiencia" }
                    }
                }
                div {
                    h4 { "Contáctanos" }
                    p { "📍 " (ADDRESS) }
                    p { "📍 Cruce de Sicaya y Chupaca" }
                    a.btn.btn-whatsapp href=(WHATSAPP_URL) target="_blank" rel="noopener noreferrer" {
                        "💬 WhatsApp"
                    }
                    div.phones {
                        @for phone in PHONE_NUMBERS {
                            span.phone { "📞 " (phone) }
                        }
                    }
                }
                div {
                    h4 { "Enlaces rápidos" }
                    ul.quick-links {
                        @for route in Route::ALL {
                            li { a href=(route.path()) { "→ " (route.nav_label()) } }
                        }
                    }
                }
            }
            p.copyright { "© 2026 La Católica GEM — Todos los derechos reservados" }
        }
    }
}

/// Decorative wave between bands. `flip` draws it at the top of a block.
pub fn wave(fill: &str, flip: bool) -> Markup {
    html! {
        div.wave.wave-top[flip] aria-hidden="true" {
            svg viewBox="0 0 1440 160" preserveAspectRatio="none" {
                path style={ "fill: " (fill) }
                    d="M0,96L80,101C160,107,320,117,480,117C640,117,800,107,960,96C1120,85,1280,75,1440,64L1440,160L0,160Z" {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assets() -> Assets {
        Assets {
            stylesheet: "assets/style-abc.css".into(),
            script: "assets/slideshow.js".into(),
        }
    }

    #[test]
    fn base_document_includes_doctype_and_lang() {
        let doc = base_document("T", "es", &assets(), Route::Home, html! { p { "x" } })
            .into_string();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains(r#"<html lang="es">"#));
        assert!(doc.contains(r#"href="/assets/style-abc.css""#));
        assert!(doc.contains(r#"src="/assets/slideshow.js""#));
    }

    #[test]
    fn header_highlights_only_current_route() {
        let html = site_header(Route::Primaria).into_string();
        assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);
        assert!(html.contains(r#"class="nav-pill active" href="/primaria""#));
    }

    #[test]
    fn header_links_every_route_and_admin() {
        let html = site_header(Route::Home).into_string();
        for route in Route::ALL {
            assert!(html.contains(&format!(r#"href="{}""#, route.path())));
        }
        assert!(html.contains(r#"href="/admin""#));
    }

    #[test]
    fn footer_has_contact_and_quick_links() {
        let html = site_footer().into_string();
        assert!(html.contains(WHATSAPP_URL));
        assert!(html.contains("960 119 354"));
        assert!(html.contains("→ Vacacional"));
        assert!(html.contains("Todos los derechos reservados"));
    }
}
