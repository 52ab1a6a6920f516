//! Nivel Secundaria, including the pre-university programme.

use super::PageContext;
use super::sections::{accented, background_style, check_list, eyebrow, feature_grid, hero, photo};
use crate::shell::wave;
use crate::slideshow;
use maud::{Markup, html};

const GALERIA: [&str; 4] = [
    "secundariaGaleria1",
    "secundariaGaleria2",
    "secundariaGaleria3",
    "secundariaGaleria4",
];

const ECOSISTEMA: [(&str, &str, &str); 6] = [
    (
        "🎓",
        "Acompañamiento Académico",
        "Seguimiento constante, disciplina positiva y orientación formativa personalizada.",
    ),
    (
        "👥",
        "Docentes con Vocación",
        "Profesores con experiencia, compromiso humano y enfoque pedagógico moderno.",
    ),
    (
        "🛡",
        "Ambiente Seguro",
        "Espacios que promueven el respeto, la confianza y el desarrollo emocional.",
    ),
    (
        "🧠",
        "Pensamiento Crítico",
        "Formación analítica y creativa orientada a resolver problemas reales.",
    ),
    (
        "🏆",
        "Logros y Concursos",
        "Participación activa en campeonatos académicos, deportivos y culturales.",
    ),
    (
        "🎯",
        "Proyección Futura",
        "Preparación sólida para retos académicos superiores y proyecto de vida.",
    ),
];

const TALLERES: [(&str, &str, &str); 4] = [
    ("🧠", "Ajedrez", ""),
    ("🏓", "Ping Pong", ""),
    ("🥋", "Taekwondo", ""),
    ("🏆", "Concursos Externos", ""),
];

pub fn render(ctx: &PageContext) -> Markup {
    html! {
        div.page-secundaria {
            (hero_secundaria(ctx))
            main.container.stack {
                (formacion(ctx))
                (preuniversitario(ctx))
                (ecosistema(ctx))
            }
        }
    }
}

fn hero_secundaria(ctx: &PageContext) -> Markup {
    let content = html! {
        div.hero-copy {
            (eyebrow("Formación académica con visión global"))
            h1 { (accented("Nivel", "Secundaria")) }
            p.lead {
                "Fortalecemos valores, disciplina y pensamiento crítico. Formamos "
                "adolescentes capaces de asumir retos académicos y personales con "
                strong { "autonomía, liderazgo y responsabilidad" } "."
            }
            (check_list(&[
                "Pensamiento crítico y aprendizaje innovador.",
                "Desarrollo analítico y creativo.",
                "Evaluación personalizada y seguimiento constante.",
                "Formación en valores, convivencia y disciplina positiva.",
            ]))
        }
    };
    hero(&ctx.image("secundariaBanner"), true, content)
}

fn formacion(ctx: &PageContext) -> Markup {
    html! {
        section.section.split {
            div {
                h2 { (accented("Formación Académica", "de Excelencia")) }
                p.lead {
                    "Nuestros estudiantes desarrollan competencias sólidas en "
                    strong { "Matemática, Comunicación, Ciencia y Tecnología" }
                    ", complementadas con programas que fortalecen liderazgo, disciplina, "
                    "responsabilidad social y convivencia armoniosa."
                }
                p.lead {
                    "Impulsamos una formación basada en valores y pensamiento crítico, "
                    "preparando a nuestros alumnos para afrontar con éxito "
                    strong { "retos académicos superiores" } " y su proyecto de vida."
                }
            }
            div.framed-media {
                (photo(&ctx.image("secundariaAfiche2"), "Formación académica en Secundaria"))
            }
        }
    }
}

fn preuniversitario(ctx: &PageContext) -> Markup {
    html! {
        section.band.band-image.full-bleed style=[background_style(&ctx.image("secundariaAfiche1"))] {
            div.overlay {}
            div.container.band-content.on-dark {
                (eyebrow("Preparación académica de alto rendimiento"))
                h2 { (accented("Preparación", "Preuniversitaria")) }
                p.lead {
                    "Para " strong { "4.º y 5.º de secundaria" } ", ofrecemos un programa "
                    "preuniversitario competitivo orientado a resultados, con simulacros "
                    "tipo examen, docentes especializados y acompañamiento vocacional "
                    "estratégico."
                }
                p {
                    "Nuestros estudiantes acceden a metodologías exigentes que fortalecen "
                    "su razonamiento, seguridad académica y desempeño en procesos de "
                    "admisión a universidades nacionales y privadas."
                }
                (check_list(&[
                    "Simulacros constantes tipo admisión universitaria.",
                    "Refuerzo intensivo en razonamiento matemático y verbal.",
                    "Preparación para universidades nacionales y privadas.",
                    "Estrategias avanzadas de estudio, rendimiento y gestión del tiempo.",
                ]))
            }
            (wave("var(--color-bg)", false))
        }
    }
}

fn ecosistema(ctx: &PageContext) -> Markup {
    html! {
        section.section {
            div.section-head {
                (eyebrow("Formación integral en acción"))
                h2 { (accented("Ecosistema del Nivel", "Secundaria")) }
                p.lead {
                    "Un entorno educativo que integra acompañamiento académico, desarrollo "
                    "personal, actividades formativas y experiencias reales que fortalecen "
                    "el liderazgo y la proyección de nuestros estudiantes."
                }
            }
            (feature_grid(&ECOSISTEMA))
            h3.center { "Vivencias que " span.accent { "respaldan" } " nuestra formación" }
            p.center.muted {
                "Actividades, logros y experiencias reales que forman parte del día a día "
                "de nuestros estudiantes de Secundaria."
            }
            (vivencias(ctx))
            h3.center { (accented("Talleres y", "Actividades Formativas")) }
            p.center.muted {
                "Espacios que fortalecen disciplina, trabajo en equipo, habilidades físicas "
                "y desarrollo intelectual."
            }
            (feature_grid(&TALLERES))
        }
    }
}

/// Rotating gallery over the configured `secundariaGaleria*` images.
fn vivencias(ctx: &PageContext) -> Markup {
    let urls = ctx.images.urls(&GALERIA);
    let show = ctx.slideshow(&urls);
    html! {
        div.slideshow-frame {
            @if urls.is_empty() {
                div.image-placeholder role="img" aria-label="Galería Secundaria" {}
            } @else {
                (slideshow::render_layers(&urls, &show))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::test_support::context;
    use crate::test_helpers::*;
    use std::time::Duration;

    #[test]
    fn vivencias_without_images_is_placeholder() {
        let config = image_config(&[]);
        let html = render(&context(&config)).into_string();
        assert!(!html.contains("data-interval-ms"));
        assert!(html.contains("slideshow-frame"));
    }

    #[test]
    fn vivencias_rotates_over_configured_images_only() {
        let config = image_config(&[("secundariaGaleria1", "S1"), ("secundariaGaleria3", "S3")]);
        let mut ctx = context(&config);
        ctx.elapsed = Duration::from_secs(5);
        let html = render(&ctx).into_string();
        // Banner and afiche unset, so only the slide layers carry backgrounds
        assert_eq!(count(&html, "background-image"), 2);
        assert!(html.contains(r#"data-active="1""#));
        assert!(html.contains("id%3DS1"));
        assert!(html.contains("id%3DS3"));
    }

    #[test]
    fn vivencias_wraps_back_to_first() {
        let config = image_config(&[("secundariaGaleria1", "S1"), ("secundariaGaleria2", "S2")]);
        let mut ctx = context(&config);
        ctx.elapsed = Duration::from_secs(10);
        let html = render(&ctx).into_string();
        assert!(html.contains(r#"data-active="0""#));
    }

    #[test]
    fn pre_band_background_from_afiche1() {
        let config = image_config(&[("secundariaAfiche1", "AF1")]);
        let html = render(&context(&config)).into_string();
        assert!(html.contains("id%3DAF1"));
        assert_eq!(count(&html, "background-image"), 1);
    }

    #[test]
    fn gallery_and_workshop_headings() {
        let config = image_config(&[]);
        let html = render(&context(&config)).into_string();
        assert!(html.contains(r#"Vivencias que <span class="accent">respaldan</span> nuestra formación"#));
        assert!(html.contains(r#"Talleres y <span class="accent">Actividades Formativas</span>"#));
    }

    #[test]
    fn renders_ecosystem_and_workshops() {
        let config = image_config(&[]);
        let html = render(&context(&config)).into_string();
        assert_eq!(
            count(&html, r#"class="feature""#),
            ECOSISTEMA.len() + TALLERES.len()
        );
        assert!(html.contains("Taekwondo"));
    }
}
