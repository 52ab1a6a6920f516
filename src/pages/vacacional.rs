//! Ciclo Vacacional: summer programme over a rotating cinematic band.

use super::PageContext;
use super::sections::{accented, check_list, eyebrow, hero};
use crate::shell::wave;
use crate::slideshow;
use maud::{Markup, html};

const SLIDES: [&str; 4] = ["vacacional1", "vacacional2", "vacacional3", "vacacional4"];

const BENEFICIOS: [&str; 8] = [
    "Profesores con amplia experiencia pedagógica.",
    "Refuerzo académico personalizado por nivel.",
    "Evaluaciones periódicas y seguimiento continuo.",
    "Actividades deportivas, culturales y artísticas.",
    "Preparación efectiva para el retorno a clases.",
    "Tutoría y acompañamiento permanente.",
    "Ambiente seguro, organizado y motivador.",
    "Desarrollo de creatividad, disciplina y trabajo en equipo.",
];

pub fn render(ctx: &PageContext) -> Markup {
    html! {
        div.page-vacacional {
            (hero_vacacional(ctx))
            main.stack {
                (descripcion())
                (cinematica(ctx))
            }
        }
    }
}

fn hero_vacacional(ctx: &PageContext) -> Markup {
    let content = html! {
        div.hero-copy {
            (eyebrow("🌞 Ciclo Vacacional 2026"))
            h1 { "Nivelación y " span.accent { "Preparación" } " de Verano" }
            p.lead {
                "Refuerza Matemática, Comunicación, Ciencia y Tecnología con docentes "
                "especialistas. Actividades recreativas, deporte, cultura y creatividad "
                "en un ambiente seguro y motivador."
            }
            ul.check-list {
                li { span.check aria-hidden="true" { "✔" } "Inicio: " strong { "05 de enero 2026" } }
                li { span.check aria-hidden="true" { "✔" } "Duración: " strong { "6 semanas completas" } }
                li {
                    span.check aria-hidden="true" { "✔" }
                    "Programas para Inicial, Primaria, Secundaria y Preuniversitario"
                }
            }
            div.accent-rule {}
        }
    };
    hero(&ctx.image("vacacionalBanner"), false, content)
}

fn descripcion() -> Markup {
    html! {
        section.section.container.split {
            div {
                (eyebrow("☀ Experiencia vacacional formativa"))
                h2 { "Un Verano Para " span.accent { "Aprender" } " y Disfrutar" }
                p.lead {
                    "Nuestro Ciclo Vacacional combina " strong { "reforzamiento académico" }
                    " con actividades deportivas, culturales, tecnológicas y artísticas, "
                    "diseñadas para mantener a los estudiantes activos, motivados y en "
                    "constante aprendizaje."
                }
                p.lead {
                    "Es un espacio ideal para " strong { "fortalecer conocimientos" }
                    ", descubrir nuevas habilidades y prepararse con seguridad para el "
                    "siguiente año académico."
                }
                div.mini-features {
                    div.mini-feature {
                        span aria-hidden="true" { "📖" }
                        p { "Refuerzo académico planificado y adaptado por nivel educativo." }
                    }
                    div.mini-feature {
                        span aria-hidden="true" { "✨" }
                        p { "Actividades que estimulan la creatividad, el trabajo en equipo y la confianza." }
                    }
                }
            }
            blockquote.card.quote-card {
                p {
                    "“El verano es el mejor momento para reforzar, descubrir y crecer, "
                    "sin la presión del año escolar.”"
                }
                footer.muted { "Enfoque pedagógico La Católica GEM" }
            }
        }
    }
}

/// Full-bleed band whose background rotates through `vacacional1..4`.
fn cinematica(ctx: &PageContext) -> Markup {
    let urls = ctx.images.urls(&SLIDES);
    let show = ctx.slideshow(&urls);
    html! {
        section.band.band-cinematic.full-bleed {
            @if !urls.is_empty() {
                (slideshow::render_layers(&urls, &show))
            }
            div.overlay {}
            div.container.band-content.on-dark {
                div.section-head {
                    h2 { (accented("Vacacional en", "Acción")) }
                    p.lead {
                        "Un programa integral de verano que refuerza aprendizajes, desarrolla "
                        "habilidades y potencia el crecimiento académico, social y personal "
                        "de nuestros estudiantes."
                    }
                }
                div.carousel.flashcards {
                    (flashcard("🎓", "Niveles Atendidos", "Programas según la etapa del estudiante", html! {
                        ul {
                            li { "Inicial · 3, 4 y 5 años" }
                            li { "Primaria · 1.º al 6.º" }
                            li { "Secundaria · 1.º a 3.º" }
                            li { "Preuniversitario · 4.º y 5.º" }
                        }
                    }))
                    (flashcard("📘", "Cursos Principales", "Refuerzo académico dinámico", html! {
                        ul {
                            li { "Matemática" }
                            li { "Comunicación" }
                            li { "Ciencia y Tecnología" }
                            li { "Deporte, cultura y creatividad" }
                        }
                    }))
                    (flashcard("⏰", "Horarios Flexibles", "Pensados para la rutina familiar", html! {
                        div.turnos {
                            div { strong { "Primer Turno" } div { "08:00 a. m. – 11:00 a. m." } }
                            div { strong { "Segundo Turno" } div { "11:00 a. m. – 2:00 p. m." } }
                        }
                        p { "Duración total: " span.accent { "6 semanas completas" } }
                    }))
                }
                div.card.benefits {
                    h3 { "¿Qué " span.accent { "Ofrecemos" } "?" }
                    div.two-columns {
                        (check_list(&BENEFICIOS[..4]))
                        (check_list(&BENEFICIOS[4..]))
                    }
                }
            }
            (wave("var(--color-bg)", false))
        }
    }
}

fn flashcard(icon: &str, title: &str, desc: &str, body: Markup) -> Markup {
    html! {
        article.card.carousel-card.flashcard {
            span.feature-icon aria-hidden="true" { (icon) }
            h4 { (title) }
            p.muted { (desc) }
            div.flashcard-body { (body) }
        }
    }
}
