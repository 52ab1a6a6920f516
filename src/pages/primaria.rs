//! Nivel Primaria.

use super::PageContext;
use super::sections::{accented, check_list, eyebrow, gallery, hero, photo, video};
use crate::shell::wave;
use maud::{Markup, html};

const ACTIVIDADES: [&str; 6] = [
    "Teatro",
    "Concursos Externos",
    "Feria de Ciencias",
    "Cine Educativo",
    "Proyectos Escolares",
    "Actividades Artísticas",
];

const GALERIA: [&str; 4] = [
    "primariaGaleria1",
    "primariaGaleria2",
    "primariaGaleria3",
    "primariaGaleria4",
];

pub fn render(ctx: &PageContext) -> Markup {
    html! {
        div.page-primaria {
            (hero_primaria(ctx))
            main.container.stack {
                (introduccion())
                (desarrollo_academico(ctx))
                (actividades_galeria(ctx))
                (video_destacado())
            }
        }
    }
}

fn hero_primaria(ctx: &PageContext) -> Markup {
    let content = html! {
        div.hero-copy {
            (eyebrow("Formación sólida en valores y conocimiento"))
            h1 { (accented("Nivel", "Primaria")) }
            p.lead {
                "Impulsamos una educación integral basada en comprensión lectora, "
                "habilidades sociales, creatividad y proyectos innovadores que "
                "fortalecen el pensamiento crítico."
            }
            (check_list(&[
                "Proyectos de investigación y experimentación moderna.",
                "Aprendizaje personalizado según ritmos y estilos.",
                "Cultura de valores, disciplina y convivencia positiva.",
                "Actividades culturales, deportivas y artísticas.",
            ]))
        }
    };
    hero(&ctx.image("primariaBanner"), true, content)
}

fn introduccion() -> Markup {
    html! {
        section.section.split {
            div {
                h2 { (accented("Formación Integral y Proyectos", "Innovadores")) }
                p.lead {
                    "Desarrollamos en nuestros estudiantes una sólida cultura de investigación, "
                    "análisis y experimentación moderna, promoviendo el pensamiento crítico y "
                    "la curiosidad académica desde los primeros grados."
                }
                p.lead {
                    "Nuestro enfoque se adapta a los " strong { "ritmos y estilos de aprendizaje" }
                    " de cada niño, fortaleciendo su autonomía, responsabilidad y capacidad para "
                    "resolver problemas mediante procesos educativos personalizados."
                }
            }
            div.icon-art {
                img.icon src="/icons/analitica.png" alt="Investigación y análisis académico";
            }
        }
    }
}

fn desarrollo_academico(ctx: &PageContext) -> Markup {
    html! {
        section.band.band-deep.full-bleed {
            div.container.split {
                div.on-dark {
                    h2 { (accented("Desarrollamos en", "Primaria")) }
                    p.lead {
                        "Potenciamos las capacidades académicas, sociales y espirituales de "
                        "nuestros estudiantes mediante una formación integral, moderna y "
                        "alineada a valores cristianos."
                    }
                    (check_list(&[
                        "Comprensión lectora y producción de textos.",
                        "Habilidades sociales, espirituales, culturales y deportivas.",
                        "Inglés, computación y ciencia aplicada.",
                        "Valores cristianos y disciplina positiva.",
                        "Nivelación, recuperación y reforzamiento académico.",
                        "Talleres, proyectos y actividades interdisciplinarias.",
                    ]))
                }
                div.framed-media {
                    (photo(&ctx.image("primariaAfiche1"), "Actividades académicas en Primaria"))
                }
            }
            (wave("var(--color-bg)", false))
        }
    }
}

fn actividades_galeria(ctx: &PageContext) -> Markup {
    // Every slot keeps its card, configured or not.
    let urls: Vec<String> = GALERIA.iter().map(|key| ctx.image(key)).collect();
    html! {
        section.section {
            div.section-head {
                h2 { (accented("Actividades y Experiencias", "Formativas")) }
                p.lead {
                    "Complementamos la formación académica con actividades que fortalecen la "
                    "creatividad, el trabajo en equipo y la convivencia, permitiendo que "
                    "nuestros estudiantes aprendan haciendo y vivan experiencias "
                    "significativas dentro y fuera del aula."
                }
            }
            div.chips.center {
                @for actividad in ACTIVIDADES {
                    span.chip.chip-light { (actividad) }
                }
            }
            h3.center { (accented("Galería de actividades en", "Primaria")) }
            (gallery(&urls, "Actividad Primaria"))
            p.center.muted { "Desliza para ver más →" }
        }
    }
}

fn video_destacado() -> Markup {
    html! {
        section.band.band-deep.full-bleed {
            div.container.split {
                div.on-dark {
                    (eyebrow("Experiencia en acción"))
                    h2 { (accented("Así se vive", "Primaria")) }
                    p.lead {
                        "Conoce cómo nuestros estudiantes de Primaria viven el aprendizaje "
                        "día a día en un entorno dinámico, cercano y formativo, acompañado "
                        "por docentes comprometidos con su desarrollo integral."
                    }
                    (check_list(&[
                        "Metodologías activas y participación constante.",
                        "Acompañamiento docente y formación en valores.",
                        "Ambientes seguros, motivadores y creativos.",
                    ]))
                }
                (video(
                    "https://www.youtube.com/embed/PKAbV5FruWY",
                    "Video Primaria - La Católica GEM",
                ))
            }
        }
    }
}
