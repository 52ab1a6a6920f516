//! Nivel Inicial (3, 4 and 5 years).

use super::PageContext;
use super::sections::{accented, check_list, eyebrow, feature_grid, hero, photo, video};
use maud::{Markup, html};

const AREAS: [(&str, &str, &str); 8] = [
    ("💬", "Comunicación y lenguaje", ""),
    ("🧮", "Pensamiento lógico-matemático", ""),
    ("🤸", "Psicomotricidad y coordinación", ""),
    ("🎵", "Expresión artística y musical", ""),
    ("🤝", "Desarrollo socioemocional", ""),
    ("👥", "Hábitos y normas de convivencia", ""),
    ("⛪", "Educación en valores cristianos", ""),
    ("🧭", "Descubrimiento del entorno", ""),
];

pub fn render(ctx: &PageContext) -> Markup {
    html! {
        div.page-inicial {
            (hero_inicial(ctx))
            main.container.stack {
                (bienvenida(ctx))
                (porque_elegir(ctx))
                (aprendizaje())
                (areas_curriculares())
            }
        }
    }
}

fn hero_inicial(ctx: &PageContext) -> Markup {
    let content = html! {
        div.hero-copy {
            (eyebrow("🧸 Inicial · 3, 4 y 5 años"))
            h1 { "Donde su primer paso " br; span.accent { "es sagrado" } }
            p.lead {
                "En " strong { "Inicial La Católica GEM" } ", cada niño inicia su "
                "historia escolar en un ambiente seguro, cálido y alegre. Educamos "
                "con amor, paciencia y respeto, acompañando sus primeros aprendizajes "
                "con juegos, valores y mucha creatividad."
            }
            (check_list(&[
                "Formación integral en valores cristianos.",
                "Desarrollo emocional, social y cognitivo.",
                "Docentes con amplia experiencia y vocación.",
                "Comunicación constante con los padres.",
            ]))
            div.actions {
                a.btn.btn-outline href="#aprendizaje" { "Aprendizaje" }
                a.btn.btn-light href="#areas-curriculares" { "Areas Curriculares" }
            }
        }
    };
    hero(&ctx.image("inicialBanner"), true, content)
}

fn bienvenida(ctx: &PageContext) -> Markup {
    html! {
        section.section.split {
            div {
                h2 { "Inicial La Católica GEM" }
                p.lead {
                    "En nuestro nivel Inicial, creemos que el primer paso en la educación "
                    "es " strong { "sagrado" } ". Por eso, ofrecemos un entorno donde los "
                    "niños se sienten queridos, protegidos y motivados a descubrir el "
                    "mundo que los rodea."
                }
                p.lead {
                    "A través del juego, la exploración y actividades cuidadosamente "
                    "planificadas, acompañamos a los pequeños de " strong { "3, 4 y 5 años" }
                    " en el desarrollo de sus habilidades emocionales, sociales, cognitivas "
                    "y espirituales, respetando su ritmo y celebrando cada logro."
                }
                div.accent-rule {}
            }
            div.framed-media {
                (photo(&ctx.image("inicialGaleria1"), "Inicial La Católica GEM"))
            }
        }
    }
}

fn porque_elegir(ctx: &PageContext) -> Markup {
    html! {
        section.band.band-deep.full-bleed {
            div.container.split {
                div.on-dark {
                    h3 { "¿Por qué elegir nuestro " span.accent { "Nivel Inicial" } "?" }
                    p.lead {
                        "En La Católica GEM construimos una base sólida para el futuro de cada "
                        "niño, combinando experiencia educativa, valores y un acompañamiento "
                        "cercano a las familias."
                    }
                    (check_list(&[
                        "22 años de experiencia educativa formando estudiantes con valores y disciplina.",
                        "Creatividad y formación integral desde los primeros años.",
                        "Evaluaciones constantes e informes de progreso claros para los padres.",
                        "Logros académicos y participación en campeonatos escolares.",
                        "Ambiente seguro, alegre y motivador donde los niños crecen felices.",
                        "Comunicación directa y permanente con los padres de familia.",
                    ]))
                }
                div.framed-media {
                    (photo(&ctx.image("inicialAfiche2"), "¿Por qué elegir Inicial La Católica GEM?"))
                }
            }
        }
    }
}

fn aprendizaje() -> Markup {
    html! {
        section.section.split id="aprendizaje" {
            div {
                h3 { (accented("Aprendizaje a través del", "juego")) }
                p.lead {
                    "Nuestro modelo pedagógico promueve el aprendizaje "
                    strong { "activo, significativo y vivencial" }
                    ", donde cada niño aprende explorando, creando y expresándose libremente "
                    "en un entorno seguro y estimulante."
                }
                p {
                    "A través del juego, los niños desarrollan habilidades cognitivas, "
                    "sociales y emocionales que fortalecen su autonomía, confianza y amor "
                    "por aprender."
                }
                (check_list(&[
                    "Juegos simbólicos y de roles que estimulan la imaginación.",
                    "Actividades manipulativas y sensoriales para aprender haciendo.",
                    "Cuentos, canciones y expresión oral para fortalecer el lenguaje.",
                    "Trabajo en grupo y proyectos simples que fomentan la convivencia.",
                ]))
            }
            (video(
                "https://www.youtube.com/embed/m4ZFUgepxZQ",
                "Aprendizaje a través del juego - Inicial La Católica GEM",
            ))
        }
    }
}

fn areas_curriculares() -> Markup {
    html! {
        section.band.band-deep.full-bleed id="areas-curriculares" {
            div.container.on-dark {
                h3.center { "Áreas que desarrollamos" }
                (feature_grid(&AREAS))
                (video(
                    "https://www.youtube.com/embed/ravUVs0Z6aU",
                    "Áreas de desarrollo - Inicial La Católica GEM",
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::test_support::context;
    use crate::test_helpers::*;

    #[test]
    fn uses_inicial_image_keys() {
        let config = image_config(&[
            ("inicialBanner", "B"),
            ("inicialGaleria1", "G"),
            ("inicialAfiche2", "A"),
            ("hero", "H"),
        ]);
        let html = render(&context(&config)).into_string();
        assert!(html.contains("id%3DB"));
        assert!(html.contains("id%3DG"));
        assert!(html.contains("id%3DA"));
        // The home hero key belongs to another page
        assert!(!html.contains("id%3DH"));
    }

    #[test]
    fn renders_all_curricular_areas() {
        let config = image_config(&[]);
        let html = render(&context(&config)).into_string();
        assert_eq!(count(&html, r#"class="feature""#), AREAS.len());
        assert!(html.contains(r#"id="areas-curriculares""#));
        assert!(html.contains(r#"id="aprendizaje""#));
    }

    #[test]
    fn embeds_both_videos() {
        let config = image_config(&[]);
        let html = render(&context(&config)).into_string();
        assert_eq!(count(&html, "<iframe"), 2);
    }
}
