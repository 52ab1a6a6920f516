//! Home: admissions hero, why-us, level cards, vacation band, workshops.

use super::PageContext;
use super::sections::{accented, background_style, check_list, hero, photo};
use crate::router::Route;
use crate::shell::{PHONE_NUMBERS, wave};
use maud::{Markup, html};

/// A level card linking to its page.
struct Level {
    route: Route,
    lema: &'static str,
    desc: &'static str,
    image_key: &'static str,
    badge: &'static str,
}

const LEVELS: [Level; 3] = [
    Level {
        route: Route::Inicial,
        lema: "Aprender con amor, crecer con propósito",
        desc: "3, 4 y 5 años. Un entorno seguro y afectivo donde los niños desarrollan \
               habilidades sociales, emocionales y cognitivas desde temprana edad.",
        image_key: "inicialPortada",
        badge: "Vacantes limitadas",
    },
    Level {
        route: Route::Primaria,
        lema: "Bases sólidas para un futuro seguro",
        desc: "Fortalecemos Matemática, Comunicación, Ciencia y Tecnología, promoviendo \
               la autonomía, creatividad y responsabilidad en cada estudiante.",
        image_key: "primariaPortada",
        badge: "Formación de valores",
    },
    Level {
        route: Route::Secundaria,
        lema: "Consolidando metas y proyectos de vida",
        desc: "Exigencia académica, asesoría vocacional y orientación preuniversitaria \
               para formar jóvenes preparados para los retos del futuro.",
        image_key: "secundariaPortada",
        badge: "Orientación preuniversitaria",
    },
];

/// (title, image key, category)
const TALLERES: [(&str, &str, &str); 6] = [
    ("Ajedrez", "ajedrez", "Taller de deporte"),
    ("Fútbol", "futbol", "Taller de deporte"),
    ("Vóley", "voley", "Taller de deporte"),
    ("Música", "musica", "Taller de arte"),
    ("Dibujo y Pintura", "dibujo", "Taller de arte"),
    ("Robótica", "robotica", "Taller de tecnología"),
];

pub fn render(ctx: &PageContext) -> Markup {
    html! {
        div.page-home {
            (hero_section(ctx))
            main {
                (info_strip())
                (inspiracion_section(ctx))
                (niveles_section(ctx))
                (vacacional_section(ctx))
                (talleres_section(ctx))
            }
        }
    }
}

fn hero_section(ctx: &PageContext) -> Markup {
    let content = html! {
        div.split {
            div.hero-copy {
                span.eyebrow { "🎓 22 años de educación para el mañana" }
                h1 { "Admisión " span.accent { "2026" } }
                h2 { "¡Vacantes limitadas!" }
                p.lead {
                    "Colegio y Academia La Católica GEM en Pilcomayo. Formación integral "
                    "con valores, disciplina y excelencia académica en "
                    strong { "Inicial, Primaria y Secundaria" } "."
                }
                (check_list(&[
                    "Logros académicos y campeonatos escolares.",
                    "Formación integral, creatividad y disciplina.",
                    "Acompañamiento permanente e informes de rendimiento.",
                ]))
                div.actions {
                    a.btn.btn-light href="#inscripciones" { "Quiero informes" }
                    a.btn.btn-outline href="#vacacional" { "Ver Ciclo Vacacional 2026" }
                }
                p.small { "📍 Jr. Simón Bolívar N° 150 – Pilcomayo (cruce de Sicaya y Chupaca)" }
            }
            div.card.form-card id="inscripciones" {
                h3 { "INFORMES " span.accent { "2026" } }
                p.muted { "Déjanos tus datos y nos comunicaremos contigo." }
                form.contact-form {
                    input type="text" name="nombre" placeholder="Nombre completo";
                    input type="tel" name="celular" placeholder="Celular / WhatsApp";
                    input type="text" name="nivel" placeholder="Nivel de interés";
                    button.btn.btn-primary type="button" { "Enviar" }
                }
            }
        }
    };
    hero(&ctx.image("hero"), true, content)
}

fn info_strip() -> Markup {
    html! {
        section.container.info-strip {
            div.info-strip-inner {
                div.info-main {
                    span.round-icon aria-hidden="true" { "🗓" }
                    span {
                        "Inicio de clases " strong.accent { "2026" } " – Inscripciones abiertas"
                    }
                }
                div.chips {
                    span.chip { "Inicial · Primaria · Secundaria" }
                    span.chip.chip-light { "📞 Informes: " (PHONE_NUMBERS.join(" · ")) }
                }
            }
        }
    }
}

fn inspiracion_section(ctx: &PageContext) -> Markup {
    html! {
        section.band.band-image style=[background_style(&ctx.image("homeInspiracion"))] {
            div.overlay {}
            div.container.band-content {
                div.narrow.on-dark {
                    h2 { "Pasión, Talento " br; span.accent { "e Inspiración" } }
                    p.lead {
                        "En " strong { "La Católica GEM" } ", potenciamos las capacidades de cada "
                        "estudiante a través de una formación integral basada en valores "
                        "cristianos, disciplina y excelencia académica, preparando niños y "
                        "jóvenes para afrontar con seguridad los retos del futuro."
                    }
                    p {
                        "Nuestro enfoque educativo promueve el desarrollo progresivo de "
                        "habilidades académicas, sociales y humanas, acompañando de manera "
                        "cercana a cada estudiante desde Inicial hasta Secundaria."
                    }
                }
                div.card.why-card {
                    h3 { "¿Por qué elegir " span.accent { "La Católica GEM" } "?" }
                    div.why-grid {
                        div.why-item {
                            span.why-icon { "✓" }
                            p {
                                "Formación integral con énfasis en "
                                strong { "valores cristianos, disciplina y excelencia académica" }
                                ", formando estudiantes responsables y comprometidos."
                            }
                        }
                        div.why-item {
                            span.why-icon.why-icon-accent { "🎓" }
                            p {
                                "Docentes con amplia experiencia y verdadera "
                                strong { "vocación educativa" }
                                ", que acompañan de manera cercana el desarrollo de cada estudiante."
                            }
                        }
                        div.why-item {
                            span.why-icon { "⭐" }
                            p {
                                "Más de " strong { "22 años formando estudiantes en Pilcomayo" }
                                ", con logros académicos, talleres culturales y un entorno seguro."
                            }
                        }
                    }
                }
            }
            (wave("var(--color-bg)", false))
        }
    }
}

fn niveles_section(ctx: &PageContext) -> Markup {
    html! {
        section.section.niveles {
            div.container {
                div.section-head {
                    h2 { (accented("Nuestros", "niveles educativos")) }
                    p.lead {
                        "Formamos estudiantes desde los primeros años hasta el término de la "
                        "Secundaria, con una educación integral basada en valores, disciplina "
                        "y excelencia académica."
                    }
                }
                div.card-grid {
                    @for level in &LEVELS {
                        (nivel_card(ctx, level))
                    }
                }
            }
        }
    }
}

fn nivel_card(ctx: &PageContext, level: &Level) -> Markup {
    let title = level.route.nav_label();
    html! {
        article.card.level-card {
            div.card-media {
                (photo(&ctx.image(level.image_key), title))
                span.card-badge { (level.badge) }
            }
            div.card-body {
                h3 { (title) }
                p.lema { (level.lema) }
                p { (level.desc) }
                a.btn.btn-primary href=(level.route.path()) { "Ver más" }
            }
        }
    }
}

fn vacacional_section(ctx: &PageContext) -> Markup {
    html! {
        section.band.band-deep id="vacacional" {
            div.container.split {
                div.on-dark {
                    span.eyebrow { "🌞 Ciclo Vacacional 2026 · Inicio 05 de enero" }
                    h2 { "Nivelación y " br; span.accent { "preparación de verano" } }
                    p.lead {
                        "Refuerza Matemática, Comunicación, Ciencia y Tecnología con docentes "
                        "especializados, complementado con actividades recreativas y "
                        "culturales que potencian el aprendizaje y la formación integral."
                    }
                    (check_list(&[
                        "Inicial (3, 4 y 5 años).",
                        "Primaria de 1.º a 6.º grado.",
                        "Secundaria (1.º a 3.º) y Preuniversitario (4.º y 5.º).",
                        "Dos turnos: 8:00–11:00 a. m. y 11:00–2:00 p. m.",
                        "Duración: 6 semanas completas.",
                    ]))
                    a.btn.btn-light href=(Route::CicloVacacional.path()) { "Conoce el programa" }
                }
                div.framed-media {
                    (photo(&ctx.image("vacacionalBanner"), "Ciclo Vacacional La Católica GEM"))
                }
            }
            (wave("var(--color-bg)", false))
        }
    }
}

fn talleres_section(ctx: &PageContext) -> Markup {
    html! {
        section.section.talleres {
            div.container {
                div.section-head {
                    h2 { (accented("Centro Cultural", "Católica 2026")) }
                    p.lead {
                        "Talleres de deporte, arte y tecnología desde el " strong { "05 de enero" } "."
                    }
                }
                div.carousel {
                    @for (title, key, categoria) in TALLERES {
                        article.card.carousel-card {
                            (photo(&ctx.image(key), title))
                            div.card-body {
                                p.category { (categoria) }
                                h3 { (title) }
                            }
                        }
                    }
                }
                p.center.muted {
                    "Además contamos con talleres de Oratoria y Debate, Danza y Computación con IA."
                }
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
    fn hero_uses_hero_key() {
        let config = image_config(&[("hero", "ABC123")]);
        let html = render(&context(&config)).into_string();
        assert!(html.contains("drive.google.com%2Fuc%3Fexport%3Dview%26id%3DABC123"));
        assert_eq!(count(&html, "weserv"), 1);
    }

    #[test]
    fn level_cards_link_to_level_pages() {
        let config = image_config(&[]);
        let html = render(&context(&config)).into_string();
        assert!(html.contains(r#"href="/inicial""#));
        assert!(html.contains(r#"href="/primaria""#));
        assert!(html.contains(r#"href="/secundaria""#));
        assert_eq!(count(&html, "level-card"), 3);
    }

    #[test]
    fn every_image_slot_resolves_its_key() {
        let keys = [
            "hero",
            "homeInspiracion",
            "inicialPortada",
            "primariaPortada",
            "secundariaPortada",
            "vacacionalBanner",
            "ajedrez",
            "futbol",
            "voley",
            "musica",
            "dibujo",
            "robotica",
        ];
        let pairs: Vec<(&str, &str)> = keys.iter().map(|k| (*k, *k)).collect();
        let config = image_config(&pairs);
        let html = render(&context(&config)).into_string();
        for key in keys {
            assert!(html.contains(&format!("id%3D{key}")), "slot {key} not rendered");
        }
        assert!(!html.contains("image-placeholder"));
    }

    #[test]
    fn workshops_render_placeholders_when_unset() {
        let config = image_config(&[("ajedrez", "A")]);
        let html = render(&context(&config)).into_string();
        assert_eq!(count(&html, "carousel-card"), 6);
        assert_no_empty_img(&html);
    }

    #[test]
    fn anchors_for_hero_buttons_exist() {
        let config = image_config(&[]);
        let html = render(&context(&config)).into_string();
        assert!(html.contains(r#"id="inscripciones""#));
        assert!(html.contains(r#"id="vacacional""#));
    }
}
