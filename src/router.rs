//! Exact-match route table.
//!
//! Five routes, no parameters, no nesting. Unknown paths resolve to `None`
//! and render nothing; there is no not-found page. Trailing slashes are not
//! normalized, so `/inicial/` is unknown.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Inicial,
    Primaria,
    Secundaria,
    CicloVacacional,
}

/// Linked from the header but not generated by this site.
pub const ADMIN_PATH: &str = "/admin";

impl Route {
    /// Every route, in navigation order.
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Inicial,
        Route::Primaria,
        Route::Secundaria,
        Route::CicloVacacional,
    ];

    /// Exact-match dispatch.
    pub fn resolve(path: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|route| route.path() == path)
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Inicial => "/inicial",
            Route::Primaria => "/primaria",
            Route::Secundaria => "/secundaria",
            Route::CicloVacacional => "/ciclo-vacacional",
        }
    }

    /// Label used in the header and footer navigation.
    pub fn nav_label(self) -> &'static str {
        match self {
            Route::Home => "Inicio",
            Route::Inicial => "Inicial",
            Route::Primaria => "Primaria",
            Route::Secundaria => "Secundaria",
            Route::CicloVacacional => "Vacacional",
        }
    }

    /// Document title.
    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Admisión 2026",
            Route::Inicial => "Nivel Inicial",
            Route::Primaria => "Nivel Primaria",
            Route::Secundaria => "Nivel Secundaria",
            Route::CicloVacacional => "Ciclo Vacacional 2026",
        }
    }

    /// Output file relative to the site root: `index.html` or `<slug>/index.html`.
    pub fn output_file(self) -> String {
        match self.path().trim_start_matches('/') {
            "" => "index.html".to_string(),
            slug => format!("{slug}/index.html"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
