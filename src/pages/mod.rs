//! Page components.
//!
//! A page is a fixed sequence of sections. Sections are pure functions of
//! static copy and a [`PageContext`], which carries the page view's image
//! lookup and slideshow clock. Pages never fetch anything themselves; the
//! owning [`crate::loader::PageView`] does, once.
//!
//! | Route | Module |
//! |-------|--------|
//! | `/` | [`home`] |
//! | `/inicial` | [`inicial`] |
//! | `/primaria` | [`primaria`] |
//! | `/secundaria` | [`secundaria`] |
//! | `/ciclo-vacacional` | [`vacacional`] |

pub mod home;
pub mod inicial;
pub mod primaria;
pub mod secundaria;
pub mod sections;
pub mod vacacional;

use crate::loader::PageView;
use crate::router::Route;
use crate::slideshow::Slideshow;
use crate::types::ImageLookup;
use maud::Markup;
use std::time::Duration;

/// What a section may depend on besides its static copy.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub images: ImageLookup<'a>,
    /// Time the slideshow timers have been running.
    pub elapsed: Duration,
    pub slideshow_interval: Duration,
}

impl<'a> PageContext<'a> {
    pub fn from_view(view: &'a PageView, slideshow_interval: Duration) -> Self {
        Self {
            images: view.config().lookup(),
            elapsed: view.elapsed(),
            slideshow_interval,
        }
    }

    /// Display URL for `key`, `""` when unset.
    pub fn image(&self, key: &str) -> String {
        self.images.url(key)
    }

    /// Slideshow over `urls`, advanced to the view's current time.
    pub fn slideshow(&self, urls: &[String]) -> Slideshow {
        let mut show = Slideshow::new(urls.len(), self.slideshow_interval);
        show.elapse(self.elapsed);
        show
    }
}

/// Render the main content of `route`.
pub fn render(route: Route, ctx: &PageContext) -> Markup {
    match route {
        Route::Home => home::render(ctx),
        Route::Inicial => inicial::render(ctx),
        Route::Primaria => primaria::render(ctx),
        Route::Secundaria => secundaria::render(ctx),
        Route::CicloVacacional => vacacional::render(ctx),
    }
}

/// Marker class on each page's root element, e.g. `page-home`.
pub fn page_class(route: Route) -> &'static str {
    match route {
        Route::Home => "page-home",
        Route::Inicial => "page-inicial",
        Route::Primaria => "page-primaria",
        Route::Secundaria => "page-secundaria",
        Route::CicloVacacional => "page-vacacional",
    }
}
