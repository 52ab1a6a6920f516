//! Cosmetic image rotation.
//!
//! A slideshow shows one of `N` images and moves to the next one every
//! `interval`, wrapping back to the first. The browser runs the real timer
//! (`static/slideshow.js`); [`Slideshow`] is the same state machine in Rust,
//! used to render the markup for a given point in time.
//!
//! With no images the timer never runs. Once unmounted the index is frozen.

use crate::pages::sections;
use maud::{Markup, html};
use std::time::Duration;

/// Default rotation interval.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5000);

const NANOS_PER_SEC: u128 = 1_000_000_000;

#[derive(Debug, Clone)]
pub struct Slideshow {
    len: usize,
    active: usize,
    interval: Duration,
    carry: Duration,
    mounted: bool,
}

impl Slideshow {
    pub fn new(len: usize, interval: Duration) -> Self {
        Self {
            len,
            active: 0,
            interval,
            carry: Duration::ZERO,
            mounted: true,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether the timer is ticking.
    pub fn is_running(&self) -> bool {
        self.mounted && self.len > 0 && !self.interval.is_zero()
    }

    /// One timer tick.
    pub fn advance(&mut self) {
        if self.is_running() {
            self.active = (self.active + 1) % self.len;
        }
    }

    /// Let `dt` of wall time pass: one step per full interval, remainder kept.
    pub fn elapse(&mut self, dt: Duration) {
        if !self.is_running() {
            return;
        }
        let interval = self.interval.as_nanos();
        let total = (self.carry + dt).as_nanos();
        let steps = total / interval;
        // The remainder is below `interval`, so its whole seconds fit in u64.
        let rem = total % interval;
        self.carry = Duration::new((rem / NANOS_PER_SEC) as u64, (rem % NANOS_PER_SEC) as u32);
        self.active = ((self.active as u128 + steps) % self.len as u128) as usize;
    }

    /// Cancel the timer.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }
}

/// Render the stacked slide layers for a background slideshow.
///
/// Every slide is present in the markup; only the active one is visible.
/// The script picks up `data-interval-ms` and keeps rotating client-side.
pub fn render_layers(urls: &[String], slideshow: &Slideshow) -> Markup {
    html! {
        div.slideshow
            data-interval-ms=(slideshow.interval().as_millis() as u64)
            data-active=(slideshow.active())
            aria-hidden="true"
        {
            @for (i, url) in urls.iter().enumerate() {
                @let active = i == slideshow.active();
                div.slide.is-active[active]
                    style=(sections::background_image(url)) {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEC: Duration = Duration::from_secs(1);

    #[test]
    fn cycles_through_all_indices_and_wraps() {
        let mut show = Slideshow::new(4, 5 * SEC);
        let mut seen = vec![show.active()];
        for _ in 0..4 {
            show.elapse(5 * SEC);
            seen.push(show.active());
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 0]);
    }

    #[test]
    fn advances_once_per_full_interval() {
        let mut show = Slideshow::new(3, 5 * SEC);
        show.elapse(Duration::from_millis(4999));
        assert_eq!(show.active(), 0);
        show.elapse(Duration::from_millis(1));
        assert_eq!(show.active(), 1);
        show.elapse(Duration::from_millis(2500));
        show.elapse(Duration::from_millis(2500));
        assert_eq!(show.active(), 2);
    }

    #[test]
    fn long_elapse_wraps_modulo_len() {
        let mut show = Slideshow::new(4, 5 * SEC);
        show.elapse(Duration::from_secs(5 * 4 * 10 + 10));
        assert_eq!(show.active(), 2);
    }

    #[test]
    fn no_advancement_after_unmount() {
        let mut show = Slideshow::new(4, 5 * SEC);
        show.elapse(5 * SEC);
        show.unmount();
        show.elapse(60 * SEC);
        show.advance();
        assert_eq!(show.active(), 1);
        assert!(!show.is_running());
    }

    #[test]
    fn empty_slideshow_never_runs() {
        let mut show = Slideshow::new(0, 5 * SEC);
        assert!(!show.is_running());
        show.elapse(60 * SEC);
        show.advance();
        assert_eq!(show.active(), 0);
    }

    #[test]
    fn very_long_interval_keeps_remainder() {
        // Nanoseconds of this interval do not fit in a u64
        let interval = Duration::from_secs(u64::MAX / 2);
        let mut show = Slideshow::new(3, interval);
        show.elapse(Duration::from_secs(u64::MAX / 4));
        assert_eq!(show.active(), 0);
        show.elapse(Duration::from_secs(u64::MAX / 4));
        assert_eq!(show.active(), 0);
        show.elapse(Duration::from_secs(2));
        assert_eq!(show.active(), 1);
    }

    #[test]
    fn single_image_stays_at_zero() {
        let mut show = Slideshow::new(1, 5 * SEC);
        show.elapse(17 * SEC);
        assert_eq!(show.active(), 0);
    }

    #[test]
    fn advance_matches_tick() {
        let mut show = Slideshow::new(2, 5 * SEC);
        show.advance();
        assert_eq!(show.active(), 1);
        show.advance();
        assert_eq!(show.active(), 0);
    }

    #[test]
    fn layers_mark_only_active_slide() {
        let urls = vec!["a.jpg".to_string(), "b.jpg".to_string(), "c.jpg".to_string()];
        let mut show = Slideshow::new(urls.len(), 5 * SEC);
        show.elapse(5 * SEC);
        let html = render_layers(&urls, &show).into_string();

        assert_eq!(html.matches("is-active").count(), 1);
        assert!(html.contains(r#"data-active="1""#));
        assert!(html.contains(r#"data-interval-ms="5000""#));
        assert_eq!(html.matches("background-image").count(), 3);
    }
}
