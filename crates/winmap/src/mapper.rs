//! Window lookup cache and standard-resolution coordinate transforms.

use crate::{
    diag::{DiagnosticSink, TracingSink},
    geom::{Point, Rect},
    query::{WindowInfo, WindowQuery},
};

/// Height of the macOS title bar, in points.
pub const MACOS_TITLE_BAR_HEIGHT: f64 = 30.0;

/// Extra chrome row (toolbar) observed below the title bar on the
/// windows this was calibrated against.
pub const MACOS_TOOLBAR_HEIGHT: f64 = 25.0;

/// Default vertical correction applied to the reported top edge so the
/// usable rectangle excludes the title bar.
///
/// This is a heuristic, not a measured value; it will be wrong for some
/// chrome styles. Override per mapper with
/// [`WindowCoordinateMapper::with_title_bar_offset`].
pub const DEFAULT_TITLE_BAR_OFFSET: f64 = MACOS_TITLE_BAR_HEIGHT + MACOS_TOOLBAR_HEIGHT;

/// Default standard resolution width.
const DEFAULT_STANDARD_WIDTH: u32 = 1920;
/// Default standard resolution height.
const DEFAULT_STANDARD_HEIGHT: u32 = 1080;

/// Locates a window by exact title and maps points from a fixed
/// standard resolution into the window's live on-screen rectangle.
///
/// The mapper caches the last window snapshot. The cache is filled
/// eagerly at construction, refilled lazily whenever a validity check
/// finds it empty, and otherwise only changed by explicit
/// [`refresh_lookup`] / [`invalidate`] calls. A snapshot taken before
/// the window moved, resized, or closed stays in use until then; there
/// is no timer or automatic polling.
///
/// Single-threaded by design: callers sharing one mapper across threads
/// must synchronize externally.
///
/// [`refresh_lookup`]: Self::refresh_lookup
/// [`invalidate`]: Self::invalidate
pub struct WindowCoordinateMapper<Q> {
    /// Platform collaborator for window and process queries.
    query: Q,
    /// Exact-match lookup key.
    window_title: String,
    /// Width of the standard coordinate space.
    standard_width: u32,
    /// Height of the standard coordinate space.
    standard_height: u32,
    /// Derived `(0, 0, standard_width, standard_height)` rectangle.
    standard_rect: Rect,
    /// Vertical chrome correction applied by [`Self::window_rect`].
    title_bar_offset: f64,
    /// Last lookup result; `None` when no window matched or the cache
    /// was invalidated.
    cached: Option<WindowInfo>,
    /// Sink for diagnostics from failure-swallowing operations.
    diag: Box<dyn DiagnosticSink>,
}

impl<Q: WindowQuery> WindowCoordinateMapper<Q> {
    /// Create a mapper for `window_title` with the default 1920×1080
    /// standard resolution and perform the initial window lookup.
    pub fn new(query: Q, window_title: impl Into<String>) -> Self {
        let mut mapper = Self {
            query,
            window_title: window_title.into(),
            standard_width: DEFAULT_STANDARD_WIDTH,
            standard_height: DEFAULT_STANDARD_HEIGHT,
            standard_rect: Rect::new(
                0.0,
                0.0,
                f64::from(DEFAULT_STANDARD_WIDTH),
                f64::from(DEFAULT_STANDARD_HEIGHT),
            ),
            title_bar_offset: DEFAULT_TITLE_BAR_OFFSET,
            cached: None,
            diag: Box::new(TracingSink),
        };
        mapper.refresh_lookup();
        mapper
    }

    /// Set the standard resolution the caller's game positions are
    /// expressed in. Both dimensions must be positive.
    #[must_use]
    pub fn with_standard_resolution(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "standard resolution must be positive");
        self.standard_width = width;
        self.standard_height = height;
        self.standard_rect = Rect::new(0.0, 0.0, f64::from(width), f64::from(height));
        self
    }

    /// Override the title-bar correction applied by [`Self::window_rect`].
    #[must_use]
    pub fn with_title_bar_offset(mut self, offset: f64) -> Self {
        self.title_bar_offset = offset;
        self
    }

    /// Replace the diagnostic sink.
    #[must_use]
    pub fn with_diagnostics(mut self, diag: Box<dyn DiagnosticSink>) -> Self {
        self.diag = diag;
        self
    }

    /// The configured lookup title.
    #[must_use]
    pub fn window_title(&self) -> &str {
        &self.window_title
    }

    /// The standard coordinate space as a rectangle anchored at the
    /// origin.
    #[must_use]
    pub fn standard_rect(&self) -> Rect {
        self.standard_rect
    }

    /// The currently cached snapshot, without triggering a re-lookup.
    #[must_use]
    pub fn cached_window(&self) -> Option<&WindowInfo> {
        self.cached.as_ref()
    }

    /// Re-query the platform and cache the first window whose title
    /// exactly equals the configured title, or `None` when nothing
    /// matches. Ties go to the platform's enumeration order.
    pub fn refresh_lookup(&mut self) {
        let title = self.window_title.as_str();
        self.cached = self
            .query
            .list_onscreen_windows()
            .into_iter()
            .find(|w| w.title == title);
    }

    /// Drop the cached snapshot so the next validity check re-queries.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Whether a matching window currently exists.
    ///
    /// Refreshes the lookup only when nothing is cached, so a snapshot
    /// of a window that has since closed still counts as valid until
    /// [`Self::invalidate`] is called.
    pub fn is_valid(&mut self) -> bool {
        self.snapshot().is_some()
    }

    /// Whether the matched window's owning process is the foreground
    /// application. False when invalid or the process cannot be
    /// resolved.
    pub fn is_active(&mut self) -> bool {
        let Some(info) = self.snapshot() else {
            return false;
        };
        match self.query.resolve_process(info.owner_pid) {
            Some(proc) => proc.is_foreground(),
            None => false,
        }
    }

    /// Whether the window's reported size differs from the standard
    /// resolution. False when the window cannot be determined.
    pub fn is_scaled(&mut self) -> bool {
        match self.snapshot() {
            Some(info) => {
                info.bounds.width() != f64::from(self.standard_width)
                    || info.bounds.height() != f64::from(self.standard_height)
            }
            None => false,
        }
    }

    /// Bring the matched window's application to the foreground.
    ///
    /// False when invalid or the process cannot be resolved. A platform
    /// failure is routed to the diagnostic sink and also surfaces as
    /// false; this call never panics or propagates an error.
    pub fn activate(&mut self) -> bool {
        let Some(info) = self.snapshot() else {
            return false;
        };
        let Some(proc) = self.query.resolve_process(info.owner_pid) else {
            return false;
        };
        match proc.bring_to_foreground() {
            Ok(ok) => ok,
            Err(err) => {
                self.diag.log(
                    "activate_failed",
                    &format!(
                        "title={:?} pid={} err={}",
                        self.window_title, info.owner_pid, err
                    ),
                );
                false
            }
        }
    }

    /// The window's usable on-screen rectangle, or `None` when invalid.
    ///
    /// The reported top edge is shifted down by the title-bar offset;
    /// the left edge and the bottom-right corner are returned as
    /// reported, in native bounds coordinates.
    pub fn window_rect(&mut self) -> Option<Rect> {
        let bounds = self.snapshot()?.bounds;
        Some(Rect::from_corners(
            bounds.x,
            bounds.y + self.title_bar_offset,
            bounds.x + bounds.width(),
            bounds.y + bounds.height(),
        ))
    }

    /// Scale a standard-resolution position into window-relative
    /// coordinates.
    ///
    /// Scale factors are per-axis ratios of the reported window size to
    /// the standard resolution; aspect ratio is not preserved. Returns
    /// `None` when the window is invalid or the scaled point falls
    /// outside the reported `[0, width] × [0, height]` extent.
    pub fn scale_point(&mut self, game_pos: Point) -> Option<Point> {
        let bounds = self.snapshot()?.bounds;
        let xs = bounds.width() / f64::from(self.standard_width);
        let ys = bounds.height() / f64::from(self.standard_height);
        let scaled = Point::new(game_pos.x * xs, game_pos.y * ys);
        self.is_valid_game_pos(scaled, Some(&bounds)).then_some(scaled)
    }

    /// Map a standard-resolution position to screen coordinates:
    /// [`Self::scale_point`] translated by the window rectangle's
    /// origin.
    ///
    /// Not clamped against physical screen bounds; a window dragged
    /// partially off-screen can map to a point outside every display.
    pub fn to_screen_point(&mut self, game_pos: Point) -> Option<Point> {
        let rect = self.window_rect()?;
        let scaled = self.scale_point(game_pos)?;
        Some(rect.left_top() + scaled)
    }

    /// Whether a window-relative position lies inside `rect` (both
    /// edges inclusive, rect treated as anchored at the origin), or
    /// inside the standard rectangle when `rect` is `None`.
    #[must_use]
    pub fn is_valid_game_pos(&self, pos: Point, rect: Option<&Rect>) -> bool {
        let rect = rect.unwrap_or(&self.standard_rect);
        0.0 <= pos.x && pos.x <= rect.width() && 0.0 <= pos.y && pos.y <= rect.height()
    }

    /// Cached snapshot, refreshing first when the cache is empty.
    fn snapshot(&mut self) -> Option<WindowInfo> {
        if self.cached.is_none() {
            self.refresh_lookup();
        }
        self.cached.clone()
    }
}


#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;

    use super::tests_support::single_window_mapper;
    use crate::geom::{Point, Rect};

    fn bounds_strategy() -> impl Strategy<Value = Rect> {
        (
            -2000.0f64..2000.0,
            -2000.0f64..2000.0,
            1.0f64..5000.0,
            1.0f64..5000.0,
        )
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn scaled_points_stay_inside_reported_extent(
            bounds in bounds_strategy(),
            px in -4000.0f64..4000.0,
            py in -4000.0f64..4000.0,
        ) {
            let mut mapper = single_window_mapper(bounds);
            if let Some(scaled) = mapper.scale_point(Point::new(px, py)) {
                prop_assert!(scaled.x >= 0.0 && scaled.x <= bounds.width());
                prop_assert!(scaled.y >= 0.0 && scaled.y <= bounds.height());
            }
        }

        #[test]
        fn screen_point_composes_rect_origin_and_scaling(
            bounds in bounds_strategy(),
            px in -4000.0f64..4000.0,
            py in -4000.0f64..4000.0,
        ) {
            let mut mapper = single_window_mapper(bounds);
            let pos = Point::new(px, py);
            let composed = mapper
                .scale_point(pos)
                .and_then(|s| mapper.window_rect().map(|r| r.left_top() + s));
            prop_assert_eq!(mapper.to_screen_point(pos), composed);
        }

        #[test]
        fn window_rect_moves_only_the_top_edge(bounds in bounds_strategy()) {
            let mut mapper = single_window_mapper(bounds);
            let rect = mapper.window_rect().expect("window is present");
            prop_assert_eq!(rect.left_top().x, bounds.x);
            prop_assert_eq!(
                rect.left_top().y,
                bounds.y + super::DEFAULT_TITLE_BAR_OFFSET
            );
            prop_assert_eq!(rect.right_bottom(), bounds.right_bottom());
        }
    }
}
