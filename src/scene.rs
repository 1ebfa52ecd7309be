//! Scene selection: maps playback time to a background scene label.
//!
//! Boundaries are an ordered table of exclusive upper bounds with a final
//! catch-all label. The table is data, not a conditional chain, so custom
//! tables can be tested in isolation.

/// One scene bucket: active while `current_time < upper_bound`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneBoundary {
    pub upper_bound: f64,
    pub label: &'static str,
}

impl SceneBoundary {
    pub const fn new(upper_bound: f64, label: &'static str) -> Self {
        Self { upper_bound, label }
    }
}

/// An ordered scene lookup table with a catch-all for times past the last
/// boundary. Compiled-in constant data, never mutated at runtime.
#[derive(Debug, Clone, Copy)]
pub struct SceneTable {
    boundaries: &'static [SceneBoundary],
    fallback: &'static str,
}

impl SceneTable {
    /// `boundaries` must be in ascending `upper_bound` order.
    pub const fn new(boundaries: &'static [SceneBoundary], fallback: &'static str) -> Self {
        Self { boundaries, fallback }
    }

    /// Label of the first boundary whose upper bound exceeds `current_time`.
    ///
    /// Upper bounds are exclusive: a time exactly on a boundary belongs to
    /// the next bucket. Negative times fall in the first bucket and times
    /// past every boundary get the catch-all, so this is total over all
    /// inputs.
    pub fn locate(&self, current_time: f64) -> &'static str {
        for boundary in self.boundaries {
            if current_time < boundary.upper_bound {
                return boundary.label;
            }
        }
        self.fallback
    }
}

/// Default scene schedule for the track, roughly one scene per verse.
pub const DEFAULT_SCENES: SceneTable = SceneTable::new(
    &[
        SceneBoundary::new(22.0, "scene1"),
        SceneBoundary::new(44.0, "scene2"),
        SceneBoundary::new(67.0, "scene3"),
        SceneBoundary::new(89.0, "scene4"),
        SceneBoundary::new(111.0, "scene5"),
        SceneBoundary::new(133.0, "scene6"),
        SceneBoundary::new(156.0, "scene7"),
        SceneBoundary::new(178.0, "scene8"),
    ],
    "scene9",
);

/// Scene label at `current_time` against the default table.
pub fn locate_scene(current_time: f64) -> &'static str {
    DEFAULT_SCENES.locate(current_time)
}
