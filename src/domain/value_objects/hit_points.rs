/// Current and maximum hit points of a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitPoints {
    pub current: i32,
    pub max: i32,
}

impl HitPoints {
    /// Caps `stored` at `max`. There is no lower bound.
    pub fn clamped(stored: i32, max: i32) -> Self {
        Self {
            current: stored.min(max),
            max,
        }
    }
}
