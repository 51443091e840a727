//! Seat layout resolver.
//!
//! Each viewer derives its own layout from the shared roster order: the
//! roster is sorted ascending by id so every viewer starts from the same base
//! order, then rotated so the viewer lands on the fixed reference seat at the
//! bottom of the table. Absolute angles therefore differ per viewer, but the
//! cyclic order of the other participants around the ellipse is identical
//! everywhere.
//!
//! Layouts are never stored; they are recomputed in full (O(N)) whenever the
//! roster changes, which is what keeps them trivially consistent across
//! join/leave races.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::entities::ParticipantId;

/// Bearing of the viewer's own seat: straight down, seat 0.
pub const REFERENCE_BEARING_DEG: f32 = -90.0;

/// Ellipse the seats are projected onto.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct TableGeometry {
    pub radius_x: f32,
    pub radius_y: f32,
}

impl Default for TableGeometry {
    fn default() -> Self {
        Self {
            radius_x: 8.0,
            radius_y: 5.0,
        }
    }
}

/// A participant's derived position from one viewer's perspective. Carries no
/// gameplay semantics.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct SeatPosition {
    /// Rotation-relative seat index; the viewer is always seat 0.
    pub seat: usize,
    pub angle_deg: f32,
    pub x: f32,
    pub y: f32,
}

/// Computes the seat layout for `viewer`. Returns `None` when the viewer is
/// not (yet) in the roster; callers retry after the next roster sync.
///
/// Seat 0 sits at [`REFERENCE_BEARING_DEG`] and the remaining seats are
/// spaced `360 / N` degrees apart, proceeding clockwise.
pub fn compute_seats(
    roster: &[ParticipantId],
    viewer: ParticipantId,
    geometry: &TableGeometry,
) -> Option<BTreeMap<ParticipantId, SeatPosition>> {
    let mut ordered = roster.to_vec();
    ordered.sort_unstable();
    ordered.dedup();

    let viewer_index = ordered.iter().position(|&id| id == viewer)?;
    let n = ordered.len();
    let spacing = 360.0 / n as f32;

    let mut seats = BTreeMap::new();
    for (i, &id) in ordered.iter().enumerate() {
        // Rotate the table so the viewer lands on seat 0.
        let seat = (i + n - viewer_index) % n;
        let angle_deg = REFERENCE_BEARING_DEG - seat as f32 * spacing;
        let angle_rad = angle_deg.to_radians();
        seats.insert(
            id,
            SeatPosition {
                seat,
                angle_deg,
                x: angle_rad.cos() * geometry.radius_x,
                y: angle_rad.sin() * geometry.radius_y,
            },
        );
    }
    Some(seats)
}
