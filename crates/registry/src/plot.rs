//! Plots: axis-aligned rectangular land parcels with an optional owner.
//!
//! Geometry is validated at construction: origins are non-negative and
//! extents strictly positive, mirroring the CHECK constraints the store
//! installs. Plots are allowed to overlap each other — the registry makes
//! no exclusivity claim about village land.

use std::collections::BTreeSet;

use bevy::math::Rect;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::owner::OwnerId;

pub type PlotId = i64;

/// Rejected plot geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// x or y below zero.
    NegativeOrigin,
    /// width or height not strictly positive.
    EmptyExtent,
}

impl std::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeOrigin => write!(f, "plot origin must be non-negative"),
            Self::EmptyExtent => write!(f, "plot width and height must be positive"),
        }
    }
}

impl std::error::Error for GeometryError {}

/// Validated axis-aligned rectangle in land units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotRect {
    x: i64,
    y: i64,
    width: i64,
    height: i64,
}

impl PlotRect {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Result<Self, GeometryError> {
        if x < 0 || y < 0 {
            return Err(GeometryError::NegativeOrigin);
        }
        if width <= 0 || height <= 0 {
            return Err(GeometryError::EmptyExtent);
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> i64 {
        self.y
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    /// The rectangle in float land coordinates (min = origin, y down).
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.x as f32,
            self.y as f32,
            (self.x + self.width) as f32,
            (self.y + self.height) as f32,
        )
    }

    pub fn centroid(&self) -> Vec2 {
        self.rect().center()
    }
}

/// One plot as loaded by the startup fetch: geometry plus the joined owner
/// name, so the map can label parcels without a second lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plot {
    pub id: PlotId,
    pub owner_id: Option<OwnerId>,
    pub owner_name: Option<String>,
    pub rect: PlotRect,
    pub created_at_ms: i64,
}

/// All plots, ordered by creation time as delivered by the startup fetch.
/// The fill palette cycles by position in this list.
#[derive(Resource, Default, Debug, Clone)]
pub struct PlotLedger(pub Vec<Plot>);

impl PlotLedger {
    /// Bounding box over the plots with the given ids, or `None` when no id
    /// matches. Used to auto-frame search results.
    pub fn bounding_box(&self, ids: &BTreeSet<PlotId>) -> Option<Rect> {
        let mut bounds: Option<Rect> = None;
        for plot in self.0.iter().filter(|p| ids.contains(&p.id)) {
            let r = plot.rect.rect();
            bounds = Some(match bounds {
                Some(b) => b.union(r),
                None => r,
            });
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plot(id: PlotId, x: i64, y: i64, w: i64, h: i64) -> Plot {
        Plot {
            id,
            owner_id: None,
            owner_name: None,
            rect: PlotRect::new(x, y, w, h).unwrap(),
            created_at_ms: 0,
        }
    }

    #[test]
    fn rejects_negative_origin() {
        assert_eq!(
            PlotRect::new(-1, 0, 10, 10),
            Err(GeometryError::NegativeOrigin)
        );
        assert_eq!(
            PlotRect::new(0, -5, 10, 10),
            Err(GeometryError::NegativeOrigin)
        );
    }

    #[test]
    fn rejects_empty_extent() {
        assert_eq!(PlotRect::new(0, 0, 0, 10), Err(GeometryError::EmptyExtent));
        assert_eq!(PlotRect::new(0, 0, 10, -2), Err(GeometryError::EmptyExtent));
    }

    #[test]
    fn centroid_is_rect_center() {
        let r = PlotRect::new(10, 20, 30, 40).unwrap();
        assert_eq!(r.centroid(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn bounding_box_covers_only_requested_ids() {
        let ledger = PlotLedger(vec![
            plot(1, 0, 0, 10, 10),
            plot(2, 100, 100, 20, 20),
            plot(3, 500, 500, 50, 50),
        ]);
        let ids: BTreeSet<PlotId> = [1, 2].into_iter().collect();
        let bbox = ledger.bounding_box(&ids).unwrap();
        assert_eq!(bbox.min, Vec2::new(0.0, 0.0));
        assert_eq!(bbox.max, Vec2::new(120.0, 120.0));
    }

    #[test]
    fn bounding_box_empty_for_no_match() {
        let ledger = PlotLedger(vec![plot(1, 0, 0, 10, 10)]);
        let ids: BTreeSet<PlotId> = [9].into_iter().collect();
        assert!(ledger.bounding_box(&ids).is_none());
    }
}
