//! Current search selection: the matched owner and the highlight set of
//! their plot ids. Written by the ui crate, read by the rendering crate.

use std::collections::BTreeSet;

use bevy::prelude::*;

use crate::owner::OwnerId;
use crate::plot::PlotId;

#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub struct MapSelection {
    pub owner: Option<OwnerId>,
    pub highlighted: BTreeSet<PlotId>,
}

impl MapSelection {
    pub fn is_highlighted(&self, id: PlotId) -> bool {
        self.highlighted.contains(&id)
    }

    pub fn clear(&mut self) {
        self.owner = None;
        self.highlighted.clear();
    }
}
