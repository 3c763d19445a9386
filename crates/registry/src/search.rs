//! Owner search: case-insensitive substring match over the name-ordered
//! owner list. First textual match wins — no fuzzy matching or ranking.

use std::collections::BTreeSet;

use crate::owner::{Owner, OwnerId};
use crate::plot::{Plot, PlotId};

/// Find the first owner whose name contains the trimmed query,
/// case-insensitively. Returns `None` for a blank query or when nobody
/// matches. `owners` is expected to be in name order (as fetched).
pub fn find_owner<'a>(query: &str, owners: &'a [Owner]) -> Option<&'a Owner> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    owners
        .iter()
        .find(|owner| owner.name.to_lowercase().contains(&needle))
}

/// Collect the ids of the plots held by `owner`.
pub fn plots_of(owner: OwnerId, plots: &[Plot]) -> BTreeSet<PlotId> {
    plots
        .iter()
        .filter(|plot| plot.owner_id == Some(owner))
        .map(|plot| plot.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::PlotRect;

    fn owner(id: OwnerId, name: &str) -> Owner {
        Owner {
            id,
            name: name.to_string(),
            created_at_ms: 0,
        }
    }

    fn plot(id: PlotId, owner_id: Option<OwnerId>) -> Plot {
        Plot {
            id,
            owner_id,
            owner_name: None,
            rect: PlotRect::new(0, 0, 10, 10).unwrap(),
            created_at_ms: 0,
        }
    }

    #[test]
    fn first_match_in_name_order_wins() {
        // Name-ordered directory: "Ann" sorts before "Anna".
        let owners = vec![owner(1, "Ann"), owner(2, "Anna"), owner(3, "Bart")];
        let hit = find_owner("ann", &owners).unwrap();
        assert_eq!(hit.name, "Ann");
    }

    #[test]
    fn match_is_case_insensitive_substring() {
        let owners = vec![owner(1, "Bartholomew Kettle")];
        assert!(find_owner("KETTLE", &owners).is_some());
        assert!(find_owner("  olome  ", &owners).is_some());
    }

    #[test]
    fn no_match_and_blank_query_yield_none() {
        let owners = vec![owner(1, "Ann")];
        assert!(find_owner("zzz", &owners).is_none());
        assert!(find_owner("", &owners).is_none());
        assert!(find_owner("   ", &owners).is_none());
    }

    #[test]
    fn plots_of_collects_only_that_owner() {
        let plots = vec![
            plot(10, Some(1)),
            plot(11, Some(2)),
            plot(12, Some(1)),
            plot(13, None),
        ];
        let ids = plots_of(1, &plots);
        assert_eq!(ids, [10, 12].into_iter().collect());
        assert!(plots_of(9, &plots).is_empty());
    }
}
