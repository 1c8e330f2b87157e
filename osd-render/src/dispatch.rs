//! Explicit render dependency table.
//!
//! Each view declares the inputs it subscribes to, and a changed input
//! maps to exactly the affected views. Sibling views triggered by the
//! same event are independent: no ordering, no shared profile cache.

/// The dashboard's visual outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Map,
    Temperature,
    Salinity,
    Oxygen,
}

pub const ALL_VIEWS: [ViewId; 4] = [
    ViewId::Map,
    ViewId::Temperature,
    ViewId::Salinity,
    ViewId::Oxygen,
];

/// The interaction/control inputs views can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputId {
    Hover,
    MapHeight,
    DotColor,
    Basemap,
    DepthLimit,
}

/// The inputs a view subscribes to. The map ignores hover (hovering must
/// not redraw the map under the cursor); the profile charts ignore the
/// map styling controls.
pub fn subscriptions(view: ViewId) -> &'static [InputId] {
    match view {
        ViewId::Map => &[InputId::MapHeight, InputId::DotColor, InputId::Basemap],
        ViewId::Temperature | ViewId::Salinity | ViewId::Oxygen => {
            &[InputId::Hover, InputId::DepthLimit]
        }
    }
}

/// Exactly the views subscribed to the changed input, nothing else.
pub fn affected_views(changed: InputId) -> Vec<ViewId> {
    ALL_VIEWS
        .iter()
        .copied()
        .filter(|view| subscriptions(*view).contains(&changed))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_triggers_only_profile_charts() {
        let views = affected_views(InputId::Hover);
        assert_eq!(
            views,
            vec![ViewId::Temperature, ViewId::Salinity, ViewId::Oxygen]
        );
        assert!(!views.contains(&ViewId::Map));
    }

    #[test]
    fn test_depth_limit_triggers_only_profile_charts() {
        let views = affected_views(InputId::DepthLimit);
        assert!(!views.contains(&ViewId::Map));
        assert_eq!(views.len(), 3);
    }

    #[test]
    fn test_map_controls_trigger_only_map() {
        for input in [InputId::MapHeight, InputId::DotColor, InputId::Basemap] {
            assert_eq!(affected_views(input), vec![ViewId::Map]);
        }
    }

    #[test]
    fn test_every_view_subscribes_to_something() {
        for view in ALL_VIEWS {
            assert!(!subscriptions(view).is_empty());
        }
    }
}
