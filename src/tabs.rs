//! Tab display helper for the network tabs.
//!
//! Maps `(active_index, index)` to panel visibility and to the id pairs that
//! tie a tab control to its panel for assistive technology.

use serde::Serialize;

const TAB_ID_PREFIX: &str = "network-tab";
const PANEL_ID_PREFIX: &str = "network-tabpanel";

/// Attributes of a tab control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabAttributes {
    pub id: String,
    /// `aria-controls`: id of the panel this tab shows
    pub controls: String,
}

/// Attributes of a tab panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelAttributes {
    pub role: &'static str,
    pub hidden: bool,
    pub id: String,
    /// `aria-labelledby`: id of the tab that labels this panel
    pub aria_labelledby: String,
}

pub fn tab_id(index: usize) -> String {
    format!("{}-{}", TAB_ID_PREFIX, index)
}

pub fn panel_id(index: usize) -> String {
    format!("{}-{}", PANEL_ID_PREFIX, index)
}

pub fn is_visible(active_index: usize, index: usize) -> bool {
    active_index == index
}

pub fn accessibility_attributes(index: usize) -> TabAttributes {
    TabAttributes {
        id: tab_id(index),
        controls: panel_id(index),
    }
}

pub fn panel_attributes(active_index: usize, index: usize) -> PanelAttributes {
    PanelAttributes {
        role: "tabpanel",
        hidden: !is_visible(active_index, index),
        id: panel_id(index),
        aria_labelledby: tab_id(index),
    }
}

/// Render a panel element; `children` is only emitted for the visible panel.
pub fn render_panel(active_index: usize, index: usize, children: &str) -> String {
    let attrs = panel_attributes(active_index, index);
    let hidden = if attrs.hidden { " hidden" } else { "" };
    let body = if attrs.hidden { "" } else { children };

    format!(
        r#"<div role="{}"{} id="{}" aria-labelledby="{}">{}</div>"#,
        attrs.role, hidden, attrs.id, attrs.aria_labelledby, body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_attributes_for_index_two() {
        let tab = accessibility_attributes(2);
        assert_eq!(tab.id, "network-tab-2");
        assert_eq!(tab.controls, "network-tabpanel-2");

        let panel = panel_attributes(0, 2);
        assert_eq!(panel.role, "tabpanel");
        assert!(panel.hidden);
        assert_eq!(panel.id, "network-tabpanel-2");
        assert_eq!(panel.aria_labelledby, "network-tab-2");
    }

    #[test]
    fn test_render_visible_panel() {
        assert_eq!(
            render_panel(1, 1, "<form></form>"),
            r#"<div role="tabpanel" id="network-tabpanel-1" aria-labelledby="network-tab-1"><form></form></div>"#
        );
    }

    #[test]
    fn test_render_hidden_panel_drops_children() {
        assert_eq!(
            render_panel(0, 1, "<form></form>"),
            r#"<div role="tabpanel" hidden id="network-tabpanel-1" aria-labelledby="network-tab-1"></div>"#
        );
    }

    proptest! {
        #[test]
        fn prop_visible_iff_indices_equal(active in 0usize..10_000, index in 0usize..10_000) {
            prop_assert_eq!(is_visible(active, index), active == index);
            prop_assert_eq!(panel_attributes(active, index).hidden, active != index);
        }

        #[test]
        fn prop_tab_and_panel_reference_each_other(active in 0usize..10_000, index in 0usize..10_000) {
            let tab = accessibility_attributes(index);
            let panel = panel_attributes(active, index);
            prop_assert_eq!(&tab.controls, &panel.id);
            prop_assert_eq!(&panel.aria_labelledby, &tab.id);
        }
    }
}
