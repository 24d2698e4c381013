/// The charts the menu can mount.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    AnnotatedLine,
    AnimatedScatter,
    #[default]
    TransitionScatter,
}

impl ChartKind {
    /// Menu order.
    pub const ALL: [Self; 3] = [
        Self::AnnotatedLine,
        Self::AnimatedScatter,
        Self::TransitionScatter,
    ];

    /// Menu entry text, also used as the entry id.
    pub fn label(self) -> &'static str {
        match self {
            Self::AnnotatedLine => "Annotated Line Chart",
            Self::AnimatedScatter => "Animated Scatterplot",
            Self::TransitionScatter => "Transition Scatterplot",
        }
    }

    /// Resolve a menu entry id. Unknown ids fall back to the annotated line chart.
    pub fn from_menu_id(id: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|k| k.label() == id)
            .unwrap_or_else(|| {
                tracing::warn!(id, "unknown menu id, falling back to the line chart");
                Self::AnnotatedLine
            })
    }
}

/// One rendered menu entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub kind: ChartKind,
    pub label: &'static str,
    pub selected: bool,
}

/// Menu panel state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
    pub entries: Vec<MenuEntry>,
}

impl MenuState {
    pub fn new(open: bool, selected: ChartKind) -> Self {
        Self {
            open,
            entries: ChartKind::ALL
                .into_iter()
                .map(|kind| MenuEntry {
                    kind,
                    label: kind.label(),
                    selected: kind == selected,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shell/menu.rs"]
mod tests;
