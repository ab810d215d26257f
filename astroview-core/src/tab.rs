//! Panel tabs and cyclic tab navigation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Apod,
    Mars,
    Missions,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Apod => "Astronomy Picture",
            Tab::Mars => "Mars Photos",
            Tab::Missions => "Historic Missions",
        }
    }

    pub fn all() -> &'static [Tab] {
        &[Tab::Apod, Tab::Mars, Tab::Missions]
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Self::all().get(index).copied()
    }

    pub fn next(&self) -> Tab {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(&self) -> Tab {
        let all = Self::all();
        let idx = self.index();
        let prev = if idx == 0 { all.len() - 1 } else { idx - 1 };
        all[prev]
    }
}

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_tab() -> impl Strategy<Value = Tab> {
        prop_oneof![Just(Tab::Apod), Just(Tab::Mars), Just(Tab::Missions)]
    }

    proptest! {
        #[test]
        fn prop_tab_next_cycles(tab in arb_tab()) {
            let mut current = tab;
            for _ in 0..Tab::all().len() {
                current = current.next();
            }
            prop_assert_eq!(current, tab);
        }

        #[test]
        fn prop_tab_previous_undoes_next(tab in arb_tab()) {
            prop_assert_eq!(tab.next().previous(), tab);
        }

        #[test]
        fn prop_tab_index_roundtrips(tab in arb_tab()) {
            prop_assert_eq!(Tab::from_index(tab.index()), Some(tab));
            prop_assert!(!tab.title().is_empty());
        }
    }
}
