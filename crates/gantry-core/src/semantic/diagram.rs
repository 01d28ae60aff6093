//! Core diagram structure types.
//!
//! This module contains the fundamental building blocks of the semantic model:
//! - [`Diagram`] - The root diagram type with title, direction, and scope
//! - [`Scope`] - Container for diagram elements
//! - [`RankDirection`] - Overall layout direction of the rendered diagram

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::semantic::element::Element;

/// A scope containing a sequence of diagram elements.
///
/// A scope represents an ordered container for diagram elements (nodes,
/// clusters, edges) and forms the building block for both the top-level
/// diagram and nested cluster contents. Element order is preserved; it
/// determines emission order and therefore output determinism.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    elements: Vec<Element>,
}

impl Scope {
    /// Create a new Scope from a list of elements.
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// Borrow the elements contained in this scope.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

/// Overall rank direction of the rendered diagram.
///
/// Maps onto the backend's `rankdir` graph attribute. The names match
/// external configuration strings (snake_case).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankDirection {
    /// Top to bottom (default)
    #[default]
    TopBottom,
    /// Left to right
    LeftRight,
    /// Bottom to top
    BottomTop,
    /// Right to left
    RightLeft,
}

impl RankDirection {
    /// Returns the backend `rankdir` attribute value for this direction.
    pub fn to_rankdir(self) -> &'static str {
        match self {
            Self::TopBottom => "TB",
            Self::LeftRight => "LR",
            Self::BottomTop => "BT",
            Self::RightLeft => "RL",
        }
    }
}

impl FromStr for RankDirection {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top_bottom" | "TB" => Ok(Self::TopBottom),
            "left_right" | "LR" => Ok(Self::LeftRight),
            "bottom_top" | "BT" => Ok(Self::BottomTop),
            "right_left" | "RL" => Ok(Self::RightLeft),
            _ => Err("Unsupported rank direction"),
        }
    }
}

impl Display for RankDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::TopBottom => "top_bottom",
            Self::LeftRight => "left_right",
            Self::BottomTop => "bottom_top",
            Self::RightLeft => "right_left",
        };
        write!(f, "{s}")
    }
}

/// The root of the semantic diagram model.
///
/// A diagram is a title, a layout direction, and a top-level scope of
/// elements. It is constructed once, rendered once, and has no state beyond
/// the emitted artifact.
#[derive(Debug, Clone)]
pub struct Diagram {
    title: String,
    direction: RankDirection,
    scope: Scope,
}

impl Diagram {
    /// Create a new Diagram with its title, rank direction, and scope.
    pub fn new(title: impl Into<String>, direction: RankDirection, scope: Scope) -> Self {
        Self {
            title: title.into(),
            direction,
            scope,
        }
    }

    /// Get the diagram title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the configured rank direction for this diagram.
    pub fn direction(&self) -> RankDirection {
        self.direction
    }

    /// Borrow the diagram's top-level scope.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Returns the output filename stem derived from the title.
    ///
    /// The title is lowercased and runs of whitespace collapse to a single
    /// underscore, so "Sock Shop Architecture" becomes
    /// "sock_shop_architecture".
    pub fn output_stem(&self) -> String {
        self.title
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
            .to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_rank_direction_default() {
        assert_eq!(RankDirection::default(), RankDirection::TopBottom);
        assert_eq!(RankDirection::default().to_rankdir(), "TB");
    }

    #[test]
    fn test_rank_direction_from_str() {
        assert_eq!(
            RankDirection::from_str("top_bottom").unwrap(),
            RankDirection::TopBottom
        );
        assert_eq!(
            RankDirection::from_str("LR").unwrap(),
            RankDirection::LeftRight
        );
        assert!(RankDirection::from_str("diagonal").is_err());
    }

    #[test]
    fn test_rank_direction_display_round_trip() {
        for dir in [
            RankDirection::TopBottom,
            RankDirection::LeftRight,
            RankDirection::BottomTop,
            RankDirection::RightLeft,
        ] {
            assert_eq!(RankDirection::from_str(&dir.to_string()).unwrap(), dir);
        }
    }

    #[test]
    fn test_output_stem() {
        let diagram = Diagram::new(
            "Sock Shop Microservices Architecture",
            RankDirection::TopBottom,
            Scope::default(),
        );
        assert_eq!(diagram.output_stem(), "sock_shop_microservices_architecture");
    }

    #[test]
    fn test_output_stem_collapses_whitespace() {
        let diagram = Diagram::new("A   Few\tWords", RankDirection::TopBottom, Scope::default());
        assert_eq!(diagram.output_stem(), "a_few_words");
    }

    proptest! {
        #[test]
        fn prop_output_stem_has_no_whitespace_or_uppercase(title in ".{0,64}") {
            let diagram = Diagram::new(title, RankDirection::TopBottom, Scope::default());
            let stem = diagram.output_stem();
            prop_assert!(!stem.chars().any(char::is_whitespace));
            prop_assert!(!stem.chars().any(|c| c.is_ascii_uppercase()));
        }
    }
}
