use std::fmt;
use std::str::FromStr;

use crate::astar::AStar;
use crate::bfs::BreadthFirst;
use crate::greedy::GreedyBestFirst;
use crate::traits::Strategy;

/// The selectable search strategies, in menu order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    AStar,
    /// Breadth-first search, shown as "Dijkstra" in the menu.
    Bfs,
    Greedy,
}

impl Algorithm {
    /// All algorithms in carousel order.
    pub const ALL: [Algorithm; 3] = [Self::AStar, Self::Bfs, Self::Greedy];

    /// Menu label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::AStar => "A-Star",
            Self::Bfs => "Dijkstra",
            Self::Greedy => "Greedy",
        }
    }

    /// Next algorithm in the carousel, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous algorithm in the carousel, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        match self {
            Self::AStar => 0,
            Self::Bfs => 1,
            Self::Greedy => 2,
        }
    }

    /// The strategy implementing this algorithm.
    pub fn strategy(self) -> &'static dyn Strategy {
        match self {
            Self::AStar => &AStar,
            Self::Bfs => &BreadthFirst,
            Self::Greedy => &GreedyBestFirst,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when an algorithm name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d} (expected astar, dijkstra, bfs or greedy)",
            self.0
        )
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "astar" | "a*" | "a-star" => Ok(Self::AStar),
            "dijkstra" | "bfs" => Ok(Self::Bfs),
            "greedy" => Ok(Self::Greedy),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carousel_wraps_both_ways() {
        assert_eq!(Algorithm::AStar.next(), Algorithm::Bfs);
        assert_eq!(Algorithm::Greedy.next(), Algorithm::AStar);
        assert_eq!(Algorithm::AStar.prev(), Algorithm::Greedy);
        for a in Algorithm::ALL {
            assert_eq!(a.next().prev(), a);
        }
    }

    #[test]
    fn labels_match_menu() {
        let labels: Vec<&str> = Algorithm::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(labels, vec!["A-Star", "Dijkstra", "Greedy"]);
    }

    #[test]
    fn parse_names() {
        assert_eq!("A*".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!(" Dijkstra ".parse::<Algorithm>(), Ok(Algorithm::Bfs));
        assert_eq!("bfs".parse::<Algorithm>(), Ok(Algorithm::Bfs));
        assert_eq!("GREEDY".parse::<Algorithm>(), Ok(Algorithm::Greedy));
        assert!("dfs".parse::<Algorithm>().is_err());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn algorithm_round_trip() {
        for a in Algorithm::ALL {
            let json = serde_json::to_string(&a).unwrap();
            let back: Algorithm = serde_json::from_str(&json).unwrap();
            assert_eq!(a, back);
        }
    }
}
