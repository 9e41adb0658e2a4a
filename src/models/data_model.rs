// src/models/data_model.rs
//
// The snake model catalog: named configurations of 24 canonical joint
// angles. Models are loaded once and never mutated afterwards.

use regex::Regex;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::models::catalog;

pub const NODE_COUNT: usize = 24;

/// Canonical joint angle. Live angles pass through intermediate values
/// while morphing but always converge to one of these four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeAngle {
    Zero,
    Left,
    Pin,
    Right,
}

impl NodeAngle {
    pub fn degrees(self) -> f32 {
        match self {
            NodeAngle::Zero => 0.0,
            NodeAngle::Left => 90.0,
            NodeAngle::Pin => 180.0,
            NodeAngle::Right => 270.0,
        }
    }

    pub fn letter(self) -> char {
        match self {
            NodeAngle::Zero => 'Z',
            NodeAngle::Left => 'L',
            NodeAngle::Pin => 'P',
            NodeAngle::Right => 'R',
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'Z' => Some(NodeAngle::Zero),
            'L' => Some(NodeAngle::Left),
            'P' => Some(NodeAngle::Pin),
            'R' => Some(NodeAngle::Right),
            _ => None,
        }
    }

    /// Exact match against the four canonical values, mod 360.
    pub fn from_degrees(deg: f32) -> Option<Self> {
        let deg = deg.rem_euclid(360.0);
        if deg == 0.0 {
            Some(NodeAngle::Zero)
        } else if deg == 90.0 {
            Some(NodeAngle::Left)
        } else if deg == 180.0 {
            Some(NodeAngle::Pin)
        } else if deg == 270.0 {
            Some(NodeAngle::Right)
        } else {
            None
        }
    }

    /// Rotate by quarter turns; +1 is +90 degrees.
    pub fn turned(self, quarter_turns: i32) -> Self {
        let base = match self {
            NodeAngle::Zero => 0,
            NodeAngle::Left => 1,
            NodeAngle::Pin => 2,
            NodeAngle::Right => 3,
        };
        match (base + quarter_turns).rem_euclid(4) {
            0 => NodeAngle::Zero,
            1 => NodeAngle::Left,
            2 => NodeAngle::Pin,
            _ => NodeAngle::Right,
        }
    }
}

impl fmt::Display for NodeAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SnakeModel {
    pub name: String,
    pub nodes: [NodeAngle; NODE_COUNT],
}

impl SnakeModel {
    pub fn new(name: impl Into<String>, nodes: [NodeAngle; NODE_COUNT]) -> Self {
        Self {
            name: name.into(),
            nodes,
        }
    }

    /// Parse one line of the dump format: `name: Z L P R ...` (24 tokens).
    /// Returns None for comments, blank lines and malformed input.
    pub fn parse_line(line: &str) -> Option<Self> {
        let re = Regex::new(r"^\s*([^:#][^:]*?)\s*:\s*((?:[ZLPR]\s+){23}[ZLPR])\s*$")
            .expect("model line pattern is well-formed");
        let caps = re.captures(line)?;
        let nodes = nodes_from_letters(caps.get(2)?.as_str())?;
        Some(Self::new(caps.get(1)?.as_str(), nodes))
    }

    pub fn angles(&self) -> [f32; NODE_COUNT] {
        let mut out = [0.0; NODE_COUNT];
        for (slot, node) in out.iter_mut().zip(self.nodes.iter()) {
            *slot = node.degrees();
        }
        out
    }
}

/// Single-line dump encoding: name, colon, one letter per joint.
pub fn dump_line(name: &str, nodes: &[NodeAngle; NODE_COUNT]) -> String {
    let letters: Vec<String> = nodes.iter().map(|n| n.letter().to_string()).collect();
    format!("{}: {}", name, letters.join(" "))
}

/// Parse a whitespace-separated run of Z/L/P/R letters into a node array.
pub fn nodes_from_letters(letters: &str) -> Option<[NodeAngle; NODE_COUNT]> {
    let mut nodes = [NodeAngle::Zero; NODE_COUNT];
    let mut count = 0;
    for token in letters.split_whitespace() {
        if count == NODE_COUNT || token.len() != 1 {
            return None;
        }
        nodes[count] = NodeAngle::from_letter(token.chars().next()?)?;
        count += 1;
    }
    if count == NODE_COUNT {
        Some(nodes)
    } else {
        None
    }
}

/// The ordered, append-only model catalog. Indexed 0..len-1; names are not
/// required to be unique.
pub struct Catalog {
    models: Vec<SnakeModel>,
}

impl Catalog {
    /// The built-in model table.
    pub fn builtin() -> Self {
        let models = catalog::BUILTIN
            .iter()
            .map(|(name, letters)| {
                let nodes = nodes_from_letters(letters)
                    .expect("builtin model table is well-formed");
                SnakeModel::new(*name, nodes)
            })
            .collect();
        Self { models }
    }

    pub fn from_models(models: Vec<SnakeModel>) -> Self {
        Self { models }
    }

    /// Append models from a text file in the dump format, one per line.
    /// Lines starting with '#' and blank lines are skipped. Returns the
    /// number of models added.
    pub fn extend_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, Box<dyn Error>> {
        let content = fs::read_to_string(path)?;
        let mut added = 0;
        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            match SnakeModel::parse_line(trimmed) {
                Some(model) => {
                    self.models.push(model);
                    added += 1;
                }
                None => return Err(format!("bad model line: {:?}", trimmed).into()),
            }
        }
        Ok(added)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn get(&self, index: usize) -> &SnakeModel {
        &self.models[index]
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.models.iter().position(|m| m.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SnakeModel> {
        self.models.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_round_trip() {
        for node in [
            NodeAngle::Zero,
            NodeAngle::Left,
            NodeAngle::Pin,
            NodeAngle::Right,
        ] {
            assert_eq!(NodeAngle::from_letter(node.letter()), Some(node));
            assert_eq!(NodeAngle::from_degrees(node.degrees()), Some(node));
        }
        assert_eq!(NodeAngle::from_letter('X'), None);
        assert_eq!(NodeAngle::from_degrees(45.0), None);
    }

    #[test]
    fn degrees_wrap_to_canonical() {
        assert_eq!(NodeAngle::from_degrees(360.0), Some(NodeAngle::Zero));
        assert_eq!(NodeAngle::from_degrees(-90.0), Some(NodeAngle::Right));
    }

    #[test]
    fn quarter_turns() {
        assert_eq!(NodeAngle::Zero.turned(1), NodeAngle::Left);
        assert_eq!(NodeAngle::Right.turned(1), NodeAngle::Zero);
        assert_eq!(NodeAngle::Zero.turned(-1), NodeAngle::Right);
        assert_eq!(NodeAngle::Pin.turned(4), NodeAngle::Pin);
    }

    #[test]
    fn parse_model_line() {
        let line = "my shape: Z L P R Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z";
        let model = SnakeModel::parse_line(line).unwrap();
        assert_eq!(model.name, "my shape");
        assert_eq!(model.nodes[0], NodeAngle::Zero);
        assert_eq!(model.nodes[1], NodeAngle::Left);
        assert_eq!(model.nodes[2], NodeAngle::Pin);
        assert_eq!(model.nodes[3], NodeAngle::Right);
    }

    #[test]
    fn parse_rejects_bad_lines() {
        // too few tokens
        assert!(SnakeModel::parse_line("short: Z L P").is_none());
        // unknown letter
        let bad = "bad: X L P R Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z";
        assert!(SnakeModel::parse_line(bad).is_none());
        // comment and blank
        assert!(SnakeModel::parse_line("# comment").is_none());
        assert!(SnakeModel::parse_line("").is_none());
    }

    #[test]
    fn dump_round_trips_through_parse() {
        let model = SnakeModel::parse_line(
            "loop: R R L L R L R R L R L L R R L L R L R R L R L Z",
        )
        .unwrap();
        let line = dump_line(&model.name, &model.nodes);
        let reparsed = SnakeModel::parse_line(&line).unwrap();
        assert_eq!(reparsed, model);
    }

    #[test]
    fn builtin_catalog_loads() {
        let catalog = Catalog::builtin();
        assert!(catalog.len() > 200);
        let straight = catalog.index_of("straight").unwrap();
        assert_eq!(
            catalog.get(straight).nodes,
            [NodeAngle::Zero; NODE_COUNT]
        );
        assert!(catalog.index_of("ball").is_some());
        assert!(catalog.index_of("block").is_some());
    }
}
