//! JSON descriptions of a position, loaded into a [`Table`].
//!
//! ```json
//! {
//!   "routes": [[0, 1, "taxi"], [1, 2, "bus"], [0, 2, "ferry"]],
//!   "fugitive": { "at": 0 },
//!   "pursuers": [{ "colour": "red", "at": 2 }],
//!   "travels": [{ "ticket": "taxi", "location": null }]
//! }
//! ```
//!
//! `reveals` defaults to the standard schedule and ticket inventories to
//! the standard ones.
use crate::*;
use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub routes: Vec<(Node, Node, Transport)>,
    #[serde(default)]
    pub reveals: Option<Vec<bool>>,
    pub fugitive: Stance,
    #[serde(default)]
    pub pursuers: Vec<Pursuer>,
    #[serde(default)]
    pub travels: Vec<Entry>,
}

/// Where the fugitive stands, and what it holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stance {
    pub at: Node,
    #[serde(default)]
    pub tickets: Option<Tickets>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pursuer {
    pub colour: Colour,
    pub at: Node,
    #[serde(default)]
    pub tickets: Option<Tickets>,
}

impl Scenario {
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing scenario {}", path.display()))
    }
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// The position as a table with the fugitive to move.
    pub fn table(&self) -> anyhow::Result<Table> {
        let map = self.routes.iter().copied().collect::<Map>();
        let setup = match self.reveals {
            Some(ref reveals) => Setup::new(map, reveals.clone()),
            None => Setup::standard(map),
        };
        let ref map = setup.map;
        anyhow::ensure!(
            map.contains(self.fugitive.at),
            "fugitive starts off the map at {}",
            self.fugitive.at
        );
        let mut colours = BTreeSet::new();
        for pursuer in self.pursuers.iter() {
            anyhow::ensure!(
                colours.insert(pursuer.colour),
                "{:?} pursuer listed twice",
                pursuer.colour
            );
            anyhow::ensure!(
                map.contains(pursuer.at),
                "{:?} pursuer starts off the map at {}",
                pursuer.colour,
                pursuer.at
            );
            if let Some(ref tickets) = pursuer.tickets {
                anyhow::ensure!(
                    Ticket::all().into_iter().filter(Ticket::is_scarce).all(|t| !tickets.has(t)),
                    "{:?} pursuer holds fugitive-only tickets",
                    pursuer.colour
                );
            }
        }
        anyhow::ensure!(
            self.travels.len() <= setup.rounds(),
            "travel log is longer than the game"
        );
        let tickets = self
            .fugitive
            .tickets
            .clone()
            .unwrap_or_else(|| Tickets::fugitive(self.pursuers.len()));
        let table = self
            .pursuers
            .iter()
            .fold(Table::new(setup, self.fugitive.at, tickets), |table, p| {
                let tickets = p.tickets.clone().unwrap_or_else(Tickets::pursuer);
                table.with_pursuer(p.colour, p.at, tickets)
            })
            .with_travels(self.travels.clone());
        Ok(table)
    }
}
