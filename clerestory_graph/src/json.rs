// Copyright 2026 the Clerestory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading a world document from JSON.
//!
//! The document shape mirrors the `owners.json` world files: a list of
//! owners, each with games (→ places → instances) and an inventory of
//! assets. Instances may declare the assets they consume under `uses`;
//! those become usage edges once all nodes are inserted.
//!
//! ```rust
//! use clerestory_graph::DomainGraph;
//! use clerestory_scope::{Scope, ScopeKind};
//!
//! let graph = DomainGraph::from_json_str(
//!     r#"{
//!       "owners": [{
//!         "id": "o1", "name": "Studio",
//!         "games": [{
//!           "id": "g1", "name": "Skyline",
//!           "places": [{
//!             "id": "p1", "name": "Lobby",
//!             "instances": [{ "id": "i1", "name": "SpawnPad", "uses": ["m1"] }]
//!           }]
//!         }],
//!         "inventory": {
//!           "id": "inv1",
//!           "assets": [{ "id": "m1", "name": "BrickMesh" }]
//!         }
//!       }]
//!     }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(graph.len(), 6);
//! assert_eq!(
//!     graph.usages_of("m1").map(|n| n.id().to_string()).collect::<Vec<_>>(),
//!     ["i1"]
//! );
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde::Deserialize;

use clerestory_scope::ScopeKind;

use crate::graph::{DomainGraph, GraphError};

/// A whole world document: the root of an `owners.json` file.
#[derive(Clone, Debug, Deserialize)]
pub struct WorldDoc {
    /// The principals owning everything else.
    #[serde(default)]
    pub owners: Vec<OwnerDoc>,
}

/// One principal and everything it owns.
#[derive(Clone, Debug, Deserialize)]
pub struct OwnerDoc {
    /// Unique node id.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Whether this principal is an account rather than an owner.
    #[serde(default)]
    pub account: bool,
    /// The principal's games.
    #[serde(default)]
    pub games: Vec<GameDoc>,
    /// The principal's inventory, if it has one.
    #[serde(default)]
    pub inventory: Option<InventoryDoc>,
}

/// A game and its places.
#[derive(Clone, Debug, Deserialize)]
pub struct GameDoc {
    /// Unique node id.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// The game's places.
    #[serde(default)]
    pub places: Vec<PlaceDoc>,
}

/// A place and its instances.
#[derive(Clone, Debug, Deserialize)]
pub struct PlaceDoc {
    /// Unique node id.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// The place's instances.
    #[serde(default)]
    pub instances: Vec<InstanceDoc>,
}

/// An instance, optionally consuming inventory assets.
#[derive(Clone, Debug, Deserialize)]
pub struct InstanceDoc {
    /// Unique node id.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Ids of the assets this instance consumes.
    #[serde(default)]
    pub uses: Vec<String>,
}

/// An inventory and its assets.
#[derive(Clone, Debug, Deserialize)]
pub struct InventoryDoc {
    /// Unique node id.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// The inventory's assets.
    #[serde(default)]
    pub assets: Vec<AssetDoc>,
}

/// One inventory asset.
#[derive(Clone, Debug, Deserialize)]
pub struct AssetDoc {
    /// Unique node id.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
}

/// Error produced while loading a world document.
#[derive(Debug)]
pub enum LoadError {
    /// The document is not valid JSON of the expected shape.
    Parse(serde_json::Error),
    /// The document describes a hierarchy the graph rejects.
    Graph(GraphError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "malformed world document: {err}"),
            Self::Graph(err) => write!(f, "inconsistent world document: {err}"),
        }
    }
}

impl core::error::Error for LoadError {}

impl From<GraphError> for LoadError {
    fn from(err: GraphError) -> Self {
        Self::Graph(err)
    }
}

impl DomainGraph {
    /// Builds a graph from a JSON world document.
    ///
    /// # Errors
    ///
    /// [`LoadError::Parse`] if the text is not a valid document,
    /// [`LoadError::Graph`] if the document's hierarchy or usage references
    /// are inconsistent.
    pub fn from_json_str(text: &str) -> Result<Self, LoadError> {
        let doc: WorldDoc = serde_json::from_str(text).map_err(LoadError::Parse)?;
        Self::from_world_doc(&doc)
    }

    /// Builds a graph from an already-parsed [`WorldDoc`].
    ///
    /// # Errors
    ///
    /// [`LoadError::Graph`] if the document's hierarchy or usage references
    /// are inconsistent.
    pub fn from_world_doc(doc: &WorldDoc) -> Result<Self, LoadError> {
        let mut graph = Self::new();

        // Two phases: nodes first, then usage edges, so an instance may
        // reference an asset declared later in the document.
        for owner in &doc.owners {
            let kind = if owner.account {
                ScopeKind::Account
            } else {
                ScopeKind::Owner
            };
            graph.insert_root(kind, owner.id.as_str(), owner.name.as_str())?;

            for game in &owner.games {
                graph.insert_child(
                    &owner.id,
                    ScopeKind::Game,
                    game.id.as_str(),
                    game.name.as_str(),
                )?;
                for place in &game.places {
                    graph.insert_child(
                        &game.id,
                        ScopeKind::Place,
                        place.id.as_str(),
                        place.name.as_str(),
                    )?;
                    for instance in &place.instances {
                        graph.insert_child(
                            &place.id,
                            ScopeKind::Instance,
                            instance.id.as_str(),
                            instance.name.as_str(),
                        )?;
                    }
                }
            }

            if let Some(inventory) = &owner.inventory {
                graph.insert_child(
                    &owner.id,
                    ScopeKind::Inventory,
                    inventory.id.as_str(),
                    inventory.name.as_str(),
                )?;
                for asset in &inventory.assets {
                    graph.insert_child(
                        &inventory.id,
                        ScopeKind::Asset,
                        asset.id.as_str(),
                        asset.name.as_str(),
                    )?;
                }
            }
        }

        for owner in &doc.owners {
            for game in &owner.games {
                for place in &game.places {
                    for instance in &place.instances {
                        for asset_id in &instance.uses {
                            graph.record_usage(&instance.id, asset_id)?;
                        }
                    }
                }
            }
        }

        Ok(graph)
    }
}
