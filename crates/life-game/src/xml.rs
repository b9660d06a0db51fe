//! XML state store.
//!
//! Layout:
//!
//! ```xml
//! <life>
//!   <world>
//!     <cells>5</cells>
//!     <species>2</species>
//!     <iterations>3</iterations>
//!   </world>
//!   <organisms>
//!     <organism>
//!       <x_pos>2</x_pos>
//!       <y_pos>0</y_pos>
//!       <species>1</species>
//!     </organism>
//!   </organisms>
//! </life>
//! ```

use crate::store::StateStore;
use life_core::{Error, GameState, Organism, Position, Result, SpeciesId};
use quick_xml::se::Serializer;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename = "life")]
struct LifeElement {
    world: WorldElement,
    #[serde(default)]
    organisms: OrganismsElement,
}

#[derive(Debug, Serialize, Deserialize)]
struct WorldElement {
    cells: i32,
    species: i32,
    iterations: i64,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct OrganismsElement {
    #[serde(default, rename = "organism")]
    organisms: Vec<OrganismElement>,
}

#[derive(Debug, Serialize, Deserialize)]
struct OrganismElement {
    x_pos: i32,
    y_pos: i32,
    species: u32,
}

impl From<&GameState> for LifeElement {
    fn from(state: &GameState) -> Self {
        Self {
            world: WorldElement {
                cells: state.cells_count,
                species: state.species_count,
                iterations: state.iterations_count,
            },
            organisms: OrganismsElement {
                organisms: state
                    .organisms
                    .iter()
                    .map(|organism| OrganismElement {
                        x_pos: organism.x(),
                        y_pos: organism.y(),
                        species: organism.species.0,
                    })
                    .collect(),
            },
        }
    }
}

impl From<LifeElement> for GameState {
    fn from(life: LifeElement) -> Self {
        let organisms = life
            .organisms
            .organisms
            .into_iter()
            .map(|element| {
                Organism::at(
                    Position::new(element.x_pos, element.y_pos),
                    SpeciesId(element.species),
                )
            })
            .collect();

        GameState::new(
            life.world.cells,
            life.world.species,
            life.world.iterations,
            organisms,
        )
    }
}

/// Parse a state from XML text. The state is not validated.
pub fn state_from_xml(xml: &str) -> Result<GameState> {
    let life: LifeElement = quick_xml::de::from_str(xml)
        .map_err(|e| Error::Serialization(format!("XML must be valid: {}", e)))?;
    Ok(life.into())
}

/// Render a state as an indented XML document
pub fn state_to_xml(state: &GameState) -> Result<String> {
    let mut xml = String::from(XML_DECLARATION);

    let mut serializer = Serializer::new(&mut xml);
    serializer.indent(' ', 2);
    LifeElement::from(state)
        .serialize(serializer)
        .map_err(|e| Error::Serialization(format!("Can not write the XML document: {}", e)))?;

    xml.push('\n');
    Ok(xml)
}

/// Reads the initial state from one XML file and keeps the latest snapshot
/// in another.
#[derive(Debug, Clone)]
pub struct XmlStateStore {
    input_path: PathBuf,
    output_path: PathBuf,
}

impl XmlStateStore {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }
}

impl StateStore for XmlStateStore {
    fn read_state(&mut self) -> Result<GameState> {
        let xml = std::fs::read_to_string(&self.input_path)?;
        let state = state_from_xml(&xml)?;
        state.validate()?;

        debug!(
            path = %self.input_path.display(),
            state = %state,
            organisms = state.organisms.len(),
            "State read"
        );
        Ok(state)
    }

    fn write_state(&mut self, state: &GameState) -> Result<()> {
        let xml = state_to_xml(state)?;
        std::fs::write(&self.output_path, xml)?;

        debug!(
            path = %self.output_path.display(),
            iteration = state.iterations_count,
            organisms = state.organisms.len(),
            "State written"
        );
        Ok(())
    }
}
