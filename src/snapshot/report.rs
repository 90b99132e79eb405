//! Integritetskontroll av en ögonblicksbild
//!
//! Datan redigeras av många administratörer och kan inte antas vara ren.
//! Rapporten listar problemen men hindrar aldrig att datan används.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::models::{PersonId, PersonNode};
use crate::services::PersonIndex;

/// Ett enskilt fynd
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    DuplicateId { id: PersonId, occurrences: usize },
    DanglingFather { id: PersonId, father_id: PersonId },
    DanglingMother { id: PersonId, mother_id: PersonId },
    FatherCycle { ids: Vec<PersonId> },
    MalformedHid { id: PersonId, hid: String },
    InvalidRecord { id: PersonId, reason: String },
}

impl Finding {
    pub fn description(&self) -> String {
        match self {
            Self::DuplicateId { id, occurrences } => {
                format!("{} förekommer {} gånger, sista posten används", id, occurrences)
            }
            Self::DanglingFather { id, father_id } => {
                format!("{} har okänd far {}", id, father_id)
            }
            Self::DanglingMother { id, mother_id } => {
                format!("{} har okänd mor {}", id, mother_id)
            }
            Self::FatherCycle { ids } => {
                let chain: Vec<&str> = ids.iter().map(PersonId::as_str).collect();
                format!("Cykel i fäderneslinjen: {}", chain.join(" → "))
            }
            Self::MalformedHid { id, hid } => format!("{} har ogiltigt HID '{}'", id, hid),
            Self::InvalidRecord { id, reason } => format!("{}: {}", id, reason),
        }
    }
}

/// Resultat av en kontroll
#[derive(Debug, Clone, Default, Serialize)]
pub struct IntegrityReport {
    pub persons: usize,
    pub findings: Vec<Finding>,
}

impl IntegrityReport {
    pub fn check(nodes: &[PersonNode]) -> Self {
        let index = PersonIndex::build(nodes);
        let mut findings = Vec::new();

        // Dubbletter, i ordningen de först dök upp
        let mut occurrences: HashMap<&str, usize> = HashMap::new();
        for node in nodes {
            *occurrences.entry(node.id.as_str()).or_default() += 1;
        }
        for node in index.iter() {
            let count = occurrences.get(node.id.as_str()).copied().unwrap_or(0);
            if count > 1 {
                findings.push(Finding::DuplicateId {
                    id: node.id.clone(),
                    occurrences: count,
                });
            }
        }

        for node in index.iter() {
            if let Err(e) = node.validate() {
                findings.push(Finding::InvalidRecord {
                    id: node.id.clone(),
                    reason: e.to_string(),
                });
            }

            if let Some(father_id) = &node.father_id {
                if !index.contains(father_id.as_str()) {
                    findings.push(Finding::DanglingFather {
                        id: node.id.clone(),
                        father_id: father_id.clone(),
                    });
                }
            }

            if let Some(mother_id) = &node.mother_id {
                if !index.contains(mother_id.as_str()) {
                    findings.push(Finding::DanglingMother {
                        id: node.id.clone(),
                        mother_id: mother_id.clone(),
                    });
                }
            }

            if let Some(hid) = &node.hid {
                if !is_well_formed_hid(hid) {
                    findings.push(Finding::MalformedHid {
                        id: node.id.clone(),
                        hid: hid.clone(),
                    });
                }
            }
        }

        findings.extend(
            find_father_cycles(&index)
                .into_iter()
                .map(|ids| Finding::FatherCycle { ids }),
        );

        for finding in &findings {
            tracing::warn!("Ögonblicksbild: {}", finding.description());
        }

        Self {
            persons: index.len(),
            findings,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn summary(&self) -> String {
        if self.is_clean() {
            format!("{} personer, inga problem", self.persons)
        } else {
            format!("{} personer, {} problem", self.persons, self.findings.len())
        }
    }
}

fn is_well_formed_hid(hid: &str) -> bool {
    !hid.is_empty()
        && hid
            .split('.')
            .all(|segment| !segment.is_empty() && segment.chars().all(|c| c.is_ascii_digit()))
}

/// Hitta varje cykel i `father_id`-grafen en gång
///
/// Varje nod har högst en far, så varje vandring uppåt slutar antingen vid en
/// rot eller i exakt en cykel.
fn find_father_cycles(index: &PersonIndex) -> Vec<Vec<PersonId>> {
    let mut done: HashSet<&str> = HashSet::new();
    let mut cycles = Vec::new();

    for start in index.iter() {
        if done.contains(start.id.as_str()) {
            continue;
        }

        let mut path: Vec<&PersonNode> = Vec::new();
        let mut on_path: HashMap<&str, usize> = HashMap::new();
        let mut current = Some(start);

        while let Some(node) = current {
            let id = node.id.as_str();
            if done.contains(id) {
                break;
            }
            if let Some(&pos) = on_path.get(id) {
                cycles.push(path[pos..].iter().map(|p| p.id.clone()).collect());
                break;
            }
            on_path.insert(id, path.len());
            path.push(node);
            current = index.father(node);
        }

        done.extend(path.iter().map(|p| p.id.as_str()));
    }

    cycles
}
