//! Index över personer i en ögonblicksbild

use std::collections::HashMap;

use crate::models::{PersonId, PersonNode};

/// Uppslagsstruktur id → person, plus barnlistor via `father_id`
///
/// Byggs om från en ny ögonblicksbild vid varje större dataändring.
/// Dubbletter av samma id: den senare posten vinner.
#[derive(Debug, Clone, Default)]
pub struct PersonIndex {
    by_id: HashMap<PersonId, PersonNode>,
    // Första förekomst av varje id, för stabil iterationsordning
    order: Vec<PersonId>,
    children: HashMap<PersonId, Vec<PersonId>>,
}

impl PersonIndex {
    pub fn build(nodes: &[PersonNode]) -> Self {
        let mut by_id: HashMap<PersonId, PersonNode> = HashMap::with_capacity(nodes.len());
        let mut order = Vec::with_capacity(nodes.len());

        for node in nodes {
            if by_id.insert(node.id.clone(), node.clone()).is_none() {
                order.push(node.id.clone());
            }
        }

        // Barnlistor byggs från de vinnande posterna
        let mut children: HashMap<PersonId, Vec<PersonId>> = HashMap::new();
        for id in &order {
            if let Some(father_id) = by_id.get(id).and_then(|n| n.father_id.as_ref()) {
                children.entry(father_id.clone()).or_default().push(id.clone());
            }
        }

        tracing::debug!("Personindex byggt: {} personer ({} poster)", by_id.len(), nodes.len());

        Self {
            by_id,
            order,
            children,
        }
    }

    pub fn get(&self, id: &str) -> Option<&PersonNode> {
        self.by_id.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Alla personer i ordningen de först dök upp
    pub fn iter(&self) -> impl Iterator<Item = &PersonNode> {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }

    /// Fadern, om referensen finns och pekar på en indexerad person
    pub fn father(&self, person: &PersonNode) -> Option<&PersonNode> {
        person.father_id.as_ref().and_then(|id| self.get(id.as_str()))
    }

    pub fn mother(&self, person: &PersonNode) -> Option<&PersonNode> {
        person.mother_id.as_ref().and_then(|id| self.get(id.as_str()))
    }

    /// Id:n för alla vars `father_id` är `father_id`
    ///
    /// Fadern själv behöver inte finnas i indexet.
    pub fn child_ids(&self, father_id: &str) -> &[PersonId] {
        self.children.get(father_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Personer utan indexerad far (rötter i skogen)
    pub fn roots(&self) -> Vec<&PersonNode> {
        self.iter().filter(|p| self.father(p).is_none()).collect()
    }
}
