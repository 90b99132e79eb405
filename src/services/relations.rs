//! Räkning av barn, syskon och ättlingar

use std::collections::HashSet;

use serde::Serialize;

use crate::models::PersonNode;

use super::ordering::sort_siblings_oldest_first;
use super::person_index::PersonIndex;

/// Nyckeltal för en persons profil
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RelationSummary {
    pub children: usize,
    pub siblings: usize,
    pub descendants: usize,
}

/// Tjänst för relationer nedåt och i sidled
pub struct RelationCounter<'a> {
    index: &'a PersonIndex,
}

impl<'a> RelationCounter<'a> {
    pub fn new(index: &'a PersonIndex) -> Self {
        Self { index }
    }

    /// Alla vars `father_id` är `person_id`, i ögonblicksbildens ordning
    pub fn children_of(&self, person_id: &str) -> Vec<&'a PersonNode> {
        let index = self.index;
        index
            .child_ids(person_id)
            .iter()
            .filter_map(|id| index.get(id.as_str()))
            .collect()
    }

    /// Barn, men bara om föräldern är indexerad och man
    pub fn male_children_of(&self, person_id: &str) -> Vec<&'a PersonNode> {
        match self.index.get(person_id) {
            Some(parent) if parent.is_male() => self.children_of(person_id),
            _ => Vec::new(),
        }
    }

    /// Barn sorterade äldst först
    pub fn sorted_children(&self, person_id: &str) -> Vec<&'a PersonNode> {
        sort_siblings_oldest_first(self.children_of(person_id))
    }

    /// Faderns övriga barn
    pub fn siblings_of(&self, person_id: &str) -> Vec<&'a PersonNode> {
        let Some(father_id) = self.index.get(person_id).and_then(|p| p.father_id.as_ref()) else {
            return Vec::new();
        };

        self.children_of(father_id.as_str())
            .into_iter()
            .filter(|p| p.id.as_str() != person_id)
            .collect()
    }

    /// Antal ättlingar
    ///
    /// Förberäknat `descendants_count` från persistenslagret har företräde.
    /// Annars räknas varje unik ättling en gång; besökta id:n spåras så att
    /// cykler i datan inte ger oändliga loopar.
    pub fn descendant_count(&self, person_id: &str) -> usize {
        let Some(person) = self.index.get(person_id) else {
            return 0;
        };
        if let Some(count) = person.descendants_count {
            return count as usize;
        }

        let mut visited: HashSet<&str> = HashSet::from([person_id]);
        let mut stack: Vec<&str> = vec![person_id];
        let mut count = 0;

        while let Some(current) = stack.pop() {
            for child_id in self.index.child_ids(current) {
                if visited.insert(child_id.as_str()) {
                    count += 1;
                    stack.push(child_id.as_str());
                }
            }
        }

        count
    }

    /// Antal syskon via fadern, 0 för personer utan far
    pub fn sibling_count(&self, person_id: &str) -> usize {
        let Some(father_id) = self.index.get(person_id).and_then(|p| p.father_id.as_ref()) else {
            return 0;
        };
        self.index
            .child_ids(father_id.as_str())
            .len()
            .saturating_sub(1)
    }

    pub fn summary(&self, person_id: &str) -> RelationSummary {
        RelationSummary {
            children: self.index.child_ids(person_id).len(),
            siblings: self.sibling_count(person_id),
            descendants: self.descendant_count(person_id),
        }
    }
}
