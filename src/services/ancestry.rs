//! Anor via `father_id` och släktnamn

use std::collections::HashSet;

use crate::models::{LineageSettings, NameFormat, PersonNode, DEFAULT_MAX_DEPTH};

use super::person_index::PersonIndex;

/// Tjänst för att följa fäderneslinjen uppåt
pub struct AncestryResolver<'a> {
    index: &'a PersonIndex,
    max_depth: usize,
}

impl<'a> AncestryResolver<'a> {
    pub fn new(index: &'a PersonIndex) -> Self {
        Self {
            index,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_settings(index: &'a PersonIndex, settings: &LineageSettings) -> Self {
        Self {
            index,
            max_depth: settings.max_depth.max(1),
        }
    }

    /// Kedjan från startpersonen utåt mot roten, startpersonen först
    ///
    /// Stannar när fadern saknas eller inte är indexerad, när ett id
    /// återkommer, eller efter `max_depth` steg uppåt.
    pub fn chain(&self, start_id: &str) -> Vec<&'a PersonNode> {
        let Some(start) = self.index.get(start_id) else {
            return Vec::new();
        };

        let mut chain = vec![start];
        let mut seen: HashSet<&str> = HashSet::from([start.id.as_str()]);
        let mut current = start;

        while chain.len() <= self.max_depth {
            let Some(father) = self.index.father(current) else {
                break;
            };
            if !seen.insert(father.id.as_str()) {
                tracing::warn!("Cykel i fäderneslinjen vid {}", father.id);
                break;
            }
            chain.push(father);
            current = father;
        }

        chain
    }

    /// Bara förfäderna, utan startpersonen
    pub fn ancestors(&self, start_id: &str) -> Vec<&'a PersonNode> {
        self.chain(start_id).into_iter().skip(1).collect()
    }

    /// Namnen längs kedjan
    pub fn lineage_names(&self, start_id: &str) -> Vec<&'a str> {
        self.chain(start_id).into_iter().map(|p| p.name.as_str()).collect()
    }

    /// Generation: angiven på noden, annars kedjans längd (rot = 1)
    pub fn generation(&self, person_id: &str) -> Option<i32> {
        let person = self.index.get(person_id)?;
        if let Some(generation) = person.generation {
            return Some(generation);
        }
        i32::try_from(self.chain(person_id).len()).ok()
    }

    /// Fullständigt namn: "Namn <bindeord> Far Farfar ... Familjenamn"
    ///
    /// Bindeordet sätts bara efter det första namnet och bara när det finns
    /// minst en förfader.
    pub fn full_name(&self, person: &PersonNode, family_name: &str, format: &NameFormat) -> String {
        let ancestors = self.ancestors(person.id.as_str());
        let family_name = family_name.trim();

        let mut parts: Vec<&str> = Vec::with_capacity(ancestors.len() + 3);
        if format.include_own_name {
            parts.push(person.name.as_str());
            if !ancestors.is_empty() {
                parts.push(format.connector_for(person.gender));
            }
        }
        parts.extend(ancestors.iter().map(|p| p.name.as_str()));
        if format.include_family_name && !family_name.is_empty() {
            parts.push(family_name);
        }

        parts.join(" ")
    }

    /// Kort namn: närmaste släktled utan familjenamn
    pub fn common_name(&self, person: &PersonNode) -> String {
        self.full_name(person, "", &NameFormat::common())
    }
}
