use crate::markers::Marker;

/// Which required markers a text contains.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    pub found: Vec<Marker>,
    pub missing: Vec<Marker>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Substring presence check for every required marker.
///
/// No parsing happens here: a document with all markers in the wrong order
/// still passes.
pub fn inspect(html: &str) -> ValidationReport {
    let (found, missing): (Vec<Marker>, Vec<Marker>) = Marker::ALL
        .iter()
        .copied()
        .partition(|marker| html.contains(marker.literal()));
    ValidationReport { found, missing }
}

pub fn validate(html: &str) -> bool {
    inspect(html).is_valid()
}
