//! # Filiaal: Branch Office Record
//!
//! [`FiliaalData`] is the validated, not-yet-persisted field set carried by
//! create and update requests. [`Filiaal`] is a persisted record: the same
//! fields plus the identifier the persistence layer assigned.

use rust_decimal::Decimal;

use crate::error::FieldErrors;
use crate::identity::FiliaalId;
use crate::validation;

/// Validated branch fields without an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiliaalData {
    naam: String,
    gemeente: String,
    omzet: Decimal,
}

impl FiliaalData {
    /// Validate raw input and build the field set.
    ///
    /// Every rule runs, so the error lists all violated fields, not only
    /// the first.
    pub fn new(
        naam: Option<String>,
        gemeente: Option<String>,
        omzet: Option<Decimal>,
    ) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let naam = validation::not_blank(&mut errors, "naam", naam);
        let gemeente = validation::not_blank(&mut errors, "gemeente", gemeente);
        let omzet = validation::positive_or_zero(&mut errors, "omzet", omzet);

        match (naam, gemeente, omzet) {
            (Some(naam), Some(gemeente), Some(omzet)) if errors.is_empty() => Ok(Self {
                naam,
                gemeente,
                omzet,
            }),
            _ => Err(errors),
        }
    }

    pub fn naam(&self) -> &str {
        &self.naam
    }

    pub fn gemeente(&self) -> &str {
        &self.gemeente
    }

    pub fn omzet(&self) -> Decimal {
        self.omzet
    }

    /// Attach an identifier, producing a persisted record.
    pub fn with_id(self, id: FiliaalId) -> Filiaal {
        Filiaal {
            id,
            naam: self.naam,
            gemeente: self.gemeente,
            omzet: self.omzet,
        }
    }
}

/// A persisted branch office.
///
/// Fields are private: the id never changes after construction, and an
/// update is expressed as a new `Filiaal` built with [`FiliaalData::with_id`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filiaal {
    id: FiliaalId,
    naam: String,
    gemeente: String,
    omzet: Decimal,
}

impl Filiaal {
    /// Rebuild a record from stored columns.
    ///
    /// Used by repositories when reading rows back; the table's own
    /// constraints guarantee the values were validated on the way in.
    pub fn from_parts(id: FiliaalId, naam: String, gemeente: String, omzet: Decimal) -> Self {
        Self {
            id,
            naam,
            gemeente,
            omzet,
        }
    }

    pub fn id(&self) -> FiliaalId {
        self.id
    }

    pub fn naam(&self) -> &str {
        &self.naam
    }

    pub fn gemeente(&self) -> &str {
        &self.gemeente
    }

    pub fn omzet(&self) -> Decimal {
        self.omzet
    }
}
