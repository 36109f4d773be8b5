//! Report Sections
//!
//! The fixed set of CCD report sections and their per-page visibility.

use std::collections::HashMap;

/// A CCD report section, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKey {
    AdvanceDirective,
    Allergy,
    Diagnosis,
    EncompassingEncounter,
    Encounters,
    FamilyHistory,
    FunctionalStatus,
    Goals,
    Implants,
    Immunizations,
    Medications,
    Patient,
    Payer,
    PlanOfCare,
    Problems,
    Procedures,
    Results,
    SocialHistory,
    VitalSigns,
}

impl SectionKey {
    pub const ALL: [SectionKey; 19] = [
        SectionKey::AdvanceDirective,
        SectionKey::Allergy,
        SectionKey::Diagnosis,
        SectionKey::EncompassingEncounter,
        SectionKey::Encounters,
        SectionKey::FamilyHistory,
        SectionKey::FunctionalStatus,
        SectionKey::Goals,
        SectionKey::Implants,
        SectionKey::Immunizations,
        SectionKey::Medications,
        SectionKey::Patient,
        SectionKey::Payer,
        SectionKey::PlanOfCare,
        SectionKey::Problems,
        SectionKey::Procedures,
        SectionKey::Results,
        SectionKey::SocialHistory,
        SectionKey::VitalSigns,
    ];

    /// Key sent to the backend (`getQS`)
    pub fn key(self) -> &'static str {
        match self {
            SectionKey::AdvanceDirective => "advanceDirective",
            SectionKey::Allergy => "allergy",
            SectionKey::Diagnosis => "diagnosis",
            SectionKey::EncompassingEncounter => "encompassingEncounter",
            SectionKey::Encounters => "encounters",
            SectionKey::FamilyHistory => "familyHistory",
            SectionKey::FunctionalStatus => "functionalStatus",
            SectionKey::Goals => "goals",
            SectionKey::Implants => "implants",
            SectionKey::Immunizations => "immunizations",
            SectionKey::Medications => "medications",
            SectionKey::Patient => "patient",
            SectionKey::Payer => "payer",
            SectionKey::PlanOfCare => "planOfCare",
            SectionKey::Problems => "problems",
            SectionKey::Procedures => "procedures",
            SectionKey::Results => "results",
            SectionKey::SocialHistory => "socialHistory",
            SectionKey::VitalSigns => "vitalSigns",
        }
    }

    /// Human-readable section title
    pub fn display(self) -> &'static str {
        match self {
            SectionKey::AdvanceDirective => "Advance Directive",
            SectionKey::Allergy => "Allergy",
            SectionKey::Diagnosis => "Diagnosis",
            SectionKey::EncompassingEncounter => "Encompassing Encounter",
            SectionKey::Encounters => "Encounters",
            SectionKey::FamilyHistory => "Family History",
            SectionKey::FunctionalStatus => "Functional Status",
            SectionKey::Goals => "Goals",
            SectionKey::Implants => "Implants",
            SectionKey::Immunizations => "Immunizations",
            SectionKey::Medications => "Medications",
            SectionKey::Patient => "Patient",
            SectionKey::Payer => "Payer",
            SectionKey::PlanOfCare => "Plan Of Care",
            SectionKey::Problems => "Problems",
            SectionKey::Procedures => "Procedures",
            SectionKey::Results => "Results",
            SectionKey::SocialHistory => "Social History",
            SectionKey::VitalSigns => "Vital Signs",
        }
    }
}

/// Visibility flag for every section. Always holds one entry per key.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionVisibility {
    flags: HashMap<SectionKey, bool>,
}

impl SectionVisibility {
    /// All sections collapsed
    pub fn new() -> Self {
        Self {
            flags: SectionKey::ALL.into_iter().map(|s| (s, false)).collect(),
        }
    }

    pub fn is_visible(&self, section: SectionKey) -> bool {
        self.flags.get(&section).copied().unwrap_or(false)
    }

    /// Flip one section, returning its new state
    pub fn toggle(&mut self, section: SectionKey) -> bool {
        let flag = self.flags.entry(section).or_insert(false);
        *flag = !*flag;
        *flag
    }
}

impl Default for SectionVisibility {
    fn default() -> Self {
        Self::new()
    }
}
