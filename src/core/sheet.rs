use indexmap::IndexMap;
use serde::Serialize;

use crate::core::types::{GroupName, SampleId};

/// The parsed contents of a peakcall sample sheet.
///
/// `pairs` maps each ChIP sample to its paired input sample, or `None` when
/// the sample is peak-called without a control. `groups` maps each group to
/// the distinct ChIP samples assigned to it, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PeakCallSheet {
    pub pairs: IndexMap<SampleId, Option<SampleId>>,
    pub groups: IndexMap<GroupName, Vec<SampleId>>,
}

impl PeakCallSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one sample-sheet row.
    ///
    /// Each group is created on first sight and the ChIP sample is appended to
    /// it only if not already a member. The pairing for `chip` is overwritten,
    /// so the last row for a given ChIP sample wins.
    pub fn add_row<I>(&mut self, chip: SampleId, input: Option<SampleId>, groups: I)
    where
        I: IntoIterator<Item = GroupName>,
    {
        for group in groups {
            let members = self.groups.entry(group).or_default();
            if !members.contains(&chip) {
                members.push(chip.clone());
            }
        }

        self.pairs.insert(chip, input);
    }

    /// Paired input sample for a ChIP sample.
    ///
    /// Returns `None` both for unknown samples and for ChIP-only samples; use
    /// [`PeakCallSheet::is_chip_only`] to tell them apart.
    #[must_use]
    pub fn input_for(&self, chip: &str) -> Option<&SampleId> {
        self.pairs.get(chip).and_then(Option::as_ref)
    }

    /// Whether `chip` is a known ChIP sample without a paired input
    #[must_use]
    pub fn is_chip_only(&self, chip: &str) -> bool {
        matches!(self.pairs.get(chip), Some(None))
    }

    #[must_use]
    pub fn samples_in(&self, group: &str) -> Option<&[SampleId]> {
        self.groups.get(group).map(Vec::as_slice)
    }

    /// Groups that contain `chip`, in group-table order
    #[must_use]
    pub fn groups_for(&self, chip: &str) -> Vec<&GroupName> {
        self.groups
            .iter()
            .filter(|(_, members)| members.iter().any(|m| m.as_str() == chip))
            .map(|(group, _)| group)
            .collect()
    }

    pub fn group_names(&self) -> impl Iterator<Item = &GroupName> {
        self.groups.keys()
    }

    pub fn chip_only_samples(&self) -> impl Iterator<Item = &SampleId> {
        self.pairs
            .iter()
            .filter(|(_, input)| input.is_none())
            .map(|(chip, _)| chip)
    }

    /// Number of ChIP samples
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
