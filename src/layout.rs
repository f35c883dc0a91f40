//! Layout module for tracking UI component regions
//!
//! The renderer records where each component landed in the last frame;
//! `region_at()` maps a mouse position back to the component under it.
//! Dropdowns are drawn on top of everything else, so they are tested first.

use ratatui::layout::{Position, Rect};

use crate::autocomplete::DropdownRegions;
use crate::field::FieldKind;

/// A clickable component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Input(FieldKind),
    /// A row of an open dropdown
    Suggestion { kind: FieldKind, index: usize },
    /// Dropdown border
    Dropdown(FieldKind),
    /// Publication year input
    Year,
    Results,
}

/// Component areas of the last rendered frame
#[derive(Debug, Clone, Default)]
pub struct LayoutRegions {
    pub fields: DropdownRegions,
    pub year: Option<Rect>,
    pub results: Option<Rect>,
}

/// Component at a screen position, if any
pub fn region_at(regions: &LayoutRegions, position: Position) -> Option<Region> {
    if let Some(kind) = regions.fields.dropdown_at(position) {
        let field = regions.fields.get(kind);
        let area = field.dropdown?;
        let inner_rows = area.y + 1..area.bottom().saturating_sub(1);
        let inner_cols = area.x + 1..area.right().saturating_sub(1);
        if inner_rows.contains(&position.y) && inner_cols.contains(&position.x) {
            return Some(Region::Suggestion {
                kind,
                index: field.dropdown_offset + (position.y - area.y - 1) as usize,
            });
        }
        return Some(Region::Dropdown(kind));
    }

    if let Some(kind) = regions.fields.input_at(position) {
        return Some(Region::Input(kind));
    }

    if regions.year.is_some_and(|area| area.contains(position)) {
        return Some(Region::Year);
    }

    regions
        .results
        .filter(|area| area.contains(position))
        .map(|_| Region::Results)
}
