//! Temporary and label numbering
//!
//! One allocator lives for exactly one compilation unit. Temporaries and
//! labels are numbered by independent, monotonically increasing counters that
//! are never rewound while the unit is being lowered.

use crate::ir::{Label, LabelKind};

#[derive(Debug, Default)]
pub struct IdAllocator {
    next_temp: u32,
    next_label: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start numbering from zero for a new compilation unit
    pub fn reset(&mut self) {
        self.next_temp = 0;
        self.next_label = 0;
    }

    /// Allocate the next `tmpN` name
    pub fn new_temp_name(&mut self) -> String {
        let name = format!("tmp{}", self.next_temp);
        self.next_temp += 1;
        name
    }

    /// Allocate one label number; the caller builds the matching pair from it
    pub fn new_label_id(&mut self) -> u32 {
        let id = self.next_label;
        self.next_label += 1;
        id
    }

    /// `(ifbody_N, endif_N)`
    pub fn new_if_labels(&mut self) -> (Label, Label) {
        let id = self.new_label_id();
        (Label::new(LabelKind::IfBody, id), Label::new(LabelKind::EndIf, id))
    }

    /// `(whilebody_N, endwhile_N)`
    pub fn new_while_labels(&mut self) -> (Label, Label) {
        let id = self.new_label_id();
        (Label::new(LabelKind::WhileBody, id), Label::new(LabelKind::EndWhile, id))
    }
}
