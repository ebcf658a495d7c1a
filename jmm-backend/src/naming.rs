//! Emitter-local label naming
//!
//! Materialising a comparison as a 0/1 value needs two labels of its own.
//! They are numbered per class so they never collide with each other, and
//! their `cmp_` prefix keeps them apart from the labels coming from the IR.

#[derive(Debug, Default)]
pub struct NameGenerator {
    next_label_id: u32,
}

impl NameGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(cmp_N_true, cmp_N_end)`
    pub fn comparison_labels(&mut self) -> (String, String) {
        let id = self.next_label_id;
        self.next_label_id += 1;
        (format!("cmp_{id}_true"), format!("cmp_{id}_end"))
    }
}
