/// Per-run wheel motion totals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    pub keypresses: u64,
    pub middle_steps: u64,
    pub left_steps: u64,
    pub double_steps: u64,
}
