// Output formatting — terminal display of lookup results.

pub mod terminal;
