use std::fmt;

use silo_core::StockStore;

/// Human-readable stock listing, one line per key in first-seen order:
///
/// ```text
/// État du stock :
/// - A1 : 2 produits -> [A1_ID_1, A1_ID_0]
/// ```
pub struct StockReport<'a> {
    store: &'a StockStore,
}

impl<'a> StockReport<'a> {
    pub fn new(store: &'a StockStore) -> Self {
        Self { store }
    }
}

impl fmt::Display for StockReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "État du stock :")?;
        for queue in self.store.iter() {
            write!(f, "- {} : {} produits -> [", queue.key(), queue.len())?;
            for (i, item) in queue.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{item}")?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
