//! Plain-text solution report.

use std::fmt;
use std::io::{self, Write};

use knapforge_core::KnapsackSolution;

use crate::loader::Catalogue;

/// Text rendering of a solved selection.
///
/// # Example
///
/// ```
/// use knapforge_catalogue::SolveReport;
/// use knapforge_core::{Item, KnapsackSolution};
///
/// let items = vec![Item::new("A", 60, 10), Item::new("B", 100, 20)];
/// let solution = KnapsackSolution::from_indices(&items, vec![1]);
/// let text = SolveReport::new(&solution, 40).to_string();
///
/// assert!(text.starts_with("Capacity used: 50.00% (20/40)"));
/// assert!(text.contains("- B: value 100, weight 20"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SolveReport<'a> {
    solution: &'a KnapsackSolution,
    capacity: i64,
}

impl<'a> SolveReport<'a> {
    pub fn new(solution: &'a KnapsackSolution, capacity: i64) -> Self {
        Self { solution, capacity }
    }

    /// Writes the report to `writer`.
    pub fn write<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{self}")
    }
}

impl fmt::Display for SolveReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let selected = self.solution.total_weight();
        match self.solution.utilization(self.capacity) {
            Some(ratio) => writeln!(
                f,
                "Capacity used: {:.2}% ({}/{})",
                ratio * 100.0,
                selected,
                self.capacity
            )?,
            None => writeln!(f, "Capacity used: n/a ({}/{})", selected, self.capacity)?,
        }
        writeln!(f, "Maximum value: {}", self.solution.total_value())?;
        writeln!(f)?;
        if self.solution.is_empty() {
            return writeln!(f, "No items selected.");
        }
        writeln!(f, "Selected items:")?;
        for item in self.solution.items() {
            writeln!(
                f,
                "- {}: value {}, weight {}",
                item.name(),
                item.value(),
                item.weight()
            )?;
        }
        Ok(())
    }
}

/// Text listing of catalogue entries, one per line.
///
/// # Example
///
/// ```
/// use knapforge_catalogue::{Catalogue, CatalogueListing};
///
/// let catalogue: Catalogue = "Lamp,60,10,lamp.png\nChair,100,20,".parse().unwrap();
/// let text = CatalogueListing::new(&catalogue).to_string();
/// assert_eq!(
///     text,
///     "- Lamp: value 60, weight 10, image lamp.png\n- Chair: value 100, weight 20\n"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CatalogueListing<'a> {
    catalogue: &'a Catalogue,
}

impl<'a> CatalogueListing<'a> {
    pub fn new(catalogue: &'a Catalogue) -> Self {
        Self { catalogue }
    }

    /// Writes the listing to `writer`.
    pub fn write<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{self}")
    }
}

impl fmt::Display for CatalogueListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.catalogue.is_empty() {
            return writeln!(f, "No matching items.");
        }
        for entry in self.catalogue.entries() {
            let item = &entry.item;
            write!(
                f,
                "- {}: value {}, weight {}",
                item.name(),
                item.value(),
                item.weight()
            )?;
            if !entry.image.is_empty() {
                write!(f, ", image {}", entry.image)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
