//! Statistics categories shared by every instrumented component.
//!
//! A category is a plain number drawn from the range of the owning package, see
//! [`statistics_category_begin_range`](crate::package::statistics_category_begin_range).
//! Records carry their category so a statistics pipeline can tell them apart without
//! knowing their concrete type.

/// Tag identifying the concrete type of a statistics record.
pub type StatisticsCategory = u32;

/// Common surface of statistics records.
pub trait Statistics {
    /// The category this record was stamped with.
    fn category(&self) -> StatisticsCategory;

    /// Zeroes the accumulated values, keeping the category.
    fn reset(&mut self);
}
