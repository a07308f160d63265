//! Human readable output for [`OrderedSet`]: the elements one per line, or the
//! tree's shape rotated a quarter turn to the left.

use std::fmt::Display;
use std::io::{self, Write};

use crate::{OrderedSet, Result};

/// Layout options for [`OrderedSet::print_structure_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StructureStyle {
    /// Spaces of indentation added per level of depth.
    pub indent: usize,
}

impl Default for StructureStyle {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

impl<T: Display> OrderedSet<T> {
    /// Writes every element to stdout, one per line, in ascending order.
    pub fn print(&self) -> Result<()> {
        self.print_to(io::stdout().lock())
    }

    /// Writes every element to `out`, one per line, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::OrderedSet;
    ///
    /// let set: OrderedSet<_> = [2, 3, 1].into_iter().collect();
    /// let mut out = Vec::new();
    /// set.print_to(&mut out).unwrap();
    ///
    /// assert_eq!(String::from_utf8(out).unwrap(), "1\n2\n3\n");
    /// ```
    pub fn print_to<W: Write>(&self, mut out: W) -> Result<()> {
        let mut result = Ok(());
        self.traverse(|x| {
            if result.is_ok() {
                result = writeln!(out, "{}", x);
            }
        });
        result?;
        out.flush()?;
        Ok(())
    }

    /// Writes the shape of the tree to stdout. See
    /// [`print_structure_with`][OrderedSet::print_structure_with].
    pub fn print_structure(&self) -> Result<()> {
        self.print_structure_to(io::stdout().lock())
    }

    /// Writes the shape of the tree to `out` using the default
    /// [`StructureStyle`].
    pub fn print_structure_to<W: Write>(&self, out: W) -> Result<()> {
        self.print_structure_with(out, &StructureStyle::default())
    }

    /// Writes the shape of the tree to `out`. Tilt your head to the left to
    /// read it: the right subtree comes first, then the node, then the left
    /// subtree, each line indented by `style.indent` spaces per level of
    /// depth.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::{OrderedSet, StructureStyle};
    ///
    /// let set: OrderedSet<_> = [2, 1, 3].into_iter().collect();
    /// let mut out = Vec::new();
    /// set.print_structure_with(&mut out, &StructureStyle { indent: 4 }).unwrap();
    ///
    /// assert_eq!(String::from_utf8(out).unwrap(), "    3\n2\n    1\n");
    /// ```
    pub fn print_structure_with<W: Write>(&self, mut out: W, style: &StructureStyle) -> Result<()> {
        if let Some(root) = &self.root {
            root.traverse_rev_with_depth(0, &mut |x: &T, depth| {
                writeln!(out, "{:indent$}{}", "", x, indent = style.indent * depth)?;
                Ok(())
            })?;
        }
        out.flush()?;
        Ok(())
    }
}
