//! Checking font data against the limits of the file format

use std::fmt::{self, Debug, Display};

/// Pre-write validation.
///
/// Some limits of the format, like 32-bit offsets or pixel buffers that must
/// match a glyph's dimensions, cannot be expressed in the types. Anything
/// that is about to be serialized is checked first, and every problem found
/// is reported at once.
pub trait Validate {
    /// Check this item, returning every problem found.
    fn validate(&self) -> Result<(), ValidationReport> {
        let mut ctx = ValidationCtx::default();
        self.validate_impl(&mut ctx);
        ctx.into_report().map_or(Ok(()), Err)
    }

    /// Report problems with this item into `ctx`.
    ///
    /// ```rust
    /// # use bitfont::validate::{Validate, ValidationCtx};
    /// struct Strip {
    ///     pixels: Vec<u8>,
    /// }
    ///
    /// impl Validate for Strip {
    ///     fn validate_impl(&self, ctx: &mut ValidationCtx) {
    ///         ctx.in_table("Strip", |ctx| {
    ///             ctx.in_field("pixels", |ctx| {
    ///                 if self.pixels.len() > u16::MAX as usize {
    ///                     ctx.report("strip is too long");
    ///                 }
    ///             })
    ///         })
    ///     }
    /// }
    ///
    /// assert!(Strip { pixels: vec![0; 4] }.validate().is_ok());
    /// ```
    fn validate_impl(&self, ctx: &mut ValidationCtx);
}

/// Collects problems along with the path to the data they were found in.
#[derive(Debug, Default)]
pub struct ValidationCtx {
    path: Vec<PathElem>,
    problems: Vec<Problem>,
}

/// The problems found by [`Validate::validate`].
///
/// A report always holds at least one problem.
#[derive(Clone)]
pub struct ValidationReport {
    problems: Vec<Problem>,
}

#[derive(Clone, Debug)]
struct Problem {
    message: String,
    path: Vec<PathElem>,
}

#[derive(Clone, Copy, Debug)]
enum PathElem {
    Table(&'static str),
    Field(&'static str),
    Index(usize),
}

impl ValidationCtx {
    /// Check a named structure.
    pub fn in_table(&mut self, name: &'static str, f: impl FnOnce(&mut ValidationCtx)) {
        self.scoped(PathElem::Table(name), f);
    }

    /// Check a field of the current structure.
    pub fn in_field(&mut self, name: &'static str, f: impl FnOnce(&mut ValidationCtx)) {
        self.scoped(PathElem::Field(name), f);
    }

    /// Check a sequence; each element is visited with [`array_item`].
    ///
    /// [`array_item`]: Self::array_item
    pub fn in_array(&mut self, f: impl FnOnce(&mut ValidationCtx)) {
        self.scoped(PathElem::Index(0), f);
    }

    /// Check the next element of the enclosing [`in_array`](Self::in_array).
    ///
    /// # Panics
    ///
    /// Panics if not called inside `in_array`.
    pub fn array_item(&mut self, f: impl FnOnce(&mut ValidationCtx)) {
        assert!(
            matches!(self.path.last(), Some(PathElem::Index(_))),
            "array_item called outside of in_array"
        );
        f(self);
        if let Some(PathElem::Index(i)) = self.path.last_mut() {
            *i += 1;
        }
    }

    /// Record a problem at the current path.
    pub fn report(&mut self, message: impl Display) {
        self.problems.push(Problem {
            message: message.to_string(),
            path: self.path.clone(),
        });
    }

    fn scoped(&mut self, elem: PathElem, f: impl FnOnce(&mut ValidationCtx)) {
        self.path.push(elem);
        f(self);
        self.path.pop();
    }

    fn into_report(self) -> Option<ValidationReport> {
        (!self.problems.is_empty()).then_some(ValidationReport {
            problems: self.problems,
        })
    }
}

impl ValidationReport {
    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// The messages of each problem, without their paths.
    pub fn messages(&self) -> impl Iterator<Item = &str> + '_ {
        self.problems.iter().map(|problem| problem.message.as_str())
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.problems.as_slice() {
            [problem] => write!(f, "font cannot be written: {problem}"),
            problems => {
                write!(f, "font cannot be written ({} problems):", problems.len())?;
                for problem in problems {
                    write!(f, "\n  {problem}")?;
                }
                Ok(())
            }
        }
    }
}

impl Debug for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

/// `message (in: Table.field[2].other)`
impl Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        let Some((PathElem::Table(root), rest)) = self.path.split_first() else {
            return Ok(());
        };
        write!(f, " (in: {root}")?;
        for elem in rest {
            match elem {
                PathElem::Table(name) => write!(f, " > {name}"),
                PathElem::Field(name) => write!(f, ".{name}"),
                PathElem::Index(i) => write!(f, "[{i}]"),
            }?;
        }
        f.write_str(")")
    }
}

impl<T: Validate> Validate for [T] {
    fn validate_impl(&self, ctx: &mut ValidationCtx) {
        ctx.in_array(|ctx| {
            for item in self {
                ctx.array_item(|ctx| item.validate_impl(ctx));
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    struct Item(u32);

    impl Validate for Item {
        fn validate_impl(&self, ctx: &mut ValidationCtx) {
            ctx.in_field("value", |ctx| {
                if self.0 > 10 {
                    ctx.report(format!("{} is too big", self.0));
                }
            })
        }
    }

    struct Container(Vec<Item>);

    impl Validate for Container {
        fn validate_impl(&self, ctx: &mut ValidationCtx) {
            ctx.in_table("Container", |ctx| {
                ctx.in_field("items", |ctx| self.0.validate_impl(ctx))
            })
        }
    }

    #[test]
    fn valid_data_has_no_report() {
        assert!(Container(vec![Item(1), Item(10)]).validate().is_ok());
    }

    #[test]
    fn problems_carry_their_path() {
        let report = Container(vec![Item(1), Item(11), Item(2), Item(12)])
            .validate()
            .unwrap_err();
        assert_eq!(report.len(), 2);
        assert_eq!(
            report.messages().collect::<Vec<_>>(),
            ["11 is too big", "12 is too big"]
        );
        assert_eq!(
            report.to_string(),
            "font cannot be written (2 problems):\n  \
             11 is too big (in: Container.items[1].value)\n  \
             12 is too big (in: Container.items[3].value)"
        );
    }

    #[test]
    fn single_problem_on_one_line() {
        let report = Container(vec![Item(20)]).validate().unwrap_err();
        assert_eq!(
            report.to_string(),
            "font cannot be written: 20 is too big (in: Container.items[0].value)"
        );
    }
}
