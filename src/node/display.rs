//! A linear text rendering of the tree, for debugging and tests.
//!
//! This is not a layout engine - it writes each node out in a LaTeX-like notation so that a tree
//! can be compared against a short string.

use core::fmt;

use super::{Node, Row};

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.children.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Atom(a) => write!(f, "{}", a.value),
            Node::Frac(n) => write!(f, "\\frac{{{}}}{{{}}}", n.numerator, n.denominator),
            Node::SubSup(s) => {
                if let Some(sub) = &s.sub {
                    write!(f, "_{{{}}}", sub)?;
                }
                if let Some(sup) = &s.sup {
                    write!(f, "^{{{}}}", sup)?;
                }
                Ok(())
            }
            Node::Root(r) => match &r.index {
                Some(index) => write!(f, "\\sqrt[{}]{{{}}}", index, r.radicand),
                None => write!(f, "\\sqrt{{{}}}", r.radicand),
            },
            Node::Limits(l) => {
                write!(f, "{}_{{{}}}", l.inner, l.lower)?;
                if let Some(upper) = &l.upper {
                    write!(f, "^{{{}}}", upper)?;
                }
                Ok(())
            }
            Node::Delimited(d) => write!(f, "{}{}{}", d.left_delim.value, d.inner, d.right_delim.value),
            Node::Table(t) => {
                write!(f, "[")?;
                for (i, cell) in t.cells.iter().enumerate() {
                    if i > 0 {
                        if i % t.col_count == 0 {
                            write!(f, "\\\\")?;
                        } else {
                            write!(f, "&")?;
                        }
                    }
                    write!(f, "{}", cell)?;
                }
                write!(f, "]")
            }
        }
    }
}
