//! Exclusive ownership: each shape has a single owner and is released the
//! moment that owner goes out of scope or is dropped. There is no cleanup
//! call to forget.

use std::io::{self, Write};

use tracing::trace;

use crate::demo::report;
use crate::shape::{self, Shape};

pub fn run(out: &mut impl Write) -> io::Result<()> {
    // A plain value; borrowing it does not move ownership.
    let c = shape::circle("the hole", 2.0);
    let s: &Shape = &c;
    writeln!(out, "Borrowing the Circle as a Shape reference:")?;
    report(out, s)?;
    writeln!(out)?;
    drop(c);
    trace!("circle released");

    // A boxed shape; the box is the sole owner.
    let s1: Box<Shape> = Box::new(shape::rectangle("the table", 3.0, 4.0));
    writeln!(out, "Holding the Rectangle behind a Box:")?;
    report(out, &s1)?;
    writeln!(out)?;
    drop(s1);
    trace!("rectangle released");

    let q = Box::new(shape::square("the box", 1.0));
    writeln!(out, "Calling on the boxed Square directly:")?;
    report(out, &q)?;
    writeln!(out)?;

    // Moving the box transfers ownership; q is unusable from here on.
    let p: Box<Shape> = q;
    writeln!(out, "Calling through the handle the Square moved into:")?;
    report(out, &p)?;
    writeln!(out)?;
    drop(p);
    trace!("square released");

    // Dropping the box releases the whole Trapezoid, angled side included.
    let t: Box<Shape> = Box::new(shape::trapezoid("the stand", 4.0, 2.0, 1.0));
    writeln!(out, "Calling through the boxed Trapezoid:")?;
    report(out, &t)?;
    drop(t);
    trace!("trapezoid released");

    Ok(())
}
