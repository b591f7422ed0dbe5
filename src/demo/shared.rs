//! Shared ownership: shapes live behind `Rc`, handles are cloned and
//! reassigned freely, and a shape is released when its last handle drops.

use std::io::{self, Write};
use std::rc::Rc;

use tracing::trace;

use crate::demo::report;
use crate::shape::{self, Shape};

pub fn run(out: &mut impl Write) -> io::Result<()> {
    let c = Rc::new(shape::circle("the hole", 2.0));
    // Dereferencing the Rc borrows the shape it owns.
    let s: &Shape = &c;
    writeln!(out, "Borrowing the shared Circle as a Shape reference:")?;
    report(out, s)?;
    writeln!(out)?;

    // A uniquely owned rectangle, deliberately left unused; it is still
    // released at scope exit.
    let _r1 = Box::new(shape::rectangle("the table", 3.0, 4.0));

    let r = Rc::new(shape::rectangle("the table", 4.0, 5.0));
    let s1 = Rc::clone(&r);
    trace!(count = Rc::strong_count(&r), "rectangle handles");
    writeln!(out, "Calling through a second handle to the Rectangle:")?;
    report(out, &s1)?;
    writeln!(out)?;

    let q = Rc::new(shape::square("the box", 1.0));
    let mut p = Rc::clone(&q);
    writeln!(out, "Calling on the shared Square directly:")?;
    report(out, &q)?;
    writeln!(out)?;
    writeln!(out, "Calling through the cloned handle to the Square:")?;
    report(out, &p)?;
    writeln!(out)?;

    // Reassigning p drops its hold on the square and shares the trapezoid.
    let t = Rc::new(shape::trapezoid("the stand", 4.0, 2.0, 1.0));
    p = Rc::clone(&t);
    trace!(count = Rc::strong_count(&t), "trapezoid handles");
    writeln!(out, "Calling through the reassigned handle to the Trapezoid:")?;
    report(out, &p)?;

    Ok(())
}
