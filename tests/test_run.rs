use std::f64::consts::PI;
use std::io;

use pretty_assertions::assert_eq;

use planar::demo;

fn transcript(run: fn(&mut Vec<u8>) -> io::Result<()>) -> String {
    let mut out = Vec::new();
    run(&mut out).expect("walkthrough failed");
    String::from_utf8(out).expect("walkthrough wrote invalid utf-8")
}

#[test]
fn owned_walkthrough_transcript() {
    let expected = format!(
        "Borrowing the Circle as a Shape reference:
The area of the hole is: {circle}
The perimeter of the hole is: {circle}

Holding the Rectangle behind a Box:
The area of the table is: 12
The perimeter of the table is: 14

Calling on the boxed Square directly:
The square of 1!
The area of the box is: 1
The perimeter of the box is: 4

Calling through the handle the Square moved into:
The square of 1!
The area of the box is: 1
The perimeter of the box is: 4

Calling through the boxed Trapezoid:
The area of the stand is: 3
The perimeter of the stand is: {trapezoid}
",
        circle = 2.0 * 2.0 * PI,
        trapezoid = 6.0 + 2.0 * 2f64.sqrt(),
    );

    assert_eq!(transcript(demo::owned::run), expected);
}

#[test]
fn shared_walkthrough_transcript() {
    let expected = format!(
        "Borrowing the shared Circle as a Shape reference:
The area of the hole is: {circle}
The perimeter of the hole is: {circle}

Calling through a second handle to the Rectangle:
The area of the table is: 20
The perimeter of the table is: 18

Calling on the shared Square directly:
The square of 1!
The area of the box is: 1
The perimeter of the box is: 4

Calling through the cloned handle to the Square:
The square of 1!
The area of the box is: 1
The perimeter of the box is: 4

Calling through the reassigned handle to the Trapezoid:
The area of the stand is: 3
The perimeter of the stand is: {trapezoid}
",
        circle = 2.0 * 2.0 * PI,
        trapezoid = 6.0 + 2.0 * 2f64.sqrt(),
    );

    assert_eq!(transcript(demo::shared::run), expected);
}

#[test]
fn square_announces_each_area_query() {
    for run in [
        demo::owned::run as fn(&mut Vec<u8>) -> io::Result<()>,
        demo::shared::run,
    ] {
        let transcript = transcript(run);
        // The square's area is queried twice in each walkthrough.
        assert_eq!(transcript.matches("The square of 1!").count(), 2);
    }
}
